//! Data-authoring invariants for the static navigation tree and catalog.
//! These hold by construction; violating one is an authoring mistake that
//! should fail the build here instead of misbehaving at runtime.

use std::collections::HashSet;

use ui::core::catalog;
use ui::core::nav::{self, NavItem, NavLabel};

const EN_US: &str = include_str!("../i18n/en-US/chic44-ui.ftl");

fn assert_unique_sibling_keys(items: &[NavItem], path: &str) {
    let mut seen = HashSet::new();
    for item in items {
        assert!(
            seen.insert(item.key),
            "duplicate sibling key `{}` under {path}",
            item.key
        );
        assert_unique_sibling_keys(item.children, &format!("{path}/{}", item.key));
    }
}

fn collect_label_keys(items: &[NavItem], out: &mut Vec<&'static str>) {
    for item in items {
        if let NavLabel::Key(key) = item.label {
            out.push(key);
        }
        collect_label_keys(item.children, out);
    }
}

fn has_translation(key: &str) -> bool {
    EN_US
        .lines()
        .map(str::trim)
        .any(|line| line.strip_prefix(key).map_or(false, |rest| rest.trim_start().starts_with('=')))
}

#[test]
fn nav_item_keys_are_unique_among_siblings() {
    for top in nav::MAIN_NAV {
        for section in nav::sections_for(top.key) {
            assert_unique_sibling_keys(section.items, top.key);
        }
    }
}

#[test]
fn top_level_selectors_are_unique() {
    let mut seen = HashSet::new();
    for top in nav::MAIN_NAV {
        assert!(seen.insert(top.key), "duplicate selector `{}`", top.key);
    }
}

#[test]
fn every_nav_label_key_is_translated() {
    let mut keys = Vec::new();
    for top in nav::MAIN_NAV {
        if let NavLabel::Key(key) = top.label {
            keys.push(key);
        }
        for section in nav::sections_for(top.key) {
            if let NavLabel::Key(key) = section.title {
                keys.push(key);
            }
            if let Some(promo) = &section.promo {
                keys.push(promo.alt_key);
                keys.push(promo.title_key);
            }
            collect_label_keys(section.items, &mut keys);
        }
    }

    for key in keys {
        assert!(has_translation(key), "nav label key `{key}` missing from en-US");
    }
}

#[test]
fn every_catalog_product_is_translated() {
    for product in catalog::products() {
        assert!(
            has_translation(&product.name_key),
            "product name key `{}` missing from en-US",
            product.name_key
        );
        assert!(
            has_translation(&product.description_key),
            "product description key `{}` missing from en-US",
            product.description_key
        );
    }
}
