//! In-session search over navigation labels and the product catalog.
//!
//! Matching is literal, case-insensitive substring containment; there is
//! no ranking, tokenization or fuzzy logic. Labels are resolved through
//! the live language on every run, so results follow a language toggle
//! without any cache invalidation. The whole thing recomputes per
//! keystroke, which is fine at this catalog size.

use std::collections::HashSet;

use api::Product;
use once_cell::sync::Lazy;

use crate::core::nav::{self, Category, NavItem, NavLabel};
use crate::i18n;

/// Upper bound on product hits; further matches are truncated.
pub const MAX_PRODUCT_MATCHES: usize = 4;

/// A navigation label that matched, with the category it dispatches to.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryMatch {
    pub label: String,
    pub category: Category,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchResults {
    pub categories: Vec<CategoryMatch>,
    pub products: Vec<Product>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.products.is_empty()
    }
}

/// `(label, owning category)` pairs flattened once from every section
/// reachable from every top-level selector, in authored order. Shared
/// sections appear once per referencing selector; the resolved-label
/// dedup in [`search`] collapses them (first occurrence wins).
static NAV_INDEX: Lazy<Vec<(NavLabel, Category)>> = Lazy::new(|| {
    let mut index = Vec::new();
    for top in nav::MAIN_NAV {
        for section in nav::sections_for(top.key) {
            flatten_items(section.items, section.category, &mut index);
        }
    }
    index
});

fn flatten_items(items: &'static [NavItem], category: Category, out: &mut Vec<(NavLabel, Category)>) {
    for item in items {
        out.push((item.label, category));
        flatten_items(item.children, category, out);
    }
}

/// Run the matcher against the navigation index and `products`.
///
/// A trimmed query of length ≤ 1 returns empty result lists — the "no
/// search yet" state, not an error. Product names resolve through the
/// live language, so the same query can match differently after a toggle.
pub fn search(query: &str, products: &[Product]) -> SearchResults {
    search_with(query, products, NavLabel::resolve, |p| i18n::tr(&p.name_key))
}

fn search_with(
    query: &str,
    products: &[Product],
    resolve_label: impl Fn(&NavLabel) -> String,
    resolve_name: impl Fn(&Product) -> String,
) -> SearchResults {
    let trimmed = query.trim();
    if trimmed.chars().count() <= 1 {
        return SearchResults::default();
    }
    let needle = trimmed.to_lowercase();

    let mut seen = HashSet::new();
    let mut categories = Vec::new();
    for (label, category) in NAV_INDEX.iter() {
        let text = resolve_label(label);
        if !seen.insert(text.clone()) {
            continue;
        }
        if text.to_lowercase().contains(&needle) {
            categories.push(CategoryMatch { label: text, category: *category });
        }
    }

    let products = products
        .iter()
        .filter(|product| resolve_name(product).to_lowercase().contains(&needle))
        .take(MAX_PRODUCT_MATCHES)
        .cloned()
        .collect();

    SearchResults { categories, products }
}
