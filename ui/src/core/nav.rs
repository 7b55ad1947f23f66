//! Navigation data and the menu model.
//!
//! The category tree is hand-authored, static data: a small arena of named
//! [`NavSection`] values plus per-selector lists of references into it.
//! The bags and accessories sections are shared between the `woman` and
//! `man` selectors by reference, so an edit to either section shows up
//! under both top-level entries.
//!
//! Sibling-key uniqueness is a data-authoring invariant checked by tests,
//! not at runtime (see `ui/tests/menu_data.rs`).

use crate::i18n;

/// Token dispatched when the user picks a category. Opaque to this crate
/// beyond passing it through to the navigation handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Bags,
    Clothing,
    Accessories,
}

/// Token dispatched when the user picks a page from the chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Profile,
    Cart,
}

/// A navigation label: either a localization key resolved against the
/// live language, or a literal product-line name that is never translated
/// ("Morral Lona Lens" is a product line, not a word).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavLabel {
    Key(&'static str),
    Text(&'static str),
}

impl NavLabel {
    pub fn resolve(&self) -> String {
        match self {
            NavLabel::Key(key) => i18n::tr(key),
            NavLabel::Text(text) => (*text).to_string(),
        }
    }
}

/// One entry in a section's tree. `children` nests arbitrarily, though the
/// authored data never goes past one extra level.
#[derive(Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: NavLabel,
    /// Stable key, unique among siblings.
    pub key: &'static str,
    pub children: &'static [NavItem],
}

/// Promotional panel shown at the right edge of a desktop flyout.
#[derive(Debug, PartialEq, Eq)]
pub struct Promo {
    pub image_url: &'static str,
    pub alt_key: &'static str,
    pub title_key: &'static str,
}

/// A column of the flyout / a block of the mobile accordion.
#[derive(Debug, PartialEq, Eq)]
pub struct NavSection {
    pub title: NavLabel,
    pub category: Category,
    pub items: &'static [NavItem],
    pub promo: Option<Promo>,
}

/// A top-level header entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopLevelNav {
    /// Selector key looked up via [`sections_for`].
    pub key: &'static str,
    pub label: NavLabel,
}

/// Ordered top-level navigation. `discounts` has no sections on purpose:
/// it renders as a plain entry with no flyout.
pub const MAIN_NAV: &[TopLevelNav] = &[
    TopLevelNav { key: "woman", label: NavLabel::Key("nav-woman") },
    TopLevelNav { key: "man", label: NavLabel::Key("nav-man") },
    TopLevelNav { key: "discounts", label: NavLabel::Key("nav-discounts") },
];

const fn item(label_key: &'static str, key: &'static str) -> NavItem {
    NavItem { label: NavLabel::Key(label_key), key, children: &[] }
}

static MORRAL_LONA_LINES: [NavItem; 3] = [
    NavItem { label: NavLabel::Text("Morral Lona Lens"), key: "lens", children: &[] },
    NavItem { label: NavLabel::Text("Morral Lona Maoss"), key: "maoss", children: &[] },
    NavItem { label: NavLabel::Text("Morral Lona Motta"), key: "motta", children: &[] },
];

// Section arena. Shared values live here once; the per-selector lists
// below reference them.

static BAGS: NavSection = NavSection {
    title: NavLabel::Key("category-bags"),
    category: Category::Bags,
    items: &[
        item("subcategory-bags-office", "office"),
        item("subcategory-bags-purses", "purses"),
        item("subcategory-bags-crossbody", "crossbody"),
        item("subcategory-bags-baul", "baul"),
        item("subcategory-bags-morral-fashion", "morral_fashion"),
        NavItem {
            label: NavLabel::Key("subcategory-bags-morral-lona"),
            key: "morral_lona",
            children: &MORRAL_LONA_LINES,
        },
        item("subcategory-bags-maletin", "maletin"),
        item("subcategory-bags-deportivo", "deportivo"),
    ],
    promo: Some(Promo {
        image_url: "https://res.cloudinary.com/dt1rhz43z/image/upload/v1762976063/2_sjgw7w.png",
        alt_key: "subcategory-bags-morral-fashion",
        title_key: "subcategory-bags-morral-fashion",
    }),
};

static ACCESSORIES: NavSection = NavSection {
    title: NavLabel::Key("category-accessories"),
    category: Category::Accessories,
    items: &[
        item("subcategory-accessories-tula", "tula"),
        item("subcategory-accessories-rinonera", "rinonera"),
        item("subcategory-accessories-lonchera", "lonchera"),
        item("subcategory-accessories-billetera", "billetera"),
        item("subcategory-accessories-monedero", "monedero"),
        item("subcategory-accessories-tarjetero", "tarjetero"),
        item("subcategory-accessories-gorra", "gorra"),
        item("subcategory-accessories-cinturon", "cinturon"),
    ],
    promo: None,
};

static WOMAN_CLOTHING: NavSection = NavSection {
    title: NavLabel::Key("category-clothing"),
    category: Category::Clothing,
    items: &[
        item("subcategory-clothing-blusa", "blusa"),
        item("subcategory-clothing-pantalon", "pantalon"),
        item("subcategory-clothing-jeans", "jeans"),
        item("subcategory-clothing-falda", "falda"),
        item("subcategory-clothing-vestido", "vestido"),
        item("subcategory-clothing-deportivo", "ropa_deportivo"),
        item("subcategory-clothing-sueter", "sueter"),
        item("subcategory-clothing-blazer", "blazer"),
    ],
    promo: None,
};

static MAN_CLOTHING: NavSection = NavSection {
    title: NavLabel::Key("category-clothing"),
    category: Category::Clothing,
    items: &[
        item("subcategory-clothing-camiseta", "camiseta"),
        item("subcategory-clothing-pantaloneta", "pantaloneta"),
        item("subcategory-clothing-jogger", "jogger"),
        item("subcategory-clothing-deportivo", "ropa_deportivo"),
        item("subcategory-clothing-sueter", "sueter"),
        item("subcategory-clothing-ropa-verano", "ropa_verano"),
    ],
    promo: None,
};

static WOMAN_SECTIONS: [&NavSection; 3] = [&BAGS, &WOMAN_CLOTHING, &ACCESSORIES];
static MAN_SECTIONS: [&NavSection; 3] = [&BAGS, &MAN_CLOTHING, &ACCESSORIES];

/// Sections to display for a top-level selector. Unknown selectors yield
/// an empty slice; callers treat that as "no flyout / no accordion body".
pub fn sections_for(selector: &str) -> &'static [&'static NavSection] {
    match selector {
        "woman" => &WOMAN_SECTIONS,
        "man" => &MAN_SECTIONS,
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_selector_yields_no_sections() {
        assert!(sections_for("discounts").is_empty());
        assert!(sections_for("kids").is_empty());
        assert!(sections_for("").is_empty());
    }

    #[test]
    fn known_selectors_resolve_in_order() {
        let woman = sections_for("woman");
        assert_eq!(woman.len(), 3);
        assert_eq!(woman[0].category, Category::Bags);
        assert_eq!(woman[1].category, Category::Clothing);
        assert_eq!(woman[2].category, Category::Accessories);
    }

    #[test]
    fn bags_and_accessories_are_shared_by_reference() {
        let woman = sections_for("woman");
        let man = sections_for("man");
        assert!(std::ptr::eq(woman[0], man[0]));
        assert!(std::ptr::eq(woman[2], man[2]));
        // The clothing columns are selector-specific.
        assert!(!std::ptr::eq(woman[1], man[1]));
    }

    #[test]
    fn nested_items_stay_within_three_tiers() {
        fn depth(items: &[NavItem]) -> usize {
            items
                .iter()
                .map(|i| 1 + depth(i.children))
                .max()
                .unwrap_or(0)
        }
        for top in MAIN_NAV {
            for section in sections_for(top.key) {
                assert!(depth(section.items) <= 2, "section {:?} nests too deep", section.category);
            }
        }
    }
}
