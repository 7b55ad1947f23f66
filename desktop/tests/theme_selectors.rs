#![cfg(test)]
/*!
Selector lint for the desktop build.

Purpose:
- Ensure that CSS selectors the shared components rely on remain present in the
  stylesheets shipped from `ui/assets/`, preventing a silent styling regression
  in packaged desktop builds.

How it works:
- We compile‑time embed the shared sheets with `include_str!` pointing at the
  `ui/` locations (mirrors the constants in the ui components).
- We assert presence of a curated set of selectors / tokens.
- If you intentionally rename or remove a selector:
    1. Update the component markup.
    2. Adjust REQUIRED_SELECTORS accordingly.

Why not parse CSS properly?
- A lightweight substring presence check is sufficient as an early warning and
  keeps compile times flat.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const HEADER_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/header.css"
));

const SLIDER_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/slider.css"
));

/// Core selectors / tokens that must exist for the storefront chrome.
const REQUIRED_THEME_SELECTORS: &[&str] = &[
    ":root",
    "body {",
    ".page {",
    ".page__title",
    ".product-grid",
];

const REQUIRED_HEADER_SELECTORS: &[&str] = &[
    ".header {",
    ".header__cart-badge",
    ".flyout__panel",
    ".flyout__subpanel",
    ".search-overlay--open",
    ".mobile-menu--open",
];

const REQUIRED_SLIDER_SELECTORS: &[&str] = &[
    ".slider {",
    ".slider__slide--active",
    ".slider__control--prev",
    ".slider__dot--active",
];

#[test]
fn theme_contains_required_selectors() {
    for selector in REQUIRED_THEME_SELECTORS {
        assert!(
            THEME_CSS.contains(selector),
            "Expected `{selector}` in ui/assets/theme/main.css"
        );
    }
}

#[test]
fn header_sheet_contains_required_selectors() {
    for selector in REQUIRED_HEADER_SELECTORS {
        assert!(
            HEADER_CSS.contains(selector),
            "Expected `{selector}` in ui/assets/styling/header.css"
        );
    }
}

#[test]
fn slider_sheet_contains_required_selectors() {
    for selector in REQUIRED_SLIDER_SELECTORS {
        assert!(
            SLIDER_CSS.contains(selector),
            "Expected `{selector}` in ui/assets/styling/slider.css"
        );
    }
}
