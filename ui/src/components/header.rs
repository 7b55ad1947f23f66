//! Sticky storefront header: brand block, desktop flyout navigation,
//! search overlay, cart/profile/language buttons and the mobile menu.
//!
//! Navigation is dispatched outward through the three `EventHandler`
//! props; this component never interprets the tokens it emits. All open/
//! close state for the two overlays lives in [`ShellState`], which also
//! derives the document scroll lock (see `core::shell`).

use dioxus::document;
use dioxus::prelude::*;

use api::Product;

use crate::core::cart::CartState;
use crate::core::nav::{self, Category, NavSection, Page, TopLevelNav};
use crate::core::search;
use crate::core::shell::ShellState;
use crate::core::{catalog, format, timing};
use crate::components::icons;
use crate::{i18n, t};

const THEME_CSS: Asset = asset!("/assets/theme/main.css");
const HEADER_CSS: Asset = asset!("/assets/styling/header.css");
const HEADER_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/header.css"
));

/// Delay before focusing the search input, so the overlay is in the DOM.
const SEARCH_FOCUS_DELAY_MS: u64 = 100;

#[component]
pub fn Header(
    on_navigate: EventHandler<Page>,
    on_category_select: EventHandler<Category>,
    on_product_select: EventHandler<Product>,
) -> Element {
    i18n::init();

    let mut shell = use_signal(ShellState::default);
    let query = use_signal(String::new);

    let cart_ctx: Option<Signal<CartState>> = try_use_context::<Signal<CartState>>();
    let cart = cart_ctx.map(|c| c()).unwrap_or_default();

    let lang_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang = lang_ctx
        .as_ref()
        .map(|c| c())
        .unwrap_or_else(|| i18n::DEFAULT_LANGUAGE.to_string());

    // Single writer for the document scroll lock: both overlays feed the
    // OR-combined flag, and unmount always releases it.
    use_effect(move || {
        apply_scroll_lock(shell().scroll_locked());
    });
    use_drop(|| apply_scroll_lock(false));

    let open_search = move |_| {
        shell.with_mut(|s| s.open_search());
        spawn(async move {
            timing::sleep_ms(SEARCH_FOCUS_DELAY_MS).await;
            let _ = document::eval("document.getElementById('search-input')?.focus();");
        });
    };

    let toggle_language = move |_| {
        let current = lang_ctx
            .as_ref()
            .map(|c| c())
            .unwrap_or_else(|| i18n::DEFAULT_LANGUAGE.to_string());
        let next = i18n::toggled_language(&current);
        if i18n::set_language(next).is_ok() {
            if let Some(mut code) = lang_ctx {
                code.set(next.to_string());
            }
        }
    };

    let lang_badge = if lang.starts_with("es") { "ES" } else { "EN" };
    let cart_aria = t!("cart-aria-label", count = cart.count.to_string());

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }
        document::Link { rel: "stylesheet", href: HEADER_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{HEADER_CSS_INLINE}" }
        }

        header { class: "header",
            div { class: "header__inner",
                div { class: "header__left",
                    button {
                        class: "header__hamburger",
                        aria_label: t!("nav-aria-open-menu"),
                        onclick: move |_| shell.with_mut(|s| s.open_menu()),
                        {icons::menu("header__icon")}
                    }

                    a {
                        class: "header__brand",
                        href: "#",
                        onclick: move |evt| {
                            evt.prevent_default();
                            on_navigate.call(Page::Home);
                        },
                        span { class: "header__brand-mark", "CHIC 44" }
                        span { class: "header__brand-subtitle", {t!("brand-subtitle")} }
                    }

                    nav { class: "header__nav",
                        for entry in nav::MAIN_NAV.iter() {
                            DesktopNavItem {
                                key: "{entry.key}",
                                entry: *entry,
                                on_category_select,
                            }
                        }
                    }
                }

                div { class: "header__actions",
                    button {
                        class: "header__action",
                        aria_label: t!("search-aria-label"),
                        onclick: open_search,
                        {icons::search("header__icon")}
                    }
                    button {
                        class: "header__action",
                        onclick: move |_| on_navigate.call(Page::Profile),
                        {icons::user("header__icon")}
                    }
                    button {
                        class: "header__action header__action--cart",
                        aria_label: "{cart_aria}",
                        onclick: move |_| on_navigate.call(Page::Cart),
                        {icons::cart("header__icon")}
                        if cart.has_items() {
                            span { class: "header__cart-badge", "{cart.count}" }
                        }
                    }
                    button {
                        class: "header__action header__action--lang",
                        aria_label: t!("language-toggle-aria"),
                        onclick: toggle_language,
                        "{lang_badge}"
                    }
                }
            }
        }

        SearchOverlay { shell, query, on_category_select, on_product_select }
        MobileMenu { shell, on_navigate, on_category_select }
    }
}

fn apply_scroll_lock(locked: bool) {
    let overflow = if locked { "hidden" } else { "auto" };
    let _ = document::eval(&format!("document.body.style.overflow = '{overflow}';"));
}

/// One top-level desktop entry. Each entry owns its hover state
/// independently; visual exclusivity comes from only one being hoverable
/// at a time, not from the model.
#[component]
fn DesktopNavItem(entry: TopLevelNav, on_category_select: EventHandler<Category>) -> Element {
    // Re-render on language change (labels resolve at render time).
    let _lang = try_use_context::<Signal<String>>().map(|c| c()).unwrap_or_default();

    let mut hovered = use_signal(|| false);
    let sections = nav::sections_for(entry.key);
    let label = entry.label.resolve();

    rsx! {
        div {
            class: "flyout",
            onmouseenter: move |_| hovered.set(true),
            onmouseleave: move |_| hovered.set(false),
            button { class: "flyout__trigger", "{label}" }

            if hovered() && !sections.is_empty() {
                div { class: "flyout__panel",
                    div { class: "flyout__columns",
                        for section in sections.iter() {
                            {flyout_column(section, on_category_select)}
                        }
                    }
                    if let Some(promo_section) = sections.iter().find(|s| s.promo.is_some()) {
                        {flyout_promo(promo_section, on_category_select)}
                    }
                }
            }
        }
    }
}

fn flyout_column(section: &'static NavSection, on_category_select: EventHandler<Category>) -> Element {
    let category = section.category;
    rsx! {
        div { class: "flyout__column",
            h3 { class: "flyout__title", {section.title.resolve()} }
            ul { class: "flyout__items",
                for item in section.items.iter() {
                    li { key: "{item.key}", class: "flyout__item",
                        a {
                            href: "#",
                            class: "flyout__link",
                            onclick: move |evt| {
                                evt.prevent_default();
                                on_category_select.call(category);
                            },
                            {item.label.resolve()}
                            if !item.children.is_empty() {
                                {icons::chevron_right("flyout__chevron")}
                            }
                        }
                        if !item.children.is_empty() {
                            div { class: "flyout__subpanel",
                                ul { class: "flyout__items",
                                    for child in item.children.iter() {
                                        li { key: "{child.key}",
                                            a {
                                                href: "#",
                                                class: "flyout__link",
                                                onclick: move |evt| {
                                                    evt.prevent_default();
                                                    on_category_select.call(category);
                                                },
                                                {child.label.resolve()}
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                li {
                    a {
                        href: "#",
                        class: "flyout__link flyout__link--view-all",
                        onclick: move |evt| {
                            evt.prevent_default();
                            on_category_select.call(category);
                        },
                        {t!("view-all")}
                    }
                }
            }
        }
    }
}

fn flyout_promo(section: &'static NavSection, on_category_select: EventHandler<Category>) -> Element {
    let category = section.category;
    let Some(promo) = section.promo.as_ref() else {
        return rsx! {};
    };
    rsx! {
        a {
            class: "flyout__promo",
            href: "#",
            onclick: move |evt| {
                evt.prevent_default();
                on_category_select.call(category);
            },
            img {
                class: "flyout__promo-image",
                src: "{promo.image_url}",
                alt: i18n::tr(promo.alt_key),
            }
            h4 { class: "flyout__promo-title", {i18n::tr(promo.title_key)} }
            p { class: "flyout__promo-cta", {t!("view-all")} }
        }
    }
}

#[component]
fn SearchOverlay(
    shell: Signal<ShellState>,
    query: Signal<String>,
    on_category_select: EventHandler<Category>,
    on_product_select: EventHandler<Product>,
) -> Element {
    let lang_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang = lang_ctx
        .as_ref()
        .map(|c| c())
        .unwrap_or_else(|| i18n::DEFAULT_LANGUAGE.to_string());

    // Recomputed synchronously on every keystroke (and on language
    // change); the index and catalog are small enough to skip debouncing.
    let results = use_memo(move || {
        let _lang = lang_ctx.as_ref().map(|c| c());
        search::search(&query(), catalog::products())
    });

    let mut query = query;
    let mut shell = shell;
    let res = results();
    let open = shell().is_search_open();
    let overlay_class = if open {
        "search-overlay search-overlay--open"
    } else {
        "search-overlay"
    };
    let query_text = query();
    let active = query_text.trim().chars().count() > 1;

    rsx! {
        div {
            class: "{overlay_class}",
            onclick: move |_| shell.with_mut(|s| s.close_search()),
            div { class: "search-overlay__sheet", onclick: move |evt| evt.stop_propagation(),
                form {
                    class: "search-overlay__form",
                    onsubmit: move |evt| evt.prevent_default(),
                    {icons::search("search-overlay__icon")}
                    input {
                        id: "search-input",
                        class: "search-overlay__input",
                        r#type: "text",
                        autocomplete: "off",
                        placeholder: t!("search-placeholder"),
                        value: "{query_text}",
                        oninput: move |evt| query.set(evt.value()),
                        onkeydown: move |evt| {
                            if evt.key() == Key::Escape {
                                shell.with_mut(|s| s.close_search());
                            }
                        },
                    }
                    button {
                        r#type: "button",
                        class: "search-overlay__close",
                        aria_label: t!("close-search-aria-label"),
                        onclick: move |_| shell.with_mut(|s| s.close_search()),
                        {icons::close("header__icon")}
                    }
                }

                if active {
                    div { class: "search-overlay__results",
                        if res.is_empty() {
                            p { class: "search-overlay__empty",
                                {t!("search-no-results", query = query_text.as_str())}
                            }
                        } else {
                            div { class: "search-overlay__grid",
                                if !res.categories.is_empty() {
                                    div { class: "search-overlay__group",
                                        h3 { class: "search-overlay__heading",
                                            {t!("search-suggested-categories")}
                                        }
                                        ul { class: "search-overlay__categories",
                                            for hit in res.categories.iter() {
                                                li { key: "{hit.label}",
                                                    a {
                                                        href: "#",
                                                        class: "search-overlay__category",
                                                        onclick: {
                                                            let category = hit.category;
                                                            move |evt: MouseEvent| {
                                                                evt.prevent_default();
                                                                on_category_select.call(category);
                                                                shell.with_mut(|s| s.close_search());
                                                                query.set(String::new());
                                                            }
                                                        },
                                                        "{hit.label}"
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                                if !res.products.is_empty() {
                                    div { class: "search-overlay__group search-overlay__group--products",
                                        h3 { class: "search-overlay__heading",
                                            {t!("search-suggested-products")}
                                        }
                                        div { class: "search-overlay__products",
                                            for product in res.products.iter() {
                                                a {
                                                    key: "{product.id}",
                                                    href: "#",
                                                    class: "search-overlay__product",
                                                    onclick: {
                                                        let product = product.clone();
                                                        move |evt: MouseEvent| {
                                                            evt.prevent_default();
                                                            on_product_select.call(product.clone());
                                                            shell.with_mut(|s| s.close_search());
                                                            query.set(String::new());
                                                        }
                                                    },
                                                    img {
                                                        class: "search-overlay__product-image",
                                                        src: "{primary_image(product)}",
                                                        alt: i18n::tr(&product.name_key),
                                                    }
                                                    div {
                                                        p { class: "search-overlay__product-name",
                                                            {i18n::tr(&product.name_key)}
                                                        }
                                                        p { class: "search-overlay__product-price",
                                                            {format::format_price(product.price, &lang)}
                                                        }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn primary_image(product: &Product) -> String {
    product.images.first().cloned().unwrap_or_default()
}

#[component]
fn MobileMenu(
    shell: Signal<ShellState>,
    on_navigate: EventHandler<Page>,
    on_category_select: EventHandler<Category>,
) -> Element {
    let _lang = try_use_context::<Signal<String>>().map(|c| c()).unwrap_or_default();

    let mut shell = shell;
    let state = shell();
    let menu_class = if state.is_menu_open() {
        "mobile-menu mobile-menu--open"
    } else {
        "mobile-menu"
    };

    rsx! {
        div { class: "{menu_class}",
            div { class: "mobile-menu__header",
                span { class: "mobile-menu__title", {t!("menu-title")} }
                button {
                    class: "mobile-menu__close",
                    aria_label: t!("nav-aria-close-menu"),
                    onclick: move |_| shell.with_mut(|s| s.close_menu()),
                    {icons::close("header__icon")}
                }
            }

            nav { class: "mobile-menu__nav",
                for entry in nav::MAIN_NAV.iter() {
                    {mobile_entry(*entry, shell, on_category_select)}
                }
            }

            div { class: "mobile-menu__footer",
                a {
                    href: "#",
                    class: "mobile-menu__profile",
                    onclick: move |evt| {
                        evt.prevent_default();
                        on_navigate.call(Page::Profile);
                        shell.with_mut(|s| s.close_menu());
                    },
                    {icons::user("header__icon")}
                    {t!("profile-mobile-link")}
                }
            }
        }
    }
}

fn mobile_entry(
    entry: TopLevelNav,
    mut shell: Signal<ShellState>,
    on_category_select: EventHandler<Category>,
) -> Element {
    let sections = nav::sections_for(entry.key);
    let has_submenu = !sections.is_empty();
    let expanded = shell().is_expanded(entry.key);

    rsx! {
        div { key: "{entry.key}", class: "mobile-menu__entry",
            button {
                class: if expanded { "mobile-menu__toggle mobile-menu__toggle--expanded" } else { "mobile-menu__toggle" },
                onclick: move |_| {
                    shell.with_mut(|s| {
                        if has_submenu {
                            s.toggle_section(entry.key);
                        } else {
                            // Entries without sections (discounts) act as
                            // plain links and close the menu.
                            s.close_menu();
                        }
                    });
                },
                {entry.label.resolve()}
                if has_submenu {
                    if expanded {
                        {icons::chevron_up("mobile-menu__chevron")}
                    } else {
                        {icons::chevron_down("mobile-menu__chevron")}
                    }
                }
            }

            if expanded && has_submenu {
                div { class: "mobile-menu__panel",
                    for section in sections.iter() {
                        {mobile_section(section, shell, on_category_select)}
                    }
                }
            }
        }
    }
}

fn mobile_section(
    section: &'static NavSection,
    mut shell: Signal<ShellState>,
    on_category_select: EventHandler<Category>,
) -> Element {
    let category = section.category;
    let mut select = move |evt: MouseEvent| {
        evt.prevent_default();
        on_category_select.call(category);
        shell.with_mut(|s| s.leaf_selected());
    };

    rsx! {
        div { class: "mobile-menu__section",
            h4 { class: "mobile-menu__section-title", {section.title.resolve()} }
            ul { class: "mobile-menu__items",
                for item in section.items.iter() {
                    li { key: "{item.key}",
                        a {
                            href: "#",
                            class: "mobile-menu__link",
                            onclick: move |evt| select(evt),
                            {item.label.resolve()}
                        }
                        if !item.children.is_empty() {
                            ul { class: "mobile-menu__subitems",
                                for child in item.children.iter() {
                                    li { key: "{child.key}",
                                        a {
                                            href: "#",
                                            class: "mobile-menu__link mobile-menu__link--sub",
                                            onclick: move |evt| select(evt),
                                            {child.label.resolve()}
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                li {
                    a {
                        href: "#",
                        class: "mobile-menu__link mobile-menu__link--view-all",
                        onclick: move |evt| select(evt),
                        {t!("view-all")}
                    }
                }
            }
        }
    }
}
