#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::logger::tracing;
use dioxus::prelude::*;

use ui::components::{Footer, Header};
use ui::core::cart::CartState;
use ui::core::nav::{Category, Page};
use ui::i18n;
use ui::views::{Cart, Home, Products, Profile};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(StoreShell)]
    #[route("/")]
    Home {},
    #[route("/products")]
    Products {},
    #[route("/profile")]
    Profile {},
    #[route("/cart")]
    Cart {},
}

// Embedded shared theme (ui/assets/theme/main.css); no separate desktop
// /assets duplicate.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[cfg(feature = "desktop")]
fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Chic 44 – v{}", env!("CARGO_PKG_VERSION")))
                    .with_maximized(true),
            ),
        )
        .launch(App);
}

#[cfg(not(feature = "desktop"))]
fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    let lang_code = use_signal(|| i18n::DEFAULT_LANGUAGE.to_string());
    use_context_provider(|| lang_code);

    let cart = use_signal(CartState::default);
    use_context_provider(|| cart);

    rsx! {
        // Always inline the embedded theme (no external file dependency
        // for packaged desktop builds).
        document::Style { "{MAIN_CSS_INLINE}" }

        // Key the routed subtree by current language to force a full
        // remount on change.
        div {
            key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}

/// Desktop router wrapper mirroring the web shell.
#[component]
fn StoreShell() -> Element {
    rsx! {
        Header {
            on_navigate: move |page: Page| {
                navigator().push(route_for(page));
            },
            on_category_select: move |category: Category| {
                tracing::debug!(?category, "category dispatched");
                navigator().push(Route::Products {});
            },
            on_product_select: move |product: ui::Product| {
                tracing::debug!(id = %product.id, "product dispatched");
                navigator().push(Route::Products {});
            },
        }

        Outlet::<Route> {}

        Footer {}
    }
}

fn route_for(page: Page) -> Route {
    match page {
        Page::Home => Route::Home {},
        Page::Profile => Route::Profile {},
        Page::Cart => Route::Cart {},
    }
}
