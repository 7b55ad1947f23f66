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
        div {
            key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}

/// Mobile router wrapper mirroring the web shell.
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
