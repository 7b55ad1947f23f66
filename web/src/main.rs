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

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Global reactive language code; the shared Header updates it via
    // context when the user toggles the language button.
    let lang_code = use_signal(|| i18n::DEFAULT_LANGUAGE.to_string());
    use_context_provider(|| lang_code);

    // Cart collaborator: the chrome only displays the count.
    let cart = use_signal(CartState::default);
    use_context_provider(|| cart);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        // Key the routed subtree by current language to force a full
        // remount on change.
        div {
            key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}

/// Web router wrapper putting every page between the shared header and
/// footer, and translating the header's abstract tokens into routes.
#[component]
fn StoreShell() -> Element {
    rsx! {
        Header {
            on_navigate: move |page: Page| {
                navigator().push(route_for(page));
            },
            on_category_select: move |category: Category| {
                // The token is passed through, never interpreted here
                // beyond choosing the catalog route.
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
