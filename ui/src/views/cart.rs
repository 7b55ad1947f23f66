use dioxus::prelude::*;

use crate::core::cart::CartState;
use crate::t;

#[component]
pub fn Cart() -> Element {
    let _lang = try_use_context::<Signal<String>>().map(|c| c()).unwrap_or_default();

    let cart = try_use_context::<Signal<CartState>>()
        .map(|c| c())
        .unwrap_or_default();

    rsx! {
        section { class: "page page-placeholder",
            h2 { class: "page__title", {t!("cart-title")} }
            if cart.has_items() {
                p { {t!("cart-items-count", count = cart.count.to_string())} }
            } else {
                p { {t!("cart-empty")} }
            }
        }
    }
}
