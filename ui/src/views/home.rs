//! Landing view: hero carousel plus a featured grid over the static
//! catalog.

use dioxus::logger::tracing;
use dioxus::prelude::*;

use api::Product;

use crate::components::{ProductCard, Slider};
use crate::core::catalog;
use crate::t;

#[component]
pub fn Home() -> Element {
    // Re-render when the platform shell's language signal changes.
    let _lang = try_use_context::<Signal<String>>().map(|c| c()).unwrap_or_default();

    rsx! {
        Slider {}

        section { class: "page page-home",
            h2 { class: "page__title", {t!("home-featured-title")} }
            div { class: "product-grid",
                for product in catalog::products().iter() {
                    ProductCard {
                        key: "{product.id}",
                        product: product.clone(),
                        on_select: move |selected: Product| {
                            tracing::debug!(id = %selected.id, "featured tile selected");
                        },
                    }
                }
            }
        }
    }
}
