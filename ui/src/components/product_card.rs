//! Product tile used by the products page, the featured grid and (in a
//! compact form) the search overlay.

use dioxus::document;
use dioxus::prelude::*;

use api::Product;

use crate::core::format;
use crate::i18n;

const PRODUCT_CARD_CSS: Asset = asset!("/assets/styling/product-card.css");

#[component]
pub fn ProductCard(product: Product, on_select: EventHandler<Product>) -> Element {
    let lang_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang = lang_ctx
        .as_ref()
        .map(|c| c())
        .unwrap_or_else(|| i18n::DEFAULT_LANGUAGE.to_string());

    let name = i18n::tr(&product.name_key);
    let description = i18n::tr(&product.description_key);
    let price = format::format_price(product.price, &lang);
    // Remote records aren't trusted to carry images; an absent primary
    // image renders as an empty frame rather than a broken layout.
    let image = product.images.first().cloned().unwrap_or_default();
    let selected = product.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: PRODUCT_CARD_CSS }

        div {
            class: "product-card",
            onclick: move |_| on_select.call(selected.clone()),
            div { class: "product-card__frame",
                img { class: "product-card__image", src: "{image}", alt: "{name}" }
            }
            div { class: "product-card__body",
                h3 { class: "product-card__name", "{name}" }
                p { class: "product-card__description", "{description}" }
                p { class: "product-card__price", "{price}" }
            }
        }
    }
}
