//! Products page: one fetch on mount, then a card grid.

use dioxus::logger::tracing;
use dioxus::prelude::*;

use api::{ApiError, Product};

use crate::components::ProductCard;
use crate::t;

#[component]
pub fn Products() -> Element {
    // Re-render when the platform shell's language signal changes.
    let _lang = try_use_context::<Signal<String>>().map(|c| c()).unwrap_or_default();

    // Exactly one fetch per mount. The resource future is dropped on
    // unmount, so a late response can never reach a gone view.
    let products = use_resource(move || async move {
        loaded_or_empty(api::fetch_products(api::PRODUCTS_ENDPOINT).await)
    });

    rsx! {
        section { class: "page page-products",
            // While the fetch is pending only the indicator shows; the
            // heading and grid belong to the loaded state.
            {match products() {
                None => rsx! {
                    p { class: "page-products__loading", {t!("products-loading")} }
                },
                Some(list) => rsx! {
                    h2 { class: "page__title", {t!("products-title")} }
                    div { class: "product-grid",
                        for product in list.iter() {
                            ProductCard {
                                key: "{product.id}",
                                product: product.clone(),
                                on_select: move |selected: Product| {
                                    tracing::debug!(id = %selected.id, "product tile selected");
                                },
                            }
                        }
                    }
                },
            }}
        }
    }
}

/// Degrade-to-empty policy: any fetch failure is logged and presented as
/// an empty (but loaded) catalog instead of an error screen.
fn loaded_or_empty(result: Result<Vec<Product>, ApiError>) -> Vec<Product> {
    match result {
        Ok(products) => products,
        Err(err) => {
            tracing::warn!(%err, endpoint = api::PRODUCTS_ENDPOINT, "product fetch failed");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_failure_degrades_to_an_empty_loaded_list() {
        let products = loaded_or_empty(Err(ApiError::Status(503)));
        assert!(products.is_empty());
    }

    #[test]
    fn successful_fetch_passes_through() {
        let list = vec![Product {
            id: "p-1".to_string(),
            name_key: "product-bolso-milan-name".to_string(),
            description_key: "product-bolso-milan-description".to_string(),
            price: 129_900.0,
            images: vec!["https://example.com/p.png".to_string()],
        }];
        assert_eq!(loaded_or_empty(Ok(list.clone())), list);
    }
}
