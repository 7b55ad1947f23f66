//! Remote catalog access for the Chic 44 storefront.
//!
//! The backend exposes a single unauthenticated endpoint returning the full
//! product list as a JSON array. Records already match [`Product`]; anything
//! that doesn't decode is treated as a fetch failure by the caller.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Product list endpoint (the backend proxies the Shopify catalog).
pub const PRODUCTS_ENDPOINT: &str = "https://backend-sisj.onrender.com/api/productos";

/// A catalog product. `name_key` and `description_key` are localization
/// keys resolved by the UI at render time; `price` is a COP amount
/// formatted by the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name_key: String,
    pub description_key: String,
    pub price: f64,
    /// Ordered image URLs; the first one is the display image.
    pub images: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(u16),
}

/// Fetch the product list from `endpoint`. Non-2xx responses and bodies
/// that don't decode as a product array are both errors; retry policy is
/// the caller's concern (the storefront has none).
pub async fn fetch_products(endpoint: &str) -> Result<Vec<Product>, ApiError> {
    let response = reqwest::get(endpoint).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status(status.as_u16()));
    }
    let products = response.json::<Vec<Product>>().await?;
    Ok(products)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_decodes_from_backend_shape() {
        let body = r#"[
            {
                "id": "p-001",
                "nameKey": "product-bolso-milan-name",
                "descriptionKey": "product-bolso-milan-description",
                "price": 129900,
                "images": ["https://example.com/milan-front.png", "https://example.com/milan-back.png"]
            }
        ]"#;

        let products: Vec<Product> = serde_json::from_str(body).expect("backend shape decodes");
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, "p-001");
        assert_eq!(products[0].name_key, "product-bolso-milan-name");
        assert_eq!(products[0].price, 129_900.0);
        assert_eq!(products[0].images.len(), 2);
    }

    #[test]
    fn malformed_body_is_an_error() {
        let body = r#"{"not": "an array"}"#;
        assert!(serde_json::from_str::<Vec<Product>>(body).is_err());
    }
}
