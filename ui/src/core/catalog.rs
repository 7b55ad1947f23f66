//! The in-memory product catalog backing the header search and the
//! featured grid on the home view. The products page fetches its own list
//! from the backend instead; the two never mix.

use api::Product;
use once_cell::sync::Lazy;

static CATALOG: Lazy<Vec<Product>> = Lazy::new(|| {
    vec![
        product(
            "bolso-milan",
            "product-bolso-milan",
            129_900.0,
            &[
                "https://res.cloudinary.com/dt1rhz43z/image/upload/bolso-milan-front.png",
                "https://res.cloudinary.com/dt1rhz43z/image/upload/bolso-milan-back.png",
            ],
        ),
        product(
            "bolso-oficina",
            "product-bolso-oficina",
            159_900.0,
            &["https://res.cloudinary.com/dt1rhz43z/image/upload/bolso-oficina.png"],
        ),
        product(
            "cartera-valentina",
            "product-cartera-valentina",
            89_900.0,
            &["https://res.cloudinary.com/dt1rhz43z/image/upload/cartera-valentina.png"],
        ),
        product(
            "morral-lens",
            "product-morral-lens",
            119_900.0,
            &["https://res.cloudinary.com/dt1rhz43z/image/upload/morral-lens.png"],
        ),
        product(
            "billetera-capri",
            "product-billetera-capri",
            49_900.0,
            &["https://res.cloudinary.com/dt1rhz43z/image/upload/billetera-capri.png"],
        ),
        product(
            "camiseta-basica",
            "product-camiseta-basica",
            39_900.0,
            &["https://res.cloudinary.com/dt1rhz43z/image/upload/camiseta-basica.png"],
        ),
        product(
            "gorra-urbana",
            "product-gorra-urbana",
            34_900.0,
            &["https://res.cloudinary.com/dt1rhz43z/image/upload/gorra-urbana.png"],
        ),
        product(
            "vestido-floral",
            "product-vestido-floral",
            109_900.0,
            &["https://res.cloudinary.com/dt1rhz43z/image/upload/vestido-floral.png"],
        ),
    ]
});

fn product(id: &str, key_base: &str, price: f64, images: &[&str]) -> Product {
    Product {
        id: id.to_string(),
        name_key: format!("{key_base}-name"),
        description_key: format!("{key_base}-description"),
        price,
        images: images.iter().map(|url| url.to_string()).collect(),
    }
}

/// The static catalog, built once on first use.
pub fn products() -> &'static [Product] {
    &CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_products_have_unique_ids_and_images() {
        let mut seen = std::collections::HashSet::new();
        for product in products() {
            assert!(seen.insert(product.id.as_str()), "duplicate id {}", product.id);
            assert!(!product.images.is_empty(), "{} has no images", product.id);
            assert!(product.price > 0.0);
        }
    }
}
