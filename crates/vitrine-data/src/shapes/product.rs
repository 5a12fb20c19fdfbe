//! Product listings shaped by the `ProductCard` fragment.

use serde::{Deserialize, Serialize};

use super::image::Image;
use super::money::Money;

/// The card-level slice of a product variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub image: Option<Image>,
    pub price: Money,
    #[serde(default)]
    pub compare_at_price: Option<Money>,
}

impl ProductVariant {
    /// Whether the variant is sold below its compare-at price.
    pub fn is_discounted(&self) -> bool {
        self.compare_at_price
            .as_ref()
            .map(|compare| compare.amount_value() > self.price.amount_value())
            .unwrap_or(false)
    }
}

/// A page of variants. Missing `nodes` decodes as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariantConnection {
    #[serde(default)]
    pub nodes: Vec<ProductVariant>,
}

/// A product as rendered on a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub title: String,
    pub handle: String,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub variants: VariantConnection,
}

impl Product {
    /// The first (card) variant, if the product has one.
    pub fn first_variant(&self) -> Option<&ProductVariant> {
        self.variants.nodes.first()
    }
}

/// A page of products. Missing `nodes` decodes as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductConnection {
    #[serde(default)]
    pub nodes: Vec<Product>,
}

/// Decode target of the featured products query.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeaturedProductsData {
    #[serde(default)]
    pub products: ProductConnection,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product_json() -> serde_json::Value {
        serde_json::json!({
            "id": "gid://shopify/Product/1",
            "title": "Canvas Tote",
            "handle": "canvas-tote",
            "variants": {
                "nodes": [{
                    "id": "gid://shopify/ProductVariant/1",
                    "image": {"url": "https://cdn.example/tote.jpg"},
                    "price": {"amount": "49.99", "currencyCode": "USD"},
                    "compareAtPrice": {"amount": "89.99", "currencyCode": "USD"}
                }]
            }
        })
    }

    #[test]
    fn test_product_decodes_card_fields() {
        let product: Product = serde_json::from_value(product_json()).unwrap();
        let variant = product.first_variant().unwrap();

        assert_eq!(variant.price.format(), "$49.99");
        assert!(variant.is_discounted());
    }

    #[test]
    fn test_not_discounted_without_compare_at() {
        let variant = ProductVariant {
            id: None,
            image: None,
            price: Money::new("49.99", "USD"),
            compare_at_price: None,
        };
        assert!(!variant.is_discounted());
    }

    #[test]
    fn test_missing_nodes_decodes_empty() {
        let data: FeaturedProductsData =
            serde_json::from_value(serde_json::json!({"products": {}})).unwrap();
        assert!(data.products.nodes.is_empty());
    }
}
