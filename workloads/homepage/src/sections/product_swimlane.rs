//! Horizontally scrollable product swimlane.

use vitrine_sdk::vitrine_data::shapes::Product;

use super::html_escape;
use super::product_card::{render_placeholder_card, render_product_card};

/// Render the product swimlane.
///
/// One card per product, in input order. With no products, renders
/// `placeholder_count` skeleton cards instead (the not-yet-loaded state).
pub fn render_product_swimlane(
    products: &[Product],
    title: &str,
    placeholder_count: usize,
) -> String {
    let cards: String = if products.is_empty() {
        (0..placeholder_count).map(|_| render_placeholder_card()).collect()
    } else {
        products.iter().map(render_product_card).collect()
    };

    format!(
        r#"<section class="product-swimlane">
    <h2 class="section-heading">{}</h2>
    <div class="swimlane-scroll">
        {}
    </div>
</section>"#,
        html_escape(title),
        cards
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_sdk::vitrine_data::shapes::{Money, ProductVariant, VariantConnection};

    fn product(id: &str, title: &str) -> Product {
        Product {
            id: id.to_string(),
            title: title.to_string(),
            handle: title.to_lowercase().replace(' ', "-"),
            published_at: None,
            variants: VariantConnection {
                nodes: vec![ProductVariant {
                    id: None,
                    image: None,
                    price: Money::new("10.00", "USD"),
                    compare_at_price: None,
                }],
            },
        }
    }

    #[test]
    fn test_empty_input_renders_placeholders() {
        let html = render_product_swimlane(&[], "New Arrivals", 12);
        assert_eq!(html.matches("product-card skeleton").count(), 12);
    }

    #[test]
    fn test_one_card_per_product_in_order() {
        let products = vec![product("1", "First Bag"), product("2", "Second Bag")];
        let html = render_product_swimlane(&products, "New Arrivals", 12);

        assert_eq!(html.matches("product-card").count(), 2);
        assert!(!html.contains("skeleton"));
        assert!(html.find("First Bag").unwrap() < html.find("Second Bag").unwrap());
    }

    #[test]
    fn test_title_is_escaped() {
        let html = render_product_swimlane(&[], "Bags & Totes", 1);
        assert!(html.contains("Bags &amp; Totes"));
    }
}
