//! Single product card.

use vitrine_sdk::vitrine_data::shapes::Product;

use super::html_escape;

/// Render one product card: image, title, price. Pure mapping, no network.
pub fn render_product_card(product: &Product) -> String {
    let variant = product.first_variant();

    let image_html = variant
        .and_then(|v| v.image.as_ref())
        .map(|image| {
            format!(
                r#"<img src="{}" alt="{}" loading="lazy">"#,
                html_escape(&image.sized_url(320, 400)),
                html_escape(image.alt_text.as_deref().unwrap_or(&product.title)),
            )
        })
        .unwrap_or_default();

    let price_html = variant
        .map(|v| {
            if v.is_discounted() {
                let compare = v
                    .compare_at_price
                    .as_ref()
                    .map(|c| format!(r#" <s class="price-compare">{}</s>"#, html_escape(&c.format())))
                    .unwrap_or_default();
                format!(
                    r#"<p class="card-price price-sale">{}{}</p>"#,
                    html_escape(&v.price.format()),
                    compare
                )
            } else {
                format!(
                    r#"<p class="card-price">{}</p>"#,
                    html_escape(&v.price.format())
                )
            }
        })
        .unwrap_or_default();

    format!(
        r#"<a href="/products/{}" class="product-card">
            <div class="card-image">{}</div>
            <h3 class="card-title">{}</h3>
            {}
        </a>"#,
        html_escape(&product.handle),
        image_html,
        html_escape(&product.title),
        price_html
    )
}

/// Render a placeholder card for the not-yet-loaded state.
pub fn render_placeholder_card() -> String {
    r#"<div class="product-card skeleton">
            <div class="card-image skeleton-image"></div>
            <div class="skeleton-text skeleton-title"></div>
            <div class="skeleton-text skeleton-price"></div>
        </div>"#
        .to_string()
}
