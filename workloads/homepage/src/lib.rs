//! Storefront homepage - streaming SSR with deferred slots.
//!
//! This workload demonstrates the platform's loader/composer split:
//! - Locale segment validation before any query is issued
//! - One eager query (shop metadata + primary hero) awaited before the shell
//! - Four deferred queries attached to the envelope as pending slots
//! - Slots streamed independently as they settle; a failed slot renders
//!   nothing and never blocks a sibling

#[cfg(target_arch = "wasm32")]
mod component;
pub mod envelope;
pub mod loader;
pub mod sections;

use vitrine_sdk::prelude::*;

use envelope::HomeEnvelope;
use sections::html_escape;

/// Stream a loaded envelope into the sink: shell first, resolved slots in
/// order, deferred slots as they settle, then the closing shell.
pub async fn stream_home<S, E>(
    envelope: HomeEnvelope,
    config: &StorefrontConfig,
    sink: &mut StreamingSink<S, E>,
    policy: &SlotFailurePolicy,
) -> Result<ComposeSummary, PageError>
where
    S: futures::Sink<Vec<u8>, Error = E> + Unpin,
    E: std::fmt::Display,
{
    let shell = create_shell(&envelope.shop);
    sink.send_shell(&shell.render_opening()).await?;

    let slots = envelope.into_slot_set(config);
    let summary = compose(sink, slots, policy).await?;

    sink.send_raw(shell.render_closing().into_bytes()).await?;
    sink.complete().await?;

    Ok(summary)
}

/// Create the homepage shell from shop metadata.
pub fn create_shell(shop: &Shop) -> Shell {
    let description = shop
        .description
        .as_deref()
        .unwrap_or("A curated selection of authenticated luxury pieces.");

    let head = HeadContent::new(html_escape(&shop.name))
        .with_meta("viewport", "width=device-width, initial-scale=1")
        .with_meta("description", &html_escape(description))
        .with_style(HOME_STYLES);

    Shell::new(head)
        .with_body_start(format!(
            r#"<body>
<header class="site-header">
    <nav class="nav-container">
        <a href="/" class="logo">{}</a>
        <div class="nav-links">
            <a href="/collections">Collections</a>
            <a href="/products">Products</a>
            <a href="/pages/about">About</a>
        </div>
    </nav>
</header>
<main>
"#,
            html_escape(&shop.name)
        ))
        .with_body_end(
            r#"
</main>
<footer class="site-footer">
    <div class="footer-links">
        <a href="/pages/authenticity">Authenticity</a>
        <a href="/pages/returns">Returns</a>
        <a href="/pages/contact">Contact</a>
    </div>
    <p class="footer-note">All pieces authenticated before shipping.</p>
</footer>
</body>
</html>"#
                .to_string(),
        )
}

const HOME_STYLES: &str = r#"
* { box-sizing: border-box; margin: 0; padding: 0; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; color: #1f2937; background: #fff; line-height: 1.6; }

/* Header */
.site-header { position: sticky; top: 0; background: rgba(255, 255, 255, 0.95); border-bottom: 1px solid #e5e7eb; z-index: 100; }
.nav-container { max-width: 1200px; margin: 0 auto; padding: 1rem 2rem; display: flex; align-items: center; justify-content: space-between; }
.logo { font-size: 1.5rem; font-weight: 700; color: #111827; text-decoration: none; letter-spacing: 0.05em; }
.nav-links { display: flex; gap: 2rem; }
.nav-links a { color: #374151; text-decoration: none; font-weight: 500; }
.nav-links a:hover { color: #111827; }

/* Hero */
.hero { min-height: 60vh; display: flex; align-items: center; justify-content: center; text-align: center; background-size: cover; background-position: center; background-color: #f3f4f6; padding: 4rem 2rem; }
.hero-headline { font-size: 3rem; font-weight: 800; margin-bottom: 1rem; }
.hero-byline { font-size: 1.25rem; color: #4b5563; margin-bottom: 2rem; }
.hero-cta { display: inline-block; background: #111827; color: #fff; padding: 1rem 2.5rem; border-radius: 4px; text-decoration: none; font-weight: 600; }

/* Store promises */
.store-promises { max-width: 1000px; margin: 0 auto; padding: 2rem 1rem; display: flex; flex-wrap: wrap; gap: 1rem; justify-content: space-around; }
.promise-tile { width: 300px; min-height: 240px; padding: 1.5rem; background: rgba(148, 163, 184, 0.2); display: flex; flex-direction: column; justify-content: space-between; text-align: center; letter-spacing: 0.02em; }
.promise-tile h2 { font-size: 1.25rem; font-weight: 700; }
.promise-tile a { font-weight: 600; color: inherit; text-decoration: none; }
.shipping-banner { height: 4rem; display: flex; justify-content: center; align-items: center; text-transform: uppercase; font-weight: 600; font-size: 0.9rem; letter-spacing: 0.1em; color: #334155; background: #f3a6f6; }

/* Swimlane */
.product-swimlane { padding: 3rem 2rem; }
.section-heading { font-size: 1.75rem; font-weight: 700; margin-bottom: 1.5rem; }
.swimlane-scroll { display: flex; gap: 1rem; overflow-x: auto; scroll-snap-type: x mandatory; padding-bottom: 1rem; }
.product-card { scroll-snap-align: start; width: 20rem; flex-shrink: 0; text-decoration: none; color: inherit; }
.card-image { aspect-ratio: 4 / 5; background: #f3f4f6; overflow: hidden; }
.card-image img { width: 100%; height: 100%; object-fit: cover; }
.card-title { font-size: 1rem; font-weight: 600; margin-top: 0.75rem; }
.card-price { color: #374151; }
.price-sale { color: #b91c1c; }
.price-compare { color: #6b7280; margin-left: 0.5rem; }

/* Featured collections */
.featured-collections { padding: 3rem 2rem; background: #f9fafb; }
.collections-grid { display: grid; gap: 1.5rem; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); }
.collection-tile { text-decoration: none; color: inherit; }
.collection-tile img { width: 100%; aspect-ratio: 3 / 2; object-fit: cover; background: rgba(17, 24, 39, 0.05); transition: transform 0.2s ease-in-out; }
.collection-tile:hover img { transform: scale(1.05); }
.collection-handle { margin-top: 0.75rem; font-size: 1rem; }
.collection-handle::first-letter { text-transform: uppercase; }

/* Skeleton loading */
.skeleton .skeleton-text, .skeleton .skeleton-image, .skeleton .skeleton-button { background: linear-gradient(90deg, #e5e7eb 25%, #f3f4f6 50%, #e5e7eb 75%); background-size: 200% 100%; animation: shimmer 1.5s infinite; }
.skeleton .skeleton-text { height: 1rem; border-radius: 4px; margin-top: 0.75rem; }
.skeleton .skeleton-headline { width: 60%; height: 2rem; }
.skeleton .skeleton-byline { width: 80%; }
.skeleton .skeleton-button { width: 150px; height: 48px; border-radius: 4px; }
.skeleton .skeleton-image { aspect-ratio: 4 / 5; }
.skeleton .skeleton-price { width: 40%; }
@keyframes shimmer { 0% { background-position: 200% 0; } 100% { background-position: -200% 0; } }

/* Footer */
.site-footer { background: #111827; color: #fff; padding: 3rem 2rem; text-align: center; }
.footer-links { display: flex; gap: 2rem; justify-content: center; margin-bottom: 1rem; }
.footer-links a { color: #fff; text-decoration: none; opacity: 0.8; }
.footer-links a:hover { opacity: 1; }
.footer-note { font-size: 0.875rem; opacity: 0.7; }

/* Responsive */
@media (max-width: 768px) {
    .nav-links { display: none; }
    .hero-headline { font-size: 2rem; }
    .store-promises { flex-direction: column; align-items: center; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::{
        FEATURED_COLLECTIONS_SLOT, FEATURED_PRODUCTS_SLOT, PRIMARY_HERO_SLOT,
    };
    use async_trait::async_trait;
    use futures::executor::block_on;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records every query issued; canned fixtures per operation.
    struct MockApi {
        calls: RefCell<Vec<&'static str>>,
        fail_products: bool,
    }

    impl MockApi {
        fn new() -> Rc<Self> {
            Rc::new(Self {
                calls: RefCell::new(Vec::new()),
                fail_products: false,
            })
        }

        fn failing_products() -> Rc<Self> {
            Rc::new(Self {
                calls: RefCell::new(Vec::new()),
                fail_products: true,
            })
        }

        fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }

        fn kind(template: &QueryTemplate) -> &'static str {
            if template.body.contains("shop {") {
                "seo"
            } else if template.body.contains("products(") {
                "products"
            } else if template.body.contains("collections(") {
                "collections"
            } else {
                "hero"
            }
        }
    }

    #[async_trait(?Send)]
    impl StorefrontApi for MockApi {
        async fn query(
            &self,
            template: &QueryTemplate,
            _variables: QueryVariables,
        ) -> Result<serde_json::Value, ApiError> {
            let kind = Self::kind(template);
            self.calls.borrow_mut().push(kind);

            match kind {
                "seo" => Ok(json!({
                    "shop": {"name": "Vitrine", "description": "Authenticated luxury resale"},
                    "hero": {
                        "id": "gid://shopify/Collection/1",
                        "handle": "freestyle",
                        "title": "Freestyle",
                        "heading": {"value": "All new arrivals"},
                        "cta": {"value": "Shop now"}
                    }
                })),
                "products" => {
                    if self.fail_products {
                        Err(ApiError::Backend("products unavailable".to_string()))
                    } else {
                        Ok(json!({
                            "products": {"nodes": [
                                {
                                    "id": "gid://shopify/Product/1",
                                    "title": "Canvas Tote",
                                    "handle": "canvas-tote",
                                    "variants": {"nodes": [{
                                        "price": {"amount": "49.99", "currencyCode": "USD"}
                                    }]}
                                },
                                {
                                    "id": "gid://shopify/Product/2",
                                    "title": "Leather Satchel",
                                    "handle": "leather-satchel",
                                    "variants": {"nodes": [{
                                        "price": {"amount": "120.00", "currencyCode": "USD"}
                                    }]}
                                }
                            ]}
                        }))
                    }
                }
                "collections" => Ok(json!({
                    "collections": {"nodes": [
                        {"id": "1", "title": "Bags", "handle": "bags", "image": null},
                        {"id": "2", "title": "Shoes", "handle": "shoes",
                         "image": {"url": "https://cdn.example/shoes.jpg"}}
                    ]}
                })),
                _ => Ok(json!({"hero": null})),
            }
        }
    }

    fn config() -> StorefrontConfig {
        StorefrontConfig::default()
    }

    fn render(api: Rc<MockApi>, path: &str) -> (String, ComposeSummary) {
        block_on(async {
            let ctx = RequestContext::new(Method::Get, path);
            let envelope = loader::load(&ctx, api, &config()).await.unwrap();
            let mut sink = StreamingSink::new(BufferSink::new(), TimingContext::new());
            let summary = stream_home(envelope, &config(), &mut sink, &SlotFailurePolicy::Omit)
                .await
                .unwrap();
            (sink.into_inner().into_string(), summary)
        })
    }

    // === Loader Tests ===

    #[test]
    fn test_locale_mismatch_fails_fast_without_queries() {
        let api = MockApi::new();
        let ctx = RequestContext::new(Method::Get, "/fr-ca");

        let err = block_on(loader::load(&ctx, api.clone(), &config())).unwrap_err();

        assert!(matches!(err, PageError::NotFound));
        assert_eq!(api.call_count(), 0);
    }

    #[test]
    fn test_matching_locale_segment_is_accepted() {
        let api = MockApi::new();
        let ctx = RequestContext::new(Method::Get, "/EN-US");

        let envelope = block_on(loader::load(&ctx, api.clone(), &config())).unwrap();
        assert_eq!(envelope.shop.name, "Vitrine");
    }

    #[test]
    fn test_loader_awaits_only_the_immediate_query() {
        let api = MockApi::new();
        let ctx = RequestContext::new(Method::Get, "/");

        let envelope = block_on(loader::load(&ctx, api.clone(), &config())).unwrap();

        // Only the SEO query ran; the four deferred slots are still pending.
        assert_eq!(api.call_count(), 1);
        assert!(envelope.primary_hero.is_some());
    }

    #[test]
    fn test_immediate_query_failure_fails_the_request() {
        struct SeoFails;

        #[async_trait(?Send)]
        impl StorefrontApi for SeoFails {
            async fn query(
                &self,
                _template: &QueryTemplate,
                _variables: QueryVariables,
            ) -> Result<serde_json::Value, ApiError> {
                Err(ApiError::Connection("refused".to_string()))
            }
        }

        let ctx = RequestContext::new(Method::Get, "/");
        let err = block_on(loader::load(&ctx, Rc::new(SeoFails), &config())).unwrap_err();
        assert!(matches!(err, PageError::Query(_)));
    }

    // === Full Page Tests ===

    #[test]
    fn test_full_page_streams_every_slot() {
        let api = MockApi::new();
        let (html, summary) = render(api.clone(), "/");

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Vitrine</title>"));
        assert!(html.contains("All new arrivals"));
        assert!(html.contains("Canvas Tote"));
        assert!(html.contains("Free shipping on all products"));
        assert!(html.ends_with("</html>"));

        // The resolved hero streams before any deferred slot.
        let hero = html.find("All new arrivals").unwrap();
        let swimlane = html.find("Canvas Tote").unwrap();
        assert!(hero < swimlane);

        // One tile: only the collection with an image.
        assert_eq!(html.matches(r#"class="collection-tile""#).count(), 1);

        // All five queries ran once composition finished.
        assert_eq!(api.call_count(), 5);
        assert!(summary.streamed_slot(PRIMARY_HERO_SLOT));
        assert!(summary.streamed_slot(FEATURED_PRODUCTS_SLOT));
        assert!(summary.streamed_slot(FEATURED_COLLECTIONS_SLOT));
        // Both extra heroes resolved to nothing.
        assert_eq!(summary.empty.len(), 2);
    }

    #[test]
    fn test_failed_products_slot_leaves_page_intact() {
        let api = MockApi::failing_products();
        let (html, summary) = render(api, "/");

        assert!(html.contains("All new arrivals"));
        assert!(html.contains(r#"data-slot="featured-collections""#));
        assert!(!html.contains(r#"data-slot="featured-products""#));
        assert!(html.ends_with("</html>"));

        assert_eq!(summary.failed.len(), 1);
        assert_eq!(summary.failed[0].0, FEATURED_PRODUCTS_SLOT);
    }

    #[test]
    fn test_products_in_input_order() {
        let api = MockApi::new();
        let (html, _) = render(api, "/");

        let first = html.find("Canvas Tote").unwrap();
        let second = html.find("Leather Satchel").unwrap();
        assert!(first < second);
    }
}
