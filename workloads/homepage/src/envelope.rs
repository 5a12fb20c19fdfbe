//! The homepage response envelope.
//!
//! One resolved slot (shop metadata plus the primary hero, fetched before
//! the shell) and four pending slots. The envelope is built once by the
//! loader and consumed once when converted into a slot set.

use std::fmt;
use std::future::Future;

use futures::future::{FutureExt, LocalBoxFuture};
use vitrine_sdk::prelude::*;

use crate::sections::{render_featured_collections, render_hero, render_product_swimlane};

/// Slot names, shared by the envelope and the tests.
pub const PRIMARY_HERO_SLOT: &str = "primary-hero";
pub const STORE_PROMISES_SLOT: &str = "store-promises";
pub const FEATURED_PRODUCTS_SLOT: &str = "featured-products";
pub const SECONDARY_HERO_SLOT: &str = "secondary-hero";
pub const FEATURED_COLLECTIONS_SLOT: &str = "featured-collections";
pub const TERTIARY_HERO_SLOT: &str = "tertiary-hero";

/// A named query whose typed result is still pending.
///
/// The future is lazy; the loader constructs it without polling, and it
/// first runs when the composer drives its slot.
pub struct DeferredQuery<T> {
    name: &'static str,
    future: LocalBoxFuture<'static, Result<T, ApiError>>,
}

impl<T> DeferredQuery<T> {
    /// Wrap a pending query.
    pub fn new(
        name: &'static str,
        future: impl Future<Output = Result<T, ApiError>> + 'static,
    ) -> Self {
        Self {
            name,
            future: future.boxed_local(),
        }
    }

    /// The slot this query feeds.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Await the query's result.
    pub async fn resolve(self) -> Result<T, ApiError> {
        self.future.await
    }
}

impl<T> fmt::Debug for DeferredQuery<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredQuery")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// The homepage envelope: resolved above-the-fold content plus pending
/// below-the-fold queries.
#[derive(Debug)]
pub struct HomeEnvelope {
    /// Shop metadata for the document head.
    pub shop: Shop,
    /// Primary hero content, resolved before the shell is sent.
    pub primary_hero: Option<HeroContent>,
    /// Featured products for the swimlane.
    pub featured_products: DeferredQuery<FeaturedProductsData>,
    /// Secondary hero content.
    pub secondary_hero: DeferredQuery<CollectionHeroData>,
    /// Featured collections for the grid.
    pub featured_collections: DeferredQuery<FeaturedCollectionsData>,
    /// Tertiary hero content.
    pub tertiary_hero: DeferredQuery<CollectionHeroData>,
}

impl HomeEnvelope {
    /// Map the envelope into slots: resolved markup first, then one
    /// deferred slot per pending query, each rendering through its
    /// presentational component when it settles.
    pub fn into_slot_set(self, config: &StorefrontConfig) -> SlotSet {
        let placeholders = config.swimlane_placeholders;

        let mut slots = SlotSet::new();
        slots.push_resolved(PRIMARY_HERO_SLOT, render_hero(self.primary_hero.as_ref()));
        slots.push_resolved(STORE_PROMISES_SLOT, render_store_promises());

        let HomeEnvelope {
            featured_products,
            secondary_hero,
            featured_collections,
            tertiary_hero,
            ..
        } = self;

        slots.push_deferred(DeferredSlot::new(featured_products.name(), async move {
            let data = featured_products.resolve().await?;
            if data.products.nodes.is_empty() {
                return Ok(String::new());
            }
            Ok(render_product_swimlane(
                &data.products.nodes,
                "Our Favorites",
                placeholders,
            ))
        }));

        slots.push_deferred(DeferredSlot::new(secondary_hero.name(), async move {
            let data = secondary_hero.resolve().await?;
            Ok(render_hero(data.hero.as_ref()))
        }));

        slots.push_deferred(DeferredSlot::new(featured_collections.name(), async move {
            let data = featured_collections.resolve().await?;
            Ok(render_featured_collections(
                &data.collections.nodes,
                "Our Collections",
            ))
        }));

        slots.push_deferred(DeferredSlot::new(tertiary_hero.name(), async move {
            let data = tertiary_hero.resolve().await?;
            Ok(render_hero(data.hero.as_ref()))
        }));

        slots
    }
}

/// Static store promise tiles shown between the hero and the swimlane.
fn render_store_promises() -> String {
    r#"<section class="store-promises">
    <div class="promise-tile">
        <h2>Authentic products</h2>
        <p>A curated selection of authenticated pieces from luxury fashion houses.</p>
        <a href="/pages/authenticity">Learn more</a>
    </div>
    <div class="promise-tile">
        <h2>14-day returns</h2>
        <p>Return any purchase within 14 calendar days of delivery.</p>
        <a href="/pages/returns">Learn more</a>
    </div>
    <div class="promise-tile">
        <h2>Sell your item</h2>
        <p>We buy back pieces you are ready to part with, authenticated before payment.</p>
        <a href="/pages/resell">Learn more</a>
    </div>
</section>
<div class="shipping-banner">
    <h2>Free shipping on all products</h2>
</div>"#
        .to_string()
}
