//! The homepage data loader.

use std::rc::Rc;

use vitrine_sdk::prelude::*;

use crate::envelope::{
    DeferredQuery, HomeEnvelope, FEATURED_COLLECTIONS_SLOT, FEATURED_PRODUCTS_SLOT,
    SECONDARY_HERO_SLOT, TERTIARY_HERO_SLOT,
};

/// Load the homepage envelope.
///
/// Validates the locale segment first (mismatch is `NotFound`, issued
/// before any query), awaits the shop/primary-hero query eagerly, and
/// attaches the remaining queries as pending slots without polling them.
pub async fn load(
    ctx: &RequestContext,
    api: Rc<dyn StorefrontApi>,
    config: &StorefrontConfig,
) -> Result<HomeEnvelope, PageError> {
    let (segment, _) = split_locale_segment(&ctx.path);
    if let Some(segment) = segment {
        if !config.locale.matches_segment(segment) {
            return Err(PageError::NotFound);
        }
    }

    // Above-the-fold content must not wait behind a boundary.
    let seo = api
        .query(
            &HOMEPAGE_SEO_QUERY,
            QueryVariables::new().with("handle", config.primary_hero_handle.clone()),
        )
        .await
        .map_err(anyhow::Error::new)?;
    let seo: HomeSeoData = shapes::decode(seo).map_err(anyhow::Error::new)?;

    let featured_products = {
        let api = api.clone();
        DeferredQuery::new(FEATURED_PRODUCTS_SLOT, async move {
            let value = api
                .query(&HOMEPAGE_FEATURED_PRODUCTS_QUERY, QueryVariables::new())
                .await?;
            shapes::decode::<FeaturedProductsData>(value)
        })
    };

    let secondary_hero = {
        let api = api.clone();
        let handle = config.secondary_hero_handle.clone();
        DeferredQuery::new(SECONDARY_HERO_SLOT, async move {
            let value = api
                .query(
                    &COLLECTION_HERO_QUERY,
                    QueryVariables::new().with("handle", handle),
                )
                .await?;
            shapes::decode::<CollectionHeroData>(value)
        })
    };

    let featured_collections = {
        let api = api.clone();
        DeferredQuery::new(FEATURED_COLLECTIONS_SLOT, async move {
            let value = api
                .query(&FEATURED_COLLECTIONS_QUERY, QueryVariables::new())
                .await?;
            shapes::decode::<FeaturedCollectionsData>(value)
        })
    };

    let tertiary_hero = {
        let api = api.clone();
        let handle = config.tertiary_hero_handle.clone();
        DeferredQuery::new(TERTIARY_HERO_SLOT, async move {
            let value = api
                .query(
                    &COLLECTION_HERO_QUERY,
                    QueryVariables::new().with("handle", handle),
                )
                .await?;
            shapes::decode::<CollectionHeroData>(value)
        })
    };

    Ok(HomeEnvelope {
        shop: seo.shop,
        primary_hero: seo.hero,
        featured_products,
        secondary_hero,
        featured_collections,
        tertiary_hero,
    })
}
