//! Hero content sourced from a collection's metafields.

use serde::{Deserialize, Serialize};

use super::image::Image;
use super::shop::Shop;

/// A metafield's scalar value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetafieldValue {
    pub value: String,
}

/// A metafield holding a reference to attached media.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaReference {
    #[serde(default)]
    pub reference: Option<Media>,
}

/// Media attached to hero content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    #[serde(default)]
    pub media_content_type: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub preview_image: Option<Image>,
    #[serde(default)]
    pub image: Option<Image>,
}

impl Media {
    /// The best image available for this media: the full image if present,
    /// otherwise the preview.
    pub fn best_image(&self) -> Option<&Image> {
        self.image.as_ref().or(self.preview_image.as_ref())
    }
}

/// Hero banner content, shaped by the `CollectionContent` fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    pub id: String,
    pub handle: String,
    pub title: String,
    #[serde(default)]
    pub description_html: Option<String>,
    #[serde(default)]
    pub heading: Option<MetafieldValue>,
    #[serde(default)]
    pub byline: Option<MetafieldValue>,
    #[serde(default)]
    pub cta: Option<MetafieldValue>,
    #[serde(default)]
    pub spread: Option<MediaReference>,
    #[serde(default)]
    pub spread_secondary: Option<MediaReference>,
}

impl HeroContent {
    /// Headline text: the hero metafield if set, the collection title
    /// otherwise.
    pub fn heading_text(&self) -> &str {
        self.heading
            .as_ref()
            .map(|m| m.value.as_str())
            .unwrap_or(&self.title)
    }

    /// Byline text, if the metafield is set.
    pub fn byline_text(&self) -> Option<&str> {
        self.byline.as_ref().map(|m| m.value.as_str())
    }

    /// Call-to-action label, if the metafield is set.
    pub fn cta_text(&self) -> Option<&str> {
        self.cta.as_ref().map(|m| m.value.as_str())
    }

    /// The primary spread image, if any.
    pub fn spread_image(&self) -> Option<&Image> {
        self.spread
            .as_ref()
            .and_then(|m| m.reference.as_ref())
            .and_then(|m| m.best_image())
    }
}

/// Decode target of the homepage SEO query: shop metadata plus the primary
/// hero.
#[derive(Debug, Clone, Deserialize)]
pub struct HomeSeoData {
    pub shop: Shop,
    #[serde(default)]
    pub hero: Option<HeroContent>,
}

/// Decode target of a collection hero query.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CollectionHeroData {
    #[serde(default)]
    pub hero: Option<HeroContent>,
}
