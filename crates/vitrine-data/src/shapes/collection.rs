//! Collection listings.

use serde::{Deserialize, Serialize};

use super::image::Image;

/// A collection tile: id, title, handle, optional image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub id: String,
    pub title: String,
    pub handle: String,
    #[serde(default)]
    pub image: Option<Image>,
}

/// A page of collections. Missing `nodes` decodes as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionConnection {
    #[serde(default)]
    pub nodes: Vec<Collection>,
}

/// Decode target of the featured collections query.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeaturedCollectionsData {
    #[serde(default)]
    pub collections: CollectionConnection,
}
