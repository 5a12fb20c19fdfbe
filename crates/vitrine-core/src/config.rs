//! Store-level configuration.

use serde::{Deserialize, Serialize};

use crate::locale::LocaleContext;

/// Configuration for the storefront frontend.
///
/// Carries the API endpoint, the negotiated locale, the collection handles
/// used for hero content, and the slot sizing defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Storefront API endpoint URL.
    pub api_url: String,
    /// Negotiated locale for this deployment.
    pub locale: LocaleContext,
    /// Collection handle for the primary (above-the-fold) hero.
    pub primary_hero_handle: String,
    /// Collection handle for the secondary hero.
    pub secondary_hero_handle: String,
    /// Collection handle for the tertiary hero.
    pub tertiary_hero_handle: String,
    /// Page size for the featured products query.
    #[serde(default = "default_featured_products_first")]
    pub featured_products_first: u32,
    /// Page size for the featured collections query.
    #[serde(default = "default_featured_collections_first")]
    pub featured_collections_first: u32,
    /// Number of placeholder cards the swimlane shows before data arrives.
    #[serde(default = "default_swimlane_placeholders")]
    pub swimlane_placeholders: usize,
}

fn default_featured_products_first() -> u32 {
    8
}

fn default_featured_collections_first() -> u32 {
    6
}

fn default_swimlane_placeholders() -> usize {
    12
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            api_url: "https://storefront.example.com/api/graphql".to_string(),
            locale: LocaleContext::default(),
            primary_hero_handle: "freestyle".to_string(),
            secondary_hero_handle: "backpacks".to_string(),
            tertiary_hero_handle: "backpacks".to_string(),
            featured_products_first: default_featured_products_first(),
            featured_collections_first: default_featured_collections_first(),
            swimlane_placeholders: default_swimlane_placeholders(),
        }
    }
}

impl StorefrontConfig {
    /// Create a configuration pointing at the given API endpoint.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            ..Default::default()
        }
    }

    /// Set the negotiated locale.
    pub fn with_locale(mut self, locale: LocaleContext) -> Self {
        self.locale = locale;
        self
    }

    /// Set the primary hero collection handle.
    pub fn with_primary_hero(mut self, handle: impl Into<String>) -> Self {
        self.primary_hero_handle = handle.into();
        self
    }

    /// Set the secondary hero collection handle.
    pub fn with_secondary_hero(mut self, handle: impl Into<String>) -> Self {
        self.secondary_hero_handle = handle.into();
        self
    }

    /// Set the tertiary hero collection handle.
    pub fn with_tertiary_hero(mut self, handle: impl Into<String>) -> Self {
        self.tertiary_hero_handle = handle.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = StorefrontConfig::default();

        assert_eq!(config.locale, LocaleContext::new("EN", "US"));
        assert_eq!(config.featured_products_first, 8);
        assert_eq!(config.featured_collections_first, 6);
        assert_eq!(config.swimlane_placeholders, 12);
    }

    #[test]
    fn test_config_builder_chain() {
        let config = StorefrontConfig::new("https://shop.example/api")
            .with_locale(LocaleContext::new("PL", "PL"))
            .with_primary_hero("vintage")
            .with_secondary_hero("totes");

        assert_eq!(config.api_url, "https://shop.example/api");
        assert_eq!(config.locale.as_segment(), "pl-pl");
        assert_eq!(config.primary_hero_handle, "vintage");
        assert_eq!(config.secondary_hero_handle, "totes");
    }
}
