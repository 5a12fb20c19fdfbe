//! Named query templates for the homepage.

use crate::fragments::{Fragment, COLLECTION_CONTENT, PRODUCT_CARD};

/// A named query operation composed from fragments.
///
/// `compose` is a pure function of the template: same template, same bytes.
#[derive(Debug)]
pub struct QueryTemplate {
    /// Operation name.
    pub name: &'static str,
    /// Fragments referenced by the operation body.
    pub fragments: &'static [&'static Fragment],
    /// Operation body.
    pub body: &'static str,
    /// Variables the operation declares.
    pub variables: &'static [&'static str],
}

impl QueryTemplate {
    /// Compose the full query text: fragments (dependencies first, each
    /// exactly once) followed by the operation body.
    pub fn compose(&self) -> String {
        let mut parts = Vec::new();
        let mut seen = Vec::new();
        for fragment in self.fragments {
            fragment.collect(&mut parts, &mut seen);
        }

        let mut text = String::new();
        for fragment in parts {
            text.push_str(fragment.body);
            text.push('\n');
        }
        text.push_str(self.body);
        text
    }
}

/// Shop metadata and the primary hero, fetched eagerly before the shell.
pub static HOMEPAGE_SEO_QUERY: QueryTemplate = QueryTemplate {
    name: "collectionContent",
    fragments: &[&COLLECTION_CONTENT],
    body: r#"query collectionContent($handle: String, $country: CountryCode, $language: LanguageCode)
@inContext(country: $country, language: $language) {
  hero: collection(handle: $handle) {
    ...CollectionContent
  }
  shop {
    name
    description
  }
}"#,
    variables: &["handle", "country", "language"],
};

/// Hero content for a single collection handle (secondary/tertiary heroes).
pub static COLLECTION_HERO_QUERY: QueryTemplate = QueryTemplate {
    name: "collectionContent",
    fragments: &[&COLLECTION_CONTENT],
    body: r#"query collectionContent($handle: String, $country: CountryCode, $language: LanguageCode)
@inContext(country: $country, language: $language) {
  hero: collection(handle: $handle) {
    ...CollectionContent
  }
}"#,
    variables: &["handle", "country", "language"],
};

/// Featured products for the homepage swimlane, cheapest first.
pub static HOMEPAGE_FEATURED_PRODUCTS_QUERY: QueryTemplate = QueryTemplate {
    name: "homepageFeaturedProducts",
    fragments: &[&PRODUCT_CARD],
    body: r#"query homepageFeaturedProducts($country: CountryCode, $language: LanguageCode)
@inContext(country: $country, language: $language) {
  products(first: 8, sortKey: PRICE, reverse: false) {
    nodes {
      ...ProductCard
    }
  }
}"#,
    variables: &["country", "language"],
};

/// Most recently updated collections for the homepage grid.
pub static FEATURED_COLLECTIONS_QUERY: QueryTemplate = QueryTemplate {
    name: "homepageFeaturedCollections",
    fragments: &[],
    body: r#"query homepageFeaturedCollections($country: CountryCode, $language: LanguageCode)
@inContext(country: $country, language: $language) {
  collections(first: 6, sortKey: UPDATED_AT) {
    nodes {
      id
      title
      handle
      image {
        altText
        width
        height
        url
      }
    }
  }
}"#,
    variables: &["country", "language"],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_is_byte_stable() {
        assert_eq!(
            HOMEPAGE_SEO_QUERY.compose(),
            HOMEPAGE_SEO_QUERY.compose()
        );
        assert_eq!(
            HOMEPAGE_FEATURED_PRODUCTS_QUERY.compose(),
            HOMEPAGE_FEATURED_PRODUCTS_QUERY.compose()
        );
    }

    #[test]
    fn test_fragments_precede_operation_body() {
        let text = HOMEPAGE_SEO_QUERY.compose();
        let media = text.find("fragment Media").unwrap();
        let content = text.find("fragment CollectionContent").unwrap();
        let operation = text.find("query collectionContent").unwrap();

        assert!(media < content);
        assert!(content < operation);
    }

    #[test]
    fn test_fragments_embedded_exactly_once() {
        let text = HOMEPAGE_SEO_QUERY.compose();
        assert_eq!(text.matches("fragment Media on Media").count(), 1);
        assert_eq!(
            text.matches("fragment CollectionContent on Collection").count(),
            1
        );
    }

    #[test]
    fn test_catalog_sort_orders() {
        let products = HOMEPAGE_FEATURED_PRODUCTS_QUERY.compose();
        assert!(products.contains("first: 8, sortKey: PRICE, reverse: false"));

        let collections = FEATURED_COLLECTIONS_QUERY.compose();
        assert!(collections.contains("first: 6, sortKey: UPDATED_AT"));
    }

    #[test]
    fn test_templates_declare_localization_variables() {
        for template in [
            &HOMEPAGE_SEO_QUERY,
            &COLLECTION_HERO_QUERY,
            &HOMEPAGE_FEATURED_PRODUCTS_QUERY,
            &FEATURED_COLLECTIONS_QUERY,
        ] {
            assert!(template.variables.contains(&"country"), "{}", template.name);
            assert!(template.variables.contains(&"language"), "{}", template.name);
        }
    }
}
