//! Fragment registry.
//!
//! Fragments compose textually: a fragment that references another declares
//! it in `requires`, and composition emits each fragment exactly once, in
//! dependency order, ahead of the operation body.

/// A reusable query fragment.
#[derive(Debug)]
pub struct Fragment {
    /// Fragment name as declared in the body.
    pub name: &'static str,
    /// Fragments this fragment's body references.
    pub requires: &'static [&'static Fragment],
    /// Fragment text.
    pub body: &'static str,
}

impl Fragment {
    /// Collect this fragment and its transitive dependencies, dependencies
    /// first, each emitted exactly once.
    pub(crate) fn collect<'a>(&'a self, out: &mut Vec<&'a Fragment>, seen: &mut Vec<&'static str>) {
        if seen.contains(&self.name) {
            return;
        }
        seen.push(self.name);
        for dep in self.requires {
            dep.collect(out, seen);
        }
        out.push(self);
    }
}

/// Media attached to a collection or product.
pub static MEDIA: Fragment = Fragment {
    name: "Media",
    requires: &[],
    body: r#"fragment Media on Media {
  __typename
  mediaContentType
  alt
  previewImage {
    url
  }
  ... on MediaImage {
    id
    image {
      id
      url
      width
      height
    }
  }
}"#,
};

/// Card-level product data: first variant with image and pricing.
pub static PRODUCT_CARD: Fragment = Fragment {
    name: "ProductCard",
    requires: &[],
    body: r#"fragment ProductCard on Product {
  id
  title
  publishedAt
  handle
  variants(first: 1) {
    nodes {
      id
      image {
        url
        altText
        width
        height
      }
      price {
        amount
        currencyCode
      }
      compareAtPrice {
        amount
        currencyCode
      }
    }
  }
}"#,
};

/// Hero content sourced from a collection's metafields.
pub static COLLECTION_CONTENT: Fragment = Fragment {
    name: "CollectionContent",
    requires: &[&MEDIA],
    body: r#"fragment CollectionContent on Collection {
  id
  handle
  title
  descriptionHtml
  heading: metafield(namespace: "hero", key: "title") {
    value
  }
  byline: metafield(namespace: "hero", key: "byline") {
    value
  }
  cta: metafield(namespace: "hero", key: "cta") {
    value
  }
  spread: metafield(namespace: "hero", key: "spread") {
    reference {
      ...Media
    }
  }
  spreadSecondary: metafield(namespace: "hero", key: "spread_secondary") {
    reference {
      ...Media
    }
  }
}"#,
};
