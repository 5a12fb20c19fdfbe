//! Image descriptors.

use serde::{Deserialize, Serialize};

/// An image descriptor from the API: a CDN URL plus intrinsic dimensions.
///
/// The frontend never fetches or transforms pixels; it only forwards the
/// descriptor with sizing hints for the image service to apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub url: String,
    #[serde(default)]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

impl Image {
    /// URL with display size and center-crop hints appended for the image
    /// service.
    pub fn sized_url(&self, width: u32, height: u32) -> String {
        let sep = if self.url.contains('?') { '&' } else { '?' };
        format!(
            "{}{}width={}&height={}&crop=center",
            self.url, sep, width, height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sized_url_appends_hints() {
        let image = Image {
            url: "https://cdn.example/a.jpg".to_string(),
            alt_text: None,
            width: Some(1200),
            height: Some(800),
        };
        assert_eq!(
            image.sized_url(600, 400),
            "https://cdn.example/a.jpg?width=600&height=400&crop=center"
        );
    }

    #[test]
    fn test_sized_url_preserves_existing_query() {
        let image = Image {
            url: "https://cdn.example/a.jpg?v=2".to_string(),
            alt_text: None,
            width: None,
            height: None,
        };
        assert_eq!(
            image.sized_url(600, 400),
            "https://cdn.example/a.jpg?v=2&width=600&height=400&crop=center"
        );
    }
}
