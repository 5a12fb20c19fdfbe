//! Featured collections grid.

use vitrine_sdk::vitrine_data::shapes::Collection;

use super::html_escape;

/// Render the featured collections grid.
///
/// Only collections carrying an image get a tile; if none remain, the
/// section renders nothing. The grid is sized to the filtered count, not
/// the input count.
pub fn render_featured_collections(collections: &[Collection], title: &str) -> String {
    let tiles: Vec<_> = collections
        .iter()
        .filter_map(|collection| collection.image.as_ref().map(|image| (collection, image)))
        .collect();
    if tiles.is_empty() {
        return String::new();
    }

    let tiles_html: String = tiles
        .iter()
        .map(|(collection, image)| {
            format!(
                r#"<a href="/collections/{handle}" class="collection-tile">
            <img src="{src}" alt="Image of {title}" loading="lazy">
            <h3 class="collection-handle">{handle}</h3>
        </a>"#,
                handle = html_escape(&collection.handle),
                src = html_escape(&image.sized_url(600, 400)),
                title = html_escape(&collection.title),
            )
        })
        .collect();

    format!(
        r#"<section class="featured-collections">
    <h2 class="section-heading">{}</h2>
    <div class="collections-grid" data-items="{}">
        {}
    </div>
</section>"#,
        html_escape(title),
        tiles.len(),
        tiles_html
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_sdk::vitrine_data::shapes::Image;

    fn collection(id: &str, handle: &str, image: Option<&str>) -> Collection {
        Collection {
            id: id.to_string(),
            title: handle.to_string(),
            handle: handle.to_string(),
            image: image.map(|url| Image {
                url: url.to_string(),
                alt_text: None,
                width: None,
                height: None,
            }),
        }
    }

    #[test]
    fn test_empty_input_renders_nothing() {
        assert_eq!(render_featured_collections(&[], "Our Collections"), "");
    }

    #[test]
    fn test_only_imageless_entries_renders_nothing() {
        let collections = vec![collection("1", "bags", None)];
        assert_eq!(render_featured_collections(&collections, "c"), "");
    }

    #[test]
    fn test_tile_count_matches_entries_with_images() {
        let collections = vec![
            collection("1", "bags", None),
            collection("2", "shoes", Some("https://cdn.example/shoes.jpg")),
        ];

        let html = render_featured_collections(&collections, "Our Collections");

        assert_eq!(html.matches("collection-tile").count(), 1);
        assert!(html.contains(r#"data-items="1""#));
        assert!(html.contains(r#"href="/collections/shoes""#));
        assert!(!html.contains("bags"));
    }

    #[test]
    fn test_tiles_link_and_label() {
        let collections = vec![collection(
            "2",
            "shoes",
            Some("https://cdn.example/shoes.jpg"),
        )];

        let html = render_featured_collections(&collections, "Our Collections");
        assert!(html.contains(r#"alt="Image of shoes""#));
        assert!(html.contains("width=600&amp;height=400&amp;crop=center"));
    }
}
