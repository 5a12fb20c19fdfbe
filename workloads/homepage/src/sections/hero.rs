//! Hero banner.

use vitrine_sdk::vitrine_data::shapes::HeroContent;

use super::html_escape;

/// Render a hero banner. Absent content renders nothing.
pub fn render_hero(hero: Option<&HeroContent>) -> String {
    let Some(hero) = hero else {
        return String::new();
    };

    let bg_style = hero
        .spread_image()
        .map(|image| {
            format!(
                r#" style="background-image: url('{}')""#,
                html_escape(&image.sized_url(1600, 800))
            )
        })
        .unwrap_or_default();

    let byline = hero
        .byline_text()
        .map(|byline| format!("<p class=\"hero-byline\">{}</p>\n        ", html_escape(byline)))
        .unwrap_or_default();

    let cta = hero
        .cta_text()
        .map(|cta| {
            format!(
                r#"<a href="/collections/{}" class="hero-cta">{}</a>"#,
                html_escape(&hero.handle),
                html_escape(cta)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<section class="hero" data-collection="{}"{}>
    <div class="hero-content">
        <h1 class="hero-headline">{}</h1>
        {}{}
    </div>
</section>"#,
        html_escape(&hero.handle),
        bg_style,
        html_escape(hero.heading_text()),
        byline,
        cta
    )
}

/// Render skeleton placeholder for a hero.
pub fn render_hero_skeleton() -> String {
    r#"<section class="hero skeleton">
    <div class="hero-content">
        <div class="skeleton-text skeleton-headline"></div>
        <div class="skeleton-text skeleton-byline"></div>
        <div class="skeleton-button"></div>
    </div>
</section>"#
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_sdk::vitrine_data::shapes::MetafieldValue;

    fn hero() -> HeroContent {
        HeroContent {
            id: "gid://shopify/Collection/1".to_string(),
            handle: "freestyle".to_string(),
            title: "Freestyle".to_string(),
            description_html: None,
            heading: Some(MetafieldValue {
                value: "All new arrivals".to_string(),
            }),
            byline: None,
            cta: Some(MetafieldValue {
                value: "Shop now".to_string(),
            }),
            spread: None,
            spread_secondary: None,
        }
    }

    #[test]
    fn test_absent_hero_renders_nothing() {
        assert_eq!(render_hero(None), "");
    }

    #[test]
    fn test_hero_renders_heading_and_cta() {
        let html = render_hero(Some(&hero()));

        assert!(html.contains("All new arrivals"));
        assert!(html.contains(r#"href="/collections/freestyle""#));
        assert!(html.contains("Shop now"));
        assert!(!html.contains("hero-byline"));
    }

    #[test]
    fn test_hero_escapes_content() {
        let mut hero = hero();
        hero.heading = Some(MetafieldValue {
            value: "Bags & <more>".to_string(),
        });

        let html = render_hero(Some(&hero));
        assert!(html.contains("Bags &amp; &lt;more&gt;"));
    }

    #[test]
    fn test_render_is_pure() {
        let hero = hero();
        assert_eq!(render_hero(Some(&hero)), render_hero(Some(&hero)));
    }
}
