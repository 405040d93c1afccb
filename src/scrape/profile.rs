//! Per-site scraping rules.
//!
//! Everything that ties the scraper to one particular listing page lives
//! here: which links count as articles, where structured titles and teasers
//! sit in the markup, and what byline the site appends to link text.

/// Tuning for one source site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteProfile {
    /// Substring every article href must contain.
    pub link_suffix: String,
    /// An article href must contain at least one of these path segments.
    pub path_markers: Vec<String>,
    /// CSS selector for a structured title inside an anchor.
    pub title_selector: String,
    /// CSS selector for a structured teaser inside an anchor.
    pub teaser_selector: String,
    /// Brand name that ends the byline tail, e.g. `"Make Magazin"`.
    pub byline_brand: String,
    /// Titles shorter than this many characters are rejected.
    pub min_title_chars: usize,
}

impl SiteProfile {
    /// Rules for the heise Make Magazin article overview.
    pub fn make_magazin() -> Self {
        Self {
            link_suffix: ".html".into(),
            path_markers: vec!["/ratgeber/".into(), "/news/".into(), "/meldung/".into()],
            title_selector: r#"span[data-upscore-title="true"]"#.into(),
            teaser_selector: r#"[data-component="TeaserSynopsis"]"#.into(),
            byline_brand: "Make Magazin".into(),
            min_title_chars: 5,
        }
    }

    /// Whether `href` looks like an article rather than navigation.
    pub fn is_article_href(&self, href: &str) -> bool {
        href.contains(self.link_suffix.as_str())
            && self.path_markers.iter().any(|m| href.contains(m.as_str()))
    }
}

impl Default for SiteProfile {
    fn default() -> Self {
        Self::make_magazin()
    }
}
