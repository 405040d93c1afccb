//! Article discovery on an HTML listing page that has no feed of its own.
//!
//! The [`Scraper`] walks every `a[href]`, keeps the ones whose href looks
//! like an article (see [`SiteProfile::is_article_href`]), resolves them
//! against the page URL and turns each into a [`FeedItem`].  Titles and
//! teasers come from structured markup when the page provides it and from
//! [`Segmenter`] heuristics otherwise.

mod profile;

pub use profile::SiteProfile;

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info, instrument};
use url::Url;

use crate::error::{FeedError, FeedResult};
use crate::publish::stable_guid;
use crate::segment::{normalize_whitespace, MetaTail, Segmenter, SplitRule};
use crate::source::FeedItem;

/// Where an item's title and teaser came from.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Origin {
    /// Both from the site's structured elements.
    Structured,
    /// One structured element was missing and filled in from the link text.
    Mixed,
    /// Neither was present; the link text was segmented by `rule`.
    Heuristic(SplitRule),
}

/// Title and teaser extracted from one anchor.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Extraction {
    pub title: String,
    pub teaser: String,
    pub origin: Origin,
}

/// A compiled [`SiteProfile`].
pub struct Scraper {
    profile: SiteProfile,
    anchors: Selector,
    title: Selector,
    teaser: Selector,
    segmenter: Segmenter,
}

impl Scraper {
    pub fn new(profile: SiteProfile) -> FeedResult<Self> {
        let segmenter = Segmenter::new(MetaTail::for_brand(&profile.byline_brand)?);
        Ok(Self {
            anchors: selector("a[href]")?,
            title: selector(&profile.title_selector)?,
            teaser: selector(&profile.teaser_selector)?,
            segmenter,
            profile,
        })
    }

    /// Extract up to `max_items` articles from `html`.
    ///
    /// Links are deduplicated by their absolute URL within this call only.
    /// Every accepted item gets a guid derived from its link and `now` as
    /// its publication time.
    #[instrument(level = "info", skip_all, fields(base = %base_url, max_items = max_items))]
    pub fn scrape(&self, html: &str, base_url: &Url, max_items: usize, now: DateTime<Utc>) -> Vec<FeedItem> {
        let document = Html::parse_document(html);
        let mut seen: HashSet<String> = HashSet::new();
        let mut items = Vec::new();

        for anchor in document.select(&self.anchors) {
            if items.len() >= max_items {
                break;
            }

            let href = anchor.value().attr("href").unwrap_or_default().trim();
            if href.is_empty() || !self.profile.is_article_href(href) {
                continue;
            }

            let Ok(link) = base_url.join(href).map(String::from) else {
                debug!(%href, "Skipping unresolvable href");
                continue;
            };
            if seen.contains(&link) {
                continue;
            }

            let extraction = self.extract(anchor);
            if extraction.title.chars().count() < self.profile.min_title_chars.max(1) {
                debug!(%link, title = %extraction.title, "Title too short");
                continue;
            }

            let guid = stable_guid(&link);
            let Some(item) = FeedItem::new(extraction.title, extraction.teaser, link.clone()) else {
                continue;
            };
            debug!(%link, origin = ?extraction.origin, "Accepted article");

            seen.insert(link);
            items.push(item.with_identity(guid, now));
        }

        info!(count = items.len(), "Scraped articles");
        items
    }

    /// Pull title and teaser out of one anchor.
    ///
    /// An empty teaser falls back to the title.
    pub fn extract(&self, anchor: ElementRef<'_>) -> Extraction {
        let title = self.first_text(anchor, &self.title);
        let teaser = self.first_text(anchor, &self.teaser);
        let full = visible_text(anchor);

        let mut extraction = match (title, teaser) {
            (Some(title), Some(teaser)) => Extraction {
                title,
                teaser,
                origin: Origin::Structured,
            },
            (None, None) => {
                let seg = self.segmenter.split(&full);
                Extraction {
                    title: seg.title,
                    teaser: seg.teaser,
                    origin: Origin::Heuristic(seg.rule),
                }
            }
            (title, teaser) => {
                let seg = self.segmenter.split(&full);
                let title = title.unwrap_or(seg.title);
                let teaser = teaser.unwrap_or_else(|| {
                    let cleaned = self.segmenter.clean(&full);
                    // Kicker labels may precede the title inside the anchor.
                    cleaned
                        .split_once(title.as_str())
                        .map(|(_, rest)| rest.trim())
                        .filter(|rest| !rest.is_empty())
                        .map(String::from)
                        .unwrap_or(seg.teaser)
                });
                Extraction {
                    title,
                    teaser,
                    origin: Origin::Mixed,
                }
            }
        };

        if extraction.teaser.is_empty() {
            extraction.teaser = extraction.title.clone();
        }
        extraction
    }

    fn first_text(&self, anchor: ElementRef<'_>, sel: &Selector) -> Option<String> {
        anchor
            .select(sel)
            .next()
            .map(visible_text)
            .filter(|text| !text.is_empty())
    }
}

fn selector(css: &str) -> FeedResult<Selector> {
    Selector::parse(css).map_err(|e| FeedError::Selector {
        selector: css.to_string(),
        reason: e.to_string(),
    })
}

/// All text nodes below `el`, trimmed and joined by single spaces.
fn visible_text(el: ElementRef<'_>) -> String {
    normalize_whitespace(&el.text().collect::<Vec<_>>().join(" "))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
