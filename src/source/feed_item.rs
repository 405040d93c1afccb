//! The core data type shared by the reader and the generator.
//!
//! `FeedItem` is what the scanner produces from a fetched feed and what the
//! scraper hands to the serializer.  Optional fields use empty strings or
//! `None` rather than missing keys, so every consumer sees the same shape.
//!
//! ## For contributors
//!
//! Construct items through [`FeedItem::new`] or the scanner/scraper.  Both
//! refuse to build an item with an empty title, so code downstream may rely
//! on `title` being non-empty.

use chrono::{DateTime, Utc};

/// Maximum number of characters kept from a description.
pub const DESCRIPTION_LIMIT: usize = 400;

/// Appended to descriptions that were cut at [`DESCRIPTION_LIMIT`].
pub const ELLIPSIS: &str = " …";

/// A single feed entry.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FeedItem {
    /// Human-readable headline.  Never empty.
    pub title: String,

    /// Summary or teaser text, already stripped of markup.
    pub description: String,

    /// URL to the full content.  Atom entries without a `<link href>` leave
    /// this empty.
    pub link: String,

    /// Stable identifier.  Only the generator fills this in (a hash of the
    /// link); items read from a feed carry `None`.
    pub guid: Option<String>,

    /// Publication timestamp.  Set by the generator, `None` on the reader.
    pub published: Option<DateTime<Utc>>,
}

impl FeedItem {
    /// Build an item, returning `None` when `title` is empty.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        link: impl Into<String>,
    ) -> Option<Self> {
        let title = title.into();
        if title.is_empty() {
            return None;
        }
        Some(Self {
            title,
            description: truncate_description(description.into()),
            link: link.into(),
            guid: None,
            published: None,
        })
    }

    /// Attach the generator-side identity and timestamp.
    pub fn with_identity(mut self, guid: String, published: DateTime<Utc>) -> Self {
        self.guid = Some(guid);
        self.published = Some(published);
        self
    }
}

/// Cut `text` to [`DESCRIPTION_LIMIT`] characters and append [`ELLIPSIS`]
/// when it is longer; shorter text is returned unchanged.
pub fn truncate_description(text: String) -> String {
    match text.char_indices().nth(DESCRIPTION_LIMIT) {
        Some((cut, _)) => {
            let mut out = text[..cut].to_string();
            out.push_str(ELLIPSIS);
            out
        }
        None => text,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
