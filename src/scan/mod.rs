//! Dependency-free feed scanner.
//!
//! Pulls titles, descriptions and links out of RSS 2.0 or Atom documents by
//! string search instead of a real XML parser.  The entry point is
//! [`parse_document`]; the pieces are public so that tests and other callers
//! can run a single stage.
//!
//! ```text
//!  document ──► detect_and_split ──► RawBlock* ──► parse_block ──► FeedItem*
//!                  (FormatKind)                      (tags::extract / strip)
//! ```

mod item;
pub mod tags;

pub use item::parse_block;

use crate::source::FeedItem;

/// Which syndication format a document uses.  Decided once per document.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FormatKind {
    Rss,
    Atom,
}

impl FormatKind {
    /// The token that opens an entry in this format.
    fn entry_token(self) -> &'static str {
        match self {
            FormatKind::Rss => "<item",
            FormatKind::Atom => "<entry",
        }
    }
}

/// The slice of a document that follows one `<item` / `<entry` token, up to
/// the next one.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct RawBlock<'a>(&'a str);

impl<'a> RawBlock<'a> {
    pub fn as_str(&self) -> &'a str {
        self.0
    }
}

/// Classify `document` and cut it into at most `max_items` entry blocks.
///
/// `<item` wins over `<entry`.  The preamble before the first entry is
/// discarded.  Returns `None` and no blocks when neither token occurs.
pub fn detect_and_split(document: &str, max_items: usize) -> (Option<FormatKind>, Vec<RawBlock<'_>>) {
    let format = if document.contains(FormatKind::Rss.entry_token()) {
        FormatKind::Rss
    } else if document.contains(FormatKind::Atom.entry_token()) {
        FormatKind::Atom
    } else {
        return (None, Vec::new());
    };

    let blocks = document
        .split(format.entry_token())
        .skip(1)
        .take(max_items)
        .map(RawBlock)
        .collect();

    (Some(format), blocks)
}

/// Run the whole reader pipeline over a fetched document.
///
/// Entries whose sanitized title is empty are dropped; the rest keep
/// document order.
pub fn parse_document(document: &str, max_items: usize) -> Vec<FeedItem> {
    let (format, blocks) = detect_and_split(document, max_items);
    let Some(format) = format else {
        return Vec::new();
    };

    let items: Vec<FeedItem> = blocks
        .into_iter()
        .filter_map(|block| parse_block(block, format))
        .collect();

    tracing::debug!(?format, count = items.len(), "Scanned feed document");
    items
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Channel title</title>
    <link>https://example.com/</link>
    <item>
      <title>First Post</title>
      <link>https://example.com/1</link>
      <description><![CDATA[<p>First description</p>]]></description>
    </item>
    <item>
      <title>Second Post</title>
      <link>https://example.com/2</link>
      <description>Second description</description>
    </item>
  </channel>
</rss>"#;

    const ATOM: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Channel title</title>
  <link href="https://example.com/" rel="alternate"/>
  <entry>
    <title type="html">First Post</title>
    <link rel="alternate" href="https://example.com/1"/>
    <summary type="html">&lt;p&gt;ignored&lt;/p&gt;</summary>
  </entry>
  <entry>
    <title>Second Post</title>
    <link href="https://example.com/2"/>
    <content>Second description</content>
  </entry>
</feed>"#;

    // -- detect_and_split ----------------------------------------------------

    #[test]
    fn detects_rss() {
        let (format, blocks) = detect_and_split(RSS, 20);
        assert_eq!(format, Some(FormatKind::Rss));
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].as_str().contains("First Post"));
        assert!(!blocks[0].as_str().contains("Channel title"), "preamble is discarded");
    }

    #[test]
    fn detects_atom() {
        let (format, blocks) = detect_and_split(ATOM, 20);
        assert_eq!(format, Some(FormatKind::Atom));
        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn unknown_document_has_no_format() {
        let (format, blocks) = detect_and_split("<html><body>nope</body></html>", 20);
        assert!(format.is_none());
        assert!(blocks.is_empty());
    }

    #[test]
    fn blocks_are_capped() {
        let doc = format!("<rss>{}</rss>", "<item><title>t</title></item>".repeat(50));
        let (_, blocks) = detect_and_split(&doc, 20);
        assert_eq!(blocks.len(), 20);
    }

    // -- parse_document ------------------------------------------------------

    #[test]
    fn rss_and_atom_pipelines_agree() {
        let atom = ATOM.replace(
            r#"<summary type="html">&lt;p&gt;ignored&lt;/p&gt;</summary>"#,
            "<summary><![CDATA[<p>First description</p>]]></summary>",
        );

        let from_rss = parse_document(RSS, 20);
        let from_atom = parse_document(&atom, 20);

        assert_eq!(from_rss.len(), 2);
        assert_eq!(from_rss, from_atom);
        assert_eq!(from_rss[0].title, "First Post");
        assert_eq!(from_rss[0].description, "First description");
        assert_eq!(from_rss[1].link, "https://example.com/2");
    }

    #[test]
    fn untitled_entries_are_dropped() {
        let doc = r#"<rss><channel>
            <item><title><![CDATA[<b></b>]]></title><link>https://x/1</link></item>
            <item><title>Kept</title></item>
        </channel></rss>"#;
        let items = parse_document(doc, 20);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Kept");
        assert_eq!(items[0].link, "");
    }

    #[test]
    fn garbage_yields_nothing() {
        assert!(parse_document("", 20).is_empty());
        assert!(parse_document("not a feed", 20).is_empty());
    }
}
