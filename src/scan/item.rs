//! Turn one raw entry block into a [`FeedItem`].

use super::tags::{extract, strip};
use super::{FormatKind, RawBlock};
use crate::source::FeedItem;

/// How far past `<link` to look for `href` when the tag never closes.
const LINK_SCAN_BOUND: usize = 200;

/// Parse a block according to `format`.
///
/// Returns `None` when the sanitized title is empty; that is the only
/// reason an entry is skipped.
pub fn parse_block(block: RawBlock<'_>, format: FormatKind) -> Option<FeedItem> {
    let raw = block.as_str();
    let title = extract(raw, "title");

    let (description, link) = match format {
        FormatKind::Rss => (extract(raw, "description"), extract(raw, "link")),
        FormatKind::Atom => {
            let mut description = extract(raw, "summary");
            if description.is_empty() {
                description = extract(raw, "content");
            }
            (description, atom_href(raw))
        }
    };

    FeedItem::new(strip(&title), strip(&description), link)
}

/// Value of the `href="..."` attribute on the first `<link` tag, or empty.
fn atom_href(raw: &str) -> String {
    let Some(pos) = raw.find("<link") else {
        return String::new();
    };
    let rest = &raw[pos..];
    let end = rest.find('>').unwrap_or_else(|| {
        rest.char_indices()
            .nth(LINK_SCAN_BOUND)
            .map_or(rest.len(), |(i, _)| i)
    });
    let chunk = &rest[..end];

    const HREF: &str = "href=\"";
    chunk
        .find(HREF)
        .map(|i| &chunk[i + HREF.len()..])
        .and_then(|value| value.find('"').map(|close| value[..close].to_string()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{DESCRIPTION_LIMIT, ELLIPSIS};

    fn rss(block: &str) -> Option<FeedItem> {
        parse_block(RawBlock(block), FormatKind::Rss)
    }

    fn atom(block: &str) -> Option<FeedItem> {
        parse_block(RawBlock(block), FormatKind::Atom)
    }

    #[test]
    fn rss_fields() {
        let item = rss("><title>T</title><link>https://e.com/a</link><description>D</description></item>").unwrap();
        assert_eq!(item.title, "T");
        assert_eq!(item.description, "D");
        assert_eq!(item.link, "https://e.com/a");
    }

    #[test]
    fn markup_is_stripped_from_title_and_description() {
        let item = rss("><title><![CDATA[<em>Bold</em> move]]></title><description>&lt;kept&gt; <p>para</p></description>").unwrap();
        assert_eq!(item.title, "Bold move");
        assert_eq!(item.description, "&lt;kept&gt; para");
    }

    #[test]
    fn long_rss_description_is_truncated() {
        let body = "w".repeat(DESCRIPTION_LIMIT + 50);
        let item = rss(&format!("><title>T</title><description>{body}</description>")).unwrap();
        assert!(item.description.ends_with(ELLIPSIS));
        assert_eq!(item.description.chars().count(), DESCRIPTION_LIMIT + ELLIPSIS.chars().count());
    }

    #[test]
    fn empty_title_drops_entry() {
        assert!(rss("><description>orphan</description>").is_none());
    }

    #[test]
    fn atom_prefers_summary_over_content() {
        let item = atom("><title>T</title><summary>S</summary><content>C</content>").unwrap();
        assert_eq!(item.description, "S");
    }

    #[test]
    fn atom_falls_back_to_content() {
        let item = atom("><title>T</title><content type=\"html\">C</content>").unwrap();
        assert_eq!(item.description, "C");
    }

    #[test]
    fn atom_link_from_href_attribute() {
        let item = atom(r#"><title>T</title><link rel="alternate" href="https://e.com/x"/>"#).unwrap();
        assert_eq!(item.link, "https://e.com/x");
    }

    #[test]
    fn atom_first_link_only() {
        let item = atom(r#"><title>T</title><link href="https://e.com/1"/><link href="https://e.com/2"/>"#).unwrap();
        assert_eq!(item.link, "https://e.com/1");
    }

    #[test]
    fn atom_link_without_href_is_empty() {
        let item = atom(r#"><title>T</title><link rel="self"/>"#).unwrap();
        assert_eq!(item.link, "");
    }

    #[test]
    fn atom_link_without_closing_bracket_uses_scan_bound() {
        assert_eq!(atom_href(r#"<link href="https://e.com/open""#), "https://e.com/open");
        let far = format!("<link {} href=\"https://e.com/far\"", " ".repeat(LINK_SCAN_BOUND));
        assert_eq!(atom_href(&far), "");
    }
}
