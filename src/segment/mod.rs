//! Heuristic title/teaser segmentation for scraped anchor text.
//!
//! Listing pages often glue headline and teaser into one link text.  The
//! [`Segmenter`] cleans that text and splits it with a three-tier rule:
//!
//! 1. **Colon**: `"Title: teaser"`, when both halves have plausible lengths.
//! 2. **Sentence**: the first period ends the title, same length checks.
//! 3. **Hard cut**: long text is cut at the last word boundary at or before
//!    character 80.
//!
//! Text that fits none of these is used whole as both title and teaser.
//! Every result records which rule produced it, so callers can tell a
//! delimiter-based split from a blind cut.

mod meta_tail;

pub use meta_tail::MetaTail;

/// Shortest title the delimiter rules accept.
const MIN_TITLE_CHARS: usize = 10;
/// Longest title the colon rule accepts.
const MAX_COLON_TITLE_CHARS: usize = 120;
/// Longest title the sentence rule accepts.
const MAX_SENTENCE_TITLE_CHARS: usize = 110;
/// Shortest teaser the delimiter rules accept.
const MIN_TEASER_CHARS: usize = 20;
/// Text longer than this is hard cut when no delimiter fits.
const HARD_CUT_THRESHOLD: usize = 90;
/// Position of the hard cut.
const HARD_CUT_AT: usize = 80;

/// Which tier produced a [`Segmentation`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SplitRule {
    Colon,
    Sentence,
    HardCut,
    /// No rule applied; title and teaser are the whole text.
    Whole,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Segmentation {
    pub title: String,
    pub teaser: String,
    pub rule: SplitRule,
}

/// Splits scraped text into title and teaser after removing a meta tail.
#[derive(Debug, Clone)]
pub struct Segmenter {
    tail: MetaTail,
}

impl Segmenter {
    pub fn new(tail: MetaTail) -> Self {
        Self { tail }
    }

    /// Collapse whitespace and remove the byline tail, without splitting.
    pub fn clean(&self, text: &str) -> String {
        self.tail.strip(&normalize_whitespace(text))
    }

    pub fn split(&self, text: &str) -> Segmentation {
        let cleaned = self.clean(text);

        if let Some(seg) = split_once_checked(&cleaned, ':', MAX_COLON_TITLE_CHARS, SplitRule::Colon) {
            return seg;
        }
        if let Some(seg) = split_once_checked(&cleaned, '.', MAX_SENTENCE_TITLE_CHARS, SplitRule::Sentence) {
            return seg;
        }
        if cleaned.chars().count() > HARD_CUT_THRESHOLD {
            return hard_cut(&cleaned);
        }

        Segmentation {
            title: cleaned.clone(),
            teaser: cleaned,
            rule: SplitRule::Whole,
        }
    }
}

/// Collapse every whitespace run to a single space and trim the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn split_once_checked(text: &str, delimiter: char, max_title: usize, rule: SplitRule) -> Option<Segmentation> {
    let (left, right) = text.split_once(delimiter)?;
    let (left, right) = (left.trim(), right.trim());

    let title_len = left.chars().count();
    let fits = (MIN_TITLE_CHARS..=max_title).contains(&title_len)
        && right.chars().count() >= MIN_TEASER_CHARS;

    fits.then(|| Segmentation {
        title: left.to_string(),
        teaser: right.to_string(),
        rule,
    })
}

fn hard_cut(text: &str) -> Segmentation {
    // Byte offset just past character HARD_CUT_AT, so a space sitting exactly
    // at position 80 still counts as a boundary.
    let window_end = text
        .char_indices()
        .nth(HARD_CUT_AT + 1)
        .map_or(text.len(), |(i, _)| i);

    let (title, rest) = match text[..window_end].rfind(' ') {
        Some(space) if space > 0 => (&text[..space], &text[space + 1..]),
        _ => {
            let cut = text
                .char_indices()
                .nth(HARD_CUT_AT)
                .map_or(text.len(), |(i, _)| i);
            (&text[..cut], &text[cut..])
        }
    };

    let teaser = if rest.is_empty() { text } else { rest };
    Segmentation {
        title: title.to_string(),
        teaser: teaser.to_string(),
        rule: SplitRule::HardCut,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
