//! Removal of the byline/date tail that listing pages append to anchor text.
//!
//! A teaser link on the Make Magazin overview reads like
//! `"<title> <teaser> 29.12.2025 10:00 Uhr 12 Make Magazin"`: a date, a
//! time, the word "Uhr", an optional comment count and the brand.  The brand
//! comes from the site profile so other outlets can reuse the same shapes.

use regex::Regex;

/// The three tail shapes, tried in order; at most one is removed.
#[derive(Debug, Clone)]
pub struct MetaTail {
    patterns: [Regex; 3],
}

impl MetaTail {
    /// Compile the tail patterns for `brand` (e.g. `"Make Magazin"`).
    pub fn for_brand(brand: &str) -> Result<Self, regex::Error> {
        let brand = regex::escape(brand);
        Ok(Self {
            patterns: [
                Regex::new(&format!(
                    r"(?:^|\s+)\d{{2}}\.\d{{2}}\.\d{{4}}\s+\d{{2}}:\d{{2}}\s+Uhr(?:\s+\d+)?\s+{brand}\s*$"
                ))?,
                Regex::new(&format!(r"(?:^|\s+)\d+\s+{brand}\s*$"))?,
                Regex::new(&format!(r"(?:^|\s+){brand}\s*$"))?,
            ],
        })
    }

    /// Strip the first matching tail from the end of `text`.
    ///
    /// Text without a tail comes back unchanged apart from trailing
    /// whitespace.
    pub fn strip(&self, text: &str) -> String {
        let cut = self
            .patterns
            .iter()
            .find_map(|re| re.find(text))
            .map_or(text.len(), |m| m.start());
        text[..cut].trim_end().to_string()
    }
}
