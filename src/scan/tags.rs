//! First-match tag extraction and markup stripping.
//!
//! Neither function is an XML parser.  [`extract`] honours only the first
//! occurrence of a tag, so an Atom entry with several `<link>` elements
//! yields the first one and nothing else.  [`strip`] drops everything
//! between `<` and `>` and leaves entities such as `&amp;` untouched.

const CDATA_OPEN: &str = "<![CDATA[";
const CDATA_CLOSE: &str = "]]>";

/// Return the inner text of the first `<tag ...>...</tag>` in `block`.
///
/// Absent tags, an unterminated opening tag or a missing closing tag all
/// give an empty string.  The result is trimmed and has any CDATA wrapper
/// markers removed; the text between them is kept verbatim.
pub fn extract(block: &str, tag: &str) -> String {
    let open = format!("<{tag}");
    let Some(open_pos) = block.find(&open) else {
        return String::new();
    };

    let Some(gt) = block[open_pos..].find('>') else {
        return String::new();
    };
    let start = open_pos + gt + 1;

    let close = format!("</{tag}>");
    let Some(len) = block[start..].find(&close) else {
        return String::new();
    };

    block[start..start + len]
        .trim()
        .replace(CDATA_OPEN, "")
        .replace(CDATA_CLOSE, "")
}

/// Remove every `<...>` run from `text`, keeping all other characters in
/// order.
pub fn strip(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut inside = false;
    for ch in text.chars() {
        match ch {
            '<' => inside = true,
            '>' => inside = false,
            _ if !inside => out.push(ch),
            _ => {}
        }
    }
    out
}
