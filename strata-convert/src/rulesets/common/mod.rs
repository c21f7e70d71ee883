//! Shared inline-marker handling for the built-in rule sets
//!
//! The lightweight dialect carries a small set of inline markers that every
//! textual block type shares:
//!
//! | Lightweight        | Rich                      |
//! |--------------------|---------------------------|
//! | `**bold**`         | `<strong>bold</strong>`   |
//! | `_italic_`         | `<em>italic</em>`         |
//! | `[text](url)`      | `<a href="url">text</a>`  |
//!
//! Expansion HTML-escapes the payload text before inserting tags, so author
//! input can never smuggle markup into the rich output. Compression is the
//! reverse: known tags become markers, `<br>` becomes a newline, unknown
//! tags are stripped, and entities are decoded last.
//!
//! Both directions are total. Unbalanced markers or tags simply pass
//! through untouched; nothing here can fail.

use regex::Regex;
use std::sync::OnceLock;

fn bold_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*([^*]+)\*\*").expect("Invalid bold regex"))
}

fn italic_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Requires a boundary before the opening marker so underscores inside
    // words and URLs are left alone.
    RE.get_or_init(|| Regex::new(r"(^|[\s(\[])_([^_\n]+)_").expect("Invalid italic regex"))
}

fn link_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[([^\]]*)\]\(([^)\s]+)\)").expect("Invalid link regex"))
}

fn strong_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?is)<(?:strong|b)\b[^>]*>(.*?)</(?:strong|b)>")
            .expect("Invalid strong tag regex")
    })
}

fn em_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?is)<(?:em|i)\b[^>]*>(.*?)</(?:em|i)>").expect("Invalid em tag regex")
    })
}

fn anchor_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?is)<a\s[^>]*href="([^"]*)"[^>]*>(.*?)</a>"#)
            .expect("Invalid anchor tag regex")
    })
}

fn br_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<br\s*/?>").expect("Invalid br tag regex"))
}

fn any_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<[^>]+>").expect("Invalid tag regex"))
}

/// Expand inline lightweight markers into rich tags.
///
/// The input is HTML-escaped first; the only tags in the output are the
/// ones this function inserts.
pub fn expand_inline(text: &str) -> String {
    let escaped = html_escape::encode_text(text);
    let bolded = bold_re().replace_all(&escaped, "<strong>$1</strong>");
    let italicized = italic_re().replace_all(&bolded, "$1<em>$2</em>");
    link_re()
        .replace_all(&italicized, r#"<a href="$2">$1</a>"#)
        .into_owned()
}

/// Compress rich inline tags back into lightweight markers.
///
/// Known tags become markers, `<br>` becomes a newline, any remaining tag
/// is stripped, and HTML entities are decoded last.
pub fn compress_inline(rich: &str) -> String {
    let unbolded = strong_tag_re().replace_all(rich, "**$1**");
    let unitalicized = em_tag_re().replace_all(&unbolded, "_${1}_");
    let unlinked = anchor_tag_re().replace_all(&unitalicized, "[$2]($1)");
    let with_newlines = br_tag_re().replace_all(&unlinked, "\n");
    let stripped = any_tag_re().replace_all(&with_newlines, "");
    html_escape::decode_html_entities(&stripped).into_owned()
}
