//! Free-text rule set
//!
//! The lightweight form is plain text with inline markers; blank lines
//! separate paragraphs and single newlines are soft breaks. The rich form
//! wraps each paragraph in `<p>` with `<br>` for the soft breaks.
//!
//! Compression maps paragraph boundaries back to blank lines, then hands
//! the rest to the shared inline compression (markers restored, unknown
//! tags stripped, entities decoded).

use crate::ruleset::RuleSet;
use crate::rulesets::common::{compress_inline, expand_inline};
use regex::Regex;
use std::sync::OnceLock;

fn blank_line_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n[ \t]*\n+").expect("Invalid blank line regex"))
}

fn paragraph_break_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)</p>\s*<p[^>]*>").expect("Invalid paragraph break regex"))
}

/// Conversion rules for free-text blocks
pub struct TextRules;

impl RuleSet for TextRules {
    fn block_type(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Free text with inline markers, paragraph per blank-line run"
    }

    fn to_rich(&self, lightweight: &str) -> String {
        let mut out = String::new();
        for paragraph in blank_line_re().split(lightweight) {
            let paragraph = paragraph.trim();
            if paragraph.is_empty() {
                continue;
            }
            let inline = expand_inline(paragraph).replace('\n', "<br>");
            out.push_str("<p>");
            out.push_str(&inline);
            out.push_str("</p>");
        }
        out
    }

    fn to_lightweight(&self, rich: &str) -> String {
        let unbroken = paragraph_break_re().replace_all(rich, "\n\n");
        compress_inline(&unbroken).trim().to_string()
    }
}
