//! Quote rule set
//!
//! The lightweight form prefixes each line with `> `; the rich form is a
//! single `<blockquote>` with `<br>` between the quoted lines.

use crate::ruleset::RuleSet;
use crate::rulesets::common::{compress_inline, expand_inline};
use regex::Regex;
use std::sync::OnceLock;

fn quote_prefix_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*>\s?").expect("Invalid quote prefix regex"))
}

fn strip_prefix(line: &str) -> &str {
    match quote_prefix_re().find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}

/// Conversion rules for quote blocks
pub struct QuoteRules;

impl RuleSet for QuoteRules {
    fn block_type(&self) -> &str {
        "quote"
    }

    fn description(&self) -> &str {
        "`> ` prefixed lines to a blockquote"
    }

    fn to_rich(&self, lightweight: &str) -> String {
        let lines: Vec<String> = lightweight
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| expand_inline(strip_prefix(line)))
            .collect();
        format!("<blockquote>{}</blockquote>", lines.join("<br>"))
    }

    fn to_lightweight(&self, rich: &str) -> String {
        compress_inline(rich)
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| format!("> {}", strip_prefix(line)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
