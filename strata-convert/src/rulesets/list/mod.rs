//! List rule set
//!
//! The lightweight form is line-oriented: each line carrying a leading
//! `- ` marker (surrounding whitespace allowed) is one item. The rich form
//! is a single `<ul>` with one `<li>` per item, order preserved, no
//! whitespace between items.
//!
//! Best-effort handling of malformed input: a non-empty line without the
//! marker still becomes an item, and compression of markup with no `<li>`
//! at all falls back to treating each line of the stripped text as an
//! item.

use crate::ruleset::RuleSet;
use crate::rulesets::common::{compress_inline, expand_inline};
use regex::Regex;
use std::sync::OnceLock;

fn marker_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*-\s+").expect("Invalid list marker regex"))
}

fn li_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)<li[^>]*>(.*?)</li>").expect("Invalid list item regex"))
}

/// Strip an existing item marker so re-compression never stacks markers.
fn strip_marker(line: &str) -> &str {
    match marker_re().find(line) {
        Some(m) => line[m.end()..].trim_end(),
        None => line.trim(),
    }
}

/// Conversion rules for list blocks
pub struct ListRules;

impl RuleSet for ListRules {
    fn block_type(&self) -> &str {
        "list"
    }

    fn description(&self) -> &str {
        "One item per `- ` marked line, wrapped in a single list container"
    }

    fn to_rich(&self, lightweight: &str) -> String {
        let mut items = String::new();
        for line in lightweight.lines() {
            if line.trim().is_empty() {
                continue;
            }
            let item = strip_marker(line);
            items.push_str("<li>");
            items.push_str(&expand_inline(item));
            items.push_str("</li>");
        }
        format!("<ul>{items}</ul>")
    }

    fn to_lightweight(&self, rich: &str) -> String {
        let items: Vec<String> = li_re()
            .captures_iter(rich)
            .map(|cap| format!(" - {}", compress_inline(&cap[1]).trim()))
            .collect();

        if !items.is_empty() {
            return items.join("\n");
        }

        // No item tags at all: degrade to one item per non-empty line of
        // the stripped text.
        compress_inline(rich)
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| format!(" - {}", strip_marker(line)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
