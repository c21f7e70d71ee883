//! Heading rule set
//!
//! The lightweight form is a single `## `-prefixed line; the rich form is
//! an `<h2>`. Headings are one line by definition, so newlines collapse to
//! spaces on expansion.

use crate::ruleset::RuleSet;
use crate::rulesets::common::{compress_inline, expand_inline};
use regex::Regex;
use std::sync::OnceLock;

fn hash_prefix_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*#{1,6}\s*").expect("Invalid heading prefix regex"))
}

/// Conversion rules for heading blocks
pub struct HeadingRules;

impl RuleSet for HeadingRules {
    fn block_type(&self) -> &str {
        "heading"
    }

    fn description(&self) -> &str {
        "Single `## ` line to an h2 element"
    }

    fn to_rich(&self, lightweight: &str) -> String {
        let title = hash_prefix_re().replace(lightweight.trim(), "");
        let title = title.replace('\n', " ");
        format!("<h2>{}</h2>", expand_inline(title.trim()))
    }

    fn to_lightweight(&self, rich: &str) -> String {
        let text = compress_inline(rich).replace('\n', " ");
        // Strip an existing prefix so re-compression never stacks hashes.
        let title = hash_prefix_re().replace(text.trim(), "");
        format!("## {}", title.trim())
    }
}
