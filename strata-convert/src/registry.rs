//! Rule set registry for block type discovery and selection
//!
//! This module provides a centralized registry for all available rule sets.
//! Rule sets can be registered and retrieved by block type.

use crate::error::ConvertError;
use crate::ruleset::RuleSet;
use std::collections::HashMap;

/// Registry of per-block-type conversion rules
///
/// Provides a centralized registry for all available rule sets, resolved
/// once at startup. A block type with no registered rule set cannot be
/// loaded or saved; the lookup miss is a configuration error, not a
/// conversion failure.
///
/// # Examples
///
/// ```ignore
/// let mut registry = RuleSetRegistry::new();
/// registry.register(MyRules);
///
/// let rules = registry.get("my-block")?;
/// let rich = rules.to_rich("lightweight text");
/// ```
pub struct RuleSetRegistry {
    rule_sets: HashMap<String, Box<dyn RuleSet>>,
}

impl RuleSetRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        RuleSetRegistry {
            rule_sets: HashMap::new(),
        }
    }

    /// Register a rule set
    ///
    /// If a rule set for the same block type already exists, it will be
    /// replaced.
    pub fn register<R: RuleSet + 'static>(&mut self, rule_set: R) {
        self.rule_sets
            .insert(rule_set.block_type().to_string(), Box::new(rule_set));
    }

    /// Get the rule set for a block type
    pub fn get(&self, block_type: &str) -> Result<&dyn RuleSet, ConvertError> {
        self.rule_sets
            .get(block_type)
            .map(|r| r.as_ref())
            .ok_or_else(|| ConvertError::RuleSetNotFound(block_type.to_string()))
    }

    /// Check if a block type has registered rules
    pub fn has(&self, block_type: &str) -> bool {
        self.rule_sets.contains_key(block_type)
    }

    /// List all registered block types (sorted)
    pub fn list_block_types(&self) -> Vec<String> {
        let mut names: Vec<_> = self.rule_sets.keys().cloned().collect();
        names.sort();
        names
    }

    /// Create a registry with the built-in rule sets
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::rulesets::text::TextRules);
        registry.register(crate::rulesets::list::ListRules);
        registry.register(crate::rulesets::heading::HeadingRules);
        registry.register(crate::rulesets::quote::QuoteRules);

        registry
    }
}

impl Default for RuleSetRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
