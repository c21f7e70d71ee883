//! Conversion policy
//!
//! Two process-wide toggles decide whether conversions run at the load and
//! save transitions. The policy is built once (usually from strata-config)
//! and passed explicitly to the pipeline; it is not ambient mutable state.

use crate::payload::ContentFormat;

/// What the load transition should do with a payload's content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadAction {
    /// Expand the content with the rule set's `to_rich`
    RunToRich,
    /// Pass content and format through unchanged
    Skip,
}

/// What the save transition should do with the authored content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveAction {
    /// Compress the content with the rule set's `to_lightweight`
    RunToLightweight,
    /// Persist the authored content as rich
    Skip,
}

/// Process-wide conversion configuration
///
/// Resolved once at initialization and read-only for the rest of the
/// session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionPolicy {
    /// Enables load-time expansion of lightweight content
    pub convert_from_lightweight: bool,
    /// Enables save-time compression back to the lightweight dialect
    pub convert_to_lightweight: bool,
}

impl ConversionPolicy {
    pub fn new(convert_from_lightweight: bool, convert_to_lightweight: bool) -> Self {
        ConversionPolicy {
            convert_from_lightweight,
            convert_to_lightweight,
        }
    }

    /// Decide the load-time action for content in the given format.
    ///
    /// Content that is already rich is never re-expanded, regardless of the
    /// toggle; this is the idempotence guard for repeated save/load cycles.
    pub fn resolve_load_action(&self, format: ContentFormat) -> LoadAction {
        if self.convert_from_lightweight && format == ContentFormat::Lightweight {
            LoadAction::RunToRich
        } else {
            LoadAction::Skip
        }
    }

    /// Decide the save-time action.
    ///
    /// The authoring surface always holds rich content after a load, so the
    /// decision rests on the toggle alone; there is no format to consult.
    pub fn resolve_save_action(&self) -> SaveAction {
        if self.convert_to_lightweight {
            SaveAction::RunToLightweight
        } else {
            SaveAction::Skip
        }
    }
}

impl Default for ConversionPolicy {
    /// Load legacy lightweight content, persist rich going forward.
    fn default() -> Self {
        ConversionPolicy::new(true, false)
    }
}
