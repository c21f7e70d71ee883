//! Error types for conversion operations

use std::fmt;

/// Errors that can occur while driving block conversions
///
/// Conversion functions themselves are total over arbitrary string input and
/// never fail; errors only arise from configuration problems (an unregistered
/// block type) or from malformed wire payloads at the boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// No rule set registered for the requested block type
    RuleSetNotFound(String),
    /// Payload did not match the expected wire shape
    InvalidPayload(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::RuleSetNotFound(block_type) => {
                write!(f, "No rule set registered for block type '{block_type}'")
            }
            ConvertError::InvalidPayload(msg) => write!(f, "Invalid payload: {msg}"),
        }
    }
}

impl std::error::Error for ConvertError {}
