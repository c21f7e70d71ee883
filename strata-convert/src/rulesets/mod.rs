//! Built-in rule set implementations
//!
//! One module per block type, plus shared inline-marker handling in
//! `common`. Every rule set here follows the same contract: total,
//! best-effort expansion and compression, never an error.

pub mod common;
pub mod heading;
pub mod list;
pub mod quote;
pub mod text;
