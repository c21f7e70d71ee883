//! RuleSet trait definition
//!
//! This module defines the core RuleSet trait that every block type's
//! conversion rules must implement. The trait provides a uniform interface
//! for translating a block's content between the two syntaxes.

/// Conversion rules for one block type
///
/// Implementors provide bidirectional translation between the lightweight
/// plain-text dialect a block persists and the rich (HTML) syntax the
/// authoring surface edits.
///
/// Both directions must be total: any input string, including malformed
/// markup, yields a best-effort output. A rule set never fails and never
/// performs I/O; both functions are pure and deterministic.
///
/// # Examples
///
/// ```ignore
/// struct MyRules;
///
/// impl RuleSet for MyRules {
///     fn block_type(&self) -> &str {
///         "my-block"
///     }
///
///     fn to_rich(&self, lightweight: &str) -> String {
///         // Expand lightweight markers into HTML
///         todo!()
///     }
///
///     fn to_lightweight(&self, rich: &str) -> String {
///         // Compress HTML back into lightweight markers
///         todo!()
///     }
/// }
/// ```
pub trait RuleSet: Send + Sync {
    /// The block type these rules apply to (e.g., "text", "list")
    fn block_type(&self) -> &str;

    /// Optional description of this block type's content shape
    fn description(&self) -> &str {
        ""
    }

    /// Expand lightweight syntax into the rich authoring syntax.
    ///
    /// Must accept any input. Malformed lightweight markup degrades to a
    /// best-effort expansion rather than an error.
    fn to_rich(&self, lightweight: &str) -> String;

    /// Compress rich syntax back into the lightweight storage dialect.
    ///
    /// Must accept any input. Unknown tags are stripped rather than
    /// rejected.
    fn to_lightweight(&self, rich: &str) -> String;
}
