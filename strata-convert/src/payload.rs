//! Block payload data model
//!
//! A block's textual content travels in one of two syntaxes: the lightweight
//! plain-text dialect it is persisted in, or the rich (HTML) syntax the
//! authoring surface edits. The format marker records which one the content
//! currently holds; no operation may rewrite the content without updating the
//! marker in the same step.

use serde::{Deserialize, Serialize};

/// Which syntax a block's content currently holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFormat {
    /// Fully-expanded markup suitable for live authoring (HTML)
    Rich,
    /// Compact plain-text markup dialect suitable for storage
    Lightweight,
}

impl ContentFormat {
    /// Build a format from the persisted `isHtml` marker.
    ///
    /// An absent marker deserializes as `false`, so absent and `false` both
    /// mean [`ContentFormat::Lightweight`].
    pub fn from_marker(is_html: bool) -> Self {
        if is_html {
            ContentFormat::Rich
        } else {
            ContentFormat::Lightweight
        }
    }

    /// The persisted `isHtml` marker for this format.
    pub fn as_marker(self) -> bool {
        matches!(self, ContentFormat::Rich)
    }
}

/// A block's content as persisted and exchanged
///
/// Wire shape: `{ "blockType": string, "text": string, "isHtml"?: boolean }`.
/// `isHtml` absent or `false` means the text is in the lightweight dialect;
/// `true` means it is rich. Serialization always emits the marker explicitly,
/// since it is the single source of truth a later load will trust.
///
/// The payload has no identity of its own; the surrounding block constructs
/// one per load or serialize exchange and owns it for that exchange only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockPayload {
    /// Selects the applicable rule set
    pub block_type: String,
    /// The textual body; its meaning depends on the format marker
    pub text: String,
    /// Format marker: `true` for rich, absent/`false` for lightweight
    #[serde(default)]
    pub is_html: bool,
}

impl BlockPayload {
    /// Construct a payload with an explicit format.
    pub fn new(block_type: impl Into<String>, text: impl Into<String>, format: ContentFormat) -> Self {
        BlockPayload {
            block_type: block_type.into(),
            text: text.into(),
            is_html: format.as_marker(),
        }
    }

    /// Construct a lightweight payload, as a block arriving without the
    /// marker would deserialize.
    pub fn lightweight(block_type: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(block_type, text, ContentFormat::Lightweight)
    }

    /// Construct a rich payload.
    pub fn rich(block_type: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(block_type, text, ContentFormat::Rich)
    }

    /// The format the marker currently records.
    pub fn format(&self) -> ContentFormat {
        ContentFormat::from_marker(self.is_html)
    }
}

/// The live authoring copy of a block's content, produced by a load
///
/// Load rewrites only this in-memory copy; the persisted marker is not
/// touched until the next serialize produces a fresh payload.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthoredState {
    pub block_type: String,
    pub content: String,
    pub format: ContentFormat,
}

impl AuthoredState {
    pub fn new(
        block_type: impl Into<String>,
        content: impl Into<String>,
        format: ContentFormat,
    ) -> Self {
        AuthoredState {
            block_type: block_type.into(),
            content: content.into(),
            format,
        }
    }
}
