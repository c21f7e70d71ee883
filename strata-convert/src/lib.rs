//! Bidirectional content-format conversion for structured content blocks
//!
//!     A block's textual payload exists in up to three representations: the
//!     rich (HTML) markup the authoring surface edits, the lightweight
//!     plain-text dialect it is persisted in, and the serialized wire shape
//!     that carries the text plus its format marker. This crate reconciles
//!     the three under two process-wide toggles, guaranteeing each
//!     conversion runs at most once per lifecycle transition so repeated
//!     save/load cycles are idempotent.
//!
//!     This is a pure lib: it powers the strata CLI but is shell agnostic.
//!     The block editor shell (rendering, focus, event bus, DOM) is an
//!     external collaborator; all it hands us is the raw payload at
//!     creation time and a request for the persisted payload at save time.
//!
//!     The file structure:
//!     .
//!     ├── error.rs                # ConvertError
//!     ├── payload.rs              # BlockPayload, AuthoredState, ContentFormat
//!     ├── policy.rs               # ConversionPolicy and the decision tables
//!     ├── pipeline.rs             # Pipeline orchestrating load/serialize
//!     ├── ruleset.rs              # RuleSet trait definition
//!     ├── registry.rs             # RuleSetRegistry for discovery and selection
//!     ├── rulesets
//!     │   ├── common              # Shared inline-marker handling
//!     │   └── <block type>        # One module per built-in block type
//!     └── lib.rs
//!
//! Decision tables
//!
//!     Load: the `convert_from_lightweight` toggle gates expansion, and
//!     content already marked rich is never re-expanded. Save: the
//!     `convert_to_lightweight` toggle alone decides, because the authoring
//!     surface always holds rich content after a load; the only question is
//!     whether to compress it back down before persisting.
//!
//! Rule sets
//!
//!     Per-block-type capabilities are implemented with the RuleSet trait:
//!     a `to_rich` and a `to_lightweight`, both total over arbitrary input.
//!     Malformed markup degrades to a best-effort output; there is no error
//!     kind for unparseable content. A missing rule set for a block type is
//!     a configuration error surfaced by the registry, never a conversion
//!     failure.
//!
//! Library choices
//!
//!     The built-in rule sets translate a deliberately small marker dialect,
//!     not CommonMark, so the expansion is a handful of anchored regexes
//!     (`regex`) over escaped text (`html-escape`) rather than a full
//!     markdown engine. Round-trip fidelity is whatever each block type's
//!     rules choose to implement, nothing more.

pub mod error;
pub mod payload;
pub mod pipeline;
pub mod policy;
pub mod registry;
pub mod ruleset;
pub mod rulesets;

pub use error::ConvertError;
pub use payload::{AuthoredState, BlockPayload, ContentFormat};
pub use pipeline::Pipeline;
pub use policy::{ConversionPolicy, LoadAction, SaveAction};
pub use registry::RuleSetRegistry;
pub use ruleset::RuleSet;
