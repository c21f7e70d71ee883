//! Serialization pipeline
//!
//! Orchestrates the policy and the per-type rule sets across a block's two
//! lifecycle transitions: load (persisted payload → live authoring copy) and
//! serialize (authoring copy → fresh persisted payload).
//!
//! Each transition runs its conversion at most once, so repeated save/load
//! cycles under a fixed policy are idempotent. The returned payload's format
//! marker is always explicit; it is the single source of truth the next load
//! trusts.

use crate::error::ConvertError;
use crate::payload::{AuthoredState, BlockPayload, ContentFormat};
use crate::policy::{ConversionPolicy, LoadAction, SaveAction};
use crate::registry::RuleSetRegistry;

/// Drives block content through the load and save transitions
pub struct Pipeline {
    registry: RuleSetRegistry,
    policy: ConversionPolicy,
}

impl Pipeline {
    pub fn new(registry: RuleSetRegistry, policy: ConversionPolicy) -> Self {
        Pipeline { registry, policy }
    }

    /// Pipeline over the built-in rule sets
    pub fn with_defaults(policy: ConversionPolicy) -> Self {
        Pipeline::new(RuleSetRegistry::with_defaults(), policy)
    }

    pub fn registry(&self) -> &RuleSetRegistry {
        &self.registry
    }

    pub fn policy(&self) -> ConversionPolicy {
        self.policy
    }

    /// Load a persisted payload into the live authoring copy.
    ///
    /// If the policy resolves to RunToRich, the content is replaced with the
    /// rule set's `to_rich` output and the authored copy is marked rich. On
    /// Skip, content and format pass through unchanged; lightweight content
    /// loaded with the toggle off keeps its lightweight marker, so the
    /// marker stays truthful even when the authoring surface receives
    /// unexpanded text.
    ///
    /// The rule set is resolved up front either way, so a missing
    /// registration surfaces deterministically rather than only under one
    /// policy setting.
    pub fn load(&self, payload: BlockPayload) -> Result<AuthoredState, ConvertError> {
        let rules = self.registry.get(&payload.block_type)?;

        let authored = match self.policy.resolve_load_action(payload.format()) {
            LoadAction::RunToRich => AuthoredState::new(
                payload.block_type,
                rules.to_rich(&payload.text),
                ContentFormat::Rich,
            ),
            LoadAction::Skip => {
                let format = payload.format();
                AuthoredState::new(payload.block_type, payload.text, format)
            }
        };

        Ok(authored)
    }

    /// Serialize the authoring copy into a fresh persisted payload.
    ///
    /// If the policy resolves to RunToLightweight, the content is replaced
    /// with the rule set's `to_lightweight` output and the payload is marked
    /// lightweight. On Skip, the content is persisted as-is and marked rich.
    pub fn serialize(&self, authored: AuthoredState) -> Result<BlockPayload, ConvertError> {
        let rules = self.registry.get(&authored.block_type)?;

        let payload = match self.policy.resolve_save_action() {
            SaveAction::RunToLightweight => BlockPayload::new(
                authored.block_type,
                rules.to_lightweight(&authored.content),
                ContentFormat::Lightweight,
            ),
            SaveAction::Skip => BlockPayload::new(
                authored.block_type,
                authored.content,
                ContentFormat::Rich,
            ),
        };

        Ok(payload)
    }

    /// Run a full lifecycle: load a persisted payload and serialize it back.
    ///
    /// This is the path the block editor shell drives on a save with no
    /// intervening edits.
    pub fn roundtrip(&self, payload: BlockPayload) -> Result<BlockPayload, ConvertError> {
        let authored = self.load(payload)?;
        self.serialize(authored)
    }
}
