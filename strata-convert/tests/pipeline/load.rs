//! Load-transition tests
//!
//! Covers the load decision table: the toggle gates expansion, content
//! already marked rich is never re-expanded, and the rule set's `to_rich`
//! runs at most once per load.

use super::counting_pipeline;
use strata_convert::rulesets::list::ListRules;
use strata_convert::rulesets::text::TextRules;
use strata_convert::{BlockPayload, ContentFormat, ConversionPolicy, ConvertError, Pipeline};

#[test]
fn rich_payload_passes_through_with_toggle_on() {
    let (pipeline, counters) = counting_pipeline(TextRules, ConversionPolicy::new(true, false));
    let payload = BlockPayload::rich("text", "<p>already rich</p>");

    let authored = pipeline.load(payload).unwrap();

    assert_eq!(authored.content, "<p>already rich</p>");
    assert_eq!(authored.format, ContentFormat::Rich);
    assert_eq!(counters.to_rich_calls(), 0);
}

#[test]
fn rich_payload_passes_through_with_toggle_off() {
    let (pipeline, counters) = counting_pipeline(TextRules, ConversionPolicy::new(false, false));
    let payload = BlockPayload::rich("text", "<p>already rich</p>");

    let authored = pipeline.load(payload).unwrap();

    assert_eq!(authored.content, "<p>already rich</p>");
    assert_eq!(authored.format, ContentFormat::Rich);
    assert_eq!(counters.to_rich_calls(), 0);
}

#[test]
fn toggle_off_never_invokes_to_rich() {
    let (pipeline, counters) = counting_pipeline(ListRules, ConversionPolicy::new(false, false));
    let payload = BlockPayload::lightweight("list", " - one\n - two\n - three");

    let authored = pipeline.load(payload).unwrap();

    assert_eq!(authored.content, " - one\n - two\n - three");
    assert_eq!(authored.format, ContentFormat::Lightweight);
    assert_eq!(counters.to_rich_calls(), 0);
}

#[test]
fn lightweight_list_expands_with_toggle_on() {
    let (pipeline, counters) = counting_pipeline(ListRules, ConversionPolicy::new(true, false));
    let payload = BlockPayload::lightweight("list", " - one\n - two\n - three");

    let authored = pipeline.load(payload).unwrap();

    assert_eq!(
        authored.content,
        "<ul><li>one</li><li>two</li><li>three</li></ul>"
    );
    assert_eq!(authored.format, ContentFormat::Rich);
    assert_eq!(counters.to_rich_calls(), 1);
}

#[test]
fn absent_marker_counts_as_lightweight() {
    let payload: BlockPayload =
        serde_json::from_str(r#"{"blockType": "text", "text": "test"}"#).unwrap();
    let (pipeline, counters) = counting_pipeline(TextRules, ConversionPolicy::new(true, false));

    let authored = pipeline.load(payload).unwrap();

    assert_eq!(authored.content, "<p>test</p>");
    assert_eq!(counters.to_rich_calls(), 1);
}

#[test]
fn unregistered_block_type_is_a_configuration_error() {
    let pipeline = Pipeline::with_defaults(ConversionPolicy::new(true, false));
    let payload = BlockPayload::lightweight("tweet", "whatever");

    let result = pipeline.load(payload);

    assert_eq!(
        result.unwrap_err(),
        ConvertError::RuleSetNotFound("tweet".to_string())
    );
}

#[test]
fn unregistered_block_type_fails_even_when_load_would_skip() {
    let pipeline = Pipeline::with_defaults(ConversionPolicy::new(false, false));
    let payload = BlockPayload::rich("tweet", "whatever");

    assert!(pipeline.load(payload).is_err());
}
