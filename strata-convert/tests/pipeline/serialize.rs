//! Save-transition tests
//!
//! Covers the save decision table (the toggle alone decides), the marker
//! invariant on the returned payload, and idempotence of repeated
//! save/load cycles.

use super::counting_pipeline;
use strata_convert::rulesets::text::TextRules;
use strata_convert::{
    AuthoredState, BlockPayload, ContentFormat, ConversionPolicy, ConvertError, Pipeline, RuleSet,
};

#[test]
fn toggle_off_persists_rich_content_unchanged() {
    let (pipeline, counters) = counting_pipeline(TextRules, ConversionPolicy::new(true, false));
    let authored = AuthoredState::new("text", "test", ContentFormat::Rich);

    let payload = pipeline.serialize(authored).unwrap();

    assert_eq!(payload.text, "test");
    assert!(payload.is_html);
    assert_eq!(counters.to_lightweight_calls(), 0);
}

#[test]
fn toggle_on_compresses_and_marks_lightweight() {
    let (pipeline, counters) = counting_pipeline(TextRules, ConversionPolicy::new(true, true));
    let authored = AuthoredState::new("text", "<p>test</p>", ContentFormat::Rich);

    let payload = pipeline.serialize(authored).unwrap();

    assert_eq!(payload.text, TextRules.to_lightweight("<p>test</p>"));
    assert!(!payload.is_html);
    assert_eq!(counters.to_lightweight_calls(), 1);
}

#[test]
fn free_text_scenario_toggle_on() {
    let pipeline = Pipeline::with_defaults(ConversionPolicy::new(true, true));
    let authored = AuthoredState::new("text", "test", ContentFormat::Rich);

    let payload = pipeline.serialize(authored).unwrap();

    assert!(!payload.is_html);
}

#[test]
fn free_text_scenario_toggle_off() {
    let pipeline = Pipeline::with_defaults(ConversionPolicy::new(true, false));
    let authored = AuthoredState::new("text", "test", ContentFormat::Rich);

    let payload = pipeline.serialize(authored).unwrap();

    assert!(payload.is_html);
    assert_eq!(payload.text, "test");
}

#[test]
fn save_runs_regardless_of_the_load_toggle() {
    let (pipeline, counters) = counting_pipeline(TextRules, ConversionPolicy::new(false, true));
    let authored = AuthoredState::new("text", "<p>test</p>", ContentFormat::Rich);

    let payload = pipeline.serialize(authored).unwrap();

    assert!(!payload.is_html);
    assert_eq!(counters.to_lightweight_calls(), 1);
}

#[test]
fn returned_marker_is_always_explicit() {
    for to_lightweight in [true, false] {
        let pipeline = Pipeline::with_defaults(ConversionPolicy::new(true, to_lightweight));
        let authored = AuthoredState::new("text", "<p>hi</p>", ContentFormat::Rich);

        let payload = pipeline.serialize(authored).unwrap();
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            json.get("isHtml").and_then(|v| v.as_bool()),
            Some(!to_lightweight)
        );
    }
}

#[test]
fn repeated_roundtrips_are_idempotent() {
    let input = " - one\n - two\n - three";

    for (from, to) in [(true, true), (true, false), (false, true), (false, false)] {
        let pipeline = Pipeline::with_defaults(ConversionPolicy::new(from, to));

        let first = pipeline
            .roundtrip(BlockPayload::lightweight("list", input))
            .unwrap();
        let second = pipeline.roundtrip(first.clone()).unwrap();

        assert_eq!(second, first, "policy ({from}, {to}) failed to stabilize");
    }
}

#[test]
fn full_cycle_with_both_toggles_restores_the_lightweight_text() {
    let pipeline = Pipeline::with_defaults(ConversionPolicy::new(true, true));
    let payload = BlockPayload::lightweight("list", " - one\n - two\n - three");

    let serialized = pipeline.roundtrip(payload).unwrap();

    assert_eq!(serialized.text, " - one\n - two\n - three");
    assert!(!serialized.is_html);
}

#[test]
fn unregistered_block_type_is_an_error() {
    let pipeline = Pipeline::with_defaults(ConversionPolicy::new(true, true));
    let authored = AuthoredState::new("tweet", "whatever", ContentFormat::Rich);

    let result = pipeline.serialize(authored);

    assert_eq!(
        result.unwrap_err(),
        ConvertError::RuleSetNotFound("tweet".to_string())
    );
}
