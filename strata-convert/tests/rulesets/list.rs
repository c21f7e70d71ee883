//! List rule set tests

use strata_convert::rulesets::list::ListRules;
use strata_convert::RuleSet;

#[test]
fn marked_lines_become_items_in_one_container() {
    assert_eq!(
        ListRules.to_rich(" - one\n - two\n - three"),
        "<ul><li>one</li><li>two</li><li>three</li></ul>"
    );
}

#[test]
fn items_preserve_order() {
    assert_eq!(
        ListRules.to_rich("- z\n- a\n- m"),
        "<ul><li>z</li><li>a</li><li>m</li></ul>"
    );
}

#[test]
fn unmarked_lines_degrade_to_items() {
    assert_eq!(
        ListRules.to_rich("no marker here\n - marked"),
        "<ul><li>no marker here</li><li>marked</li></ul>"
    );
}

#[test]
fn empty_lines_are_skipped() {
    assert_eq!(
        ListRules.to_rich(" - one\n\n - two"),
        "<ul><li>one</li><li>two</li></ul>"
    );
}

#[test]
fn empty_input_yields_an_empty_container() {
    assert_eq!(ListRules.to_rich(""), "<ul></ul>");
}

#[test]
fn item_text_is_escaped() {
    assert_eq!(
        ListRules.to_rich(" - 1 < 2"),
        "<ul><li>1 &lt; 2</li></ul>"
    );
}

#[test]
fn inline_markers_expand_inside_items() {
    assert_eq!(
        ListRules.to_rich(" - **bold** item"),
        "<ul><li><strong>bold</strong> item</li></ul>"
    );
}

#[test]
fn compression_emits_one_marked_line_per_item() {
    assert_eq!(
        ListRules.to_lightweight("<ul><li>one</li><li>two</li><li>three</li></ul>"),
        " - one\n - two\n - three"
    );
}

#[test]
fn compression_tolerates_attributes_and_whitespace() {
    assert_eq!(
        ListRules.to_lightweight("<ul class=\"x\">\n  <li data-i=\"0\">one</li>\n  <li>two</li>\n</ul>"),
        " - one\n - two"
    );
}

#[test]
fn compression_without_item_tags_degrades_to_lines() {
    assert_eq!(
        ListRules.to_lightweight("one\ntwo"),
        " - one\n - two"
    );
}

#[test]
fn compression_does_not_stack_markers() {
    let once = ListRules.to_lightweight(" - one\n - two");
    assert_eq!(once, " - one\n - two");
    assert_eq!(ListRules.to_lightweight(&once), once);
}

#[test]
fn round_trip_restores_the_lightweight_text() {
    let lightweight = " - one\n - two\n - three";
    assert_eq!(
        ListRules.to_lightweight(&ListRules.to_rich(lightweight)),
        lightweight
    );
}
