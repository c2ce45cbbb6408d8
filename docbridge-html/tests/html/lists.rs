//! List reconstruction tests: stack transitions, numbering lifecycles,
//! and tab-separated table runs.

use crate::common::{bullet, bullet_of, doc, doc_with_lists, para, render, run, table};

#[test]
fn flat_run_renders_one_unordered_list() {
    let doc = doc(vec![
        bullet("L", 0, "one"),
        bullet("L", 0, "two"),
        bullet("L", 0, "three"),
    ]);
    assert_eq!(
        render(&doc),
        "<ul><li>one</li><li>two</li><li>three</li></ul>"
    );
}

#[test]
fn decimal_glyphs_render_ordered_with_type() {
    let doc = doc_with_lists(
        vec![bullet("L", 0, "one"), bullet("L", 0, "two")],
        vec![("L", vec![(Some("DECIMAL"), None)])],
    );
    assert_eq!(
        render(&doc),
        "<ol type='1'><li>one</li><li>two</li></ol>"
    );
}

#[test]
fn alpha_and_roman_glyphs_map_to_type_attributes() {
    let doc = doc_with_lists(
        vec![bullet("A", 0, "a")],
        vec![("A", vec![(Some("UPPER_ALPHA"), None)])],
    );
    assert_eq!(render(&doc), "<ol type='A'><li>a</li></ol>");

    let doc = doc_with_lists(
        vec![bullet("R", 0, "r")],
        vec![("R", vec![(Some("ROMAN"), None)])],
    );
    assert_eq!(render(&doc), "<ol type='i'><li>r</li></ol>");
}

#[test]
fn bullet_family_glyphs_render_unordered() {
    let doc = doc_with_lists(
        vec![bullet("L", 0, "one")],
        vec![("L", vec![(Some("BULLET_DISC_CIRCLE_SQUARE"), None)])],
    );
    assert_eq!(render(&doc), "<ul><li>one</li></ul>");
}

#[test]
fn configured_start_number_is_emitted() {
    let doc = doc_with_lists(
        vec![bullet("L", 0, "one"), bullet("L", 0, "two")],
        vec![("L", vec![(Some("DECIMAL"), Some(5))])],
    );
    assert_eq!(
        render(&doc),
        "<ol type='1' start='5'><li>one</li><li>two</li></ol>"
    );
}

#[test]
fn deeper_item_nests_inside_the_open_li() {
    let doc = doc(vec![bullet("L", 0, "outer"), bullet("L", 1, "inner")]);
    let html = render(&doc);
    // The level-0 item stays open so the nested list lands inside it.
    assert_eq!(html, "<ul><li>outer<ul><li>inner</li></ul></ul>");
    assert!(!html.contains("outer</li>"));
}

#[test]
fn returning_to_the_outer_level_continues_numbering() {
    let doc = doc_with_lists(
        vec![
            bullet("L", 0, "first"),
            bullet("L", 1, "sub"),
            bullet("L", 0, "second"),
        ],
        vec![("L", vec![(Some("DECIMAL"), None), (Some("DECIMAL"), None)])],
    );
    assert_eq!(
        render(&doc),
        "<ol type='1'><li>first<ol type='1'><li>sub</li></ol></ol>\
         <ol type='1' start='2'><li>second</li></ol>"
    );
}

#[test]
fn sibling_list_interruption_preserves_counters() {
    let doc = doc_with_lists(
        vec![
            bullet("L", 0, "l1"),
            bullet("L", 0, "l2"),
            bullet("M", 0, "m1"),
            bullet("L", 0, "l3"),
        ],
        vec![
            ("L", vec![(Some("DECIMAL"), None)]),
            ("M", vec![(Some("DECIMAL"), None)]),
        ],
    );
    assert_eq!(
        render(&doc),
        "<ol type='1'><li>l1</li><li>l2</li></ol>\
         <ol type='1'><li>m1</li></ol>\
         <ol type='1' start='3'><li>l3</li></ol>"
    );
}

#[test]
fn paragraph_boundary_resets_counters() {
    let doc = doc_with_lists(
        vec![
            bullet("L", 0, "l1"),
            bullet("L", 0, "l2"),
            para("interlude"),
            bullet("L", 0, "l3"),
        ],
        vec![("L", vec![(Some("DECIMAL"), None)])],
    );
    assert_eq!(
        render(&doc),
        "<ol type='1'><li>l1</li><li>l2</li></ol>\
         <p>interlude</p>\
         <ol type='1'><li>l3</li></ol>"
    );
}

#[test]
fn table_boundary_resets_counters() {
    let doc = doc_with_lists(
        vec![
            bullet("L", 0, "l1"),
            table(vec![vec!["cell"]]),
            bullet("L", 0, "l2"),
        ],
        vec![("L", vec![(Some("DECIMAL"), Some(4))])],
    );
    assert_eq!(
        render(&doc),
        "<ol type='1' start='4'><li>l1</li></ol>\
         <table><tr><td>cell</td></tr></table>\
         <ol type='1' start='4'><li>l2</li></ol>"
    );
}

#[test]
fn tab_run_collapses_into_a_table_and_still_counts() {
    let doc = doc_with_lists(
        vec![
            bullet("L", 0, "alpha"),
            bullet("L", 0, "x\ty"),
            bullet("L", 0, "z\tw"),
            bullet("L", 0, "tail"),
        ],
        vec![("L", vec![(Some("DECIMAL"), None)])],
    );
    assert_eq!(
        render(&doc),
        "<ol type='1'><li>alpha</li></ol>\
         <table style=\"margin-left: 0px\"><tr><td>x</td><td>y</td></tr><tr><td>z</td><td>w</td></tr></table>\
         <ol type='1' start='3'><li>tail</li></ol>"
    );
}

#[test]
fn tab_rows_trim_cells_and_omit_empty_ones() {
    let doc = doc(vec![bullet("L", 0, "a\t\t b ")]);
    assert_eq!(
        render(&doc),
        "<table style=\"margin-left: 0px\"><tr><td>a</td><td>b</td></tr></table>"
    );
}

#[test]
fn tab_tables_indent_with_nesting_level() {
    let doc = doc(vec![bullet("L", 2, "a\tb")]);
    assert_eq!(
        render(&doc),
        "<table style=\"margin-left: 80px\"><tr><td>a</td><td>b</td></tr></table>"
    );
}

#[test]
fn tab_collection_stops_at_the_first_plain_item() {
    let doc = doc_with_lists(
        vec![bullet("L", 0, "x\ty"), bullet("L", 0, "plain")],
        vec![("L", vec![(Some("DECIMAL"), None)])],
    );
    // The consumed tab row still counts, so the surviving item is number 2.
    assert_eq!(
        render(&doc),
        "<table style=\"margin-left: 0px\"><tr><td>x</td><td>y</td></tr></table>\
         <ol type='1' start='2'><li>plain</li></ol>"
    );
}

#[test]
fn tab_collection_stops_at_a_different_level() {
    let doc = doc(vec![bullet("L", 0, "x\ty"), bullet("L", 1, "z\tw")]);
    assert_eq!(
        render(&doc),
        "<table style=\"margin-left: 0px\"><tr><td>x</td><td>y</td></tr></table>\
         <table style=\"margin-left: 40px\"><tr><td>z</td><td>w</td></tr></table>"
    );
}

#[test]
fn missing_list_definition_renders_unordered() {
    let doc = doc(vec![bullet("unknown", 0, "one")]);
    assert_eq!(render(&doc), "<ul><li>one</li></ul>");
}

#[test]
fn list_items_render_their_runs_inline() {
    let mut strong = run("important");
    strong.bold = true;
    let doc = doc(vec![bullet_of("L", 0, vec![run("an "), strong])]);
    assert_eq!(render(&doc), "<ul><li>an <strong>important</strong></li></ul>");
}

#[test]
fn three_levels_nest_in_sequence() {
    let doc = doc(vec![
        bullet("L", 0, "a"),
        bullet("L", 1, "b"),
        bullet("L", 2, "c"),
    ]);
    assert_eq!(
        render(&doc),
        "<ul><li>a<ul><li>b<ul><li>c</li></ul></ul></ul>"
    );
}
