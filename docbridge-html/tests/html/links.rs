//! End-to-end link rendering against the anchor prepass and route map.

use crate::common::{doc, heading, paragraph_of, run};
use docbridge_html::model::Link;
use docbridge_html::{render_html, RenderOptions, RouteMap};

fn linked(text: &str, link: Link) -> docbridge_html::model::TextRun {
    let mut run = run(text);
    run.link = Some(link);
    run
}

#[test]
fn heading_links_resolve_to_the_prepass_anchor() {
    let doc = doc(vec![
        heading(1, "Deployment Guide"),
        paragraph_of(vec![linked(
            "Deployment Guide",
            Link {
                heading_id: Some("h.abc".to_string()),
                ..Default::default()
            },
        )]),
    ]);
    let html = render_html(&doc, &RenderOptions::new());
    assert!(html.contains("<h1 id=\"deployment-guide\">"));
    assert!(html.contains("<a href=\"#deployment-guide\">Deployment Guide</a>"));
}

#[test]
fn unmatched_heading_links_slug_their_own_text() {
    let doc = doc(vec![paragraph_of(vec![linked(
        "Missing Section",
        Link {
            heading_id: Some("h.abc".to_string()),
            ..Default::default()
        },
    )])]);
    let html = render_html(&doc, &RenderOptions::new());
    assert!(html.contains("<a href=\"#missing-section\">Missing Section</a>"));
}

#[test]
fn bookmark_links_target_the_bookmark() {
    let doc = doc(vec![paragraph_of(vec![linked(
        "jump",
        Link {
            bookmark_id: Some("kix.bm7".to_string()),
            ..Default::default()
        },
    )])]);
    let html = render_html(&doc, &RenderOptions::new());
    assert_eq!(html, "<p><a href=\"#kix.bm7\">jump</a></p>");
}

#[test]
fn external_links_open_in_a_new_tab() {
    let doc = doc(vec![paragraph_of(vec![linked(
        "example",
        Link {
            url: Some("https://example.com".to_string()),
            ..Default::default()
        },
    )])]);
    let html = render_html(&doc, &RenderOptions::new());
    assert_eq!(
        html,
        "<p><a href=\"https://example.com\" target=\"_blank\" rel=\"noopener noreferrer\">example</a></p>"
    );
}

#[test]
fn routed_document_links_render_as_modals() {
    let mut routes = RouteMap::new();
    routes.insert("1Handbook".to_string(), "/handbook".to_string());
    let options = RenderOptions::new().with_routes(routes);

    let doc = doc(vec![paragraph_of(vec![linked(
        "the handbook",
        Link {
            url: Some("https://docs.google.com/document/d/1Handbook/edit".to_string()),
            ..Default::default()
        },
    )])]);
    let html = render_html(&doc, &options);
    assert_eq!(
        html,
        "<p><a href=\"/handbook\" data-modal=\"true\">the handbook</a></p>"
    );
}

#[test]
fn unrouted_document_links_stay_external() {
    let doc = doc(vec![paragraph_of(vec![linked(
        "elsewhere",
        Link {
            url: Some("https://docs.google.com/document/d/1Other/edit".to_string()),
            ..Default::default()
        },
    )])]);
    let html = render_html(&doc, &RenderOptions::new());
    assert!(html.contains("target=\"_blank\""));
    assert!(!html.contains("data-modal"));
}

#[test]
fn linked_runs_are_never_style_wrapped() {
    let mut styled = linked(
        "bold link",
        Link {
            url: Some("https://example.com".to_string()),
            ..Default::default()
        },
    );
    styled.bold = true;
    styled.italic = true;
    styled.underline = true;
    let doc = doc(vec![paragraph_of(vec![styled])]);
    let html = render_html(&doc, &RenderOptions::new());
    assert!(!html.contains("<strong>"));
    assert!(!html.contains("<em>"));
    assert!(!html.contains("<u>"));
    assert!(html.contains("<a href=\"https://example.com\""));
}
