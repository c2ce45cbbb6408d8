//! Document body conversion.
//!
//! [`render_html`] walks the document body exactly once, left to right,
//! with an explicit cursor: list-item processing can consume elements
//! beyond the current one (tab-separated runs collapse into a single
//! table), so a plain iterator is not enough. Tables and plain paragraphs
//! are block boundaries that flush the list state; everything else routes
//! through the inline run renderer.
//!
//! All conversion state (the heading anchor index, the list stack and
//! counters, the output buffer) is scoped to one call. Converting
//! unrelated documents back to back, or the same document twice, cannot
//! leak numbering or anchors between runs.

pub mod anchors;
pub mod inline;
pub mod links;
pub mod lists;

use crate::model::{Document, Paragraph, Table};
use anchors::HeadingAnchorIndex;
use inline::InlineRunRenderer;
use links::RouteMap;
use lists::ListRenderState;

/// Options for document conversion.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Cross-document routes consulted by link resolution.
    pub routes: RouteMap,
}

impl RenderOptions {
    pub fn new() -> Self {
        RenderOptions::default()
    }

    pub fn with_routes(mut self, routes: RouteMap) -> Self {
        self.routes = routes;
        self
    }
}

/// Converts a document to an embeddable HTML fragment.
///
/// The fragment has no surrounding `<html>`/`<body>`; an absent body
/// yields the empty string.
pub fn render_html(doc: &Document, options: &RenderOptions) -> String {
    let anchors = HeadingAnchorIndex::build(doc);
    let inline = InlineRunRenderer::new(&anchors, &options.routes);
    let mut lists = ListRenderState::new(doc);
    let mut out = String::new();

    let body = doc.body.as_deref().unwrap_or(&[]);
    let mut cursor = 0;
    while cursor < body.len() {
        let element = &body[cursor];
        if let Some(table) = &element.table {
            lists.close_all(&mut out);
            render_table(&mut out, table);
            cursor += 1;
        } else if let Some(paragraph) = &element.paragraph {
            if let Some(bullet) = &paragraph.bullet {
                let consumed = lists.process_list_item(
                    &mut out,
                    paragraph,
                    bullet,
                    &body[cursor + 1..],
                    &inline,
                );
                cursor += 1 + consumed;
            } else {
                lists.close_all(&mut out);
                render_block_paragraph(&mut out, paragraph, &anchors, &inline);
                cursor += 1;
            }
        } else {
            cursor += 1;
        }
    }
    lists.close_all(&mut out);

    out
}

/// Renders a non-bulleted paragraph: `<h1>`–`<h4>` for heading styles
/// (with the prepass anchor id attached when one was indexed), `<p>`
/// otherwise.
fn render_block_paragraph(
    out: &mut String,
    paragraph: &Paragraph,
    anchors: &HeadingAnchorIndex,
    inline: &InlineRunRenderer<'_>,
) {
    let content = inline.render_paragraph(paragraph);
    match paragraph.style.heading_level() {
        Some(level) => {
            let text = paragraph.plain_text();
            match anchors.get(text.trim()) {
                Some(slug) => out.push_str(&format!("<h{level} id=\"{slug}\">")),
                None => out.push_str(&format!("<h{level}>")),
            }
            out.push_str(&content);
            out.push_str(&format!("</h{level}>"));
        }
        None => {
            out.push_str("<p>");
            out.push_str(&content);
            out.push_str("</p>");
        }
    }
}

/// Renders a real table. Cells flatten to plain text; run styling and
/// links inside cells are not rendered.
fn render_table(out: &mut String, table: &Table) {
    out.push_str("<table>");
    for row in &table.rows {
        out.push_str("<tr>");
        for cell in &row.cells {
            out.push_str("<td>");
            out.push_str(&inline::normalize_text(&cell.plain_text()));
            out.push_str("</td>");
        }
        out.push_str("</tr>");
    }
    out.push_str("</table>");
}
