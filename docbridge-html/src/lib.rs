//! HTML fragment rendering for structured word-processing documents
//!
//!     This crate converts a structured document model (headings,
//!     paragraphs, multi-level lists, tables, styled text runs with
//!     optional links) into an HTML fragment suitable for embedding in a
//!     web page. Documents arrive as JSON exports of the source system;
//!     the fragment comes back as one string with no surrounding
//!     `<html>`/`<body>`.
//!
//! Architecture
//!
//!     The conversion is a single left-to-right scan of the document body
//!     (./render/mod.rs) over four collaborators, leaves first:
//!
//!     - render/anchors.rs    # heading-text → anchor-id prepass
//!     - render/inline.rs     # one styled run → HTML string
//!     - render/links.rs      # href decisions and the cross-document route map
//!     - render/lists.rs      # list stack, numbering counters, tab lookahead
//!
//!     The hard part is list reconstruction: bulleted paragraphs arrive
//!     flat, each tagged with a (list id, nesting level) pair, and the
//!     nesting, the numbering, and the tab-separated table runs are all
//!     rebuilt from that flat sequence with bounded lookahead. The main
//!     loop therefore drives an explicit cursor rather than an iterator:
//!     a list item can consume the elements that follow it.
//!
//!     This is a pure lib, that is, it powers the docbridge CLI but is
//!     shell agnostic: no printing, no env vars, no filesystem access.
//!     All conversion state lives inside one [`render_html`] call, so a
//!     caller can convert unrelated documents concurrently from however
//!     many threads it likes.
//!
//! Input tolerance
//!
//!     The wire model (./model.rs) defaults every optional field rather
//!     than failing: a missing nesting level is level 0, a missing glyph
//!     type is an unordered level, a missing list configuration starts at
//!     1, and unknown structural elements are skipped. The only hard
//!     failure is input that does not deserialize into a document at all,
//!     surfaced by [`parse_document`] as a [`RenderError`].

pub mod error;
pub mod model;
pub mod render;

pub use error::RenderError;
pub use model::Document;
pub use render::links::RouteMap;
pub use render::{render_html, RenderOptions};

/// Parses a JSON document export.
///
/// A JSON `null` is rejected as an invalid document rather than a parse
/// failure: it is well-formed JSON that simply is not a document.
pub fn parse_document(json: &str) -> Result<Document, RenderError> {
    let value: serde_json::Value = serde_json::from_str(json)
        .map_err(|e| RenderError::ParseError(format!("invalid document JSON: {e}")))?;
    if value.is_null() {
        return Err(RenderError::InvalidDocument("document is null".to_string()));
    }
    serde_json::from_value(value)
        .map_err(|e| RenderError::ParseError(format!("malformed document: {e}")))
}
