//! Inline run rendering.
//!
//! Each styled text run renders independently: text normalization first,
//! then either an anchor tag (for linked runs) or bold/italic/underline
//! composition. A linked run never also receives style wrapping.

use super::anchors::HeadingAnchorIndex;
use super::links::{LinkResolver, RouteMap};
use crate::model::{Paragraph, TextRun};

/// Renders styled text runs to HTML strings.
pub struct InlineRunRenderer<'a> {
    resolver: LinkResolver<'a>,
}

impl<'a> InlineRunRenderer<'a> {
    pub fn new(anchors: &'a HeadingAnchorIndex, routes: &'a RouteMap) -> Self {
        InlineRunRenderer {
            resolver: LinkResolver::new(anchors, routes),
        }
    }

    /// Renders every run of a paragraph, concatenated in document order.
    pub fn render_paragraph(&self, paragraph: &Paragraph) -> String {
        paragraph
            .runs
            .iter()
            .map(|run| self.render(run))
            .collect()
    }

    /// Renders one run.
    ///
    /// Linked runs wrap the normalized text in an anchor tag and skip the
    /// style-composition step entirely. Unlinked runs compose styles in a
    /// fixed order (`<strong>` innermost, then `<em>`, then `<u>`), so a
    /// fully styled run is `<u><em><strong>text</strong></em></u>`.
    pub fn render(&self, run: &TextRun) -> String {
        let text = normalize_text(&run.text);

        if let Some(link) = &run.link {
            let resolved = self.resolver.resolve(link, &run.text);
            let mut anchor = String::with_capacity(text.len() + 64);
            anchor.push_str("<a href=\"");
            anchor.push_str(&escape_attr(&resolved.href));
            anchor.push('"');
            if resolved.external {
                anchor.push_str(" target=\"_blank\" rel=\"noopener noreferrer\"");
            }
            if resolved.modal {
                anchor.push_str(" data-modal=\"true\"");
            }
            anchor.push('>');
            anchor.push_str(&text);
            anchor.push_str("</a>");
            return anchor;
        }

        let mut html = text;
        if run.bold {
            html = format!("<strong>{html}</strong>");
        }
        if run.italic {
            html = format!("<em>{html}</em>");
        }
        if run.underline {
            html = format!("<u>{html}</u>");
        }
        html
    }
}

/// HTML-encodes a run's text.
///
/// Beyond the standard special characters, seven punctuation code points
/// (curly quotes, en/em dash, ellipsis) become numeric character
/// references: generic encoding leaves them as raw UTF-8, which garbles
/// when the embedding page is served with a mismatched charset.
pub fn normalize_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '\u{2018}' => out.push_str("&#8216;"),
            '\u{2019}' => out.push_str("&#8217;"),
            '\u{201C}' => out.push_str("&#8220;"),
            '\u{201D}' => out.push_str("&#8221;"),
            '\u{2013}' => out.push_str("&#8211;"),
            '\u{2014}' => out.push_str("&#8212;"),
            '\u{2026}' => out.push_str("&#8230;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escapes a value for use inside a double-quoted HTML attribute.
pub(crate) fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}
