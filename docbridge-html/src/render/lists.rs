//! List rendering state.
//!
//! Bulleted paragraphs do not arrive as nested structures: each one
//! carries a (list id, nesting level) pair, and the nesting has to be
//! reconstructed while walking the body left to right. The state here owns
//! the stack of currently open `<ol>`/`<ul>` tags (outermost first), the
//! per-(list, level) numbering counters, and the tab lookahead that turns
//! a run of tab-separated sibling items into a `<table>` instead of a
//! list.
//!
//! Counter lifecycle: a counter seeds to one below the configured start
//! and survives sibling-list and level transitions inside a run of list
//! items. Only a block boundary (a table, a plain paragraph, or the end
//! of the document) clears counters, and then only for the list ids that
//! were actually open ([`ListRenderState::close_all`]).

use super::inline::{normalize_text, InlineRunRenderer};
use crate::model::{Bullet, Document, GlyphFormat, Paragraph, StructuralElement};
use std::collections::HashMap;

/// One currently open list tag.
#[derive(Debug, Clone, PartialEq)]
struct OpenList {
    list_id: String,
    level: u32,
    ordered: bool,
}

/// Reconstructs nested list markup from a flat run of bulleted paragraphs.
///
/// Built fresh for each conversion and discarded at the end of it.
pub struct ListRenderState<'a> {
    doc: &'a Document,
    stack: Vec<OpenList>,
    counters: HashMap<String, HashMap<u32, i64>>,
    last_rendered: Option<(String, u32)>,
    item_open: bool,
}

impl<'a> ListRenderState<'a> {
    pub fn new(doc: &'a Document) -> Self {
        ListRenderState {
            doc,
            stack: Vec::new(),
            counters: HashMap::new(),
            last_rendered: None,
            item_open: false,
        }
    }

    /// Renders one bulleted paragraph, opening and closing list tags as
    /// needed.
    ///
    /// `rest` is the slice of body elements after the current one; tabular
    /// handling may consume a prefix of it. Returns how many elements
    /// beyond the current one were consumed so the caller can advance its
    /// cursor past them.
    pub fn process_list_item(
        &mut self,
        out: &mut String,
        paragraph: &Paragraph,
        bullet: &Bullet,
        rest: &[StructuralElement],
        inline: &InlineRunRenderer<'_>,
    ) -> usize {
        let list_id = bullet.list_id.as_str();
        let level = bullet.nesting_level;
        let props = self.doc.level_properties(list_id, level);

        self.counters
            .entry(list_id.to_string())
            .or_default()
            .entry(level)
            .or_insert(props.start - 1);

        let plain = paragraph.plain_text();
        if plain.contains('\t') {
            return self.tabular_rows(out, &plain, bullet, rest, props.start);
        }

        let needs_new_list = self.stack.is_empty()
            || self
                .last_rendered
                .as_ref()
                .map(|(id, lvl)| (id.as_str(), *lvl))
                != Some((list_id, level));

        if needs_new_list {
            // Close deeper and sibling lists, stopping at an ancestor of
            // this list at a shallower level. A nested list opened here
            // lands inside the ancestor's still-open item.
            while let Some(top) = self.stack.last() {
                if top.list_id == list_id && top.level < level {
                    break;
                }
                out.push_str(close_tag(top.ordered));
                self.stack.pop();
            }

            let counter = self.advance(list_id, level, props.start);
            out.push_str(&open_tag(props.glyph, counter));
            self.stack.push(OpenList {
                list_id: list_id.to_string(),
                level,
                ordered: props.is_ordered(),
            });
        } else {
            if self.item_open {
                out.push_str("</li>");
                self.item_open = false;
            }
            self.advance(list_id, level, props.start);
        }

        out.push_str("<li>");
        out.push_str(&inline.render_paragraph(paragraph));

        // One-element lookahead: an immediately following item of the same
        // list at a strictly deeper level nests inside this `<li>`, so its
        // closing tag is withheld.
        let continues_deeper = rest
            .first()
            .and_then(|element| element.paragraph.as_ref())
            .and_then(|paragraph| paragraph.bullet.as_ref())
            .is_some_and(|next| next.list_id == bullet.list_id && next.nesting_level > level);
        if continues_deeper {
            self.item_open = true;
        } else {
            out.push_str("</li>");
            self.item_open = false;
        }

        self.last_rendered = Some((list_id.to_string(), level));
        0
    }

    /// Renders a run of tab-separated sibling items as a table.
    ///
    /// Collects the current row plus every immediately following bullet
    /// paragraph of the same list and level whose text also contains a
    /// tab. The rows render as `<tr>`s with tab-split, trimmed cells
    /// (empty cells omitted) and a left margin proportional to the
    /// nesting level. Numbering still counts the consumed rows. Returns
    /// the count of elements consumed beyond the current one.
    fn tabular_rows(
        &mut self,
        out: &mut String,
        first_row: &str,
        bullet: &Bullet,
        rest: &[StructuralElement],
        start: i64,
    ) -> usize {
        self.close_all(out);

        let mut rows = vec![first_row.to_string()];
        for element in rest {
            let Some(paragraph) = &element.paragraph else {
                break;
            };
            let Some(next) = &paragraph.bullet else {
                break;
            };
            if next.list_id != bullet.list_id || next.nesting_level != bullet.nesting_level {
                break;
            }
            let text = paragraph.plain_text();
            if !text.contains('\t') {
                break;
            }
            rows.push(text);
        }

        let margin = 40 * bullet.nesting_level;
        out.push_str(&format!("<table style=\"margin-left: {margin}px\">"));
        for row in &rows {
            out.push_str("<tr>");
            for cell in row.split('\t') {
                let cell = cell.trim();
                if cell.is_empty() {
                    continue;
                }
                out.push_str("<td>");
                out.push_str(&normalize_text(cell));
                out.push_str("</td>");
            }
            out.push_str("</tr>");
        }
        out.push_str("</table>");

        // close_all above may have cleared this list's counters; reseed
        // before advancing so the consumed rows still count.
        let counter = self
            .counters
            .entry(bullet.list_id.clone())
            .or_default()
            .entry(bullet.nesting_level)
            .or_insert(start - 1);
        *counter += rows.len() as i64;

        rows.len() - 1
    }

    /// Closes the open item and every open list, then clears the counters
    /// of every list id that was open.
    ///
    /// Invoked at block boundaries (a table, a plain paragraph, end of
    /// document), never on the new-list/sibling-list transitions inside
    /// [`ListRenderState::process_list_item`], which leave counters
    /// intact.
    pub fn close_all(&mut self, out: &mut String) {
        if self.item_open {
            out.push_str("</li>");
            self.item_open = false;
        }
        let mut touched: Vec<String> = Vec::new();
        while let Some(open) = self.stack.pop() {
            out.push_str(close_tag(open.ordered));
            if !touched.contains(&open.list_id) {
                touched.push(open.list_id);
            }
        }
        for list_id in touched {
            self.counters.remove(&list_id);
        }
    }

    /// Bumps and returns the counter for a (list, level) pair, seeding it
    /// from the configured start if nothing has.
    fn advance(&mut self, list_id: &str, level: u32, start: i64) -> i64 {
        let counter = self
            .counters
            .entry(list_id.to_string())
            .or_default()
            .entry(level)
            .or_insert(start - 1);
        *counter += 1;
        *counter
    }
}

fn open_tag(glyph: Option<GlyphFormat>, counter: i64) -> String {
    match glyph {
        Some(glyph) if counter != 1 => {
            format!("<ol type='{}' start='{}'>", glyph.html_type(), counter)
        }
        Some(glyph) => format!("<ol type='{}'>", glyph.html_type()),
        None => "<ul>".to_string(),
    }
}

fn close_tag(ordered: bool) -> &'static str {
    if ordered {
        "</ol>"
    } else {
        "</ul>"
    }
}
