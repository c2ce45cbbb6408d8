//! Heading anchor prepass.
//!
//! A single scan over the document body collects every heading's trimmed
//! plain text and assigns it a generated anchor id. The index is keyed by
//! the text itself, not by any structural heading identifier, and the
//! first occurrence of a given text wins; a later heading with identical
//! text shares the earlier anchor.

use crate::model::Document;
use std::collections::HashMap;

/// Mapping from trimmed heading text to generated anchor id.
///
/// Built fresh for each conversion; never outlives the call that built it.
#[derive(Debug, Default)]
pub struct HeadingAnchorIndex {
    anchors: HashMap<String, String>,
}

impl HeadingAnchorIndex {
    /// Scans every heading paragraph (levels 1–4) in the document body.
    ///
    /// Blank headings are not indexed, and neither are headings whose text
    /// slugs to the empty string.
    pub fn build(doc: &Document) -> Self {
        let mut index = HeadingAnchorIndex::default();
        for element in doc.body.as_deref().unwrap_or(&[]) {
            let Some(paragraph) = &element.paragraph else {
                continue;
            };
            if paragraph.style.heading_level().is_none() {
                continue;
            }
            let text = paragraph.plain_text();
            let text = text.trim();
            if text.is_empty() {
                continue;
            }
            let slug = slugify(text);
            if slug.is_empty() {
                continue;
            }
            index
                .anchors
                .entry(text.to_string())
                .or_insert(slug);
        }
        index
    }

    /// Anchor id for a heading's trimmed text, if one was indexed.
    pub fn get(&self, text: &str) -> Option<&str> {
        self.anchors.get(text).map(String::as_str)
    }
}

/// Derives a lowercase, hyphenated anchor id from human-readable text.
///
/// Apostrophes and quote marks are dropped outright, so "Don't" slugs to
/// `dont` rather than `don-t`. Whitespace becomes a hyphen; any other
/// character that is not ASCII-alphanumeric or a hyphen is dropped. Runs
/// of hyphens collapse and the ends are trimmed, so the result is either
/// empty or matches `[a-z0-9]([a-z0-9-]*[a-z0-9])?`.
pub fn slugify(text: &str) -> String {
    let mut raw = String::with_capacity(text.len());
    for ch in text.to_lowercase().chars() {
        match ch {
            '\'' | '"' | '\u{2018}' | '\u{2019}' | '\u{201C}' | '\u{201D}' => {}
            ch if ch.is_whitespace() => raw.push('-'),
            ch if ch.is_ascii_alphanumeric() || ch == '-' => raw.push(ch),
            _ => {}
        }
    }

    let mut slug = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if ch == '-' && slug.ends_with('-') {
            continue;
        }
        slug.push(ch);
    }
    slug.trim_matches('-').to_string()
}
