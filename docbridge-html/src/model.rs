//! Core data structures for the structured document model.
//!
//! Documents arrive as JSON exports of the source word-processing system:
//! an ordered body of structural elements (paragraphs and tables) plus the
//! list definitions referenced by bulleted paragraphs. The wire format is
//! tolerant by construction: every optional field degrades to a documented
//! default instead of failing deserialization, and structural elements the
//! converter does not understand carry neither a `paragraph` nor a `table`
//! member and are skipped.

use serde::Deserialize;
use std::collections::HashMap;

/// A structured word-processing document.
///
/// `body` order is significant and is the sole sequencing signal; there is
/// no separate ordering key. A `null` or absent body renders to the empty
/// fragment.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Document {
    pub body: Option<Vec<StructuralElement>>,
    /// List definitions keyed by list id.
    pub lists: HashMap<String, ListDefinition>,
}

/// One top-level unit of body content.
///
/// The wire format carries at most one of the known members. Elements with
/// neither (section breaks, tables of contents and the like) are skipped by
/// the converter.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StructuralElement {
    pub paragraph: Option<Paragraph>,
    pub table: Option<Table>,
}

/// A paragraph: an optional named style, an optional list-membership
/// descriptor, and an ordered sequence of styled text runs.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Paragraph {
    pub style: NamedStyle,
    pub bullet: Option<Bullet>,
    pub runs: Vec<TextRun>,
}

impl Paragraph {
    /// Concatenated text of every run, unstyled.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }
}

/// The source system's paragraph role tag.
///
/// Only the four heading levels are meaningful to the converter; every
/// other role (normal text, titles, subtitles) renders as a plain
/// paragraph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum NamedStyle {
    #[serde(rename = "HEADING_1")]
    Heading1,
    #[serde(rename = "HEADING_2")]
    Heading2,
    #[serde(rename = "HEADING_3")]
    Heading3,
    #[serde(rename = "HEADING_4")]
    Heading4,
    #[default]
    #[serde(other)]
    Normal,
}

impl NamedStyle {
    /// Heading level (1–4) for heading styles, `None` for body text.
    pub fn heading_level(self) -> Option<u8> {
        match self {
            NamedStyle::Heading1 => Some(1),
            NamedStyle::Heading2 => Some(2),
            NamedStyle::Heading3 => Some(3),
            NamedStyle::Heading4 => Some(4),
            NamedStyle::Normal => None,
        }
    }
}

/// A paragraph's membership descriptor in a list: which list, and how
/// deeply nested. A missing nesting level means the outermost level.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Bullet {
    pub list_id: String,
    pub nesting_level: u32,
}

/// One styled run of text within a paragraph.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextRun {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub link: Option<Link>,
}

/// A run's link descriptor.
///
/// At most one member is meaningful per run; the resolver checks
/// `heading_id`, then `bookmark_id`, then `url`, in that order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Link {
    pub url: Option<String>,
    pub heading_id: Option<String>,
    pub bookmark_id: Option<String>,
}

/// A table: ordered rows of ordered cells.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Table {
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

/// A table cell holding nested paragraphs. Cells render as flattened plain
/// text; run styling and links inside cells are not rendered.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableCell {
    pub content: Vec<Paragraph>,
}

impl TableCell {
    /// Flattens the cell's paragraphs to unstyled text.
    pub fn plain_text(&self) -> String {
        self.content
            .iter()
            .map(|paragraph| paragraph.plain_text())
            .collect()
    }
}

/// Per-list configuration: one entry per nesting level, outermost first.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListDefinition {
    pub nesting_levels: Vec<NestingLevelDefinition>,
}

/// Marker configuration for one nesting level of a list.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NestingLevelDefinition {
    pub glyph_type: Option<String>,
    pub start_number: Option<i64>,
}

/// Rendered numbering style for an ordered list level, decoded from the
/// source system's glyph type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphFormat {
    Decimal,
    ZeroDecimal,
    Alpha,
    UpperAlpha,
    Roman,
    UpperRoman,
}

impl GlyphFormat {
    /// Decodes a glyph type code.
    ///
    /// Returns `None` for bullet-family codes and for an
    /// unspecified/absent marker style; those levels render unordered.
    /// A present code outside the known set denotes an ordered level and
    /// falls back to decimal numbering.
    pub fn from_code(code: &str) -> Option<GlyphFormat> {
        match code {
            "DECIMAL" => Some(GlyphFormat::Decimal),
            "ZERO_DECIMAL" => Some(GlyphFormat::ZeroDecimal),
            "ALPHA" => Some(GlyphFormat::Alpha),
            "UPPER_ALPHA" => Some(GlyphFormat::UpperAlpha),
            "ROMAN" => Some(GlyphFormat::Roman),
            "UPPER_ROMAN" => Some(GlyphFormat::UpperRoman),
            "GLYPH_TYPE_UNSPECIFIED" | "NONE" => None,
            code if code.starts_with("BULLET") => None,
            _ => Some(GlyphFormat::Decimal),
        }
    }

    /// The HTML `type` attribute value for this numbering style.
    pub fn html_type(self) -> char {
        match self {
            GlyphFormat::Decimal | GlyphFormat::ZeroDecimal => '1',
            GlyphFormat::Alpha => 'a',
            GlyphFormat::UpperAlpha => 'A',
            GlyphFormat::Roman => 'i',
            GlyphFormat::UpperRoman => 'I',
        }
    }
}

/// Ordering and numbering properties of one (list id, nesting level) pair.
///
/// Fixed by the list definitions: separate appearances of the same pair in
/// the document always resolve to the same properties.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelProperties {
    /// Numbering style; `Some` means the level is ordered.
    pub glyph: Option<GlyphFormat>,
    /// Configured first number, defaulting to 1.
    pub start: i64,
}

impl LevelProperties {
    pub fn is_ordered(&self) -> bool {
        self.glyph.is_some()
    }
}

impl Document {
    /// Looks up the configured properties for a (list id, nesting level)
    /// pair. Missing lists, levels, and glyph types degrade to an
    /// unordered level starting at 1.
    pub fn level_properties(&self, list_id: &str, level: u32) -> LevelProperties {
        let definition = self
            .lists
            .get(list_id)
            .and_then(|list| list.nesting_levels.get(level as usize));
        LevelProperties {
            glyph: definition
                .and_then(|level| level.glyph_type.as_deref())
                .and_then(GlyphFormat::from_code),
            start: definition.and_then(|level| level.start_number).unwrap_or(1),
        }
    }
}
