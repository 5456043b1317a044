use serde::{Deserialize, Serialize};

/// One authored content unit within a lesson.
///
/// The set of variants is closed: rendering dispatches exhaustively on this
/// enum, and new block types are added here rather than probed dynamically.
/// Authored JSON uses a `"type"` tag, e.g.
/// `{"type": "paragraph", "text": "..."}`.
///
/// Blocks are immutable once authored; the renderer only reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// A heading line. May open a new section or, for sub-headings like
    /// "4.2" or "Ejercicio 1", stay inside the current one.
    Heading { text: String },
    /// Prose, possibly containing backtick-delimited inline code.
    Paragraph { text: String },
    /// A bullet or numbered list.
    List {
        items: Vec<String>,
        #[serde(default)]
        ordered: bool,
    },
    /// A code snippet, possibly multi-line.
    Code { text: String },
    /// A highlighted aside with an optional title.
    Callout {
        #[serde(default)]
        title: Option<String>,
        text: String,
    },
    /// A table of text cells.
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    /// An illustration reference.
    Image {
        src: String,
        alt: String,
        #[serde(default)]
        caption: Option<String>,
    },
    /// Catch-all for block types this version doesn't know. Carried through
    /// sectioning, skipped by the renderer.
    #[serde(other)]
    Unknown,
}

impl ContentBlock {
    pub fn is_heading(&self) -> bool {
        matches!(self, ContentBlock::Heading { .. })
    }
}
