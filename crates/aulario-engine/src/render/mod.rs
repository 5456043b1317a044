//! Lesson rendering: flat authored blocks in, structured display document out.
//!
//! The pipeline is pure and synchronous: sectionize the block sequence, then
//! dispatch every block to its renderer. Code goes through the highlighter,
//! prose and list items through the inline renderer, tables and callouts
//! through semantic coloring. The result owns all of its text and carries no
//! references back into the input.

pub mod highlight;
pub mod inline;
pub mod sections;
pub mod tables;
pub mod vocab;

use serde::Serialize;

pub use highlight::{Token, TokenKind};
pub use inline::InlineSegment;
pub use sections::Section;
pub use tables::Palette;

use crate::models::block::ContentBlock;
use highlight::tokenize_block;
use inline::render_inline;
use sections::sectionize;
use tables::{color_for_cell, is_color_table};

/// A fully rendered lesson, ready for a presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedLesson {
    pub sections: Vec<RenderedSection>,
}

/// One titled section with its rendered blocks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedSection {
    pub title: String,
    pub blocks: Vec<RenderedBlock>,
}

/// A display-ready block. Mirrors [`ContentBlock`] with classified content
/// substituted for raw text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum RenderedBlock {
    /// A sub-heading kept inside its section ("4.2", "Ejercicio 1").
    Subheading { text: String },
    Prose { segments: Vec<InlineSegment> },
    List {
        items: Vec<Vec<InlineSegment>>,
        ordered: bool,
    },
    Code { lines: Vec<Vec<Token>> },
    Callout {
        title: Option<String>,
        segments: Vec<InlineSegment>,
    },
    Table {
        headers: Vec<Vec<InlineSegment>>,
        rows: Vec<Vec<TableCell>>,
    },
    Image {
        src: String,
        alt: String,
        caption: Option<String>,
    },
}

/// One rendered table cell. `color` is set only for the first column of a
/// color-reference table when the cell names a known color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableCell {
    pub segments: Vec<InlineSegment>,
    pub color: Option<Palette>,
}

/// Render a lesson's block sequence into a structured document.
///
/// Deterministic and side-effect-free; invoked afresh on every display
/// request. An empty input yields a document with no sections. Unknown
/// blocks survive sectioning but produce no rendered node.
pub fn render_lesson(blocks: &[ContentBlock]) -> RenderedLesson {
    let sections = sectionize(blocks)
        .into_iter()
        .map(|section| RenderedSection {
            title: section.title,
            blocks: section
                .blocks
                .iter()
                .filter_map(render_block)
                .collect(),
        })
        .collect();
    RenderedLesson { sections }
}

/// Render one block, or `None` for blocks with no display form.
fn render_block(block: &ContentBlock) -> Option<RenderedBlock> {
    let rendered = match block {
        // Only sub-headings reach this point; top-level headings were
        // consumed as section titles.
        ContentBlock::Heading { text } => RenderedBlock::Subheading { text: text.clone() },
        ContentBlock::Paragraph { text } => RenderedBlock::Prose {
            segments: render_inline(text),
        },
        ContentBlock::List { items, ordered } => RenderedBlock::List {
            items: items.iter().map(|item| render_inline(item)).collect(),
            ordered: *ordered,
        },
        ContentBlock::Code { text } => RenderedBlock::Code {
            lines: tokenize_block(text),
        },
        ContentBlock::Callout { title, text } => RenderedBlock::Callout {
            title: title.clone(),
            segments: render_inline(text),
        },
        ContentBlock::Table { headers, rows } => render_table(headers, rows),
        ContentBlock::Image { src, alt, caption } => RenderedBlock::Image {
            src: src.clone(),
            alt: alt.clone(),
            caption: caption.clone(),
        },
        ContentBlock::Unknown => return None,
    };
    Some(rendered)
}

/// Render a table, applying semantic coloring to the first column when the
/// headers mark it as a color-reference table.
///
/// Best effort on malformed data: rows shorter or longer than the header
/// count render whatever cells exist.
fn render_table(headers: &[String], rows: &[Vec<String>]) -> RenderedBlock {
    let colored = is_color_table(headers);

    let rendered_rows = rows
        .iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(i, cell)| TableCell {
                    segments: render_inline(cell),
                    color: if colored && i == 0 {
                        color_for_cell(cell)
                    } else {
                        None
                    },
                })
                .collect()
        })
        .collect();

    RenderedBlock::Table {
        headers: headers.iter().map(|h| render_inline(h)).collect(),
        rows: rendered_rows,
    }
}
