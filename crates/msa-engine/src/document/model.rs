//! Block-level document tree
//!
//! The template document is an ordered tree of block-level content:
//! paragraphs (lists of formatted runs) and tables (rows of cells, each cell
//! holding its own paragraphs). The tree is opaque beyond text content and
//! structural position. Mutation passes address it by paragraph order and
//! take exclusive access for the duration of one generation call.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// A single formatted run of text within a paragraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    pub text: String,
    #[serde(default)]
    pub bold: bool,
}

impl Run {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
        }
    }
}

/// A block-level paragraph: zero or more runs plus explicit spacing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    #[serde(default)]
    pub runs: Vec<Run>,
    /// Spacing after the paragraph, in twentieths of a point (twips).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing_after: Option<u32>,
}

impl Paragraph {
    /// An empty spacer paragraph with no runs and default spacing.
    pub fn spacer() -> Self {
        Self::default()
    }

    /// A paragraph holding a single plain run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            runs: vec![Run::plain(text)],
            spacing_after: None,
        }
    }

    /// A paragraph holding a single bold run.
    pub fn bold_label(text: impl Into<String>) -> Self {
        Self {
            runs: vec![Run::bold(text)],
            spacing_after: None,
        }
    }

    pub fn with_spacing_after(mut self, twips: u32) -> Self {
        self.spacing_after = Some(twips);
        self
    }

    /// Concatenated text of all runs, in order.
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }
}

/// A table cell; its content is a list of paragraphs like the document body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,
}

impl TableCell {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            paragraphs: vec![Paragraph::plain(text)],
        }
    }

    /// Text of all cell paragraphs joined by newlines.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Replace the cell content with a single plain-run paragraph.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.paragraphs = vec![Paragraph::plain(text)];
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    #[serde(default)]
    pub cells: Vec<TableCell>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    #[serde(default)]
    pub rows: Vec<TableRow>,
}

/// Block-level content in document order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Paragraph(Paragraph),
    Table(Table),
}

/// The loaded template: an owned, mutable arena of blocks addressed by
/// stable indices. Paragraph indices count top-level paragraphs only; table
/// content is reached through the table itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateDocument {
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl TemplateDocument {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Top-level paragraphs in document order.
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> + '_ {
        self.blocks.iter().filter_map(|block| match block {
            Block::Paragraph(paragraph) => Some(paragraph),
            Block::Table(_) => None,
        })
    }

    pub fn paragraphs_mut(&mut self) -> impl Iterator<Item = &mut Paragraph> + '_ {
        self.blocks.iter_mut().filter_map(|block| match block {
            Block::Paragraph(paragraph) => Some(paragraph),
            Block::Table(_) => None,
        })
    }

    pub fn paragraph_count(&self) -> usize {
        self.paragraphs().count()
    }

    pub fn tables(&self) -> impl Iterator<Item = &Table> + '_ {
        self.blocks.iter().filter_map(|block| match block {
            Block::Table(table) => Some(table),
            Block::Paragraph(_) => None,
        })
    }

    pub fn tables_mut(&mut self) -> impl Iterator<Item = &mut Table> + '_ {
        self.blocks.iter_mut().filter_map(|block| match block {
            Block::Table(table) => Some(table),
            Block::Paragraph(_) => None,
        })
    }

    /// First table in document order, if any.
    pub fn first_table_mut(&mut self) -> Option<&mut Table> {
        self.tables_mut().next()
    }

    /// Index of the first paragraph within `range` (paragraph order) that
    /// satisfies the predicate. Ranges past the end of the document are
    /// truncated, not an error.
    pub fn find_paragraph_by_predicate<P>(&self, range: Range<usize>, predicate: P) -> Option<usize>
    where
        P: Fn(&Paragraph) -> bool,
    {
        self.paragraphs()
            .enumerate()
            .take(range.end)
            .skip(range.start)
            .find(|(_, paragraph)| predicate(paragraph))
            .map(|(index, _)| index)
    }

    /// Arena index of the block holding the paragraph with the given
    /// paragraph-order index.
    fn block_index_of_paragraph(&self, paragraph_index: usize) -> Option<usize> {
        let mut seen = 0;
        for (block_index, block) in self.blocks.iter().enumerate() {
            if matches!(block, Block::Paragraph(_)) {
                if seen == paragraph_index {
                    return Some(block_index);
                }
                seen += 1;
            }
        }
        None
    }

    /// Insertion cursor placed immediately after the given paragraph. When
    /// the index is past the last paragraph the cursor lands at the end of
    /// the document, so insertion still happens on short documents.
    pub fn cursor_after_paragraph(&mut self, paragraph_index: usize) -> InsertCursor<'_> {
        let at = self
            .block_index_of_paragraph(paragraph_index)
            .map(|block_index| block_index + 1)
            .unwrap_or(self.blocks.len());
        InsertCursor { document: self, at }
    }
}

/// Positional insertion handle tracking a current block. Each insert lands at
/// the tracked position and advances it, so a sequence of inserts preserves
/// its own order.
pub struct InsertCursor<'d> {
    document: &'d mut TemplateDocument,
    at: usize,
}

impl InsertCursor<'_> {
    pub fn insert(&mut self, block: Block) {
        self.document.blocks.insert(self.at, block);
        self.at += 1;
    }

    pub fn insert_paragraph(&mut self, paragraph: Paragraph) {
        self.insert(Block::Paragraph(paragraph));
    }
}
