//! Block placement and pagination.
//!
//! The engine walks the sanitized text top to bottom, one line at a time,
//! classifies each line, and places the resulting blocks on pages. A pending
//! block that would cross the bottom break margin moves wholesale to a new
//! page — block content is never silently split or truncated at a page
//! boundary. The produced [`Document`] is a pure value; turning it into PDF
//! bytes is the render module's job.
#![allow(dead_code)]

use crate::layout::classify::{classify_line, LineKind};
use crate::layout::font_metrics::{get_metrics, FontWeight};
use crate::layout::page::PageConfig;

/// A placed block: one classified input line, wrapped, anchored at `y_mm`
/// from the top of its page.
#[derive(Debug, Clone)]
pub struct Block {
    pub kind: LineKind,
    pub lines: Vec<String>,
    pub y_mm: f32,
}

impl Block {
    pub fn height_mm(&self, config: &PageConfig) -> f32 {
        self.lines.len() as f32 * config.line_height_mm
    }
}

/// One output page. Blank lines leave gaps between blocks but are not stored.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub blocks: Vec<Block>,
}

/// The paginated document, ready for binary output. Always has at least one
/// page, even for empty input.
#[derive(Debug, Clone)]
pub struct Document {
    pub pages: Vec<Page>,
}

impl Document {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// All blocks in drawing order, across pages.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.pages.iter().flat_map(|p| p.blocks.iter())
    }
}

/// Converts a block of plain text into a paginated document.
pub struct LayoutEngine {
    config: PageConfig,
}

impl LayoutEngine {
    pub fn new(config: PageConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Lays out `text`, split on line breaks, processed in order.
    pub fn render(&self, text: &str) -> Document {
        let metrics = get_metrics(FontWeight::Regular);
        let usable_width = self.config.usable_width_mm();

        let mut pages: Vec<Page> = Vec::new();
        let mut blocks: Vec<Block> = Vec::new();
        let mut cursor = self.config.margin_top_mm;

        for raw_line in text.lines() {
            let kind = classify_line(raw_line);
            let trimmed = raw_line.trim();

            match kind {
                LineKind::Blank => {
                    cursor += self.config.line_height_mm;
                }
                LineKind::Header => {
                    // Headers are a single full-width block, never wrapped.
                    self.place(
                        kind,
                        vec![trimmed.to_string()],
                        &mut pages,
                        &mut blocks,
                        &mut cursor,
                    );
                }
                LineKind::Bullet | LineKind::Body => {
                    let wrapped = metrics.wrap(trimmed, usable_width, self.config.font_size_pt);
                    self.place(kind, wrapped, &mut pages, &mut blocks, &mut cursor);
                }
            }
        }

        pages.push(Page { blocks });
        Document { pages }
    }

    /// Places one block, breaking to a new page when it would cross the
    /// bottom margin. A block taller than a whole page is laid out greedily
    /// across pages so nothing is dropped.
    fn place(
        &self,
        kind: LineKind,
        lines: Vec<String>,
        pages: &mut Vec<Page>,
        blocks: &mut Vec<Block>,
        cursor: &mut f32,
    ) {
        let line_height = self.config.line_height_mm;
        let height = lines.len() as f32 * line_height;

        if *cursor + height > self.config.max_y_mm() && *cursor > self.config.margin_top_mm {
            pages.push(Page {
                blocks: std::mem::take(blocks),
            });
            *cursor = self.config.margin_top_mm;
        }

        if *cursor + height <= self.config.max_y_mm() {
            blocks.push(Block {
                kind,
                lines,
                y_mm: *cursor,
            });
            *cursor += height;
            return;
        }

        // Taller than a full page: fill pages line-greedy.
        let per_page = self.config.lines_per_page().max(1);
        let mut chunks = lines.chunks(per_page).peekable();
        while let Some(chunk) = chunks.next() {
            blocks.push(Block {
                kind,
                lines: chunk.to_vec(),
                y_mm: *cursor,
            });
            *cursor += chunk.len() as f32 * line_height;
            if chunks.peek().is_some() {
                pages.push(Page {
                    blocks: std::mem::take(blocks),
                });
                *cursor = self.config.margin_top_mm;
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
