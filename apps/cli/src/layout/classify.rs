//! Line classification.
//!
//! Classification is a surface-syntax heuristic, not a markup parser: a
//! trailing colon marks a section header, a leading `-` or `•` marks a bullet.
//! Downstream fixtures depend on this exact rule set.

use serde::{Deserialize, Serialize};

/// The four line classifications used for layout decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineKind {
    /// Empty after trimming — advances the cursor, draws nothing.
    Blank,
    /// Trimmed line ends with a colon — drawn bold, single full-width block.
    Header,
    /// Trimmed line starts with `-` or `•` — wrapped block at normal weight.
    Bullet,
    /// Anything else — wrapped block at normal weight.
    Body,
}

/// Classifies a single raw input line.
///
/// Trimming happens once here; a header written as `"Skills: "` (single
/// trailing space after the colon) still classifies as a header.
pub fn classify_line(line: &str) -> LineKind {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        LineKind::Blank
    } else if trimmed.ends_with(':') {
        LineKind::Header
    } else if trimmed.starts_with('-') || trimmed.starts_with('•') {
        LineKind::Bullet
    } else {
        LineKind::Body
    }
}
