//! Page geometry.
//!
//! Matches the original renderer: A4 portrait, 10 mm margins, 10 mm line
//! height, 12 pt body text, and a fixed 15 mm bottom margin that triggers the
//! page break.

use serde::{Deserialize, Serialize};

/// Layout parameters for a single output page. All lengths in millimeters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    pub width_mm: f32,
    pub height_mm: f32,
    pub margin_left_mm: f32,
    pub margin_right_mm: f32,
    pub margin_top_mm: f32,
    /// Distance from the page bottom at which the paginator breaks.
    pub break_margin_mm: f32,
    /// Vertical advance per drawn or blank line.
    pub line_height_mm: f32,
    pub font_size_pt: f32,
}

impl PageConfig {
    /// Horizontal space available to a wrapped text block.
    pub fn usable_width_mm(&self) -> f32 {
        self.width_mm - self.margin_left_mm - self.margin_right_mm
    }

    /// The cursor position past which a pending block moves to a new page.
    pub fn max_y_mm(&self) -> f32 {
        self.height_mm - self.break_margin_mm
    }

    /// Line slots available on one full page.
    pub fn lines_per_page(&self) -> usize {
        ((self.max_y_mm() - self.margin_top_mm) / self.line_height_mm) as usize
    }
}

/// Returns the default page config: A4 (210 × 297 mm), 10 mm margins,
/// 15 mm break margin, 12 pt body font on 10 mm lines.
pub fn default_page_config() -> PageConfig {
    PageConfig {
        width_mm: 210.0,
        height_mm: 297.0,
        margin_left_mm: 10.0,
        margin_right_mm: 10.0,
        margin_top_mm: 10.0,
        break_margin_mm: 15.0,
        line_height_mm: 10.0,
        font_size_pt: 12.0,
    }
}
