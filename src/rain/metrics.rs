//! Text measurement used to lay out a column's glyph stack.

use serde::{Deserialize, Serialize};

use super::probe::Size;

pub trait TextMetrics {
    /// Horizontal advance of one monospaced glyph.
    fn glyph_advance(&self, font_size: u8) -> f64;

    /// Vertical distance between consecutive glyphs of a column.
    fn line_pitch(&self, font_size: u8) -> f64;

    fn stack_size(&self, font_size: u8, count: usize) -> Size {
        let height = if count == 0 {
            0.0
        } else {
            self.line_pitch(font_size) * count as f64
        };
        Size::new(self.glyph_advance(font_size), height)
    }
}

/// Proportional metrics for a monospaced font rendered at its point size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonospaceMetrics {
    pub advance_factor: f64,
    pub line_height_factor: f64,
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self {
            advance_factor: 0.6,
            line_height_factor: 1.2,
        }
    }
}

impl TextMetrics for MonospaceMetrics {
    fn glyph_advance(&self, font_size: u8) -> f64 {
        f64::from(font_size) * self.advance_factor
    }

    fn line_pitch(&self, font_size: u8) -> f64 {
        f64::from(font_size) * self.line_height_factor
    }
}

/// Size of one terminal cell in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellMetrics {
    pub px_per_col: f64,
    pub px_per_row: f64,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self {
            px_per_col: 8.0,
            px_per_row: 16.0,
        }
    }
}

impl CellMetrics {
    pub fn canvas_size(&self, cols: u16, rows: u16) -> Size {
        Size::new(
            f64::from(cols) * self.px_per_col,
            f64::from(rows) * self.px_per_row,
        )
    }
}

/// A terminal cannot scale glyphs: every glyph takes exactly one cell.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TerminalMetrics {
    pub cell: CellMetrics,
}

impl TerminalMetrics {
    pub fn new(cell: CellMetrics) -> Self {
        Self { cell }
    }
}

impl TextMetrics for TerminalMetrics {
    fn glyph_advance(&self, _font_size: u8) -> f64 {
        self.cell.px_per_col
    }

    fn line_pitch(&self, _font_size: u8) -> f64 {
        self.cell.px_per_row
    }
}

#[cfg(test)]
#[path = "../../tests/unit/rain/metrics.rs"]
mod tests;
