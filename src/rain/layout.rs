use super::column::{ColumnModel, ColumnRanges};
use super::glyphs::GlyphAlphabet;
use super::rng::RainRng;

/// Horizontal slot reserved for one column, in canvas pixels.
pub const ESTIMATED_COLUMN_WIDTH: f64 = 26.0;

/// Splits the canvas width into evenly spaced column slots.
#[derive(Clone, Debug)]
pub struct ColumnLayoutPlanner {
    column_width: f64,
    ranges: ColumnRanges,
    alphabet: GlyphAlphabet,
}

impl ColumnLayoutPlanner {
    pub fn new(column_width: f64, ranges: ColumnRanges, alphabet: GlyphAlphabet) -> Self {
        Self {
            column_width,
            ranges,
            alphabet,
        }
    }

    pub fn column_width(&self) -> f64 {
        self.column_width
    }

    pub fn alphabet(&self) -> &GlyphAlphabet {
        &self.alphabet
    }

    /// `floor(width / column_width)`; a trailing partial slot is dropped.
    pub fn column_count(&self, width: f64) -> usize {
        if !width.is_finite() || !(self.column_width > 0.0) || width < self.column_width {
            return 0;
        }
        (width / self.column_width).floor() as usize
    }

    pub fn column_x(&self, index: usize) -> f64 {
        index as f64 * self.column_width + self.column_width / 4.0
    }

    pub fn plan(&self, width: f64, rng: &mut RainRng) -> Vec<ColumnModel> {
        (0..self.column_count(width))
            .map(|i| ColumnModel::random(self.column_x(i), &self.ranges, &self.alphabet, rng))
            .collect()
    }
}

impl Default for ColumnLayoutPlanner {
    fn default() -> Self {
        Self::new(
            ESTIMATED_COLUMN_WIDTH,
            ColumnRanges::default(),
            GlyphAlphabet::default(),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/rain/layout.rs"]
mod tests;
