use super::column::ColumnRanges;
use super::glyph_cell::Shimmer;
use super::glyphs::GlyphAlphabet;
use super::layout::{ColumnLayoutPlanner, ESTIMATED_COLUMN_WIDTH};
use super::metrics::TextMetrics;
use super::probe::Size;
use super::renderer::{ColumnRenderer, FrameCtx};
use super::rng::RainRng;
use super::scene::Scene;

#[derive(Clone, Debug)]
pub struct CanvasSettings {
    pub column_width: f64,
    pub ranges: ColumnRanges,
    pub alphabet: GlyphAlphabet,
    pub shimmer: Shimmer,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            column_width: ESTIMATED_COLUMN_WIDTH,
            ranges: ColumnRanges::default(),
            alphabet: GlyphAlphabet::default(),
            shimmer: Shimmer::default(),
        }
    }
}

/// All columns of the rain over a black background.
///
/// The layout is regenerated from scratch whenever the canvas size changes.
pub struct MatrixCanvas {
    planner: ColumnLayoutPlanner,
    shimmer: Shimmer,
    metrics: Box<dyn TextMetrics>,
    rng: RainRng,
    size: Option<Size>,
    columns: Vec<ColumnRenderer>,
    active: bool,
    generation: u64,
}

impl MatrixCanvas {
    pub fn new(settings: CanvasSettings, metrics: Box<dyn TextMetrics>, rng: RainRng) -> Self {
        let CanvasSettings {
            column_width,
            ranges,
            alphabet,
            shimmer,
        } = settings;
        Self {
            planner: ColumnLayoutPlanner::new(column_width, ranges, alphabet),
            shimmer,
            metrics,
            rng,
            size: None,
            columns: Vec::new(),
            active: true,
            generation: 0,
        }
    }

    pub fn size(&self) -> Option<Size> {
        self.size
    }

    pub fn columns(&self) -> &[ColumnRenderer] {
        &self.columns
    }

    /// Number of layouts generated so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Returns `true` when the layout was regenerated.
    pub fn resize(&mut self, size: Size) -> bool {
        if self.size == Some(size) {
            return false;
        }
        self.size = Some(size);
        self.relayout(size);
        true
    }

    fn relayout(&mut self, size: Size) {
        let models = self.planner.plan(size.width, &mut self.rng);
        self.columns = models
            .into_iter()
            .map(|model| ColumnRenderer::new(model, &self.shimmer))
            .collect();
        self.generation += 1;
        tracing::info!(
            width = size.width,
            height = size.height,
            columns = self.columns.len(),
            generation = self.generation,
            "canvas laid out"
        );
    }

    pub fn frame(&mut self, now: f64, scene: &mut Scene) {
        let Some(size) = self.size else {
            return;
        };
        scene.background(size);

        let mut ctx = FrameCtx {
            now,
            full_height: size.height,
            active: self.active,
            metrics: self.metrics.as_ref(),
            shimmer: &self.shimmer,
            alphabet: self.planner.alphabet(),
            rng: &mut self.rng,
        };
        for column in &mut self.columns {
            column.render(&mut ctx, scene);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/rain/canvas.rs"]
mod tests;
