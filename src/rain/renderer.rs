use super::column::{ColumnId, ColumnModel};
use super::glyph_cell::{GlyphCell, GlyphState, Shimmer};
use super::glyphs::GlyphAlphabet;
use super::metrics::TextMetrics;
use super::probe::SizeProbe;
use super::rng::RainRng;
use super::scene::{Scene, Tone};

/// Vertical offset of a column's top edge at time `t`.
///
/// Scrolls from `-measured_height` (fully above the canvas) down to
/// `full_height` and wraps, so the result stays in `[-measured_height, full_height)`.
pub fn column_offset(t: f64, speed: f64, full_height: f64, measured_height: f64) -> f64 {
    let period = full_height + measured_height;
    if !(period > 0.0) || !period.is_finite() {
        return -measured_height;
    }
    let mut travelled = (t * speed).rem_euclid(period);
    if !(travelled < period) {
        // `rem_euclid` may round up to `period` for tiny negative inputs.
        travelled = 0.0;
    }
    travelled - measured_height
}

/// Per-frame inputs shared by all columns.
pub struct FrameCtx<'a> {
    pub now: f64,
    pub full_height: f64,
    /// Glyph cells only tick while the canvas is active.
    pub active: bool,
    pub metrics: &'a dyn TextMetrics,
    pub shimmer: &'a Shimmer,
    pub alphabet: &'a GlyphAlphabet,
    pub rng: &'a mut RainRng,
}

#[derive(Debug)]
pub struct ColumnRenderer {
    model: ColumnModel,
    cells: Vec<GlyphCell>,
    probe: SizeProbe,
    measured_height: f64,
}

impl ColumnRenderer {
    pub fn new(model: ColumnModel, shimmer: &Shimmer) -> Self {
        let cells = model
            .characters()
            .iter()
            .map(|&ch| GlyphCell::new(ch, shimmer.interval))
            .collect();
        Self {
            model,
            cells,
            probe: SizeProbe::new(),
            measured_height: 0.0,
        }
    }

    pub fn id(&self) -> ColumnId {
        self.model.id()
    }

    pub fn model(&self) -> &ColumnModel {
        &self.model
    }

    pub fn cells(&self) -> &[GlyphCell] {
        &self.cells
    }

    pub fn measured_height(&self) -> f64 {
        self.measured_height
    }

    pub fn offset(&self, now: f64, full_height: f64) -> f64 {
        column_offset(now, self.model.speed(), full_height, self.measured_height)
    }

    pub fn render(&mut self, ctx: &mut FrameCtx<'_>, scene: &mut Scene) {
        let offset = self.offset(ctx.now, ctx.full_height);
        let font_size = self.model.font_size();
        let pitch = ctx.metrics.line_pitch(font_size);
        let x = self.model.x();

        for (i, cell) in self.cells.iter_mut().enumerate() {
            if ctx.active {
                cell.tick(ctx.now, ctx.shimmer, ctx.alphabet, ctx.rng);
            }
            let tone = match cell.state() {
                GlyphState::Original => Tone::Normal,
                GlyphState::Substituted => Tone::Highlight,
            };
            scene.glyph(x, offset + i as f64 * pitch, cell.displayed(), font_size, tone);
        }

        // Measured after layout: the first frame still wraps with a zero height.
        let stack = ctx.metrics.stack_size(font_size, self.cells.len());
        let Self {
            model,
            probe,
            measured_height,
            ..
        } = self;
        probe.report(stack, |size| {
            tracing::debug!(
                column = model.id().get(),
                height = size.height,
                "column height measured"
            );
            *measured_height = size.height;
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/rain/renderer.rs"]
mod tests;
