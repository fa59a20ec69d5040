//! Application layer: owns the canvas and turns host events and frames into paint calls.

#[cfg(feature = "tui")]
pub mod run;

use crate::config::RainConfig;
use crate::rain::canvas::MatrixCanvas;
use crate::rain::metrics::TerminalMetrics;
use crate::rain::rng::RainRng;
use crate::rain::scene::Scene;
use crate::render::Projection;
use crate::ui::backend::Backend;
use crate::ui::core::geom::Rect;
use crate::ui::core::painter::Painter;

/// Host events the animation reacts to. Everything else is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    Resize(u16, u16),
    FocusGained,
    FocusLost,
    Quit,
    Ignored,
}

pub struct RainApp {
    canvas: MatrixCanvas,
    projection: Projection,
    scene: Scene,
    painter: Painter,
    area: Option<Rect>,
}

impl RainApp {
    pub fn new(config: &RainConfig) -> Self {
        let rng = RainRng::from_seed_option(config.seed);
        let projection = config.projection();
        let canvas = MatrixCanvas::new(
            config.canvas_settings(),
            Box::new(TerminalMetrics::new(projection.cell)),
            rng,
        );
        Self {
            canvas,
            projection,
            scene: Scene::new(),
            painter: Painter::new(),
            area: None,
        }
    }

    pub fn canvas(&self) -> &MatrixCanvas {
        &self.canvas
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Returns `false` when the app should exit.
    pub fn handle_event(&mut self, event: HostEvent) -> bool {
        match event {
            HostEvent::Quit => return false,
            HostEvent::Resize(w, h) => self.resize(Rect::new(0, 0, w, h)),
            HostEvent::FocusGained => self.canvas.set_active(true),
            HostEvent::FocusLost => self.canvas.set_active(false),
            HostEvent::Ignored => {}
        }
        true
    }

    fn resize(&mut self, area: Rect) {
        if self.area == Some(area) {
            return;
        }
        self.area = Some(area);
        let size = self.projection.cell.canvas_size(area.w, area.h);
        if self.canvas.resize(size) {
            tracing::info!(cols = area.w, rows = area.h, "terminal resized");
        }
    }

    pub fn render(&mut self, backend: &mut dyn Backend, area: Rect, now: f64) {
        self.resize(area);

        self.scene.clear();
        self.canvas.frame(now, &mut self.scene);

        self.painter.clear();
        self.projection.project(&self.scene, area, &mut self.painter);
        backend.draw(area, self.painter.cmds());
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/mod.rs"]
mod tests;
