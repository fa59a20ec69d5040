//! Projects a pixel-space [`Scene`] onto the terminal cell grid.

use crate::rain::metrics::CellMetrics;
use crate::rain::scene::{Scene, SceneCmd, Tone};
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::Painter;
use crate::ui::core::style::{Color, Mod, Style};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub glyph: Color,
    pub highlight: Color,
    pub background: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            glyph: Color::Rgb(3, 160, 98),
            highlight: Color::Rgb(168, 255, 208),
            background: Color::Rgb(0, 0, 0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub cell: CellMetrics,
    pub palette: Palette,
    /// Glyphs at or above this font size render bold.
    pub bold_font_size: u8,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            cell: CellMetrics::default(),
            palette: Palette::default(),
            bold_font_size: 19,
        }
    }
}

impl Projection {
    /// Cell under a pixel coordinate, if it lies inside `area`.
    pub fn cell_at(&self, area: Rect, x: f64, y: f64) -> Option<Pos> {
        if x.is_nan() || y.is_nan() || x < 0.0 || y < 0.0 {
            return None;
        }
        let col = (x / self.cell.px_per_col).floor();
        let row = (y / self.cell.px_per_row).floor();
        if col >= f64::from(area.w) || row >= f64::from(area.h) {
            return None;
        }
        Some(Pos::new(area.x + col as u16, area.y + row as u16))
    }

    pub fn project(&self, scene: &Scene, area: Rect, painter: &mut Painter) {
        let background = Style::default().bg(self.palette.background);
        for cmd in scene.cmds() {
            match cmd {
                SceneCmd::Background { .. } => painter.fill_rect(area, background),
                SceneCmd::Glyph {
                    x,
                    y,
                    ch,
                    font_size,
                    tone,
                } => {
                    let Some(pos) = self.cell_at(area, *x, *y) else {
                        continue;
                    };
                    let fg = match tone {
                        Tone::Normal => self.palette.glyph,
                        Tone::Highlight => self.palette.highlight,
                    };
                    let mut style = background.fg(fg);
                    if *font_size >= self.bold_font_size {
                        style = style.add_mod(Mod::BOLD);
                    }
                    painter.text_clipped(pos, ch.to_string(), style, area);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/render.rs"]
mod tests;
