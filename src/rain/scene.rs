//! Pixel-space draw commands produced by one canvas frame.

use super::probe::Size;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Normal,
    /// The glyph is showing a shimmer substitute.
    Highlight,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SceneCmd {
    /// Solid black fill of the whole canvas.
    Background { size: Size },
    Glyph {
        x: f64,
        y: f64,
        ch: char,
        font_size: u8,
        tone: Tone,
    },
}

#[derive(Debug, Default)]
pub struct Scene {
    cmds: Vec<SceneCmd>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    pub fn cmds(&self) -> &[SceneCmd] {
        &self.cmds
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    pub fn background(&mut self, size: Size) {
        self.cmds.push(SceneCmd::Background { size });
    }

    pub fn glyph(&mut self, x: f64, y: f64, ch: char, font_size: u8, tone: Tone) {
        self.cmds.push(SceneCmd::Glyph {
            x,
            y,
            ch,
            font_size,
            tone,
        });
    }

    pub fn glyph_count(&self) -> usize {
        self.cmds
            .iter()
            .filter(|cmd| matches!(cmd, SceneCmd::Glyph { .. }))
            .count()
    }
}
