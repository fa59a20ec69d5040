//! Rendering backends.
//!
//! The trait isolates the rest of the codebase from `ratatui` types; the
//! headless backend lets tests and benchmarks inspect cells directly.

use crate::ui::core::geom::Rect;
use crate::ui::core::painter::PaintCmd;

pub trait Backend {
    fn draw(&mut self, area: Rect, cmds: &[PaintCmd]);
}

// The concrete terminal backend lives in `ratatui.rs`, but we keep the module name generic so the
// rest of the codebase does not need to mention ratatui.
#[cfg(feature = "tui")]
#[path = "ratatui.rs"]
pub mod terminal;
