//! Rain model: column layout, per-column animation and glyph shimmer.
//!
//! Everything here is frontend-agnostic. A frame is produced as a [`scene::Scene`]
//! in pixel space; `crate::render` projects it onto a terminal grid.

pub mod canvas;
pub mod clock;
pub mod column;
pub mod glyph_cell;
pub mod glyphs;
pub mod layout;
pub mod metrics;
pub mod probe;
pub mod renderer;
pub mod rng;
pub mod scene;
pub mod timer;

pub use canvas::{CanvasSettings, MatrixCanvas};
pub use clock::{Clock, ManualClock, SystemClock};
pub use column::{Bounds, ColumnId, ColumnModel, ColumnRanges};
pub use glyph_cell::{GlyphCell, GlyphState, Shimmer};
pub use glyphs::GlyphAlphabet;
pub use layout::{ColumnLayoutPlanner, ESTIMATED_COLUMN_WIDTH};
pub use metrics::{CellMetrics, MonospaceMetrics, TerminalMetrics, TextMetrics};
pub use probe::{Size, SizeProbe};
pub use renderer::{column_offset, ColumnRenderer, FrameCtx};
pub use rng::RainRng;
pub use scene::{Scene, SceneCmd, Tone};
pub use timer::IntervalTimer;
