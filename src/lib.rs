//! matrix-rain - falling-digits terminal animation.
//!
//! Module layout:
//! - rain: column layout, per-column scrolling and glyph shimmer (frontend-agnostic)
//! - render: projection of pixel-space scenes onto the terminal cell grid
//! - ui: paint commands and backends (ratatui, headless)
//! - config: JSON configuration and command-line overrides
//! - app: frame/event handling, plus the terminal loop behind `tui`

pub mod app;
pub mod config;
pub mod rain;
pub mod render;
#[cfg(feature = "tui")]
pub mod tui;
pub mod ui;
