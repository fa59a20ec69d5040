//! Terminal cell layer.
//!
//! Keeps every `ratatui` type behind a backend adapter: the rest of the crate
//! paints with [`core::painter::PaintCmd`]s on a plain cell grid.

pub mod core;

pub mod backend;
