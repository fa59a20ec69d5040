//! TUI integration layer (crossterm + ratatui).
//!
//! Kept apart from `rain` so the model never depends on terminal crates.

pub mod crossterm;
pub mod screen;
