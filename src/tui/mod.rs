//! TUI integration layer (crossterm).
//!
//! Kept separate from `core` so the widget contract and the host can be
//! built and tested without terminal crates.

pub mod crossterm;
pub mod screen;
