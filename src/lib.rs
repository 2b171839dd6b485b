//! cligui - a minimal terminal widget toolkit
//!
//! Module layout:
//! - core: widget contract, key events, host context, configuration
//! - app: the application host (lifecycle loop, focus, dispatch)
//! - widgets: Text, Menu, Entry
//! - ui: styles, painter and rendering surfaces (terminal + headless)
//! - tui: crossterm integration (terminal guard, key conversion)

pub mod app;
pub mod core;
pub mod error;
pub mod logging;
#[cfg(feature = "tui")]
pub mod tui;
pub mod ui;
pub mod widgets;

pub use app::App;
pub use error::{Error, Result};
