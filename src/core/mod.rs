//! Core contracts shared by the host and every widget:
//! - event: key tokens
//! - widget: the `Widget` trait and widget ids
//! - context: the capability handed to widget callbacks, lifecycle modes
//! - config: host configuration

pub mod config;
pub mod context;
pub mod event;
pub mod widget;

pub use config::{AppConfig, Palette, TabPolicy};
pub use context::{Context, Mode};
pub use event::{Key, KeyCode, KeyModifiers};
pub use widget::{Widget, WidgetId};
