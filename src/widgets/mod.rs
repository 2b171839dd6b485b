//! Reference widgets built on the `Widget` contract.

mod entry;
mod menu;
mod text;

pub use entry::{EnterHook, Entry};
pub use menu::{Action, ChangeHook, Menu, MenuOption};
pub use text::Text;
