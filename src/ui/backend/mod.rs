//! Rendering surfaces.
//!
//! The host only talks to the [`Surface`] trait, which keeps crossterm and
//! ratatui types out of the rest of the crate and lets tests swap in a
//! headless surface.

use std::io;
use std::ops::{Deref, DerefMut};

use crate::core::event::Key;
use crate::ui::painter::PaintCmd;

pub trait Surface {
    /// Take over the terminal (raw mode, alternate screen).
    fn enter(&mut self) -> io::Result<()>;

    /// Give the terminal back. Called exactly once per `enter`.
    fn leave(&mut self) -> io::Result<()>;

    fn clear(&mut self) -> io::Result<()>;

    /// Paint one complete frame.
    fn draw(&mut self, cmds: &[PaintCmd]) -> io::Result<()>;

    /// Block until the next key press.
    fn read_key(&mut self) -> io::Result<Key>;

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()>;
}

/// Scoped acquisition of a surface: `leave` runs on `release` or on drop,
/// whichever comes first, and never twice.
pub struct SurfaceGuard<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
    released: bool,
}

impl<'a, S: Surface + ?Sized> SurfaceGuard<'a, S> {
    pub fn acquire(surface: &'a mut S) -> io::Result<Self> {
        surface.enter()?;
        Ok(Self {
            surface,
            released: false,
        })
    }

    pub fn release(&mut self) -> io::Result<()> {
        if self.released {
            return Ok(());
        }
        self.released = true;
        self.surface.leave()
    }
}

impl<S: Surface + ?Sized> Deref for SurfaceGuard<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: Surface + ?Sized> DerefMut for SurfaceGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: Surface + ?Sized> Drop for SurfaceGuard<'_, S> {
    fn drop(&mut self) {
        // Best-effort on the panic path.
        let _ = self.release();
    }
}

// The concrete terminal surface lives in `ratatui.rs`, but we keep the module name generic so the
// rest of the codebase does not need to mention ratatui.
#[cfg(feature = "tui")]
#[path = "ratatui.rs"]
pub mod terminal;

#[cfg(test)]
#[path = "../../../tests/unit/ui/backend/guard.rs"]
mod tests;
