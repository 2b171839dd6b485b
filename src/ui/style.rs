use serde::{Deserialize, Serialize};
use std::ops::{BitOr, BitOrAssign};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Reset,
    Rgb(u8, u8, u8),
    Indexed(u8),
}

impl Color {
    pub const BLACK: Self = Self::Indexed(0);
    pub const GREEN: Self = Self::Indexed(2);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Mod(u16);

impl Mod {
    pub const NONE: Self = Self(0);
    pub const BOLD: Self = Self(1 << 0);
    pub const DIM: Self = Self(1 << 1);
    pub const UNDERLINE: Self = Self(1 << 2);
    pub const REVERSE: Self = Self(1 << 3);
    pub const ITALIC: Self = Self(1 << 4);

    pub fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Mod {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Mod {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub mods: Mod,
}

impl Style {
    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub fn add_mod(mut self, m: Mod) -> Self {
        self.mods |= m;
        self
    }
}

/// The two display styles every widget draws with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Styles {
    pub normal: Style,
    pub active: Style,
}

impl Styles {
    /// `active` is always `normal` plus reverse video.
    pub fn new(fg: Color, bg: Color) -> Self {
        let normal = Style::default().fg(fg).bg(bg);
        Self {
            normal,
            active: normal.add_mod(Mod::REVERSE),
        }
    }
}

impl Default for Styles {
    fn default() -> Self {
        Self::new(Color::GREEN, Color::BLACK)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ui/style.rs"]
mod tests;
