#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pos {
    pub x: u16,
    pub y: u16,
}

impl Pos {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// One column to the left, or `None` at the screen edge.
    pub fn left(self) -> Option<Self> {
        self.x.checked_sub(1).map(|x| Self { x, y: self.y })
    }

    pub fn offset(self, dx: u16, dy: u16) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.w)
    }

    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.h)
    }

    pub fn contains(&self, p: Pos) -> bool {
        if self.is_empty() {
            return false;
        }
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }
}

/// Absolute placement of a widget. The size hints are optional and only
/// consulted by widgets that care about them (e.g. `Entry` scrolls within `w`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Placement {
    pub pos: Pos,
    pub w: Option<u16>,
    pub h: Option<u16>,
}

impl Placement {
    pub const fn at(x: u16, y: u16) -> Self {
        Self {
            pos: Pos::new(x, y),
            w: None,
            h: None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ui/geom.rs"]
mod tests;
