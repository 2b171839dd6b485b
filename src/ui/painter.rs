use super::geom::Pos;
use super::style::Style;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaintCmd {
    Text { pos: Pos, text: String, style: Style },
}

#[derive(Debug, Default)]
pub struct Painter {
    cmds: Vec<PaintCmd>,
}

impl Painter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    pub fn cmds(&self) -> &[PaintCmd] {
        &self.cmds
    }

    pub fn push(&mut self, cmd: PaintCmd) {
        self.cmds.push(cmd);
    }

    pub fn text(&mut self, pos: Pos, text: impl Into<String>, style: Style) {
        self.cmds.push(PaintCmd::Text {
            pos,
            text: text.into(),
            style,
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ui/painter.rs"]
mod tests;
