use crate::core::widget::Widget;
use crate::ui::geom::Placement;
use crate::ui::painter::Painter;
use crate::ui::style::Styles;

/// Static label.
#[derive(Debug, Clone, Default)]
pub struct Text {
    placement: Placement,
    text: String,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            placement: Placement::default(),
            text: text.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl Widget for Text {
    fn placement(&self) -> Placement {
        self.placement
    }

    fn placement_mut(&mut self) -> &mut Placement {
        &mut self.placement
    }

    fn render(&self, painter: &mut Painter, styles: &Styles) {
        painter.text(self.placement.pos, self.text.as_str(), styles.normal);
    }

    fn focusable(&self) -> bool {
        false
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widgets/text.rs"]
mod tests;
