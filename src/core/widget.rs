use std::any::Any;

use super::context::Context;
use super::event::Key;
use crate::error::Result;
use crate::ui::geom::Placement;
use crate::ui::painter::Painter;
use crate::ui::style::Styles;

/// Index of a widget in its host. Widgets are never removed or reordered, so
/// an id stays valid for the lifetime of the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(pub(crate) usize);

impl WidgetId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Lets the host hand a `&mut dyn Widget` back to its concrete type.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

pub trait Widget: AsAny {
    fn placement(&self) -> Placement;

    fn placement_mut(&mut self) -> &mut Placement;

    /// Draw the widget. Called for every widget on every frame.
    fn render(&self, painter: &mut Painter, styles: &Styles);

    /// Focus decoration, drawn after every widget has rendered.
    fn render_focus(&self, _painter: &mut Painter, _styles: &Styles) {}

    fn dispatch(&mut self, key: Key, cx: &mut Context<'_>) -> Result<()> {
        tracing::trace!(key = %key, widget = cx.id().index(), "key ignored by widget");
        Ok(())
    }

    fn focusable(&self) -> bool {
        true
    }

    fn on_focus(&mut self, _cx: &mut Context<'_>) {}

    fn on_blur(&mut self, _cx: &mut Context<'_>) {}

    fn place(&mut self, x: u16, y: u16) {
        let placement = self.placement_mut();
        placement.pos.x = x;
        placement.pos.y = y;
    }

    fn resize(&mut self, w: Option<u16>, h: Option<u16>) {
        let placement = self.placement_mut();
        placement.w = w;
        placement.h = h;
    }

    fn at(mut self, x: u16, y: u16) -> Self
    where
        Self: Sized,
    {
        self.place(x, y);
        self
    }

    fn sized(mut self, w: u16, h: u16) -> Self
    where
        Self: Sized,
    {
        self.resize(Some(w), Some(h));
        self
    }
}

impl dyn Widget {
    pub fn downcast_ref<W: Widget>(&self) -> Option<&W> {
        self.as_any().downcast_ref::<W>()
    }

    pub fn downcast_mut<W: Widget>(&mut self) -> Option<&mut W> {
        self.as_any_mut().downcast_mut::<W>()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/widget.rs"]
mod tests;
