use std::fmt;

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::core::context::Context;
use crate::core::event::{Key, KeyCode};
use crate::core::widget::Widget;
use crate::error::Result;
use crate::ui::geom::Placement;
use crate::ui::painter::Painter;
use crate::ui::style::{Style, Styles};

/// What a menu option does when confirmed. Arguments are captured by the
/// closure.
pub type Action = Box<dyn FnMut(&mut Context<'_>) -> Result<()>>;

/// Runs on every move with the index *before* wrap-around, so it may be `-1`
/// or `len`.
pub type ChangeHook = Box<dyn FnMut(&mut Context<'_>, isize) -> Result<()>>;

pub struct MenuOption {
    name: String,
    action: Action,
}

impl MenuOption {
    pub fn new<F>(name: impl Into<String>, action: F) -> Self
    where
        F: FnMut(&mut Context<'_>) -> Result<()> + 'static,
    {
        Self {
            name: name.into(),
            action: Box::new(action),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn invoke(&mut self, cx: &mut Context<'_>) -> Result<()> {
        (self.action)(cx)
    }
}

impl fmt::Debug for MenuOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuOption").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Selectable list of options, laid out one per row or all on one row.
pub struct Menu {
    placement: Placement,
    options: Vec<MenuOption>,
    active: usize,
    horizontal: bool,
    on_change: Option<ChangeHook>,
    symbol: Option<String>,
    symbol_active: bool,
}

impl Menu {
    pub fn new(options: impl IntoIterator<Item = MenuOption>) -> Self {
        Self {
            placement: Placement::default(),
            options: options.into_iter().collect(),
            active: 0,
            horizontal: false,
            on_change: None,
            symbol: None,
            symbol_active: false,
        }
    }

    /// Initially active option; out-of-range indexes fall back to 0.
    pub fn with_default(mut self, index: usize) -> Self {
        self.active = if index < self.options.len() { index } else { 0 };
        self
    }

    pub fn horizontal(mut self, horizontal: bool) -> Self {
        self.horizontal = horizontal;
        self
    }

    pub fn on_change<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&mut Context<'_>, isize) -> Result<()> + 'static,
    {
        self.on_change = Some(Box::new(hook));
        self
    }

    /// Marker drawn next to the active option. An empty marker means none.
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        let symbol = symbol.into();
        self.symbol = (!symbol.is_empty()).then_some(symbol);
        self
    }

    /// Draw the marker in the active style instead of the normal one.
    pub fn symbol_active(mut self, symbol_active: bool) -> Self {
        self.symbol_active = symbol_active;
        self
    }

    pub fn options(&self) -> &[MenuOption] {
        &self.options
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn active_option(&self) -> Option<&MenuOption> {
        self.options.get(self.active)
    }

    pub fn is_horizontal(&self) -> bool {
        self.horizontal
    }

    fn move_by(&mut self, delta: isize, cx: &mut Context<'_>) -> Result<()> {
        let len = self.options.len();
        if len == 0 {
            return Ok(());
        }
        let raw = self.active as isize + delta;
        let result = match self.on_change.as_mut() {
            Some(hook) => hook(cx, raw),
            None => Ok(()),
        };
        self.active = if raw >= len as isize {
            0
        } else if raw < 0 {
            len - 1
        } else {
            raw as usize
        };
        result
    }

    fn select(&mut self, cx: &mut Context<'_>) -> Result<()> {
        match self.options.get_mut(self.active) {
            Some(option) => {
                tracing::debug!(option = option.name(), "menu option selected");
                option.invoke(cx)
            }
            None => Ok(()),
        }
    }

    fn symbol_style(&self, styles: &Styles) -> Style {
        if self.symbol_active {
            styles.active
        } else {
            styles.normal
        }
    }

    fn render_column(&self, painter: &mut Painter, styles: &Styles) {
        let origin = self.placement.pos;
        let symbol_style = self.symbol_style(styles);
        for (i, option) in self.options.iter().enumerate() {
            let active = i == self.active;
            let style = if active { styles.active } else { styles.normal };
            let row = origin.offset(0, i as u16);
            painter.text(row, option.name(), style);

            let (Some(symbol), Some(gutter)) = (self.symbol.as_deref(), row.left()) else {
                continue;
            };
            if active {
                painter.text(gutter, symbol, symbol_style);
            } else {
                // Keep the gutter the same width on every frame.
                painter.text(gutter, " ", styles.normal);
            }
        }
    }

    fn render_row(&self, painter: &mut Painter, styles: &Styles) {
        let origin = self.placement.pos;
        let symbol_style = self.symbol_style(styles);
        let mut offset: u16 = 0;
        for (i, option) in self.options.iter().enumerate() {
            let active = i == self.active;
            let style = if active { styles.active } else { styles.normal };
            let label = if i == 0 {
                option.name().to_string()
            } else {
                format!(" {}", option.name())
            };
            let pos = origin.offset(offset, 0);
            offset = offset.saturating_add(label.width() as u16);
            painter.text(pos, label, style);

            if active {
                if let Some(symbol) = self.symbol.as_deref() {
                    for glyph in marker_glyphs(symbol) {
                        painter.text(pos, glyph, symbol_style);
                    }
                }
            }
        }
    }
}

/// The two glyphs of a row marker; a one-glyph marker is doubled.
fn marker_glyphs(symbol: &str) -> Vec<&str> {
    let glyphs: Vec<&str> = symbol.graphemes(true).take(2).collect();
    match glyphs.as_slice() {
        [single] => vec![*single, *single],
        _ => glyphs,
    }
}

impl Widget for Menu {
    fn placement(&self) -> Placement {
        self.placement
    }

    fn placement_mut(&mut self) -> &mut Placement {
        &mut self.placement
    }

    fn render(&self, painter: &mut Painter, styles: &Styles) {
        if self.horizontal {
            self.render_row(painter, styles);
        } else {
            self.render_column(painter, styles);
        }
    }

    fn dispatch(&mut self, key: Key, cx: &mut Context<'_>) -> Result<()> {
        match key.code {
            KeyCode::Down | KeyCode::Right => self.move_by(1, cx),
            KeyCode::Up | KeyCode::Left => self.move_by(-1, cx),
            KeyCode::Enter => self.select(cx),
            _ => Ok(()),
        }
    }
}

impl fmt::Debug for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Menu")
            .field("placement", &self.placement)
            .field("options", &self.options)
            .field("active", &self.active)
            .field("horizontal", &self.horizontal)
            .field("symbol", &self.symbol)
            .field("symbol_active", &self.symbol_active)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widgets/menu.rs"]
mod tests;
