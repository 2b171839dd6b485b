use std::fmt;
use std::ops::Range;

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::core::context::Context;
use crate::core::event::{Key, KeyCode};
use crate::core::widget::Widget;
use crate::error::Result;
use crate::ui::geom::Placement;
use crate::ui::painter::Painter;
use crate::ui::style::Styles;

/// Called with the current contents when Enter is pressed.
pub type EnterHook = Box<dyn FnMut(&mut Context<'_>, &str) -> Result<()>>;

/// Single-line text input.
///
/// The cursor counts grapheme clusters, not bytes, and always stays within
/// `0..=len`.
#[derive(Default)]
pub struct Entry {
    placement: Placement,
    contents: String,
    cursor: usize,
    enter_func: Option<EnterHook>,
    capture_tab: bool,
}

impl Entry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `contents`, cursor at the end.
    pub fn with_contents(mut self, contents: impl Into<String>) -> Self {
        self.set_contents(contents);
        self
    }

    pub fn on_enter<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&mut Context<'_>, &str) -> Result<()> + 'static,
    {
        self.enter_func = Some(Box::new(hook));
        self
    }

    /// Take the Tab key while focused: tab navigation is paused on focus and
    /// resumed on blur, and Tab inserts a literal tab.
    pub fn capture_tab(mut self, capture: bool) -> Self {
        self.capture_tab = capture;
        self
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Length in grapheme clusters.
    pub fn len(&self) -> usize {
        self.contents.graphemes(true).count()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    pub fn set_contents(&mut self, contents: impl Into<String>) {
        self.contents = contents.into();
        self.cursor = self.len();
    }

    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor.min(self.len());
    }

    pub fn clear(&mut self) {
        self.contents.clear();
        self.cursor = 0;
    }

    pub fn insert(&mut self, ch: char) {
        let at = self.byte_offset(self.cursor);
        let before = self.len();
        self.contents.insert(at, ch);
        // A combining mark merges into the previous cluster instead of adding one.
        if self.len() > before {
            self.cursor += 1;
        }
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let start = self.byte_offset(self.cursor - 1);
        let end = self.byte_offset(self.cursor);
        self.contents.replace_range(start..end, "");
        self.cursor -= 1;
    }

    pub fn delete(&mut self) {
        if self.cursor >= self.len() {
            return;
        }
        let start = self.byte_offset(self.cursor);
        let end = self.byte_offset(self.cursor + 1);
        self.contents.replace_range(start..end, "");
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len();
    }

    fn byte_offset(&self, grapheme: usize) -> usize {
        self.contents
            .grapheme_indices(true)
            .nth(grapheme)
            .map(|(idx, _)| idx)
            .unwrap_or(self.contents.len())
    }

    /// Graphemes as drawn, paired with their column widths.
    fn cells(&self) -> Vec<(&str, usize)> {
        self.contents
            .graphemes(true)
            .map(|g| {
                let g = display(g);
                (g, g.width())
            })
            .collect()
    }

    /// Range of graphemes drawn: the window of at most `w` columns that
    /// keeps the cursor cell visible, scrolled no further than needed.
    fn window(&self, cells: &[(&str, usize)]) -> Range<usize> {
        let w = match self.placement.w {
            Some(w) if w > 0 => w as usize,
            _ => return 0..cells.len(),
        };
        let mut start = self.cursor;
        let mut used = cursor_width(cells, self.cursor);
        while start > 0 && used + cells[start - 1].1 <= w {
            start -= 1;
            used += cells[start].1;
        }
        let mut end = start;
        let mut columns = 0;
        while end < cells.len() && columns + cells[end].1 <= w {
            columns += cells[end].1;
            end += 1;
        }
        start..end
    }
}

/// Columns taken by the cursor cell; past the end it is a one-column blank.
fn cursor_width(cells: &[(&str, usize)], cursor: usize) -> usize {
    cells.get(cursor).map_or(1, |&(_, width)| width)
}

fn display(grapheme: &str) -> &str {
    if grapheme == "\t" {
        " "
    } else {
        grapheme
    }
}

impl Widget for Entry {
    fn placement(&self) -> Placement {
        self.placement
    }

    fn placement_mut(&mut self) -> &mut Placement {
        &mut self.placement
    }

    fn render(&self, painter: &mut Painter, styles: &Styles) {
        let cells = self.cells();
        let visible: String = cells[self.window(&cells)].iter().map(|&(g, _)| g).collect();
        painter.text(self.placement.pos, visible, styles.normal);
    }

    /// Cursor indicator: the grapheme under the cursor in the active style,
    /// or a blank past the end and when the glyph is wider than the window.
    fn render_focus(&self, painter: &mut Painter, styles: &Styles) {
        let cells = self.cells();
        let window = self.window(&cells);
        let column: usize = cells[window.start..self.cursor].iter().map(|&(_, w)| w).sum();
        let under = match cells.get(self.cursor) {
            Some(&(g, _)) if window.contains(&self.cursor) => g,
            _ => " ",
        };
        painter.text(self.placement.pos.offset(column as u16, 0), under, styles.active);
    }

    fn dispatch(&mut self, key: Key, cx: &mut Context<'_>) -> Result<()> {
        if let Some(ch) = key.printable() {
            self.insert(ch);
            return Ok(());
        }
        match key.code {
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_home(),
            KeyCode::End => self.move_end(),
            KeyCode::Tab if self.capture_tab => self.insert('\t'),
            KeyCode::Enter => {
                if let Some(hook) = self.enter_func.as_mut() {
                    return hook(cx, &self.contents);
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn on_focus(&mut self, cx: &mut Context<'_>) {
        if self.capture_tab {
            cx.pause_tabnav(true);
        }
    }

    fn on_blur(&mut self, cx: &mut Context<'_>) {
        if self.capture_tab {
            cx.pause_tabnav(false);
        }
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("placement", &self.placement)
            .field("contents", &self.contents)
            .field("cursor", &self.cursor)
            .field("capture_tab", &self.capture_tab)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widgets/entry.rs"]
mod tests;
