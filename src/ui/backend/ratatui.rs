use crate::core::event::Key;
use crate::tui::crossterm::into_key;
use crate::tui::screen::{CrosstermScreen, ScreenOps, ScreenSession};
use crate::ui::backend::Surface;
use crate::ui::geom::Pos;
use crate::ui::painter::PaintCmd;
use crate::ui::style::{Color, Mod, Style};
use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect as RRect;
use ratatui::style::{Color as RColor, Modifier as RModifier, Style as RStyle};
use ratatui::widgets::Widget;
use ratatui::Terminal;
use std::io;
use std::sync::Arc;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Surface backed by the real terminal: crossterm for input and terminal
/// modes, ratatui for diffed frame output.
pub struct CrosstermSurface {
    ops: Arc<dyn ScreenOps>,
    session: Option<ScreenSession>,
    terminal: Option<Terminal<CrosstermBackend<io::Stdout>>>,
}

impl CrosstermSurface {
    pub fn new() -> Self {
        Self::with_ops(Arc::new(CrosstermScreen))
    }

    pub fn with_ops(ops: Arc<dyn ScreenOps>) -> Self {
        Self {
            ops,
            session: None,
            terminal: None,
        }
    }

    fn terminal(&mut self) -> io::Result<&mut Terminal<CrosstermBackend<io::Stdout>>> {
        self.terminal
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotConnected, "surface not entered"))
    }
}

impl Default for CrosstermSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for CrosstermSurface {
    fn enter(&mut self) -> io::Result<()> {
        let (session, terminal) = ScreenSession::begin_with(self.ops.clone(), || {
            let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
            terminal.clear()?;
            Ok(terminal)
        })?;
        self.session = Some(session);
        self.terminal = Some(terminal);
        Ok(())
    }

    fn leave(&mut self) -> io::Result<()> {
        self.terminal = None;
        match self.session.take() {
            Some(mut session) => session.end(),
            None => Ok(()),
        }
    }

    fn clear(&mut self) -> io::Result<()> {
        // Every ratatui frame starts from an empty buffer; nothing to do here.
        Ok(())
    }

    fn draw(&mut self, cmds: &[PaintCmd]) -> io::Result<()> {
        self.terminal()?.draw(|frame| {
            let area = frame.area();
            frame.render_widget(PaintWidget { cmds }, area);
        })?;
        Ok(())
    }

    fn read_key(&mut self) -> io::Result<Key> {
        use crossterm::event::{self, Event, KeyEventKind};

        loop {
            let Event::Key(event) = event::read()? else {
                continue;
            };
            if event.kind == KeyEventKind::Release {
                continue;
            }
            let key = into_key(event);
            // Raw mode swallows SIGINT; surface Ctrl+C as an interrupt instead.
            if key.is_interrupt() {
                return Err(io::Error::new(io::ErrorKind::Interrupted, "interrupted"));
            }
            return Ok(key);
        }
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        let terminal = self.terminal()?;
        if visible {
            terminal.show_cursor()
        } else {
            terminal.hide_cursor()
        }
    }
}

struct PaintWidget<'a> {
    cmds: &'a [PaintCmd],
}

impl Widget for PaintWidget<'_> {
    fn render(self, _area: RRect, buf: &mut Buffer) {
        for cmd in self.cmds {
            match cmd {
                PaintCmd::Text { pos, text, style } => draw_text(buf, *pos, text, *style),
            }
        }
    }
}

fn to_ratatui_style(s: Style) -> RStyle {
    let mut out = RStyle::default();
    if let Some(fg) = s.fg {
        out = out.fg(to_ratatui_color(fg));
    }
    if let Some(bg) = s.bg {
        out = out.bg(to_ratatui_color(bg));
    }
    out = out.add_modifier(to_ratatui_mods(s.mods));
    out
}

fn to_ratatui_color(c: Color) -> RColor {
    match c {
        Color::Reset => RColor::Reset,
        Color::Rgb(r, g, b) => RColor::Rgb(r, g, b),
        Color::Indexed(i) => RColor::Indexed(i),
    }
}

fn to_ratatui_mods(m: Mod) -> RModifier {
    let mut out = RModifier::empty();
    if m.contains(Mod::BOLD) {
        out |= RModifier::BOLD;
    }
    if m.contains(Mod::DIM) {
        out |= RModifier::DIM;
    }
    if m.contains(Mod::ITALIC) {
        out |= RModifier::ITALIC;
    }
    if m.contains(Mod::UNDERLINE) {
        out |= RModifier::UNDERLINED;
    }
    if m.contains(Mod::REVERSE) {
        out |= RModifier::REVERSED;
    }
    out
}

fn draw_text(buf: &mut Buffer, pos: Pos, text: &str, style: Style) {
    let style = to_ratatui_style(style);
    let right = buf.area.x.saturating_add(buf.area.width);
    let bottom = buf.area.y.saturating_add(buf.area.height);
    let mut x = pos.x;
    let y = pos.y;
    if y < buf.area.y || y >= bottom {
        return;
    }
    for g in text.graphemes(true) {
        let w = UnicodeWidthStr::width(g) as u16;
        if w == 0 {
            continue;
        }
        if x >= right {
            break;
        }
        // Do not partially render wide glyphs.
        if w > 1 && x.saturating_add(w).saturating_sub(1) >= right {
            break;
        }

        let Some(cell) = buf.cell_mut((x, y)) else {
            break;
        };
        let mut chars = g.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => {
                cell.set_char(ch).set_style(style);
            }
            // Grapheme cluster (e.g. combining marks).
            _ => {
                cell.set_symbol(g).set_style(style);
            }
        }

        // Basic wide-char handling: occupy next cells as spaces.
        for dx in 1..w {
            let Some(cell) = buf.cell_mut((x.saturating_add(dx), y)) else {
                break;
            };
            cell.set_char(' ').set_style(style);
        }
        x = x.saturating_add(w);
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/backend/ratatui.rs"]
mod tests;
