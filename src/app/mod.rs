//! Application host: owns the widgets and runs the render/dispatch loop.

mod focus;

use std::time::Duration;

use focus::{next_focus, Direction};

use crate::core::config::{AppConfig, TabPolicy};
use crate::core::context::{Context, HostState, Mode};
use crate::core::event::{Key, KeyCode};
use crate::core::widget::{Widget, WidgetId};
use crate::error::Result;
use crate::ui::backend::{Surface, SurfaceGuard};
use crate::ui::painter::Painter;
use crate::ui::style::Styles;

pub struct App {
    widgets: Vec<Box<dyn Widget>>,
    state: HostState,
    tab_policy: TabPolicy,
    sleep_quantum: Duration,
    styles: Styles,
    painter: Painter,
}

impl App {
    pub fn new() -> Self {
        Self::with_config(&AppConfig::default())
    }

    pub fn with_config(config: &AppConfig) -> Self {
        let mut state = HostState::new();
        state.mode = config.mode;
        state.tabnav = config.tabnav;
        Self {
            widgets: Vec::new(),
            state,
            tab_policy: config.tab_policy,
            sleep_quantum: config.sleep_quantum(),
            styles: config.palette.styles(),
            painter: Painter::new(),
        }
    }

    /// Register a widget. Widgets render in registration order.
    pub fn add<W: Widget>(&mut self, widget: W) -> WidgetId {
        let id = WidgetId(self.widgets.len());
        self.widgets.push(Box::new(widget));
        self.state.len = self.widgets.len();
        id
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    pub fn widget<W: Widget>(&self, id: WidgetId) -> Option<&W> {
        self.widgets.get(id.0)?.downcast_ref::<W>()
    }

    pub fn widget_mut<W: Widget>(&mut self, id: WidgetId) -> Option<&mut W> {
        self.widgets.get_mut(id.0)?.downcast_mut::<W>()
    }

    pub fn focus(&self) -> WidgetId {
        WidgetId(self.state.focus)
    }

    /// Set the focus index directly, without focus notifications. The target
    /// does not have to be focusable; such a widget just never gets keys.
    pub fn set_focus(&mut self, id: WidgetId) {
        if id.0 < self.widgets.len() {
            self.state.focus = id.0;
        }
    }

    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.state.set_mode(mode);
    }

    pub fn end(&mut self) {
        self.state.end(None);
    }

    pub fn end_with(&mut self, message: impl Into<String>) {
        self.state.end(Some(message.into()));
    }

    pub fn end_message(&self) -> Option<&str> {
        self.state.end_message.as_deref()
    }

    pub fn tabnav(&self) -> bool {
        self.state.tabnav
    }

    pub fn set_tabnav(&mut self, enabled: bool) {
        self.state.tabnav = enabled;
    }

    pub fn tabnav_paused(&self) -> bool {
        self.state.tabnav_pause
    }

    pub fn tab_policy(&self) -> TabPolicy {
        self.tab_policy
    }

    pub fn set_tab_policy(&mut self, policy: TabPolicy) {
        self.tab_policy = policy;
    }

    pub fn set_sleep_quantum(&mut self, quantum: Duration) {
        self.sleep_quantum = quantum;
    }

    pub fn styles(&self) -> &Styles {
        &self.styles
    }

    pub fn set_styles(&mut self, styles: Styles) {
        self.styles = styles;
    }

    /// Run the loop until a callback ends it.
    ///
    /// The surface is acquired for the duration of the loop and released
    /// exactly once on every exit path, including errors and panics. Returns
    /// the end message, if one was set.
    pub fn run<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<Option<String>> {
        let mut guard = SurfaceGuard::acquire(surface)?;
        tracing::debug!(widgets = self.widgets.len(), mode = ?self.state.mode, "loop started");
        let outcome = self.run_loop(&mut *guard);
        let released = guard.release();
        outcome?;
        released?;
        tracing::debug!(message = ?self.state.end_message, "loop finished");
        Ok(self.state.end_message.clone())
    }

    fn run_loop<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<()> {
        surface.set_cursor_visible(false)?;
        let focus = self.state.focus;
        self.notify(focus, |widget, cx| widget.on_focus(cx));
        self.apply_requests();

        loop {
            self.render_frame(surface)?;
            match self.state.mode {
                Mode::Input => {
                    let key = surface.read_key()?;
                    self.handle_key(key)?;
                }
                Mode::Instant => {}
                Mode::Sleep => std::thread::sleep(self.sleep_quantum),
                Mode::End => break,
            }
        }
        Ok(())
    }

    fn render_frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<()> {
        surface.clear()?;
        self.painter.clear();
        for widget in &self.widgets {
            widget.render(&mut self.painter, &self.styles);
        }
        // Focus decoration goes on top of the normal pass.
        if let Some(widget) = self.widgets.get(self.state.focus) {
            if widget.focusable() {
                widget.render_focus(&mut self.painter, &self.styles);
            }
        }
        surface.draw(self.painter.cmds())?;
        Ok(())
    }

    /// Route one key: Tab/BackTab move focus while tab navigation is active,
    /// everything else goes to the focused widget.
    pub fn handle_key(&mut self, key: Key) -> Result<()> {
        if self.state.tabnav && !self.state.tabnav_pause {
            match key.code {
                KeyCode::Tab => {
                    self.advance_focus();
                    return Ok(());
                }
                KeyCode::BackTab => {
                    self.retreat_focus();
                    return Ok(());
                }
                _ => {}
            }
        }
        self.dispatch(key)
    }

    fn dispatch(&mut self, key: Key) -> Result<()> {
        let idx = self.state.focus;
        let Some(widget) = self.widgets.get_mut(idx) else {
            tracing::trace!(key = %key, "no focused widget; key dropped");
            return Ok(());
        };
        if !widget.focusable() {
            tracing::trace!(key = %key, widget = idx, "focused widget is not focusable; key dropped");
            return Ok(());
        }

        let result = {
            let mut cx = Context::new(&mut self.state, WidgetId(idx));
            widget.dispatch(key, &mut cx)
        };
        // Whatever the callback managed to request still takes effect.
        self.apply_requests();
        result
    }

    pub fn advance_focus(&mut self) {
        self.step_focus(Direction::Forward);
    }

    pub fn retreat_focus(&mut self) {
        self.step_focus(Direction::Backward);
    }

    fn step_focus(&mut self, direction: Direction) {
        if let Some(target) = next_focus(&self.widgets, self.state.focus, self.tab_policy, direction)
        {
            self.move_focus(target);
        }
    }

    /// Move focus and notify both widgets. Focus requests made from the
    /// notifications are honored without notifying again.
    fn move_focus(&mut self, target: usize) {
        let prev = self.state.focus;
        if target >= self.widgets.len() || target == prev {
            return;
        }
        self.state.focus = target;
        tracing::debug!(from = prev, to = target, "focus changed");

        self.notify(prev, |widget, cx| widget.on_blur(cx));
        self.notify(target, |widget, cx| widget.on_focus(cx));
        self.apply_updates();
        if let Some(request) = self.state.focus_request.take() {
            if request < self.widgets.len() {
                self.state.focus = request;
            }
        }
    }

    fn notify(&mut self, idx: usize, f: impl FnOnce(&mut dyn Widget, &mut Context<'_>)) {
        if let Some(widget) = self.widgets.get_mut(idx) {
            let mut cx = Context::new(&mut self.state, WidgetId(idx));
            f(&mut **widget, &mut cx);
        }
    }

    fn apply_requests(&mut self) {
        self.apply_updates();
        if let Some(target) = self.state.focus_request.take() {
            self.move_focus(target);
        }
    }

    fn apply_updates(&mut self) {
        for update in std::mem::take(&mut self.state.updates) {
            match self.widgets.get_mut(update.target.0) {
                Some(widget) => {
                    if !(update.apply)(&mut **widget) {
                        tracing::warn!(widget = update.target.0, "widget update skipped: type mismatch");
                    }
                }
                None => tracing::warn!(widget = update.target.0, "widget update skipped: no such widget"),
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/host.rs"]
mod tests;
