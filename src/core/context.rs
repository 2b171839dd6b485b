//! Host context: the capability widgets use to affect the host.
//!
//! Widgets never see the host directly. Every callback receives a
//! [`Context`] that can change the lifecycle mode, request focus, toggle tab
//! navigation, and queue updates to other widgets. Focus requests and widget
//! updates are applied by the host once the callback returns.

use serde::{Deserialize, Serialize};

use super::widget::{Widget, WidgetId};

/// Lifecycle mode of the host loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Block for one key per frame.
    #[default]
    Input,
    /// Render continuously without reading input.
    Instant,
    /// Pause for the sleep quantum instead of reading input.
    Sleep,
    /// Leave the loop after the current frame.
    End,
}

pub(crate) type UpdateFn = Box<dyn FnOnce(&mut (dyn Widget + 'static)) -> bool>;

pub(crate) struct Update {
    pub(crate) target: WidgetId,
    pub(crate) apply: UpdateFn,
}

pub(crate) struct HostState {
    pub(crate) len: usize,
    pub(crate) focus: usize,
    pub(crate) mode: Mode,
    pub(crate) end_message: Option<String>,
    pub(crate) tabnav: bool,
    pub(crate) tabnav_pause: bool,
    pub(crate) focus_request: Option<usize>,
    pub(crate) updates: Vec<Update>,
}

impl HostState {
    pub(crate) fn new() -> Self {
        Self {
            len: 0,
            focus: 0,
            mode: Mode::Input,
            end_message: None,
            tabnav: true,
            tabnav_pause: false,
            focus_request: None,
            updates: Vec::new(),
        }
    }

    pub(crate) fn end(&mut self, message: Option<String>) {
        tracing::debug!(message = ?message, "end requested");
        self.end_message = message;
        self.mode = Mode::End;
    }

    pub(crate) fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            tracing::debug!(from = ?self.mode, to = ?mode, "mode changed");
        }
        self.mode = mode;
    }
}

pub struct Context<'a> {
    state: &'a mut HostState,
    id: WidgetId,
}

impl<'a> Context<'a> {
    pub(crate) fn new(state: &'a mut HostState, id: WidgetId) -> Self {
        Self { state, id }
    }

    /// The widget this context was handed to.
    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn widget_count(&self) -> usize {
        self.state.len
    }

    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.state.set_mode(mode);
    }

    /// Stop the loop after the current frame without an end message.
    pub fn end(&mut self) {
        self.state.end(None);
    }

    /// Stop the loop; `App::run` returns `message` once the terminal is released.
    pub fn end_with(&mut self, message: impl Into<String>) {
        self.state.end(Some(message.into()));
    }

    pub fn focused(&self) -> WidgetId {
        WidgetId(self.state.focus)
    }

    /// Ask the host to move focus to `id`. Unknown ids are ignored.
    pub fn request_focus(&mut self, id: WidgetId) {
        self.state.focus_request = Some(id.0);
    }

    pub fn focus_self(&mut self) {
        self.request_focus(self.id);
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

    /// Temporarily hand the tab key to the focused widget.
    pub fn pause_tabnav(&mut self, paused: bool) {
        self.state.tabnav_pause = paused;
    }

    /// Queue `f` to run against widget `id` once the current callback returns.
    /// Skipped (and logged) when `id` does not name a `W`.
    pub fn update<W, F>(&mut self, id: WidgetId, f: F)
    where
        W: Widget,
        F: FnOnce(&mut W) + 'static,
    {
        let apply: UpdateFn = Box::new(move |widget: &mut (dyn Widget + 'static)| {
            match widget.downcast_mut::<W>() {
                Some(widget) => {
                    f(widget);
                    true
                }
                None => false,
            }
        });
        self.state.updates.push(Update { target: id, apply });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/context.rs"]
mod tests;
