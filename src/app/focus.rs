use crate::core::config::TabPolicy;
use crate::core::widget::Widget;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Forward,
    Backward,
}

/// Index Tab (or BackTab) moves to from `from`, or `None` to stay put.
pub(crate) fn next_focus(
    widgets: &[Box<dyn Widget>],
    from: usize,
    policy: TabPolicy,
    direction: Direction,
) -> Option<usize> {
    let len = widgets.len();
    if len == 0 {
        return None;
    }
    let from = from % len;
    let step = |n: usize| match direction {
        Direction::Forward => (from + n) % len,
        Direction::Backward => (from + len - n % len) % len,
    };

    match policy {
        TabPolicy::Sequential => Some(step(1)),
        TabPolicy::SkipUnfocusable => (1..=len).map(step).find(|&idx| widgets[idx].focusable()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/focus.rs"]
mod tests;
