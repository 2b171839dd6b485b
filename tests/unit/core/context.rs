use super::*;
use crate::widgets::Text;

fn state(len: usize) -> HostState {
    let mut state = HostState::new();
    state.len = len;
    state
}

#[test]
fn end_sets_mode_and_last_message_wins() {
    let mut state = state(1);
    let mut cx = Context::new(&mut state, WidgetId(0));
    cx.end_with("first");
    cx.end_with("second");
    assert_eq!(cx.mode(), Mode::End);
    assert_eq!(state.end_message.as_deref(), Some("second"));
}

#[test]
fn plain_end_clears_the_message() {
    let mut state = state(1);
    let mut cx = Context::new(&mut state, WidgetId(0));
    cx.end_with("bye");
    cx.end();
    assert_eq!(state.mode, Mode::End);
    assert_eq!(state.end_message, None);
}

#[test]
fn focus_requests_are_recorded_not_applied() {
    let mut state = state(3);
    let mut cx = Context::new(&mut state, WidgetId(2));
    cx.focus_self();
    assert_eq!(cx.focused(), WidgetId(0));
    assert_eq!(state.focus_request, Some(2));
}

#[test]
fn tabnav_flags() {
    let mut state = state(1);
    let mut cx = Context::new(&mut state, WidgetId(0));
    assert!(cx.tabnav());
    cx.pause_tabnav(true);
    cx.set_tabnav(false);
    assert!(cx.tabnav_paused());
    assert!(!cx.tabnav());
}

#[test]
fn updates_are_queued_and_check_the_type() {
    let mut state = state(1);
    let mut cx = Context::new(&mut state, WidgetId(0));
    cx.update::<Text, _>(WidgetId(0), |text| text.set_text("updated"));
    assert_eq!(state.updates.len(), 1);

    let update = state.updates.pop().unwrap();
    let mut text = Text::new("old");
    assert!((update.apply)(&mut text));
    assert_eq!(text.text(), "updated");

    let mut cx = Context::new(&mut state, WidgetId(0));
    cx.update::<crate::widgets::Entry, _>(WidgetId(0), |entry| entry.clear());
    let update = state.updates.pop().unwrap();
    assert!(!(update.apply)(&mut text));
}

#[test]
fn mode_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Mode::Sleep).unwrap(), "\"sleep\"");
    assert_eq!(serde_json::from_str::<Mode>("\"instant\"").unwrap(), Mode::Instant);
}
