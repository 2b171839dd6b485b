use super::*;
use crate::core::context::{HostState, Mode};
use crate::core::widget::WidgetId;
use crate::error::Error;
use crate::ui::geom::Pos;
use crate::ui::painter::PaintCmd;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

fn noop(name: &str) -> MenuOption {
    MenuOption::new(name, |_| Ok(()))
}

fn three() -> Menu {
    Menu::new([noop("a"), noop("b"), noop("c")])
}

fn press(menu: &mut Menu, state: &mut HostState, code: KeyCode) -> Result<()> {
    let mut cx = Context::new(state, WidgetId(0));
    menu.dispatch(Key::simple(code), &mut cx)
}

fn texts(painter: &Painter) -> Vec<(Pos, String, Style)> {
    painter
        .cmds()
        .iter()
        .map(|cmd| match cmd {
            PaintCmd::Text { pos, text, style } => (*pos, text.clone(), *style),
        })
        .collect()
}

#[test]
fn moving_up_from_the_top_wraps_to_the_bottom() {
    let mut state = HostState::new();
    let mut menu = three();

    press(&mut menu, &mut state, KeyCode::Up).unwrap();
    assert_eq!(menu.active(), 2);
    press(&mut menu, &mut state, KeyCode::Left).unwrap();
    assert_eq!(menu.active(), 1);
}

#[test]
fn moving_down_from_the_bottom_wraps_to_the_top() {
    let mut state = HostState::new();
    let mut menu = three().with_default(2);

    press(&mut menu, &mut state, KeyCode::Down).unwrap();
    assert_eq!(menu.active(), 0);
    press(&mut menu, &mut state, KeyCode::Right).unwrap();
    assert_eq!(menu.active(), 1);
}

#[test]
fn out_of_range_default_falls_back_to_the_first_option() {
    assert_eq!(three().with_default(7).active(), 0);
    assert_eq!(three().with_default(1).active(), 1);
}

#[test]
fn empty_menu_ignores_every_key() {
    let mut state = HostState::new();
    let mut menu = Menu::new([]);
    for code in [KeyCode::Up, KeyCode::Down, KeyCode::Enter] {
        press(&mut menu, &mut state, code).unwrap();
    }
    assert_eq!(menu.active(), 0);
    assert!(menu.active_option().is_none());
}

#[test]
fn change_hook_sees_the_index_before_wrapping() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let log = seen.clone();
    let mut state = HostState::new();
    let mut menu = three().on_change(move |_, raw| {
        log.borrow_mut().push(raw);
        Ok(())
    });

    press(&mut menu, &mut state, KeyCode::Up).unwrap();
    press(&mut menu, &mut state, KeyCode::Down).unwrap();
    press(&mut menu, &mut state, KeyCode::Down).unwrap();
    assert_eq!(*seen.borrow(), [-1, 3, 1]);
}

#[test]
fn failing_change_hook_still_wraps() {
    let mut state = HostState::new();
    let mut menu = three().on_change(|_, _| Err(Error::callback("nope")));

    assert!(press(&mut menu, &mut state, KeyCode::Up).is_err());
    assert_eq!(menu.active(), 2);
}

#[test]
fn enter_invokes_only_the_active_action_once() {
    let hits = Rc::new(Cell::new([0u32; 2]));
    let first = hits.clone();
    let second = hits.clone();
    let mut menu = Menu::new([
        MenuOption::new("first", move |_| {
            let mut h = first.get();
            h[0] += 1;
            first.set(h);
            Ok(())
        }),
        MenuOption::new("second", move |cx| {
            let mut h = second.get();
            h[1] += 1;
            second.set(h);
            cx.end_with("done");
            Ok(())
        }),
    ])
    .with_default(1);
    let mut state = HostState::new();

    press(&mut menu, &mut state, KeyCode::Enter).unwrap();
    assert_eq!(hits.get(), [0, 1]);
    assert_eq!(state.mode, Mode::End);
    assert_eq!(state.end_message.as_deref(), Some("done"));
}

#[test]
fn action_errors_propagate() {
    let mut menu = Menu::new([MenuOption::new("x", |_| Err(Error::callback("boom")))]);
    let mut state = HostState::new();
    let err = press(&mut menu, &mut state, KeyCode::Enter).unwrap_err();
    assert!(matches!(err, Error::Callback(ref msg) if msg == "boom"));
}

#[test]
fn other_keys_are_ignored() {
    let mut state = HostState::new();
    let mut menu = three();
    press(&mut menu, &mut state, KeyCode::Char('x')).unwrap();
    press(&mut menu, &mut state, KeyCode::Tab).unwrap();
    assert_eq!(menu.active(), 0);
}

#[test]
fn column_layout_highlights_the_active_option() {
    let styles = Styles::default();
    let menu = three().with_default(1).at(3, 5);
    let mut painter = Painter::new();
    menu.render(&mut painter, &styles);

    assert_eq!(
        texts(&painter),
        [
            (Pos::new(3, 5), "a".to_string(), styles.normal),
            (Pos::new(3, 6), "b".to_string(), styles.active),
            (Pos::new(3, 7), "c".to_string(), styles.normal),
        ]
    );
}

#[test]
fn column_symbol_sits_in_the_gutter() {
    let styles = Styles::default();
    let menu = three().symbol("*").at(3, 5);
    let mut painter = Painter::new();
    menu.render(&mut painter, &styles);

    let cmds = texts(&painter);
    assert!(cmds.contains(&(Pos::new(2, 5), "*".to_string(), styles.normal)));
    assert!(cmds.contains(&(Pos::new(2, 6), " ".to_string(), styles.normal)));
}

#[test]
fn symbol_can_use_the_active_style() {
    let styles = Styles::default();
    let menu = three().symbol(">").symbol_active(true).at(1, 0);
    let mut painter = Painter::new();
    menu.render(&mut painter, &styles);

    assert!(texts(&painter).contains(&(Pos::new(0, 0), ">".to_string(), styles.active)));
}

#[test]
fn column_at_the_left_edge_has_no_gutter() {
    let styles = Styles::default();
    let menu = three().symbol("*");
    let mut painter = Painter::new();
    menu.render(&mut painter, &styles);

    assert_eq!(painter.cmds().len(), 3);
}

#[test]
fn row_layout_separates_options_with_a_space() {
    let styles = Styles::default();
    let menu = Menu::new([noop("One"), noop("Two"), noop("Three")])
        .horizontal(true)
        .with_default(1)
        .at(2, 1);
    let mut painter = Painter::new();
    menu.render(&mut painter, &styles);

    assert_eq!(
        texts(&painter),
        [
            (Pos::new(2, 1), "One".to_string(), styles.normal),
            (Pos::new(5, 1), " Two".to_string(), styles.active),
            (Pos::new(9, 1), " Three".to_string(), styles.normal),
        ]
    );
}

#[test]
fn row_marker_is_drawn_at_the_active_option() {
    let styles = Styles::default();
    let menu = Menu::new([noop("One"), noop("Two")])
        .horizontal(true)
        .symbol("[]")
        .at(0, 0);
    let mut painter = Painter::new();
    menu.render(&mut painter, &styles);

    let cmds = texts(&painter);
    assert_eq!(cmds[1], (Pos::new(0, 0), "[".to_string(), styles.normal));
    assert_eq!(cmds[2], (Pos::new(0, 0), "]".to_string(), styles.normal));
}

#[test]
fn single_glyph_row_marker_is_doubled() {
    assert_eq!(marker_glyphs("*"), ["*", "*"]);
    assert_eq!(marker_glyphs("<>x"), ["<", ">"]);
    assert!(marker_glyphs("").is_empty());
}

#[test]
fn empty_symbol_means_no_marker() {
    let styles = Styles::default();
    let menu = three().symbol("").at(3, 0);
    let mut painter = Painter::new();
    menu.render(&mut painter, &styles);

    assert_eq!(painter.cmds().len(), 3);
    assert!(texts(&painter).iter().all(|(pos, _, _)| pos.x == 3));

    let row = three().horizontal(true).symbol("");
    let mut painter = Painter::new();
    row.render(&mut painter, &styles);
    assert_eq!(painter.cmds().len(), 3);
}
