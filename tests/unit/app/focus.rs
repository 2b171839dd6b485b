use super::*;
use crate::widgets::{Entry, Text};

fn widgets(focusable: &[bool]) -> Vec<Box<dyn Widget>> {
    focusable
        .iter()
        .map(|&f| -> Box<dyn Widget> {
            if f {
                Box::new(Entry::new())
            } else {
                Box::new(Text::new("label"))
            }
        })
        .collect()
}

#[test]
fn empty_list_never_moves() {
    let none = widgets(&[]);
    for policy in [TabPolicy::Sequential, TabPolicy::SkipUnfocusable] {
        assert_eq!(next_focus(&none, 0, policy, Direction::Forward), None);
        assert_eq!(next_focus(&none, 0, policy, Direction::Backward), None);
    }
}

#[test]
fn sequential_steps_by_one_and_wraps() {
    let list = widgets(&[true, false, true]);
    for i in 0..3 {
        assert_eq!(
            next_focus(&list, i, TabPolicy::Sequential, Direction::Forward),
            Some((i + 1) % 3)
        );
    }
    assert_eq!(
        next_focus(&list, 0, TabPolicy::Sequential, Direction::Backward),
        Some(2)
    );
}

#[test]
fn skip_policy_jumps_over_unfocusable() {
    let list = widgets(&[true, false, false, true, false]);
    assert_eq!(
        next_focus(&list, 0, TabPolicy::SkipUnfocusable, Direction::Forward),
        Some(3)
    );
    assert_eq!(
        next_focus(&list, 3, TabPolicy::SkipUnfocusable, Direction::Forward),
        Some(0)
    );
    assert_eq!(
        next_focus(&list, 0, TabPolicy::SkipUnfocusable, Direction::Backward),
        Some(3)
    );
}

#[test]
fn skip_policy_starting_on_unfocusable() {
    let list = widgets(&[false, true, false]);
    assert_eq!(
        next_focus(&list, 0, TabPolicy::SkipUnfocusable, Direction::Forward),
        Some(1)
    );
    assert_eq!(
        next_focus(&list, 2, TabPolicy::SkipUnfocusable, Direction::Forward),
        Some(1)
    );
}

#[test]
fn skip_policy_with_nothing_focusable_stays_put() {
    let list = widgets(&[false, false, false]);
    assert_eq!(
        next_focus(&list, 1, TabPolicy::SkipUnfocusable, Direction::Forward),
        None
    );
}

#[test]
fn single_focusable_widget_returns_to_itself() {
    let list = widgets(&[false, true]);
    assert_eq!(
        next_focus(&list, 1, TabPolicy::SkipUnfocusable, Direction::Forward),
        Some(1)
    );
}

#[test]
fn results_are_always_in_range() {
    let list = widgets(&[true, false, true, false, false, true, false]);
    let mut focus = 0;
    for step in 0..50 {
        let policy = if step % 3 == 0 {
            TabPolicy::Sequential
        } else {
            TabPolicy::SkipUnfocusable
        };
        let direction = if step % 4 == 0 {
            Direction::Backward
        } else {
            Direction::Forward
        };
        focus = next_focus(&list, focus, policy, direction).unwrap();
        assert!(focus < list.len());
    }
}
