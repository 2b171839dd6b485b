use super::*;

#[test]
fn test_key_creation() {
    let key = Key::ctrl(KeyCode::Char('s'));
    assert_eq!(key.code, KeyCode::Char('s'));
    assert_eq!(key.modifiers, KeyModifiers::CONTROL);
}

#[test]
fn modifiers_combine() {
    let m = KeyModifiers::SHIFT | KeyModifiers::ALT;
    assert!(m.contains(KeyModifiers::SHIFT));
    assert!(m.intersects(KeyModifiers::ALT | KeyModifiers::CONTROL));
    assert!(!m.contains(KeyModifiers::CONTROL));
    assert!(KeyModifiers::NONE.is_empty());
}

#[test]
fn printable_excludes_chords_and_control_chars() {
    assert_eq!(Key::char('a').printable(), Some('a'));
    assert_eq!(
        Key::new(KeyCode::Char('A'), KeyModifiers::SHIFT).printable(),
        Some('A')
    );
    assert_eq!(Key::ctrl(KeyCode::Char('a')).printable(), None);
    assert_eq!(Key::alt(KeyCode::Char('a')).printable(), None);
    assert_eq!(Key::char('\t').printable(), None);
    assert_eq!(Key::simple(KeyCode::Enter).printable(), None);
}

#[test]
fn ctrl_c_is_an_interrupt() {
    assert!(Key::ctrl(KeyCode::Char('c')).is_interrupt());
    assert!(!Key::char('c').is_interrupt());
}

#[test]
fn key_display_names() {
    assert_eq!(Key::char('x').to_string(), "x");
    assert_eq!(Key::char(' ').to_string(), "Space");
    assert_eq!(Key::simple(KeyCode::Up).to_string(), "Up");
    assert_eq!(Key::simple(KeyCode::F(5)).to_string(), "F5");
    assert_eq!(Key::ctrl(KeyCode::Char('s')).to_string(), "Ctrl+s");
    assert_eq!(
        Key::new(KeyCode::BackTab, KeyModifiers::SHIFT).to_string(),
        "Shift+BackTab"
    );
    assert_eq!(
        Key::new(KeyCode::Char('A'), KeyModifiers::SHIFT).to_string(),
        "A"
    );
}
