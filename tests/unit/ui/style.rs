use super::*;

#[test]
fn mod_bit_ops_and_contains() {
    let m = Mod::BOLD | Mod::UNDERLINE | Mod::ITALIC;
    assert!(m.contains(Mod::BOLD));
    assert!(m.contains(Mod::UNDERLINE));
    assert!(m.contains(Mod::ITALIC));
    assert!(!m.contains(Mod::REVERSE));
}

#[test]
fn style_builder_sets_fields() {
    let s = Style::default().fg(Color::Rgb(1, 2, 3)).bg(Color::Indexed(8));
    assert_eq!(s.fg, Some(Color::Rgb(1, 2, 3)));
    assert_eq!(s.bg, Some(Color::Indexed(8)));
}

#[test]
fn active_style_is_normal_reversed() {
    let styles = Styles::new(Color::GREEN, Color::BLACK);
    assert_eq!(styles.normal.fg, Some(Color::GREEN));
    assert_eq!(styles.normal.bg, Some(Color::BLACK));
    assert!(!styles.normal.mods.contains(Mod::REVERSE));
    assert_eq!(styles.active.fg, styles.normal.fg);
    assert!(styles.active.mods.contains(Mod::REVERSE));
}

#[test]
fn default_styles_are_green_on_black() {
    assert_eq!(Styles::default(), Styles::new(Color::Indexed(2), Color::Indexed(0)));
}
