use super::*;

#[test]
fn painter_collects_commands_and_clears() {
    let mut p = Painter::new();
    assert!(p.cmds().is_empty());

    p.text(Pos::new(0, 0), "hi", Style::default());
    p.push(PaintCmd::Text {
        pos: Pos::new(1, 1),
        text: "there".to_string(),
        style: Style::default(),
    });
    assert_eq!(p.cmds().len(), 2);

    p.clear();
    assert!(p.cmds().is_empty());
}

#[test]
fn painter_keeps_draw_order() {
    let mut p = Painter::new();
    p.text(Pos::new(0, 0), "a", Style::default());
    p.text(Pos::new(0, 0), "b", Style::default());
    let texts: Vec<&str> = p
        .cmds()
        .iter()
        .map(|cmd| match cmd {
            PaintCmd::Text { text, .. } => text.as_str(),
        })
        .collect();
    assert_eq!(texts, ["a", "b"]);
}
