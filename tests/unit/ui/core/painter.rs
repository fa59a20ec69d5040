use super::*;

#[test]
fn painter_collects_commands_and_clears() {
    let mut p = Painter::new();
    assert!(p.cmds().is_empty());

    p.fill_rect(Rect::new(0, 0, 1, 1), Style::default());
    p.text_clipped(Pos::new(0, 0), "0", Style::default(), Rect::new(0, 0, 1, 1));
    assert_eq!(p.cmds().len(), 2);
    assert!(matches!(p.cmds()[1], PaintCmd::Text { clip: Some(_), .. }));

    p.clear();
    assert!(p.cmds().is_empty());
}
