use super::*;
use crate::rain::probe::Size;
use crate::ui::core::painter::PaintCmd;

fn area() -> Rect {
    Rect::new(0, 0, 10, 5)
}

#[test]
fn cell_at_maps_pixels_to_cells() {
    let p = Projection::default();
    assert_eq!(p.cell_at(area(), 0.0, 0.0), Some(Pos::new(0, 0)));
    assert_eq!(p.cell_at(area(), 7.9, 15.9), Some(Pos::new(0, 0)));
    assert_eq!(p.cell_at(area(), 8.0, 16.0), Some(Pos::new(1, 1)));
    assert_eq!(p.cell_at(area(), 79.0, 79.0), Some(Pos::new(9, 4)));
}

#[test]
fn cell_at_rejects_points_outside_the_grid() {
    let p = Projection::default();
    assert_eq!(p.cell_at(area(), -0.1, 0.0), None);
    assert_eq!(p.cell_at(area(), 0.0, -20.0), None);
    assert_eq!(p.cell_at(area(), 80.0, 0.0), None);
    assert_eq!(p.cell_at(area(), 0.0, 80.0), None);
    assert_eq!(p.cell_at(area(), f64::NAN, 0.0), None);
}

#[test]
fn cell_at_honours_area_origin() {
    let p = Projection::default();
    let area = Rect::new(2, 3, 10, 5);
    assert_eq!(p.cell_at(area, 8.0, 16.0), Some(Pos::new(3, 4)));
}

#[test]
fn project_paints_black_background_first() {
    let p = Projection::default();
    let mut scene = Scene::new();
    scene.background(Size::new(80.0, 80.0));
    let mut painter = Painter::new();
    p.project(&scene, area(), &mut painter);

    assert_eq!(
        painter.cmds(),
        &[PaintCmd::FillRect {
            rect: area(),
            style: Style::default().bg(Color::Rgb(0, 0, 0)),
        }]
    );
}

#[test]
fn project_styles_glyphs_by_tone_and_size() {
    let p = Projection::default();
    let mut scene = Scene::new();
    scene.glyph(8.0, 16.0, '1', 15, Tone::Normal);
    scene.glyph(16.0, 32.0, '0', 22, Tone::Highlight);
    let mut painter = Painter::new();
    p.project(&scene, area(), &mut painter);

    let black = Style::default().bg(Color::Rgb(0, 0, 0));
    assert_eq!(
        painter.cmds(),
        &[
            PaintCmd::Text {
                pos: Pos::new(1, 1),
                text: "1".to_string(),
                style: black.fg(Color::Rgb(3, 160, 98)),
                clip: Some(area()),
            },
            PaintCmd::Text {
                pos: Pos::new(2, 2),
                text: "0".to_string(),
                style: black.fg(Color::Rgb(168, 255, 208)).add_mod(Mod::BOLD),
                clip: Some(area()),
            },
        ]
    );
}

#[test]
fn glyphs_off_canvas_are_skipped() {
    let p = Projection::default();
    let mut scene = Scene::new();
    scene.glyph(8.0, -16.0, '1', 15, Tone::Normal);
    scene.glyph(8.0, 400.0, '1', 15, Tone::Normal);
    let mut painter = Painter::new();
    p.project(&scene, area(), &mut painter);
    assert!(painter.cmds().is_empty());
}
