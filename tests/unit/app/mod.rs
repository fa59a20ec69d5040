use super::*;
use crate::rain::scene::SceneCmd;
use crate::ui::backend::test::TestBackend;
use crate::ui::core::style::Color;

fn app() -> RainApp {
    let config = RainConfig {
        seed: Some(17),
        ..RainConfig::default()
    };
    RainApp::new(&config)
}

#[test]
fn quit_stops_the_app() {
    let mut app = app();
    assert!(app.handle_event(HostEvent::Ignored));
    assert!(!app.handle_event(HostEvent::Quit));
}

#[test]
fn resize_lays_out_columns_in_canvas_pixels() {
    let mut app = app();
    // 65 cols * 8 px = 520 px = 20 slots of 26 px.
    app.handle_event(HostEvent::Resize(65, 24));
    assert_eq!(app.canvas().columns().len(), 20);
    assert_eq!(app.canvas().generation(), 1);

    app.handle_event(HostEvent::Resize(65, 24));
    assert_eq!(app.canvas().generation(), 1);

    app.handle_event(HostEvent::Resize(33, 24));
    assert_eq!(app.canvas().columns().len(), 10);
    assert_eq!(app.canvas().generation(), 2);
}

#[test]
fn focus_toggles_glyph_ticking() {
    let mut app = app();
    app.handle_event(HostEvent::FocusLost);
    assert!(!app.canvas().is_active());
    app.handle_event(HostEvent::FocusGained);
    assert!(app.canvas().is_active());
}

#[test]
fn render_paints_background_and_a_glyph_per_column() {
    let mut app = app();
    let mut backend = TestBackend::new(65, 24);
    let area = backend.area();
    app.render(&mut backend, area, 12.5);

    assert_eq!(app.canvas().columns().len(), 20);
    assert!(matches!(app.scene().cmds()[0], SceneCmd::Background { .. }));

    let buf = backend.buffer();
    for y in 0..area.h {
        for x in 0..area.w {
            assert_eq!(buf.cell(x, y).unwrap().style.bg, Some(Color::Rgb(0, 0, 0)));
        }
    }

    // On the first frame every column's head is on screen.
    for column in app.canvas().columns() {
        let x = (column.model().x() / 8.0).floor() as u16;
        let glyphs = (0..area.h)
            .filter(|&y| matches!(buf.cell(x, y).unwrap().symbol.as_str(), "0" | "1"))
            .count();
        assert!(glyphs > 0, "column at x={x} not drawn");
    }
}

#[test]
fn render_follows_area_changes() {
    let mut app = app();
    let mut backend = TestBackend::new(65, 24);
    app.render(&mut backend, Rect::new(0, 0, 65, 24), 1.0);
    app.render(&mut backend, Rect::new(0, 0, 13, 24), 1.1);
    assert_eq!(app.canvas().columns().len(), 4);
    assert_eq!(app.canvas().generation(), 2);
}
