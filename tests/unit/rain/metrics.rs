use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn monospace_metrics_scale_with_font_size() {
    let m = MonospaceMetrics::default();
    assert!(approx(m.line_pitch(15), 18.0));
    assert!(approx(m.line_pitch(20), 24.0));
    assert!(approx(m.glyph_advance(20), 12.0));

    let stack = m.stack_size(20, 10);
    assert!(approx(stack.height, 240.0));
    assert!(approx(stack.width, 12.0));
}

#[test]
fn empty_stack_has_no_height() {
    let m = MonospaceMetrics::default();
    assert_eq!(m.stack_size(22, 0).height, 0.0);
}

#[test]
fn terminal_metrics_ignore_font_size() {
    let m = TerminalMetrics::new(CellMetrics {
        px_per_col: 8.0,
        px_per_row: 16.0,
    });
    assert_eq!(m.line_pitch(15), 16.0);
    assert_eq!(m.line_pitch(22), 16.0);
    assert_eq!(m.glyph_advance(22), 8.0);
    assert_eq!(m.stack_size(15, 12), Size::new(8.0, 192.0));
}

#[test]
fn cell_metrics_convert_grid_to_canvas_size() {
    let cell = CellMetrics::default();
    assert_eq!(cell.canvas_size(10, 5), Size::new(80.0, 80.0));
    assert_eq!(cell.canvas_size(0, 0), Size::new(0.0, 0.0));
}
