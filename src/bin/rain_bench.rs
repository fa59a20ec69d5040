use std::time::{Duration, Instant};

use matrix_rain::app::{HostEvent, RainApp};
use matrix_rain::config::RainConfig;
use matrix_rain::rain::clock::{Clock, ManualClock};
use matrix_rain::ui::backend::test::TestBackend;

fn main() {
    let mut frames: usize = 600;
    let mut width: u16 = 200;
    let mut height: u16 = 60;
    let mut seed: u64 = 7;

    for arg in std::env::args().skip(1) {
        if let Some(value) = arg.strip_prefix("--frames=") {
            frames = value.parse().unwrap_or(frames);
        } else if let Some(value) = arg.strip_prefix("--width=") {
            width = value.parse().unwrap_or(width);
        } else if let Some(value) = arg.strip_prefix("--height=") {
            height = value.parse().unwrap_or(height);
        } else if let Some(value) = arg.strip_prefix("--seed=") {
            seed = value.parse().unwrap_or(seed);
        }
    }

    let config = RainConfig {
        seed: Some(seed),
        ..RainConfig::default()
    };
    let mut app = RainApp::new(&config);
    let mut backend = TestBackend::new(width, height);
    let area = backend.area();
    app.handle_event(HostEvent::Resize(width, height));

    let clock = ManualClock::new(0.0);
    let frame_step = 1.0 / 60.0;

    let start = Instant::now();
    let mut glyphs = 0usize;
    for _ in 0..frames {
        app.render(&mut backend, area, clock.now());
        glyphs += app.scene().glyph_count();
        clock.advance(frame_step);
    }
    let elapsed = start.elapsed();

    print_summary(frames, glyphs, app.canvas().columns().len(), elapsed);
}

fn print_summary(frames: usize, glyphs: usize, columns: usize, elapsed: Duration) {
    let per_frame = elapsed.as_secs_f64() * 1000.0 / frames.max(1) as f64;
    println!("frames:      {frames}");
    println!("columns:     {columns}");
    println!("glyphs:      {glyphs}");
    println!("total:       {:.2} ms", elapsed.as_secs_f64() * 1000.0);
    println!("per frame:   {per_frame:.3} ms");
}
