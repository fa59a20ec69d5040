//! Terminal main loop.

use std::io;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crate::app::{HostEvent, RainApp};
use crate::config::RainConfig;
use crate::rain::clock::{Clock, SystemClock};
use crate::tui::crossterm::into_host_event;
use crate::tui::screen::RainScreen;
use crate::ui::backend::terminal::RatatuiTerminal;

/// Runs the animation until a quit key or termination signal. Returns the process exit code.
pub fn run(config: &RainConfig) -> io::Result<i32> {
    let screen = RainScreen::open()?;
    let (signal_tx, signal_rx) = mpsc::channel();
    #[cfg(unix)]
    let _signals = crate::tui::screen::watch_exit_signals(
        screen.restorer(),
        signal_tx,
        crate::tui::screen::SIGNAL_GRACE,
    )?;
    #[cfg(not(unix))]
    drop(signal_tx);

    let mut terminal = RatatuiTerminal::new(io::stdout())?;
    let mut app = RainApp::new(config);
    let clock = SystemClock;
    let frame_budget =
        (config.fps_cap > 0).then(|| Duration::from_secs_f64(1.0 / f64::from(config.fps_cap)));

    let area = terminal.size()?;
    app.handle_event(HostEvent::Resize(area.w, area.h));
    tracing::info!(
        seed = ?config.seed,
        fps_cap = config.fps_cap,
        "animation started"
    );

    let mut frames: u64 = 0;
    loop {
        if let Ok(signal) = signal_rx.try_recv() {
            tracing::info!(?signal, frames, "termination signal");
            drop(screen);
            return Ok(signal.exit_code());
        }

        let frame_start = Instant::now();
        terminal.draw(|backend, area| app.render(backend, area, clock.now()))?;
        frames += 1;

        let mut timeout = frame_budget
            .map(|budget| budget.saturating_sub(frame_start.elapsed()))
            .unwrap_or(Duration::ZERO);
        while crossterm::event::poll(timeout)? {
            let event = into_host_event(crossterm::event::read()?);
            if !app.handle_event(event) {
                tracing::info!(frames, "quit requested");
                return Ok(0);
            }
            timeout = Duration::ZERO;
        }
    }
}
