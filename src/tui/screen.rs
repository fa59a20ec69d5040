//! Full-screen session for the animation: every terminal mode the rain needs
//! is entered step by step and left again in reverse, exactly once.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// How long the signal watcher waits for the frame loop before forcing an exit.
pub const SIGNAL_GRACE: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenMode {
    RawInput,
    AlternateScreen,
    FocusReports,
    HiddenCursor,
}

impl ScreenMode {
    /// Order in which modes are entered; they are left in reverse.
    pub const SEQUENCE: [ScreenMode; 4] = [
        ScreenMode::RawInput,
        ScreenMode::AlternateScreen,
        ScreenMode::FocusReports,
        ScreenMode::HiddenCursor,
    ];
}

pub trait ScreenOps: Send + Sync + 'static {
    fn enter(&self, mode: ScreenMode) -> io::Result<()>;
    fn leave(&self, mode: ScreenMode) -> io::Result<()>;
}

#[derive(Debug, Default)]
pub struct CrosstermScreen;

impl ScreenOps for CrosstermScreen {
    fn enter(&self, mode: ScreenMode) -> io::Result<()> {
        use crossterm::{cursor, event::EnableFocusChange, execute, terminal};

        let mut out = io::stdout();
        match mode {
            ScreenMode::RawInput => terminal::enable_raw_mode(),
            ScreenMode::AlternateScreen => execute!(out, terminal::EnterAlternateScreen),
            ScreenMode::FocusReports => execute!(out, EnableFocusChange),
            ScreenMode::HiddenCursor => execute!(out, cursor::Hide),
        }
    }

    fn leave(&self, mode: ScreenMode) -> io::Result<()> {
        use crossterm::{cursor, event::DisableFocusChange, execute, terminal};

        let mut out = io::stdout();
        match mode {
            ScreenMode::RawInput => terminal::disable_raw_mode(),
            ScreenMode::AlternateScreen => execute!(out, terminal::LeaveAlternateScreen),
            ScreenMode::FocusReports => execute!(out, DisableFocusChange),
            ScreenMode::HiddenCursor => execute!(out, cursor::Show),
        }
    }
}

/// Shared handle that puts the terminal back; only the first call does work.
#[derive(Clone)]
pub struct ScreenRestorer {
    done: Arc<AtomicBool>,
    entered: Arc<[ScreenMode]>,
    ops: Arc<dyn ScreenOps>,
}

impl ScreenRestorer {
    pub fn restore(&self) -> io::Result<()> {
        if self.done.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        leave_all(self.ops.as_ref(), &self.entered)
    }
}

fn leave_all(ops: &dyn ScreenOps, entered: &[ScreenMode]) -> io::Result<()> {
    // Every mode gets a leave attempt; the first failure is reported.
    let mut first_err = None;
    for &mode in entered.iter().rev() {
        if let Err(err) = ops.leave(mode) {
            first_err.get_or_insert(err);
        }
    }
    first_err.map_or(Ok(()), Err)
}

/// Owns the terminal while the rain runs. Dropping it restores the terminal.
pub struct RainScreen {
    restorer: ScreenRestorer,
}

impl RainScreen {
    pub fn open() -> io::Result<Self> {
        Self::open_with(Arc::new(CrosstermScreen))
    }

    /// Enters every mode of [`ScreenMode::SEQUENCE`]. If one fails, the modes
    /// already entered are left before the error is returned.
    pub fn open_with(ops: Arc<dyn ScreenOps>) -> io::Result<Self> {
        let mut entered = Vec::with_capacity(ScreenMode::SEQUENCE.len());
        for mode in ScreenMode::SEQUENCE {
            if let Err(err) = ops.enter(mode) {
                tracing::warn!(?mode, error = %err, "terminal mode unavailable");
                let _ = leave_all(ops.as_ref(), &entered);
                return Err(err);
            }
            entered.push(mode);
        }
        Ok(Self {
            restorer: ScreenRestorer {
                done: Arc::new(AtomicBool::new(false)),
                entered: entered.into(),
                ops,
            },
        })
    }

    pub fn restorer(&self) -> ScreenRestorer {
        self.restorer.clone()
    }
}

impl Drop for RainScreen {
    fn drop(&mut self) {
        if let Err(err) = self.restorer.restore() {
            tracing::error!(error = %err, "failed to restore terminal");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitSignal {
    Interrupt,
    Terminate,
}

impl ExitSignal {
    #[cfg(unix)]
    pub fn from_raw(signal: i32) -> Option<Self> {
        use signal_hook::consts::signal::{SIGINT, SIGTERM};

        match signal {
            SIGINT => Some(ExitSignal::Interrupt),
            SIGTERM => Some(ExitSignal::Terminate),
            _ => None,
        }
    }

    /// Shell convention: 128 + signal number.
    pub fn exit_code(self) -> i32 {
        match self {
            ExitSignal::Interrupt => 128 + 2,
            ExitSignal::Terminate => 128 + 15,
        }
    }
}

/// Forwards SIGINT/SIGTERM to the frame loop. If the loop has not exited
/// within `grace`, the watcher restores the terminal and exits itself.
#[cfg(unix)]
pub fn watch_exit_signals(
    restorer: ScreenRestorer,
    tx: std::sync::mpsc::Sender<ExitSignal>,
    grace: Duration,
) -> io::Result<std::thread::JoinHandle<()>> {
    use signal_hook::consts::signal::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;

    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    Ok(std::thread::spawn(move || {
        let Some(signal) = signals.forever().find_map(ExitSignal::from_raw) else {
            return;
        };
        let _ = tx.send(signal);
        std::thread::sleep(grace);
        let _ = restorer.restore();
        std::process::exit(signal.exit_code());
    }))
}

#[cfg(test)]
#[path = "../../tests/unit/tui/screen.rs"]
mod tests;
