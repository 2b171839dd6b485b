//! Taking over the terminal screen and handing it back.

use std::io;
use std::sync::Arc;

/// The terminal modes a surface needs while the host loop runs.
pub trait ScreenOps: Send + Sync + 'static {
    /// Raw mode, alternate screen, hidden cursor.
    fn enter(&self) -> io::Result<()>;

    /// Undo `enter`. Also called after a partial or failed `enter`.
    fn leave(&self) -> io::Result<()>;
}

#[derive(Debug, Default)]
pub struct CrosstermScreen;

impl ScreenOps for CrosstermScreen {
    fn enter(&self) -> io::Result<()> {
        use crossterm::terminal::{enable_raw_mode, EnterAlternateScreen};

        enable_raw_mode()?;
        crossterm::execute!(io::stdout(), EnterAlternateScreen, crossterm::cursor::Hide)
    }

    fn leave(&self) -> io::Result<()> {
        use crossterm::terminal::{disable_raw_mode, LeaveAlternateScreen};

        // Both steps always run; the first failure is reported.
        let raw = disable_raw_mode();
        let screen = crossterm::execute!(io::stdout(), LeaveAlternateScreen, crossterm::cursor::Show);
        raw.and(screen)
    }
}

/// The screen as held by one surface. Handed back by `end` or on drop,
/// whichever comes first.
pub struct ScreenSession {
    ops: Arc<dyn ScreenOps>,
    held: bool,
}

impl ScreenSession {
    pub fn begin(ops: Arc<dyn ScreenOps>) -> io::Result<Self> {
        if let Err(err) = ops.enter() {
            let _ = ops.leave();
            return Err(err);
        }
        Ok(Self { ops, held: true })
    }

    /// Begin a session and build `T` inside it. When `init` fails the screen
    /// is handed back before the error is returned.
    pub fn begin_with<T>(
        ops: Arc<dyn ScreenOps>,
        init: impl FnOnce() -> io::Result<T>,
    ) -> io::Result<(Self, T)> {
        let mut session = Self::begin(ops)?;
        match init() {
            Ok(value) => Ok((session, value)),
            Err(err) => {
                if let Err(leave_err) = session.end() {
                    tracing::warn!(error = %leave_err, "screen not restored");
                }
                Err(err)
            }
        }
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    pub fn end(&mut self) -> io::Result<()> {
        if !std::mem::take(&mut self.held) {
            return Ok(());
        }
        self.ops.leave()
    }
}

impl Drop for ScreenSession {
    fn drop(&mut self) {
        let _ = self.end();
    }
}

/// Exit status of a process killed by `signal`, as shells report it.
pub fn signal_exit_code(signal: i32) -> i32 {
    128 + signal
}

/// Hand the screen back and exit on SIGINT or SIGTERM. The host loop is
/// usually blocked in `read_key`, so the signal is handled on its own thread.
#[cfg(unix)]
pub fn exit_on_signals(ops: Arc<dyn ScreenOps>) -> io::Result<std::thread::JoinHandle<()>> {
    use signal_hook::consts::signal::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;

    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    Ok(std::thread::spawn(move || {
        if let Some(signal) = signals.forever().next() {
            tracing::warn!(signal, "terminated by signal");
            let _ = ops.leave();
            std::process::exit(signal_exit_code(signal));
        }
    }))
}

#[cfg(test)]
#[path = "../../tests/unit/tui/screen.rs"]
mod tests;
