use std::io;
use std::io::Write;

use crossterm::cursor;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::execute;
use crossterm::terminal;
use tracing::warn;

/// Puts the terminal into full screen interactive mode, and restores it when dropped.
///
/// Restoring happens on every exit path, including early returns with `?` and panics that
/// unwind. Failures while restoring are logged, never returned.
pub struct TerminalGuard<W: Write> {
    out: W,

    /// Whether raw mode was turned on by this guard
    raw: bool,
}

impl TerminalGuard<io::Stdout> {
    /// Raw mode, alternate screen, mouse capture and a hidden cursor on stdout
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;

        // From here on, dropping the guard undoes whatever was already set up
        Self::with_writer(io::stdout(), true)
    }
}

impl<W: Write> TerminalGuard<W> {
    /// Sets up the screen on `out`. `raw` records that raw mode is already on and must be turned
    /// off again.
    pub fn with_writer(out: W, raw: bool) -> io::Result<Self> {
        let mut guard = Self { out, raw };

        execute!(
            guard.out,
            terminal::EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        )?;

        Ok(guard)
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        let res = execute!(
            self.out,
            cursor::Show,
            DisableMouseCapture,
            terminal::LeaveAlternateScreen
        );

        if let Err(e) = res {
            warn!("Failed to restore the screen: {e}");
        }

        // Raw mode is turned off even if the screen couldn't be restored
        if self.raw {
            if let Err(e) = terminal::disable_raw_mode() {
                warn!("Failed to disable raw mode: {e}");
            }
        }
    }
}
