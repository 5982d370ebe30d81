//! Terminal UI: a thin view over one [`Game`](crate::Game).

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{action_for, Action};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use std::io;
use tracing::{error, info, instrument, warn};

/// Runs `restore` when dropped, including while unwinding from a panic.
///
/// A failed restore is logged; it never replaces the caller's result.
struct RestoreGuard<F: FnMut() -> io::Result<()>> {
    restore: F,
}

impl<F: FnMut() -> io::Result<()>> RestoreGuard<F> {
    fn new(restore: F) -> Self {
        Self { restore }
    }
}

impl<F: FnMut() -> io::Result<()>> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        if let Err(e) = (self.restore)() {
            warn!(error = %e, "Failed to restore terminal");
        }
    }
}

/// Runs the interactive game until the user quits.
///
/// The terminal is restored on every exit path: normal quit, a failed
/// setup, a game loop error, or a panic. `ratatui::try_init` installs a
/// panic hook that restores before the panic message is printed, and the
/// guard covers the rest.
#[instrument]
pub fn run_tui() -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    // Armed before setup so a half-initialized terminal is put back too.
    let _guard = RestoreGuard::new(ratatui::try_restore);
    let mut terminal = ratatui::try_init().context("Failed to initialize terminal")?;

    let res = run_app(&mut terminal, App::new());

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI closed");
    res
}

fn run_app(terminal: &mut DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }

        if app.should_quit() {
            info!(status = %app.status_line(), "User quit");
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::panic::{self, AssertUnwindSafe};

    #[test]
    fn test_guard_restores_on_early_return() {
        let restored = Cell::new(0);
        let setup = || -> Result<()> {
            let _guard = RestoreGuard::new(|| {
                restored.set(restored.get() + 1);
                Ok(())
            });
            anyhow::bail!("terminal size unavailable")
        };

        let err = setup().unwrap_err();
        assert_eq!(err.to_string(), "terminal size unavailable");
        assert_eq!(restored.get(), 1);
    }

    #[test]
    fn test_guard_restores_while_unwinding() {
        let restored = Cell::new(false);
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let _guard = RestoreGuard::new(|| {
                restored.set(true);
                Ok(())
            });
            panic!("game invariants violated");
        }));

        assert!(result.is_err());
        assert!(restored.get());
    }

    #[test]
    fn test_failed_restore_keeps_loop_result() {
        let run = || -> Result<u8> {
            let _guard = RestoreGuard::new(|| Err(io::Error::other("not a tty")));
            Ok(7)
        };
        assert_eq!(run().expect("loop result survives"), 7);
    }
}
