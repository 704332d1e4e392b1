//! Terminal mode handling
//!
//! [`TerminalGuard`] owns raw mode and the alternate screen for the lifetime
//! of a session. The previous terminal state is restored on every way out:
//!
//! - normal quit: [`TerminalGuard::restore`], which reports failures
//! - early return or unwinding: the guard's `Drop`
//! - panic: a panic hook restores before the message is printed, so the
//!   message is readable
//! - termination signals (Unix): a handler puts back the saved termios and
//!   exits with `128 + signal`

use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::sync::Once;

pub type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Scoped raw-mode session on stdout
pub struct TerminalGuard {
    terminal: CrosstermTerminal,
    active: bool,
}

impl TerminalGuard {
    /// Enter raw mode and the alternate screen
    pub fn enter() -> io::Result<Self> {
        install_panic_hook();
        #[cfg(unix)]
        signals::install();

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(e) => {
                let _ = restore_terminal();
                return Err(e);
            }
        };

        log::debug!("terminal in raw mode");
        Ok(TerminalGuard {
            terminal,
            active: true,
        })
    }

    pub fn terminal_mut(&mut self) -> &mut CrosstermTerminal {
        &mut self.terminal
    }

    /// Leave raw mode and the alternate screen, reporting any failure
    pub fn restore(mut self) -> io::Result<()> {
        self.active = false;
        restore_terminal()?;
        self.terminal.show_cursor()?;
        log::debug!("terminal restored");
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.active {
            let _ = restore_terminal();
        }
    }
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)
}

fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = restore_terminal();
            log::error!("panic: {}", info);
            default_panic(info);
        }));
    });
}

#[cfg(unix)]
mod signals {
    use nix::libc;
    use nix::sys::signal::{sigaction, SaFlags, SigAction, SigHandler, SigSet, Signal};
    use nix::sys::termios;
    use std::io;
    use std::sync::OnceLock;

    /// Terminal mode from before raw mode was entered
    static ORIGINAL_MODE: OnceLock<libc::termios> = OnceLock::new();

    /// Leave the alternate screen, show the cursor
    const RESET_SCREEN: &[u8] = b"\x1b[?1049l\x1b[?25h";

    /// Save the current terminal mode and route termination signals through
    /// [`restore_and_exit`]. Must run before raw mode is entered.
    pub fn install() {
        let original = match termios::tcgetattr(io::stdin()) {
            Ok(original) => original,
            Err(e) => {
                log::warn!("stdin is not a terminal, signal cleanup disabled: {}", e);
                return;
            }
        };
        let _ = ORIGINAL_MODE.set(original.into());

        let action = SigAction::new(
            SigHandler::Handler(restore_and_exit),
            SaFlags::empty(),
            SigSet::empty(),
        );
        for signal in [Signal::SIGTERM, Signal::SIGHUP, Signal::SIGINT, Signal::SIGQUIT] {
            // SAFETY: the handler only calls async-signal-safe functions
            if let Err(e) = unsafe { sigaction(signal, &action) } {
                log::warn!("cannot install {} handler: {}", signal.as_str(), e);
            }
        }
    }

    extern "C" fn restore_and_exit(signal: libc::c_int) {
        // SAFETY: tcsetattr, write and _exit are async-signal-safe
        unsafe {
            if let Some(mode) = ORIGINAL_MODE.get() {
                libc::tcsetattr(libc::STDIN_FILENO, libc::TCSANOW, mode);
                libc::write(
                    libc::STDOUT_FILENO,
                    RESET_SCREEN.as_ptr().cast(),
                    RESET_SCREEN.len(),
                );
            }
            libc::_exit(128 + signal);
        }
    }
}
