//! Input sources
//!
//! [`InputSource`] is the only way the render loop receives keystrokes. It
//! hands out raw units exactly as a terminal in raw mode would deliver them:
//! control characters unmodified, arrow keys as escape sequences.
//!
//! - [`CrosstermInput`]: live terminal input. crossterm already abstracts the
//!   platform (termios on Unix, the console API on Windows); this adapter
//!   re-encodes its key events into raw units.
//! - [`ScriptedInput`]: a fixed list of units, for tests and replays.

use super::{DEL, EOT, ESC, ETX};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::collections::VecDeque;
use std::io;

/// A blocking source of raw input units
pub trait InputSource {
    /// Wait for the next unit. `Ok(None)` means the source is exhausted.
    fn read_unit(&mut self) -> io::Result<Option<char>>;
}

/// Raw units read from the terminal via crossterm
///
/// The terminal must already be in raw mode (see
/// [`TerminalGuard`](crate::terminal::TerminalGuard)).
#[derive(Debug, Default)]
pub struct CrosstermInput {
    pending: VecDeque<char>,
}

impl CrosstermInput {
    pub fn new() -> Self {
        CrosstermInput::default()
    }
}

impl InputSource for CrosstermInput {
    fn read_unit(&mut self) -> io::Result<Option<char>> {
        loop {
            if let Some(unit) = self.pending.pop_front() {
                return Ok(Some(unit));
            }
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.pending.extend(encode_key(key));
                }
            }
        }
    }
}

/// Re-encode a key event as the units a raw-mode terminal would send.
///
/// Keys with no raw equivalent produce nothing.
pub fn encode_key(key: KeyEvent) -> Vec<char> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => vec![ETX],
            KeyCode::Char('d') => vec![EOT],
            _ => Vec::new(),
        };
    }

    match key.code {
        KeyCode::Char(c) => vec![c],
        KeyCode::Enter => vec!['\r'],
        KeyCode::Backspace => vec![DEL],
        KeyCode::Tab => vec!['\t'],
        KeyCode::Esc => vec![ESC],
        KeyCode::Up => vec![ESC, '[', 'A'],
        KeyCode::Down => vec![ESC, '[', 'B'],
        KeyCode::Right => vec![ESC, '[', 'C'],
        KeyCode::Left => vec![ESC, '[', 'D'],
        _ => Vec::new(),
    }
}

/// A pre-recorded sequence of units
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    units: VecDeque<char>,
}

impl ScriptedInput {
    pub fn new<I: IntoIterator<Item = char>>(units: I) -> Self {
        ScriptedInput {
            units: units.into_iter().collect(),
        }
    }

    /// Units of `text`, in order
    pub fn from_text(text: &str) -> Self {
        ScriptedInput::new(text.chars())
    }

    /// Units not read yet
    pub fn remaining(&self) -> usize {
        self.units.len()
    }
}

impl InputSource for ScriptedInput {
    fn read_unit(&mut self) -> io::Result<Option<char>> {
        Ok(self.units.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_key() {
        let press = |code| KeyEvent::new(code, KeyModifiers::NONE);

        assert_eq!(encode_key(press(KeyCode::Char('7'))), vec!['7']);
        assert_eq!(encode_key(press(KeyCode::Enter)), vec!['\r']);
        assert_eq!(encode_key(press(KeyCode::Backspace)), vec![DEL]);
        assert_eq!(encode_key(press(KeyCode::Up)), vec![ESC, '[', 'A']);
        assert_eq!(encode_key(press(KeyCode::F(1))), Vec::<char>::new());
        assert_eq!(
            encode_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            vec![ETX]
        );
    }

    #[test]
    fn test_scripted_input_drains() {
        let mut input = ScriptedInput::from_text("5\r");
        assert_eq!(input.read_unit().unwrap(), Some('5'));
        assert_eq!(input.remaining(), 1);
        assert_eq!(input.read_unit().unwrap(), Some('\r'));
        assert_eq!(input.read_unit().unwrap(), None);
    }
}
