//! Escape sequence decoding
//!
//! Raw input arrives one unit at a time. Arrow keys are three units long
//! (`ESC [ A`), so decoding is a small state machine:
//!
//! ```text
//! Idle ──ESC──▶ SawEscape ──any──▶ SawIntroducer(c) ──any──▶ Idle (dispatch)
//!   └──other──▶ Key::Char
//! ```
//!
//! After an `ESC` exactly two more units are consumed. Only `[A`/`[B` (or the
//! application-mode `OA`/`OB`) mean anything; every other continuation is
//! swallowed.

use super::ESC;

/// A decoded keystroke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    /// Cursor up: recall an older literal
    HistoryPrevious,
    /// Cursor down: recall a newer literal
    HistoryNext,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum State {
    #[default]
    Idle,
    SawEscape,
    SawIntroducer(char),
}

/// Stateful decoder from raw units to [`Key`]s
#[derive(Debug, Clone, Default)]
pub struct KeyDecoder {
    state: State,
}

impl KeyDecoder {
    pub fn new() -> Self {
        KeyDecoder::default()
    }

    /// Feed one unit; returns a key once a complete one has been read
    pub fn feed(&mut self, unit: char) -> Option<Key> {
        match self.state {
            State::Idle if unit == ESC => {
                self.state = State::SawEscape;
                None
            }
            State::Idle => Some(Key::Char(unit)),
            State::SawEscape => {
                self.state = State::SawIntroducer(unit);
                None
            }
            State::SawIntroducer(introducer) => {
                self.state = State::Idle;
                match (introducer, unit) {
                    ('[' | 'O', 'A') => Some(Key::HistoryPrevious),
                    ('[' | 'O', 'B') => Some(Key::HistoryNext),
                    _ => {
                        log::trace!(
                            "ignoring escape sequence ESC {:?} {:?}",
                            introducer,
                            unit
                        );
                        None
                    }
                }
            }
        }
    }

    /// Whether the decoder is between keys
    pub fn is_idle(&self) -> bool {
        self.state == State::Idle
    }

    /// Abandon any partially read sequence
    pub fn reset(&mut self) {
        self.state = State::Idle;
    }
}
