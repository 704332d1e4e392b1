//! Keystroke input
//!
//! - [`source`]: the [`InputSource`] seam and its adapters (terminal, scripted)
//! - [`decoder`]: turns raw units into [`Key`]s, resolving arrow-key escape
//!   sequences
//!
//! The render loop only ever sees raw characters from an [`InputSource`]; all
//! platform differences stay inside the adapters.

pub mod decoder;
pub mod source;

pub use decoder::{Key, KeyDecoder};
pub use source::{CrosstermInput, InputSource, ScriptedInput};

/// Escape
pub const ESC: char = '\u{1b}';
/// Backspace as sent by most terminals
pub const DEL: char = '\u{7f}';
/// Backspace as sent by some Windows consoles
pub const BS: char = '\u{8}';
/// Ctrl-C
pub const ETX: char = '\u{3}';
/// Ctrl-D
pub const EOT: char = '\u{4}';
