//! # Introduction
//!
//! rpnc is an interactive Reverse Polish Notation calculator for the terminal.
//! Every keystroke is read raw, interpreted, and answered with a full redraw of
//! the stack and the pending input line, drawn with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! InputSource → KeyDecoder → App (dispatch) → Calculator → render
//! ```
//!
//! 1. [`input`]: raw input units from the terminal (or a script) and the
//!    escape-sequence decoder that turns them into keys.
//! 2. [`ui`]: the [`ui::App`] session loop, which dispatches keys to the
//!    engine and repaints after each one.
//! 3. [`calculator`]: the engine, holding the value stack, pending buffer and
//!    literal history. It has no knowledge of terminals.
//! 4. [`terminal`]: raw-mode acquisition with guaranteed restoration.
//! 5. [`clipboard`], [`config`], [`logging`]: the clipboard sink used on quit,
//!    environment configuration, and the file logger.
//!
//! ## Keys
//!
//! Digits, `.`, `e`, `E` build a number; Enter pushes it. `+ - * / ^ %` are
//! binary operators, `r` rounds (a typed integer first sets the precision), `n`
//! negates, `s` swaps, `d` drops, `c` clears, ↑/↓ recall earlier entries, `h`
//! shows help, `q` quits.

pub mod calculator;
pub mod clipboard;
pub mod config;
pub mod input;
pub mod logging;
pub mod terminal;
pub mod ui;
