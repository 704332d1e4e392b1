//! Main TUI application state and the read-dispatch-render loop

use crate::calculator::ops::{is_arithmetic_symbol, Operator};
use crate::calculator::{CalcError, Calculator};
use crate::clipboard::{ClipboardSink, NoClipboard};
use crate::input::{InputSource, Key, KeyDecoder, BS, DEL, EOT, ETX};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;

/// How the status line should be styled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// Outcome of the last action, shown in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        StatusMessage {
            text: text.into(),
            kind: StatusKind::Info,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        StatusMessage {
            text: text.into(),
            kind: StatusKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        StatusMessage {
            text: text.into(),
            kind: StatusKind::Error,
        }
    }
}

/// The main application state
pub struct App {
    /// The calculator engine
    pub calculator: Calculator,

    /// Escape-sequence state between input units
    decoder: KeyDecoder,

    /// Receives the bottom stack value on quit
    clipboard: Box<dyn ClipboardSink>,

    /// Status message to display
    pub status: StatusMessage,

    /// Whether the app should quit
    pub should_quit: bool,

    /// The help screen was requested by the last key
    help_requested: bool,

    /// The screen should be wiped before the next draw
    clear_requested: bool,

    /// Text handed to the clipboard on quit, if any
    copied: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        App::new(Calculator::new(), Box::new(NoClipboard))
    }
}

impl App {
    pub fn new(calculator: Calculator, clipboard: Box<dyn ClipboardSink>) -> Self {
        App {
            calculator,
            decoder: KeyDecoder::new(),
            clipboard,
            status: StatusMessage::info("Ready! Press h for help"),
            should_quit: false,
            help_requested: false,
            clear_requested: false,
            copied: None,
        }
    }

    /// Run the session until quit or until `input` is exhausted
    pub fn run<B: Backend, I: InputSource>(
        &mut self,
        terminal: &mut Terminal<B>,
        input: &mut I,
    ) -> io::Result<()> {
        terminal.clear()?;
        loop {
            terminal.draw(|f| self.render(f))?;

            let Some(unit) = input.read_unit()? else {
                log::info!("input closed");
                self.quit();
                break;
            };
            self.handle_unit(unit);

            if self.should_quit {
                break;
            }
            if self.help_requested {
                self.help_requested = false;
                if !self.show_help(terminal, input)? {
                    self.quit();
                    break;
                }
            }
            if self.clear_requested {
                self.clear_requested = false;
                terminal.clear()?;
            }
        }

        Ok(())
    }

    /// Feed one raw unit through the key decoder
    pub fn handle_unit(&mut self, unit: char) {
        if let Some(key) = self.decoder.feed(unit) {
            self.handle_key(key);
        }
    }

    /// Handle one decoded key
    pub fn handle_key(&mut self, key: Key) {
        match key {
            Key::HistoryPrevious => self.calculator.recall_previous(),
            Key::HistoryNext => self.calculator.recall_next(),
            Key::Char(c) => self.handle_char(c),
        }
    }

    /// Text copied to the clipboard on quit
    pub fn copied(&self) -> Option<&str> {
        self.copied.as_deref()
    }

    fn handle_char(&mut self, c: char) {
        match c {
            // A leading minus starts a negative literal
            '-' if self.calculator.buffer().is_empty() => self.calculator.push_char(c),
            '+' | '-' if self.calculator.buffer_awaits_exponent_sign() => {
                self.calculator.push_char(c)
            }
            c if Operator::from_symbol(c).is_some() => {
                let result = self.calculator.apply_operator(c);
                self.calculator.clear_buffer();
                self.settle(result);
            }
            c if c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E') => {
                self.calculator.push_char(c)
            }
            '\r' | '\n' => self.enter(),
            'd' => {
                if let Some(value) = self.calculator.drop_top() {
                    self.status = StatusMessage::info(format!("Dropped {}", value));
                }
            }
            'c' => {
                self.calculator.clear();
                self.clear_requested = true;
                self.status = StatusMessage::info("Stack cleared");
            }
            BS | DEL => {
                self.calculator.backspace();
            }
            'h' | '?' => self.help_requested = true,
            's' => {
                if self.calculator.depth() >= 2 {
                    self.calculator.swap();
                    self.status = StatusMessage::info("Swapped");
                }
            }
            'q' | ETX | EOT => self.quit(),
            other => log::trace!("ignoring unit {:?}", other),
        }
    }

    /// Commit the pending buffer: an operator symbol is applied, anything
    /// else is pushed as a literal. The buffer is cleared either way.
    fn enter(&mut self) {
        let pending = self.calculator.take_buffer();
        if pending.is_empty() {
            return;
        }

        if is_arithmetic_symbol(&pending) {
            if let Some(symbol) = pending.chars().next() {
                let result = self.calculator.apply_operator(symbol);
                self.settle(result);
            }
            return;
        }

        match self.calculator.push(&pending) {
            Ok(()) => self.status = StatusMessage::success(format!("Pushed {}", pending)),
            Err(e) => self.report(e),
        }
    }

    /// Update the status line after an operator
    fn settle(&mut self, result: Result<(), CalcError>) {
        match result {
            Ok(()) => {
                if let Some(top) = self.calculator.top() {
                    self.status = StatusMessage::success(format!("= {}", top));
                }
            }
            Err(e) => self.report(e),
        }
    }

    fn report(&mut self, error: CalcError) {
        if error.is_reportable() {
            log::warn!("{}", error);
            self.status = StatusMessage::error(error.to_string());
        } else {
            log::debug!("{}", error);
        }
    }

    /// End the session, copying the bottom stack value to the clipboard
    fn quit(&mut self) {
        self.should_quit = true;

        let Some(bottom) = self.calculator.bottom() else {
            return;
        };
        let text = bottom.to_string();
        match self.clipboard.copy_text(&text) {
            Ok(()) => {
                log::info!("copied {} to clipboard", text);
                self.copied = Some(text);
            }
            Err(e) => log::warn!("{}", e),
        }
    }

    /// Draw the help screen and wait for one acknowledgment unit.
    ///
    /// Returns `false` if the input closed instead.
    fn show_help<B: Backend, I: InputSource>(
        &mut self,
        terminal: &mut Terminal<B>,
        input: &mut I,
    ) -> io::Result<bool> {
        terminal.draw(|f| {
            let area = f.area();
            super::panes::render_help(f, area)
        })?;
        let acknowledged = input.read_unit()?.is_some();
        if acknowledged {
            self.decoder.reset();
            terminal.clear()?;
        }
        Ok(acknowledged)
    }

    /// Render the UI
    fn render(&self, frame: &mut Frame) {
        let size = frame.area();

        // Stack listing, prompt line, status bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(size);

        super::panes::render_stack_pane(frame, chunks[0], self.calculator.stack());
        super::panes::render_prompt(frame, chunks[1], self.calculator.buffer());
        super::panes::render_status_bar(
            frame,
            chunks[2],
            &self.status,
            self.calculator.depth(),
        );
    }
}
