//! Calculator session state
//!
//! [`Calculator`] is the single owner of the value stack, the pending input
//! buffer, and the literal history. The render loop holds one and calls into it
//! for every keystroke; nothing here knows about terminals or key codes.

use super::errors::CalcError;
use super::history::History;
use super::literal::parse_literal;
use super::ops::{self, Operator};
use super::value::Number;

/// The RPN calculator engine
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    /// Value stack, last element is the top
    stack: Vec<Number>,

    /// Text typed since the last commit
    buffer: String,

    /// Every literal pushed so far, for arrow-key recall
    history: History,
}

impl Calculator {
    pub fn new() -> Self {
        Calculator::default()
    }

    /// Parse `literal` and push it, recording the original text in history.
    ///
    /// On failure neither the stack nor the history changes.
    pub fn push(&mut self, literal: &str) -> Result<(), CalcError> {
        let value = parse_literal(literal)?;
        self.stack.push(value);
        self.history.record(literal);
        Ok(())
    }

    /// Push a computed value. Results are not literals, so history is untouched.
    pub fn push_value(&mut self, value: Number) {
        self.stack.push(value);
    }

    /// Remove and return the top value, or `0` when the stack is empty
    pub fn pop(&mut self) -> Number {
        self.stack.pop().unwrap_or_default()
    }

    /// Apply the operator bound to `symbol`.
    ///
    /// Unknown symbols are ignored. Round reads its precision from the
    /// pending buffer; every other operator first commits the buffer as a
    /// literal (unless the buffer is itself an operator symbol).
    pub fn apply_operator(&mut self, symbol: char) -> Result<(), CalcError> {
        let Some(op) = Operator::from_symbol(symbol) else {
            log::trace!("ignoring unknown operator {:?}", symbol);
            return Ok(());
        };

        match op {
            Operator::Round => {
                self.apply_round()?;
                self.commit_buffer()
            }
            Operator::Negate => {
                self.commit_buffer()?;
                self.apply_negate()
            }
            _ => {
                self.commit_buffer()?;
                self.apply_binary(op)
            }
        }
    }

    /// Exchange the top two values; no-op with fewer than two
    pub fn swap(&mut self) {
        let len = self.stack.len();
        if len >= 2 {
            self.stack.swap(len - 1, len - 2);
        }
    }

    /// Discard the top value; no-op on an empty stack
    pub fn drop_top(&mut self) -> Option<Number> {
        self.stack.pop()
    }

    /// Empty the stack and the pending buffer. History is kept.
    pub fn clear(&mut self) {
        self.stack.clear();
        self.buffer.clear();
    }

    /// Replace the buffer with the previous (older) history entry
    pub fn recall_previous(&mut self) {
        if let Some(entry) = self.history.recall_older() {
            self.buffer = entry.to_string();
        }
    }

    /// Replace the buffer with the next (newer) history entry
    pub fn recall_next(&mut self) {
        if let Some(entry) = self.history.recall_newer() {
            self.buffer = entry.to_string();
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn push_char(&mut self, c: char) {
        self.buffer.push(c);
    }

    /// Remove the last buffered character; no-op when empty
    pub fn backspace(&mut self) -> Option<char> {
        self.buffer.pop()
    }

    pub fn clear_buffer(&mut self) {
        self.buffer.clear();
    }

    /// Take the buffer contents, leaving it empty
    pub fn take_buffer(&mut self) -> String {
        std::mem::take(&mut self.buffer)
    }

    /// Whether the buffer ends in an exponent marker, so a following sign
    /// belongs to the literal rather than being an operator
    pub fn buffer_awaits_exponent_sign(&self) -> bool {
        let mut tail = self.buffer.chars().rev();
        matches!(tail.next(), Some('e' | 'E'))
            && tail.next().is_some_and(|c| c.is_ascii_digit() || c == '.')
    }

    /// Stack contents, bottom first
    pub fn stack(&self) -> &[Number] {
        &self.stack
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn top(&self) -> Option<&Number> {
        self.stack.last()
    }

    /// The value that has been on the stack longest
    pub fn bottom(&self) -> Option<&Number> {
        self.stack.first()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn history_offset(&self) -> usize {
        self.history.offset()
    }

    /// Fail with `InsufficientOperands` unless `needed` values are present
    pub(crate) fn require(&self, op: Operator, needed: usize) -> Result<(), CalcError> {
        if self.stack.len() < needed {
            return Err(CalcError::InsufficientOperands {
                op: op.symbol(),
                needed,
                available: self.stack.len(),
            });
        }
        Ok(())
    }

    /// Push the buffered literal, if any. The buffer is emptied either way.
    fn commit_buffer(&mut self) -> Result<(), CalcError> {
        if self.buffer.is_empty() || ops::is_operator_symbol(&self.buffer) {
            return Ok(());
        }
        let literal = self.take_buffer();
        self.push(&literal)
    }
}
