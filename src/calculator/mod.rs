//! RPN calculator engine
//!
//! This module holds all calculator state and arithmetic:
//! - [`engine`]: the [`Calculator`] session object (stack, pending buffer, history)
//! - [`value`]: tagged numeric values ([`Number`]) and their display form
//! - [`complex`]: the complex arithmetic backing [`Number::Complex`]
//! - [`literal`]: parsing of typed literals into numbers
//! - [`history`]: the append-only log of committed literals used for recall
//! - [`ops`]: operator dispatch (binary arithmetic, round, negate)
//! - [`errors`]: [`CalcError`]
//!
//! # Stack Discipline
//!
//! The last element of the stack is its top. Binary operators pop `b` then
//! `a` and push `a op b`, so the earlier-pushed operand is always the left
//! operand. Every operator checks the stack depth before touching it; an
//! operator without enough operands leaves the stack exactly as it was.
//!
//! The engine never renders anything and never reads input. It is driven by
//! [`crate::ui::App`], which owns one [`Calculator`] per session.

pub mod complex;
pub mod engine;
pub mod errors;
pub mod history;
pub mod literal;
pub mod ops;
pub mod value;

pub use engine::Calculator;
pub use errors::CalcError;
pub use ops::Operator;
pub use value::Number;
