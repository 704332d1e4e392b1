//! Operator dispatch
//!
//! - [`binary`]: `+ - * / ^ %`
//! - [`unary`]: `r` (round) and `n` (negate)

pub mod binary;
pub mod unary;

/// Symbols of the binary arithmetic operators
pub const ARITHMETIC_SYMBOLS: [char; 6] = ['+', '-', '*', '/', '^', '%'];

/// An operator key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Mod,
    Round,
    Negate,
}

impl Operator {
    pub fn from_symbol(symbol: char) -> Option<Self> {
        use Operator::*;

        match symbol {
            '+' => Some(Add),
            '-' => Some(Sub),
            '*' => Some(Mul),
            '/' => Some(Div),
            '^' => Some(Pow),
            '%' => Some(Mod),
            'r' => Some(Round),
            'n' => Some(Negate),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        use Operator::*;

        match self {
            Add => '+',
            Sub => '-',
            Mul => '*',
            Div => '/',
            Pow => '^',
            Mod => '%',
            Round => 'r',
            Negate => 'n',
        }
    }

    /// Number of stack values the operator consumes
    pub fn arity(self) -> usize {
        match self {
            Operator::Round | Operator::Negate => 1,
            _ => 2,
        }
    }
}

/// Whether `text` is exactly one arithmetic operator symbol
pub fn is_arithmetic_symbol(text: &str) -> bool {
    let mut chars = text.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if ARITHMETIC_SYMBOLS.contains(&c))
}

/// Whether `text` is exactly one operator symbol of any arity
pub fn is_operator_symbol(text: &str) -> bool {
    let mut chars = text.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if Operator::from_symbol(c).is_some())
}
