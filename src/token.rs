use std::fmt;

use num_bigint::BigInt;

use crate::keyword::Keyword;

/// Whitespace-free slice of the input. `end_position` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub start_position: usize,
    pub end_position: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Keyword(Keyword),
    Integer,
    Float,
    Identifier,
    Error,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Keyword(keyword) => write!(f, "{}", keyword),
            TokenKind::Integer => f.write_str("INTEGER"),
            TokenKind::Float => f.write_str("FLOAT"),
            TokenKind::Identifier => f.write_str("ID"),
            TokenKind::Error => f.write_str("ERROR"),
        }
    }
}

/// Outcome of classifying one token.
#[derive(Debug, Clone, PartialEq)]
pub enum LexicalResult {
    Keyword(Keyword),
    /// Unbounded, so long digit strings keep every digit.
    Integer(BigInt),
    Float(f64),
    /// Symbol table index.
    Identifier(usize),
    Unrecognized(String),
}

impl LexicalResult {
    pub fn kind(&self) -> TokenKind {
        match self {
            LexicalResult::Keyword(keyword) => TokenKind::Keyword(*keyword),
            LexicalResult::Integer(_) => TokenKind::Integer,
            LexicalResult::Float(_) => TokenKind::Float,
            LexicalResult::Identifier(_) => TokenKind::Identifier,
            LexicalResult::Unrecognized(_) => TokenKind::Error,
        }
    }

    pub fn is_unrecognized(&self) -> bool {
        matches!(self, LexicalResult::Unrecognized(_))
    }
}

impl fmt::Display for LexicalResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = self.kind();
        match self {
            LexicalResult::Keyword(_) => write!(f, "<token={}>", kind),
            LexicalResult::Integer(value) => {
                write!(f, "<token={}, integer_value={}>", kind, value)
            }
            // Debug keeps the fractional part on whole numbers (`10.0`).
            LexicalResult::Float(value) => write!(f, "<token={}, float_value={:?}>", kind, value),
            LexicalResult::Identifier(index) => write!(f, "<token={}, index={}>", kind, index),
            LexicalResult::Unrecognized(text) => {
                write!(f, "<token={}, unrecognized_string={}>", kind, text)
            }
        }
    }
}
