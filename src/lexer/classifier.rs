use log::trace;
use num_bigint::BigInt;

use crate::{
    keyword::Keyword,
    symbol_table::Intern,
    token::{LexicalResult, Token},
};

/// Per-token decision tree. The only cross-token state is the symbol store.
#[derive(Debug)]
pub struct Classifier<'t, S: Intern> {
    symbols: &'t mut S,
}

impl<'t, S: Intern> Classifier<'t, S> {
    pub fn new(symbols: &'t mut S) -> Self {
        Self { symbols }
    }

    /// First matching rule wins: reserved table, integer, float, identifier,
    /// then unrecognized. Never fails.
    pub fn classify(&mut self, token: &str) -> LexicalResult {
        let result = if let Some(keyword) = Keyword::lookup(token) {
            LexicalResult::Keyword(keyword)
        } else if let Some(value) = Self::parse_integer(token) {
            LexicalResult::Integer(value)
        } else if let Ok(value) = token.parse::<f64>() {
            LexicalResult::Float(value)
        } else if Self::is_identifier(token) {
            LexicalResult::Identifier(self.symbols.intern(token))
        } else {
            LexicalResult::Unrecognized(token.to_owned())
        };
        trace!("`{}` => {}", token, result);
        result
    }

    pub fn classify_all<'a, I>(&mut self, tokens: I) -> Vec<LexicalResult>
    where
        I: IntoIterator<Item = Token<'a>>,
    {
        tokens
            .into_iter()
            .map(|token| self.classify(token.text))
            .collect()
    }

    // Optional sign then ASCII digits only; no `_` separators.
    #[inline]
    fn parse_integer(token: &str) -> Option<BigInt> {
        let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        token.parse::<BigInt>().ok()
    }

    // Only the leading character is checked; `foo!bar` is an identifier.
    #[inline]
    fn is_identifier(token: &str) -> bool {
        token
            .chars()
            .next()
            .is_some_and(|c| !c.is_ascii_digit())
    }
}
