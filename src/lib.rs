pub mod analyzer;
mod error;
pub mod keyword;
pub mod lexer;
pub mod repl;
pub mod source;
pub mod symbol_table;
pub mod token;

pub use {
    analyzer::Analyzer,
    error::LexError,
    keyword::Keyword,
    lexer::{Classifier, Tokenizer, split},
    symbol_table::{Intern, SharedSymbolTable, SymbolTable},
    token::{LexicalResult, Token, TokenKind},
};
