use log::info;

use crate::{
    lexer::{Classifier, split},
    symbol_table::SymbolTable,
    token::LexicalResult,
};

/// Owns the symbol table for one run; identifiers keep their index across
/// repeated `analyze` calls.
#[derive(Debug, Default)]
pub struct Analyzer {
    symbol_table: SymbolTable,
}

impl Analyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_symbol_table(symbol_table: SymbolTable) -> Self {
        Self { symbol_table }
    }

    pub fn analyze(&mut self, text: &str) -> Vec<LexicalResult> {
        let tokens = split(text);
        let results = Classifier::new(&mut self.symbol_table).classify_all(tokens);
        let unrecognized = results.iter().filter(|r| r.is_unrecognized()).count();
        info!(
            "classified {} tokens, {} unrecognized, {} symbols",
            results.len(),
            unrecognized,
            self.symbol_table.len()
        );
        results
    }

    pub fn symbol_table(&self) -> &SymbolTable {
        &self.symbol_table
    }

    pub fn into_symbol_table(self) -> SymbolTable {
        self.symbol_table
    }
}
