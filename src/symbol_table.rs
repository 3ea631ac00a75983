use std::{
    collections::HashMap,
    fmt,
    sync::{Arc, Mutex, MutexGuard},
};

use log::debug;

use crate::keyword::Keyword;

/// Anything the classifier can hand an identifier to and get an index back.
pub trait Intern {
    fn intern(&mut self, text: &str) -> usize;
}

/// Identifier registry. Index is the position in `names`, so every index in
/// `0..len()` maps to exactly one name and `index` is its inverse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolTable {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl SymbolTable {
    /// Table pre-seeded with `for`, `while`, `if`, `else` at indices 0..=3.
    pub fn new() -> Self {
        let mut table = Self {
            names: Vec::new(),
            index: HashMap::new(),
        };
        for keyword in Keyword::reserved_words() {
            table.insert(keyword.lexeme());
        }
        table
    }

    /// Returns the existing index for a known name, otherwise appends it.
    pub fn insert(&mut self, identifier: &str) -> usize {
        if let Some(index) = self.index.get(identifier) {
            return *index;
        }
        let index = self.names.len();
        self.names.push(identifier.to_owned());
        self.index.insert(identifier.to_owned(), index);
        debug!("symbol `{}` assigned index {}", identifier, index);
        index
    }

    pub fn get(&self, identifier: &str) -> Option<usize> {
        self.index.get(identifier).copied()
    }

    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.names.iter().map(String::as_str).enumerate()
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "==> SYMBOL TABLE <==")?;
        for (index, name) in self.iter() {
            writeln!(f, "{} -> {}", index, name)?;
        }
        write!(f, "{}", "=".repeat(10))
    }
}

impl Intern for SymbolTable {
    fn intern(&mut self, text: &str) -> usize {
        self.insert(text)
    }
}

/// Cloneable handle for classifying several token streams against one table.
#[derive(Debug, Clone, Default)]
pub struct SharedSymbolTable {
    inner: Arc<Mutex<SymbolTable>>,
}

impl SharedSymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lookup and append happen under a single lock acquisition.
    pub fn insert(&self, identifier: &str) -> usize {
        self.lock().insert(identifier)
    }

    pub fn get(&self, identifier: &str) -> Option<usize> {
        self.lock().get(identifier)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn snapshot(&self) -> SymbolTable {
        self.lock().clone()
    }

    pub fn render(&self) -> String {
        self.lock().render()
    }

    // `insert` either completes or leaves the table untouched, so a poisoned
    // guard still holds a consistent table.
    fn lock(&self) -> MutexGuard<'_, SymbolTable> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Intern for SharedSymbolTable {
    fn intern(&mut self, text: &str) -> usize {
        self.insert(text)
    }
}
