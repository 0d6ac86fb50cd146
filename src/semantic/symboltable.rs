use crate::frontend::token::ids;
use crate::utils::errors::{ParseErrorKind, Pl0Error, Pl0Result};
use log::debug;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Var,
    Const,
    Procedure,
}

impl SymbolKind {
    /// Reserved ID of the declaring keyword.
    pub fn type_id(&self) -> u32 {
        match self {
            SymbolKind::Var => ids::VAR,
            SymbolKind::Const => ids::CONST,
            SymbolKind::Procedure => ids::PROCEDURE,
        }
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolKind::Var => f.write_str("VAR"),
            SymbolKind::Const => f.write_str("CONST"),
            SymbolKind::Procedure => f.write_str("PROCEDURE"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
    pub line_number: usize,
}

impl Symbol {
    pub fn new(name: &str, kind: SymbolKind, line_number: usize) -> Self {
        Self {
            name: name.to_string(),
            kind,
            line_number,
        }
    }
}

/// Stack of scopes kept as one insertion ordered entry list.
///
/// `markers` records where each open scope starts in `entries`, so
/// entering a scope is pushing a marker and leaving it truncates back to
/// the marker. Entries pushed before the first marker form an implicit
/// root scope.
#[derive(Debug, Default)]
pub struct SymbolTable {
    entries: Vec<Symbol>,
    markers: Vec<usize>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter_scope(&mut self) {
        self.markers.push(self.entries.len());
    }

    pub fn leave_scope(&mut self) -> Pl0Result<()> {
        let start = self.markers.pop().ok_or(Pl0Error::ScopeUnderflow)?;
        self.entries.truncate(start);
        Ok(())
    }

    fn current_scope_start(&self) -> usize {
        self.markers.last().copied().unwrap_or(0)
    }

    /// Adds `name` to the innermost scope. Fails without touching the
    /// table if the scope already binds it.
    pub fn declare(&mut self, name: &str, kind: SymbolKind, line: usize) -> Pl0Result<()> {
        if self.current_scope().iter().any(|symbol| symbol.name == name) {
            debug!("double declaration of '{}' in line {}", name, line);
            return Err(Pl0Error::parse_at(ParseErrorKind::TypDoubDec, line, name));
        }
        self.entries.push(Symbol::new(name, kind, line));
        Ok(())
    }

    /// Innermost binding of `name`, searching outward through all scopes.
    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.entries.iter().rev().find(|symbol| symbol.name == name)
    }

    pub fn lookup(&self, name: &str) -> Option<SymbolKind> {
        self.get(name).map(|symbol| symbol.kind)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Bindings of the innermost scope, oldest first.
    pub fn current_scope(&self) -> &[Symbol] {
        &self.entries[self.current_scope_start()..]
    }

    /// Number of open scopes.
    pub fn depth(&self) -> usize {
        self.markers.len()
    }

    /// Total number of bindings across all scopes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
