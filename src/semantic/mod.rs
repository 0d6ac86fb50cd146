pub mod symboltable;

pub use symboltable::{Symbol, SymbolKind, SymbolTable};
