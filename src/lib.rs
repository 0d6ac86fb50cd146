use std::{fs::File, io::Read, path::Path};

pub mod ast;
pub mod frontend;
pub mod ir;
pub mod semantic;
pub mod utils;

pub use utils::errors;

pub const VERSION: &str = "0.1.0";

pub struct LineNumber {
    pub line: usize,
}

impl Default for LineNumber {
    fn default() -> Self {
        Self { line: 1 }
    }
}

use crate::frontend::{lexer::scan, ParseOutcome, Parser};
use crate::semantic::SymbolTable;
use crate::utils::config::parser::ParserConfig;
use crate::utils::errors::{Pl0Error, Pl0Result};

pub fn read(filename: &Path) -> Pl0Result<String> {
    match filename.extension() {
        Some(ext) if ext == "pl0" => {}
        _ => {
            return Err(Pl0Error::FileReadError(
                "File must have a .pl0 extension".to_string(),
            ))
        }
    }
    let mut file = File::open(filename)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Lexes and parses a whole source text with a fresh scope stack.
pub fn parse_source(source: &str, config: ParserConfig) -> Pl0Result<ParseOutcome> {
    let mut state = LineNumber::default();
    let tokens = scan(&mut state, source)?;
    let mut table = SymbolTable::new();
    Parser::with_config(tokens, config).parse(&mut table)
}
