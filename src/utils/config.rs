// Lexer constants and the reserved keyword table
pub mod lexer {
    use lazy_static::lazy_static;
    use std::collections::HashMap;

    // IDs of reserved words start here; everything below is a plain character code.
    pub const KEYWORD_BASE_ID: u32 = 256;

    // Keyword spellings, in ID order. Operator keywords come last.
    pub const KEYWORD_SPELLINGS: [&str; 18] = [
        "BEGIN", "CALL", "CONST", "DO", "END", "IF", "ODD", "PRINT", "PROCEDURE", "READ",
        "THEN", "VAR", "WHILE", "PASS", "EQ", "GE", "LE", "NE",
    ];

    pub const IDENTIFIER: u32 = KEYWORD_BASE_ID + KEYWORD_SPELLINGS.len() as u32;
    pub const NUM: u32 = IDENTIFIER + 1;

    lazy_static! {
        pub static ref KEYWORDS: HashMap<&'static str, u32> = KEYWORD_SPELLINGS
            .iter()
            .enumerate()
            .map(|(index, spelling)| (*spelling, KEYWORD_BASE_ID + index as u32))
            .collect();
    }

    /// Exact, case sensitive lookup in the reserved table.
    pub fn keyword_id(word: &str) -> Option<u32> {
        KEYWORDS.get(word).copied()
    }

    /// Spelling for a reserved ID, `None` for identifiers, numbers and unknown IDs.
    pub fn keyword_spelling(id: u32) -> Option<&'static str> {
        id.checked_sub(KEYWORD_BASE_ID)
            .and_then(|index| KEYWORD_SPELLINGS.get(index as usize))
            .copied()
    }
}

// Parser limits
pub mod parser {
    // Deepest allowed nesting of block, statement and expression productions.
    pub const DEFAULT_MAX_DEPTH: usize = 256;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ParserConfig {
        pub max_depth: usize,
    }

    impl Default for ParserConfig {
        fn default() -> Self {
            Self {
                max_depth: DEFAULT_MAX_DEPTH,
            }
        }
    }
}

// Intermediate code naming
pub mod ir {
    pub const TEMP_PREFIX: &str = "t";
}
