use crate::utils::config::lexer::{keyword_spelling, IDENTIFIER, KEYWORD_BASE_ID, NUM};
use std::fmt;

/// Reserved IDs, assigned in keyword table order starting at 256.
pub mod ids {
    use super::KEYWORD_BASE_ID;

    pub const BEGIN: u32 = KEYWORD_BASE_ID;
    pub const CALL: u32 = KEYWORD_BASE_ID + 1;
    pub const CONST: u32 = KEYWORD_BASE_ID + 2;
    pub const DO: u32 = KEYWORD_BASE_ID + 3;
    pub const END: u32 = KEYWORD_BASE_ID + 4;
    pub const IF: u32 = KEYWORD_BASE_ID + 5;
    pub const ODD: u32 = KEYWORD_BASE_ID + 6;
    pub const PRINT: u32 = KEYWORD_BASE_ID + 7;
    pub const PROCEDURE: u32 = KEYWORD_BASE_ID + 8;
    pub const READ: u32 = KEYWORD_BASE_ID + 9;
    pub const THEN: u32 = KEYWORD_BASE_ID + 10;
    pub const VAR: u32 = KEYWORD_BASE_ID + 11;
    pub const WHILE: u32 = KEYWORD_BASE_ID + 12;
    pub const PASS: u32 = KEYWORD_BASE_ID + 13;
    pub const EQ: u32 = KEYWORD_BASE_ID + 14;
    pub const GE: u32 = KEYWORD_BASE_ID + 15;
    pub const LE: u32 = KEYWORD_BASE_ID + 16;
    pub const NE: u32 = KEYWORD_BASE_ID + 17;
    pub use crate::utils::config::lexer::{IDENTIFIER, NUM};
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Number(i64),
    /// Identifier or reserved word, with its reserved ID (`IDENTIFIER` for plain names).
    Word(String, u32),
    Symbol(char),
}

impl Token {
    pub fn identifier(name: impl Into<String>) -> Self {
        Token::Word(name.into(), IDENTIFIER)
    }

    /// Word token for a reserved ID, spelled the way the keyword table spells it.
    pub fn keyword(id: u32) -> Option<Self> {
        keyword_spelling(id).map(|spelling| Token::Word(spelling.to_string(), id))
    }

    /// Category tag the parser branches on. Symbols carry none.
    pub fn id(&self) -> Option<u32> {
        match self {
            Token::Number(_) => Some(NUM),
            Token::Word(_, id) => Some(*id),
            Token::Symbol(_) => None,
        }
    }

    pub fn is_keyword(&self, id: u32) -> bool {
        matches!(self, Token::Word(_, word_id) if *word_id == id)
    }

    pub fn is_symbol(&self, ch: char) -> bool {
        matches!(self, Token::Symbol(c) if *c == ch)
    }

    /// Name carried by an identifier token.
    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            Token::Word(name, IDENTIFIER) => Some(name),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            Token::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "Number({})", n),
            Token::Word(word, IDENTIFIER) => write!(f, "Ident({})", word),
            Token::Word(word, id) => write!(f, "Keyword({}, {})", word, id),
            Token::Symbol(ch) => write!(f, "Symbol('{}')", ch),
        }
    }
}
