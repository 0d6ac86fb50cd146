use std::fmt;
use std::io;
use thiserror::Error;

/// Grammar and semantic violations the parser can report.
///
/// The order mirrors the diagnostic table the messages come from, so
/// `kind as usize` is a stable index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    SynEnd,
    SynMissAss,
    SynNoId,
    SynMissSep,
    SynMissCom,
    SynMissEnd,
    SynIf,
    SynWhile,
    SynStmt,
    SynNoComp,
    SynMissCb,
    SynMissOb,
    TypConstNum,
    TypIdNoIn,
    TypNoId,
    TypOnlyProc,
    TypOnlyInt,
    TypDoubDec,
}

impl ParseErrorKind {
    pub const ALL: [ParseErrorKind; 18] = [
        ParseErrorKind::SynEnd,
        ParseErrorKind::SynMissAss,
        ParseErrorKind::SynNoId,
        ParseErrorKind::SynMissSep,
        ParseErrorKind::SynMissCom,
        ParseErrorKind::SynMissEnd,
        ParseErrorKind::SynIf,
        ParseErrorKind::SynWhile,
        ParseErrorKind::SynStmt,
        ParseErrorKind::SynNoComp,
        ParseErrorKind::SynMissCb,
        ParseErrorKind::SynMissOb,
        ParseErrorKind::TypConstNum,
        ParseErrorKind::TypIdNoIn,
        ParseErrorKind::TypNoId,
        ParseErrorKind::TypOnlyProc,
        ParseErrorKind::TypOnlyInt,
        ParseErrorKind::TypDoubDec,
    ];

    /// Human readable diagnostic text.
    pub fn message(&self) -> &'static str {
        match self {
            ParseErrorKind::SynEnd => "Syntax-Error: Program must end with '.'",
            ParseErrorKind::SynMissAss => "Syntax-Error: Missing assign operator '='",
            ParseErrorKind::SynNoId => {
                "Syntax-Error: Missing identifier after CONST, VAR or PROCEDURE declaration"
            }
            ParseErrorKind::SynMissSep => "Syntax-Error: Missing block separator ';'",
            ParseErrorKind::SynMissCom => "Syntax-Error: Missing ',' separator or ';' delimiter",
            ParseErrorKind::SynMissEnd => "Syntax-Error: Missing END or statement separator ';'",
            ParseErrorKind::SynIf => "Syntax-Error: After IF condition THEN statement must follow",
            ParseErrorKind::SynWhile => {
                "Syntax-Error: After WHILE condition DO statement must follow"
            }
            ParseErrorKind::SynStmt => "Syntax-Error: Wrong syntax in statement",
            ParseErrorKind::SynNoComp => "Syntax-Error: No compare operator",
            ParseErrorKind::SynMissCb => "Syntax-Error: Missing ')'",
            ParseErrorKind::SynMissOb => "Syntax-Error: Missing '('",
            ParseErrorKind::TypConstNum => "Type-Error: Can only assign number to constant",
            ParseErrorKind::TypIdNoIn => "Type-Error: Identifier not initialized",
            ParseErrorKind::TypNoId => "Type-Error: No identifier given",
            ParseErrorKind::TypOnlyProc => "Type-Error: Can only call a procedure",
            ParseErrorKind::TypOnlyInt => "Type-Error: Operation only for Integer type",
            ParseErrorKind::TypDoubDec => "Type-Error: Double declaration of identifier",
        }
    }

    /// Short code, e.g. `TYP_ID_NO_IN`.
    pub fn code(&self) -> &'static str {
        match self {
            ParseErrorKind::SynEnd => "SYN_END",
            ParseErrorKind::SynMissAss => "SYN_MISS_ASS",
            ParseErrorKind::SynNoId => "SYN_NO_ID",
            ParseErrorKind::SynMissSep => "SYN_MISS_SEP",
            ParseErrorKind::SynMissCom => "SYN_MISS_COM",
            ParseErrorKind::SynMissEnd => "SYN_MISS_END",
            ParseErrorKind::SynIf => "SYN_IF",
            ParseErrorKind::SynWhile => "SYN_WHILE",
            ParseErrorKind::SynStmt => "SYN_STMT",
            ParseErrorKind::SynNoComp => "SYN_NO_COMP",
            ParseErrorKind::SynMissCb => "SYN_MISS_CB",
            ParseErrorKind::SynMissOb => "SYN_MISS_OB",
            ParseErrorKind::TypConstNum => "TYP_CONST_NUM",
            ParseErrorKind::TypIdNoIn => "TYP_ID_NO_IN",
            ParseErrorKind::TypNoId => "TYP_NO_ID",
            ParseErrorKind::TypOnlyProc => "TYP_ONLY_PROC",
            ParseErrorKind::TypOnlyInt => "TYP_ONLY_INT",
            ParseErrorKind::TypDoubDec => "TYP_DOUB_DEC",
        }
    }

    pub fn is_syntax(&self) -> bool {
        (*self as usize) < (ParseErrorKind::TypConstNum as usize)
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Error)]
pub enum Pl0Error {
    // File and I/O errors
    #[error("File read error: {0}")]
    FileReadError(String),
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    // Lexical analysis errors
    #[error("Invalid number '{number}' in line {line}")]
    InvalidNumber { number: String, line: usize },

    // Parsing errors
    #[error("{kind} in line {line}")]
    Parse {
        kind: ParseErrorKind,
        line: usize,
        identifier: Option<String>,
    },
    #[error("Nesting deeper than {limit} levels in line {line}")]
    NestingTooDeep { limit: usize, line: usize },

    // Internal faults
    #[error("Token stream is empty")]
    EmptyTokenStream,
    #[error("Cannot leave scope - scope underflow")]
    ScopeUnderflow,
}

impl Pl0Error {
    /// Create a parse error without an identifier attached
    pub fn parse(kind: ParseErrorKind, line: usize) -> Self {
        Pl0Error::Parse {
            kind,
            line,
            identifier: None,
        }
    }

    /// Create a parse error naming the offending identifier
    pub fn parse_at(kind: ParseErrorKind, line: usize, identifier: impl Into<String>) -> Self {
        Pl0Error::Parse {
            kind,
            line,
            identifier: Some(identifier.into()),
        }
    }

    pub fn kind(&self) -> Option<ParseErrorKind> {
        match self {
            Pl0Error::Parse { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    pub fn line(&self) -> Option<usize> {
        match self {
            Pl0Error::Parse { line, .. }
            | Pl0Error::InvalidNumber { line, .. }
            | Pl0Error::NestingTooDeep { line, .. } => Some(*line),
            _ => None,
        }
    }

    pub fn identifier(&self) -> Option<&str> {
        match self {
            Pl0Error::Parse { identifier, .. } => identifier.as_deref(),
            _ => None,
        }
    }
}

// Type alias for Result with Pl0Error
pub type Pl0Result<T> = Result<T, Pl0Error>;
