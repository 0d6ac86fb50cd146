use pl0fe::errors::{ParseErrorKind, Pl0Error};
use std::collections::HashSet;

#[test]
fn test_error_table_order_and_codes() {
    let codes: Vec<&str> = ParseErrorKind::ALL.iter().map(|kind| kind.code()).collect();
    assert_eq!(
        codes,
        vec![
            "SYN_END",
            "SYN_MISS_ASS",
            "SYN_NO_ID",
            "SYN_MISS_SEP",
            "SYN_MISS_COM",
            "SYN_MISS_END",
            "SYN_IF",
            "SYN_WHILE",
            "SYN_STMT",
            "SYN_NO_COMP",
            "SYN_MISS_CB",
            "SYN_MISS_OB",
            "TYP_CONST_NUM",
            "TYP_ID_NO_IN",
            "TYP_NO_ID",
            "TYP_ONLY_PROC",
            "TYP_ONLY_INT",
            "TYP_DOUB_DEC",
        ]
    );
    for (index, kind) in ParseErrorKind::ALL.iter().enumerate() {
        assert_eq!(*kind as usize, index);
    }
}

#[test]
fn test_messages_are_distinct_and_prefixed() {
    let messages: HashSet<&str> = ParseErrorKind::ALL.iter().map(|kind| kind.message()).collect();
    assert_eq!(messages.len(), ParseErrorKind::ALL.len());

    for kind in ParseErrorKind::ALL {
        let prefix = if kind.is_syntax() { "Syntax-Error: " } else { "Type-Error: " };
        assert!(
            kind.message().starts_with(prefix),
            "{} has message {:?}",
            kind.code(),
            kind.message()
        );
        assert_eq!(kind.to_string(), kind.message());
    }
}

#[test]
fn test_syntax_and_type_split() {
    let syntax = ParseErrorKind::ALL.iter().filter(|kind| kind.is_syntax()).count();
    assert_eq!(syntax, 12);
    assert!(ParseErrorKind::SynMissOb.is_syntax());
    assert!(!ParseErrorKind::TypConstNum.is_syntax());
    assert!(!ParseErrorKind::TypDoubDec.is_syntax());
}

#[test]
fn test_parse_error_accessors() {
    let err = Pl0Error::parse_at(ParseErrorKind::TypDoubDec, 7, "x");
    assert_eq!(err.kind(), Some(ParseErrorKind::TypDoubDec));
    assert_eq!(err.line(), Some(7));
    assert_eq!(err.identifier(), Some("x"));
    assert_eq!(err.to_string(), "Type-Error: Double declaration of identifier in line 7");

    let err = Pl0Error::parse(ParseErrorKind::SynEnd, 3);
    assert_eq!(err.identifier(), None);
    assert_eq!(err.to_string(), "Syntax-Error: Program must end with '.' in line 3");

    assert_eq!(Pl0Error::ScopeUnderflow.kind(), None);
    assert_eq!(Pl0Error::EmptyTokenStream.line(), None);
}
