use pl0fe::errors::{Pl0Error, Pl0Result};
use pl0fe::frontend::lexer::scan;
use pl0fe::frontend::{Token, TokenStream};
use pl0fe::LineNumber;

#[test]
fn test_fifo_order() -> Pl0Result<()> {
    let mut state = LineNumber::default();
    let mut stream = TokenStream::new(scan(&mut state, "a\n+ 1")?);
    assert_eq!(stream.len(), 3);
    assert_eq!(stream.current()?, &Token::identifier("a"));
    assert_eq!(stream.line(), 1);
    assert_eq!(stream.advance()?, Token::identifier("a"));
    assert_eq!(stream.current()?, &Token::Symbol('+'));
    assert_eq!(stream.line(), 2);
    stream.advance()?;
    assert_eq!(stream.advance()?, Token::Number(1));
    assert!(stream.is_empty());
    Ok(())
}

#[test]
fn test_empty_stream_errors() {
    let mut stream = TokenStream::default();
    assert!(stream.is_empty());
    assert!(matches!(stream.current(), Err(Pl0Error::EmptyTokenStream)));
    assert!(matches!(stream.advance(), Err(Pl0Error::EmptyTokenStream)));
    assert_eq!(stream.peek(), None);
}

#[test]
fn test_line_after_drain_is_last_consumed() -> Pl0Result<()> {
    let mut stream = TokenStream::new(vec![(Token::Symbol('.'), 7)]);
    stream.advance()?;
    assert_eq!(stream.line(), 7);
    Ok(())
}

#[test]
fn test_push_appends_at_tail() -> Pl0Result<()> {
    let mut stream = TokenStream::default();
    stream.push(Token::Number(1), 1);
    stream.push(Token::Number(2), 1);
    assert_eq!(stream.advance()?, Token::Number(1));
    assert_eq!(stream.advance()?, Token::Number(2));
    Ok(())
}
