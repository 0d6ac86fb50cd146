use crate::frontend::token::Token;
use crate::utils::errors::{Pl0Error, Pl0Result};
use std::collections::VecDeque;

/// FIFO over the lexer output. Tokens leave from the head exactly once.
#[derive(Debug)]
pub struct TokenStream {
    tokens: VecDeque<(Token, usize)>,
    last_line: usize,
}

impl TokenStream {
    pub fn new(tokens: Vec<(Token, usize)>) -> Self {
        let last_line = tokens.first().map(|(_, line)| *line).unwrap_or(1);
        Self {
            tokens: tokens.into(),
            last_line,
        }
    }

    /// Oldest unconsumed token.
    pub fn current(&self) -> Pl0Result<&Token> {
        self.peek().ok_or(Pl0Error::EmptyTokenStream)
    }

    pub fn peek(&self) -> Option<&Token> {
        self.tokens.front().map(|(token, _)| token)
    }

    /// Drops the oldest token.
    pub fn advance(&mut self) -> Pl0Result<Token> {
        let (token, line) = self.tokens.pop_front().ok_or(Pl0Error::EmptyTokenStream)?;
        self.last_line = line;
        Ok(token)
    }

    pub fn push(&mut self, token: Token, line: usize) {
        self.tokens.push_back((token, line));
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Line of the current token, or of the last consumed one once the stream is dry.
    pub fn line(&self) -> usize {
        self.tokens
            .front()
            .map(|(_, line)| *line)
            .unwrap_or(self.last_line)
    }
}

impl Default for TokenStream {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl From<Vec<(Token, usize)>> for TokenStream {
    fn from(tokens: Vec<(Token, usize)>) -> Self {
        Self::new(tokens)
    }
}
