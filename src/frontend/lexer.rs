use crate::frontend::token::{ids, Token};
use crate::utils::config::lexer::{keyword_id, IDENTIFIER};
use crate::utils::errors::{Pl0Error, Pl0Result};
use crate::LineNumber;
use log::{info, trace};
use std::{iter::Peekable, str::Chars};

pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    state: &'a mut LineNumber,
}

impl<'a> Lexer<'a> {
    pub fn new(file_content: &'a str, state: &'a mut LineNumber) -> Self {
        Self {
            chars: file_content.chars().peekable(),
            state,
        }
    }

    pub fn scan(mut self) -> Pl0Result<Vec<(Token, usize)>> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace();
            let Some(&ch) = self.chars.peek() else {
                break;
            };
            let line = self.state.line;
            let token = self.scan_token(ch)?;
            trace!("line {}: {}", line, token);
            tokens.push((token, line));
        }
        info!("lexer produced {} tokens over {} lines", tokens.len(), self.state.line);
        Ok(tokens)
    }

    fn skip_whitespace(&mut self) {
        while let Some(&ch) = self.chars.peek() {
            if !(ch.is_whitespace() || ch.is_control()) {
                break;
            }
            self.chars.next();
            match ch {
                '\n' => self.state.line += 1,
                '\r' => {
                    self.state.line += 1;
                    // "\r\n" ends a single line
                    if self.chars.peek() == Some(&'\n') {
                        self.chars.next();
                    }
                }
                _ => {}
            }
        }
    }

    fn scan_token(&mut self, ch: char) -> Pl0Result<Token> {
        match ch {
            '=' | '>' | '<' | '!' => Ok(self.scan_comparison(ch)),
            ch if ch.is_ascii_alphabetic() => Ok(self.scan_word()),
            ch if ch.is_ascii_digit() => self.scan_number(),
            ch => {
                self.chars.next();
                Ok(Token::Symbol(ch))
            }
        }
    }

    fn scan_comparison(&mut self, first: char) -> Token {
        self.chars.next(); // Consume the operator character
        if self.chars.peek() != Some(&'=') {
            // The lookahead character starts the next lexeme
            return Token::Symbol(first);
        }
        self.chars.next(); // Consume '='
        let id = match first {
            '=' => ids::EQ,
            '>' => ids::GE,
            '<' => ids::LE,
            _ => ids::NE,
        };
        Token::keyword(id).unwrap_or(Token::Symbol(first))
    }

    fn scan_word(&mut self) -> Token {
        let mut word = String::new();
        while let Some(&ch) = self.chars.peek() {
            if !ch.is_ascii_alphanumeric() {
                break;
            }
            word.push(ch);
            self.chars.next();
        }
        let id = keyword_id(&word).unwrap_or(IDENTIFIER);
        Token::Word(word, id)
    }

    fn scan_number(&mut self) -> Pl0Result<Token> {
        let mut number_str = String::new();
        while let Some(&ch) = self.chars.peek() {
            if !ch.is_ascii_digit() {
                break;
            }
            number_str.push(ch);
            self.chars.next();
        }
        number_str
            .parse::<i64>()
            .map(Token::Number)
            .map_err(|_| Pl0Error::InvalidNumber {
                number: number_str,
                line: self.state.line,
            })
    }
}

/// Scans a whole source text, advancing `state.line` as lines end.
pub fn scan(state: &mut LineNumber, file_content: &str) -> Pl0Result<Vec<(Token, usize)>> {
    let lexer = Lexer::new(file_content, state);
    lexer.scan()
}
