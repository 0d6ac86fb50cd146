use crate::ast::{ArithOp, Block, Expression, RelOp, Statement};
use crate::frontend::token::{ids, Token};
use crate::frontend::token_stream::TokenStream;
use crate::semantic::symboltable::{SymbolKind, SymbolTable};
use crate::utils::config::parser::ParserConfig;
use crate::utils::errors::{ParseErrorKind, Pl0Error, Pl0Result};
use log::{debug, info};

/// Result of a completed descent: the tree, and whether the block was
/// followed by the terminating `.`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutcome {
    pub block: Block,
    pub accepted: bool,
}

pub struct Parser {
    tokens: TokenStream,
    config: ParserConfig,
    depth: usize,
}

impl Parser {
    pub fn new(tokens: impl Into<TokenStream>) -> Self {
        Self::with_config(tokens, ParserConfig::default())
    }

    pub fn with_config(tokens: impl Into<TokenStream>, config: ParserConfig) -> Self {
        Self {
            tokens: tokens.into(),
            config,
            depth: 0,
        }
    }

    /// Tokens not consumed by the parse.
    pub fn remaining(&self) -> &TokenStream {
        &self.tokens
    }

    fn current(&self) -> Option<&Token> {
        self.tokens.peek()
    }

    fn line(&self) -> usize {
        self.tokens.line()
    }

    fn next(&mut self) -> Pl0Result<Token> {
        self.tokens.advance()
    }

    fn at_keyword(&self, id: u32) -> bool {
        self.current().is_some_and(|token| token.is_keyword(id))
    }

    fn at_symbol(&self, ch: char) -> bool {
        self.current().is_some_and(|token| token.is_symbol(ch))
    }

    fn error(&self, kind: ParseErrorKind) -> Pl0Error {
        let line = self.line();
        debug!("{} ({}) in line {}", kind.code(), kind, line);
        match self.current() {
            Some(Token::Word(name, ids::IDENTIFIER)) => {
                Pl0Error::parse_at(kind, line, name.clone())
            }
            _ => Pl0Error::parse(kind, line),
        }
    }

    fn expect_symbol(&mut self, ch: char, kind: ParseErrorKind) -> Pl0Result<()> {
        if !self.at_symbol(ch) {
            return Err(self.error(kind));
        }
        self.next()?;
        Ok(())
    }

    fn expect_keyword(&mut self, id: u32, kind: ParseErrorKind) -> Pl0Result<()> {
        if !self.at_keyword(id) {
            return Err(self.error(kind));
        }
        self.next()?;
        Ok(())
    }

    /// Consumes an identifier, reporting `kind` when something else is there.
    fn expect_ident(&mut self, kind: ParseErrorKind) -> Pl0Result<(String, usize)> {
        let line = self.line();
        match self.current() {
            Some(Token::Word(name, ids::IDENTIFIER)) => {
                let name = name.clone();
                self.next()?;
                Ok((name, line))
            }
            _ => Err(self.error(kind)),
        }
    }

    /// Kind of an identifier already declared somewhere up the scope chain.
    fn resolve(&self, table: &SymbolTable, name: &str) -> Pl0Result<SymbolKind> {
        table.lookup(name).ok_or_else(|| {
            debug!("identifier '{}' not declared", name);
            Pl0Error::parse_at(ParseErrorKind::TypIdNoIn, self.line(), name)
        })
    }

    /// Runs one level of the descent under the nesting limit.
    fn nested<T>(&mut self, production: impl FnOnce(&mut Self) -> Pl0Result<T>) -> Pl0Result<T> {
        if self.depth >= self.config.max_depth {
            return Err(Pl0Error::NestingTooDeep {
                limit: self.config.max_depth,
                line: self.line(),
            });
        }
        self.depth += 1;
        let result = production(self);
        self.depth -= 1;
        result
    }

    /// Parses a block inside its own scope. The scope is left again even
    /// when the body fails, so the table stays in lockstep with the descent.
    fn block(&mut self, table: &mut SymbolTable) -> Pl0Result<Block> {
        self.nested(|parser| {
            table.enter_scope();
            debug!("block entered, {} scopes open", table.depth());
            let result = parser.block_body(table);
            table.leave_scope()?;
            result
        })
    }

    fn block_body(&mut self, table: &mut SymbolTable) -> Pl0Result<Block> {
        if self.at_keyword(ids::VAR) {
            self.var_declarations(table)?;
        }
        if self.at_keyword(ids::CONST) {
            self.const_declarations(table)?;
        }
        let procedures = self.procedure_declarations(table)?;
        let statement = self.statement(table)?;
        Ok(Block::with_procedures(procedures, statement))
    }

    /// After a declaration: `,` continues the list, `;` closes it.
    fn declaration_separator(&mut self) -> Pl0Result<bool> {
        if self.at_symbol(',') {
            self.next()?;
            Ok(true)
        } else if self.at_symbol(';') {
            self.next()?;
            Ok(false)
        } else {
            Err(self.error(ParseErrorKind::SynMissCom))
        }
    }

    fn var_declarations(&mut self, table: &mut SymbolTable) -> Pl0Result<()> {
        self.expect_keyword(ids::VAR, ParseErrorKind::SynStmt)?;
        loop {
            let (name, line) = self.expect_ident(ParseErrorKind::TypNoId)?;
            table.declare(&name, SymbolKind::Var, line)?;
            if !self.declaration_separator()? {
                return Ok(());
            }
        }
    }

    fn const_declarations(&mut self, table: &mut SymbolTable) -> Pl0Result<()> {
        self.expect_keyword(ids::CONST, ParseErrorKind::SynStmt)?;
        loop {
            let (name, line) = self.expect_ident(ParseErrorKind::TypNoId)?;
            table.declare(&name, SymbolKind::Const, line)?;
            self.expect_symbol('=', ParseErrorKind::SynMissAss)?;
            if self.current().and_then(Token::as_number).is_none() {
                return Err(self.error(ParseErrorKind::TypConstNum));
            }
            self.next()?;
            if !self.declaration_separator()? {
                return Ok(());
            }
        }
    }

    /// The procedure name goes into the enclosing scope before its body is
    /// parsed, so the body and every later sibling can call it.
    fn procedure_declarations(&mut self, table: &mut SymbolTable) -> Pl0Result<Vec<(String, Block)>> {
        let mut procedures = Vec::new();
        while self.at_keyword(ids::PROCEDURE) {
            self.next()?;
            let (name, line) = self.expect_ident(ParseErrorKind::TypNoId)?;
            table.declare(&name, SymbolKind::Procedure, line)?;
            self.expect_symbol(';', ParseErrorKind::SynMissCom)?;
            debug!("procedure '{}' declared in line {}", name, line);
            let body = self.block(table)?;
            self.expect_symbol(';', ParseErrorKind::SynMissCom)?;
            procedures.push((name, body));
        }
        Ok(procedures)
    }

    fn statement(&mut self, table: &mut SymbolTable) -> Pl0Result<Statement> {
        self.nested(|parser| parser.statement_body(table))
    }

    fn statement_body(&mut self, table: &mut SymbolTable) -> Pl0Result<Statement> {
        let Some(token) = self.current().cloned() else {
            return Ok(Statement::Pass);
        };
        match token {
            Token::Word(name, ids::IDENTIFIER) => {
                if self.resolve(table, &name)? == SymbolKind::Procedure {
                    return Err(self.error(ParseErrorKind::TypOnlyInt));
                }
                self.next()?;
                self.expect_symbol('=', ParseErrorKind::SynMissAss)?;
                let expr = self.expression(table)?;
                Ok(Statement::assign(name, expr))
            }
            Token::Word(_, ids::CALL) => {
                self.next()?;
                let name = self.checked_target(table, SymbolKind::Procedure)?;
                Ok(Statement::call(name))
            }
            Token::Word(_, ids::READ) => {
                self.next()?;
                let name = self.checked_target(table, SymbolKind::Var)?;
                Ok(Statement::read(name))
            }
            Token::Word(_, ids::PRINT) => {
                self.next()?;
                let expr = self.expression(table)?;
                Ok(Statement::print(expr))
            }
            Token::Word(_, ids::BEGIN) => {
                self.next()?;
                let mut stmts = vec![self.statement(table)?];
                while self.at_symbol(';') {
                    self.next()?;
                    stmts.push(self.statement(table)?);
                }
                self.expect_keyword(ids::END, ParseErrorKind::SynMissEnd)?;
                Ok(Statement::sequence(stmts))
            }
            Token::Word(_, ids::IF) => {
                self.next()?;
                let condition = self.condition(table)?;
                self.expect_keyword(ids::THEN, ParseErrorKind::SynIf)?;
                let body = self.statement(table)?;
                Ok(Statement::if_then(condition, body))
            }
            Token::Word(_, ids::WHILE) => {
                self.next()?;
                let condition = self.condition(table)?;
                self.expect_keyword(ids::DO, ParseErrorKind::SynWhile)?;
                let body = self.statement(table)?;
                Ok(Statement::while_do(condition, body))
            }
            Token::Word(_, ids::PASS) => {
                self.next()?;
                Ok(Statement::Pass)
            }
            // Nothing starts a statement here: the statement is empty.
            _ => Ok(Statement::Pass),
        }
    }

    /// Identifier operand of CALL (`wanted` = procedure) or READ (`wanted` = variable).
    /// Anything but an identifier fails the lookup like an undeclared name.
    fn checked_target(&mut self, table: &SymbolTable, wanted: SymbolKind) -> Pl0Result<String> {
        let name = match self.current() {
            Some(Token::Word(name, ids::IDENTIFIER)) => name.clone(),
            _ => return Err(self.error(ParseErrorKind::TypIdNoIn)),
        };
        let kind = self.resolve(table, &name)?;
        match (wanted, kind) {
            (SymbolKind::Procedure, SymbolKind::Procedure) => {}
            (SymbolKind::Procedure, _) => return Err(self.error(ParseErrorKind::TypOnlyProc)),
            (_, SymbolKind::Procedure) => return Err(self.error(ParseErrorKind::TypOnlyInt)),
            _ => {}
        }
        self.next()?;
        Ok(name)
    }

    fn condition(&mut self, table: &mut SymbolTable) -> Pl0Result<Expression> {
        if self.at_keyword(ids::ODD) {
            self.next()?;
            let operand = self.expression(table)?;
            return Ok(Expression::odd(operand));
        }
        let left = self.expression(table)?;
        // The operator sits between the operands, so it is known only now.
        let Some(op) = self.current().and_then(RelOp::from_token) else {
            return Err(self.error(ParseErrorKind::SynNoComp));
        };
        self.next()?;
        let right = self.expression(table)?;
        Ok(Expression::relation(op, left, right))
    }

    fn arith_op(&self, allowed: [char; 2]) -> Option<ArithOp> {
        match self.current() {
            Some(Token::Symbol(ch)) if allowed.contains(ch) => ArithOp::from_symbol(*ch),
            _ => None,
        }
    }

    /// expression = [ "-" ] term { ( "+" | "-" ) term }
    fn expression(&mut self, table: &mut SymbolTable) -> Pl0Result<Expression> {
        self.nested(|parser| {
            let negate = parser.at_symbol('-');
            if negate {
                parser.next()?;
            }
            let first = parser.term(table)?;
            let mut lhs = if negate { Expression::negate(first) } else { first };
            while let Some(op) = parser.arith_op(['+', '-']) {
                parser.next()?;
                let rhs = parser.term(table)?;
                lhs = Expression::arithmetic(op, lhs, rhs);
            }
            Ok(lhs)
        })
    }

    /// term = factor { ( "*" | "/" ) factor }
    fn term(&mut self, table: &mut SymbolTable) -> Pl0Result<Expression> {
        let mut lhs = self.factor(table)?;
        while let Some(op) = self.arith_op(['*', '/']) {
            self.next()?;
            let rhs = self.factor(table)?;
            lhs = Expression::arithmetic(op, lhs, rhs);
        }
        Ok(lhs)
    }

    /// factor = ident | number | "(" expression ")"
    fn factor(&mut self, table: &mut SymbolTable) -> Pl0Result<Expression> {
        match self.current().cloned() {
            Some(Token::Word(name, ids::IDENTIFIER)) => {
                if self.resolve(table, &name)? == SymbolKind::Procedure {
                    return Err(self.error(ParseErrorKind::TypOnlyInt));
                }
                self.next()?;
                Ok(Expression::identifier(name))
            }
            Some(Token::Number(value)) => {
                self.next()?;
                Ok(Expression::number(value))
            }
            Some(Token::Symbol('(')) => {
                self.next()?;
                let expr = self.expression(table)?;
                self.expect_symbol(')', ParseErrorKind::SynMissCb)?;
                Ok(expr)
            }
            _ => Err(self.error(ParseErrorKind::SynMissOb)),
        }
    }

    /// program = block "."
    ///
    /// A block not followed by `.` still parses; `accepted` reports it.
    pub fn parse(&mut self, table: &mut SymbolTable) -> Pl0Result<ParseOutcome> {
        info!("parsing {} tokens", self.tokens.len());
        let block = self.block(table)?;
        let accepted = self.at_symbol('.');
        if accepted {
            self.next()?;
            if !self.tokens.is_empty() {
                debug!("{} tokens after '.' ignored", self.tokens.len());
            }
        }
        info!("parse finished, accepted: {}", accepted);
        Ok(ParseOutcome { block, accepted })
    }

    /// Like [`Parser::parse`], but a missing `.` is a `SYN_END` error.
    pub fn parse_program(&mut self, table: &mut SymbolTable) -> Pl0Result<Block> {
        let outcome = self.parse(table)?;
        if !outcome.accepted {
            return Err(self.error(ParseErrorKind::SynEnd));
        }
        Ok(outcome.block)
    }
}
