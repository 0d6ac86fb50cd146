use crate::ast::{ASTVisitor, Expression};
use crate::utils::errors::Pl0Result;
use std::fmt;

const INDENT: &str = "    ";

/// CALL and READ share one node shape, told apart by this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallOrReadKind {
    Call,
    Read,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    If {
        condition: Expression,
        body: Box<Statement>,
    },
    While {
        condition: Expression,
        body: Box<Statement>,
    },
    Assign {
        name: String,
        expr: Expression,
    },
    Seq {
        left: Box<Statement>,
        right: Box<Statement>,
    },
    CallOrRead {
        kind: CallOrReadKind,
        name: String,
    },
    Print {
        expr: Expression,
    },
    /// `PASS`, or a statement position left empty.
    Pass,
}

impl Statement {
    pub fn if_then(condition: Expression, body: Statement) -> Self {
        Statement::If {
            condition,
            body: Box::new(body),
        }
    }

    pub fn while_do(condition: Expression, body: Statement) -> Self {
        Statement::While {
            condition,
            body: Box::new(body),
        }
    }

    pub fn assign(name: impl Into<String>, expr: Expression) -> Self {
        Statement::Assign {
            name: name.into(),
            expr,
        }
    }

    pub fn seq(left: Statement, right: Statement) -> Self {
        Statement::Seq {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Folds `BEGIN s1; ...; sn END` into right nested sequences.
    /// A single statement stays as it is; an empty list is `Pass`.
    pub fn sequence(statements: Vec<Statement>) -> Self {
        let mut statements = statements.into_iter().rev();
        let Some(last) = statements.next() else {
            return Statement::Pass;
        };
        statements.fold(last, |right, left| Statement::seq(left, right))
    }

    pub fn call(name: impl Into<String>) -> Self {
        Statement::CallOrRead {
            kind: CallOrReadKind::Call,
            name: name.into(),
        }
    }

    pub fn read(name: impl Into<String>) -> Self {
        Statement::CallOrRead {
            kind: CallOrReadKind::Read,
            name: name.into(),
        }
    }

    pub fn print(expr: Expression) -> Self {
        Statement::Print { expr }
    }

    /// Flattens nested sequences back into source order.
    pub fn flatten(&self) -> Vec<&Statement> {
        match self {
            Statement::Seq { left, right } => {
                let mut flat = left.flatten();
                flat.extend(right.flatten());
                flat
            }
            other => vec![other],
        }
    }

    pub fn accept(&self, visitor: &mut dyn ASTVisitor) -> Pl0Result<()> {
        visitor.visit_statement(self)
    }

    pub(crate) fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let pad = INDENT.repeat(depth);
        match self {
            Statement::If { condition, body } => {
                writeln!(f, "{}IF {} THEN", pad, condition)?;
                body.write_indented(f, depth + 1)
            }
            Statement::While { condition, body } => {
                writeln!(f, "{}WHILE {} DO", pad, condition)?;
                body.write_indented(f, depth + 1)
            }
            Statement::Assign { name, expr } => writeln!(f, "{}{} = {}", pad, name, expr),
            Statement::Seq { left, right } => {
                left.write_indented(f, depth)?;
                right.write_indented(f, depth)
            }
            Statement::CallOrRead { kind, name } => match kind {
                CallOrReadKind::Call => writeln!(f, "{}CALL {}", pad, name),
                CallOrReadKind::Read => writeln!(f, "{}READ {}", pad, name),
            },
            Statement::Print { expr } => writeln!(f, "{}PRINT {}", pad, expr),
            Statement::Pass => writeln!(f, "{}PASS", pad),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}
