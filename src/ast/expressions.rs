use crate::ast::ASTVisitor;
use crate::frontend::token::{ids, Token};
use crate::utils::errors::Pl0Result;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl ArithOp {
    pub fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(ArithOp::Add),
            '-' => Some(ArithOp::Sub),
            '*' => Some(ArithOp::Mul),
            '/' => Some(ArithOp::Div),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            ArithOp::Add => '+',
            ArithOp::Sub => '-',
            ArithOp::Mul => '*',
            ArithOp::Div => '/',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelOp {
    Lt,
    Gt,
    Eq,
    Ne,
    Le,
    Ge,
}

impl RelOp {
    /// `<` and `>` arrive as symbols, the two character operators as keyword words.
    pub fn from_token(token: &Token) -> Option<Self> {
        match token {
            Token::Symbol('<') => Some(RelOp::Lt),
            Token::Symbol('>') => Some(RelOp::Gt),
            Token::Word(_, ids::EQ) => Some(RelOp::Eq),
            Token::Word(_, ids::NE) => Some(RelOp::Ne),
            Token::Word(_, ids::LE) => Some(RelOp::Le),
            Token::Word(_, ids::GE) => Some(RelOp::Ge),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RelOp::Lt => "<",
            RelOp::Gt => ">",
            RelOp::Eq => "==",
            RelOp::Ne => "!=",
            RelOp::Le => "<=",
            RelOp::Ge => ">=",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Number(i64),
    Identifier(String),
    Arithmetic {
        op: ArithOp,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Relation {
        op: RelOp,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expression>,
    },
    Odd {
        operand: Box<Expression>,
    },
}

impl Expression {
    pub fn number(value: i64) -> Self {
        Expression::Number(value)
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Expression::Identifier(name.into())
    }

    pub fn arithmetic(op: ArithOp, left: Expression, right: Expression) -> Self {
        Expression::Arithmetic {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn relation(op: RelOp, left: Expression, right: Expression) -> Self {
        Expression::Relation {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn negate(operand: Expression) -> Self {
        Expression::Unary {
            op: UnaryOp::Neg,
            operand: Box::new(operand),
        }
    }

    pub fn odd(operand: Expression) -> Self {
        Expression::Odd {
            operand: Box::new(operand),
        }
    }

    /// Direct subexpressions, left to right.
    pub fn children(&self) -> Vec<&Expression> {
        match self {
            Expression::Number(_) | Expression::Identifier(_) => Vec::new(),
            Expression::Arithmetic { left, right, .. } | Expression::Relation { left, right, .. } => {
                vec![left.as_ref(), right.as_ref()]
            }
            Expression::Unary { operand, .. } | Expression::Odd { operand } => vec![operand.as_ref()],
        }
    }

    /// Conditions are the relation and ODD variants.
    pub fn is_condition(&self) -> bool {
        matches!(self, Expression::Relation { .. } | Expression::Odd { .. })
    }

    pub fn accept(&self, visitor: &mut dyn ASTVisitor) -> Pl0Result<()> {
        visitor.visit_expression(self)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Number(value) => write!(f, "{}", value),
            Expression::Identifier(name) => write!(f, "{}", name),
            Expression::Arithmetic { op, left, right } => {
                write!(f, "({} {} {})", left, op.symbol(), right)
            }
            Expression::Relation { op, left, right } => {
                write!(f, "{} {} {}", left, op.as_str(), right)
            }
            Expression::Unary { operand, .. } => write!(f, "-{}", operand),
            Expression::Odd { operand } => write!(f, "ODD {}", operand),
        }
    }
}
