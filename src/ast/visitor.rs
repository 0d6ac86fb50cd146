use crate::ast::{Block, Expression, Statement};
use crate::utils::errors::Pl0Result;

/// Consumer of a finished tree. Every method defaults to walking the
/// children, so an implementor overrides only the nodes it cares about.
pub trait ASTVisitor {
    fn visit_block(&mut self, block: &Block) -> Pl0Result<()> {
        walk_block(self, block)
    }

    fn visit_statement(&mut self, stmt: &Statement) -> Pl0Result<()> {
        walk_statement(self, stmt)
    }

    fn visit_expression(&mut self, expr: &Expression) -> Pl0Result<()> {
        walk_expression(self, expr)
    }
}

pub fn walk_block<V: ASTVisitor + ?Sized>(visitor: &mut V, block: &Block) -> Pl0Result<()> {
    match block {
        Block::Procedure {
            body, continuation, ..
        } => {
            visitor.visit_block(body)?;
            visitor.visit_block(continuation)
        }
        Block::Statement(stmt) => visitor.visit_statement(stmt),
    }
}

pub fn walk_statement<V: ASTVisitor + ?Sized>(visitor: &mut V, stmt: &Statement) -> Pl0Result<()> {
    match stmt {
        Statement::If { condition, body } | Statement::While { condition, body } => {
            visitor.visit_expression(condition)?;
            visitor.visit_statement(body)
        }
        Statement::Assign { expr, .. } | Statement::Print { expr } => visitor.visit_expression(expr),
        Statement::Seq { left, right } => {
            visitor.visit_statement(left)?;
            visitor.visit_statement(right)
        }
        Statement::CallOrRead { .. } | Statement::Pass => Ok(()),
    }
}

pub fn walk_expression<V: ASTVisitor + ?Sized>(visitor: &mut V, expr: &Expression) -> Pl0Result<()> {
    for child in expr.children() {
        visitor.visit_expression(child)?;
    }
    Ok(())
}

/// Counts nodes of each family.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NodeCounter {
    pub blocks: usize,
    pub statements: usize,
    pub expressions: usize,
}

impl NodeCounter {
    pub fn count(block: &Block) -> Pl0Result<Self> {
        let mut counter = Self::default();
        block.accept(&mut counter)?;
        Ok(counter)
    }

    pub fn total(&self) -> usize {
        self.blocks + self.statements + self.expressions
    }
}

impl ASTVisitor for NodeCounter {
    fn visit_block(&mut self, block: &Block) -> Pl0Result<()> {
        self.blocks += 1;
        walk_block(self, block)
    }

    fn visit_statement(&mut self, stmt: &Statement) -> Pl0Result<()> {
        self.statements += 1;
        walk_statement(self, stmt)
    }

    fn visit_expression(&mut self, expr: &Expression) -> Pl0Result<()> {
        self.expressions += 1;
        walk_expression(self, expr)
    }
}
