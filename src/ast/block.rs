use crate::ast::{ASTVisitor, Statement};
use crate::utils::errors::Pl0Result;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A procedure declaration; `continuation` is the rest of the enclosing block.
    Procedure {
        name: String,
        body: Box<Block>,
        continuation: Box<Block>,
    },
    Statement(Statement),
}

impl Block {
    pub fn procedure(name: impl Into<String>, body: Block, continuation: Block) -> Self {
        Block::Procedure {
            name: name.into(),
            body: Box::new(body),
            continuation: Box::new(continuation),
        }
    }

    /// Chains procedures declared in one block ahead of its statement.
    pub fn with_procedures(procedures: Vec<(String, Block)>, statement: Statement) -> Self {
        procedures
            .into_iter()
            .rev()
            .fold(Block::Statement(statement), |continuation, (name, body)| {
                Block::procedure(name, body, continuation)
            })
    }

    /// The statement this block finally executes, after skipping its procedures.
    pub fn statement(&self) -> &Statement {
        match self {
            Block::Procedure { continuation, .. } => continuation.statement(),
            Block::Statement(stmt) => stmt,
        }
    }

    /// Names and bodies of procedures declared directly in this block.
    pub fn procedures(&self) -> Vec<(&str, &Block)> {
        let mut procedures = Vec::new();
        let mut current = self;
        while let Block::Procedure {
            name,
            body,
            continuation,
        } = current
        {
            procedures.push((name.as_str(), body.as_ref()));
            current = continuation.as_ref();
        }
        procedures
    }

    pub fn accept(&self, visitor: &mut dyn ASTVisitor) -> Pl0Result<()> {
        visitor.visit_block(self)
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        match self {
            Block::Procedure {
                name,
                body,
                continuation,
            } => {
                writeln!(f, "{}PROCEDURE {};", "    ".repeat(depth), name)?;
                body.write_indented(f, depth + 1)?;
                continuation.write_indented(f, depth)
            }
            Block::Statement(stmt) => stmt.write_indented(f, depth),
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}
