use std::fmt::{Display, Formatter, Result};

use super::statements::{Assignment, Declaration, ForLoop, ReturnStmt};

/// Root of the tree: the top-level statements in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "Program[")?;
        for (i, stmt) in self.statements.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", stmt)?;
        }
        write!(f, "]")
    }
}

/// Statement Types
///
/// One variant per production `statement` can dispatch to.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Declaration(Declaration),
    ForLoop(ForLoop),
    Return(ReturnStmt),
    Assignment(Assignment),
}

impl Display for Stmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Stmt::Declaration(stmt) => write!(f, "{}", stmt),
            Stmt::ForLoop(stmt) => write!(f, "{}", stmt),
            Stmt::Return(stmt) => write!(f, "{}", stmt),
            Stmt::Assignment(stmt) => write!(f, "{}", stmt),
        }
    }
}
