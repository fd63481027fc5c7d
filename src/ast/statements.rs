use std::fmt;

use serde::Serialize;

use crate::{ast::Expr, lexer::Position};

/// A whole source file: statements in source order.
///
/// # Example
/// ```text
/// true and false;;
/// not (true => false)
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct File {
    pub position: Position,
    pub statements: Vec<Statement>,
}

/// One expression and the separator that follows it, if any.
///
/// Only the last statement of a file may lack a terminator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statement {
    pub position: Position,
    pub expr: Expr,
    pub terminator: Option<Terminator>,
}

/// A run of consecutive separators collapsed into one node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Terminator {
    pub position: Position,
    pub separators: Vec<Separator>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Separator {
    /// `;;`
    DoubleSemicolon,
    /// `\n` or `\r\n`
    Newline,
}

impl Separator {
    pub fn from_text(text: &str) -> Self {
        if text == ";;" {
            Separator::DoubleSemicolon
        } else {
            Separator::Newline
        }
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, statement) in self.statements.iter().enumerate() {
            if i > 0 {
                f.write_str(";; ")?;
            }
            write!(f, "{}", statement.expr)?;
        }
        Ok(())
    }
}
