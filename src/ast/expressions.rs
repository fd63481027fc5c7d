use std::fmt;

use serde::Serialize;

use crate::{
    ast::{BinOp, UnaryOp},
    lexer::Position,
};

/// A boolean expression: a unary operand optionally followed by a connective
/// and the rest of the chain.
///
/// Chains nest to the right, so `a and b or c` is
/// `Expr { unary: a, rest: Some(and, Expr { unary: b, rest: Some(or, c) }) }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Expr {
    pub position: Position,
    pub unary: UnaryExpr,
    pub rest: Option<Box<Rest>>,
}

/// The `(connective, expression)` tail of a chain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rest {
    pub position: Position,
    pub op: BinaryOperator,
    pub expr: Expr,
}

/// Zero or more prefix operators applied to a primary expression.
///
/// # Example
/// ```text
/// not nullify true
/// ~~(false)
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnaryExpr {
    pub position: Position,
    pub ops: Vec<UnaryOperator>,
    pub primary: Primary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnaryOperator {
    pub position: Position,
    pub op: UnaryOp,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinaryOperator {
    pub position: Position,
    pub op: BinOp,
}

/// An operand: a literal or a parenthesised expression, never both.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Primary {
    /// Literal `true` or `false`
    Literal(Literal),

    /// Parenthesised group
    ///
    /// # Example
    /// ```text
    /// (true or false)
    /// ```
    Grouped(Box<Paren>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Literal {
    pub position: Position,
    pub value: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paren {
    /// Position of the opening parenthesis
    pub position: Position,
    pub expr: Expr,
}

impl Primary {
    pub fn position(&self) -> &Position {
        match self {
            Primary::Literal(lit) => &lit.position,
            Primary::Grouped(paren) => &paren.position,
        }
    }
}

impl Expr {
    /// Builds a chain-free expression from a bare literal.
    pub fn literal(value: bool, position: Position) -> Self {
        Expr {
            position: position.clone(),
            unary: UnaryExpr {
                position: position.clone(),
                ops: Vec::new(),
                primary: Primary::Literal(Literal { position, value }),
            },
            rest: None,
        }
    }

    /// Number of nested `Expr` levels, counting both chain links and groups.
    pub fn depth(&self) -> usize {
        let unary = match &self.unary.primary {
            Primary::Literal(_) => 0,
            Primary::Grouped(paren) => paren.expr.depth(),
        };
        let rest = self.rest.as_ref().map_or(0, |rest| rest.expr.depth());
        1 + unary.max(rest)
    }
}

// Rendering uses canonical textual spellings and keeps every group, so the
// output re-parses to an equivalent tree.

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.unary)?;
        if let Some(rest) = &self.rest {
            write!(f, " {} {}", rest.op.op, rest.expr)?;
        }
        Ok(())
    }
}

impl fmt::Display for UnaryExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for op in &self.ops {
            write!(f, "{} ", op.op)?;
        }
        write!(f, "{}", self.primary)
    }
}

impl fmt::Display for Primary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primary::Literal(lit) => write!(f, "{}", lit.value),
            Primary::Grouped(paren) => write!(f, "({})", paren.expr),
        }
    }
}
