use crate::{
    ast::{BinOp, Expr, File, Primary, UnaryExpr, UnaryOp},
    lexer::Position,
    parser::DEFAULT_MAX_DEPTH,
};

/// Reduces parsed trees to truth values.
///
/// Evaluation is a pure bottom-up walk: no state survives between calls, so
/// one evaluator can be shared freely.
#[derive(Debug, Clone)]
pub struct Evaluator {
    /// Deepest `Expr` nesting walked before giving up
    max_depth: usize,
}

/// Errors that can occur during evaluation.
///
/// A tree produced by the parser never fails to evaluate; these errors only
/// come from trees assembled by hand outside the parser's limits.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// A node that cannot be evaluated, with the value that made it invalid
    #[error("{position}: invalid {thing} '{value}'")]
    Invalid {
        position: Position,
        thing: &'static str,
        value: String,
    },
}

impl EvalError {
    pub fn position(&self) -> &Position {
        match self {
            EvalError::Invalid { position, .. } => position,
        }
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Evaluator {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Evaluates every statement of a file, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use lx_lang::{Evaluator, Lexer, Parser};
    ///
    /// let lexer = Lexer::new("false;;true");
    /// let mut parser = Parser::new(lexer).unwrap();
    /// let file = parser.parse_file().unwrap();
    ///
    /// let results = Evaluator::new().eval_file(&file).unwrap();
    /// assert_eq!(results, vec![false, true]);
    /// ```
    pub fn eval_file(&self, file: &File) -> Result<Vec<bool>, EvalError> {
        let results = file
            .statements
            .iter()
            .map(|statement| self.eval_expr(&statement.expr))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(statements = results.len(), "evaluated file");
        Ok(results)
    }

    /// Evaluates a single expression.
    ///
    /// # Examples
    ///
    /// ```
    /// use lx_lang::{Evaluator, Lexer, Parser};
    ///
    /// let lexer = Lexer::new("not nullify true");
    /// let expr = Parser::new(lexer).unwrap().parse().unwrap();
    ///
    /// assert_eq!(Evaluator::new().eval_expr(&expr), Ok(true));
    /// ```
    pub fn eval_expr(&self, expr: &Expr) -> Result<bool, EvalError> {
        self.eval_chain(expr, 1)
    }

    /// Walks the links of a chain in a loop, then folds them from the right.
    /// An error from the right-hand side wins over one from the left.
    fn eval_chain(&self, expr: &Expr, mut depth: usize) -> Result<bool, EvalError> {
        let mut links = Vec::new();
        let mut current = expr;

        let last = loop {
            if depth > self.max_depth {
                return Err(EvalError::Invalid {
                    position: current.position.clone(),
                    thing: "nesting depth",
                    value: depth.to_string(),
                });
            }

            let value = self.eval_unary(&current.unary, depth);
            let Some(rest) = &current.rest else {
                break value;
            };
            links.push((value, rest.op.op));
            current = &rest.expr;
            depth += 1;
        };

        let mut right = last?;
        for (left, op) in links.into_iter().rev() {
            right = apply_binop(op, left?, right);
        }
        Ok(right)
    }

    fn eval_unary(&self, unary: &UnaryExpr, depth: usize) -> Result<bool, EvalError> {
        let operand = match &unary.primary {
            Primary::Literal(lit) => lit.value,
            Primary::Grouped(paren) => self.eval_chain(&paren.expr, depth + 1)?,
        };

        // The operator closest to the operand applies first.
        Ok(unary
            .ops
            .iter()
            .rev()
            .fold(operand, |acc, op| apply_unary(op.op, acc)))
    }
}

fn apply_unary(op: UnaryOp, value: bool) -> bool {
    match op {
        UnaryOp::Not => !value,
        UnaryOp::Nullify => false,
        UnaryOp::Truify => true,
        UnaryOp::Id => value,
    }
}

/// Truth table of every connective.
pub fn apply_binop(op: BinOp, left: bool, right: bool) -> bool {
    match op {
        BinOp::And => left && right,
        BinOp::Nand => !(left && right),
        BinOp::Or => left || right,
        BinOp::Nor => !(left || right),
        BinOp::Implies => !left || right,
        BinOp::ImpliedBy => left || !right,
        BinOp::Inhibits => !left || !right,
        BinOp::InhibitedBy => !left || !right,
        BinOp::Left => left,
        BinOp::Right => right,
        BinOp::NotLeft => !left,
        BinOp::NotRight => !right,
        BinOp::Xnor => left == right,
        BinOp::Xor => left != right,
    }
}
