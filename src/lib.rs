pub mod ast;
pub mod cli;
pub mod evaluator;
pub mod lexer;
pub mod output;
pub mod parser;

pub use ast::{BinOp, Expr, File, Statement, Token, UnaryOp};
pub use evaluator::{EvalError, Evaluator};
pub use lexer::{LexError, Lexeme, Lexer, Position};
pub use output::{to_json, to_json_pretty};
pub use parser::{ParseError, Parser};

/// Parses a whole file of `;;`- or newline-separated statements.
///
/// ```
/// let file = lx_lang::parse_file("false\ntrue").unwrap();
/// assert_eq!(file.statements.len(), 2);
/// ```
pub fn parse_file(source: &str) -> Result<File, ParseError> {
    Parser::new(Lexer::new(source))?.parse_file()
}

/// Parses exactly one expression; anything after it is an error.
///
/// ```
/// let err = lx_lang::parse_expr("true ture").unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "1:6: unexpected token \"ture\" (expected end of input)"
/// );
/// ```
pub fn parse_expr(source: &str) -> Result<Expr, ParseError> {
    Parser::new(Lexer::new(source))?.parse()
}

/// Reduces an expression to its truth value.
///
/// ```
/// let expr = lx_lang::parse_expr("true => false").unwrap();
/// assert_eq!(lx_lang::evaluate(&expr), Ok(false));
/// ```
pub fn evaluate(expr: &Expr) -> Result<bool, EvalError> {
    Evaluator::new().eval_expr(expr)
}

/// Evaluates every statement of a file, in order.
pub fn evaluate_file(file: &File) -> Result<Vec<bool>, EvalError> {
    Evaluator::new().eval_file(file)
}
