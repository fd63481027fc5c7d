//! Parse and evaluate lx source

use crate::{Evaluator, Lexer, Parser, output};
use super::CliError;

/// Largest `max_depth` a check accepts. Deeper trees risk overflowing the
/// main thread's stack.
pub const MAX_DEPTH_LIMIT: usize = 512;

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Source text: one or more statements
    pub source: Option<String>,
    /// Name shown in error positions (usually the file path)
    pub filename: Option<String>,
    /// Only validate syntax, don't evaluate
    pub syntax_only: bool,
    /// Return the syntax tree instead of evaluating
    pub ast: bool,
    /// Nesting limit for parsing and evaluation (default when `None`), at most
    /// [`MAX_DEPTH_LIMIT`]
    pub max_depth: Option<usize>,
}

/// Result of a check operation
#[derive(Debug, PartialEq)]
pub enum CheckResult {
    /// Syntax validation passed
    SyntaxValid,
    /// Syntax tree as JSON
    Ast(serde_json::Value),
    /// One truth value per statement
    Results(Vec<bool>),
}

/// Execute an lx check operation
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let source = options.source.as_deref().ok_or(CliError::NoInput)?;
    if let Some(requested) = options.max_depth
        && !(1..=MAX_DEPTH_LIMIT).contains(&requested)
    {
        return Err(CliError::DepthOutOfRange {
            requested,
            limit: MAX_DEPTH_LIMIT,
        });
    }

    let lexer = match &options.filename {
        Some(name) => Lexer::with_filename(source, name.as_str()),
        None => Lexer::new(source),
    };
    let mut parser = Parser::new(lexer)?;
    let mut evaluator = Evaluator::new();
    if let Some(max_depth) = options.max_depth {
        parser = parser.with_max_depth(max_depth);
        evaluator = evaluator.with_max_depth(max_depth);
    }

    let file = parser.parse_file().inspect_err(|e| {
        tracing::debug!(error = %e, "parse failed");
    })?;

    if options.syntax_only {
        return Ok(CheckResult::SyntaxValid);
    }
    if options.ast {
        return Ok(CheckResult::Ast(output::ast_to_json(&file)?));
    }

    let results = evaluator.eval_file(&file)?;
    Ok(CheckResult::Results(results))
}
