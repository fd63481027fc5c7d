//! CLI support for lx
//!
//! Provides programmatic access to the lx CLI functionality for embedding
//! in other tools.

mod check;
mod docs;
mod onboard;

pub use check::{CheckOptions, CheckResult, MAX_DEPTH_LIMIT, execute_check};
pub use docs::{DocCategory, get_doc_category, get_docs_overview};
pub use onboard::get_onboarding_content;

use std::io;

use crate::{EvalError, ParseError};

/// Errors that can occur during CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Evaluation error: {0}")]
    Eval(#[from] EvalError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("No input provided. Pass an expression, use --file, or pipe source to stdin.")]
    NoInput,

    /// `--max-depth` outside `1..=limit`
    #[error("Invalid --max-depth {requested}: must be between 1 and {limit}")]
    DepthOutOfRange { requested: usize, limit: usize },

    #[error("Unknown category: '{0}'\nRun 'lx docs' to see available categories.")]
    UnknownCategory(String),
}
