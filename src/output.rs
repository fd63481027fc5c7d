//! JSON output for evaluation results and syntax trees.
//!
//! Output is deterministic: the same input always renders to the same bytes.
//!
//! # Examples
//!
//! ```
//! use lx_lang::output::{results_to_json, to_json};
//!
//! let value = results_to_json(&[true, false]);
//! assert_eq!(to_json(&value), "[true,false]");
//! ```

use crate::ast::File;

/// One JSON boolean per statement, in statement order.
pub fn results_to_json(results: &[bool]) -> serde_json::Value {
    serde_json::Value::Array(results.iter().copied().map(serde_json::Value::Bool).collect())
}

/// Full syntax tree, positions included.
pub fn ast_to_json(file: &File) -> Result<serde_json::Value, serde_json::Error> {
    serde_json::to_value(file)
}

/// Compact rendering.
pub fn to_json(value: &serde_json::Value) -> String {
    value.to_string()
}

/// Human-readable rendering with 2-space indentation.
pub fn to_json_pretty(value: &serde_json::Value) -> String {
    // Serializing an in-memory `Value` cannot fail
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
