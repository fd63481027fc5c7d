//! # lx - Abstract Syntax Tree
//!
//! This module defines the Abstract Syntax Tree (AST) for lx, a small
//! language of boolean literals, prefix operators and binary connectives.
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[operators]** - Unary and binary operators with all their spellings
//! - **[expressions]** - Expression nodes (chains, unary prefixes, operands)
//! - **[statements]** - Files, statements and terminators
//!
//! ## Quick Start
//!
//! ```text
//! not nullify true;;
//! true => false => false
//! (true /\ false) \/ true
//! ```
//!
//! ## Core Concepts
//!
//! ### Right-Associative Chains
//!
//! Every connective has the same precedence and chains to the right:
//!
//! ```text
//! a OP1 b OP2 c   ==   a OP1 (b OP2 c)
//! ```
//!
//! Parentheses are the only way to group to the left.
//!
//! ### Two Spellings
//!
//! Each connective has a word form and a symbol form that mean the same
//! thing: `and` / `/\`, `implies` / `=>`, `is implied by` / `<=`, and so on.
//! Word forms need a word boundary on both sides; symbols do not.
//!
//! ### Unary Folding
//!
//! Prefix operators apply from the operand outwards, so in
//! `not nullify true` the `nullify` runs first and `not` second.
//!
//! ### Positions
//!
//! Every node carries the [`Position`](crate::lexer::Position) of the first
//! token it consumed.
pub mod tokens;
pub mod expressions;
pub mod operators;
pub mod statements;

pub use tokens::{Token, TokenCategory};
pub use expressions::{BinaryOperator, Expr, Literal, Paren, Primary, Rest, UnaryExpr, UnaryOperator};
pub use operators::{BinOp, Spelling, UnaryOp, UnknownOperator};
pub use statements::{File, Separator, Statement, Terminator};
