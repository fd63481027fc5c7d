use crate::ast::{BinOp, UnaryOp};

/// Lexical tokens produced by the lexer.
///
/// Whitespace is recognized by the lexer but never handed out as a token.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Boolean literal
    ///
    /// # Examples
    /// ```text
    /// true
    /// false
    /// ```
    Boolean(bool),

    /// Any other word
    ///
    /// Identifiers have no meaning in the language; the lexer keeps them as
    /// tokens so the parser can report them by name.
    ///
    /// # Examples
    /// ```text
    /// ture
    /// nullifyx
    /// True
    /// ```
    Identifier(String),

    /// Prefix operator in either spelling
    ///
    /// # Examples
    /// ```text
    /// not
    /// ~
    /// nullify
    /// ```
    Unary(UnaryOp),

    /// Binary connective in any spelling
    ///
    /// # Examples
    /// ```text
    /// and
    /// /\
    /// is implied by
    /// <=>
    /// ```
    Binary(BinOp),

    /// Left parenthesis
    LParen,

    /// Right parenthesis
    RParen,

    /// Statement separator: `;;` or a newline (optionally after `\r`)
    Terminator,

    /// End of file
    Eof,
}

/// The classifier category a token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    /// Single-word operator (`and`, `not`, `nullify`)
    Keyword,
    /// Textual operator spanning several words (`is implied by`)
    MultiWordOperator,
    /// Symbolic operator (`/\`, `~`, `<=>`)
    Operator,
    Paren,
    Literal,
    Identifier,
    Terminator,
    Eof,
}
