use std::{
    cmp::Reverse,
    fmt,
    sync::{Arc, LazyLock},
};

use regex::Regex;
use serde::Serialize;

use crate::ast::{BinOp, Spelling, Token, TokenCategory, UnaryOp};

/// A location in the source text.
///
/// `offset` counts bytes from the start of the input; `line` and `column` are
/// 1-based, with columns counted in characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<Arc<str>>,
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(offset: usize, line: usize, column: usize) -> Self {
        Position {
            filename: None,
            offset,
            line,
            column,
        }
    }

    /// The first character of an input.
    pub fn start() -> Self {
        Position::new(0, 1, 1)
    }

    fn advance_over(&mut self, text: &str) {
        for ch in text.chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.offset += text.len();
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(filename) = &self.filename {
            write!(f, "{}:", filename)?;
        }
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A run of characters no lexer rule accepts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{position}: invalid input text \"{}\"", .text.escape_debug())]
pub struct LexError {
    pub position: Position,
    pub text: String,
}

/// A token together with the source text it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    pub token: Token,
    pub category: TokenCategory,
    pub text: String,
    pub position: Position,
}

enum RuleKind {
    /// Recognized and dropped (whitespace)
    Skip,
    Emit(Token, TokenCategory),
    Identifier,
}

struct Rule {
    pattern: Regex,
    kind: RuleKind,
}

impl Rule {
    fn new(pattern: &str, kind: RuleKind) -> Self {
        let pattern = Regex::new(&format!("^(?:{pattern})")).expect("lexer rule pattern is valid");
        Rule { pattern, kind }
    }
}

/// Lexer rules in priority order; the first rule matching at the current
/// offset wins.
static RULES: LazyLock<Vec<Rule>> = LazyLock::new(build_rules);

/// Textual spelling to pattern: words separated by blanks, ending on a word
/// boundary.
fn word_pattern(words: &str) -> String {
    let body = words
        .split(' ')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"[ \t]+");
    format!(r"{body}\b")
}

fn build_rules() -> Vec<Rule> {
    let spelled: Vec<(Spelling, Token)> = UnaryOp::ALL
        .into_iter()
        .flat_map(|op| op.spellings().iter().map(move |s| (*s, Token::Unary(op))))
        .chain(
            BinOp::ALL
                .into_iter()
                .flat_map(|op| op.spellings().iter().map(move |s| (*s, Token::Binary(op)))),
        )
        .collect();

    let mut rules = vec![
        Rule::new(
            r";;|\r?\n",
            RuleKind::Emit(Token::Terminator, TokenCategory::Terminator),
        ),
        Rule::new(r"[ \t\r\x0C]+", RuleKind::Skip),
    ];

    // `is implied by` and `not left` before `not` and friends
    for (spelling, token) in spelled.iter().filter(|(s, _)| s.is_multi_word()) {
        rules.push(Rule::new(
            &word_pattern(spelling.as_str()),
            RuleKind::Emit(token.clone(), TokenCategory::MultiWordOperator),
        ));
    }
    for (spelling, token) in &spelled {
        if let Spelling::Text(word) = spelling
            && !spelling.is_multi_word()
        {
            rules.push(Rule::new(
                &word_pattern(word),
                RuleKind::Emit(token.clone(), TokenCategory::Keyword),
            ));
        }
    }

    rules.push(Rule::new(
        r"true\b",
        RuleKind::Emit(Token::Boolean(true), TokenCategory::Literal),
    ));
    rules.push(Rule::new(
        r"false\b",
        RuleKind::Emit(Token::Boolean(false), TokenCategory::Literal),
    ));

    let mut symbols: Vec<(&str, Token, TokenCategory)> = spelled
        .iter()
        .filter_map(|(spelling, token)| match spelling {
            Spelling::Symbol(sym) => Some((*sym, token.clone(), TokenCategory::Operator)),
            Spelling::Text(_) => None,
        })
        .collect();
    symbols.push(("(", Token::LParen, TokenCategory::Paren));
    symbols.push((")", Token::RParen, TokenCategory::Paren));
    // longest first: `~/\` before `~`, `<=>` before `<=`
    symbols.sort_by_key(|(sym, _, _)| Reverse(sym.len()));
    for (sym, token, category) in symbols {
        rules.push(Rule::new(&regex::escape(sym), RuleKind::Emit(token, category)));
    }

    rules.push(Rule::new(r"[\p{Alphabetic}_]\w*", RuleKind::Identifier));
    rules
}

fn match_rule(input: &str) -> Option<(&'static Rule, usize)> {
    RULES
        .iter()
        .find_map(|rule| rule.pattern.find(input).map(|m| (rule, m.end())))
}

pub struct Lexer<'a> {
    input: &'a str,
    position: Position,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            position: Position::start(),
        }
    }

    /// Lexer whose positions all carry `filename`.
    pub fn with_filename(input: &'a str, filename: impl Into<Arc<str>>) -> Self {
        let mut lexer = Lexer::new(input);
        lexer.position.filename = Some(filename.into());
        lexer
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Reads the next token, skipping whitespace. Once the input is exhausted
    /// every call returns `Token::Eof`.
    pub fn next_token(&mut self) -> Result<Lexeme, LexError> {
        let input = self.input;

        loop {
            let rest = &input[self.position.offset..];
            if rest.is_empty() {
                return Ok(Lexeme {
                    token: Token::Eof,
                    category: TokenCategory::Eof,
                    text: "<EOF>".to_string(),
                    position: self.position.clone(),
                });
            }

            let Some((rule, len)) = match_rule(rest) else {
                return Err(self.unrecognized(rest));
            };
            let text = &rest[..len];
            let position = self.position.clone();
            self.position.advance_over(text);

            let (token, category) = match &rule.kind {
                RuleKind::Skip => continue,
                RuleKind::Emit(token, category) => (token.clone(), *category),
                RuleKind::Identifier => (
                    Token::Identifier(text.to_string()),
                    TokenCategory::Identifier,
                ),
            };
            tracing::trace!(%position, ?token, "token");

            return Ok(Lexeme {
                token,
                category,
                text: text.to_string(),
                position,
            });
        }
    }

    /// Drains the lexer. The last lexeme is always `Token::Eof`.
    pub fn tokenize(mut self) -> Result<Vec<Lexeme>, LexError> {
        let mut lexemes = Vec::new();
        loop {
            let lexeme = self.next_token()?;
            let done = lexeme.token == Token::Eof;
            lexemes.push(lexeme);
            if done {
                return Ok(lexemes);
            }
        }
    }

    /// The error span runs up to the next blank or the next place a rule
    /// matches again.
    fn unrecognized(&self, rest: &str) -> LexError {
        let end = rest
            .char_indices()
            .skip(1)
            .map(|(i, _)| i)
            .find(|&i| {
                let tail = &rest[i..];
                tail.starts_with(char::is_whitespace) || match_rule(tail).is_some()
            })
            .unwrap_or(rest.len());

        LexError {
            position: self.position.clone(),
            text: rest[..end].to_string(),
        }
    }
}

#[test]
fn test_keywords() {
    let mut lexer = Lexer::new("and or true false not nullify");
    assert_eq!(lexer.next_token().unwrap().token, Token::Binary(BinOp::And));
    assert_eq!(lexer.next_token().unwrap().token, Token::Binary(BinOp::Or));
    assert_eq!(lexer.next_token().unwrap().token, Token::Boolean(true));
    assert_eq!(lexer.next_token().unwrap().token, Token::Boolean(false));
    assert_eq!(lexer.next_token().unwrap().token, Token::Unary(UnaryOp::Not));
    assert_eq!(lexer.next_token().unwrap().token, Token::Unary(UnaryOp::Nullify));
    assert_eq!(lexer.next_token().unwrap().token, Token::Eof);
    assert_eq!(lexer.next_token().unwrap().token, Token::Eof);
}

#[test]
fn test_symbols() {
    let mut lexer = Lexer::new("~(true/\\false)<=>s>");
    assert_eq!(lexer.next_token().unwrap().token, Token::Unary(UnaryOp::Not));
    assert_eq!(lexer.next_token().unwrap().token, Token::LParen);
    assert_eq!(lexer.next_token().unwrap().token, Token::Boolean(true));
    assert_eq!(lexer.next_token().unwrap().token, Token::Binary(BinOp::And));
    assert_eq!(lexer.next_token().unwrap().token, Token::Boolean(false));
    assert_eq!(lexer.next_token().unwrap().token, Token::RParen);
    assert_eq!(lexer.next_token().unwrap().token, Token::Binary(BinOp::Xnor));
    assert_eq!(lexer.next_token().unwrap().token, Token::Binary(BinOp::Right));
}

#[test]
fn test_positions_count_skipped_whitespace() {
    let mut lexer = Lexer::new("  true\n\tfalse");
    assert_eq!(lexer.next_token().unwrap().position, Position::new(2, 1, 3));
    assert_eq!(lexer.next_token().unwrap().position, Position::new(6, 1, 7));
    assert_eq!(lexer.next_token().unwrap().position, Position::new(8, 2, 2));
    assert_eq!(lexer.next_token().unwrap().position, Position::new(13, 2, 7));
}
