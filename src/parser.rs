use std::mem;

use crate::{
    ast::{
        BinaryOperator, Expr, File, Literal, Paren, Primary, Rest, Separator, Statement,
        Terminator, Token, UnaryExpr, UnaryOperator,
    },
    lexer::{LexError, Lexeme, Lexer, Position},
};

/// Deepest `Expr` nesting accepted by default, counting both chain links and
/// parenthesised groups. A group costs a few native stack frames, and this
/// many fit comfortably in a 2 MiB thread stack in an unoptimised build.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Errors that can occur while parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The lexer hit text it cannot classify
    #[error(transparent)]
    Lex(#[from] LexError),

    /// The current token does not fit the production being parsed
    #[error("{position}: unexpected token \"{}\" (expected {expected})", .found.escape_debug())]
    UnexpectedToken {
        position: Position,
        found: String,
        expected: &'static str,
    },

    /// Nesting exceeded the parser's depth limit
    #[error("{position}: expression nested deeper than {limit} levels")]
    TooDeep { position: Position, limit: usize },
}

impl ParseError {
    pub fn position(&self) -> &Position {
        match self {
            ParseError::Lex(e) => &e.position,
            ParseError::UnexpectedToken { position, .. } | ParseError::TooDeep { position, .. } => {
                position
            }
        }
    }
}

/// Recursive-descent parser with one token of lookahead.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Lexeme,
    depth: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(mut lexer: Lexer<'a>) -> Result<Self, ParseError> {
        let current = lexer.next_token()?;
        Ok(Parser {
            lexer,
            current,
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        })
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Moves to the next token and returns the one just consumed.
    fn advance(&mut self) -> Result<Lexeme, ParseError> {
        let next = self.lexer.next_token()?;
        Ok(mem::replace(&mut self.current, next))
    }

    fn check(&self, token: &Token) -> bool {
        mem::discriminant(&self.current.token) == mem::discriminant(token)
    }

    fn unexpected(&self, expected: &'static str) -> ParseError {
        ParseError::UnexpectedToken {
            position: self.current.position.clone(),
            found: self.current.text.clone(),
            expected,
        }
    }

    fn expect(&mut self, token: Token, expected: &'static str) -> Result<Lexeme, ParseError> {
        if !self.check(&token) {
            return Err(self.unexpected(expected));
        }
        self.advance()
    }

    /// Parse a primary expression: a literal or `( Expr )`
    fn parse_primary(&mut self) -> Result<Primary, ParseError> {
        match self.current.token {
            Token::Boolean(value) => {
                let lexeme = self.advance()?;
                Ok(Primary::Literal(Literal {
                    position: lexeme.position,
                    value,
                }))
            }
            Token::LParen => {
                let open = self.advance()?;
                let expr = self.parse_expression()?;
                self.expect(Token::RParen, "\")\"")?;
                Ok(Primary::Grouped(Box::new(Paren {
                    position: open.position,
                    expr,
                })))
            }
            _ => Err(self.unexpected("primary expression")),
        }
    }

    /// Parse prefix operators followed by a primary expression
    fn parse_unary(&mut self) -> Result<UnaryExpr, ParseError> {
        let position = self.current.position.clone();
        let mut ops = Vec::new();

        while let Token::Unary(op) = self.current.token {
            let lexeme = self.advance()?;
            ops.push(UnaryOperator {
                position: lexeme.position,
                op,
            });
        }

        let primary = self.parse_primary()?;
        Ok(UnaryExpr {
            position,
            ops,
            primary,
        })
    }

    /// Parse `Unary (BinOp Expr)?`.
    ///
    /// Chains nest to the right, which makes every connective
    /// right-associative with equal precedence. The links are read in a loop
    /// and folded from the back, so only parenthesised groups recurse; every
    /// link still counts one level towards the depth limit.
    pub fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        let base = self.depth;
        let mut links = Vec::new();

        let (position, unary) = loop {
            self.enter()?;
            let position = self.current.position.clone();
            let unary = self.parse_unary()?;

            let Token::Binary(op) = self.current.token else {
                break (position, unary);
            };
            let lexeme = self.advance()?;
            links.push((
                position,
                unary,
                BinaryOperator {
                    position: lexeme.position,
                    op,
                },
            ));
        };
        self.depth = base;

        let last = Expr {
            position,
            unary,
            rest: None,
        };
        Ok(links
            .into_iter()
            .rev()
            .fold(last, |expr, (position, unary, op)| Expr {
                position,
                unary,
                rest: Some(Box::new(Rest {
                    position: op.position.clone(),
                    op,
                    expr,
                })),
            }))
    }

    /// Step one `Expr` level deeper, failing past the limit
    fn enter(&mut self) -> Result<(), ParseError> {
        if self.depth >= self.max_depth {
            return Err(ParseError::TooDeep {
                position: self.current.position.clone(),
                limit: self.max_depth,
            });
        }
        self.depth += 1;
        Ok(())
    }

    /// Parse a single expression that must span the whole input.
    pub fn parse(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_expression()?;
        self.expect(Token::Eof, "end of input")?;
        Ok(expr)
    }
}

impl Parser<'_> {
    /// Parse a complete file of terminator-separated statements.
    pub fn parse_file(&mut self) -> Result<File, ParseError> {
        let position = self.current.position.clone();
        let mut statements = vec![];

        loop {
            let statement = self.parse_statement()?;
            let terminated = statement.terminator.is_some();
            statements.push(statement);

            if self.check(&Token::Eof) {
                break;
            }
            if !terminated {
                return Err(self.unexpected("terminator or end of input"));
            }
        }

        tracing::debug!(
            statements = statements.len(),
            end = %self.lexer.position(),
            "parsed file"
        );
        Ok(File {
            position,
            statements,
        })
    }

    fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        let position = self.current.position.clone();
        let expr = self.parse_expression()?;
        let terminator = if self.check(&Token::Terminator) {
            Some(self.parse_terminator()?)
        } else {
            None
        };

        Ok(Statement {
            position,
            expr,
            terminator,
        })
    }

    /// Collapse a run of `;;` / newline tokens into one node
    fn parse_terminator(&mut self) -> Result<Terminator, ParseError> {
        let position = self.current.position.clone();
        let mut separators = vec![];

        while self.check(&Token::Terminator) {
            let lexeme = self.advance()?;
            separators.push(Separator::from_text(&lexeme.text));
        }

        Ok(Terminator {
            position,
            separators,
        })
    }
}
