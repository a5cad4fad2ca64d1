//! Parsing and evaluation of sanitized requirement expressions.
//!
//! The grammar, from loosest to tightest binding:
//!
//! ```text
//! or         := and ("or" and)*
//! and        := comparison ("and" comparison)*
//! comparison := sum ("<=" sum)*
//! sum        := scaled ("+" scaled)*
//! scaled     := "N*" scaled | atom
//! atom       := "True" | "False" | integer | "(" or ")"
//! ```
//!
//! Booleans count as 1 or 0 wherever a number is needed, and numbers are
//! true when non-zero wherever a truth value is needed.

use std::fmt;

use nonempty::NonEmpty;

use super::token::Token;

/// How deeply parentheses and scale prefixes may nest.
pub const MAX_DEPTH: usize = 128;

/// A parsed requirement expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A resolved course, or any other truth value.
    Bool(bool),
    /// An integer literal, usually a credit figure.
    Int(u32),
    /// True if any operand is true.
    Or(NonEmpty<Box<Expr>>),
    /// True if every operand is true.
    And(NonEmpty<Box<Expr>>),
    /// A chain of `<=` comparisons; true if every adjacent pair holds.
    AtMost(NonEmpty<Box<Expr>>),
    /// The sum of the operands as numbers.
    Sum(NonEmpty<Box<Expr>>),
    /// The operand as a number, multiplied by a constant.
    Scale(u32, Box<Expr>),
}

/// The result of evaluating an [`Expr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    /// A truth value.
    Bool(bool),
    /// A non-negative integer.
    Int(u32),
}

impl Value {
    /// The value as a number: `true` is 1 and `false` is 0.
    #[must_use]
    pub fn as_int(self) -> u32 {
        match self {
            Self::Bool(value) => u32::from(value),
            Self::Int(value) => value,
        }
    }

    /// The value as a truth value: non-zero numbers are true.
    #[must_use]
    pub const fn is_truthy(self) -> bool {
        match self {
            Self::Bool(value) => value,
            Self::Int(value) => value != 0,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
        }
    }
}

impl Expr {
    /// Parses a sanitized token stream.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the tokens are empty, end early, or do not
    /// form a single closed expression.
    pub fn parse(tokens: &[Token]) -> Result<Self, ParseError> {
        if tokens.is_empty() {
            return Err(ParseError::EmptyExpression);
        }

        let mut parser = Parser {
            tokens,
            position: 0,
            depth: 0,
        };
        let expr = parser.or()?;
        match parser.peek() {
            None => Ok(expr),
            Some(token) => Err(ParseError::TrailingTokens {
                position: parser.position,
                token: token.clone(),
            }),
        }
    }

    /// Evaluates the expression.
    #[must_use]
    pub fn evaluate(&self) -> Value {
        match self {
            Self::Bool(value) => Value::Bool(*value),
            Self::Int(value) => Value::Int(*value),
            Self::Or(operands) => Value::Bool(operands.iter().any(|e| e.evaluate().is_truthy())),
            Self::And(operands) => Value::Bool(operands.iter().all(|e| e.evaluate().is_truthy())),
            Self::AtMost(operands) => {
                let values: Vec<u32> = operands.iter().map(|e| e.evaluate().as_int()).collect();
                Value::Bool(values.windows(2).all(|pair| pair[0] <= pair[1]))
            }
            Self::Sum(operands) => Value::Int(
                operands
                    .iter()
                    .fold(0u32, |total, e| total.saturating_add(e.evaluate().as_int())),
            ),
            Self::Scale(factor, operand) => {
                Value::Int(factor.saturating_mul(operand.evaluate().as_int()))
            }
        }
    }
}

/// Errors produced when a token stream is not a well-formed expression.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing was left to evaluate.
    #[error("empty expression")]
    EmptyExpression,

    /// The expression ended while an operand or `)` was still expected.
    #[error("unexpected end of expression: expected {expected}")]
    UnexpectedEnd {
        /// What the parser was looking for.
        expected: &'static str,
    },

    /// A token appeared where it cannot be used.
    #[error("unexpected '{token}' at position {position}: expected {expected}")]
    UnexpectedToken {
        /// Index of the token in the sanitized stream.
        position: usize,
        /// The offending token.
        token: Token,
        /// What the parser was looking for.
        expected: &'static str,
    },

    /// Parentheses or scale prefixes nest deeper than [`MAX_DEPTH`].
    #[error("expression nests deeper than {MAX_DEPTH} levels at position {position}")]
    TooDeep {
        /// Index of the token that exceeded the limit.
        position: usize,
    },

    /// A complete expression was followed by more tokens.
    #[error("unexpected '{token}' at position {position} after a complete expression")]
    TrailingTokens {
        /// Index of the first extra token.
        position: usize,
        /// The first extra token.
        token: Token,
    },
}

struct Parser<'a> {
    tokens: &'a [Token],
    position: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.position)
    }

    fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.position);
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    fn eat(&mut self, expected: &Token) -> bool {
        if self.peek() == Some(expected) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// Parses `next (separator next)*`, wrapping two or more operands with
    /// `combine`.
    fn chain(
        &mut self,
        separator: &Token,
        next: fn(&mut Self) -> Result<Expr, ParseError>,
        combine: fn(NonEmpty<Box<Expr>>) -> Expr,
    ) -> Result<Expr, ParseError> {
        let mut operands = NonEmpty::new(Box::new(next(self)?));
        while self.eat(separator) {
            operands.push(Box::new(next(self)?));
        }
        Ok(if operands.len() == 1 {
            *operands.head
        } else {
            combine(operands)
        })
    }

    /// Runs `parse` one nesting level deeper.
    fn nested(
        &mut self,
        parse: fn(&mut Self) -> Result<Expr, ParseError>,
    ) -> Result<Expr, ParseError> {
        if self.depth == MAX_DEPTH {
            return Err(ParseError::TooDeep {
                position: self.position,
            });
        }
        self.depth += 1;
        let expr = parse(self);
        self.depth -= 1;
        expr
    }

    fn or(&mut self) -> Result<Expr, ParseError> {
        self.chain(&Token::Or, Self::and, Expr::Or)
    }

    fn and(&mut self) -> Result<Expr, ParseError> {
        self.chain(&Token::And, Self::comparison, Expr::And)
    }

    fn comparison(&mut self) -> Result<Expr, ParseError> {
        self.chain(&Token::AtMost, Self::sum, Expr::AtMost)
    }

    fn sum(&mut self) -> Result<Expr, ParseError> {
        self.chain(&Token::Plus, Self::scaled, Expr::Sum)
    }

    fn scaled(&mut self) -> Result<Expr, ParseError> {
        if let Some(Token::Scale(factor)) = self.peek() {
            let factor = *factor;
            self.position += 1;
            return Ok(Expr::Scale(factor, Box::new(self.nested(Self::scaled)?)));
        }
        self.atom()
    }

    fn atom(&mut self) -> Result<Expr, ParseError> {
        const EXPECTED: &str = "a course, number or '('";

        let position = self.position;
        match self.advance() {
            Some(Token::Bool(value)) => Ok(Expr::Bool(*value)),
            Some(Token::Int(value)) => Ok(Expr::Int(*value)),
            Some(Token::LParen) => {
                let inner = self.nested(Self::or)?;
                let position = self.position;
                match self.advance() {
                    Some(Token::RParen) => Ok(inner),
                    Some(token) => Err(ParseError::UnexpectedToken {
                        position,
                        token: token.clone(),
                        expected: "')'",
                    }),
                    None => Err(ParseError::UnexpectedEnd { expected: "')'" }),
                }
            }
            Some(token) => Err(ParseError::UnexpectedToken {
                position,
                token: token.clone(),
                expected: EXPECTED,
            }),
            None => Err(ParseError::UnexpectedEnd { expected: EXPECTED }),
        }
    }
}
