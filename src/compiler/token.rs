use std::fmt;

use crate::domain::CourseCode;

/// A single element of a requirement as it moves through the compiler.
///
/// Lexing produces only [`Token::Word`] and punctuation; each later stage
/// rewrites words into grammar tokens until only grammar tokens remain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A word not yet classified by any stage.
    Word(String),
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `+`, from a comma or a course-group expansion.
    Plus,
    /// Logical conjunction.
    And,
    /// Logical disjunction.
    Or,
    /// Credit comparison: the left operand is at most the right.
    AtMost,
    /// Credit multiplier applied to the following operand.
    Scale(u32),
    /// An integer literal.
    Int(u32),
    /// A course code, not yet resolved against completed courses.
    Course(CourseCode),
    /// A resolved truth value.
    Bool(bool),
}

impl Token {
    /// Whether this token belongs to the expression grammar.
    #[must_use]
    pub const fn is_grammar(&self) -> bool {
        matches!(
            self,
            Self::LParen
                | Self::RParen
                | Self::Plus
                | Self::And
                | Self::Or
                | Self::AtMost
                | Self::Scale(_)
                | Self::Int(_)
                | Self::Bool(_)
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Word(word) => f.write_str(word),
            Self::LParen => f.write_str("("),
            Self::RParen => f.write_str(")"),
            Self::Plus => f.write_str("+"),
            Self::And => f.write_str("and"),
            Self::Or => f.write_str("or"),
            Self::AtMost => f.write_str("<="),
            Self::Scale(factor) => write!(f, "{factor}*"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Course(code) => write!(f, "{code}"),
            Self::Bool(true) => f.write_str("True"),
            Self::Bool(false) => f.write_str("False"),
        }
    }
}

/// Displays a token stream as space-separated text.
#[derive(Debug, Clone, Copy)]
pub struct Tokens<'a>(pub &'a [Token]);

impl fmt::Display for Tokens<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut tokens = self.0.iter();
        if let Some(first) = tokens.next() {
            write!(f, "{first}")?;
            for token in tokens {
                write!(f, " {token}")?;
            }
        }
        Ok(())
    }
}
