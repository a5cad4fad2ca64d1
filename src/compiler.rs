//! The requirement compiler.
//!
//! A requirement string is compiled in a fixed sequence of stages, each
//! consuming the previous stage's output:
//!
//! 1. [`normalize`]: punctuation spacing and whitespace collapse, then
//!    a single split into tokens
//! 2. [`lexicon`]: operator phrases ("units of credit in", "AND") become
//!    grammar tokens
//! 3. [`groups`]: "level L DEPT courses" expands to a sum of completed
//!    courses
//! 4. [`resolve`]: course codes become truth values
//! 5. [`sanitize`]: leftover prose is removed
//! 6. [`eval`]: the remaining tokens are parsed and evaluated
//!
//! An empty requirement string means "no prerequisite" and is always
//! satisfied.

pub mod eval;
pub mod groups;
pub mod lexicon;
pub mod normalize;
pub mod resolve;
pub mod sanitize;
mod token;

pub use eval::{Expr, ParseError, Value};
pub use token::{Token, Tokens};

use crate::domain::{CompletedCourses, Config};

/// Errors that can occur while compiling a requirement.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// The sanitized requirement is not a well-formed expression.
    #[error("malformed requirement: {0}")]
    Malformed(#[from] ParseError),

    /// The requirement contains a word outside the known vocabulary.
    #[error("unrecognised word in requirement: '{word}'")]
    UnknownVocabulary {
        /// The first unrecognised word.
        word: String,
    },
}

/// Compiles a requirement string into an expression for one student.
///
/// The expression is specific to `completed`: course codes and credit totals
/// have already been resolved against it.
///
/// # Errors
///
/// Returns an error if the requirement does not compile to a well-formed
/// expression, or contains an unknown word under a rejecting policy.
pub fn compile(
    requirement: &str,
    completed: &CompletedCourses,
    config: &Config,
) -> Result<Expr, Error> {
    if requirement.trim().is_empty() {
        return Ok(Expr::Bool(true));
    }

    let stages = Stages::run(requirement, completed, config)?;
    tracing::debug!("compiled '{requirement}' to '{}'", Tokens(&stages.sanitized));

    Expr::parse(&stages.sanitized).map_err(Error::Malformed)
}

/// The intermediate output of each stage before parsing.
struct Stages {
    normalized: String,
    substituted: Vec<Token>,
    expanded: Vec<Token>,
    resolved: Vec<Token>,
    sanitized: Vec<Token>,
}

impl Stages {
    fn run(
        requirement: &str,
        completed: &CompletedCourses,
        config: &Config,
    ) -> Result<Self, Error> {
        let normalized = normalize::normalize(requirement);
        let substituted = lexicon::substitute(
            normalize::lex(&normalized),
            config.units_per_course(),
            completed.total_uoc(config.units_per_course()),
        );
        let expanded = groups::expand(substituted.clone(), completed);
        let resolved = resolve::resolve(expanded.clone(), completed, config.default_department());
        let sanitized = sanitize::sanitize(resolved.clone(), config.unknown_words)?;

        Ok(Self {
            normalized,
            substituted,
            expanded,
            resolved,
            sanitized,
        })
    }
}

/// The output of every compiler stage for one requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    /// The raw requirement string.
    pub requirement: String,
    /// After whitespace and punctuation normalization.
    pub normalized: String,
    /// After operator phrase substitution.
    pub substituted: Vec<Token>,
    /// After course-group expansion.
    pub expanded: Vec<Token>,
    /// After course-code resolution.
    pub resolved: Vec<Token>,
    /// After removing non-grammar words.
    pub sanitized: Vec<Token>,
    /// The evaluated result.
    pub value: Value,
}

impl Trace {
    /// Runs the compiler, recording each stage.
    ///
    /// # Errors
    ///
    /// Fails in the same cases as [`compile`].
    pub fn record(
        requirement: &str,
        completed: &CompletedCourses,
        config: &Config,
    ) -> Result<Self, Error> {
        if requirement.trim().is_empty() {
            return Ok(Self {
                requirement: requirement.to_string(),
                normalized: String::new(),
                substituted: Vec::new(),
                expanded: Vec::new(),
                resolved: Vec::new(),
                sanitized: Vec::new(),
                value: Value::Bool(true),
            });
        }

        let Stages {
            normalized,
            substituted,
            expanded,
            resolved,
            sanitized,
        } = Stages::run(requirement, completed, config)?;
        let value = Expr::parse(&sanitized)?.evaluate();

        Ok(Self {
            requirement: requirement.to_string(),
            normalized,
            substituted,
            expanded,
            resolved,
            sanitized,
            value,
        })
    }

    /// Whether the requirement is satisfied.
    #[must_use]
    pub const fn is_satisfied(&self) -> bool {
        self.value.is_truthy()
    }
}
