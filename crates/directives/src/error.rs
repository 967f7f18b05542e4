//! Directive and input errors

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Directive result type
pub type Result<T> = std::result::Result<T, DirectiveError>;

/// A directive instance that failed validation.
///
/// Carries the directive name and its raw tokens so the message can quote
/// the offending line back to the user exactly as it was written.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("'#{directive}: {}' {kind}", .tokens.join(" "))]
pub struct DirectiveError {
    pub directive: String,
    pub tokens: Vec<String>,
    pub kind: DirectiveErrorKind,
}

impl DirectiveError {
    pub fn new(directive: &str, tokens: &[&str], kind: DirectiveErrorKind) -> Self {
        Self {
            directive: directive.to_string(),
            tokens: tokens.iter().map(|t| t.to_string()).collect(),
            kind,
        }
    }
}

/// Why a directive instance was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DirectiveErrorKind {
    #[error("{expected}")]
    Arity { expected: Expected, found: usize },

    #[error("has an invalid value '{token}' for {field}: expected a number")]
    InvalidFloat { field: &'static str, token: String },

    #[error("has an invalid value '{token}' for {field}: expected an integer")]
    InvalidInteger { field: &'static str, token: String },

    #[error("has an invalid pole count of {poles}")]
    InvalidPoleCount { poles: usize },

    #[error("is missing a value for {field}")]
    MissingValue { field: &'static str },

    #[error("can only be used up to {max} times, found {found}")]
    TooManyInstances { max: usize, found: usize },
}

/// The token count a directive wanted, phrased for the error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Exactly(usize),
    AtLeast(usize),
    EitherOf(usize, usize),
    AtMost(usize),
    /// Several disjoint shapes are valid; none matched.
    Irregular,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Exactly(n) => write!(f, "requires exactly {} parameters", count_word(*n)),
            Expected::AtLeast(n) => write!(f, "requires at least {} parameters", count_word(*n)),
            Expected::EitherOf(a, b) => write!(
                f,
                "requires either {} or {} parameters",
                count_word(*a),
                count_word(*b)
            ),
            Expected::AtMost(_) => write!(f, "has too many parameters"),
            Expected::Irregular => write!(f, "has an incorrect number of parameters"),
        }
    }
}

/// Spell small counts the way error messages read best.
pub(crate) fn count_word(n: usize) -> String {
    const WORDS: [&str; 13] = [
        "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
        "eleven", "twelve",
    ];
    WORDS
        .get(n)
        .map(|w| w.to_string())
        .unwrap_or_else(|| n.to_string())
}

/// Errors raised while reading directive text into a table.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line_number}: command '{line}' does not have a colon after its name")]
    MissingColon { line_number: usize, line: String },
}
