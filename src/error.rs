//! Error types for sieve.

use thiserror::Error;

use crate::ast::Operator;

/// The main error type for building and compiling filters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClauseError {
    /// A required argument was absent.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A binary operator was given no right-hand term.
    #[error("Operator {op} requires a right-hand term")]
    MissingRight { op: Operator },

    /// The left term is neither a column nor a nested expression.
    #[error("Left term must be a column or nested expression, found {found}")]
    InvalidLeft { op: Operator, found: &'static str },

    /// The right term has a kind the operator cannot render.
    #[error("Operator {op} cannot take {found} as its right-hand term")]
    UnexpectedRight { op: Operator, found: &'static str },

    /// IN / NOT IN without a value list.
    #[error("Operator {op} requires a value list, found {found}")]
    ExpectedList { op: Operator, found: &'static str },

    /// CONTAINS / CONTAINS NOT without a text value.
    #[error("Operator {op} requires a text value, found {found}")]
    ExpectedText { op: Operator, found: &'static str },

    /// The tree is nested deeper than the compiler allows.
    #[error("Expression nesting exceeds maximum depth of {0}")]
    DepthExceeded(usize),

    /// A filter document could not be decoded.
    #[error("Document error: {0}")]
    Document(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClauseError {
    /// Create an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

impl From<serde_json::Error> for ClauseError {
    fn from(e: serde_json::Error) -> Self {
        Self::Document(e.to_string())
    }
}

/// Result type alias for sieve operations.
pub type ClauseResult<T> = Result<T, ClauseError>;
