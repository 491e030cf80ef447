//! Error types for sqltpl

use thiserror::Error;

/// Result type alias for template operations
pub type TplResult<T> = Result<T, TplError>;

/// Error types for template processing.
///
/// Every variant signals a mismatch between a template and its arguments.
/// These are programming errors on the caller's side: the engine never
/// retries, never falls back to a different formatting rule, and never
/// returns partially substituted SQL.
#[derive(Debug, Error)]
pub enum TplError {
    /// More arguments were supplied than `?` markers remain in the template.
    #[error("too many arguments: {supplied} supplied for {markers} placeholder(s)")]
    TooManyArguments { supplied: usize, markers: usize },

    /// `?` markers remain after every argument has been consumed.
    #[error("not enough arguments: {supplied} supplied for {markers} placeholder(s)")]
    NotEnoughArguments { supplied: usize, markers: usize },

    /// An `?a` placeholder received a value that is neither a sequence nor a mapping.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A value's type has no textual formatting under the placeholder it was matched to.
    #[error("unsupported type: {0}")]
    UnsupportedType(String),
}

impl TplError {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create an unsupported type error
    pub fn unsupported_type(message: impl Into<String>) -> Self {
        Self::UnsupportedType(message.into())
    }

    /// Check if this is a too many arguments error
    pub fn is_too_many_arguments(&self) -> bool {
        matches!(self, Self::TooManyArguments { .. })
    }

    /// Check if this is a not enough arguments error
    pub fn is_not_enough_arguments(&self) -> bool {
        matches!(self, Self::NotEnoughArguments { .. })
    }

    /// Check if this is an invalid argument error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Check if this is an unsupported type error
    pub fn is_unsupported_type(&self) -> bool {
        matches!(self, Self::UnsupportedType(_))
    }
}
