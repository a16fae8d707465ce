use thiserror::Error;

/// Errors that can occur when processing processor index lists.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The caller provided a list without a single processor index in it.
    ///
    /// This covers both the empty string and input consisting only of
    /// delimiters.
    #[error("processor list does not contain any processor indexes")]
    Empty,

    /// A list item could not be interpreted as a processor index.
    #[error("invalid processor index '{invalid_value}': {problem}")]
    InvalidItem {
        /// The specific item that was invalid.
        invalid_value: String,

        /// A human-readable description of the problem.
        problem: String,
    },
}

/// A specialized `Result` type for processor list operations, returning the
/// crate's [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;
