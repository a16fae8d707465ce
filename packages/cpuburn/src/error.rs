use std::io;

use thiserror::Error;

/// Errors that can occur when launching the worker fleet.
#[derive(Debug, Error)]
#[non_exhaustive]
pub(crate) enum Error {
    /// More worker threads were requested than the launcher supports.
    #[error("requested {requested} worker threads but at most {maximum} are supported")]
    TooManyWorkers {
        /// The worker thread count the caller asked for.
        requested: usize,

        /// The highest worker thread count the launcher accepts.
        maximum: usize,
    },

    /// The operating system refused to create a worker thread.
    ///
    /// Fatal: no partial-launch recovery is attempted.
    #[error("failed to create worker thread {identity}: {source}")]
    ThreadCreation {
        /// Identity of the worker whose thread could not be created.
        identity: usize,

        /// The underlying operating system error.
        source: io::Error,
    },
}

/// A specialized `Result` type for launch operations, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;
