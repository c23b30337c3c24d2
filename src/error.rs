use thiserror::Error;

/// Errors surfaced by [`Tree`](crate::Tree) operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The caller passed a value the tree cannot store. Raised before any mutation happens.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
