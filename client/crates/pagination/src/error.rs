//! Error types for the pagination crate.

use thiserror::Error;

/// Errors raised while constructing a [`crate::PageSize`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageSizeError {
    /// Page sizes must be positive.
    #[error("page size must be greater than zero")]
    Zero,

    /// The textual page size is not a number.
    #[error("invalid page size '{input}'")]
    Invalid {
        /// The rejected input.
        input: String,
    },
}
