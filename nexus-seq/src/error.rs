//! Error types for sequence operations.
//!
//! Only indexing and iteration fail loudly. Lookups that find nothing report
//! through `bool` / `Option` results instead of an error.

use thiserror::Error;

/// Errors returned by [`SeqList`](crate::SeqList) and its iterator.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Indexed access outside `0..len`, including any access on an empty list.
    #[error("index {index} out of range for length {len}")]
    OutOfRange {
        /// The requested index.
        index: usize,
        /// Length of the list at the time of the call.
        len: usize,
    },

    /// [`Iter::try_next`](crate::Iter::try_next) called after the last element.
    #[error("iterator exhausted")]
    Exhausted,

    /// A bulk operation this container does not implement.
    ///
    /// The list is left untouched.
    #[error("{op} is not supported by this container")]
    Unsupported {
        /// Name of the rejected operation.
        op: &'static str,
    },
}

/// Result alias for sequence operations.
pub type Result<T> = std::result::Result<T, Error>;
