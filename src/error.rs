//! Errors for the by-index API of [`InvertedIndex`](crate::index::InvertedIndex).
//!
//! Answering a batch of superset queries can't fail. Only asking about a set that isn't in the
//! collection can.

use thiserror::Error;

/// Error in querying an [`InvertedIndex`](crate::index::InvertedIndex).
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SupersetError {
    /// The requested set is past the end of the collection.
    #[error("set index {index} out of range for a collection of {len} sets")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of sets in the collection.
        len: usize,
    },
}
