//! # Largest supersets
//!
//! Given a collection of sets over some hashable universe, finds for each of them the largest set
//! in the same collection that contains it. Ties in size are broken by the smallest index, and
//! every set is trivially a superset of itself, so there's always an answer.
//!
//! The naive approach checks every pair of sets for containment. Instead, we invert the
//! element-to-set relation into an [`InvertedIndex`], whose buckets list the sets containing each
//! item from largest to smallest. The largest superset of a set is then the first [`Entry`] common
//! to the buckets of all its items, which [`first_common`] finds through a bounded k-way merge.
//!
//! ```
//! use supersets::prelude::*;
//!
//! let sets = [vec![1, 2], vec![1, 2, 3], vec![1], vec![4, 5], vec![4, 5, 6, 7]];
//! let supersets = largest_supersets(&sets);
//! assert_eq!(Vec::from(supersets), [(0, 1), (1, 1), (2, 1), (3, 4), (4, 4)]);
//! ```

#![warn(clippy::pedantic)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

pub mod entry;
pub mod error;
pub mod index;
pub mod merge;
pub mod prelude;
pub mod superset;
pub mod utils;


/// Small vector.
type SmallVec<T> = smallvec::SmallVec<[T; 8]>;
