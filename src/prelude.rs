//! Crate prelude.

// The actual prelude.
pub use crate::{
    entry::Entry,
    error::SupersetError,
    index::InvertedIndex,
    merge::first_common,
    superset::{largest_supersets, largest_supersets_with, Duplicates, Options, Supersets},
    utils::brute_force,
};

// Convenient imports within the crate.
pub(crate) use crate::SmallVec;
pub(crate) use bitvec::prelude::*;
pub(crate) use derive_more::IntoIterator;
pub(crate) use std::{
    cmp::{Ordering, Reverse},
    collections::{hash_map::Entry as MapEntry, BinaryHeap, HashMap, HashSet},
    fmt::{Display, Formatter, Result as FmtResult},
    hash::Hash,
};
