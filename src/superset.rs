//! Largest superset queries over a whole collection, and their [`Options`].

use crate::prelude::*;

/// How repeated items within a single input set are treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Duplicates {
    /// A set's size is the literal length of its sequence, repeated items included.
    ///
    /// Repetitions only inflate the size. A set is still listed once per distinct item, so it can
    /// never pass as a superset of something it doesn't contain.
    #[default]
    Literal,
    /// Repeated items are collapsed, so a set's size is its number of distinct items.
    Collapse,
}

/// Options for building an [`InvertedIndex`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Options {
    /// How repeated items within a set are treated.
    pub duplicates: Duplicates,
}

impl Options {
    /// The default options.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            duplicates: Duplicates::Literal,
        }
    }

    /// Sets how repeated items within a set are treated.
    #[must_use]
    pub const fn duplicates(mut self, duplicates: Duplicates) -> Self {
        self.duplicates = duplicates;
        self
    }
}

/// The answers to a batch of largest superset queries.
///
/// Holds one `(query, superset)` pair per input set, in input order, where `superset` is the index
/// of the largest input set containing the set at `query`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, IntoIterator)]
pub struct Supersets(#[into_iterator(owned, ref)] Vec<(usize, usize)>);

impl FromIterator<(usize, usize)> for Supersets {
    fn from_iter<I: IntoIterator<Item = (usize, usize)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Supersets> for Vec<(usize, usize)> {
    fn from(supersets: Supersets) -> Self {
        supersets.0
    }
}

impl Supersets {
    /// The number of answered queries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there were no queries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The index of the largest superset of the set at `query`.
    #[must_use]
    pub fn get(&self, query: usize) -> Option<usize> {
        self.0.get(query).map(|&(_, superset)| superset)
    }

    /// Iterate over the `(query, superset)` pairs.
    pub fn iter(&self) -> std::slice::Iter<(usize, usize)> {
        self.0.iter()
    }

    /// The `(query, superset)` pairs as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[(usize, usize)] {
        &self.0
    }
}

/// Writes the answers as `{0 ⊆ 1, 1 ⊆ 1}`.
impl Display for Supersets {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("{")?;
        for (i, (query, superset)) in self.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{query} ⊆ {superset}")?;
        }
        f.write_str("}")
    }
}

/// Finds, for each set in `sets`, the largest set in `sets` containing it.
///
/// Ties in size are broken by the smallest index. A set with no strictly larger superset is its
/// own answer. An identical later copy of a set resolves to the earliest index. Set sizes count
/// repeated items, see [`Duplicates::Literal`].
///
/// ```
/// use supersets::prelude::*;
///
/// let supersets = largest_supersets(&[vec!["a", "b"], vec!["a", "b"], vec!["a"]]);
/// assert_eq!(Vec::from(supersets), [(0, 0), (1, 0), (2, 0)]);
/// ```
pub fn largest_supersets<T: Hash + Eq, S: AsRef<[T]>>(sets: &[S]) -> Supersets {
    largest_supersets_with(sets, Options::new())
}

/// Finds, for each set in `sets`, the largest set in `sets` containing it, under the given
/// [`Options`].
pub fn largest_supersets_with<T: Hash + Eq, S: AsRef<[T]>>(
    sets: &[S],
    options: Options,
) -> Supersets {
    InvertedIndex::with_options(sets, options).resolve_all()
}
