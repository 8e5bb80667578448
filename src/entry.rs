//! Candidate entries [`Entry`].

use crate::prelude::*;

/// A reference to one of the input sets, as stored in the buckets of an
/// [`InvertedIndex`](crate::index::InvertedIndex).
///
/// Entries are ordered so that larger sets come first, with ties broken by the smallest index.
/// Sorting a bucket thus lists its sets from best to worst candidate superset.
///
/// Two entries are equal only if both their sizes and indices match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Entry {
    /// The size of the set.
    pub size: usize,
    /// The position of the set within the input collection.
    pub index: usize,
}

impl Entry {
    /// Initializes a new entry.
    #[must_use]
    pub const fn new(size: usize, index: usize) -> Self {
        Self { size, index }
    }

    /// The sorting key for the entry. Comparing keys is equivalent to comparing entries.
    const fn key(self) -> (Reverse<usize>, usize) {
        (Reverse(self.size), self.index)
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Writes an entry as `#index (size)`.
impl Display for Entry {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "#{} ({})", self.index, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn larger_first() {
        assert!(Entry::new(3, 5) < Entry::new(2, 0));
        assert!(Entry::new(0, 0) > Entry::new(1, 9));
    }

    #[test]
    fn index_breaks_ties() {
        assert!(Entry::new(2, 0) < Entry::new(2, 1));
        assert_eq!(Entry::new(2, 1).cmp(&Entry::new(2, 1)), Ordering::Equal);
    }

    #[test]
    fn sort() {
        let mut entries = vec![
            Entry::new(1, 2),
            Entry::new(2, 1),
            Entry::new(2, 0),
            Entry::new(4, 3),
        ];
        entries.sort_unstable();

        let indices: Vec<_> = entries.iter().map(|entry| entry.index).collect();
        assert_eq!(indices, [3, 0, 1, 2]);
    }

    #[test]
    fn display() {
        assert_eq!(Entry::new(4, 2).to_string(), "#2 (4)");
    }
}
