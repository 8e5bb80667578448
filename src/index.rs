//! The inverted index [`InvertedIndex`] from items to the sets containing them.

use crate::prelude::*;

/// Whether every entry in a bucket is smaller than the next.
fn strictly_increasing(bucket: &[Entry]) -> bool {
    bucket.windows(2).all(|pair| pair[0] < pair[1])
}

/// An input set, as seen by the index.
#[derive(Clone, Debug)]
struct Member<'a, T> {
    /// The entry for the set.
    entry: Entry,
    /// The distinct items of the set, in order of first appearance.
    items: Vec<&'a T>,
}

/// Maps every item in a collection of sets to the sets containing it.
///
/// Each item is assigned a bucket of [`Entries`](Entry), sorted from largest to smallest set, with
/// ties broken by index. The index borrows the items from the input collection, and is immutable
/// once built.
///
/// ## Invariants
///
/// - Every bucket is strictly increasing.
/// - Every set appears exactly once in the bucket of each of its items.
#[derive(Clone, Debug)]
pub struct InvertedIndex<'a, T> {
    /// The sorted bucket for each item.
    buckets: HashMap<&'a T, Vec<Entry>>,
    /// The input sets, in order.
    members: Vec<Member<'a, T>>,
    /// The smallest entry among all sets, i.e. the largest set.
    largest: Option<Entry>,
    /// The options the index was built with.
    options: Options,
}

impl<'a, T: Hash + Eq> InvertedIndex<'a, T> {
    /// Builds the index for a collection of sets with the default [`Options`].
    pub fn new<S: AsRef<[T]>>(sets: &'a [S]) -> Self {
        Self::with_options(sets, Options::new())
    }

    /// Builds the index for a collection of sets.
    pub fn with_options<S: AsRef<[T]>>(sets: &'a [S], options: Options) -> Self {
        let mut buckets: HashMap<&'a T, Vec<Entry>> = HashMap::new();
        let mut members = Vec::with_capacity(sets.len());
        let mut seen = HashSet::new();
        let mut total = 0;

        for (index, set) in sets.iter().enumerate() {
            let set = set.as_ref();
            seen.clear();
            let items: Vec<_> = set.iter().filter(|&item| seen.insert(item)).collect();

            let size = match options.duplicates {
                Duplicates::Literal => set.len(),
                Duplicates::Collapse => items.len(),
            };
            let entry = Entry::new(size, index);

            for &item in &items {
                buckets.entry(item).or_default().push(entry);
            }
            total += items.len();
            members.push(Member { entry, items });
        }

        // Each set was pushed once per bucket, so sorting also makes them strictly increasing.
        for bucket in buckets.values_mut() {
            bucket.sort_unstable();
            debug_assert!(strictly_increasing(bucket), "set listed twice in a bucket");
        }

        let largest = members.iter().map(|member| member.entry).min();
        log::debug!(
            "indexed {} sets over {} distinct items ({total} entries)",
            members.len(),
            buckets.len()
        );

        Self {
            buckets,
            members,
            largest,
            options,
        }
    }

    /// The number of sets in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The number of distinct items across all sets.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.buckets.len()
    }

    /// The options the index was built with.
    #[must_use]
    pub fn options(&self) -> Options {
        self.options
    }

    /// The sorted bucket for an item.
    ///
    /// Returns the empty slice for items in no set.
    #[must_use]
    pub fn bucket(&self, item: &T) -> &[Entry] {
        self.buckets.get(item).map(Vec::as_slice).unwrap_or_default()
    }

    /// Gets the member at some index, or an error if there's no such set.
    fn member(&self, index: usize) -> Result<&Member<'a, T>, SupersetError> {
        self.members
            .get(index)
            .ok_or(SupersetError::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    /// The entry for the set at some index.
    ///
    /// # Errors
    ///
    /// Returns [`SupersetError::IndexOutOfRange`] if there's no set at `index`.
    pub fn entry(&self, index: usize) -> Result<Entry, SupersetError> {
        self.member(index).map(|member| member.entry)
    }

    /// Finds the entry for the largest superset of a member.
    fn resolve_member(&self, member: &Member<'a, T>) -> Entry {
        // Every set contains the empty set.
        if member.items.is_empty() {
            return self.largest.unwrap_or(member.entry);
        }

        let buckets: SmallVec<&[Entry]> =
            member.items.iter().map(|&item| self.bucket(item)).collect();

        // The set's own entry is in each of its buckets, so this always finds something.
        first_common(&buckets[..]).unwrap_or(member.entry)
    }

    /// Finds the entry for the largest superset of the set at some index.
    ///
    /// # Errors
    ///
    /// Returns [`SupersetError::IndexOutOfRange`] if there's no set at `index`.
    pub fn resolve(&self, index: usize) -> Result<Entry, SupersetError> {
        self.member(index).map(|member| self.resolve_member(member))
    }

    /// Finds the largest superset of every set, in order.
    #[must_use]
    pub fn resolve_all(&self) -> Supersets {
        let supersets: Supersets = self
            .members
            .iter()
            .map(|member| (member.entry.index, self.resolve_member(member).index))
            .collect();

        log::debug!("resolved {} superset queries", supersets.len());
        supersets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_sorted() {
        let sets = [vec![1, 2], vec![1, 2, 3], vec![1]];
        let index = InvertedIndex::new(&sets);

        assert_eq!(
            index.bucket(&1),
            [Entry::new(3, 1), Entry::new(2, 0), Entry::new(1, 2)]
        );
        assert_eq!(index.bucket(&2), [Entry::new(3, 1), Entry::new(2, 0)]);
        assert_eq!(index.bucket(&3), [Entry::new(3, 1)]);
        assert!(index.bucket(&4).is_empty());
        assert_eq!(index.item_count(), 3);
    }

    #[test]
    fn buckets_strictly_increasing() {
        let sets = [vec![1, 2, 1], vec![2, 1], vec![2, 2], vec![1, 2, 1]];
        for options in [
            Options::new(),
            Options::new().duplicates(Duplicates::Collapse),
        ] {
            let index = InvertedIndex::with_options(&sets, options);
            for item in [1, 2] {
                assert!(strictly_increasing(index.bucket(&item)));
            }
        }

        assert!(!strictly_increasing(&[Entry::new(2, 0), Entry::new(2, 0)]));
        assert!(!strictly_increasing(&[Entry::new(1, 0), Entry::new(2, 1)]));
    }

    #[test]
    fn repeated_items_listed_once() {
        let sets = [vec!['a', 'a', 'b']];
        let index = InvertedIndex::new(&sets);
        assert_eq!(index.bucket(&'a'), [Entry::new(3, 0)]);

        let options = Options::new().duplicates(Duplicates::Collapse);
        let index = InvertedIndex::with_options(&sets, options);
        assert_eq!(index.bucket(&'a'), [Entry::new(2, 0)]);
    }

    #[test]
    fn out_of_range() {
        let sets = [vec![1]];
        let index = InvertedIndex::new(&sets);

        assert_eq!(index.resolve(0), Ok(Entry::new(1, 0)));
        assert_eq!(
            index.resolve(1),
            Err(SupersetError::IndexOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(
            index.entry(3).unwrap_err().to_string(),
            "set index 3 out of range for a collection of 1 sets"
        );
    }

    #[test]
    fn empty() {
        let sets: [Vec<u8>; 0] = [];
        let index = InvertedIndex::new(&sets);
        assert!(index.is_empty());
        assert!(index.resolve_all().is_empty());
    }

    #[test]
    fn empty_set_takes_largest() {
        let sets = [vec![], vec![1], vec![2, 3], vec![4, 5]];
        let index = InvertedIndex::new(&sets);
        assert_eq!(index.resolve(0), Ok(Entry::new(2, 2)));
    }
}
