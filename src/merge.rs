//! The bounded k-way merge behind superset resolution.
//!
//! Given `k` sorted buckets of [`Entries`](Entry), we want the smallest entry found in all of them.
//! We pop entries from the buckets in globally increasing order through a heap that holds the
//! current head of each bucket, and remember the last `k` of them in a [`Window`]. Since a bucket
//! never repeats an entry, the window can only ever hold `k` equal entries when each came from a
//! different bucket, i.e. when that entry is common to all of them.

use crate::prelude::*;

/// A fixed-capacity ring buffer holding the most recently popped entries.
///
/// ## Invariants
///
/// `buf` never holds more than `cap` entries, and `head` is always a valid index into `buf` or zero.
#[derive(Clone, Debug)]
struct Window {
    /// Stored entries. Once full, entries are overwritten in place.
    buf: SmallVec<Entry>,
    /// Maximum number of entries.
    cap: usize,
    /// Position of the oldest entry.
    head: usize,
    /// The last entry pushed.
    newest: Option<Entry>,
}

impl Window {
    /// Initializes an empty window with the given capacity.
    fn new(cap: usize) -> Self {
        Self {
            buf: SmallVec::with_capacity(cap),
            cap,
            head: 0,
            newest: None,
        }
    }

    /// Whether the window holds `cap` entries.
    fn is_full(&self) -> bool {
        self.buf.len() == self.cap
    }

    /// Pushes an entry, evicting the oldest one if the window is full.
    fn push(&mut self, entry: Entry) {
        if self.is_full() {
            self.buf[self.head] = entry;
            self.head = (self.head + 1) % self.cap;
        } else {
            self.buf.push(entry);
        }

        self.newest = Some(entry);
    }

    /// Returns the common entry if the window is full and its oldest and newest entries match.
    ///
    /// Entries are pushed in increasing order, so this means every entry in the window is equal.
    fn settled(&self) -> Option<Entry> {
        if !self.is_full() {
            return None;
        }

        let oldest = self.buf.get(self.head).copied()?;
        self.newest.filter(|&newest| newest == oldest)
    }
}

/// A position within one of the buckets being merged.
///
/// The derived order compares entries first, then breaks ties by bucket and position, so that the
/// frontier pops equal entries in a fixed order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Cursor {
    /// The entry at this position.
    entry: Entry,
    /// The bucket the entry belongs to.
    bucket: usize,
    /// The position of the entry within its bucket.
    pos: usize,
}

/// Merge state for a single query.
struct Merge<'a, B> {
    /// The buckets being merged.
    buckets: &'a [B],
    /// The smallest entry of each bucket that hasn't been popped yet.
    frontier: BinaryHeap<Reverse<Cursor>>,
    /// The last `k` entries popped from the frontier.
    window: Window,
    /// Number of entries popped so far.
    pops: usize,
}

impl<'a, B: AsRef<[Entry]>> Merge<'a, B> {
    /// Sets up the frontier with the first entry of each bucket.
    ///
    /// Returns `None` if any bucket is empty, as nothing can be common to all of them.
    fn new(buckets: &'a [B]) -> Option<Self> {
        let mut frontier = BinaryHeap::with_capacity(buckets.len());
        for (bucket, entries) in buckets.iter().enumerate() {
            let entry = *entries.as_ref().first()?;
            frontier.push(Reverse(Cursor {
                entry,
                bucket,
                pos: 0,
            }));
        }

        Some(Self {
            buckets,
            frontier,
            window: Window::new(buckets.len()),
            pops: 0,
        })
    }

    /// Moves the smallest entry from the frontier into the window, and replaces it by the next
    /// entry in its bucket.
    ///
    /// Returns `false` once the frontier is exhausted.
    fn step(&mut self) -> bool {
        let Some(Reverse(cursor)) = self.frontier.pop() else {
            return false;
        };
        self.window.push(cursor.entry);
        self.pops += 1;

        let pos = cursor.pos + 1;
        if let Some(&entry) = self.buckets[cursor.bucket].as_ref().get(pos) {
            self.frontier.push(Reverse(Cursor {
                entry,
                bucket: cursor.bucket,
                pos,
            }));
        }

        true
    }

    /// Runs the merge until a common entry surfaces.
    fn run(mut self) -> Option<Entry> {
        while self.step() {
            if let Some(entry) = self.window.settled() {
                log::trace!(
                    "found {entry} after {} pops over {} buckets",
                    self.pops,
                    self.buckets.len()
                );
                return Some(entry);
            }
        }

        None
    }
}

/// Finds the smallest [`Entry`] present in every bucket.
///
/// Each bucket must be sorted in increasing order and hold no repeated entries. The same bucket may
/// be passed more than once.
///
/// Returns `None` if there are no buckets, if any of them is empty, or if they have no entry in
/// common.
///
/// ```
/// use supersets::prelude::*;
///
/// let a = [Entry::new(4, 1), Entry::new(3, 0), Entry::new(1, 2)];
/// let b = [Entry::new(3, 0), Entry::new(1, 2)];
/// assert_eq!(first_common(&[&a[..], &b[..]]), Some(Entry::new(3, 0)));
/// ```
pub fn first_common<B: AsRef<[Entry]>>(buckets: &[B]) -> Option<Entry> {
    if buckets.is_empty() {
        return None;
    }
    Merge::new(buckets)?.run()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Entries of size 1 with the given indices.
    fn bucket(indices: &[usize]) -> Vec<Entry> {
        indices.iter().map(|&index| Entry::new(1, index)).collect()
    }

    #[test]
    fn window_eviction() {
        let mut window = Window::new(2);
        window.push(Entry::new(1, 0));
        assert_eq!(window.settled(), None);

        window.push(Entry::new(1, 1));
        assert_eq!(window.settled(), None);

        window.push(Entry::new(1, 1));
        assert_eq!(window.settled(), Some(Entry::new(1, 1)));

        window.push(Entry::new(1, 2));
        assert_eq!(window.settled(), None);
    }

    #[test]
    fn single_window() {
        let mut window = Window::new(1);
        window.push(Entry::new(1, 3));
        assert_eq!(window.settled(), Some(Entry::new(1, 3)));
    }

    #[test]
    fn no_buckets() {
        assert_eq!(first_common::<Vec<Entry>>(&[]), None);
    }

    #[test]
    fn empty_bucket() {
        assert_eq!(first_common(&[bucket(&[0, 1]), bucket(&[])]), None);
    }

    #[test]
    fn single_bucket() {
        assert_eq!(first_common(&[bucket(&[2, 5])]), Some(Entry::new(1, 2)));
    }

    #[test]
    fn disjoint() {
        assert_eq!(first_common(&[bucket(&[0, 2, 4]), bucket(&[1, 3, 5])]), None);
    }

    #[test]
    fn first_of_many() {
        let buckets = [
            bucket(&[0, 3, 4, 7, 9]),
            bucket(&[1, 3, 4, 9]),
            bucket(&[2, 4, 5, 9]),
        ];
        assert_eq!(first_common(&buckets), Some(Entry::new(1, 4)));
    }

    #[test]
    fn repeated_bucket() {
        let shared = bucket(&[1, 6]);
        let other = bucket(&[0, 6]);
        let buckets = [&shared[..], &shared[..], &other[..]];
        assert_eq!(first_common(&buckets), Some(Entry::new(1, 6)));
    }

    #[test]
    fn size_matters() {
        // Same index, different sizes: not the same entry.
        let buckets = [vec![Entry::new(2, 0)], vec![Entry::new(1, 0)]];
        assert_eq!(first_common(&buckets), None);
    }
}
