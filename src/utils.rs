//! Utility functions, including a quadratic reference for [`largest_supersets`].
//!
//! [`brute_force`] compares every pair of sets directly. It's far slower than going through an
//! [`InvertedIndex`], but simple enough to be obviously correct, which makes it a good oracle on
//! small inputs.

use crate::prelude::*;

/// Assigns an increasing index to a `key` added to a map, or returns the existing index.
pub(crate) fn hash_index<K: Hash + Eq>(map: &mut HashMap<K, usize>, key: K) -> usize {
    let len = map.len();
    match map.entry(key) {
        MapEntry::Vacant(entry) => {
            entry.insert(len);
            len
        }
        MapEntry::Occupied(entry) => *entry.get(),
    }
}

/// Represents each set as a row of bits over the universe of all items, along with its size.
fn membership_rows<T: Hash + Eq, S: AsRef<[T]>>(
    sets: &[S],
    options: Options,
) -> Vec<(Entry, BitVec)> {
    let mut universe = HashMap::new();
    let ids: Vec<Vec<usize>> = sets
        .iter()
        .map(|set| {
            set.as_ref()
                .iter()
                .map(|item| hash_index(&mut universe, item))
                .collect()
        })
        .collect();

    ids.into_iter()
        .zip(sets)
        .enumerate()
        .map(|(index, (ids, set))| {
            let mut row = bitvec![0; universe.len()];
            for id in ids {
                row.set(id, true);
            }

            let size = match options.duplicates {
                Duplicates::Literal => set.as_ref().len(),
                Duplicates::Collapse => row.count_ones(),
            };
            (Entry::new(size, index), row)
        })
        .collect()
}

/// Whether every bit set in `fst` is also set in `snd`.
fn row_subset(fst: &BitSlice, snd: &BitSlice) -> bool {
    fst.iter_ones().all(|i| snd[i])
}

/// Finds, for each set in `sets`, the largest set in `sets` containing it, by checking every pair.
///
/// Gives the same answers as [`largest_supersets_with`], in quadratic time.
pub fn brute_force<T: Hash + Eq, S: AsRef<[T]>>(sets: &[S], options: Options) -> Supersets {
    let rows = membership_rows(sets, options);

    rows.iter()
        .map(|(entry, row)| {
            let best = rows
                .iter()
                .filter(|(_, other)| row_subset(row, other))
                .map(|(other, _)| *other)
                .min()
                .unwrap_or(*entry);

            (entry.index, best.index)
        })
        .collect()
}
