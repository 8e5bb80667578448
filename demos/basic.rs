//! Finds the largest superset of a few shopping baskets among themselves.

use supersets::prelude::*;

fn main() {
    let baskets = [
        vec!["bread", "milk"],
        vec!["bread", "milk", "eggs"],
        vec!["milk"],
        vec!["apples", "pears"],
        vec!["apples", "pears", "plums", "figs"],
    ];

    for (query, superset) in largest_supersets(&baskets) {
        println!("{:?} ⊆ {:?}", baskets[query], baskets[superset]);
    }
}
