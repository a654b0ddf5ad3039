//! Merging several mappings into one, first source wins.

use std::collections::HashSet;

use crate::types::{Entry, Mapping};

/// Merges `mappings` from left to right.
///
/// Every entry of the first mapping is kept. Each following mapping only
/// contributes the entries whose name is not already present, in their
/// own order. Duplicates inside the first mapping are left as they are.
///
/// # Example
/// ```rust
/// use xdst::{Entry, merge_mappings};
///
/// let merged = merge_mappings(&[
///     vec![Entry::new("a", "1")],
///     vec![Entry::new("a", "2"), Entry::new("b", "3")],
/// ]);
/// assert_eq!(merged, vec![Entry::new("a", "1"), Entry::new("b", "3")]);
/// ```
pub fn merge_mappings(mappings: &[Mapping]) -> Mapping {
    mappings
        .iter()
        .fold(Vec::new(), |top, bottom| merge_pair(top, bottom))
}

/// Appends the entries of `bottom` whose name does not occur in `top`.
fn merge_pair(mut top: Mapping, bottom: &[Entry]) -> Mapping {
    let taken = top
        .iter()
        .map(|entry| entry.name.clone())
        .collect::<HashSet<_>>();
    top.extend(
        bottom
            .iter()
            .filter(|entry| !taken.contains(&entry.name))
            .cloned(),
    );
    top
}
