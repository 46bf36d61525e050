//! Key bookkeeping shared by both levels of the diff.

use std::collections::{HashMap, HashSet};

use sdiff_types::Keyed;

use crate::config::LookupStrategy;

/// Distinct keys of `old` followed by the keys only found in `new`, each in
/// first-occurrence order.
pub(crate) fn ordered_union<'a, T: Keyed>(old: &'a [T], new: &'a [T]) -> Vec<&'a str> {
    let mut seen = HashSet::with_capacity(old.len() + new.len());
    old.iter()
        .chain(new)
        .map(Keyed::key)
        .filter(|key| seen.insert(*key))
        .collect()
}

/// Keys that occur more than once, each reported once in order of its
/// second occurrence.
pub(crate) fn duplicate_keys<T: Keyed>(items: &[T]) -> Vec<&str> {
    let mut seen = HashSet::with_capacity(items.len());
    let mut reported = HashSet::new();
    items
        .iter()
        .map(Keyed::key)
        .filter(|key| !seen.insert(*key) && reported.insert(*key))
        .collect()
}

/// Key lookup over one list.
pub(crate) enum KeyIndex<'a, T> {
    Scan(&'a [T]),
    Hashed(HashMap<&'a str, &'a T>),
}

impl<'a, T: Keyed> KeyIndex<'a, T> {
    pub(crate) fn build(items: &'a [T], strategy: LookupStrategy) -> Self {
        match strategy {
            LookupStrategy::Scan => KeyIndex::Scan(items),
            LookupStrategy::Hashed => {
                let mut map = HashMap::with_capacity(items.len());
                for item in items {
                    map.entry(item.key()).or_insert(item);
                }
                KeyIndex::Hashed(map)
            }
        }
    }

    pub(crate) fn get(&self, key: &str) -> Option<&'a T> {
        match self {
            KeyIndex::Scan(items) => {
                let items: &'a [T] = *items;
                items.iter().find(|item| item.key() == key)
            }
            KeyIndex::Hashed(map) => map.get(key).copied(),
        }
    }
}
