//! Assertions for collected query output.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

/// Assert that `actual` equals `expected` element by element.
///
/// # Panics
///
/// Panics on the first differing index, or on a length mismatch.
pub fn assert_collections_equal<T: Debug + PartialEq>(actual: &[T], expected: &[T]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "length mismatch:\n  expected: {expected:?}\n  actual:   {actual:?}"
    );
    if let Some((i, (a, e))) = actual
        .iter()
        .zip(expected)
        .enumerate()
        .find(|(_, (a, e))| a != e)
    {
        panic!("mismatch at index {i}:\n  expected: {e:?}\n  actual:   {a:?}");
    }
}

/// Assert that both slices hold the same elements with the same
/// multiplicities, in any order.
///
/// # Panics
///
/// Panics listing the missing and unexpected elements.
pub fn assert_collections_unordered_equal<T: Debug + Eq + Hash>(actual: &[T], expected: &[T]) {
    let (a, e) = (counts(actual), counts(expected));
    if a != e {
        let missing: Vec<&T> = e.keys().copied().filter(|k| a.get(k) != e.get(k)).collect();
        let extra: Vec<&T> = a.keys().copied().filter(|k| !e.contains_key(k)).collect();
        panic!(
            "content mismatch:\n  missing or miscounted: {missing:?}\n  unexpected: {extra:?}\n  expected: {expected:?}\n  actual:   {actual:?}"
        );
    }
}

fn counts<T: Eq + Hash>(xs: &[T]) -> HashMap<&T, usize> {
    let mut m: HashMap<&T, usize> = HashMap::new();
    for x in xs {
        *m.entry(x).or_default() += 1;
    }
    m
}

/// Assert that `groups` partitions `original`: keys are distinct, no group
/// is empty, every member sits under the key `key_of` assigns it, and the
/// members together are exactly `original`.
///
/// # Panics
///
/// Panics describing the first violated condition.
pub fn assert_groups_partition<K, V, F>(groups: &[(K, Vec<V>)], original: &[V], key_of: F)
where
    K: Debug + Eq + Hash,
    V: Debug + Eq + Hash + Clone,
    F: Fn(&V) -> K,
{
    let mut seen: HashSet<&K> = HashSet::new();
    for (k, members) in groups {
        assert!(seen.insert(k), "key {k:?} appears in more than one group");
        assert!(!members.is_empty(), "group {k:?} is empty");
        for m in members {
            assert_eq!(&key_of(m), k, "{m:?} filed under the wrong key");
        }
    }
    let flattened: Vec<V> = groups.iter().flat_map(|(_, vs)| vs.iter().cloned()).collect();
    assert_collections_unordered_equal(&flattened, original);
}
