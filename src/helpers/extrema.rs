use crate::{ElemBound, PCollection};
use std::cmp::Ordering;
use std::sync::Arc;

impl<T: ElemBound> PCollection<T> {
    /// Reduce to the element with the greatest key (at most one element).
    ///
    /// On ties the earliest element in source order wins, in both
    /// execution modes.
    pub fn max_by_key<K, F>(self, key: F) -> PCollection<T>
    where
        K: Ord + 'static,
        F: 'static + Send + Sync + Fn(&T) -> K,
    {
        self.extreme_by_key(key, Ordering::Greater)
    }

    /// Reduce to the element with the least key (at most one element).
    ///
    /// Ties resolve to the earliest element, as for [`max_by_key`](Self::max_by_key).
    pub fn min_by_key<K, F>(self, key: F) -> PCollection<T>
    where
        K: Ord + 'static,
        F: 'static + Send + Sync + Fn(&T) -> K,
    {
        self.extreme_by_key(key, Ordering::Less)
    }

    fn extreme_by_key<K, F>(self, key: F, wanted: Ordering) -> PCollection<T>
    where
        K: Ord + 'static,
        F: 'static + Send + Sync + Fn(&T) -> K,
    {
        let key = Arc::new(key);
        let local_key = Arc::clone(&key);
        self.barrier(
            move |chunk: Vec<T>| first_extreme(chunk, local_key.as_ref(), wanted),
            move |parts: Vec<Option<T>>| {
                first_extreme(parts.into_iter().flatten(), key.as_ref(), wanted)
                    .into_iter()
                    .collect::<Vec<T>>()
            },
        )
    }
}

/// Scan `items`, replacing the candidate only when a key compares strictly
/// `wanted` against it.
fn first_extreme<T, K, F, I>(items: I, key: &F, wanted: Ordering) -> Option<T>
where
    K: Ord,
    F: Fn(&T) -> K,
    I: IntoIterator<Item = T>,
{
    let mut best: Option<(K, T)> = None;
    for item in items {
        let k = key(&item);
        let replace = match &best {
            Some((bk, _)) => k.cmp(bk) == wanted,
            None => true,
        };
        if replace {
            best = Some((k, item));
        }
    }
    best.map(|(_, t)| t)
}
