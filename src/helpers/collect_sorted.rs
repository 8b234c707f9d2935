//! Ordering transforms for [`PCollection`].
//!
//! - [`PCollection::sorted_by`]: stable sort with a caller-supplied comparator.
//! - [`PCollection::reversed`]: reverse the whole collection.
//! - [`PCollection::collect_sorted_by_key`]: collect `(K, V)` pairs ordered by `K`.
//!
//! Sorting and reversal are barriers: each partition is prepared locally,
//! then the merge sees every partition in source order. Because the merge
//! uses a stable sort over the concatenated, already-sorted runs, the result
//! is the same as a single-threaded stable sort of the whole input.

use crate::{ElemBound, PCollection, Runner};
use anyhow::Result;
use std::cmp::Ordering;
use std::sync::Arc;

impl<T: ElemBound> PCollection<T> {
    /// Stable sort by `cmp`. Elements comparing equal keep their relative order.
    ///
    /// # Example
    /// ```
    /// use menagerie::*;
    ///
    /// let p = Pipeline::default();
    /// let out = from_vec(&p, vec![3u32, 1, 2])
    ///     .sorted_by(|a: &u32, b: &u32| b.cmp(a))
    ///     .collect_seq()
    ///     .unwrap();
    /// assert_eq!(out, vec![3, 2, 1]);
    /// ```
    pub fn sorted_by<F>(self, cmp: F) -> PCollection<T>
    where
        F: 'static + Send + Sync + Fn(&T, &T) -> Ordering,
    {
        let cmp = Arc::new(cmp);
        let local_cmp = Arc::clone(&cmp);
        self.barrier(
            move |mut chunk: Vec<T>| {
                chunk.sort_by(|a, b| local_cmp(a, b));
                chunk
            },
            move |parts: Vec<Vec<T>>| {
                let mut all: Vec<T> = parts.into_iter().flatten().collect();
                all.sort_by(|a, b| cmp(a, b));
                all
            },
        )
    }

    /// Stable sort by the reverse of `cmp`.
    ///
    /// Unlike `sorted_by(cmp).reversed()`, elements comparing equal keep
    /// their source order, so sorting the output again changes nothing.
    pub fn sorted_by_reversed<F>(self, cmp: F) -> PCollection<T>
    where
        F: 'static + Send + Sync + Fn(&T, &T) -> Ordering,
    {
        self.sorted_by(move |a: &T, b: &T| cmp(b, a))
    }

    /// Reverse the order of the entire collection.
    pub fn reversed(self) -> PCollection<T> {
        self.barrier(
            |chunk: Vec<T>| chunk,
            |parts: Vec<Vec<T>>| {
                let mut all: Vec<T> = parts.into_iter().flatten().collect();
                all.reverse();
                all
            },
        )
    }
}

impl<K: ElemBound + Ord, V: ElemBound> PCollection<(K, V)> {
    /// Collect `(K, V)` pairs ordered by key only; pairs sharing a key keep
    /// their collected order.
    pub fn collect_sorted_by_key(self, runner: &Runner) -> Result<Vec<(K, V)>> {
        let mut v = self.collect_with(runner)?;
        v.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(v)
    }
}
