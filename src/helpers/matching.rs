//! Predicate matching over a whole collection.
//!
//! Each transform reduces the collection to a single `bool`; read it with
//! [`PCollection::holds`]. Empty input follows the usual vacuous rules:
//! `all_match` and `none_match` hold, `any_match` does not.

use crate::{ElemBound, PCollection, Runner};
use anyhow::Result;

impl<T: ElemBound> PCollection<T> {
    pub fn all_match<F>(self, pred: F) -> PCollection<bool>
    where
        F: 'static + Send + Sync + Fn(&T) -> bool,
    {
        self.barrier(
            move |chunk: Vec<T>| chunk.iter().all(|t| pred(t)),
            |parts: Vec<bool>| vec![parts.into_iter().all(|b| b)],
        )
    }

    pub fn any_match<F>(self, pred: F) -> PCollection<bool>
    where
        F: 'static + Send + Sync + Fn(&T) -> bool,
    {
        self.barrier(
            move |chunk: Vec<T>| chunk.iter().any(|t| pred(t)),
            |parts: Vec<bool>| vec![parts.into_iter().any(|b| b)],
        )
    }

    pub fn none_match<F>(self, pred: F) -> PCollection<bool>
    where
        F: 'static + Send + Sync + Fn(&T) -> bool,
    {
        self.any_match(pred).map(|found: &bool| !found)
    }
}

impl PCollection<bool> {
    /// Run the plan and report whether the reduced predicate holds.
    pub fn holds(self, runner: &Runner) -> Result<bool> {
        Ok(self.collect_with(runner)?.into_iter().all(|b| b))
    }
}
