//! # menagerie
//!
//! Functional-style collection queries (filter, sort, match, min/max,
//! group-by) over a small fixed herd of animals, built on a tiny deferred
//! collection engine.
//!
//! ## Quick Start
//!
//! ```
//! use menagerie::*;
//!
//! # fn main() -> anyhow::Result<()> {
//! let q = AnimalQueries::sample(Runner::sequential());
//! assert_eq!(q.oldest_predator_name()?.as_deref(), Some("Динозавр"));
//! assert!(!q.none_named("Слон")?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Concepts
//!
//! ### Pipeline
//!
//! A [`Pipeline`] holds the computation graph. [`from_vec`] attaches a
//! source; every transform on the resulting [`PCollection`] adds a node.
//!
//! ### PCollection
//!
//! A [`PCollection<T>`] is immutable and lazy. Cloning one branches the
//! graph, so several queries can share one source.
//!
//! #### Stateless (element-wise)
//! - [`map`](PCollection::map), [`filter`](PCollection::filter)
//!
//! #### Barriers (need the whole input)
//! - [`sorted_by`](PCollection::sorted_by), [`reversed`](PCollection::reversed)
//! - [`all_match`](PCollection::all_match), [`any_match`](PCollection::any_match),
//!   [`none_match`](PCollection::none_match)
//! - [`max_by_key`](PCollection::max_by_key), [`min_by_key`](PCollection::min_by_key)
//! - [`key_by`](PCollection::key_by) + [`group_by_key`](PCollection::group_by_key)
//!
//! ### Execution Modes
//!
//! - **Sequential**: [`Runner::sequential`], or [`collect_seq`](PCollection::collect_seq)
//! - **Parallel**: [`Runner::parallel`], or [`collect_par`](PCollection::collect_par)
//!
//! Both modes produce identical results: partitions are contiguous and are
//! merged back in source order.
//!
//! ## Module Overview
//!
//! - [`animal`] / [`dataset`] - the record type and the fixed sample
//! - [`queries`] - the nine named queries
//! - [`demo`] / [`report`] - printing results
//! - [`collection`], [`pipeline`], [`runner`] - the engine
//! - [`testing`] - assertions and fixtures

pub mod animal;
pub mod collection;
pub mod dataset;
pub mod demo;
pub mod logging;
pub mod node;
pub mod node_id;
pub mod pipeline;
pub mod queries;
pub mod report;
pub mod runner;
pub mod testing;
mod helpers;

pub use animal::{Animal, Classification};
pub use collection::{from_vec, ElemBound, PCollection};
pub use dataset::{sample_animals, SAMPLE_SIZE};
pub use node_id::NodeId;
pub use pipeline::Pipeline;
pub use queries::AnimalQueries;
pub use report::QueryReport;
pub use runner::{ExecMode, Partition, Runner};
