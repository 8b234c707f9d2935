//! Node kinds stored in the pipeline graph.
//!
//! All payloads are type-erased [`Partition`]s; the typed closures built by
//! [`PCollection`](crate::PCollection) downcast them back.

use crate::runner::Partition;
use anyhow::Result;
use std::sync::Arc;

/// An element-wise operator applied to one partition.
///
/// Consecutive stateless operators are fused by the runner and applied to
/// every partition independently.
pub trait DynOp: Send + Sync {
    fn apply(&self, input: Partition) -> Result<Partition>;
}

/// Splits a source into `n` contiguous partitions.
pub type SplitFn = Arc<dyn Fn(usize) -> Vec<Partition> + Send + Sync>;
/// Per-partition half of a barrier.
pub type LocalFn = Arc<dyn Fn(Partition) -> Result<Partition> + Send + Sync>;
/// Combines local results, in partition order, into a single partition.
pub type MergeFn = Arc<dyn Fn(Vec<Partition>) -> Result<Partition> + Send + Sync>;

#[derive(Clone)]
pub enum Node {
    Source { split: SplitFn },
    Stateless(Vec<Arc<dyn DynOp>>),
    /// Needs every partition before it can emit: sorting, grouping,
    /// matching and extrema are all barriers.
    Barrier { local: LocalFn, merge: MergeFn },
}
