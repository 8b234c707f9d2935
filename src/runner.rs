use crate::node::{DynOp, Node};
use crate::pipeline::Pipeline;
use crate::NodeId;
use anyhow::{anyhow, bail, Context, Result};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::any::Any;
use std::sync::{Arc, Mutex, PoisonError};

/// Parallel-friendly boxed partition payload
pub type Partition = Box<dyn Any + Send + Sync>;

/// Recover the typed `Vec<T>` behind a partition.
pub(crate) fn downcast_vec<T: 'static>(p: Partition, stage: &str) -> Result<Vec<T>> {
    p.downcast::<Vec<T>>()
        .map(|v| *v)
        .map_err(|_| anyhow!("{stage}: partition type mismatch"))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecMode {
    Sequential,
    Parallel {
        threads: Option<usize>,
        partitions: Option<usize>,
    },
}

#[derive(Clone, Debug)]
pub struct Runner {
    pub mode: ExecMode,
    pub default_partitions: usize,
    /// Dedicated pool for `Parallel { threads: Some(_) }`, built on first
    /// use and shared by clones of this runner.
    pub(crate) pool: Arc<Mutex<Option<Arc<ThreadPool>>>>,
}

impl Default for Runner {
    fn default() -> Self {
        Self {
            mode: ExecMode::Parallel {
                threads: None,
                partitions: None,
            },
            default_partitions: 2 * num_cpus::get().max(2),
            pool: Arc::new(Mutex::new(None)),
        }
    }
}

impl Runner {
    /// Single partition, caller's thread.
    pub fn sequential() -> Self {
        Self {
            mode: ExecMode::Sequential,
            ..Default::default()
        }
    }

    /// Partitioned execution on rayon. `threads = None` uses the global pool.
    pub fn parallel(threads: Option<usize>, partitions: Option<usize>) -> Self {
        Self {
            mode: ExecMode::Parallel {
                threads,
                partitions,
            },
            ..Default::default()
        }
    }

    pub fn run_collect<T: 'static + Send + Sync>(
        &self,
        p: &Pipeline,
        terminal: NodeId,
    ) -> Result<Vec<T>> {
        let (mut gnodes, edges) = p.snapshot();

        // Linear backwalk: terminal → … → source
        let mut chain: Vec<Node> = Vec::new();
        let mut cur = terminal;
        loop {
            let n = gnodes
                .remove(&cur)
                .ok_or_else(|| anyhow!("missing node {cur:?}"))?;
            chain.push(n);
            match edges.iter().find(|(_, to)| *to == cur) {
                Some(&(from, _)) => cur = from,
                None => break,
            }
        }
        chain.reverse();
        let plan = fuse(chain);
        tracing::trace!(stages = plan.len(), mode = ?self.mode, "executing plan");

        match self.mode {
            ExecMode::Sequential => exec_seq::<T>(plan),
            ExecMode::Parallel {
                threads,
                partitions,
            } => {
                let parts = partitions.unwrap_or(self.default_partitions).max(1);
                match threads {
                    Some(t) => self.pool(t)?.install(|| exec_parallel::<T>(plan, parts)),
                    None => exec_parallel::<T>(plan, parts),
                }
            }
        }
    }
}

impl Runner {
    /// The dedicated pool, rebuilt only when `threads` no longer matches it.
    fn pool(&self, threads: usize) -> Result<Arc<ThreadPool>> {
        let mut slot = self.pool.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(pool) = slot.as_ref().filter(|p| p.current_num_threads() == threads) {
            return Ok(Arc::clone(pool));
        }
        let pool = Arc::new(
            ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("building rayon thread pool")?,
        );
        *slot = Some(Arc::clone(&pool));
        Ok(pool)
    }
}

/// Merge runs of adjacent stateless nodes into one stage.
fn fuse(chain: Vec<Node>) -> Vec<Node> {
    let mut out: Vec<Node> = Vec::with_capacity(chain.len());
    for node in chain {
        if let (Node::Stateless(ops), Some(Node::Stateless(prev))) = (&node, out.last_mut()) {
            prev.extend(ops.iter().cloned());
            continue;
        }
        out.push(node);
    }
    out
}

fn fuse_stateless(ops: &[Arc<dyn DynOp>], input: Partition) -> Result<Partition> {
    ops.iter().try_fold(input, |acc, op| op.apply(acc))
}

/// Sequential executor (single partition in-process)
fn exec_seq<T: 'static>(plan: Vec<Node>) -> Result<Vec<T>> {
    let mut plan = plan.into_iter();
    let mut buf = match plan.next() {
        Some(Node::Source { split }) => split(1)
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("source produced no partition"))?,
        _ => bail!("plan must start with a source"),
    };

    for node in plan {
        buf = match node {
            Node::Stateless(ops) => fuse_stateless(&ops, buf)?,
            Node::Barrier { local, merge } => merge(vec![local(buf)?])?,
            Node::Source { .. } => bail!("unexpected additional source in plan"),
        };
    }

    downcast_vec::<T>(buf, "terminal")
}

/// Parallel executor (partition source → stateless per partition → barriers)
fn exec_parallel<T: 'static + Send>(plan: Vec<Node>, partitions: usize) -> Result<Vec<T>> {
    let mut plan = plan.into_iter();
    let mut current: Vec<Partition> = match plan.next() {
        Some(Node::Source { split }) => split(partitions),
        _ => bail!("plan must start with a source"),
    };

    for node in plan {
        current = match node {
            Node::Stateless(ops) => current
                .into_par_iter()
                .map(|chunk| fuse_stateless(&ops, chunk))
                .collect::<Result<Vec<_>>>()?,
            Node::Barrier { local, merge } => {
                let locals = current
                    .into_par_iter()
                    .map(|chunk| local(chunk))
                    .collect::<Result<Vec<_>>>()?;
                vec![merge(locals)?]
            }
            Node::Source { .. } => bail!("unexpected additional source in plan"),
        };
    }

    let mut out = Vec::<T>::new();
    for part in current {
        out.extend(downcast_vec::<T>(part, "terminal")?);
    }
    Ok(out)
}

/// Split into at most `n` contiguous chunks; always yields at least one.
pub(crate) fn split_vec<T: Clone>(v: &[T], n: usize) -> Vec<Vec<T>> {
    if n <= 1 || v.len() <= 1 {
        return vec![v.to_vec()];
    }
    let chunk = v.len().div_ceil(n);
    v.chunks(chunk).map(<[T]>::to_vec).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_keeps_order_and_contents() {
        let parts = split_vec(&[1, 2, 3, 4, 5], 2);
        assert_eq!(parts, vec![vec![1, 2, 3], vec![4, 5]]);
    }

    #[test]
    fn split_of_empty_is_one_empty_partition() {
        let parts = split_vec::<u32>(&[], 8);
        assert_eq!(parts, vec![Vec::<u32>::new()]);
    }

    #[test]
    fn split_never_exceeds_len() {
        let parts = split_vec(&[1, 2, 3], 16);
        assert_eq!(parts.len(), 3);
    }

    #[test]
    fn thread_pool_is_built_once_per_runner() -> Result<()> {
        let r = Runner::parallel(Some(2), Some(4));
        let first = r.pool(2)?;
        let again = r.clone().pool(2)?;
        assert!(Arc::ptr_eq(&first, &again));
        assert_eq!(first.current_num_threads(), 2);

        let resized = r.pool(3)?;
        assert!(!Arc::ptr_eq(&first, &resized));
        assert_eq!(resized.current_num_threads(), 3);
        Ok(())
    }

    #[test]
    fn repeated_parallel_runs_reuse_the_pool() -> Result<()> {
        let r = Runner::parallel(Some(2), Some(3));
        let p = Pipeline::default();
        let col = crate::from_vec(&p, vec![3u32, 1, 2]).map(|x: &u32| x + 1);
        assert_eq!(col.clone().collect_with(&r)?, vec![4, 2, 3]);
        let pool = r.pool(2)?;
        assert_eq!(col.collect_with(&r)?, vec![4, 2, 3]);
        assert!(Arc::ptr_eq(&pool, &r.pool(2)?));
        Ok(())
    }

    #[test]
    fn downcast_mismatch_is_an_error() {
        let p: Partition = Box::new(vec![1u8]);
        let err = downcast_vec::<String>(p, "probe").unwrap_err();
        assert!(err.to_string().contains("probe"));
    }
}
