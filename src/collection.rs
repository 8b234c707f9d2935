use crate::node::{DynOp, LocalFn, MergeFn, Node, SplitFn};
use crate::node_id::NodeId;
use crate::pipeline::Pipeline;
use crate::runner::{downcast_vec, split_vec, ExecMode, Partition, Runner};
use anyhow::Result;
use serde::{de::DeserializeOwned, Serialize};
use std::marker::PhantomData;
use std::sync::Arc;

/// Bound shared by every element type flowing through a pipeline.
pub trait ElemBound: 'static + Send + Sync + Clone + Serialize + DeserializeOwned {}
impl<T> ElemBound for T where T: 'static + Send + Sync + Clone + Serialize + DeserializeOwned {}

/// A deferred, immutable collection of `T` attached to a [`Pipeline`].
///
/// Transforms only extend the graph; nothing runs until a `collect_*`
/// method is called, and collecting leaves the graph intact.
#[derive(Clone)]
pub struct PCollection<T> {
    pub(crate) pipeline: Pipeline,
    pub(crate) id: NodeId,
    _t: PhantomData<T>,
}

pub fn from_vec<T>(p: &Pipeline, data: Vec<T>) -> PCollection<T>
where
    T: ElemBound,
{
    let data = Arc::new(data);
    let split: SplitFn = Arc::new(move |n: usize| -> Vec<Partition> {
        split_vec(data.as_slice(), n)
            .into_iter()
            .map(|c| Box::new(c) as Partition)
            .collect()
    });
    let id = p.insert_node(Node::Source { split });
    PCollection {
        pipeline: p.clone(),
        id,
        _t: PhantomData,
    }
}

/// ---- Stateless DynOps ----
struct MapOp<I, O, F>(F, PhantomData<(I, O)>);
impl<I, O, F> DynOp for MapOp<I, O, F>
where
    I: ElemBound,
    O: ElemBound,
    F: Send + Sync + Fn(&I) -> O + 'static,
{
    fn apply(&self, input: Partition) -> Result<Partition> {
        let v = downcast_vec::<I>(input, "map")?;
        let out: Vec<O> = v.iter().map(|i| (self.0)(i)).collect();
        Ok(Box::new(out))
    }
}

struct FilterOp<T, P>(P, PhantomData<T>);
impl<T, P> DynOp for FilterOp<T, P>
where
    T: ElemBound,
    P: Send + Sync + Fn(&T) -> bool + 'static,
{
    fn apply(&self, input: Partition) -> Result<Partition> {
        let v = downcast_vec::<T>(input, "filter")?;
        Ok(Box::new(v.into_iter().filter(|t| (self.0)(t)).collect::<Vec<T>>()))
    }
}

impl<T: ElemBound> PCollection<T> {
    fn then<O>(self, node: Node) -> PCollection<O> {
        let id = self.pipeline.insert_node(node);
        self.pipeline.connect(self.id, id);
        PCollection {
            pipeline: self.pipeline,
            id,
            _t: PhantomData,
        }
    }

    pub fn map<O, F>(self, f: F) -> PCollection<O>
    where
        O: ElemBound,
        F: 'static + Send + Sync + Fn(&T) -> O,
    {
        let op: Arc<dyn DynOp> = Arc::new(MapOp::<T, O, F>(f, PhantomData));
        self.then(Node::Stateless(vec![op]))
    }

    /// Keep elements matching `pred`, preserving order.
    pub fn filter<F>(self, pred: F) -> PCollection<T>
    where
        F: 'static + Send + Sync + Fn(&T) -> bool,
    {
        let op: Arc<dyn DynOp> = Arc::new(FilterOp::<T, F>(pred, PhantomData));
        self.then(Node::Stateless(vec![op]))
    }

    /// Attach a barrier: `local` runs once per partition, `merge` receives
    /// the local outputs in partition order.
    pub(crate) fn barrier<L, O, LF, MF>(self, local: LF, merge: MF) -> PCollection<O>
    where
        L: 'static + Send + Sync,
        O: ElemBound,
        LF: 'static + Send + Sync + Fn(Vec<T>) -> L,
        MF: 'static + Send + Sync + Fn(Vec<L>) -> Vec<O>,
    {
        let local: LocalFn = Arc::new(move |p: Partition| -> Result<Partition> {
            let v = downcast_vec::<T>(p, "barrier local")?;
            Ok(Box::new(vec![local(v)]))
        });
        let merge: MergeFn = Arc::new(move |parts: Vec<Partition>| -> Result<Partition> {
            let mut locals: Vec<L> = Vec::with_capacity(parts.len());
            for p in parts {
                locals.extend(downcast_vec::<L>(p, "barrier merge")?);
            }
            Ok(Box::new(merge(locals)))
        });
        self.then(Node::Barrier { local, merge })
    }

    pub fn collect_with(self, runner: &Runner) -> Result<Vec<T>> {
        runner.run_collect::<T>(&self.pipeline, self.id)
    }

    pub fn collect_seq(self) -> Result<Vec<T>> {
        self.collect_with(&Runner::sequential())
    }

    pub fn collect_par(self, threads: Option<usize>, partitions: Option<usize>) -> Result<Vec<T>> {
        let r = Runner {
            mode: ExecMode::Parallel {
                threads,
                partitions,
            },
            ..Default::default()
        };
        self.collect_with(&r)
    }

    /// First element of the collected output, if any.
    ///
    /// Meant for the single-valued results of matching and extrema.
    pub fn collect_first(self, runner: &Runner) -> Result<Option<T>> {
        Ok(self.collect_with(runner)?.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_then_filter_runs_in_order() -> Result<()> {
        let p = Pipeline::default();
        let out = from_vec(&p, vec![1u32, 2, 3, 4, 5])
            .map(|x: &u32| x * 10)
            .filter(|x: &u32| *x != 30)
            .collect_seq()?;
        assert_eq!(out, vec![10, 20, 40, 50]);
        Ok(())
    }

    #[test]
    fn collecting_twice_is_stable() -> Result<()> {
        let p = Pipeline::default();
        let col = from_vec(&p, vec!["a".to_string(), "b".to_string()]);
        let first = col.clone().collect_seq()?;
        let second = col.collect_par(Some(2), Some(2))?;
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn barrier_sees_partitions_in_order() -> Result<()> {
        let p = Pipeline::default();
        let out = from_vec(&p, (1u32..=9).collect::<Vec<_>>())
            .barrier(
                |chunk: Vec<u32>| chunk,
                |parts: Vec<Vec<u32>>| parts.into_iter().flatten().collect::<Vec<u32>>(),
            )
            .collect_par(Some(3), Some(3))?;
        assert_eq!(out, (1..=9).collect::<Vec<_>>());
        Ok(())
    }
}
