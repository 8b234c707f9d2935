//! Opaque handles for nodes in a [`Pipeline`](crate::pipeline::Pipeline) graph.
//!
//! Ids are handed out sequentially as transforms are attached. Only the
//! pipeline and the runner look inside them.

/// Identifier of one node in a pipeline graph.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct NodeId(u64);

impl NodeId {
    pub(crate) fn new(v: u64) -> Self {
        Self(v)
    }
}
