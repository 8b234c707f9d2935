use crate::node::Node;
use crate::node_id::NodeId;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Container for a computation graph.
///
/// Cloning a `Pipeline` is cheap and yields a handle to the same graph, so
/// collections derived from one source can be collected independently.
pub struct Pipeline {
    pub(crate) inner: Arc<Mutex<PipelineInner>>,
}

pub struct PipelineInner {
    pub next_id: u64,
    pub nodes: HashMap<NodeId, Node>,
    pub edges: Vec<(NodeId, NodeId)>,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(PipelineInner {
                next_id: 0,
                nodes: HashMap::new(),
                edges: Vec::new(),
            })),
        }
    }
}

impl Clone for Pipeline {
    fn clone(&self) -> Self {
        Pipeline {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Pipeline {
    // Nodes are only ever inserted whole, so a poisoned lock still guards a
    // consistent graph.
    pub(crate) fn lock(&self) -> MutexGuard<'_, PipelineInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn insert_node(&self, node: Node) -> NodeId {
        let mut g = self.lock();
        let id = NodeId::new(g.next_id);
        g.next_id += 1;
        g.nodes.insert(id, node);
        id
    }

    pub(crate) fn connect(&self, from: NodeId, to: NodeId) {
        self.lock().edges.push((from, to));
    }

    /// Snapshot of `(nodes, edges)` taken under the lock.
    pub(crate) fn snapshot(&self) -> (HashMap<NodeId, Node>, Vec<(NodeId, NodeId)>) {
        let g = self.lock();
        (g.nodes.clone(), g.edges.clone())
    }

    /// Number of nodes attached so far.
    pub fn node_count(&self) -> usize {
        self.lock().nodes.len()
    }
}
