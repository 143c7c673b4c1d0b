use std::collections::VecDeque;

use crate::residual_graph::{NodeId, ResidualGraph};


/// Parent pointers for one augmenting path, one slot per node id.
///
/// Allocated once per max flow run and reused by every search. Consumers
/// clear the slots they walk with [`AugmentingPath::reset_parent`].
#[derive(Debug, Clone)]
pub struct AugmentingPath {
    parents: Vec<Option<NodeId>>,
}

impl AugmentingPath {
    pub fn new(node_count: usize) -> Self {
        AugmentingPath {
            parents: vec![None; node_count],
        }
    }

    pub fn get_parent(&self, id: NodeId) -> Option<NodeId> {
        self.parents[id]
    }

    pub fn set_parent(&mut self, id: NodeId, parent: NodeId) {
        self.parents[id] = Some(parent);
    }

    pub fn reset_parent(&mut self, id: NodeId) {
        self.parents[id] = None;
    }
}

/// Nodes split by reachability from the source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reachability {
    pub reachable: Vec<NodeId>,
    pub unreachable: Vec<NodeId>,
}

/// Breadth-first search from `source` over edges with positive residual capacity.
///
/// Each node is settled by the first edge that discovers it, so a recorded
/// parent chain is a shortest path in edge count. When `parents` is given,
/// discovered nodes get their parent recorded. When `partition` is given,
/// every node id is appended, in increasing order, to its reachable or
/// unreachable list regardless of the outcome.
///
/// Returns whether `sink` was reached. Callers must pass `source != sink`.
pub fn breadth_first_search(
    graph: &ResidualGraph,
    source: NodeId,
    sink: NodeId,
    mut parents: Option<&mut AugmentingPath>,
    partition: Option<&mut Reachability>,
) -> bool {
    let node_count = graph.node_count();
    let mut visited = vec![false; node_count];
    let mut queue = VecDeque::with_capacity(node_count);

    visited[source] = true;
    queue.push_back(source);
    while let Some(node_id) = queue.pop_front() {
        for next_id in 0..node_count {
            if visited[next_id] || graph.residual_capacity(node_id, next_id) <= 0 {
                continue;
            }
            visited[next_id] = true;
            if let Some(parents) = parents.as_deref_mut() {
                parents.set_parent(next_id, node_id);
            }
            queue.push_back(next_id);
        }
    }

    if let Some(partition) = partition {
        for (node_id, seen) in visited.iter().enumerate() {
            if *seen {
                partition.reachable.push(node_id);
            } else {
                partition.unreachable.push(node_id);
            }
        }
    }

    visited[sink]
}

/// Fills `path` with parent pointers and reports whether an augmenting path exists.
pub fn find_augmenting_path(
    graph: &ResidualGraph,
    source: NodeId,
    sink: NodeId,
    path: &mut AugmentingPath,
) -> bool {
    breadth_first_search(graph, source, sink, Some(path), None)
}

/// Splits the nodes by reachability from `source`; the flag is whether `sink` was reached.
pub fn reachability(graph: &ResidualGraph, source: NodeId, sink: NodeId) -> (bool, Reachability) {
    let mut partition = Reachability::default();
    let reached = breadth_first_search(graph, source, sink, None, Some(&mut partition));
    (reached, partition)
}
