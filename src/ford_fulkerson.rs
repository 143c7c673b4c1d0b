use std::time::Instant;

use log::{debug, info, Level};

use crate::error::{self, FlowError, Result};
use crate::path_search::{self, AugmentingPath};
use crate::residual_graph::{Capacity, NodeId, ResidualGraph};
use crate::utils;


/// What a completed max flow run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxFlowOutcome {
    pub max_flow: Capacity,
    pub augmenting_paths: usize,
}

/// Pushes flow along shortest augmenting paths until none is left (Edmonds-Karp).
///
/// The graph is left saturated, which is the state [`crate::min_cut::compute_min_cut`]
/// expects. Returns the maximum flow value.
pub fn compute_max_flow(graph: &mut ResidualGraph, source: NodeId, sink: NodeId) -> Result<Capacity> {
    Ok(augment(graph, source, sink)?.max_flow)
}

/// Same as [`compute_max_flow`], also reporting how many augmenting paths were used.
pub fn augment(graph: &mut ResidualGraph, source: NodeId, sink: NodeId) -> Result<MaxFlowOutcome> {
    error::check_terminals(graph.node_count(), source, sink)?;

    let profiling_start = Instant::now();
    let mut path = AugmentingPath::new(graph.node_count());
    let mut max_flow: Capacity = 0;
    let mut augmenting_paths = 0;

    while path_search::find_augmenting_path(graph, source, sink, &mut path) {
        let bottleneck = bottleneck(graph, &path, source, sink);
        push_flow(graph, &mut path, source, sink, bottleneck);

        max_flow = max_flow
            .checked_add(bottleneck)
            .ok_or(FlowError::FlowOverflow)?;
        augmenting_paths += 1;

        if log::log_enabled!(Level::Debug) {
            debug!(
                "Augmenting path {} carries {} (total {})",
                augmenting_paths, bottleneck, max_flow
            );
        }
    }

    let profiling_end = Instant::now();
    info!(
        "Max flow {} from {} to {} over {} augmenting paths in {:.10}s",
        max_flow,
        source,
        sink,
        augmenting_paths,
        utils::get_duration(profiling_start, profiling_end)
    );

    Ok(MaxFlowOutcome { max_flow, augmenting_paths })
}

/// Flow carried by the input edge `from->to`: original minus residual capacity.
///
/// Pairs with capacity in both directions can carry net flow the other way,
/// which shows up here as zero rather than a negative amount.
pub fn edge_flow(graph: &ResidualGraph, from: NodeId, to: NodeId) -> Capacity {
    let edge = graph.get_edge(from, to);
    (edge.get_original() - edge.get_residual()).max(0)
}

// Smallest residual capacity on the parent chain from `sink` back to `source`.
fn bottleneck(graph: &ResidualGraph, path: &AugmentingPath, source: NodeId, sink: NodeId) -> Capacity {
    let mut min_flow_in_path = Capacity::MAX;
    let mut node_id = sink;
    while node_id != source {
        let parent_id = parent_of(path, node_id);
        min_flow_in_path = min_flow_in_path.min(graph.residual_capacity(parent_id, node_id));
        node_id = parent_id;
    }
    min_flow_in_path
}

// Moves `amount` from every path edge onto its back edge and clears the path.
fn push_flow(
    graph: &mut ResidualGraph,
    path: &mut AugmentingPath,
    source: NodeId,
    sink: NodeId,
    amount: Capacity,
) {
    let mut node_id = sink;
    while node_id != source {
        let parent_id = parent_of(path, node_id);
        path.reset_parent(node_id);
        graph.adjust_residual(parent_id, node_id, -amount);
        graph.adjust_residual(node_id, parent_id, amount);
        node_id = parent_id;
    }
}

fn parent_of(path: &AugmentingPath, node_id: NodeId) -> NodeId {
    match path.get_parent(node_id) {
        Some(parent_id) => parent_id,
        None => panic!("node {} is on the augmenting path but has no parent", node_id),
    }
}
