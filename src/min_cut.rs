use log::info;

use crate::error::{self, FlowError, Result};
use crate::path_search;
use crate::residual_graph::{self, Capacity, NodeId, ResidualGraph};


/// The two sides of a minimum s-t cut, each sorted by node id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MinCut {
    pub source_side: Vec<NodeId>,
    pub sink_side: Vec<NodeId>,
}

impl MinCut {
    /// Input edges going from the source side to the sink side.
    pub fn crossing_edges(&self, graph: &ResidualGraph) -> Vec<(NodeId, NodeId)> {
        let mut crossing = Vec::new();
        for &from in &self.source_side {
            for &to in &self.sink_side {
                if graph.original_capacity(from, to) > 0 {
                    crossing.push((from, to));
                }
            }
        }
        crossing
    }

    /// Sum of original capacities of the crossing edges, or `None` if it does not fit in a `Capacity`.
    pub fn capacity(&self, graph: &ResidualGraph) -> Option<Capacity> {
        residual_graph::checked_sum(
            self.crossing_edges(graph)
                .into_iter()
                .map(|(from, to)| graph.original_capacity(from, to)),
        )
    }
}

/// Reads the minimum cut off a saturated residual graph.
///
/// Fails with [`FlowError::AugmentingPathRemains`] if the sink is still
/// reachable, i.e. max flow has not been run to completion on `graph`.
pub fn compute_min_cut(graph: &ResidualGraph, source: NodeId, sink: NodeId) -> Result<MinCut> {
    error::check_terminals(graph.node_count(), source, sink)?;

    let (sink_reachable, partition) = path_search::reachability(graph, source, sink);
    if sink_reachable {
        return Err(FlowError::AugmentingPathRemains);
    }

    info!(
        "Min cut has {} nodes on the source side and {} on the sink side",
        partition.reachable.len(),
        partition.unreachable.len()
    );

    Ok(MinCut {
        source_side: partition.reachable,
        sink_side: partition.unreachable,
    })
}
