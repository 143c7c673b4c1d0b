use thiserror::Error;

use crate::residual_graph::{Capacity, NodeId};


pub type Result<T> = std::result::Result<T, FlowError>;

/// Everything a caller can get wrong when handing a network to the solver.
///
/// Broken internal bookkeeping is not represented here; that panics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("node {node} is out of range for a graph with {node_count} nodes")]
    NodeOutOfRange { node: NodeId, node_count: usize },

    #[error("source and sink must differ (both are node {0})")]
    SourceIsSink(NodeId),

    #[error("edge {from}->{to} has negative capacity {capacity}")]
    NegativeCapacity {
        from: NodeId,
        to: NodeId,
        capacity: Capacity,
    },

    #[error("expected {expected} node labels, got {got}")]
    LabelCountMismatch { expected: usize, got: usize },

    #[error("no node is labelled {0:?}")]
    UnknownLabel(String),

    #[error("capacity of edge {from}->{to} together with its parallel or reverse edges exceeds the representable capacity range")]
    CapacityOverflow { from: NodeId, to: NodeId },

    #[error("total flow exceeds the representable capacity range")]
    FlowOverflow,

    #[error("the residual graph still has one or more augmenting paths; minimum cut is undefined")]
    AugmentingPathRemains,
}

/// Checks that `source` and `sink` are distinct nodes of an `node_count`-node graph.
pub(crate) fn check_terminals(node_count: usize, source: NodeId, sink: NodeId) -> Result<()> {
    check_node(node_count, source)?;
    check_node(node_count, sink)?;
    if source == sink {
        return Err(FlowError::SourceIsSink(source));
    }
    Ok(())
}

pub(crate) fn check_node(node_count: usize, node: NodeId) -> Result<()> {
    if node >= node_count {
        return Err(FlowError::NodeOutOfRange { node, node_count });
    }
    Ok(())
}
