use std::fmt;

use crate::min_cut::MinCut;
use crate::residual_graph::{Capacity, NodeId};


/// Flow realized on one input edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeFlow {
    pub from: NodeId,
    pub to: NodeId,
    pub capacity: Capacity,
    pub flow: Capacity,
}

/// Everything a solved [`crate::FlowNetwork`] has to say, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowReport {
    pub max_flow: Capacity,
    pub augmenting_paths: usize,
    /// In the order the edges were first given.
    pub edge_flows: Vec<EdgeFlow>,
    pub min_cut: MinCut,
    pub cut_capacity: Capacity,
    pub labels: Vec<String>,
}

impl FlowReport {
    pub fn get_label(&self, node: NodeId) -> &str {
        &self.labels[node]
    }

    pub fn source_side_labels(&self) -> Vec<&str> {
        self.min_cut.source_side.iter().map(|&node| self.get_label(node)).collect()
    }

    pub fn sink_side_labels(&self) -> Vec<&str> {
        self.min_cut.sink_side.iter().map(|&node| self.get_label(node)).collect()
    }

    pub fn flow_between(&self, from: NodeId, to: NodeId) -> Option<Capacity> {
        self.edge_flows
            .iter()
            .find(|edge| edge.from == from && edge.to == to)
            .map(|edge| edge.flow)
    }
}

impl fmt::Display for FlowReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Max flow: {}", self.max_flow)?;
        writeln!(f, "Flows through all the edges that sum up to the maximum flow:")?;
        for edge in &self.edge_flows {
            writeln!(
                f,
                "Flow through {}->{}: {}",
                self.get_label(edge.from),
                self.get_label(edge.to),
                edge.flow
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Minimum s-t cut (capacity {})", self.cut_capacity)?;
        writeln!(f, "Nodes at the source side: {}", self.source_side_labels().join(" "))?;
        write!(f, "Nodes at the sink side: {}", self.sink_side_labels().join(" "))
    }
}
