use std::collections::HashSet;

use log::{debug, Level};

use crate::error::{self, FlowError, Result};
use crate::ford_fulkerson;
use crate::min_cut;
use crate::report::{EdgeFlow, FlowReport};
use crate::residual_graph::{Capacity, NodeId, ResidualGraph};


/// A max flow problem as handed over by a caller: an edge list, node labels
/// and the two terminals.
///
/// Construction validates everything up front; [`FlowNetwork::solve`] works
/// on a private copy of the residual graph, so it can be called repeatedly.
#[derive(Debug, Clone)]
pub struct FlowNetwork {
    graph: ResidualGraph,
    source: NodeId,
    sink: NodeId,
    // distinct (from, to) pairs in first-seen order
    edge_order: Vec<(NodeId, NodeId)>,
    labels: Vec<String>,
}

impl FlowNetwork {
    /// Nodes are labelled by their ids.
    pub fn new(
        node_count: usize,
        source: NodeId,
        sink: NodeId,
        edges: Vec<(NodeId, NodeId, Capacity)>,
    ) -> Result<Self> {
        let labels = (0..node_count).map(|id| id.to_string()).collect();
        FlowNetwork::with_labels(labels, source, sink, edges)
    }

    /// One label per node, indexed by node id.
    pub fn with_labels(
        labels: Vec<String>,
        source: NodeId,
        sink: NodeId,
        edges: Vec<(NodeId, NodeId, Capacity)>,
    ) -> Result<Self> {
        let node_count = labels.len();
        error::check_terminals(node_count, source, sink)?;

        let mut seen = HashSet::with_capacity(edges.len());
        let edge_order = edges
            .iter()
            .map(|&(from, to, _)| (from, to))
            .filter(|pair| seen.insert(*pair))
            .collect();
        let graph = ResidualGraph::from_edges(node_count, edges)?;

        if log::log_enabled!(Level::Debug) {
            debug!("Flow network");
            debug!("Number of nodes: {}", graph.node_count());
            debug!("Number of edges: {}", graph.num_edges());
            debug!("Sum of capacities: {}", graph.total_capacity());
        }

        Ok(FlowNetwork {
            graph,
            source,
            sink,
            edge_order,
            labels,
        })
    }

    /// Labels `edges`' endpoints by position in `labels` and builds the network.
    pub fn from_labelled_edges(
        labels: Vec<String>,
        source: &str,
        sink: &str,
        edges: Vec<(&str, &str, Capacity)>,
    ) -> Result<Self> {
        let lookup = |label: &str| {
            labels
                .iter()
                .position(|known| known == label)
                .ok_or_else(|| FlowError::UnknownLabel(label.to_string()))
        };
        let source = lookup(source)?;
        let sink = lookup(sink)?;
        let edges = edges
            .into_iter()
            .map(|(from, to, capacity)| -> Result<(NodeId, NodeId, Capacity)> {
                Ok((lookup(from)?, lookup(to)?, capacity))
            })
            .collect::<Result<Vec<_>>>()?;
        FlowNetwork::with_labels(labels, source, sink, edges)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn get_source(&self) -> NodeId {
        self.source
    }

    pub fn get_sink(&self) -> NodeId {
        self.sink
    }

    pub fn get_label(&self, node: NodeId) -> &str {
        &self.labels[node]
    }

    /// The residual graph before any flow has been pushed.
    pub fn residual_graph(&self) -> &ResidualGraph {
        &self.graph
    }

    /// Runs max flow and then extracts the min cut from the saturated graph.
    pub fn solve(&self) -> Result<FlowReport> {
        let mut saturated = self.graph.clone();
        let outcome = ford_fulkerson::augment(&mut saturated, self.source, self.sink)?;
        let cut = min_cut::compute_min_cut(&saturated, self.source, self.sink)?;
        let cut_capacity = cut.capacity(&saturated).ok_or(FlowError::FlowOverflow)?;

        let edge_flows = self
            .edge_order
            .iter()
            .map(|&(from, to)| EdgeFlow {
                from,
                to,
                capacity: saturated.original_capacity(from, to),
                flow: ford_fulkerson::edge_flow(&saturated, from, to),
            })
            .collect();

        Ok(FlowReport {
            max_flow: outcome.max_flow,
            augmenting_paths: outcome.augmenting_paths,
            edge_flows,
            min_cut: cut,
            cut_capacity,
            labels: self.labels.clone(),
        })
    }
}
