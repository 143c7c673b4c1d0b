use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use log::info;

use crate::error::FlowError;
use crate::flow_network::FlowNetwork;
use crate::report::FlowReport;
use crate::residual_graph::{Capacity, NodeId};


impl From<FlowError> for PyErr {
    fn from(err: FlowError) -> PyErr {
        match err {
            FlowError::AugmentingPathRemains | FlowError::FlowOverflow => {
                PyRuntimeError::new_err(err.to_string())
            }
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}

#[pyclass]
pub struct MaxFlowMinCut {
    network: FlowNetwork,
    // filled by the first call that needs a solution
    report: Option<FlowReport>,
}

#[pymethods]
impl MaxFlowMinCut {
    #[new]
    #[pyo3(signature = (node_count, source_node_id, sink_node_id, edges_raw, labels=None))]
    fn new(
        node_count: usize,
        source_node_id: NodeId,
        sink_node_id: NodeId,
        edges_raw: Vec<((NodeId, NodeId), Capacity)>,
        labels: Option<Vec<String>>,
    ) -> PyResult<Self> {
        let edges = edges_raw
            .into_iter()
            .map(|((from, to), capacity)| (from, to, capacity))
            .collect();
        let network = match labels {
            Some(labels) if labels.len() != node_count => {
                return Err(FlowError::LabelCountMismatch {
                    expected: node_count,
                    got: labels.len(),
                }
                .into());
            }
            Some(labels) => FlowNetwork::with_labels(labels, source_node_id, sink_node_id, edges)?,
            None => FlowNetwork::new(node_count, source_node_id, sink_node_id, edges)?,
        };
        Ok(MaxFlowMinCut { network, report: None })
    }

    fn max_flow(&mut self) -> PyResult<Capacity> {
        Ok(self.solved()?.max_flow)
    }

    /// Flow on every input edge, as `((from, to), flow)`.
    fn edge_flows(&mut self) -> PyResult<Vec<((NodeId, NodeId), Capacity)>> {
        let py_edges = self
            .solved()?
            .edge_flows
            .iter()
            .map(|edge| ((edge.from, edge.to), edge.flow))
            .collect();
        Ok(py_edges)
    }

    /// `(source_side, sink_side)` node ids.
    fn min_cut(&mut self) -> PyResult<(Vec<NodeId>, Vec<NodeId>)> {
        let cut = &self.solved()?.min_cut;
        Ok((cut.source_side.clone(), cut.sink_side.clone()))
    }

    fn report(&mut self) -> PyResult<String> {
        Ok(self.solved()?.to_string())
    }
}

// not exposed to Python
impl MaxFlowMinCut {
    fn solved(&mut self) -> PyResult<&FlowReport> {
        let report = match self.report.take() {
            Some(report) => report,
            None => {
                info!(
                    "Solving max flow from {} to {} on {} nodes",
                    self.network.get_label(self.network.get_source()),
                    self.network.get_label(self.network.get_sink()),
                    self.network.node_count()
                );
                self.network.solve()?
            }
        };
        Ok(&*self.report.insert(report))
    }
}

#[pymodule]
#[pyo3(name = "_flowcut_rs")]
pub fn flowcut_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    pyo3_log::init();  // send Rust logs to Python logger
    m.add_class::<MaxFlowMinCut>()?;
    Ok(())
}
