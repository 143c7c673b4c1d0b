//! Maximum flow and minimum s-t cut over integer-capacity networks.
//!
//! The core pushes flow along shortest augmenting paths (Edmonds-Karp) on a
//! dense residual graph, then reads the minimum cut off the saturated graph:
//!
//! ```
//! use flowcut::{compute_max_flow, compute_min_cut, edge_flow, ResidualGraph};
//!
//! let mut graph = ResidualGraph::from_edges(3, vec![(0, 1, 4), (1, 2, 3)]).unwrap();
//! assert_eq!(compute_max_flow(&mut graph, 0, 2).unwrap(), 3);
//! assert_eq!(edge_flow(&graph, 0, 1), 3);
//!
//! let cut = compute_min_cut(&graph, 0, 2).unwrap();
//! assert_eq!(cut.source_side, vec![0, 1]);
//! assert_eq!(cut.sink_side, vec![2]);
//! ```
//!
//! [`FlowNetwork`] wraps the same steps for callers holding a labelled edge
//! list and produces a printable [`FlowReport`]. With the `python` feature the
//! crate also builds the `_flowcut_rs` extension module.

mod error;
pub mod flow_network;
pub mod ford_fulkerson;
pub mod min_cut;
pub mod path_search;
pub mod report;
pub mod residual_graph;
mod utils;

#[cfg(feature = "python")]
mod python;

pub use error::{FlowError, Result};
pub use flow_network::FlowNetwork;
pub use ford_fulkerson::{augment, compute_max_flow, edge_flow, MaxFlowOutcome};
pub use min_cut::{compute_min_cut, MinCut};
pub use path_search::{AugmentingPath, Reachability};
pub use report::{EdgeFlow, FlowReport};
pub use residual_graph::{Capacity, NodeId, ResidualEdge, ResidualGraph};
