use crate::error::{self, FlowError, Result};


pub type NodeId = usize;

/// Integer capacity. Signed so that bad input can be detected; stored values are never negative.
pub type Capacity = i64;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResidualEdge {
    residual: Capacity,
    original: Capacity,
}

impl ResidualEdge {
    pub fn get_residual(&self) -> Capacity {
        self.residual
    }

    pub fn get_original(&self) -> Capacity {
        self.original
    }
}

/// Dense residual network over nodes `0..node_count`.
///
/// Every ordered pair has an entry; a pair with zero original and zero
/// residual capacity is simply not an edge. Reverse entries start at zero and
/// only grow as flow is pushed back onto them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResidualGraph {
    node_count: usize,
    // row-major, `from * node_count + to`
    edges: Vec<ResidualEdge>,
}

impl ResidualGraph {
    pub fn new(node_count: usize) -> Self {
        ResidualGraph {
            node_count,
            edges: vec![ResidualEdge::default(); node_count * node_count],
        }
    }

    /// Builds a graph from `(from, to, capacity)` triples.
    ///
    /// Repeated pairs are merged by adding their capacities.
    pub fn from_edges<I>(node_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (NodeId, NodeId, Capacity)>,
    {
        let mut graph = ResidualGraph::new(node_count);
        for (from, to, capacity) in edges {
            if capacity < 0 {
                return Err(FlowError::NegativeCapacity { from, to, capacity });
            }
            let merged = graph
                .original_capacity_checked(from, to)?
                .checked_add(capacity)
                .ok_or(FlowError::CapacityOverflow { from, to })?;
            graph.set_capacity(from, to, merged)?;
        }
        Ok(graph)
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Sets the capacity of the input edge `from->to`. Meant for construction only.
    pub fn set_capacity(&mut self, from: NodeId, to: NodeId, capacity: Capacity) -> Result<()> {
        error::check_node(self.node_count, from)?;
        error::check_node(self.node_count, to)?;
        if capacity < 0 {
            return Err(FlowError::NegativeCapacity { from, to, capacity });
        }
        // a pair's two residuals always sum to its two original capacities
        if capacity.checked_add(self.original_capacity(to, from)).is_none() {
            return Err(FlowError::CapacityOverflow { from, to });
        }
        let index = self.index(from, to);
        self.edges[index] = ResidualEdge {
            residual: capacity,
            original: capacity,
        };
        Ok(())
    }

    pub fn get_edge(&self, from: NodeId, to: NodeId) -> &ResidualEdge {
        &self.edges[self.index(from, to)]
    }

    pub fn residual_capacity(&self, from: NodeId, to: NodeId) -> Capacity {
        self.get_edge(from, to).residual
    }

    pub fn original_capacity(&self, from: NodeId, to: NodeId) -> Capacity {
        self.get_edge(from, to).original
    }

    /// Adds `delta` to the residual capacity of `from->to`.
    ///
    /// # Panics
    ///
    /// If the result would be negative or overflow. Callers only ever move a
    /// bottleneck amount that they have just measured, so either case is a bug.
    pub fn adjust_residual(&mut self, from: NodeId, to: NodeId, delta: Capacity) {
        let index = self.index(from, to);
        let edge = &mut self.edges[index];
        match edge.residual.checked_add(delta) {
            Some(updated) if updated >= 0 => edge.residual = updated,
            _ => panic!(
                "residual capacity of {}->{} is {}; adjusting it by {} breaks the residual graph",
                from, to, edge.residual, delta
            ),
        }
    }

    /// Input edges (pairs with nonzero original capacity) in row-major order.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, &ResidualEdge)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter(|(_, edge)| edge.original > 0)
            .map(move |(index, edge)| (index / self.node_count, index % self.node_count, edge))
    }

    pub fn num_edges(&self) -> usize {
        self.edges().count()
    }

    /// Sum of original capacities leaving `node`, or `None` if it does not fit in a `Capacity`.
    pub fn out_capacity(&self, node: NodeId) -> Option<Capacity> {
        checked_sum((0..self.node_count).map(|to| self.original_capacity(node, to)))
    }

    /// Sum of original capacities entering `node`, or `None` if it does not fit in a `Capacity`.
    pub fn in_capacity(&self, node: NodeId) -> Option<Capacity> {
        checked_sum((0..self.node_count).map(|from| self.original_capacity(from, node)))
    }

    /// Sum of all original capacities, widened so it cannot overflow.
    pub fn total_capacity(&self) -> i128 {
        self.edges().map(|(_, _, edge)| i128::from(edge.original)).sum()
    }

    fn original_capacity_checked(&self, from: NodeId, to: NodeId) -> Result<Capacity> {
        error::check_node(self.node_count, from)?;
        error::check_node(self.node_count, to)?;
        Ok(self.original_capacity(from, to))
    }

    fn index(&self, from: NodeId, to: NodeId) -> usize {
        assert!(
            from < self.node_count && to < self.node_count,
            "edge {}->{} outside a graph with {} nodes",
            from, to, self.node_count
        );
        from * self.node_count + to
    }
}

pub(crate) fn checked_sum<I>(capacities: I) -> Option<Capacity>
where
    I: IntoIterator<Item = Capacity>,
{
    capacities
        .into_iter()
        .try_fold(0 as Capacity, |acc, capacity| acc.checked_add(capacity))
}
