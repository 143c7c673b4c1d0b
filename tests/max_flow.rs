use flowcut::{
    augment, compute_max_flow, compute_min_cut, edge_flow, Capacity, FlowError, FlowNetwork,
    MaxFlowOutcome, NodeId, ResidualGraph,
};
use pathfinding::directed::edmonds_karp::{edmonds_karp, SparseCapacity};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// s=0, w=1, x=2, z=3, y=4, t=5
const LABELS: [&str; 6] = ["s", "w", "x", "z", "y", "t"];
const EDGES: [(NodeId, NodeId, Capacity); 11] = [
    (0, 1, 4),
    (0, 2, 7),
    (0, 3, 10),
    (1, 4, 2),
    (1, 5, 10),
    (2, 1, 2),
    (2, 3, 2),
    (2, 4, 10),
    (3, 4, 2),
    (3, 5, 6),
    (4, 5, 7),
];

fn six_node_graph() -> ResidualGraph {
    ResidualGraph::from_edges(6, EDGES).unwrap()
}

fn random_edges(rng: &mut StdRng, node_count: usize, density: f64, antiparallel: bool) -> Vec<(NodeId, NodeId, Capacity)> {
    let mut edges = Vec::new();
    for from in 0..node_count {
        for to in 0..node_count {
            if from == to || !rng.gen_bool(density) {
                continue;
            }
            if !antiparallel && edges.iter().any(|&(u, v, _)| u == to && v == from) {
                continue;
            }
            edges.push((from, to, rng.gen_range(1..=20)));
        }
    }
    edges
}

fn assert_valid_flow(original: &ResidualGraph, saturated: &ResidualGraph, source: NodeId, sink: NodeId, max_flow: Capacity) {
    let node_count = original.node_count();
    for (from, to, edge) in original.edges() {
        let flow = edge_flow(saturated, from, to);
        assert!(flow >= 0 && flow <= edge.get_original(), "edge {}->{} carries {}", from, to, flow);
    }
    for node in (0..node_count).filter(|&node| node != source && node != sink) {
        let inflow: Capacity = (0..node_count).map(|from| edge_flow(saturated, from, node)).sum();
        let outflow: Capacity = (0..node_count).map(|to| edge_flow(saturated, node, to)).sum();
        assert_eq!(inflow, outflow, "flow is not conserved at node {}", node);
    }
    let into_sink: Capacity = (0..node_count).map(|from| edge_flow(saturated, from, sink)).sum();
    let out_of_sink: Capacity = (0..node_count).map(|to| edge_flow(saturated, sink, to)).sum();
    assert_eq!(into_sink - out_of_sink, max_flow);
    assert!(original.out_capacity(source).map_or(true, |capacity| max_flow <= capacity));
    assert!(original.in_capacity(sink).map_or(true, |capacity| max_flow <= capacity));
}

#[test]
fn six_node_network_max_flow() {
    let mut graph = six_node_graph();
    let outcome = augment(&mut graph, 0, 5).unwrap();
    assert_eq!(outcome, MaxFlowOutcome { max_flow: 19, augmenting_paths: 5 });

    let flows: Vec<Capacity> = EDGES.iter().map(|&(from, to, _)| edge_flow(&graph, from, to)).collect();
    assert_eq!(flows, vec![4, 7, 8, 0, 6, 2, 0, 5, 2, 6, 7]);
    assert_valid_flow(&six_node_graph(), &graph, 0, 5, 19);
}

#[test]
fn six_node_network_min_cut() {
    let mut graph = six_node_graph();
    let max_flow = compute_max_flow(&mut graph, 0, 5).unwrap();
    let cut = compute_min_cut(&graph, 0, 5).unwrap();

    assert_eq!(cut.source_side, vec![0, 3]);
    assert_eq!(cut.sink_side, vec![1, 2, 4, 5]);
    assert_eq!(cut.crossing_edges(&graph), vec![(0, 1), (0, 2), (3, 4), (3, 5)]);
    assert_eq!(cut.capacity(&graph), Some(max_flow));
    assert_eq!(compute_min_cut(&graph, 0, 5).unwrap(), cut);
}

#[test]
fn six_node_network_report() {
    let labels = LABELS.iter().map(|label| label.to_string()).collect();
    let network = FlowNetwork::with_labels(labels, 0, 5, EDGES.to_vec()).unwrap();
    let report = network.solve().unwrap();

    assert_eq!(report.max_flow, 19);
    assert_eq!(report.cut_capacity, 19);
    assert_eq!(report.flow_between(0, 3), Some(8));
    assert_eq!(report.source_side_labels(), vec!["s", "z"]);
    assert_eq!(report.sink_side_labels(), vec!["w", "x", "y", "t"]);

    let rendered = report.to_string();
    assert!(rendered.starts_with("Max flow: 19\n"));
    assert!(rendered.contains("Flow through s->z: 8\n"));
    assert!(rendered.contains("Flow through x->z: 0\n"));
    assert!(rendered.ends_with("Nodes at the sink side: w x y t"));
}

#[test]
fn min_cut_before_max_flow_is_an_error() {
    let graph = six_node_graph();
    assert_eq!(compute_min_cut(&graph, 0, 5), Err(FlowError::AugmentingPathRemains));
}

#[test]
fn disconnected_terminals_carry_no_flow() {
    let mut graph = ResidualGraph::from_edges(4, vec![(1, 2, 3), (2, 3, 3)]).unwrap();
    assert_eq!(compute_max_flow(&mut graph, 0, 3).unwrap(), 0);
    let cut = compute_min_cut(&graph, 0, 3).unwrap();
    assert_eq!(cut.source_side, vec![0]);
    assert_eq!(cut.sink_side, vec![1, 2, 3]);
    assert_eq!(cut.capacity(&graph), Some(0));
}

#[test]
fn source_side_holds_everything_reachable_when_sink_is_cut_off() {
    let mut graph = ResidualGraph::from_edges(4, vec![(0, 1, 3), (1, 2, 3)]).unwrap();
    assert_eq!(compute_max_flow(&mut graph, 0, 3).unwrap(), 0);
    let cut = compute_min_cut(&graph, 0, 3).unwrap();
    assert_eq!(cut.source_side, vec![0, 1, 2]);
    assert_eq!(cut.sink_side, vec![3]);
}

#[test]
fn huge_capacities_do_not_overflow_the_bottleneck() {
    let big = Capacity::MAX / 2;
    let mut graph = ResidualGraph::from_edges(3, vec![(0, 1, big), (1, 2, big)]).unwrap();
    assert_eq!(compute_max_flow(&mut graph, 0, 2).unwrap(), big);
}

#[test]
fn total_flow_overflow_is_reported() {
    let big = Capacity::MAX / 2 + 1;
    let mut graph =
        ResidualGraph::from_edges(4, vec![(0, 1, big), (0, 2, big), (1, 3, big), (2, 3, big)]).unwrap();
    assert_eq!(compute_max_flow(&mut graph, 0, 3), Err(FlowError::FlowOverflow));
}

#[test]
fn matches_pathfinding_on_random_graphs() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for round in 0..200 {
        let node_count = rng.gen_range(2..=12);
        let edges = random_edges(&mut rng, node_count, 0.35, false);
        let source = 0;
        let sink = node_count - 1;

        let vertices: Vec<NodeId> = (0..node_count).collect();
        let caps: Vec<((NodeId, NodeId), Capacity)> =
            edges.iter().map(|&(from, to, capacity)| ((from, to), capacity)).collect();
        let (_, expected, _) = edmonds_karp::<_, _, _, SparseCapacity<_>>(&vertices, &source, &sink, caps);

        let original = ResidualGraph::from_edges(node_count, edges).unwrap();
        let mut graph = original.clone();
        let max_flow = compute_max_flow(&mut graph, source, sink).unwrap();
        assert_eq!(max_flow, expected, "round {}", round);
        assert_valid_flow(&original, &graph, source, sink, max_flow);
    }
}

#[test]
fn cut_capacity_equals_max_flow_with_antiparallel_edges() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let node_count = rng.gen_range(2..=10);
        let edges = random_edges(&mut rng, node_count, 0.4, true);
        let source = rng.gen_range(0..node_count);
        let sink = (source + rng.gen_range(1..node_count)) % node_count;

        let original = ResidualGraph::from_edges(node_count, edges).unwrap();
        let mut graph = original.clone();
        let max_flow = compute_max_flow(&mut graph, source, sink).unwrap();
        let cut = compute_min_cut(&graph, source, sink).unwrap();

        assert!(cut.source_side.contains(&source));
        assert!(cut.sink_side.contains(&sink));
        assert_eq!(cut.source_side.len() + cut.sink_side.len(), node_count);
        assert_eq!(cut.capacity(&original), Some(max_flow));
        assert_eq!(compute_min_cut(&graph, source, sink).unwrap(), cut);
        assert_valid_flow(&original, &graph, source, sink, max_flow);
    }
}

#[test]
fn same_input_same_answer() {
    let mut rng = StdRng::seed_from_u64(7);
    let edges = random_edges(&mut rng, 9, 0.5, true);
    let mut first = ResidualGraph::from_edges(9, edges.clone()).unwrap();
    let mut second = ResidualGraph::from_edges(9, edges).unwrap();
    assert_eq!(
        compute_max_flow(&mut first, 0, 8).unwrap(),
        compute_max_flow(&mut second, 0, 8).unwrap()
    );
    assert_eq!(first, second);
}
