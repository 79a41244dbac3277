//! Shared fixtures for maguro-core integration tests.

use maguro_core::Graph;
use proptest::prelude::*;

/// Strategy producing small graphs with arbitrary symmetric edge sets.
///
/// Self-loops are filtered out so generated graphs satisfy the simple-graph
/// invariants the loader maintains for well-formed input.
pub fn arb_graph(max_vertices: usize) -> impl Strategy<Value = Graph> {
    (0..=max_vertices).prop_flat_map(|n| {
        let endpoint = 0..n.max(1);
        proptest::collection::vec((endpoint.clone(), endpoint), 0..=n * n).prop_map(
            move |pairs| {
                let edges: Vec<(usize, usize)> =
                    pairs.into_iter().filter(|(u, v)| u != v).collect();
                Graph::from_edge_list(n, &edges)
            },
        )
    })
}

/// Builds the cycle graph on `n` vertices (`n >= 3`).
pub fn cycle(n: usize) -> Graph {
    assert!(n >= 3, "a cycle needs at least three vertices");
    let edges: Vec<(usize, usize)> = (0..n).map(|v| (v, (v + 1) % n)).collect();
    Graph::from_edge_list(n, &edges)
}
