//! Tests for the breadth-first connectivity checker.

mod common;

use common::{arb_graph, cycle};
use maguro_core::{Graph, RemovalSet};
use proptest::prelude::*;
use rstest::rstest;

/// Reference connectivity via a transitive-closure computation, kept
/// independent of the breadth-first implementation under test.
fn reference_connected(graph: &Graph) -> bool {
    let n = graph.vertex_count();
    if n == 0 {
        return false;
    }
    let mut reach = vec![vec![false; n]; n];
    for (i, row) in reach.iter_mut().enumerate() {
        row[i] = true;
        for (j, cell) in row.iter_mut().enumerate() {
            if graph.has_edge(i, j) {
                *cell = true;
            }
        }
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if reach[i][k] && reach[k][j] {
                    reach[i][j] = true;
                }
            }
        }
    }
    reach.iter().all(|row| row.iter().all(|&cell| cell))
}

#[rstest]
fn connected_and_disconnected_shapes() {
    assert!(cycle(4).is_connected());
    assert!(Graph::from_edge_list(3, &[(0, 1), (1, 2)]).is_connected());
    // Two components: an edge and an isolated vertex.
    assert!(!Graph::from_edge_list(3, &[(0, 1)]).is_connected());
    // No edges at all.
    assert!(!Graph::with_vertices(2).is_connected());
}

#[rstest]
fn isolated_vertex_disconnects_any_larger_graph() {
    let graph = Graph::from_edge_list(4, &[(0, 1), (1, 2), (2, 0)]);
    assert_eq!(graph.degree(3), 0);
    assert!(!graph.is_connected());
}

#[rstest]
fn removal_restricts_the_traversal() {
    // 0 - 1 - 2 with a detour 0 - 3 - 2: removing vertex 1 leaves the
    // detour, removing 1 and 3 splits the graph.
    let graph = Graph::from_edge_list(4, &[(0, 1), (1, 2), (0, 3), (3, 2)]);
    let mut removed = RemovalSet::new(4);
    removed.mark(1);
    assert!(graph.is_connected_without(&removed));
    removed.mark(3);
    assert!(!graph.is_connected_without(&removed));
}

#[rstest]
fn removed_root_is_skipped_when_picking_the_start_vertex() {
    let graph = Graph::from_edge_list(3, &[(1, 2)]);
    let mut removed = RemovalSet::new(3);
    removed.mark(0);
    assert!(graph.is_connected_without(&removed));
}

proptest! {
    #[test]
    fn agrees_with_transitive_closure(graph in arb_graph(6)) {
        prop_assert_eq!(graph.is_connected(), reference_connected(&graph));
    }
}
