//! Tests for the graph store and degree analysis.

mod common;

use common::arb_graph;
use maguro_core::Graph;
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
fn star_degrees() {
    let star = Graph::from_edge_list(4, &[(0, 1), (0, 2), (0, 3)]);
    assert_eq!(star.degree(0), 3);
    assert_eq!(star.degree(3), 1);
    assert_eq!(star.max_degree(), 3);
    assert_eq!(star.min_degree(), 1);
}

#[rstest]
fn neighbours_are_reported_in_ascending_order() {
    let graph = Graph::from_edge_list(5, &[(2, 4), (2, 0), (2, 3)]);
    let neighbours: Vec<usize> = graph.neighbors(2).collect();
    assert_eq!(neighbours, vec![0, 3, 4]);
}

proptest! {
    #[test]
    fn adjacency_stays_symmetric(graph in arb_graph(6)) {
        let n = graph.vertex_count();
        for i in 0..n {
            for j in 0..n {
                prop_assert_eq!(graph.has_edge(i, j), graph.has_edge(j, i));
            }
        }
    }

    #[test]
    fn degree_matches_row_population(graph in arb_graph(6)) {
        let n = graph.vertex_count();
        for v in 0..n {
            let row_count = (0..n).filter(|&u| graph.has_edge(v, u)).count();
            prop_assert_eq!(graph.degree(v), row_count);
        }
    }

    #[test]
    fn extremum_degrees_bound_every_vertex(graph in arb_graph(6)) {
        for v in 0..graph.vertex_count() {
            prop_assert!(graph.degree(v) <= graph.max_degree());
            prop_assert!(graph.degree(v) >= graph.min_degree());
        }
    }
}
