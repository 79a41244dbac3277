//! Brute-force k-vertex-connectivity verification.
//!
//! The verifier enumerates every (k-1)-subset of vertices through a
//! backtracking search and delegates each candidate removal to the
//! breadth-first connectivity check. The first subset that disconnects the
//! graph ends the search. Enumeration visits C(n, k-1) subsets in the worst
//! case; the exponential cost is the documented contract of this engine, and
//! exact vertex connectivity via max-flow is out of scope.

use tracing::{debug, instrument};

use crate::{connectivity::RemovalSet, graph::Graph};

impl Graph {
    /// Returns whether removing any `k - 1` vertices leaves the remaining
    /// graph connected.
    ///
    /// Invalid requests report plain `false` with no partial work: `k == 0`,
    /// or a graph with at most `k` vertices (a graph cannot be more connected
    /// than it has excess vertices). Callers that need to distinguish "not
    /// k-connected" from "request invalid" must check those preconditions
    /// themselves.
    ///
    /// # Examples
    /// ```
    /// use maguro_core::Graph;
    ///
    /// // A 4-cycle survives any single removal, but not every pair.
    /// let square = Graph::from_edge_list(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]);
    /// assert!(square.is_k_connected(1));
    /// assert!(square.is_k_connected(2));
    /// assert!(!square.is_k_connected(3));
    /// ```
    #[must_use]
    #[instrument(
        name = "core.k_connectivity",
        skip(self),
        fields(vertices = self.vertex_count(), k = k),
    )]
    pub fn is_k_connected(&self, k: usize) -> bool {
        if k == 0 {
            debug!("k must be at least 1");
            return false;
        }
        if self.vertex_count() <= k {
            debug!("graph has too few vertices for the requested order");
            return false;
        }

        let mut removed = RemovalSet::new(self.vertex_count());
        if k == 1 {
            return self.is_connected_without(&removed);
        }
        self.survives_removals(&mut removed, 0, k - 1)
    }

    /// Backtracking subset enumeration: every vertex from `cursor` onward is
    /// tried as the next removal, with the mark restored on return. When the
    /// budget is spent the residual graph is checked; one disconnected
    /// residual refutes the whole search.
    fn survives_removals(&self, removed: &mut RemovalSet, cursor: usize, budget: usize) -> bool {
        if budget == 0 {
            return self.is_connected_without(removed);
        }
        // Too few vertices remain to spend the budget; the branch cannot
        // produce a counterexample.
        if self.vertex_count() - cursor < budget {
            return true;
        }
        for v in cursor..self.vertex_count() {
            removed.mark(v);
            let survives = self.survives_removals(removed, v + 1, budget - 1);
            removed.unmark(v);
            if !survives {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_order() {
        let graph = Graph::from_edge_list(2, &[(0, 1)]);
        assert!(!graph.is_k_connected(0));
    }

    #[test]
    fn rejects_order_at_or_above_vertex_count() {
        let triangle = Graph::from_edge_list(3, &[(0, 1), (1, 2), (2, 0)]);
        assert!(!triangle.is_k_connected(3));
        assert!(!triangle.is_k_connected(4));
    }

    #[test]
    fn search_leaves_no_marks_behind() {
        let square = Graph::from_edge_list(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]);
        let mut removed = RemovalSet::new(4);
        assert!(square.survives_removals(&mut removed, 0, 1));
        assert_eq!(removed.marked_count(), 0);
    }
}
