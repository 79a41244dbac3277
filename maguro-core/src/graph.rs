//! Undirected graph storage backed by a flat adjacency matrix.
//!
//! The matrix is a single row-major bit buffer addressed by `i * n + j`, so
//! construction and teardown are atomic with the [`Graph`] value itself; no
//! per-row allocation exists to leak. Vertices are numbered `0..n` internally
//! while the file format and all rendered output use `1..=n`.

use bitvec::prelude::*;

/// Square symmetric bit matrix recording which vertex pairs share an edge.
#[derive(Debug, Clone, PartialEq, Eq)]
struct AdjacencyMatrix {
    side: usize,
    bits: BitVec,
}

impl AdjacencyMatrix {
    fn new(side: usize) -> Self {
        Self {
            side,
            bits: bitvec![0; side * side],
        }
    }

    fn cell(&self, i: usize, j: usize) -> Option<usize> {
        (i < self.side && j < self.side).then(|| i * self.side + j)
    }

    fn contains(&self, i: usize, j: usize) -> bool {
        self.cell(i, j)
            .is_some_and(|idx| self.bits.get(idx).is_some_and(|bit| *bit))
    }

    /// Sets both `(u, v)` and `(v, u)`; out-of-range pairs are a no-op.
    fn insert_symmetric(&mut self, u: usize, v: usize) {
        let (Some(forward), Some(backward)) = (self.cell(u, v), self.cell(v, u)) else {
            return;
        };
        self.bits.set(forward, true);
        self.bits.set(backward, true);
    }

    /// Row `i` of the matrix; the empty slice when `i` is out of range.
    fn row(&self, i: usize) -> &BitSlice {
        let start = i * self.side;
        self.bits
            .get(start..start + self.side)
            .unwrap_or(BitSlice::empty())
    }
}

/// An undirected simple graph over vertices `0..n`.
///
/// The graph is immutable during analysis; every query borrows it and holds
/// no independent ownership, so replacing a session's graph drops the matrix
/// buffer in one step.
///
/// # Examples
/// ```
/// use maguro_core::Graph;
///
/// let square = Graph::from_edge_list(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]);
/// assert_eq!(square.vertex_count(), 4);
/// assert!(square.has_edge(0, 1));
/// assert!(square.has_edge(1, 0));
/// assert!(!square.has_edge(0, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    matrix: AdjacencyMatrix,
}

impl Graph {
    /// Creates a graph with `n` isolated vertices.
    #[must_use]
    pub fn with_vertices(n: usize) -> Self {
        Self {
            matrix: AdjacencyMatrix::new(n),
        }
    }

    /// Builds a graph from an explicit list of 0-based edges.
    ///
    /// Endpoints outside `0..n` are discarded rather than rejected, matching
    /// the loader's tolerance for malformed neighbour tokens.
    ///
    /// # Examples
    /// ```
    /// use maguro_core::Graph;
    ///
    /// let path = Graph::from_edge_list(3, &[(0, 1), (1, 2), (1, 9)]);
    /// assert!(path.has_edge(0, 1));
    /// assert_eq!(path.degree(1), 2);
    /// ```
    #[must_use]
    pub fn from_edge_list(n: usize, edges: &[(usize, usize)]) -> Self {
        let mut graph = Self::with_vertices(n);
        for &(u, v) in edges {
            graph.add_edge(u, v);
        }
        graph
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.matrix.side
    }

    /// Returns whether an edge connects `u` and `v`.
    ///
    /// Out-of-range indices report `false`.
    #[must_use]
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.matrix.contains(u, v)
    }

    /// Inserts the undirected edge `(u, v)`.
    ///
    /// The reverse direction is always set as well. Out-of-range endpoints
    /// are ignored. A self-loop is stored as given; well-formed descriptions
    /// never contain one.
    pub fn add_edge(&mut self, u: usize, v: usize) {
        self.matrix.insert_symmetric(u, v);
    }

    /// Returns the 0-based neighbours of `v` in ascending order.
    pub fn neighbors(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        self.matrix.row(v).iter_ones()
    }

    /// Counts the edges incident to `v`.
    ///
    /// Out-of-range vertices have degree 0.
    #[must_use]
    pub fn degree(&self, v: usize) -> usize {
        self.matrix.row(v).count_ones()
    }

    /// Returns the largest vertex degree, or 0 for the empty graph.
    ///
    /// # Examples
    /// ```
    /// use maguro_core::Graph;
    ///
    /// let star = Graph::from_edge_list(4, &[(0, 1), (0, 2), (0, 3)]);
    /// assert_eq!(star.max_degree(), 3);
    /// assert_eq!(star.min_degree(), 1);
    /// ```
    #[must_use]
    pub fn max_degree(&self) -> usize {
        (0..self.vertex_count())
            .map(|v| self.degree(v))
            .max()
            .unwrap_or(0)
    }

    /// Returns the smallest vertex degree, or 0 for the empty graph.
    #[must_use]
    pub fn min_degree(&self) -> usize {
        (0..self.vertex_count())
            .map(|v| self.degree(v))
            .min()
            .unwrap_or(0)
    }

    /// Returns one `(vertex, neighbours)` row per vertex, 1-based, in vertex
    /// order. This is the display surface consumed by the CLI.
    ///
    /// # Examples
    /// ```
    /// use maguro_core::Graph;
    ///
    /// let path = Graph::from_edge_list(3, &[(0, 1), (1, 2)]);
    /// assert_eq!(
    ///     path.adjacency_listing(),
    ///     vec![(1, vec![2]), (2, vec![1, 3]), (3, vec![2])],
    /// );
    /// ```
    #[must_use]
    pub fn adjacency_listing(&self) -> Vec<(usize, Vec<usize>)> {
        (0..self.vertex_count())
            .map(|v| (v + 1, self.neighbors(v).map(|u| u + 1).collect()))
            .collect()
    }
}
