//! Parsing of textual adjacency descriptions into [`Graph`] values.
//!
//! The format is the one consumed by the original analyzer: the first line
//! carries the vertex count, every following line is
//! `"<vertex>:<adj1>,<adj2>,..."` with 1-based vertex numbers. The parser is
//! permissive: out-of-range or unparsable neighbour tokens and
//! lines without a valid leading vertex are skipped without raising an
//! error, so an empty file and a thoroughly malformed one both load as a
//! graph with no edges. Only I/O can fail.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use tracing::{debug, info, instrument};

use crate::{Graph, LoadError, error::Result};

/// Loads a graph description from a file.
///
/// # Errors
/// Returns [`LoadError::Open`] when the file cannot be opened and
/// [`LoadError::Read`] when a read fails mid-stream. No graph value escapes
/// on failure.
///
/// # Examples
/// ```no_run
/// use maguro_core::load_graph;
///
/// let graph = load_graph("graphs/square.txt")?;
/// assert!(graph.vertex_count() > 0);
/// # Ok::<(), maguro_core::LoadError>(())
/// ```
#[instrument(name = "core.load", skip(path), fields(path = %path.as_ref().display()))]
pub fn load_graph(path: impl AsRef<Path>) -> Result<Graph> {
    let file = File::open(path.as_ref()).map_err(|source| LoadError::Open {
        path: path.as_ref().to_path_buf(),
        source,
    })?;
    parse_graph(BufReader::new(file))
}

/// Parses a graph description from a buffered reader.
///
/// A vertex-count line that does not parse as an integer yields a graph with
/// zero vertices; callers that require a usable graph must validate
/// [`Graph::vertex_count`] before relying on the result. The original's
/// 256-byte line limit does not apply here; lines of any length are read.
///
/// # Errors
/// Returns [`LoadError::Read`] when a line cannot be read from `reader`.
///
/// # Examples
/// ```
/// use maguro_core::parse_graph;
///
/// let square = parse_graph("4\n1:2,3\n2:1,4\n3:1,4\n4:2,3\n".as_bytes())?;
/// assert_eq!(square.vertex_count(), 4);
/// assert_eq!(square.min_degree(), 2);
/// assert_eq!(square.max_degree(), 2);
/// # Ok::<(), maguro_core::LoadError>(())
/// ```
pub fn parse_graph<R: BufRead>(reader: R) -> Result<Graph> {
    let mut lines = reader.lines();

    let vertices = match lines.next() {
        Some(line) => {
            let line = line.map_err(|source| LoadError::Read { source })?;
            line.trim().parse().unwrap_or(0)
        }
        None => 0,
    };

    let mut graph = Graph::with_vertices(vertices);
    let mut accepted = 0usize;
    for line in lines {
        let line = line.map_err(|source| LoadError::Read { source })?;
        let Some((head, tail)) = line.split_once(':') else {
            continue;
        };
        let Some(vertex) = parse_vertex(head, vertices) else {
            debug!(line = %line, "skipping line without a valid leading vertex");
            continue;
        };
        for token in tail.split(',') {
            if let Some(neighbour) = parse_vertex(token, vertices) {
                graph.add_edge(vertex, neighbour);
                accepted += 1;
            } else if !token.trim().is_empty() {
                debug!(vertex = vertex + 1, token = %token, "discarding neighbour token");
            }
        }
    }

    info!(vertices, neighbour_tokens = accepted, "graph description parsed");
    Ok(graph)
}

/// Converts a 1-based vertex token into a 0-based index within `0..limit`.
fn parse_vertex(token: &str, limit: usize) -> Option<usize> {
    let ordinal: usize = token.trim().parse().ok()?;
    let index = ordinal.checked_sub(1)?;
    (index < limit).then_some(index)
}
