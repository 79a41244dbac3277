//! Command implementations and argument parsing for the maguro CLI.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use maguro_core::{Graph, LoadError, load_graph};
use thiserror::Error;
use tracing::{info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "maguro",
    about = "Analyze degrees and k-connectivity of undirected graphs."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands, one per core query.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Render the adjacency listing of a graph.
    Show(GraphArgs),
    /// Report the minimum and maximum vertex degree.
    Degrees(GraphArgs),
    /// Verify whether the graph is k-connected.
    Check(CheckArgs),
}

/// Arguments shared by commands that only need a graph.
#[derive(Debug, Args, Clone)]
pub struct GraphArgs {
    /// Path to the adjacency description file.
    pub path: PathBuf,
}

/// Arguments accepted by the `check` command.
#[derive(Debug, Args, Clone)]
pub struct CheckArgs {
    /// Path to the adjacency description file.
    pub path: PathBuf,

    /// Connectivity order to verify. The search enumerates every
    /// (k-1)-subset of vertices, so large values take exponentially long.
    #[arg(short = 'k', long = "k")]
    pub k: usize,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Loading the graph description failed.
    #[error(transparent)]
    Load(#[from] LoadError),
    /// The description parsed, but to a graph without vertices: either an
    /// empty file or an unusable vertex-count line.
    #[error("`{}` describes a graph without vertices", path.display())]
    EmptyGraph {
        /// Path of the offending description.
        path: PathBuf,
    },
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionSummary {
    /// The 1-based adjacency listing produced by `show`.
    Listing {
        /// One `(vertex, neighbours)` row per vertex.
        rows: Vec<(usize, Vec<usize>)>,
    },
    /// Degree extremes produced by `degrees`.
    Degrees {
        /// Smallest vertex degree.
        min: usize,
        /// Largest vertex degree.
        max: usize,
    },
    /// Verdict produced by `check`.
    Connectivity {
        /// Requested connectivity order.
        k: usize,
        /// Whether the graph is k-connected.
        connected: bool,
    },
}

/// Executes the command represented by `cli` and returns its summary.
///
/// # Errors
/// Returns [`CliError`] when the graph cannot be loaded or has no vertices.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// use clap::Parser;
/// use maguro_cli::cli::{Cli, ExecutionSummary, run_cli};
/// use tempfile::NamedTempFile;
///
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "4\n1:2,3\n2:1,4\n3:1,4\n4:2,3\n")?;
/// let path = file.path().display().to_string();
/// let cli = Cli::parse_from(["maguro", "degrees", path.as_str()]);
/// let summary = run_cli(cli)?;
/// assert_eq!(summary, ExecutionSummary::Degrees { min: 2, max: 2 });
/// # Ok(())
/// # }
/// ```
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Show(args) => {
            let graph = load_session_graph(&args.path)?;
            Ok(ExecutionSummary::Listing {
                rows: graph.adjacency_listing(),
            })
        }
        Command::Degrees(args) => {
            let graph = load_session_graph(&args.path)?;
            Ok(ExecutionSummary::Degrees {
                min: graph.min_degree(),
                max: graph.max_degree(),
            })
        }
        Command::Check(args) => {
            let graph = load_session_graph(&args.path)?;
            Ok(ExecutionSummary::Connectivity {
                k: args.k,
                connected: graph.is_k_connected(args.k),
            })
        }
    }
}

/// Loads the session graph, rejecting descriptions without vertices.
///
/// The core loader accepts unusable vertex-count lines and yields a 0-vertex
/// graph; every query on such a graph is degenerate, so the session boundary
/// enforces the `vertex_count > 0` precondition before querying.
#[instrument(name = "cli.load", skip(path), fields(path = %path.display()))]
fn load_session_graph(path: &Path) -> Result<Graph, CliError> {
    let graph = load_graph(path)?;
    if graph.vertex_count() == 0 {
        return Err(CliError::EmptyGraph {
            path: path.to_path_buf(),
        });
    }
    info!(vertices = graph.vertex_count(), "session graph loaded");
    Ok(graph)
}

/// Renders `summary` into `writer`.
///
/// # Errors
/// Propagates any I/O error raised by `writer`.
pub fn render_summary(summary: &ExecutionSummary, writer: &mut impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Listing { rows } => {
            writeln!(writer, "Graph representation:")?;
            for (vertex, neighbours) in rows {
                write!(writer, "Vertex {vertex}:")?;
                for neighbour in neighbours {
                    write!(writer, " -> {neighbour}")?;
                }
                writeln!(writer)?;
            }
        }
        ExecutionSummary::Degrees { min, max } => {
            writeln!(writer, "Minimum degree: {min}")?;
            writeln!(writer, "Maximum degree: {max}")?;
        }
        ExecutionSummary::Connectivity { k, connected } => {
            if *connected {
                writeln!(writer, "The graph is {k}-connected.")?;
            } else {
                writeln!(writer, "The graph is not {k}-connected.")?;
            }
        }
    }
    Ok(())
}
