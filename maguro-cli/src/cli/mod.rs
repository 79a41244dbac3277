//! Command-line interface orchestration for the maguro graph analyzer.
//!
//! The CLI loads an adjacency description and answers one structural query
//! per invocation: the adjacency listing, the degree extremes, or a
//! k-connectivity verdict. All algorithmic work happens in `maguro-core`;
//! this layer only parses arguments, manages the session graph, and renders
//! summaries.

mod commands;

pub use commands::{
    CheckArgs, Cli, CliError, Command, ExecutionSummary, GraphArgs, render_summary, run_cli,
};
