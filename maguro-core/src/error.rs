//! Error types for the maguro core library.
//!
//! The loader is the only part of the engine with a genuine failure outcome;
//! every analysis query is a total function over a loaded [`crate::Graph`].

use std::{io, path::PathBuf};

use thiserror::Error;

/// An error produced while loading a graph description.
///
/// Malformed *content* is never an error: unparsable lines and out-of-range
/// neighbour tokens are skipped, so a corrupt file yields a sparse or empty
/// graph rather than a failure. Only the underlying I/O can fail.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum LoadError {
    /// The graph description file could not be opened.
    #[error("failed to open `{}`: {source}", path.display())]
    Open {
        /// Path that could not be opened.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Reading a line from the graph description failed mid-stream.
    #[error("failed to read graph description: {source}")]
    Read {
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
}

/// Convenient alias for results returned by the loader.
pub type Result<T> = core::result::Result<T, LoadError>;
