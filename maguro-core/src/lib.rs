//! Maguro core library.
//!
//! A connectivity engine for undirected simple graphs loaded from textual
//! adjacency descriptions: vertex degree statistics, breadth-first
//! connectivity testing over simulated vertex removals, and brute-force
//! k-vertex-connectivity verification by exhaustive subset enumeration.
//!
//! The engine is synchronous and single-threaded; every query runs to
//! completion over an immutable [`Graph`]. Interactive prompting, output
//! formatting, and session state live in the CLI crate, which calls into
//! this crate through the functions re-exported here.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod connectivity;
mod error;
mod graph;
mod kconnect;
mod loader;

pub use crate::{
    connectivity::RemovalSet,
    error::{LoadError, Result},
    graph::Graph,
    loader::{load_graph, parse_graph},
};
