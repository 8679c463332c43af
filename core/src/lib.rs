//! graph-search-core: breadth-first and depth-first search over an
//! undirected graph with integer vertex ids.
//!
//! A [`Graph`] owns a fixed vertex set and ordered adjacency lists.
//! [`BreadthFirstSearch`] and [`DepthFirstSearch`] borrow it for the length
//! of one query and return plain values: vertex sequences, distance
//! vectors, levels, counts. Adjacency insertion order is part of the
//! observable contract: it decides visitation order and which parent each
//! vertex records.
//!
//! The crate does no I/O. Queries emit `tracing` events at debug level;
//! installing a subscriber is left to the caller.

mod bfs;
mod dfs;
mod error;
mod graph;

pub use bfs::{BreadthFirstSearch, Level, Neighbor};
pub use dfs::DepthFirstSearch;
pub use error::{GraphError, Result};
pub use graph::{Graph, VertexId};
