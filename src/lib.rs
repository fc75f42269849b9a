//! Tangle
//!
//! Weighted-graph algorithms over an adjacency-list store: breadth- and
//! depth-first traversal, topological ordering with cycle detection,
//! minimum spanning trees, single-source shortest paths, and strongly
//! connected components.

pub mod error;
pub mod graph;
pub mod logging;

pub use error::{GraphError, Result};
pub use graph::{
    bellman_ford, bfs, dfs, dijkstra, kruskal, prim, strongly_connected_components, DfsResult,
    Edge, Graph, Mst, Orientation, PathEntry, ShortestPaths, VertexId, Weight,
};
