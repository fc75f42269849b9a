//! Graph store and algorithms
//!
//! Provides the adjacency-list graph representation and the classical
//! algorithms over it:
//! - BFS and DFS traversal, the latter with topological ordering and
//!   cycle detection
//! - Minimum spanning trees via Kruskal and Prim
//! - Single-source shortest paths via Bellman-Ford and Dijkstra
//! - Strongly connected components via Kosaraju

pub mod algos;
pub mod store;
pub mod types;

pub use algos::{
    bellman_ford, bfs, dfs, dijkstra, kruskal, prim, strongly_connected_components,
};
pub use store::Graph;
pub use types::{
    DfsResult, Edge, Mst, Orientation, PathEntry, ShortestPaths, VertexId, Weight,
};
