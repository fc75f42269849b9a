//! Graph algorithm implementations
//!
//! Contains concrete implementations of the classical algorithms:
//! - `bfs` / `dfs`: traversal, topological ordering, cycle detection
//! - `kruskal` / `prim`: minimum spanning trees
//! - `bellman_ford` / `dijkstra`: single-source shortest paths
//! - `kosaraju`: strongly connected components
//! - `shared`: primitives used by multiple algorithms

pub mod bellman_ford;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod kosaraju;
pub mod kruskal;
pub mod prim;
pub mod shared;

pub use bellman_ford::bellman_ford;
pub use bfs::bfs;
pub use dfs::dfs;
pub use dijkstra::dijkstra;
pub use kosaraju::strongly_connected_components;
pub use kruskal::kruskal;
pub use prim::prim;
pub use shared::{init_single_source, relax, VisitState};
