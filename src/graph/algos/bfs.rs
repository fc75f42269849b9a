use crate::error::{GraphError, Result};
use crate::graph::store::Graph;
use crate::graph::types::VertexId;
use std::collections::{HashSet, VecDeque};

/// Breadth-first visit order from src.
///
/// Classic FIFO traversal; vertices unreachable from src never appear.
#[tracing::instrument(skip(graph), fields(src = ?src, vertices = graph.vertex_count()))]
pub fn bfs<V: VertexId>(graph: &Graph<V>, src: &V) -> Result<Vec<V>> {
    if !graph.contains(src) {
        return Err(GraphError::unknown_vertex(src));
    }

    let mut visited: HashSet<V> = HashSet::new();
    let mut queue: VecDeque<V> = VecDeque::new();
    let mut order: Vec<V> = Vec::new();

    queue.push_back(src.clone());
    visited.insert(src.clone());

    while let Some(current) = queue.pop_front() {
        let neighbors = graph.neighbors(&current);
        order.push(current);
        for (neighbor, _) in neighbors {
            if !visited.contains(&neighbor) {
                visited.insert(neighbor.clone());
                queue.push_back(neighbor);
            }
        }
    }

    Ok(order)
}
