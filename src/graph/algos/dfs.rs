use crate::graph::algos::shared::VisitState;
use crate::graph::store::Graph;
use crate::graph::types::{DfsResult, VertexId};
use std::collections::HashMap;

/// Explicit-stack frame: one vertex and a cursor into its neighbors
struct Frame<V> {
    vertex: V,
    neighbors: Vec<V>,
    next: usize,
}

fn neighbor_ids<V: VertexId>(graph: &Graph<V>, v: &V) -> Vec<V> {
    graph.neighbors(v).into_iter().map(|(n, _)| n).collect()
}

/// One depth-first visit from root using an explicit stack.
///
/// Marks root and everything reached from it, appending each vertex to
/// `postorder` once all its neighbors are done. Returns the vertices
/// visited by this call in first-visit order, and whether a back-edge
/// (a neighbor still `InProgress`) was observed.
pub(crate) fn dfs_visit<V: VertexId>(
    graph: &Graph<V>,
    root: &V,
    marks: &mut HashMap<V, VisitState>,
    postorder: &mut Vec<V>,
) -> (Vec<V>, bool) {
    let mut visited_here: Vec<V> = Vec::new();
    let mut back_edge = false;
    let mut stack: Vec<Frame<V>> = Vec::new();

    marks.insert(root.clone(), VisitState::InProgress);
    visited_here.push(root.clone());
    stack.push(Frame {
        vertex: root.clone(),
        neighbors: neighbor_ids(graph, root),
        next: 0,
    });

    while let Some(frame) = stack.last_mut() {
        if frame.next < frame.neighbors.len() {
            let neighbor = frame.neighbors[frame.next].clone();
            frame.next += 1;

            match marks.get(&neighbor) {
                Some(VisitState::InProgress) => back_edge = true,
                Some(VisitState::Done) => {}
                _ => {
                    marks.insert(neighbor.clone(), VisitState::InProgress);
                    visited_here.push(neighbor.clone());
                    let neighbors = neighbor_ids(graph, &neighbor);
                    stack.push(Frame {
                        vertex: neighbor,
                        neighbors,
                        next: 0,
                    });
                }
            }
        } else if let Some(done) = stack.pop() {
            marks.insert(done.vertex.clone(), VisitState::Done);
            postorder.push(done.vertex);
        }
    }

    (visited_here, back_edge)
}

/// Full depth-first pass over every vertex, covering disconnected
/// components.
///
/// Produces the raw visit order, a reverse-postorder linearization,
/// and whether the graph is a DAG. The flag is recomputed from scratch
/// on every call; nothing is stored on the graph.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn dfs<V: VertexId>(graph: &Graph<V>) -> DfsResult<V> {
    let mut marks: HashMap<V, VisitState> = graph
        .vertices()
        .iter()
        .map(|v| (v.clone(), VisitState::Unvisited))
        .collect();
    let mut preorder: Vec<V> = Vec::new();
    let mut postorder: Vec<V> = Vec::new();
    let mut is_dag = true;

    for v in graph.sorted_vertices() {
        if matches!(marks.get(&v), Some(VisitState::Unvisited)) {
            let (visited, back_edge) = dfs_visit(graph, &v, &mut marks, &mut postorder);
            preorder.extend(visited);
            if back_edge {
                is_dag = false;
            }
        }
    }

    let mut topological = postorder;
    topological.reverse();

    DfsResult {
        preorder,
        topological,
        is_dag,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dfs_topological_order_on_dag() {
        let mut graph = Graph::directed();
        graph.add_edge("a", "b", 1);
        graph.add_edge("b", "c", 2);
        graph.add_edge("a", "c", 5);

        let result = dfs(&graph);
        assert!(result.is_dag);
        let pos = |v: &str| {
            result
                .topological
                .iter()
                .position(|x| *x == v)
                .unwrap()
        };
        assert!(pos("a") < pos("b"));
        assert!(pos("b") < pos("c"));
    }

    #[test]
    fn test_dfs_detects_cycle() {
        let mut graph = Graph::directed();
        graph.add_edge(1, 2, 1);
        graph.add_edge(2, 3, 1);
        graph.add_edge(3, 1, 1);

        assert!(!dfs(&graph).is_dag);
    }

    #[test]
    fn test_dfs_self_loop_is_cycle() {
        let mut graph = Graph::directed();
        graph.add_edge("a", "a", 1);

        assert!(!dfs(&graph).is_dag);
    }

    #[test]
    fn test_dfs_covers_disconnected_components() {
        let mut graph = Graph::directed();
        graph.add_edge("a", "b", 1);
        graph.add_edge("x", "y", 1);

        let result = dfs(&graph);
        assert_eq!(result.preorder.len(), 4);
        assert_eq!(result.topological.len(), 4);
    }

    #[test]
    fn test_dfs_empty_graph() {
        let graph: Graph<u32> = Graph::directed();
        let result = dfs(&graph);
        assert!(result.preorder.is_empty());
        assert!(result.topological.is_empty());
        assert!(result.is_dag);
    }

    #[test]
    fn test_dfs_deep_chain_no_overflow() {
        let mut graph = Graph::directed();
        for i in 0..20_000u32 {
            graph.add_edge(i, i + 1, 1);
        }

        let result = dfs(&graph);
        assert!(result.is_dag);
        assert_eq!(result.topological.len(), 20_001);
        assert_eq!(result.topological[0], 0);
    }
}
