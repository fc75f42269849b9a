use crate::error::{GraphError, Result};
use crate::graph::store::Graph;
use crate::graph::types::{Edge, Mst, VertexId, Weight};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

/// Frontier candidate ordered by (weight, parent, vertex) so equal
/// weights break on the natural vertex order
#[derive(Debug, Clone)]
struct FrontierEdge<V> {
    weight: Weight,
    parent: V,
    vertex: V,
}

impl<V: VertexId> PartialEq for FrontierEdge<V> {
    fn eq(&self, other: &Self) -> bool {
        self.weight.value() == other.weight.value()
            && self.parent == other.parent
            && self.vertex == other.vertex
    }
}

impl<V: VertexId> Eq for FrontierEdge<V> {}

impl<V: VertexId> PartialOrd for FrontierEdge<V> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<V: VertexId> Ord for FrontierEdge<V> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.weight
            .value()
            .partial_cmp(&other.weight.value())
            .unwrap()
            .then_with(|| self.parent.cmp(&other.parent))
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

/// Prim minimum spanning tree grown from src.
///
/// Pops the cheapest frontier edge, adopts its candidate endpoint when
/// still outside the tree, and pushes the candidate's edges to
/// unvisited neighbors. Covers only the component containing src.
#[tracing::instrument(skip(graph), fields(src = ?src, vertices = graph.vertex_count()))]
pub fn prim<V: VertexId>(graph: &Graph<V>, src: &V) -> Result<Mst<V>> {
    if !graph.contains(src) {
        return Err(GraphError::unknown_vertex(src));
    }

    let mut heap: BinaryHeap<Reverse<FrontierEdge<V>>> = BinaryHeap::new();
    let mut visited: HashSet<V> = HashSet::new();
    let mut accepted: Vec<Edge<V>> = Vec::new();
    let mut parent: HashMap<V, V> = HashMap::new();
    let mut total_weight = Weight::ZERO;

    visited.insert(src.clone());
    for (neighbor, weight) in graph.neighbors(src) {
        heap.push(Reverse(FrontierEdge {
            weight,
            parent: src.clone(),
            vertex: neighbor,
        }));
    }

    while let Some(Reverse(FrontierEdge {
        weight,
        parent: from,
        vertex,
    })) = heap.pop()
    {
        if visited.contains(&vertex) {
            continue;
        }
        visited.insert(vertex.clone());
        parent.insert(vertex.clone(), from.clone());
        accepted.push(Edge {
            weight,
            from,
            to: vertex.clone(),
        });
        total_weight = total_weight + weight;

        for (neighbor, w) in graph.neighbors(&vertex) {
            if !visited.contains(&neighbor) {
                heap.push(Reverse(FrontierEdge {
                    weight: w,
                    parent: vertex.clone(),
                    vertex: neighbor,
                }));
            }
        }
    }

    Ok(Mst {
        edges: accepted,
        parent,
        total_weight,
    })
}
