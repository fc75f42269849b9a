use crate::graph::store::Graph;
use crate::graph::types::{Edge, Mst, VertexId, Weight};
use std::collections::HashMap;
use std::time::Instant;

/// Disjoint vertex sets: union by rank with path compression
struct UnionFind<V> {
    parent: HashMap<V, V>,
    rank: HashMap<V, u32>,
}

impl<V: VertexId> UnionFind<V> {
    fn new(vertices: impl Iterator<Item = V>) -> Self {
        let parent: HashMap<V, V> = vertices.map(|v| (v.clone(), v)).collect();
        let rank = parent.keys().map(|v| (v.clone(), 0)).collect();
        UnionFind { parent, rank }
    }

    fn find(&mut self, v: &V) -> V {
        let mut root = v.clone();
        while let Some(parent) = self.parent.get(&root) {
            if *parent == root {
                break;
            }
            root = parent.clone();
        }

        // compress the walked chain onto the root
        let mut current = v.clone();
        while current != root {
            match self.parent.insert(current, root.clone()) {
                Some(next) => current = next,
                None => break,
            }
        }

        root
    }

    /// Merge the components of a and b; false when already joined
    fn union(&mut self, a: &V, b: &V) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        let rank_a = self.rank.get(&root_a).copied().unwrap_or(0);
        let rank_b = self.rank.get(&root_b).copied().unwrap_or(0);
        if rank_a < rank_b {
            self.parent.insert(root_a, root_b);
        } else if rank_a > rank_b {
            self.parent.insert(root_b, root_a);
        } else {
            self.parent.insert(root_b, root_a.clone());
            self.rank.insert(root_a, rank_a + 1);
        }

        true
    }
}

/// Kruskal minimum spanning tree.
///
/// Processes the full edge list ascending by (weight, from, to); each
/// edge joining two components records `parent[to] = from` and adds
/// its weight to the total. Disconnected graphs yield a spanning
/// forest.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn kruskal<V: VertexId>(graph: &Graph<V>) -> Mst<V> {
    let start = Instant::now();
    let mut components = UnionFind::new(graph.vertices().iter().cloned());
    let mut accepted: Vec<Edge<V>> = Vec::new();
    let mut parent: HashMap<V, V> = HashMap::new();
    let mut total_weight = Weight::ZERO;

    for edge in graph.edges() {
        if components.union(&edge.from, &edge.to) {
            parent.insert(edge.to.clone(), edge.from.clone());
            total_weight = total_weight + edge.weight;
            accepted.push(edge);
        }
    }

    crate::trace_time!(start, "kruskal", accepted = accepted.len());
    Mst {
        edges: accepted,
        parent,
        total_weight,
    }
}
