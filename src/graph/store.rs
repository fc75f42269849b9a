//! Adjacency-list graph store

use crate::graph::types::{Edge, Orientation, VertexId, Weight};
use std::collections::{HashMap, HashSet};

/// Weighted graph over opaque vertex identifiers.
///
/// Vertices are created implicitly on first mention as an edge
/// endpoint. Directedness is fixed at construction; undirected
/// insertion writes both arcs. Algorithms treat the graph as immutable
/// after construction and compute their results fresh on every call —
/// recomputation after further edge insertion is the caller's
/// responsibility.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    adjacency: HashMap<V, HashMap<V, Weight>>,
    vertices: HashSet<V>,
    orientation: Orientation,
}

impl<V: VertexId> Graph<V> {
    pub fn new(orientation: Orientation) -> Self {
        Graph {
            adjacency: HashMap::new(),
            vertices: HashSet::new(),
            orientation,
        }
    }

    pub fn directed() -> Self {
        Self::new(Orientation::Directed)
    }

    pub fn undirected() -> Self {
        Self::new(Orientation::Undirected)
    }

    /// Insert weight w for the arc u -> v; undirected graphs also write
    /// v -> u with the same weight. A repeated call for the same ordered
    /// pair overwrites the previous weight. Both endpoints join the
    /// vertex set. No validation on w.
    pub fn add_edge(&mut self, u: V, v: V, w: impl Into<Weight>) {
        let w = w.into();
        if self.orientation == Orientation::Undirected {
            self.adjacency
                .entry(v.clone())
                .or_default()
                .insert(u.clone(), w);
        }
        self.adjacency
            .entry(u.clone())
            .or_default()
            .insert(v.clone(), w);
        self.vertices.insert(u);
        self.vertices.insert(v);
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn contains(&self, v: &V) -> bool {
        self.vertices.contains(v)
    }

    pub fn vertices(&self) -> &HashSet<V> {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of stored arcs (an undirected edge counts twice)
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|neighbors| neighbors.len()).sum()
    }

    /// Weight of the arc u -> v, if present
    pub fn weight(&self, u: &V, v: &V) -> Option<Weight> {
        self.adjacency.get(u).and_then(|neighbors| neighbors.get(v)).copied()
    }

    /// Outgoing neighbors of v with weights, sorted by vertex id for
    /// deterministic expansion order
    pub fn neighbors(&self, v: &V) -> Vec<(V, Weight)> {
        let mut neighbors: Vec<(V, Weight)> = self
            .adjacency
            .get(v)
            .map(|edges| edges.iter().map(|(n, w)| (n.clone(), *w)).collect())
            .unwrap_or_default();
        neighbors.sort_by(|a, b| a.0.cmp(&b.0));
        neighbors
    }

    /// Vertices in their natural order; full-graph passes iterate this
    /// for deterministic results
    pub fn sorted_vertices(&self) -> Vec<V> {
        let mut vertices: Vec<V> = self.vertices.iter().cloned().collect();
        vertices.sort();
        vertices
    }

    /// Flat edge-list view reconstructed from the adjacency structure,
    /// sorted by (weight, from, to)
    pub fn edges(&self) -> Vec<Edge<V>> {
        let mut edges: Vec<Edge<V>> = Vec::with_capacity(self.edge_count());
        for (from, neighbors) in &self.adjacency {
            for (to, weight) in neighbors {
                edges.push(Edge {
                    weight: *weight,
                    from: from.clone(),
                    to: to.clone(),
                });
            }
        }
        edges.sort();
        edges
    }

    /// Every arc reversed, weights preserved
    pub fn transpose(&self) -> Graph<V> {
        let mut transposed = Graph::new(self.orientation);
        for (from, neighbors) in &self.adjacency {
            for (to, weight) in neighbors {
                transposed
                    .adjacency
                    .entry(to.clone())
                    .or_default()
                    .insert(from.clone(), *weight);
            }
        }
        transposed.vertices = self.vertices.clone();
        transposed
    }
}
