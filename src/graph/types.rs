use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Opaque vertex identifier.
///
/// Any hashable, totally ordered, cloneable value works; the `Ord`
/// bound buys deterministic iteration order for full-graph passes.
pub trait VertexId: Clone + Eq + Hash + Ord + fmt::Debug {}

impl<T: Clone + Eq + Hash + Ord + fmt::Debug> VertexId for T {}

/// Represents the weight of a single edge or an accumulated path.
/// Signed and unvalidated at insertion; `Weight::INFINITY` is the
/// unreachable sentinel in shortest-path tables.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Weight(f64);

impl Weight {
    pub const ZERO: Weight = Weight(0.0);
    pub const INFINITY: Weight = Weight(f64::INFINITY);

    pub fn new(weight: f64) -> Self {
        Weight(weight)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::ZERO
    }
}

impl std::ops::Add for Weight {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Weight(self.0 + other.0)
    }
}

impl From<f64> for Weight {
    fn from(weight: f64) -> Self {
        Weight(weight)
    }
}

impl From<i32> for Weight {
    fn from(weight: i32) -> Self {
        Weight(f64::from(weight))
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Directedness chosen at graph construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    /// Each edge is a single arc
    Directed,
    /// Each edge writes both arcs with the same weight
    Undirected,
}

impl std::str::FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "directed" => Ok(Orientation::Directed),
            "undirected" => Ok(Orientation::Undirected),
            other => Err(format!(
                "unknown orientation '{}' (expected: directed, undirected)",
                other
            )),
        }
    }
}

/// A single weighted arc, materialized on demand for algorithms that
/// need a flat edge list. Ordered lexicographically by
/// (weight, from, to) so ties break on the natural vertex order.
#[derive(Debug, Clone, Serialize)]
pub struct Edge<V> {
    pub weight: Weight,
    pub from: V,
    pub to: V,
}

impl<V: VertexId> PartialEq for Edge<V> {
    fn eq(&self, other: &Self) -> bool {
        self.weight.value() == other.weight.value()
            && self.from == other.from
            && self.to == other.to
    }
}

impl<V: VertexId> Eq for Edge<V> {}

impl<V: VertexId> PartialOrd for Edge<V> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<V: VertexId> Ord for Edge<V> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.weight
            .value()
            .partial_cmp(&other.weight.value())
            .unwrap()
            .then_with(|| self.from.cmp(&other.from))
            .then_with(|| self.to.cmp(&other.to))
    }
}

/// Result of a full depth-first pass over the graph
#[derive(Debug, Clone, Serialize)]
pub struct DfsResult<V> {
    /// Vertices in first-visit order, covering every component
    pub preorder: Vec<V>,
    /// Reverse-postorder linearization; a valid topological order
    /// when `is_dag` holds
    pub topological: Vec<V>,
    /// False as soon as one back-edge was observed
    pub is_dag: bool,
}

/// Best known distance and parent pointer for one vertex
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathEntry<V> {
    pub distance: Weight,
    pub parent: Option<V>,
}

/// Single-source shortest-path table. Created fresh per query and
/// owned by the caller; nothing is cached on the graph.
#[derive(Debug, Clone, Serialize)]
pub struct ShortestPaths<V> {
    pub source: V,
    pub table: HashMap<V, PathEntry<V>>,
}

impl<V: VertexId> ShortestPaths<V> {
    /// Best known distance to v, `Weight::INFINITY` when unreachable
    pub fn distance(&self, v: &V) -> Option<Weight> {
        self.table.get(v).map(|entry| entry.distance)
    }

    /// Parent of v on its shortest path, None for the source and for
    /// unreachable vertices
    pub fn parent(&self, v: &V) -> Option<&V> {
        self.table.get(v).and_then(|entry| entry.parent.as_ref())
    }

    /// Reconstruct the source -> v path by walking parent pointers.
    /// Returns None when v is unknown or unreachable.
    pub fn path_to(&self, v: &V) -> Option<Vec<V>> {
        let entry = self.table.get(v)?;
        if !entry.distance.is_finite() {
            return None;
        }

        let mut path = vec![v.clone()];
        let mut current = v.clone();
        while let Some(parent) = self.table.get(&current).and_then(|e| e.parent.as_ref()) {
            path.push(parent.clone());
            current = parent.clone();
        }

        path.reverse();
        Some(path)
    }
}

/// Minimum spanning tree, or forest for a disconnected graph.
///
/// `edges` is the complete record of accepted edges in acceptance
/// order. `parent` keys each edge's destination to its source; when
/// two accepted edges share a destination the later one wins there,
/// so tree reconstruction should read `edges`.
#[derive(Debug, Clone, Serialize)]
pub struct Mst<V> {
    pub edges: Vec<Edge<V>>,
    pub parent: HashMap<V, V>,
    pub total_weight: Weight,
}

impl<V> Mst<V> {
    /// Number of accepted edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
