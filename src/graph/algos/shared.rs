//! Primitives shared by the shortest-path solvers and the DFS family

use crate::error::{GraphError, Result};
use crate::graph::store::Graph;
use crate::graph::types::{PathEntry, VertexId, Weight};
use std::collections::HashMap;

/// Per-vertex marker during any DFS-family algorithm.
///
/// `Unvisited -> InProgress -> Done`, terminal at `Done`. A neighbor
/// observed `InProgress` signals a back-edge without forcing a state
/// change on that neighbor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitState {
    Unvisited,
    InProgress,
    Done,
}

/// Fresh distance table for a single-source query: every vertex at the
/// infinity sentinel with no parent, except src at zero.
pub fn init_single_source<V: VertexId>(
    graph: &Graph<V>,
    src: &V,
) -> Result<HashMap<V, PathEntry<V>>> {
    if !graph.contains(src) {
        return Err(GraphError::unknown_vertex(src));
    }

    let mut table: HashMap<V, PathEntry<V>> = HashMap::with_capacity(graph.vertex_count());
    for v in graph.vertices() {
        table.insert(
            v.clone(),
            PathEntry {
                distance: Weight::INFINITY,
                parent: None,
            },
        );
    }
    if let Some(entry) = table.get_mut(src) {
        entry.distance = Weight::ZERO;
    }

    Ok(table)
}

/// Relax the edge u -> v: adopt the path through u when strictly
/// shorter than v's best known distance. Returns whether v improved.
pub fn relax<V: VertexId>(
    table: &mut HashMap<V, PathEntry<V>>,
    u: &V,
    v: &V,
    weight: Weight,
) -> bool {
    let through = match table.get(u) {
        Some(entry) => entry.distance + weight,
        None => return false,
    };

    match table.get_mut(v) {
        Some(entry) if through.value() < entry.distance.value() => {
            entry.distance = through;
            entry.parent = Some(u.clone());
            true
        }
        _ => false,
    }
}
