use crate::error::{GraphError, Result};
use crate::graph::algos::shared::{init_single_source, relax};
use crate::graph::store::Graph;
use crate::graph::types::{ShortestPaths, VertexId, Weight};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

/// Heap entry keyed by accumulated distance, vertex id as tie-break.
/// Improved distances push a fresh entry; stale ones are skipped on
/// pop once their vertex is finalized.
#[derive(Debug, Clone)]
struct HeapEntry<V> {
    vertex: V,
    distance: Weight,
}

impl<V: VertexId> PartialEq for HeapEntry<V> {
    fn eq(&self, other: &Self) -> bool {
        self.vertex == other.vertex && self.distance.value() == other.distance.value()
    }
}

impl<V: VertexId> Eq for HeapEntry<V> {}

impl<V: VertexId> PartialOrd for HeapEntry<V> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<V: VertexId> Ord for HeapEntry<V> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.distance
            .value()
            .partial_cmp(&other.distance.value())
            .unwrap()
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

/// Dijkstra single-source shortest paths.
///
/// Requires non-negative edge weights; a negative edge anywhere in the
/// graph fails the query up front instead of silently returning wrong
/// distances. The heap is seeded with every vertex at its initial
/// distance, so unreachable vertices surface at the infinity sentinel.
#[tracing::instrument(skip(graph), fields(src = ?src, vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn dijkstra<V: VertexId>(graph: &Graph<V>, src: &V) -> Result<ShortestPaths<V>> {
    let mut table = init_single_source(graph, src)?;

    for edge in graph.edges() {
        if edge.weight.is_negative() {
            return Err(GraphError::negative_weight(
                &edge.from,
                &edge.to,
                edge.weight.value(),
            ));
        }
    }

    let mut heap: BinaryHeap<Reverse<HeapEntry<V>>> = BinaryHeap::new();
    for vertex in graph.sorted_vertices() {
        let distance = table
            .get(&vertex)
            .map_or(Weight::INFINITY, |entry| entry.distance);
        heap.push(Reverse(HeapEntry { vertex, distance }));
    }

    let mut finalized: HashSet<V> = HashSet::new();
    while let Some(Reverse(HeapEntry { vertex: current, .. })) = heap.pop() {
        if !finalized.insert(current.clone()) {
            continue;
        }

        for (neighbor, weight) in graph.neighbors(&current) {
            if finalized.contains(&neighbor) {
                continue;
            }
            if relax(&mut table, &current, &neighbor, weight) {
                if let Some(entry) = table.get(&neighbor) {
                    heap.push(Reverse(HeapEntry {
                        vertex: neighbor,
                        distance: entry.distance,
                    }));
                }
            }
        }
    }

    Ok(ShortestPaths {
        source: src.clone(),
        table,
    })
}
