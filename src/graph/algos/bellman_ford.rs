use crate::error::{GraphError, Result};
use crate::graph::algos::dfs::dfs;
use crate::graph::algos::shared::{init_single_source, relax};
use crate::graph::store::Graph;
use crate::graph::types::{ShortestPaths, VertexId};
use std::time::Instant;

/// Single-source shortest paths tolerant of negative edge weights.
///
/// A fresh DFS decides the variant: one relaxation sweep in
/// topological order when the graph is a DAG (O(V+E)), otherwise |V|
/// rounds over every edge (O(VE)) followed by a detection pass — an
/// edge that still improves after the rounds means a negative-weight
/// cycle and the query fails rather than reporting a non-converged
/// table.
#[tracing::instrument(skip(graph), fields(src = ?src, vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn bellman_ford<V: VertexId>(graph: &Graph<V>, src: &V) -> Result<ShortestPaths<V>> {
    let start = Instant::now();
    let mut table = init_single_source(graph, src)?;

    let traversal = dfs(graph);
    if traversal.is_dag {
        for u in &traversal.topological {
            for (v, weight) in graph.neighbors(u) {
                relax(&mut table, u, &v, weight);
            }
        }
        crate::trace_time!(start, "bellman_ford_dag");
        return Ok(ShortestPaths {
            source: src.clone(),
            table,
        });
    }

    let edges = graph.edges();
    for _ in 0..graph.vertex_count() {
        for edge in &edges {
            relax(&mut table, &edge.from, &edge.to, edge.weight);
        }
    }

    // converged tables admit no further improvement
    for edge in &edges {
        if relax(&mut table, &edge.from, &edge.to, edge.weight) {
            return Err(GraphError::negative_cycle(src));
        }
    }

    crate::trace_time!(start, "bellman_ford");
    Ok(ShortestPaths {
        source: src.clone(),
        table,
    })
}
