use crate::graph::algos::dfs::{dfs, dfs_visit};
use crate::graph::algos::shared::VisitState;
use crate::graph::store::Graph;
use crate::graph::types::VertexId;
use std::collections::HashMap;

/// Kosaraju strongly-connected-component decomposition.
///
/// Pass 1 runs a full DFS for the finish-time order (the cycle flag is
/// irrelevant here and discarded). Pass 2 walks the transposed graph
/// in that order; each DFS visit collects exactly one component.
/// Components are emitted in pass-2 discovery order, vertices within a
/// component in DFS visitation order.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn strongly_connected_components<V: VertexId>(graph: &Graph<V>) -> Vec<Vec<V>> {
    let finish_order = dfs(graph).topological;
    let transposed = graph.transpose();

    let mut marks: HashMap<V, VisitState> = graph
        .vertices()
        .iter()
        .map(|v| (v.clone(), VisitState::Unvisited))
        .collect();
    let mut postorder: Vec<V> = Vec::new();
    let mut components: Vec<Vec<V>> = Vec::new();

    for v in finish_order {
        if matches!(marks.get(&v), Some(VisitState::Unvisited)) {
            let (component, _) = dfs_visit(&transposed, &v, &mut marks, &mut postorder);
            components.push(component);
        }
    }

    components
}
