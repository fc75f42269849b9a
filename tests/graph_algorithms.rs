//! Cross-algorithm properties over the public API

use tangle::{
    bellman_ford, bfs, dfs, dijkstra, kruskal, prim, strongly_connected_components, Graph,
    GraphError,
};

fn weighted_directed() -> Graph<&'static str> {
    let mut graph = Graph::directed();
    graph.add_edge("s", "a", 2);
    graph.add_edge("s", "b", 7);
    graph.add_edge("a", "b", 3);
    graph.add_edge("a", "c", 8);
    graph.add_edge("b", "c", 1);
    graph.add_edge("c", "d", 5);
    graph.add_edge("d", "a", 2);
    graph
}

fn weighted_undirected() -> Graph<u32> {
    let mut graph = Graph::undirected();
    graph.add_edge(1, 2, 4);
    graph.add_edge(1, 3, 1);
    graph.add_edge(2, 3, 2);
    graph.add_edge(2, 4, 5);
    graph.add_edge(3, 4, 3);
    graph
}

#[test]
fn dijkstra_and_bellman_ford_agree_on_nonnegative_graph() {
    let graph = weighted_directed();
    let d = dijkstra(&graph, &"s").unwrap();
    let b = bellman_ford(&graph, &"s").unwrap();

    for v in graph.vertices() {
        assert_eq!(
            d.distance(v).unwrap().value(),
            b.distance(v).unwrap().value(),
            "distance mismatch at {v:?}"
        );
    }
}

#[test]
fn kruskal_and_prim_agree_on_total_weight() {
    let graph = weighted_undirected();
    let k = kruskal(&graph);
    let p = prim(&graph, &1).unwrap();

    assert_eq!(k.total_weight.value(), 6.0);
    assert_eq!(p.total_weight.value(), 6.0);
    assert_eq!(k.edge_count(), p.edge_count());
}

#[test]
fn topological_order_linearizes_every_edge() {
    let mut graph = Graph::directed();
    graph.add_edge("shirt", "tie", 1);
    graph.add_edge("tie", "jacket", 1);
    graph.add_edge("trousers", "shoes", 1);
    graph.add_edge("trousers", "belt", 1);
    graph.add_edge("belt", "jacket", 1);

    let result = dfs(&graph);
    assert!(result.is_dag);

    let pos = |v: &&str| result.topological.iter().position(|x| x == v).unwrap();
    for edge in graph.edges() {
        assert!(
            pos(&edge.from) < pos(&edge.to),
            "{:?} must precede {:?}",
            edge.from,
            edge.to
        );
    }
}

#[test]
fn dfs_flags_cycle_only_when_present() {
    let mut dag = Graph::directed();
    dag.add_edge(1, 2, 1);
    dag.add_edge(2, 3, 1);
    dag.add_edge(1, 3, 1);
    assert!(dfs(&dag).is_dag);

    let mut cyclic = dag.clone();
    cyclic.add_edge(3, 1, 1);
    assert!(!dfs(&cyclic).is_dag);
    // the flag is per call, so the dag answer is unchanged afterwards
    assert!(dfs(&dag).is_dag);
}

#[test]
fn scc_partition_matches_mutual_reachability() {
    let mut graph = Graph::directed();
    graph.add_edge(1, 2, 1);
    graph.add_edge(2, 3, 1);
    graph.add_edge(3, 1, 1);
    graph.add_edge(3, 4, 1);
    graph.add_edge(4, 5, 1);
    graph.add_edge(5, 4, 1);

    let components = strongly_connected_components(&graph);
    assert_eq!(components.len(), 2);

    let mut all: Vec<u32> = components.iter().flatten().copied().collect();
    all.sort_unstable();
    assert_eq!(all, vec![1, 2, 3, 4, 5]);

    let of = |v: u32| {
        components
            .iter()
            .position(|component| component.contains(&v))
            .unwrap()
    };
    assert_eq!(of(1), of(2));
    assert_eq!(of(2), of(3));
    assert_eq!(of(4), of(5));
    assert_ne!(of(3), of(4));
}

#[test]
fn repeated_queries_are_idempotent() {
    let graph = weighted_directed();

    assert_eq!(bfs(&graph, &"s").unwrap(), bfs(&graph, &"s").unwrap());

    let first = dfs(&graph);
    let second = dfs(&graph);
    assert_eq!(first.preorder, second.preorder);
    assert_eq!(first.topological, second.topological);
    assert_eq!(first.is_dag, second.is_dag);

    let d1 = dijkstra(&graph, &"s").unwrap();
    let d2 = dijkstra(&graph, &"s").unwrap();
    for v in graph.vertices() {
        assert_eq!(d1.distance(v).unwrap().value(), d2.distance(v).unwrap().value());
        assert_eq!(d1.parent(v), d2.parent(v));
    }

    let undirected = weighted_undirected();
    assert_eq!(
        kruskal(&undirected).total_weight.value(),
        kruskal(&undirected).total_weight.value()
    );
}

#[test]
fn three_vertex_dag_distances_parents_and_order() {
    let mut graph = Graph::directed();
    graph.add_edge("a", "b", 1);
    graph.add_edge("b", "c", 2);
    graph.add_edge("a", "c", 5);

    let paths = bellman_ford(&graph, &"a").unwrap();
    assert_eq!(paths.distance(&"a").unwrap().value(), 0.0);
    assert_eq!(paths.distance(&"b").unwrap().value(), 1.0);
    assert_eq!(paths.distance(&"c").unwrap().value(), 3.0);
    assert_eq!(paths.parent(&"c"), Some(&"b"));
    assert_eq!(paths.path_to(&"c").unwrap(), vec!["a", "b", "c"]);

    let topological = dfs(&graph).topological;
    let pos = |v: &str| topological.iter().position(|x| *x == v).unwrap();
    assert!(pos("a") < pos("b"));
    assert!(pos("b") < pos("c"));
}

#[test]
fn unknown_sources_are_rejected() {
    let graph = weighted_directed();

    assert!(matches!(
        bfs(&graph, &"nope"),
        Err(GraphError::UnknownVertex { .. })
    ));
    assert!(matches!(
        dijkstra(&graph, &"nope"),
        Err(GraphError::UnknownVertex { .. })
    ));
    assert!(matches!(
        bellman_ford(&graph, &"nope"),
        Err(GraphError::UnknownVertex { .. })
    ));
    assert!(matches!(
        prim(&graph, &"nope"),
        Err(GraphError::UnknownVertex { .. })
    ));
}

#[test]
fn empty_graph_is_total_for_query_free_algorithms() {
    let graph: Graph<u32> = Graph::directed();

    let traversal = dfs(&graph);
    assert!(traversal.preorder.is_empty() && traversal.is_dag);
    assert!(kruskal(&graph).edges.is_empty());
    assert!(strongly_connected_components(&graph).is_empty());
}

#[test]
fn prim_source_changes_tree_but_not_weight() {
    let graph = weighted_undirected();

    let from_1 = prim(&graph, &1).unwrap();
    let from_4 = prim(&graph, &4).unwrap();
    assert_eq!(from_1.total_weight.value(), from_4.total_weight.value());
    assert_ne!(from_1.parent, from_4.parent);
}
