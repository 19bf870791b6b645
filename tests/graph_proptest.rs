use std::collections::{BTreeMap, HashSet};

use frozen_graph::{Edge, ErrorKind, Graph, GraphBuilder};
use petgraph::graphmap::DiGraphMap;
use proptest::prelude::*;

/// Edges with pairwise-distinct endpoints, in a shuffled order.
fn distinct_edges() -> impl Strategy<Value = Vec<Edge>> {
    proptest::collection::btree_map((-20i32..20, -20i32..20), -1000.0f32..1000.0, 0..120)
        .prop_map(|m: BTreeMap<(i32, i32), f32>| {
            m.into_iter()
                .map(|((s, d), w)| Edge::new(s, d, w))
                .collect::<Vec<_>>()
        })
        .prop_shuffle()
}

proptest! {
    #[test]
    fn iteration_matches_input_set(edges in distinct_edges()) {
        let graph = Graph::from_edges(edges.iter().copied()).unwrap();
        let got: HashSet<Edge> = graph.iter().collect();
        let want: HashSet<Edge> = edges.iter().copied().collect();
        prop_assert_eq!(got, want);
        prop_assert_eq!(graph.size(), edges.len());
    }

    #[test]
    fn rows_are_sorted(edges in distinct_edges()) {
        let graph = Graph::from_edges(edges).unwrap();
        let s = graph.sources();
        let d = graph.destinations();
        for i in 1..graph.size() {
            prop_assert!(s[i - 1] < s[i] || (s[i - 1] == s[i] && d[i - 1] <= d[i]));
        }
    }

    #[test]
    fn lookups_agree_with_petgraph(edges in distinct_edges(), probes in proptest::collection::vec((-25i32..25, -25i32..25), 0..64)) {
        let graph = Graph::from_edges(edges.iter().copied()).unwrap();
        let mut oracle = DiGraphMap::<i32, f32>::new();
        for e in &edges {
            oracle.add_edge(e.source(), e.destination(), e.weight());
        }

        for e in &edges {
            prop_assert_eq!(graph.get_edge_value(e.source(), e.destination()), Some(e.weight()));
        }
        for (s, d) in probes {
            prop_assert_eq!(graph.get_edge_value(s, d), oracle.edge_weight(s, d).copied());
        }
    }

    #[test]
    fn vertex_iter_matches_petgraph_neighbors(edges in distinct_edges(), vertex in -22i32..22) {
        let graph = Graph::from_edges(edges.iter().copied()).unwrap();
        let mut oracle = DiGraphMap::<i32, f32>::new();
        for e in &edges {
            oracle.add_edge(e.source(), e.destination(), e.weight());
        }

        let got: Vec<i32> = graph.vertex_iter(vertex).map(|e| e.destination()).collect();
        let mut want: Vec<i32> = if oracle.contains_node(vertex) {
            oracle.neighbors(vertex).collect()
        } else {
            Vec::new()
        };
        want.sort_unstable();
        prop_assert_eq!(&got, &want);
        prop_assert_eq!(graph.out_degree(vertex), want.len());
    }

    #[test]
    fn capacity_boundary(capacity in 0usize..40) {
        let mut builder = GraphBuilder::new(capacity);
        for i in 0..capacity {
            let i = i32::try_from(i).unwrap();
            builder.add(i, i, 0.5).unwrap();
        }
        let err = builder.add(-1, -1, 0.5).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::CapacityExceeded);
        prop_assert_eq!(builder.build().unwrap().size(), capacity);
    }

    #[test]
    fn any_duplicate_is_rejected(edges in distinct_edges().prop_filter("non-empty", |e| !e.is_empty()), pick in any::<prop::sample::Index>(), weight in -10.0f32..10.0) {
        let dup = pick.get(&edges);
        let mut all = edges.clone();
        all.push(Edge::new(dup.source(), dup.destination(), weight));

        let mut builder = GraphBuilder::new(all.len());
        builder.add_edges(all).unwrap();
        prop_assert_eq!(builder.build().unwrap_err().kind(), ErrorKind::InvalidArgument);
    }
}
