use std::collections::HashMap;

use pathgraph::{
    DirectedGraph, Error, Graph, HeuristicCost, ShortestPaths, SparseStore, UndirectedGraph,
    VertexId, NO_VERTEX,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Test helper wrapping a weight table in an edge-weight function. Missing
// edges weigh positive infinity.
fn weight_fn(weights: HashMap<(VertexId, VertexId), f64>) -> impl Fn(VertexId, VertexId) -> f64 {
    move |u: VertexId, v: VertexId| weights.get(&(u, v)).copied().unwrap_or(f64::INFINITY)
}

fn unit_weights(_u: VertexId, _v: VertexId) -> f64 {
    1.0
}

#[test]
fn test_star_graph_single_source() {
    let mut g = DirectedGraph::new();
    for _ in 0..5 {
        g.add();
    }
    g.add_edge(1, 2);
    g.add_edge(1, 3);
    g.add_edge(1, 4);
    g.add_edge(1, 5);

    let mut paths = ShortestPaths::new(&g, 1, unit_weights);
    paths.set_paths().expect("search should succeed");

    assert_eq!(paths.get_weight(1), 0.0);
    assert_eq!(paths.get_predecessor(1), NO_VERTEX);
    for v in 2..=5 {
        assert_eq!(paths.get_weight(v), 1.0, "Leaf {} is one hop away", v);
        assert_eq!(paths.get_predecessor(v), 1);
    }
}

#[test]
fn test_undirected_path_graph() {
    let mut g = UndirectedGraph::new();
    for _ in 0..4 {
        g.add();
    }
    g.add_edge(1, 2);
    g.add_edge(2, 3);
    g.add_edge(3, 4);

    let mut paths = ShortestPaths::with_dest(&g, 1, 4, unit_weights);
    paths.set_paths().expect("search should succeed");

    assert_eq!(paths.get_weight(4), 3.0);
    assert_eq!(paths.path_to_dest().unwrap(), vec![1, 2, 3, 4]);
}

#[test]
fn test_relaxation_prefers_lighter_detour() {
    let mut g = DirectedGraph::new();
    for _ in 0..3 {
        g.add();
    }
    g.add_edge(1, 2);
    g.add_edge(1, 3);
    g.add_edge(3, 2);

    let weights = HashMap::from([((1, 2), 10.0), ((1, 3), 1.0), ((3, 2), 1.0)]);
    let mut paths = ShortestPaths::new(&g, 1, weight_fn(weights));
    paths.set_paths().expect("search should succeed");

    assert_eq!(paths.get_weight(2), 2.0, "The two-hop detour is cheaper than the direct edge");
    assert_eq!(paths.get_predecessor(2), 3);
    assert_eq!(paths.path_to(2).unwrap(), vec![1, 3, 2]);
}

#[test]
fn test_unreachable_vertex() {
    let mut g = DirectedGraph::new();
    for _ in 0..4 {
        g.add();
    }
    g.add_edge(1, 2);
    g.add_edge(3, 4);

    let mut paths = ShortestPaths::new(&g, 1, unit_weights);
    paths.set_paths().expect("search should succeed");

    assert!(paths.get_weight(4).is_infinite());
    assert_eq!(paths.get_predecessor(4), NO_VERTEX);
    assert!(matches!(paths.path_to(4), Err(Error::Unreachable(4))));
}

#[test]
fn test_queries_before_set_paths() {
    let mut g = DirectedGraph::new();
    g.add();
    g.add();
    g.add_edge(1, 2);

    let paths = ShortestPaths::new(&g, 1, unit_weights);
    assert!(matches!(paths.path_to(2), Err(Error::PathsNotComputed)));
    assert!(
        paths.get_weight(2).is_infinite(),
        "Weights default to infinity before the search runs"
    );
}

#[test]
fn test_source_not_in_graph() {
    let mut g = DirectedGraph::new();
    g.add();

    let mut paths = ShortestPaths::new(&g, 7, unit_weights);
    assert!(matches!(paths.set_paths(), Err(Error::SourceNotFound)));
}

#[test]
fn test_path_to_dest_without_destination() {
    let mut g = DirectedGraph::new();
    g.add();

    let mut paths = ShortestPaths::new(&g, 1, unit_weights);
    paths.set_paths().expect("search should succeed");
    assert!(matches!(paths.path_to_dest(), Err(Error::NoDestination)));
}

#[test]
fn test_destination_stops_the_search() {
    let mut g = DirectedGraph::new();
    for _ in 0..5 {
        g.add();
    }
    g.add_edge(1, 2);
    g.add_edge(2, 3);
    g.add_edge(3, 4);
    g.add_edge(4, 5);

    let mut paths = ShortestPaths::with_dest(&g, 1, 3, unit_weights);
    paths.set_paths().expect("search should succeed");

    assert_eq!(paths.get_weight(3), 2.0);
    assert_eq!(paths.path_to_dest().unwrap(), vec![1, 2, 3]);
    assert!(
        paths.get_weight(5).is_infinite(),
        "Vertices past the destination are never relaxed"
    );
}

#[test]
fn test_self_edges_and_cycles_are_harmless() {
    let mut g = DirectedGraph::new();
    for _ in 0..3 {
        g.add();
    }
    g.add_edge(1, 2);
    g.add_edge(2, 2);
    g.add_edge(2, 3);
    g.add_edge(3, 2);

    let mut paths = ShortestPaths::new(&g, 1, unit_weights);
    paths.set_paths().expect("search should succeed");

    assert_eq!(paths.get_weight(2), 1.0);
    assert_eq!(paths.get_weight(3), 2.0);
    assert_eq!(paths.path_to(3).unwrap(), vec![1, 2, 3]);
}

#[test]
fn test_astar_matches_dijkstra() {
    let mut g = DirectedGraph::new();
    for _ in 0..10 {
        g.add();
    }
    for v in 1..10 {
        g.add_edge(v, v + 1);
    }

    let mut dijkstra = ShortestPaths::with_dest(&g, 1, 10, unit_weights);
    dijkstra.set_paths().expect("search should succeed");

    // Remaining hop count is an exact, hence admissible, estimate here.
    let costs = HeuristicCost::new(
        |_: VertexId, _: VertexId| 1.0,
        |v: VertexId| (10 - v) as f64,
    );
    let mut astar = ShortestPaths::with_dest(&g, 1, 10, costs);
    astar.set_paths().expect("search should succeed");

    assert_eq!(astar.get_weight(10), dijkstra.get_weight(10));
    assert_eq!(astar.path_to_dest().unwrap(), dijkstra.path_to_dest().unwrap());
}

#[test]
fn test_sparse_store_matches_dense() {
    let mut g = DirectedGraph::new();
    for _ in 0..6 {
        g.add();
    }
    g.add_edge(1, 2);
    g.add_edge(2, 3);
    g.add_edge(1, 4);
    g.add_edge(4, 5);
    g.add_edge(5, 3);
    let weights = HashMap::from([
        ((1, 2), 4.0),
        ((2, 3), 4.0),
        ((1, 4), 1.0),
        ((4, 5), 1.0),
        ((5, 3), 1.0),
    ]);

    let mut dense = ShortestPaths::new(&g, 1, weight_fn(weights.clone()));
    dense.set_paths().expect("search should succeed");

    let mut sparse =
        ShortestPaths::new(&g, 1, weight_fn(weights)).with_store(SparseStore::<f64>::new());
    sparse.set_paths().expect("search should succeed");

    for v in g.vertices() {
        assert_eq!(
            dense.get_weight(v),
            sparse.get_weight(v),
            "Stores should agree on the weight of {}",
            v
        );
    }
    assert_eq!(sparse.path_to(3).unwrap(), vec![1, 4, 5, 3]);
}

#[test]
fn test_recompute_after_mutation() {
    let mut g = DirectedGraph::new();
    for _ in 0..3 {
        g.add();
    }
    g.add_edge(1, 2);
    g.add_edge(2, 3);

    {
        let mut paths = ShortestPaths::new(&g, 1, unit_weights);
        paths.set_paths().expect("search should succeed");
        assert_eq!(paths.get_weight(3), 2.0);
    }

    g.add_edge(1, 3);
    let mut paths = ShortestPaths::new(&g, 1, unit_weights);
    paths.set_paths().expect("search should succeed");
    assert_eq!(paths.get_weight(3), 1.0, "The new shortcut should win");
}

// Reference implementation for the randomized check below.
fn bellman_ford(
    n: VertexId,
    edges: &[(VertexId, VertexId, f64)],
    source: VertexId,
) -> Vec<f64> {
    let mut dist = vec![f64::INFINITY; n + 1];
    dist[source] = 0.0;
    for _ in 0..n {
        for &(u, v, w) in edges {
            if dist[u].is_finite() && dist[u] + w < dist[v] {
                dist[v] = dist[u] + w;
            }
        }
    }
    dist
}

#[test]
fn test_random_graphs_match_reference() {
    for seed in 0..5u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let n = 30;

        let mut g = DirectedGraph::new();
        for _ in 0..n {
            g.add();
        }
        let mut edges = Vec::new();
        let mut table = HashMap::new();
        for u in 1..=n {
            for v in 1..=n {
                if u != v && rng.gen_bool(0.15) {
                    let w = rng.gen_range(0.5..8.0);
                    g.add_edge(u, v);
                    edges.push((u, v, w));
                    table.insert((u, v), w);
                }
            }
        }

        let reference = bellman_ford(n, &edges, 1);
        let mut paths = ShortestPaths::new(&g, 1, weight_fn(table.clone()));
        paths.set_paths().expect("search should succeed");

        for v in 1..=n {
            let expected = reference[v];
            let actual = paths.get_weight(v);
            if expected.is_infinite() {
                assert!(actual.is_infinite(), "Vertex {} should be unreachable (seed {})", v, seed);
                continue;
            }
            assert!(
                (actual - expected).abs() < 1e-9,
                "Weight mismatch at vertex {} (seed {}): {} vs {}",
                v,
                seed,
                actual,
                expected
            );

            // The reconstructed path must use real edges and sum to the
            // reported weight.
            let path = paths.path_to(v).unwrap();
            assert_eq!(*path.first().unwrap(), 1);
            assert_eq!(*path.last().unwrap(), v);
            let mut total = 0.0;
            for pair in path.windows(2) {
                assert!(g.contains_edge(pair[0], pair[1]), "Path must follow stored edges");
                total += table[&(pair[0], pair[1])];
            }
            assert!(
                (total - actual).abs() < 1e-9,
                "Path weight sum disagrees at vertex {} (seed {})",
                v,
                seed
            );
        }
    }
}
