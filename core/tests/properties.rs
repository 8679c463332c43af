//! Property tests relating the BFS and DFS queries to each other over
//! random undirected graphs, including self-loops and parallel edges.

use graph_search_core::{BreadthFirstSearch, DepthFirstSearch, Graph};
use proptest::{
    collection::vec,
    prelude::{prop_assert, prop_assert_eq, Just, Strategy},
    proptest,
    test_runner::Config as ProptestConfig,
};

const PROP_CASES: u32 = 256;
const MAX_VERTICES: usize = 24;
const MAX_EDGES: usize = 48;

fn graph_strategy() -> impl Strategy<Value = Graph> {
    (1..=MAX_VERTICES).prop_flat_map(|n| {
        vec((0..n, 0..n), 0..=MAX_EDGES)
            .prop_map(move |edges| Graph::from_edges(n, edges).expect("edges in range"))
    })
}

fn graph_with_pair() -> impl Strategy<Value = (Graph, usize, usize)> {
    graph_strategy().prop_flat_map(|g| {
        let n = g.vertex_count();
        (Just(g), 0..n, 0..n)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(PROP_CASES))]

    #[test]
    fn shortest_path_length_matches_distance((g, start, end) in graph_with_pair()) {
        let bfs = BreadthFirstSearch::new(&g);
        let path = bfs.shortest_path(start, end).unwrap();
        match bfs.distances(start).unwrap()[end] {
            Some(d) => {
                prop_assert_eq!(path.len(), d + 1);
            }
            None => {
                prop_assert!(path.is_empty());
            }
        }
    }

    #[test]
    fn shortest_path_is_a_walk((g, start, end) in graph_with_pair()) {
        let path = BreadthFirstSearch::new(&g).shortest_path(start, end).unwrap();
        if let (Some(first), Some(last)) = (path.first(), path.last()) {
            prop_assert_eq!(*first, start);
            prop_assert_eq!(*last, end);
        }
        for hop in path.windows(2) {
            prop_assert!(g.neighbors(hop[0]).unwrap().contains(&hop[1]));
        }
    }

    #[test]
    fn unreachable_iff_absent_from_traverse((g, start, _end) in graph_with_pair()) {
        let bfs = BreadthFirstSearch::new(&g);
        let order = bfs.traverse(start).unwrap();
        let distances = bfs.distances(start).unwrap();
        prop_assert_eq!(distances[start], Some(0));
        for v in g.vertices() {
            prop_assert_eq!(distances[v].is_none(), !order.contains(&v));
        }
    }

    #[test]
    fn recursive_and_iterative_dfs_agree((g, start, _end) in graph_with_pair()) {
        let dfs = DepthFirstSearch::new(&g);
        prop_assert_eq!(
            dfs.traverse_recursive(start).unwrap(),
            dfs.traverse_iterative(start).unwrap()
        );
    }

    #[test]
    fn flattened_levels_equal_traverse((g, start, _end) in graph_with_pair()) {
        let bfs = BreadthFirstSearch::new(&g);
        let levels = bfs.levels(start).unwrap();
        prop_assert_eq!(&levels[0].vertices, &vec![start]);
        for (i, level) in levels.iter().enumerate() {
            prop_assert_eq!(level.depth, i);
        }
        let flat: Vec<usize> = levels.into_iter().flat_map(|l| l.vertices).collect();
        prop_assert_eq!(flat, bfs.traverse(start).unwrap());
    }

    #[test]
    fn find_path_connects_endpoints((g, start, end) in graph_with_pair()) {
        let path = DepthFirstSearch::new(&g).find_path(start, end).unwrap();
        let reachable = BreadthFirstSearch::new(&g).is_reachable(start, end).unwrap();
        prop_assert_eq!(path.is_empty(), !reachable);
        for hop in path.windows(2) {
            prop_assert!(g.neighbors(hop[0]).unwrap().contains(&hop[1]));
        }
    }

    #[test]
    fn component_count_matches_reachability(g in graph_strategy()) {
        let bfs = BreadthFirstSearch::new(&g);
        let roots = g
            .vertices()
            .filter(|&v| bfs.traverse(v).unwrap().into_iter().min() == Some(v))
            .count();
        let dfs = DepthFirstSearch::new(&g);
        prop_assert_eq!(dfs.connected_component_count(), roots);
        prop_assert_eq!(dfs.components().len(), roots);
    }

    #[test]
    fn cycle_iff_edges_exceed_forest_bound(g in graph_strategy()) {
        // A multigraph is a forest exactly when E == V - C.
        let dfs = DepthFirstSearch::new(&g);
        let forest_edges = g.vertex_count() - dfs.connected_component_count();
        prop_assert_eq!(dfs.has_cycle(), g.edge_count() > forest_edges);
    }

    #[test]
    fn add_edge_appends_each_endpoint_once((g, u, v) in graph_with_pair()) {
        let mut g = g;
        let count = |g: &Graph, at: usize, of: usize| {
            g.neighbors(at).unwrap().iter().filter(|&&x| x == of).count()
        };
        let before_uv = count(&g, u, v);
        let before_vu = count(&g, v, u);
        g.add_edge(u, v).unwrap();
        if u == v {
            prop_assert_eq!(count(&g, u, u), before_uv + 2);
        } else {
            prop_assert_eq!(count(&g, u, v), before_uv + 1);
            prop_assert_eq!(count(&g, v, u), before_vu + 1);
        }
    }
}
