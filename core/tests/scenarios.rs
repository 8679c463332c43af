//! End-to-end scenarios on small fixed graphs.

use graph_search_core::{BreadthFirstSearch, DepthFirstSearch, Graph, GraphError, Level};

fn binary_tree() -> Graph {
    Graph::from_edges(7, [(0, 1), (0, 2), (1, 3), (1, 4), (2, 5), (2, 6)]).unwrap()
}

#[test]
fn bfs_binary_tree_queries() {
    let g = binary_tree();
    let bfs = BreadthFirstSearch::new(&g);

    let distances: Vec<usize> = bfs.distances(0).unwrap().into_iter().flatten().collect();
    assert_eq!(distances, vec![0, 1, 1, 2, 2, 2, 2]);

    assert_eq!(bfs.shortest_path(0, 6).unwrap(), vec![0, 2, 6]);

    let levels: Vec<(usize, Vec<usize>)> = bfs
        .levels(0)
        .unwrap()
        .into_iter()
        .map(|Level { depth, vertices }| (depth, vertices))
        .collect();
    assert_eq!(
        levels,
        vec![(0, vec![0]), (1, vec![1, 2]), (2, vec![3, 4, 5, 6])]
    );
}

#[test]
fn dfs_disconnected_graph() {
    let g = Graph::from_edges(7, [(0, 1), (0, 2), (3, 4), (5, 6)]).unwrap();
    let dfs = DepthFirstSearch::new(&g);
    assert_eq!(dfs.connected_component_count(), 3);
    assert!(!dfs.has_cycle());
    assert!(dfs.find_path(0, 6).unwrap().is_empty());

    let bfs = BreadthFirstSearch::new(&g);
    assert!(bfs.shortest_path(0, 6).unwrap().is_empty());
    assert_eq!(bfs.distances(0).unwrap()[6], None);
}

#[test]
fn dfs_cycle_detection() {
    let square = Graph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
    assert!(DepthFirstSearch::new(&square).has_cycle());

    let tree = Graph::from_edges(5, [(0, 1), (0, 2), (1, 3), (1, 4)]).unwrap();
    assert!(!DepthFirstSearch::new(&tree).has_cycle());
}

#[test]
fn trivial_paths_to_self() {
    let g = binary_tree();
    for v in g.vertices() {
        assert_eq!(DepthFirstSearch::new(&g).find_path(v, v).unwrap(), vec![v]);
        assert_eq!(BreadthFirstSearch::new(&g).shortest_path(v, v).unwrap(), vec![v]);
    }
}

#[test]
fn invalid_vertices_rejected_everywhere() {
    let mut g = binary_tree();
    let out_of_range =
        |r: Result<(), GraphError>| matches!(r, Err(GraphError::OutOfRange { vertex: 7, .. }));

    let bfs = BreadthFirstSearch::new(&g);
    assert!(out_of_range(bfs.traverse(7).map(drop)));
    assert!(out_of_range(bfs.distances(7).map(drop)));
    assert!(out_of_range(bfs.levels(7).map(drop)));
    assert!(out_of_range(bfs.shortest_path(0, 7).map(drop)));
    assert!(out_of_range(bfs.neighborhood(7, 2).map(drop)));

    let dfs = DepthFirstSearch::new(&g);
    assert!(out_of_range(dfs.traverse_recursive(7).map(drop)));
    assert!(out_of_range(dfs.traverse_iterative(7).map(drop)));
    assert!(out_of_range(dfs.find_path(7, 0).map(drop)));
    assert!(out_of_range(dfs.nodes_at_depth(7, 1).map(drop)));

    assert!(out_of_range(g.neighbors(7).map(drop)));
    assert!(out_of_range(g.add_edge(0, 7)));
    assert_eq!(g.neighbors(0).unwrap(), &[1, 2]);
}

#[test]
fn zero_vertex_graph_rejected() {
    assert!(matches!(Graph::new(0), Err(GraphError::InvalidArgument(_))));
}

#[test]
fn dfs_depth_differs_from_bfs_distance() {
    // 0-1-2-3 plus a shortcut 0-3: DFS reaches 3 at depth 3 via the chain,
    // BFS puts it at distance 1.
    let g = Graph::from_edges(4, [(0, 1), (1, 2), (2, 3), (0, 3)]).unwrap();
    let dfs = DepthFirstSearch::new(&g);
    let bfs = BreadthFirstSearch::new(&g);

    assert_eq!(dfs.nodes_at_depth(0, 3).unwrap(), vec![3]);
    assert_eq!(bfs.distances(0).unwrap()[3], Some(1));
    assert_eq!(dfs.nodes_at_depth(0, 1).unwrap(), vec![1, 3]);
}
