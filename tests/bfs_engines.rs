use std::collections::HashMap;

use pargraphs::concurrency::AtomicOwnershipArray;
use pargraphs::{
    bfs_matrix, bfs_matrix_into, bfs_matrix_with, bfs_par, bfs_par_into, bfs_par_with, bfs_seq,
    bfs_seq_into, AdjListGraph, BoolMatrix, CsrGraph, Graph, GraphError, ParallelConfig,
    UNVISITED,
};
use petgraph::algo::dijkstra;
use petgraph::graph::{DiGraph, NodeIndex};
use proptest::prelude::*;

/// Hop distances from `source`, computed by petgraph.
fn oracle_depths(n: usize, edges: &[(usize, usize)], source: usize) -> Vec<Option<usize>> {
    let mut g = DiGraph::<(), ()>::new();
    let nodes: Vec<NodeIndex> = (0..n).map(|_| g.add_node(())).collect();
    for &(u, v) in edges {
        g.add_edge(nodes[u], nodes[v], ());
    }
    let dist: HashMap<NodeIndex, usize> = dijkstra(&g, nodes[source], None, |_| 1usize);
    nodes.iter().map(|ix| dist.get(ix).copied()).collect()
}

fn cfg(threads: usize) -> ParallelConfig {
    ParallelConfig::default()
        .with_threads(threads)
        .with_min_parallel_rows(0)
}

#[test]
fn four_cycle_parents_and_depths() {
    let g = CsrGraph::undirected_from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();

    let seq = bfs_seq(&g, 0).unwrap();
    assert_eq!(seq.as_slice(), &[0, 0, 1, 0]);

    for tree in [bfs_par(&g, 0).unwrap(), bfs_matrix(&g, 0).unwrap()] {
        assert_eq!(tree.parent(0), Some(0));
        assert_eq!(tree.parent(1), Some(0));
        assert_eq!(tree.parent(3), Some(0));
        assert!(matches!(tree.parent(2), Some(1 | 3)));
        assert_eq!(tree.depths(), vec![Some(0), Some(1), Some(2), Some(1)]);
    }

    // The matrix engine breaks the tie toward the lower predecessor.
    assert_eq!(bfs_matrix(&g, 0).unwrap().parent(2), Some(1));
}

#[test]
fn unreachable_vertices_stay_unvisited() {
    // 0 -> 1 -> 2, and 3 isolated.
    let g = CsrGraph::from_edges(4, &[(0, 1), (1, 2)]).unwrap();
    for tree in [
        bfs_seq(&g, 0).unwrap(),
        bfs_par_with(&g, 0, &cfg(3)).unwrap(),
        bfs_matrix_with(&g, 0, &cfg(2)).unwrap(),
    ] {
        assert_eq!(tree.as_slice(), &[0, 0, 1, UNVISITED]);
        assert_eq!(tree.reached_count(), 3);
        assert_eq!(tree.path_to(2), Some(vec![0, 1, 2]));
        assert_eq!(tree.path_to(3), None);
    }
}

#[test]
fn edges_are_followed_in_their_direction_only() {
    let g = CsrGraph::from_edges(3, &[(1, 0), (1, 2)]).unwrap();
    let tree = bfs_par(&g, 0).unwrap();
    assert_eq!(tree.as_slice(), &[0, UNVISITED, UNVISITED]);
    let tree = bfs_matrix(&g, 1).unwrap();
    assert_eq!(tree.as_slice(), &[1, 1, 1]);
}

#[test]
fn bad_sources_are_rejected_by_every_engine() {
    let g = AdjListGraph::with_nodes(3);
    let empty = CsrGraph::default();
    for result in [bfs_seq(&g, 3), bfs_par(&g, 3), bfs_matrix(&g, 3), bfs_par(&empty, 0)] {
        assert!(matches!(result, Err(GraphError::VertexOutOfRange { .. })));
    }
}

#[test]
fn into_variants_validate_and_fill_buffers() {
    let g = CsrGraph::undirected_from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]).unwrap();

    let short = AtomicOwnershipArray::new(4);
    assert!(matches!(
        bfs_par_into(&g, 0, &short, &cfg(2)),
        Err(GraphError::BufferLength { expected: 5, actual: 4 })
    ));

    let mut dirty = vec![UNVISITED; 5];
    dirty[3] = 0;
    assert!(matches!(
        bfs_seq_into(&g, 0, &mut dirty),
        Err(GraphError::BufferNotCleared { index: 3 })
    ));

    let claimed = AtomicOwnershipArray::new(5);
    assert!(claimed.try_claim(2, 1));
    assert!(matches!(
        bfs_par_into(&g, 0, &claimed, &cfg(2)),
        Err(GraphError::BufferNotCleared { index: 2 })
    ));

    let mut seq = vec![UNVISITED; 5];
    let seq_stats = bfs_seq_into(&g, 4, &mut seq).unwrap();

    let par = AtomicOwnershipArray::new(5);
    let par_stats = bfs_par_into(&g, 4, &par, &cfg(4)).unwrap();

    let a_t = BoolMatrix::transpose_of(&g);
    let mut mat = vec![UNVISITED; 5];
    let mat_stats = bfs_matrix_into(&a_t, 4, &mut mat, &cfg(2)).unwrap();

    for (parents, stats) in [(seq, seq_stats), (par.into_vec(), par_stats), (mat, mat_stats)] {
        assert_eq!(parents, vec![1, 2, 3, 4, 4]);
        assert_eq!(stats.reached, 5);
        assert_eq!(stats.levels, 5);
    }
}

#[test]
fn engines_agree_on_a_large_random_graph() {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    let n = 3000;
    let mut rng = StdRng::seed_from_u64(42);
    let edges: Vec<(usize, usize)> = (0..12_000)
        .map(|_| (rng.gen_range(0..n), rng.gen_range(0..n)))
        .collect();
    let g = CsrGraph::from_edges(n, &edges).unwrap();
    let expected = oracle_depths(n, &edges, 0);

    let seq = bfs_seq(&g, 0).unwrap();
    assert_eq!(seq.depths(), expected);
    for threads in [1, 2, 8] {
        let par = bfs_par_with(&g, 0, &cfg(threads)).unwrap();
        assert_eq!(par.depths(), expected, "threads = {threads}");
        assert!(par.is_bfs_tree_of(&g));
    }
    let mat = bfs_matrix_with(&g, 0, &cfg(4)).unwrap();
    assert_eq!(mat.depths(), expected);
    assert!(mat.is_bfs_tree_of(&g));
}

fn graph_and_source() -> impl Strategy<Value = (usize, Vec<(usize, usize)>, usize)> {
    (1usize..40).prop_flat_map(|n| {
        (
            Just(n),
            proptest::collection::vec((0..n, 0..n), 0..120),
            0..n,
        )
    })
}

proptest! {
    #[test]
    fn every_engine_matches_petgraph_distances((n, edges, source) in graph_and_source()) {
        let g = CsrGraph::from_edges(n, &edges).unwrap();
        let expected = oracle_depths(n, &edges, source);

        let seq = bfs_seq(&g, source).unwrap();
        let par = bfs_par_with(&g, source, &cfg(3)).unwrap();
        let mat = bfs_matrix_with(&g, source, &cfg(2)).unwrap();

        for tree in [&seq, &par, &mat] {
            prop_assert_eq!(tree.depths(), expected.clone());
            prop_assert_eq!(tree.parent(source), Some(source));
            prop_assert!(tree.is_bfs_tree_of(&g));
            for v in 0..n {
                if let Some(p) = tree.parent(v) {
                    if v != source {
                        prop_assert!(g.neighbors(p).contains(&v));
                    }
                }
            }
        }
    }
}
