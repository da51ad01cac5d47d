//! BFS as repeated masked sparse matrix-vector products.
//!
//! With `visited` and `frontier` as boolean vectors, each level computes
//!
//! ```text
//! next⟨¬visited⟩ = Aᵀ ∨.∧ frontier
//! ```
//!
//! in a single pull over the rows of `Aᵀ`. The MIN-FIRST variant of the product
//! also yields, for every vertex entering `next`, its lowest-indexed frontier
//! predecessor, which is recorded as the parent. Parents are therefore
//! deterministic here, though they may differ from the parallel engine's.

use tracing::debug;

use crate::config::ParallelConfig;
use crate::error::{GraphError, Result};
use crate::graph::Graph;
use crate::sparse::{mxv_min_first_masked, BoolMatrix, BoolVector};
use crate::traversal::parents::{check_parent_buffer, BfsStats, ParentMap, UNVISITED};

/// Runs a matrix-formulated BFS from `source` with the default configuration.
pub fn bfs_matrix<G: Graph + ?Sized>(graph: &G, source: usize) -> Result<ParentMap> {
    bfs_matrix_with(graph, source, &ParallelConfig::default())
}

/// Builds `Aᵀ` for `graph` and runs a matrix-formulated BFS from `source`.
pub fn bfs_matrix_with<G: Graph + ?Sized>(
    graph: &G,
    source: usize,
    cfg: &ParallelConfig,
) -> Result<ParentMap> {
    graph.check_vertex(source)?;
    let a_t = BoolMatrix::transpose_of(graph);
    let mut parents = vec![UNVISITED; graph.node_count()];
    bfs_matrix_into(&a_t, source, &mut parents, cfg)?;
    Ok(ParentMap::new(source, parents))
}

/// Runs a matrix-formulated BFS over the transpose adjacency `a_t`.
///
/// `parents` must have one slot per row of `a_t`, all set to [`UNVISITED`].
pub fn bfs_matrix_into(
    a_t: &BoolMatrix,
    source: usize,
    parents: &mut [usize],
    cfg: &ParallelConfig,
) -> Result<BfsStats> {
    let n = a_t.nrows();
    if source >= n {
        return Err(GraphError::VertexOutOfRange {
            vertex: source,
            node_count: n,
        });
    }
    check_parent_buffer(parents, n)?;

    let stats = cfg.install(|| {
        let mut visited = BoolVector::new(n);
        let mut frontier = BoolVector::new(n);
        visited.set(source);
        frontier.set(source);
        parents[source] = source;

        let mut stats = BfsStats {
            levels: 0,
            reached: 1,
        };
        while frontier.any() {
            stats.levels += 1;
            let next = mxv_min_first_masked(a_t, &frontier, &visited, cfg);
            frontier.clear();
            for &(v, u) in &next {
                parents[v] = u;
                visited.set(v);
                frontier.set(v);
            }
            stats.reached += next.len();
            debug!(level = stats.levels - 1, next_frontier = next.len(), "matrix bfs level");
        }
        stats
    })?;

    debug!(source, levels = stats.levels, reached = stats.reached, "matrix bfs finished");
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::CsrGraph;

    #[test]
    fn four_cycle_prefers_lowest_predecessor() {
        let g = CsrGraph::undirected_from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
        let map = bfs_matrix(&g, 0).unwrap();
        assert_eq!(map.as_slice(), &[0, 0, 1, 0]);
        assert_eq!(map.depths(), vec![Some(0), Some(1), Some(2), Some(1)]);
    }

    #[test]
    fn follows_edge_direction() {
        // 1 -> 0 -> 2; from 0, vertex 1 is unreachable.
        let g = CsrGraph::from_edges(3, &[(1, 0), (0, 2)]).unwrap();
        let map = bfs_matrix(&g, 0).unwrap();
        assert_eq!(map.as_slice(), &[0, UNVISITED, 0]);
    }

    #[test]
    fn parallel_rows_match_sequential_rows() {
        let g = CsrGraph::undirected_from_edges(
            6,
            &[(0, 1), (0, 2), (1, 3), (2, 3), (3, 4), (4, 5), (2, 5)],
        )
        .unwrap();
        let a_t = BoolMatrix::transpose_of(&g);
        let seq_cfg = ParallelConfig::default().with_min_parallel_rows(usize::MAX);
        let par_cfg = ParallelConfig::default()
            .with_min_parallel_rows(0)
            .with_threads(2);

        let mut seq = vec![UNVISITED; 6];
        let mut par = vec![UNVISITED; 6];
        let a = bfs_matrix_into(&a_t, 0, &mut seq, &seq_cfg).unwrap();
        let b = bfs_matrix_into(&a_t, 0, &mut par, &par_cfg).unwrap();
        assert_eq!(seq, par);
        assert_eq!(a, b);
        assert_eq!(a, BfsStats { levels: 4, reached: 6 });
    }

    #[test]
    fn rejects_bad_inputs() {
        let g = CsrGraph::from_edges(2, &[(0, 1)]).unwrap();
        let a_t = BoolMatrix::transpose_of(&g);
        let cfg = ParallelConfig::default();
        let mut ok = vec![UNVISITED; 2];
        assert!(bfs_matrix_into(&a_t, 2, &mut ok, &cfg).is_err());
        let mut dirty = vec![UNVISITED, 0];
        assert!(matches!(
            bfs_matrix_into(&a_t, 0, &mut dirty, &cfg),
            Err(GraphError::BufferNotCleared { index: 1 })
        ));
    }
}
