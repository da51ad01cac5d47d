//! Single-threaded BFS baseline.
//!
//! Same contract as the parallel engines; used as the reference in tests and
//! as the distance oracle behind [`ParentMap::is_bfs_tree_of`].

use crate::error::Result;
use crate::graph::Graph;
use crate::traversal::parents::{check_parent_buffer, BfsStats, ParentMap, UNVISITED};

/// Runs a sequential BFS from `source` into a fresh parent map.
pub fn bfs_seq<G: Graph + ?Sized>(graph: &G, source: usize) -> Result<ParentMap> {
    graph.check_vertex(source)?;
    let mut parents = vec![UNVISITED; graph.node_count()];
    bfs_seq_into(graph, source, &mut parents)?;
    Ok(ParentMap::new(source, parents))
}

/// Runs a sequential BFS from `source`, writing parents into `parents`.
///
/// `parents` must have one slot per vertex, all set to [`UNVISITED`]. The first
/// discoverer of a vertex (in adjacency order) becomes its parent.
pub fn bfs_seq_into<G: Graph + ?Sized>(
    graph: &G,
    source: usize,
    parents: &mut [usize],
) -> Result<BfsStats> {
    graph.check_vertex(source)?;
    check_parent_buffer(parents, graph.node_count())?;

    parents[source] = source;
    let mut stats = BfsStats {
        levels: 0,
        reached: 1,
    };
    let mut frontier = vec![source];
    let mut next = Vec::new();
    while !frontier.is_empty() {
        stats.levels += 1;
        for &u in &frontier {
            for &v in graph.neighbors(u) {
                if parents[v] == UNVISITED {
                    parents[v] = u;
                    next.push(v);
                }
            }
        }
        stats.reached += next.len();
        core::mem::swap(&mut frontier, &mut next);
        next.clear();
    }
    Ok(stats)
}
