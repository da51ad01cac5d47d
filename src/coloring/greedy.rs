//! Sequential first-fit coloring.

use crate::coloring::ordering::validate_order;
use crate::coloring::{Coloring, UNCOLORED};
use crate::error::Result;
use crate::graph::{reject_self_loops, CsrGraph, Graph};

/// Colors `graph` first-fit, visiting vertices in `order`.
///
/// Each vertex gets the smallest color not used by an already-colored
/// neighbor (in either edge direction). The result depends only on `order`.
///
/// Fails on self-loops and on an `order` that is not a permutation of the vertices.
pub fn greedy_coloring<G: Graph + ?Sized>(graph: &G, order: &[usize]) -> Result<Coloring> {
    reject_self_loops(graph)?;
    validate_order(order, graph.node_count())?;
    let conflicts = CsrGraph::symmetric_of(graph);
    Ok(first_fit(&conflicts, order))
}

/// First-fit over a symmetric, loop-free conflict graph and a valid order.
pub(crate) fn first_fit(conflicts: &CsrGraph, order: &[usize]) -> Coloring {
    let n = conflicts.node_count();
    let mut colors = vec![UNCOLORED; n];
    // `stamp[c] == v` marks color `c` as taken while coloring `v`. A vertex of
    // degree d always finds a free color in `0..=d`, so larger colors are irrelevant.
    let mut stamp = vec![UNCOLORED; conflicts.max_degree() + 1];
    let mut num_colors = 0;

    for &v in order {
        for &u in conflicts.neighbors(v) {
            let c = colors[u];
            if c < stamp.len() {
                stamp[c] = v;
            }
        }
        let c = stamp
            .iter()
            .position(|&s| s != v)
            .unwrap_or(stamp.len());
        colors[v] = c;
        num_colors = num_colors.max(c + 1);
    }

    Coloring { num_colors, colors }
}
