//! Greedy coloring drivers that try several vertex orders and keep the best.

use rand::Rng;
use tracing::debug;

use crate::coloring::greedy::first_fit;
use crate::coloring::ordering::{degree_order, degree_order_shuffled, random_order};
use crate::coloring::Coloring;
use crate::error::{GraphError, Result};
use crate::graph::{reject_self_loops, CsrGraph, Graph};

/// Greedy coloring in largest-degree-first order, ties by vertex index.
pub fn degree_order_and_color<G: Graph + ?Sized>(graph: &G) -> Result<Coloring> {
    let conflicts = conflict_graph(graph)?;
    Ok(first_fit(&conflicts, &degree_order(&conflicts)))
}

/// Greedy coloring in a uniformly random order.
pub fn shuffle_and_color<G, R>(graph: &G, rng: &mut R) -> Result<Coloring>
where
    G: Graph + ?Sized,
    R: Rng + ?Sized,
{
    shuffle_and_color_n_times(graph, 1, rng)
}

/// Best of `runs` largest-degree-first colorings, equal degrees shuffled per run.
pub fn degree_order_and_color_n_times<G, R>(graph: &G, runs: usize, rng: &mut R) -> Result<Coloring>
where
    G: Graph + ?Sized,
    R: Rng + ?Sized,
{
    best_of(graph, runs, |conflicts| {
        degree_order_shuffled(conflicts, rng)
    })
}

/// Best of `runs` greedy colorings, each in a fresh random order.
pub fn shuffle_and_color_n_times<G, R>(graph: &G, runs: usize, rng: &mut R) -> Result<Coloring>
where
    G: Graph + ?Sized,
    R: Rng + ?Sized,
{
    best_of(graph, runs, |conflicts| {
        random_order(conflicts.node_count(), rng)
    })
}

fn conflict_graph<G: Graph + ?Sized>(graph: &G) -> Result<CsrGraph> {
    reject_self_loops(graph)?;
    Ok(CsrGraph::symmetric_of(graph))
}

/// Fewest colors wins; the earliest run wins ties.
fn best_of<G, F>(graph: &G, runs: usize, mut next_order: F) -> Result<Coloring>
where
    G: Graph + ?Sized,
    F: FnMut(&CsrGraph) -> Vec<usize>,
{
    if runs == 0 {
        return Err(GraphError::ZeroRuns);
    }
    let conflicts = conflict_graph(graph)?;
    let mut best = first_fit(&conflicts, &next_order(&conflicts));
    for run in 1..runs {
        let candidate = first_fit(&conflicts, &next_order(&conflicts));
        if candidate.num_colors < best.num_colors {
            debug!(run, num_colors = candidate.num_colors, "greedy run improved");
            best = candidate;
        }
    }
    Ok(best)
}
