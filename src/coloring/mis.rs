//! Coloring by repeated maximal-independent-set extraction.
//!
//! Round `c` takes the uncolored vertices and peels a maximal independent set
//! off them, Luby style: every candidate gets a priority, candidates that
//! outrank all of their candidate neighbors join the class, and those vertices
//! together with their neighbors leave the candidate set. Once no candidates
//! remain the class gets color `c` and the next round starts.
//!
//! The neighbor reduction is the masked `max` product from [`crate::sparse`],
//! evaluated row-parallel with rayon. Priorities are compared with
//! [`outranks`], so equal keys are settled by the lower vertex index and every
//! inner step selects at least the top-ranked candidate.

use rand::Rng;
use tracing::{debug, trace};

use crate::coloring::ordering::validate_order;
use crate::coloring::{Coloring, UNCOLORED};
use crate::config::{run_in, ParallelConfig};
use crate::error::Result;
use crate::graph::{reject_self_loops, Graph};
use crate::sparse::{masked_neighbor_max, outranks, BoolMatrix, BoolVector};

/// Colors `graph` with fresh uniform priorities drawn from `rng` at every step.
pub fn mis_coloring<G, R>(graph: &G, rng: &mut R) -> Result<Coloring>
where
    G: Graph + ?Sized,
    R: Rng + ?Sized,
{
    mis_coloring_with(graph, rng, &ParallelConfig::default())
}

/// [`mis_coloring`] with an explicit parallelism configuration.
pub fn mis_coloring_with<G, R>(graph: &G, rng: &mut R, cfg: &ParallelConfig) -> Result<Coloring>
where
    G: Graph + ?Sized,
    R: Rng + ?Sized,
{
    reject_self_loops(graph)?;
    let conflicts = BoolMatrix::symmetric_of(graph);
    let keys = vec![0.0; conflicts.nrows()];
    extract_classes(&conflicts, keys, cfg, |keys, candidates| {
        for v in candidates.iter_ones() {
            keys[v] = rng.gen();
        }
    })
}

/// Colors `graph` with fixed priorities: vertices earlier in `order` win.
///
/// Deterministic for a given order.
pub fn mis_coloring_with_order<G: Graph + ?Sized>(graph: &G, order: &[usize]) -> Result<Coloring> {
    mis_coloring_ordered_with(graph, order, &ParallelConfig::default())
}

/// [`mis_coloring_with_order`] with an explicit parallelism configuration.
pub fn mis_coloring_ordered_with<G: Graph + ?Sized>(
    graph: &G,
    order: &[usize],
    cfg: &ParallelConfig,
) -> Result<Coloring> {
    reject_self_loops(graph)?;
    let n = graph.node_count();
    validate_order(order, n)?;
    let mut keys = vec![0.0; n];
    for (pos, &v) in order.iter().enumerate() {
        keys[v] = (n - pos) as f64;
    }
    let conflicts = BoolMatrix::symmetric_of(graph);
    extract_classes(&conflicts, keys, cfg, |_, _| {})
}

/// Colors `graph` with largest-degree-first priorities.
///
/// Degrees are taken in the symmetric closure. Equal degrees are ordered by a
/// random secondary key drawn once per run, then by vertex index.
pub fn mis_coloring_degree<G, R>(graph: &G, rng: &mut R) -> Result<Coloring>
where
    G: Graph + ?Sized,
    R: Rng + ?Sized,
{
    mis_coloring_degree_with(graph, rng, &ParallelConfig::default())
}

/// [`mis_coloring_degree`] with an explicit parallelism configuration.
pub fn mis_coloring_degree_with<G, R>(
    graph: &G,
    rng: &mut R,
    cfg: &ParallelConfig,
) -> Result<Coloring>
where
    G: Graph + ?Sized,
    R: Rng + ?Sized,
{
    reject_self_loops(graph)?;
    let conflicts = BoolMatrix::symmetric_of(graph);
    // Secondary keys stay below one half, so `d + key` cannot round up to `d + 1`.
    let keys = (0..conflicts.nrows())
        .map(|v| conflicts.row(v).len() as f64 + rng.gen_range(0.0..0.5))
        .collect();
    extract_classes(&conflicts, keys, cfg, |_, _| {})
}

/// The round loop shared by all variants.
///
/// `conflicts` must be symmetric and loop-free. `refresh` may rewrite the keys
/// of the current candidates before each inner step.
fn extract_classes<F>(
    conflicts: &BoolMatrix,
    mut keys: Vec<f64>,
    cfg: &ParallelConfig,
    mut refresh: F,
) -> Result<Coloring>
where
    F: FnMut(&mut [f64], &BoolVector),
{
    let n = conflicts.nrows();
    let pool = cfg.build_pool()?;
    let mut colors = vec![UNCOLORED; n];
    let mut uncolored = BoolVector::full(n);
    let mut color = 0;

    while uncolored.any() {
        let mut candidates = uncolored.clone();
        let mut class = Vec::new();
        let mut steps = 0usize;

        while candidates.any() {
            refresh(keys.as_mut_slice(), &candidates);
            let best = run_in(pool.as_ref(), || {
                masked_neighbor_max(conflicts, &keys, &candidates, cfg)
            });
            let selected: Vec<usize> = candidates
                .iter_ones()
                .filter(|&v| best[v].map_or(true, |u| outranks(&keys, v, u)))
                .collect();
            for &v in &selected {
                candidates.unset(v);
                for &u in conflicts.row(v) {
                    candidates.unset(u);
                }
            }
            trace!(
                round = color,
                step = steps,
                selected = selected.len(),
                candidates = candidates.count_ones(),
                "mis step"
            );
            class.extend(selected);
            steps += 1;
        }

        for &v in &class {
            colors[v] = color;
            uncolored.unset(v);
        }
        debug!(
            round = color,
            selected = class.len(),
            remaining = uncolored.count_ones(),
            steps,
            "mis round"
        );
        color += 1;
    }

    Ok(Coloring {
        num_colors: color,
        colors,
    })
}
