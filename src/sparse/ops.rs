//! Masked sparse matrix-vector kernels.
//!
//! Both kernels are "pull" products: every output row reads its own row of the
//! matrix and reduces over the columns that pass the input mask. Rows are
//! independent, so they are evaluated in parallel with rayon once the matrix
//! reaches `ParallelConfig::min_parallel_rows`.

use rayon::prelude::*;

use crate::config::ParallelConfig;
use crate::sparse::{BoolMatrix, BoolVector};

/// Evaluates `f` for every row index, in parallel above the configured cutoff.
fn map_rows<T, F>(nrows: usize, cfg: &ParallelConfig, f: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize) -> T + Sync + Send,
{
    if nrows < cfg.min_parallel_rows {
        (0..nrows).map(f).collect()
    } else {
        (0..nrows).into_par_iter().map(f).collect()
    }
}

/// Like [`map_rows`], keeping only the `Some` results (in row order).
fn filter_map_rows<T, F>(nrows: usize, cfg: &ParallelConfig, f: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize) -> Option<T> + Sync + Send,
{
    if nrows < cfg.min_parallel_rows {
        (0..nrows).filter_map(f).collect()
    } else {
        (0..nrows).into_par_iter().filter_map(f).collect()
    }
}

/// `next⟨¬visited⟩ = Aᵀ min.first frontier`.
///
/// For every row `v` outside `visited`, reduces over the columns `u` of `Aᵀ`
/// (the in-neighbors of `v`) that are set in `frontier`, keeping the smallest
/// `u`. Returns `(v, u)` for each row with a non-empty reduction, in increasing
/// `v`. The structural result is the boolean OR-AND product; `u` is the
/// recorded parent.
pub fn mxv_min_first_masked(
    a_t: &BoolMatrix,
    frontier: &BoolVector,
    visited: &BoolVector,
    cfg: &ParallelConfig,
) -> Vec<(usize, usize)> {
    debug_assert_eq!(frontier.len(), a_t.nrows());
    debug_assert_eq!(visited.len(), a_t.nrows());
    filter_map_rows(a_t.nrows(), cfg, |v| {
        if visited.get(v) {
            return None;
        }
        a_t.row(v)
            .iter()
            .copied()
            .filter(|&u| frontier.get(u))
            .min()
            .map(|u| (v, u))
    })
}

/// Returns `true` if `a` outranks `b`: larger key, ties broken by smaller index.
///
/// This is a strict total order over vertices for any key vector without NaNs.
#[inline(always)]
pub fn outranks(keys: &[f64], a: usize, b: usize) -> bool {
    keys[a] > keys[b] || (keys[a] == keys[b] && a < b)
}

/// Masked neighbor-max reduction.
///
/// For every row `v` set in `active`, returns the top-ranked column `u != v`
/// of row `v` that is also set in `active` (ranking by [`outranks`]). Rows
/// outside `active`, and active rows with no active neighbor, yield `None`.
pub fn masked_neighbor_max(
    pattern: &BoolMatrix,
    keys: &[f64],
    active: &BoolVector,
    cfg: &ParallelConfig,
) -> Vec<Option<usize>> {
    debug_assert_eq!(keys.len(), pattern.nrows());
    debug_assert_eq!(active.len(), pattern.nrows());
    map_rows(pattern.nrows(), cfg, |v| {
        if !active.get(v) {
            return None;
        }
        pattern
            .row(v)
            .iter()
            .copied()
            .filter(|&u| u != v && active.get(u))
            .fold(None, |best, u| match best {
                Some(b) if !outranks(keys, u, b) => Some(b),
                _ => Some(u),
            })
    })
}
