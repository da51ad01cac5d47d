//! Vertex orders for the greedy colorer.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{GraphError, Result};
use crate::graph::Graph;

/// Checks that `order` is a permutation of `0..n`.
pub fn validate_order(order: &[usize], n: usize) -> Result<()> {
    if order.len() != n {
        return Err(GraphError::InvalidOrder(format!(
            "order has {} entries for {n} vertices",
            order.len()
        )));
    }
    let mut seen = vec![false; n];
    for &v in order {
        if v >= n {
            return Err(GraphError::InvalidOrder(format!(
                "vertex {v} is out of range for {n} vertices"
            )));
        }
        if std::mem::replace(&mut seen[v], true) {
            return Err(GraphError::InvalidOrder(format!("vertex {v} appears twice")));
        }
    }
    Ok(())
}

/// Largest degree first; equal degrees keep increasing vertex order.
pub fn degree_order<G: Graph + ?Sized>(graph: &G) -> Vec<usize> {
    let mut order: Vec<usize> = (0..graph.node_count()).collect();
    order.sort_by_key(|&v| core::cmp::Reverse(graph.degree(v)));
    order
}

/// Largest degree first; equal degrees in random order.
pub fn degree_order_shuffled<G, R>(graph: &G, rng: &mut R) -> Vec<usize>
where
    G: Graph + ?Sized,
    R: Rng + ?Sized,
{
    let mut order = random_order(graph.node_count(), rng);
    // Stable sort keeps the shuffled order within each degree class.
    order.sort_by_key(|&v| core::cmp::Reverse(graph.degree(v)));
    order
}

/// A uniformly random permutation of `0..n`.
pub fn random_order<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(rng);
    order
}
