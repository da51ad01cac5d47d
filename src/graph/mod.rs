//! Read-only graph views consumed by every engine.
//!
//! Vertices are `0..node_count()`. The edge relation is whatever
//! [`Graph::neighbors`] reports; whether it is symmetric is the caller's concern.
//!
//! - `csr_graph`: compressed sparse row storage (also the sparse-matrix pattern)
//! - `adj_list`: a validated `Vec<Vec<usize>>`

pub mod adj_list;
pub mod csr_graph;

pub use adj_list::AdjListGraph;
pub use csr_graph::CsrGraph;

use crate::error::{GraphError, Result};

/// Adjacency-list view of a graph.
///
/// Implementations are shared by reference across worker threads, hence `Sync`.
pub trait Graph: Sync {
    /// Number of vertices.
    fn node_count(&self) -> usize;

    /// Out-neighbors of `v`.
    ///
    /// # Panics
    /// May panic if `v >= node_count()`.
    fn neighbors(&self, v: usize) -> &[usize];

    /// Out-degree of `v`.
    #[inline]
    fn degree(&self, v: usize) -> usize {
        self.neighbors(v).len()
    }

    /// Number of stored (directed) edges.
    fn edge_count(&self) -> usize {
        (0..self.node_count()).map(|v| self.degree(v)).sum()
    }

    /// Largest out-degree, 0 for an empty graph.
    fn max_degree(&self) -> usize {
        (0..self.node_count())
            .map(|v| self.degree(v))
            .max()
            .unwrap_or(0)
    }

    /// First vertex with an edge to itself, if any.
    fn find_self_loop(&self) -> Option<usize> {
        (0..self.node_count()).find(|&v| self.neighbors(v).contains(&v))
    }

    /// Checks that `v` names a vertex of this graph.
    #[inline]
    fn check_vertex(&self, v: usize) -> Result<()> {
        let node_count = self.node_count();
        if v < node_count {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex: v,
                node_count,
            })
        }
    }
}

impl<G: Graph + ?Sized> Graph for &G {
    #[inline]
    fn node_count(&self) -> usize {
        (**self).node_count()
    }

    #[inline]
    fn neighbors(&self, v: usize) -> &[usize] {
        (**self).neighbors(v)
    }
}

/// Fails with [`GraphError::SelfLoop`] if any vertex is adjacent to itself.
pub(crate) fn reject_self_loops<G: Graph + ?Sized>(graph: &G) -> Result<()> {
    match graph.find_self_loop() {
        Some(vertex) => Err(GraphError::SelfLoop { vertex }),
        None => Ok(()),
    }
}
