//! Square sparse boolean matrix over the CSR pattern of a graph.

use crate::graph::{CsrGraph, Graph};

/// Boolean adjacency pattern: entry `(i, j)` is present iff `j` is in row `i`.
///
/// The three constructors give the views the matrix engines need:
/// - [`adjacency_of`](Self::adjacency_of): `A`, row `u` = out-neighbors
/// - [`transpose_of`](Self::transpose_of): `Aᵀ`, row `v` = in-neighbors
/// - [`symmetric_of`](Self::symmetric_of): `A ∨ Aᵀ`, for conflict checks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoolMatrix {
    pattern: CsrGraph,
}

impl BoolMatrix {
    /// `A` for `graph`.
    pub fn adjacency_of<G: Graph + ?Sized>(graph: &G) -> Self {
        Self {
            pattern: CsrGraph::from_graph(graph),
        }
    }

    /// `Aᵀ` for `graph`.
    pub fn transpose_of<G: Graph + ?Sized>(graph: &G) -> Self {
        Self {
            pattern: CsrGraph::transpose_of(graph),
        }
    }

    /// `A ∨ Aᵀ` for `graph`, rows sorted and deduplicated.
    pub fn symmetric_of<G: Graph + ?Sized>(graph: &G) -> Self {
        Self {
            pattern: CsrGraph::symmetric_of(graph),
        }
    }

    /// Wraps an existing CSR pattern as-is.
    pub fn from_pattern(pattern: CsrGraph) -> Self {
        Self { pattern }
    }

    /// Number of rows (and columns).
    #[inline]
    pub fn nrows(&self) -> usize {
        self.pattern.node_count()
    }

    /// Number of stored entries.
    #[inline]
    pub fn nnz(&self) -> usize {
        self.pattern.edge_count()
    }

    /// Column indices of row `i`.
    #[inline(always)]
    pub fn row(&self, i: usize) -> &[usize] {
        self.pattern.neighbors(i)
    }

    /// The matrix transposed.
    pub fn transpose(&self) -> Self {
        Self::transpose_of(&self.pattern)
    }

    /// Borrows the pattern as a graph.
    pub fn as_graph(&self) -> &CsrGraph {
        &self.pattern
    }
}
