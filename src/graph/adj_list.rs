//! Validated adjacency-list graph.

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::graph::Graph;

/// A graph stored as one neighbor `Vec` per vertex.
///
/// Cheap to build incrementally; convert to [`CsrGraph`](crate::CsrGraph) for
/// cache-friendly traversal of large graphs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<usize>>", into = "Vec<Vec<usize>>")]
pub struct AdjListGraph {
    adjacency: Vec<Vec<usize>>,
}

impl AdjListGraph {
    /// Creates `n` isolated vertices.
    pub fn with_nodes(n: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); n],
        }
    }

    /// Wraps an adjacency list after checking every endpoint.
    pub fn from_adjacency(adjacency: Vec<Vec<usize>>) -> Result<Self> {
        let n = adjacency.len();
        for (u, nbrs) in adjacency.iter().enumerate() {
            if let Some(&v) = nbrs.iter().find(|&&v| v >= n) {
                return Err(GraphError::EdgeOutOfRange {
                    from: u,
                    to: v,
                    node_count: n,
                });
            }
        }
        Ok(Self { adjacency })
    }

    /// Builds an undirected graph: each pair is stored in both directions.
    pub fn undirected(n: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut g = Self::with_nodes(n);
        for &(u, v) in edges {
            g.add_undirected_edge(u, v)?;
        }
        Ok(g)
    }

    /// Appends the directed edge `from -> to`. Parallel edges are kept.
    pub fn add_edge(&mut self, from: usize, to: usize) -> Result<()> {
        let node_count = self.adjacency.len();
        if from >= node_count || to >= node_count {
            return Err(GraphError::EdgeOutOfRange {
                from,
                to,
                node_count,
            });
        }
        self.adjacency[from].push(to);
        Ok(())
    }

    /// Appends `u -> v` and `v -> u` (a single entry for a self-loop).
    pub fn add_undirected_edge(&mut self, u: usize, v: usize) -> Result<()> {
        self.add_edge(u, v)?;
        if u != v {
            self.add_edge(v, u)?;
        }
        Ok(())
    }

    /// Adds a new isolated vertex and returns its id.
    pub fn add_node(&mut self) -> usize {
        self.adjacency.push(Vec::new());
        self.adjacency.len() - 1
    }

    /// Borrows the underlying lists.
    pub fn as_lists(&self) -> &[Vec<usize>] {
        &self.adjacency
    }
}

impl Graph for AdjListGraph {
    #[inline]
    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    #[inline]
    fn neighbors(&self, v: usize) -> &[usize] {
        &self.adjacency[v]
    }
}

impl TryFrom<Vec<Vec<usize>>> for AdjListGraph {
    type Error = GraphError;

    fn try_from(adjacency: Vec<Vec<usize>>) -> Result<Self> {
        Self::from_adjacency(adjacency)
    }
}

impl From<AdjListGraph> for Vec<Vec<usize>> {
    fn from(g: AdjListGraph) -> Self {
        g.adjacency
    }
}
