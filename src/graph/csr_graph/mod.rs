//! A compact CSR (compressed sparse row) graph.
//!
//! CSR is the standard sparse matrix format for graphs, storing edges in row-major order.
//! The same layout doubles as the boolean pattern of the adjacency matrix, so
//! the transpose and symmetric closures used by the matrix engines are built here.
//!
//! Memory layout:
//! - `offsets`: `Vec<usize>` of length `n + 1` (row offsets)
//! - `targets`: contiguous `usize` column indices for each row

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::graph::Graph;

/// A CSR graph.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `from_adjacency` | \(O(n + m)\) | Builds CSR from adjacency list |
/// | `neighbors` | \(O(1)\) | Returns a slice of outgoing neighbors |
/// | `degree` | \(O(1)\) | Returns out-degree |
/// | `has_edge` | \(O(\text{out-degree})\) | Linear scan of neighbors |
/// | `transpose_of` | \(O(n + m)\) | Counting sort by target; rows stay sorted by source |
/// | `symmetric_of` | \(O(n + m \log d)\) | Union of both directions, rows sorted and deduplicated |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CsrParts", into = "CsrParts")]
pub struct CsrGraph {
    offsets: Vec<usize>,
    targets: Vec<usize>,
}

/// Raw CSR arrays, the serialized form of [`CsrGraph`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsrParts {
    /// Row offsets, length `n + 1`.
    pub offsets: Vec<usize>,
    /// Column indices, length `offsets[n]`.
    pub targets: Vec<usize>,
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self {
            offsets: vec![0],
            targets: Vec::new(),
        }
    }
}

impl CsrGraph {
    /// Builds a CSR graph from an adjacency list.
    pub fn from_adjacency(adjacency: &[Vec<usize>]) -> Result<Self> {
        let n = adjacency.len();

        let mut offsets = Vec::with_capacity(n + 1);
        offsets.push(0);

        let mut total_edges = 0usize;
        for nbrs in adjacency {
            total_edges = total_edges.saturating_add(nbrs.len());
            offsets.push(total_edges);
        }

        let mut targets = Vec::with_capacity(total_edges);
        for (u, nbrs) in adjacency.iter().enumerate() {
            for &v in nbrs {
                if v >= n {
                    return Err(GraphError::EdgeOutOfRange {
                        from: u,
                        to: v,
                        node_count: n,
                    });
                }
                targets.push(v);
            }
        }

        Ok(Self { offsets, targets })
    }

    /// Builds a directed CSR graph from an edge list. Row order follows input order.
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut degrees = vec![0usize; n];
        for &(u, v) in edges {
            if u >= n || v >= n {
                return Err(GraphError::EdgeOutOfRange {
                    from: u,
                    to: v,
                    node_count: n,
                });
            }
            degrees[u] += 1;
        }
        let offsets = prefix_offsets(&degrees);
        let mut write_pos = offsets[..n].to_vec();
        let mut targets = vec![0usize; edges.len()];
        for &(u, v) in edges {
            targets[write_pos[u]] = v;
            write_pos[u] += 1;
        }
        Ok(Self { offsets, targets })
    }

    /// Builds an undirected CSR graph: each pair is stored in both directions.
    pub fn undirected_from_edges(n: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut both = Vec::with_capacity(edges.len() * 2);
        for &(u, v) in edges {
            both.push((u, v));
            if u != v {
                both.push((v, u));
            }
        }
        Self::from_edges(n, &both)
    }

    /// Builds a CSR graph directly from CSR parts.
    ///
    /// Fails if `offsets` is empty or not monotone, if its last entry differs
    /// from `targets.len()`, or if any target is out of range.
    pub fn from_csr_parts(offsets: Vec<usize>, targets: Vec<usize>) -> Result<Self> {
        let Some(&m) = offsets.last() else {
            return Err(GraphError::MalformedCsr(
                "offsets must hold at least one entry".into(),
            ));
        };
        let n = offsets.len() - 1;
        if offsets[0] != 0 {
            return Err(GraphError::MalformedCsr(format!(
                "offsets start at {} instead of 0",
                offsets[0]
            )));
        }
        if let Some(row) = offsets.windows(2).position(|w| w[0] > w[1]) {
            return Err(GraphError::MalformedCsr(format!(
                "offsets decrease at row {row}"
            )));
        }
        if m != targets.len() {
            return Err(GraphError::MalformedCsr(format!(
                "offsets end at {m} but there are {} targets",
                targets.len()
            )));
        }
        for u in 0..n {
            for &v in &targets[offsets[u]..offsets[u + 1]] {
                if v >= n {
                    return Err(GraphError::EdgeOutOfRange {
                        from: u,
                        to: v,
                        node_count: n,
                    });
                }
            }
        }
        Ok(Self { offsets, targets })
    }

    /// Copies any graph view into CSR form.
    pub fn from_graph<G: Graph + ?Sized>(graph: &G) -> Self {
        let n = graph.node_count();
        let degrees: Vec<usize> = (0..n).map(|v| graph.degree(v)).collect();
        let offsets = prefix_offsets(&degrees);
        let mut targets = Vec::with_capacity(offsets[n]);
        for u in 0..n {
            targets.extend_from_slice(graph.neighbors(u));
        }
        Self { offsets, targets }
    }

    /// Builds the transpose of `graph`: row `v` lists every `u` with `u -> v`.
    ///
    /// Rows are filled by increasing `u`, so each row is sorted whenever the
    /// source has no parallel edges.
    pub fn transpose_of<G: Graph + ?Sized>(graph: &G) -> Self {
        let n = graph.node_count();

        // Count incoming edges for each node.
        let mut in_degrees = vec![0usize; n];
        for u in 0..n {
            for &v in graph.neighbors(u) {
                in_degrees[v] += 1;
            }
        }

        let offsets = prefix_offsets(&in_degrees);

        // Fill by position (stable: by increasing `u` scan order).
        let mut targets = vec![0usize; offsets[n]];
        let mut write_pos = offsets[..n].to_vec();
        for u in 0..n {
            for &v in graph.neighbors(u) {
                targets[write_pos[v]] = u;
                write_pos[v] += 1;
            }
        }

        Self { offsets, targets }
    }

    /// Builds the symmetric closure of `graph` (`u ~ v` iff `u -> v` or `v -> u`).
    ///
    /// Rows are sorted and free of duplicates. Self-loops are preserved.
    pub fn symmetric_of<G: Graph + ?Sized>(graph: &G) -> Self {
        let n = graph.node_count();
        let mut rows: Vec<Vec<usize>> = (0..n)
            .map(|v| Vec::with_capacity(graph.degree(v)))
            .collect();
        for u in 0..n {
            for &v in graph.neighbors(u) {
                rows[u].push(v);
                if u != v {
                    rows[v].push(u);
                }
            }
        }

        let degrees: Vec<usize> = rows
            .iter_mut()
            .map(|row| {
                row.sort_unstable();
                row.dedup();
                row.len()
            })
            .collect();
        let offsets = prefix_offsets(&degrees);
        let mut targets = Vec::with_capacity(offsets[n]);
        for row in rows {
            targets.extend(row);
        }
        Self { offsets, targets }
    }

    /// Row offsets, length `node_count() + 1`.
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Concatenated neighbor lists.
    pub fn targets(&self) -> &[usize] {
        &self.targets
    }

    /// Checks if an edge exists from `from` to `to`.
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        from < self.node_count() && self.neighbors(from).contains(&to)
    }

    /// Returns `true` if the edge relation is symmetric.
    pub fn is_symmetric(&self) -> bool {
        (0..self.node_count()).all(|u| self.neighbors(u).iter().all(|&v| self.has_edge(v, u)))
    }
}

impl Graph for CsrGraph {
    #[inline]
    fn node_count(&self) -> usize {
        // `offsets` is length `n + 1` by construction.
        self.offsets.len() - 1
    }

    #[inline]
    fn neighbors(&self, v: usize) -> &[usize] {
        &self.targets[self.offsets[v]..self.offsets[v + 1]]
    }

    #[inline]
    fn degree(&self, v: usize) -> usize {
        self.offsets[v + 1] - self.offsets[v]
    }

    #[inline]
    fn edge_count(&self) -> usize {
        self.targets.len()
    }
}

impl TryFrom<CsrParts> for CsrGraph {
    type Error = GraphError;

    fn try_from(parts: CsrParts) -> Result<Self> {
        Self::from_csr_parts(parts.offsets, parts.targets)
    }
}

impl From<CsrGraph> for CsrParts {
    fn from(g: CsrGraph) -> Self {
        Self {
            offsets: g.offsets,
            targets: g.targets,
        }
    }
}

/// Exclusive prefix sums with a trailing total: `[0, d0, d0+d1, ...]`.
fn prefix_offsets(degrees: &[usize]) -> Vec<usize> {
    let mut offsets = Vec::with_capacity(degrees.len() + 1);
    let mut total = 0usize;
    offsets.push(0);
    for &d in degrees {
        total += d;
        offsets.push(total);
    }
    offsets
}
