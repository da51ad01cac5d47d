//! BFS parent mappings.

use serde::{Deserialize, Serialize};

use crate::concurrency::UNSET;
use crate::error::{GraphError, Result};
use crate::graph::Graph;

/// Parent slot value of a vertex the traversal never reached.
pub const UNVISITED: usize = UNSET;

/// Per-run traversal counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BfsStats {
    /// Number of non-empty frontiers processed (eccentricity of the source + 1).
    pub levels: usize,
    /// Number of vertices reached, the source included.
    pub reached: usize,
}

/// A BFS tree as one parent slot per vertex.
///
/// The source's slot holds the source itself; unreached vertices hold
/// [`UNVISITED`]. When several frontier vertices could adopt the same vertex,
/// which one is recorded depends on the engine (and, for the parallel engine,
/// on thread timing), but the depth of every vertex does not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ParentParts")]
pub struct ParentMap {
    source: usize,
    parents: Vec<usize>,
}

/// Unchecked wire form of a [`ParentMap`].
#[derive(Deserialize)]
struct ParentParts {
    source: usize,
    parents: Vec<usize>,
}

impl TryFrom<ParentParts> for ParentMap {
    type Error = GraphError;

    fn try_from(parts: ParentParts) -> Result<Self> {
        let ParentParts { source, parents } = parts;
        let n = parents.len();
        if source >= n {
            return Err(GraphError::MalformedParentMap(format!(
                "source {source} is out of range for {n} vertices"
            )));
        }
        if parents[source] != source {
            return Err(GraphError::MalformedParentMap(format!(
                "source {source} is not its own parent"
            )));
        }
        if let Some(v) = parents.iter().position(|&p| p != UNVISITED && p >= n) {
            return Err(GraphError::MalformedParentMap(format!(
                "parent {} of vertex {v} is out of range for {n} vertices",
                parents[v]
            )));
        }
        Ok(Self { source, parents })
    }
}

impl ParentMap {
    pub(crate) fn new(source: usize, parents: Vec<usize>) -> Self {
        debug_assert_eq!(parents.get(source), Some(&source));
        Self { source, parents }
    }

    /// The traversal root.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Number of slots (vertices).
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Returns `true` for a map over zero vertices.
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Parent of `v`, `Some(source)` for the source, `None` if unreached.
    ///
    /// # Panics
    /// Panics if `v >= len()`.
    pub fn parent(&self, v: usize) -> Option<usize> {
        match self.parents[v] {
            UNVISITED => None,
            p => Some(p),
        }
    }

    /// Returns `true` if the traversal reached `v`.
    pub fn is_reached(&self, v: usize) -> bool {
        self.parent(v).is_some()
    }

    /// Number of reached vertices, the source included.
    pub fn reached_count(&self) -> usize {
        self.parents.iter().filter(|&&p| p != UNVISITED).count()
    }

    /// Raw slots, [`UNVISITED`] for unreached vertices.
    pub fn as_slice(&self) -> &[usize] {
        &self.parents
    }

    /// Consumes the map, returning the raw slots.
    pub fn into_vec(self) -> Vec<usize> {
        self.parents
    }

    /// Hop count from the source along parent links, `None` if unreached.
    ///
    /// Computed top-down from the source over the child lists, so a malformed
    /// map (a parent cycle detached from the source) yields `None` instead of looping.
    pub fn depths(&self) -> Vec<Option<usize>> {
        let n = self.parents.len();
        let mut children = vec![Vec::new(); n];
        for (v, &p) in self.parents.iter().enumerate() {
            if p != UNVISITED && v != self.source && p < n {
                children[p].push(v);
            }
        }

        let mut depth = vec![None; n];
        depth[self.source] = Some(0);
        let mut level = vec![self.source];
        let mut d = 0;
        while !level.is_empty() {
            d += 1;
            let mut next = Vec::new();
            for u in level {
                for &c in &children[u] {
                    if depth[c].is_none() {
                        depth[c] = Some(d);
                        next.push(c);
                    }
                }
            }
            level = next;
        }
        depth
    }

    /// Vertices from the source to `v` along parent links.
    pub fn path_to(&self, v: usize) -> Option<Vec<usize>> {
        let mut path = vec![v];
        let mut cur = v;
        while cur != self.source {
            cur = self.parent(cur)?;
            path.push(cur);
            if path.len() > self.parents.len() {
                return None;
            }
        }
        path.reverse();
        Some(path)
    }

    /// Checks that this map is a shortest-path tree of `graph` rooted at the source.
    ///
    /// Every recorded parent must be adjacent to its child and one hop closer to
    /// the source, and the reached set and depths must match a sequential BFS.
    pub fn is_bfs_tree_of<G: Graph + ?Sized>(&self, graph: &G) -> bool {
        if self.parents.len() != graph.node_count() || self.parent(self.source) != Some(self.source)
        {
            return false;
        }
        let Ok(reference) = super::sequential::bfs_seq(graph, self.source) else {
            return false;
        };
        let expected = reference.depths();
        let depths = self.depths();
        if depths != expected {
            return false;
        }
        (0..self.parents.len()).all(|v| match (self.parent(v), depths[v]) {
            (None, None) => true,
            (Some(p), Some(d)) if v != self.source => {
                graph.neighbors(p).contains(&v) && depths[p] == Some(d - 1)
            }
            (Some(_), Some(_)) => true,
            _ => false,
        })
    }
}

/// Checks a caller-supplied parent buffer: one slot per vertex, all [`UNVISITED`].
pub(crate) fn check_parent_buffer(parents: &[usize], node_count: usize) -> Result<()> {
    if parents.len() != node_count {
        return Err(GraphError::BufferLength {
            expected: node_count,
            actual: parents.len(),
        });
    }
    match parents.iter().position(|&p| p != UNVISITED) {
        Some(index) => Err(GraphError::BufferNotCleared { index }),
        None => Ok(()),
    }
}
