//! Vertex coloring engines.
//!
//! - `greedy`: sequential first-fit over an explicit vertex order
//! - `ordering`: degree-descending and random orders for the greedy core
//! - `mis`: parallel rounds of maximal-independent-set extraction
//! - `best_of`: "color n times, keep the fewest colors" drivers
//!
//! Every engine checks conflicts against the symmetric closure of the edge
//! relation, so directed inputs are colored properly as well. Self-loops are
//! rejected up front.

pub mod best_of;
pub mod greedy;
pub mod mis;
pub mod ordering;

pub use best_of::{
    degree_order_and_color, degree_order_and_color_n_times, shuffle_and_color,
    shuffle_and_color_n_times,
};
pub use greedy::greedy_coloring;
pub use mis::{
    mis_coloring, mis_coloring_degree, mis_coloring_degree_with, mis_coloring_ordered_with,
    mis_coloring_with, mis_coloring_with_order,
};
pub use ordering::{degree_order, degree_order_shuffled, random_order, validate_order};

use serde::{Deserialize, Serialize};

use crate::graph::Graph;

/// Slot value of a vertex that has not been colored yet.
pub(crate) const UNCOLORED: usize = usize::MAX;

/// A vertex coloring.
///
/// `colors[v]` is the color of vertex `v`; colors are `0..num_colors`, with
/// `num_colors == 1 + max(colors)` (0 for an empty graph).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coloring {
    /// Number of distinct colors used.
    pub num_colors: usize,
    /// Color of each vertex.
    pub colors: Vec<usize>,
}

impl Coloring {
    /// Wraps per-vertex colors, deriving `num_colors` from the largest one.
    pub fn from_colors(colors: Vec<usize>) -> Self {
        let num_colors = colors.iter().max().map_or(0, |&c| c + 1);
        Self { num_colors, colors }
    }

    /// Number of colored vertices.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns `true` for the coloring of an empty graph.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Returns `true` if every edge of `graph` joins two different colors.
    pub fn is_proper<G: Graph + ?Sized>(&self, graph: &G) -> bool {
        self.colors.len() == graph.node_count()
            && (0..graph.node_count()).all(|u| {
                graph
                    .neighbors(u)
                    .iter()
                    .all(|&v| self.colors[u] != self.colors[v])
            })
    }

    /// Vertices grouped by color, each class in increasing vertex order.
    pub fn color_classes(&self) -> Vec<Vec<usize>> {
        let mut classes = vec![Vec::new(); self.num_colors];
        for (v, &c) in self.colors.iter().enumerate() {
            classes[c].push(v);
        }
        classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::CsrGraph;

    #[test]
    fn from_colors_counts_colors() {
        assert_eq!(Coloring::from_colors(vec![]).num_colors, 0);
        let c = Coloring::from_colors(vec![0, 2, 1, 0]);
        assert_eq!(c.num_colors, 3);
        assert_eq!(c.color_classes(), vec![vec![0, 3], vec![2], vec![1]]);
    }

    #[test]
    fn is_proper_checks_every_edge() {
        let g = CsrGraph::undirected_from_edges(3, &[(0, 1), (1, 2)]).unwrap();
        assert!(Coloring::from_colors(vec![0, 1, 0]).is_proper(&g));
        assert!(!Coloring::from_colors(vec![0, 0, 1]).is_proper(&g));
        assert!(!Coloring::from_colors(vec![0, 1]).is_proper(&g));
    }

    #[test]
    fn serializes_as_record() {
        let c = Coloring::from_colors(vec![1, 0]);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"num_colors":2,"colors":[1,0]}"#);
    }
}
