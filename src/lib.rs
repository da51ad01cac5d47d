//! # `pargraphs` - Parallel Graph Traversal and Coloring
//!
//! Breadth-first search and vertex coloring engines over read-only graphs,
//! each in a parallel and a sequential flavor so results can be cross-checked.
//!
//! ## Engines
//!
//! - **Parallel BFS** ([`bfs_par`]): level-synchronous workers on scoped
//!   threads. Every vertex slot is claimed with a single compare-and-swap, so
//!   exactly one discoverer becomes its parent. Frontiers are handed between
//!   levels through two alternating closable queues.
//! - **Matrix BFS** ([`bfs_matrix`]): one masked sparse product
//!   `next⟨¬visited⟩ = Aᵀ ∨.∧ frontier` per level, rows evaluated with rayon.
//! - **Sequential BFS** ([`bfs_seq`]): the FIFO reference engine.
//! - **Greedy coloring** ([`greedy_coloring`]): first-fit over a vertex order,
//!   plus degree-ordered and shuffled best-of-n drivers.
//! - **MIS coloring** ([`mis_coloring`]): rounds of maximal independent set
//!   extraction with random or fixed priorities.
//!
//! ## Conventions
//!
//! Vertices are `0..n`. A BFS result maps each vertex to its parent, with the
//! source as its own parent and [`UNVISITED`] for unreachable vertices.
//! Colorings use colors `0..num_colors`; conflicts are checked against the
//! symmetric closure of the edge relation and self-loops are rejected.
//!
//! Parallelism is tuned through [`ParallelConfig`]. The crate only emits
//! `tracing` events; installing a subscriber is up to the caller.
//!
//! ```
//! use pargraphs::{bfs_par, greedy_coloring, CsrGraph};
//!
//! let g = CsrGraph::undirected_from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
//! let tree = bfs_par(&g, 0).unwrap();
//! assert_eq!(tree.depths(), vec![Some(0), Some(1), Some(2), Some(1)]);
//!
//! let coloring = greedy_coloring(&g, &[0, 1, 2, 3]).unwrap();
//! assert_eq!(coloring.colors, vec![0, 1, 0, 1]);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]

pub mod coloring;
pub mod concurrency;
pub mod config;
pub mod error;
pub mod graph;
pub mod sparse;
pub mod traversal;

pub use coloring::{
    degree_order, degree_order_and_color, degree_order_and_color_n_times, greedy_coloring,
    mis_coloring, mis_coloring_degree, mis_coloring_degree_with, mis_coloring_ordered_with,
    mis_coloring_with, mis_coloring_with_order, random_order,
    shuffle_and_color, shuffle_and_color_n_times, Coloring,
};
pub use config::ParallelConfig;
pub use error::{GraphError, Result};
pub use graph::{AdjListGraph, CsrGraph, Graph};
pub use sparse::{BoolMatrix, BoolVector};
pub use traversal::{
    bfs_matrix, bfs_matrix_into, bfs_matrix_with, bfs_par, bfs_par_into, bfs_par_with, bfs_seq,
    bfs_seq_into, BfsStats, ParentMap, UNVISITED,
};

// The "empty slot" sentinels are shared so buffers can move between engines.
const _: () = {
    assert!(UNVISITED == concurrency::UNSET);
    assert!(coloring::UNCOLORED == usize::MAX);
    assert!(UNVISITED == usize::MAX);
};
