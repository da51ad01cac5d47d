//! Breadth-first traversal engines.
//!
//! All engines share one contract: `graph + source -> ParentMap`, with the
//! source as its own parent and [`UNVISITED`] for unreachable vertices. Each
//! comes as a pure form returning a fresh map and an `_into` form writing a
//! caller-supplied, sentinel-initialized buffer.
//!
//! | Engine | Mechanism | Parent choice |
//! |--------|-----------|---------------|
//! | [`bfs_par`] | per-slot CAS races, level barriers | first successful claim (timing dependent) |
//! | [`bfs_matrix`] | masked `Aᵀ ∨.∧ frontier` products | lowest-indexed frontier predecessor |
//! | [`bfs_seq`] | single FIFO | first discoverer in adjacency order |
//!
//! Depths agree across engines; parent identities need not.

pub mod matrix;
pub mod parallel;
pub mod parents;
pub mod sequential;

pub use matrix::{bfs_matrix, bfs_matrix_into, bfs_matrix_with};
pub use parallel::{bfs_par, bfs_par_into, bfs_par_with};
pub use parents::{BfsStats, ParentMap, UNVISITED};
pub use sequential::{bfs_seq, bfs_seq_into};
