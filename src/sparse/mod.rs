//! Sparse boolean linear algebra used by the matrix-formulated engines.
//!
//! Only what the engines need: a CSR boolean pattern, a bitmap vector, and
//! two masked matrix-vector kernels (MIN-FIRST for BFS parents, ranked MAX
//! for independent-set selection).

pub mod bool_matrix;
pub mod bool_vector;
pub mod ops;

pub use bool_matrix::BoolMatrix;
pub use bool_vector::BoolVector;
pub use ops::{masked_neighbor_max, mxv_min_first_masked, outranks};
