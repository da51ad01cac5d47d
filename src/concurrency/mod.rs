//! Concurrency building blocks for the traversal engines.
//!
//! - `atomic`: lock-free per-slot claims ("first writer wins")
//! - `sync`: the closable work queue used to hand frontiers between levels

pub mod atomic;
pub mod sync;

pub use atomic::{AtomicOwnershipArray, UNSET};
pub use sync::{ClosedError, WorkQueue};
