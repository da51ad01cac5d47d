//! Blocking synchronization primitives.

pub mod work_queue;

pub use work_queue::{ClosedError, WorkQueue};
