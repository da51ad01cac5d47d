//! Lock-free atomic primitives.
//!
//! Concurrent writers synchronize per slot through hardware atomics; nothing
//! here takes a lock.

/// Write-once ownership slots.
pub mod ownership;

pub use ownership::{AtomicOwnershipArray, UNSET};
