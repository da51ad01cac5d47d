//! Error taxonomy shared by every engine.
//!
//! Precondition violations are reported before any caller-visible state is
//! touched. Nondeterministic parent choices are not errors and never appear here.

use thiserror::Error;

/// Errors surfaced by graph construction, traversal and coloring.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A vertex id (source, order entry, ...) is not in `0..node_count`.
    #[error("vertex {vertex} is out of range for a graph with {node_count} vertices")]
    VertexOutOfRange {
        /// Offending vertex.
        vertex: usize,
        /// Number of vertices in the graph.
        node_count: usize,
    },

    /// An edge endpoint is not in `0..node_count`.
    #[error("edge {from}->{to} is out of range for a graph with {node_count} vertices")]
    EdgeOutOfRange {
        /// Edge tail.
        from: usize,
        /// Edge head.
        to: usize,
        /// Number of vertices in the graph.
        node_count: usize,
    },

    /// Coloring requires a graph without self-loops.
    #[error("vertex {vertex} has a self-loop and cannot be colored")]
    SelfLoop {
        /// Vertex carrying the loop.
        vertex: usize,
    },

    /// A caller-supplied output buffer does not have one slot per vertex.
    #[error("output buffer has length {actual}, expected {expected}")]
    BufferLength {
        /// Required length (the vertex count).
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },

    /// A caller-supplied parent buffer was not reset to the unvisited sentinel.
    #[error("output buffer slot {index} is not initialized to the unvisited sentinel")]
    BufferNotCleared {
        /// First slot holding a non-sentinel value.
        index: usize,
    },

    /// A vertex order is not a permutation of `0..node_count`.
    #[error("invalid vertex order: {0}")]
    InvalidOrder(String),

    /// CSR offsets/targets do not describe a graph.
    #[error("malformed CSR parts: {0}")]
    MalformedCsr(String),

    /// A parent map does not describe a traversal tree over its vertices.
    #[error("malformed parent map: {0}")]
    MalformedParentMap(String),

    /// A best-of-n driver was asked for zero runs.
    #[error("best-of-n driver requires at least one run")]
    ZeroRuns,

    /// A worker thread could not be spawned.
    #[error("failed to spawn worker thread")]
    ThreadSpawn(#[source] std::io::Error),

    /// A rayon pool with the configured worker count could not be built.
    #[error("failed to build worker pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// Engine configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GraphError>;
