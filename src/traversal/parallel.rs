//! Level-synchronous parallel BFS.
//!
//! Workers share the graph read-only and race on an [`AtomicOwnershipArray`]:
//! `try_claim(v, u)` makes `u` the parent of `v` iff nobody claimed `v` first,
//! and only the winner pushes `v` into the next frontier. Two queues alternate
//! as current / next frontier.
//!
//! Per level:
//! 1. every worker drains the (closed) current queue, pushing claims into next;
//! 2. barrier; the elected leader closes next, reopens the drained current queue
//!    and records whether next is empty;
//! 3. barrier; all workers stop or advance to the following level together.
//!
//! Which of several same-level candidates becomes a vertex's parent depends on
//! thread timing and is not stable across runs. Depths are.

use core::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Barrier;
use std::thread;

use tracing::{debug, trace};

use crate::concurrency::{AtomicOwnershipArray, WorkQueue};
use crate::config::ParallelConfig;
use crate::error::{GraphError, Result};
use crate::graph::Graph;
use crate::traversal::parents::{BfsStats, ParentMap};

/// Claimed vertices buffered per worker before one locked push into the next frontier.
const PUSH_BATCH: usize = 64;

/// Runs a parallel BFS from `source` with the default configuration.
pub fn bfs_par<G: Graph + ?Sized>(graph: &G, source: usize) -> Result<ParentMap> {
    bfs_par_with(graph, source, &ParallelConfig::default())
}

/// Runs a parallel BFS from `source` into a fresh parent map.
pub fn bfs_par_with<G: Graph + ?Sized>(
    graph: &G,
    source: usize,
    cfg: &ParallelConfig,
) -> Result<ParentMap> {
    graph.check_vertex(source)?;
    let parents = AtomicOwnershipArray::new(graph.node_count());
    bfs_par_into(graph, source, &parents, cfg)?;
    Ok(ParentMap::new(source, parents.into_vec()))
}

/// Runs a parallel BFS from `source`, claiming parents in `parents`.
///
/// `parents` must have one slot per vertex and no claimed slot. On error
/// nothing has been claimed.
pub fn bfs_par_into<G: Graph + ?Sized>(
    graph: &G,
    source: usize,
    parents: &AtomicOwnershipArray,
    cfg: &ParallelConfig,
) -> Result<BfsStats> {
    let n = graph.node_count();
    graph.check_vertex(source)?;
    if parents.len() != n {
        return Err(GraphError::BufferLength {
            expected: n,
            actual: parents.len(),
        });
    }
    if let Some(index) = parents.first_claimed() {
        return Err(GraphError::BufferNotCleared { index });
    }

    let threads = cfg.resolved_threads().min(n);
    let engine = LevelEngine {
        graph,
        parents,
        frontiers: [WorkQueue::closed_with([source]), WorkQueue::new()],
        barrier: Barrier::new(threads),
        done: AtomicBool::new(false),
        levels: AtomicUsize::new(0),
        claimed: AtomicUsize::new(0),
    };

    // Helpers wait on the gate until every one of them exists, so a failed
    // spawn never leaves the others parked on a barrier sized for `threads`.
    let gate: WorkQueue<()> = WorkQueue::with_capacity(threads);
    thread::scope(|scope| -> Result<()> {
        for id in 1..threads {
            let engine = &engine;
            let gate = &gate;
            let spawned = thread::Builder::new()
                .name(format!("bfs-worker-{id}"))
                .spawn_scoped(scope, move || {
                    if gate.pop().is_some() {
                        trace!(worker = id, "bfs worker started");
                        engine.run();
                    }
                });
            if let Err(err) = spawned {
                gate.close();
                return Err(GraphError::ThreadSpawn(err));
            }
        }

        // The source must be owned before any helper can see it in the frontier.
        parents.try_claim(source, source);

        let mut tickets = vec![(); threads - 1];
        let opened = gate.push_batch(&mut tickets);
        debug_assert!(opened.is_ok(), "gate is only closed by this thread");
        gate.close();

        engine.run();
        Ok(())
    })?;

    let stats = BfsStats {
        levels: engine.levels.load(Ordering::Relaxed),
        reached: 1 + engine.claimed.load(Ordering::Relaxed),
    };
    debug!(
        source,
        threads,
        levels = stats.levels,
        reached = stats.reached,
        "parallel bfs finished"
    );
    Ok(stats)
}

/// State shared by all workers of one traversal.
struct LevelEngine<'a, G: ?Sized> {
    graph: &'a G,
    parents: &'a AtomicOwnershipArray,
    frontiers: [WorkQueue<usize>; 2],
    barrier: Barrier,
    done: AtomicBool,
    levels: AtomicUsize,
    claimed: AtomicUsize,
}

impl<G: Graph + ?Sized> LevelEngine<'_, G> {
    fn run(&self) {
        let mut level = 0usize;
        let mut claimed = 0usize;
        let mut batch = Vec::with_capacity(PUSH_BATCH);

        loop {
            let current = &self.frontiers[level & 1];
            let next = &self.frontiers[(level + 1) & 1];

            while let Some(u) = current.pop() {
                for &v in self.graph.neighbors(u) {
                    if self.parents.try_claim(v, u) {
                        claimed += 1;
                        batch.push(v);
                        if batch.len() == PUSH_BATCH {
                            Self::flush(next, &mut batch);
                        }
                    }
                }
            }
            Self::flush(next, &mut batch);

            if self.barrier.wait().is_leader() {
                next.close();
                current.reopen();
                self.levels.fetch_add(1, Ordering::Relaxed);
                self.done.store(next.is_empty(), Ordering::Release);
                debug!(level, next_frontier = next.len(), "bfs level drained");
            }
            self.barrier.wait();

            if self.done.load(Ordering::Acquire) {
                break;
            }
            level += 1;
        }

        self.claimed.fetch_add(claimed, Ordering::Relaxed);
    }

    #[inline]
    fn flush(next: &WorkQueue<usize>, batch: &mut Vec<usize>) {
        let pushed = next.push_batch(batch);
        debug_assert!(pushed.is_ok(), "next frontier closed mid-level");
    }
}
