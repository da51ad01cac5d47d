//! Closable multi-producer multi-consumer FIFO.
//!
//! Producers never block. Consumers block in [`WorkQueue::pop`] until an item
//! arrives or the queue is closed and drained. The BFS engine uses one queue
//! per frontier: workers drain the closed current level while pushing
//! discoveries into the open next level.

use core::sync::atomic::{AtomicUsize, Ordering};
use std::collections::VecDeque;
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

use crossbeam_utils::CachePadded;

/// Error returned when pushing into a closed queue. Carries the rejected item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClosedError<T>(pub T);

impl<T> core::fmt::Display for ClosedError<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("push on a closed work queue")
    }
}

impl<T: core::fmt::Debug> std::error::Error for ClosedError<T> {}

struct QueueState<T> {
    items: VecDeque<T>,
    closed: bool,
}

/// An unbounded FIFO with an explicit "no more work" signal.
pub struct WorkQueue<T> {
    state: Mutex<QueueState<T>>,
    available: Condvar,
    /// Mirror of `items.len()` so `len`/`is_empty` do not take the lock.
    len: CachePadded<AtomicUsize>,
}

impl<T> Default for WorkQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> WorkQueue<T> {
    /// Creates an empty, open queue.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty, open queue with room for `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            state: Mutex::new(QueueState {
                items: VecDeque::with_capacity(capacity),
                closed: false,
            }),
            available: Condvar::new(),
            len: CachePadded::new(AtomicUsize::new(0)),
        }
    }

    /// Creates a closed queue pre-filled with `items`.
    ///
    /// Poppers drain the items and then observe the close.
    pub fn closed_with(items: impl IntoIterator<Item = T>) -> Self {
        let items: VecDeque<T> = items.into_iter().collect();
        let len = items.len();
        Self {
            state: Mutex::new(QueueState {
                items,
                closed: true,
            }),
            available: Condvar::new(),
            len: CachePadded::new(AtomicUsize::new(len)),
        }
    }

    #[inline]
    fn lock(&self) -> MutexGuard<'_, QueueState<T>> {
        // The state is a plain deque + flag; a panicking holder cannot leave it torn.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Enqueues `item`. Never blocks.
    pub fn push(&self, item: T) -> Result<(), ClosedError<T>> {
        let mut state = self.lock();
        if state.closed {
            return Err(ClosedError(item));
        }
        state.items.push_back(item);
        self.len.fetch_add(1, Ordering::Release);
        drop(state);
        self.available.notify_one();
        Ok(())
    }

    /// Enqueues every item of `batch` under a single lock acquisition.
    pub fn push_batch(&self, batch: &mut Vec<T>) -> Result<(), ClosedError<()>> {
        if batch.is_empty() {
            return Ok(());
        }
        let mut state = self.lock();
        if state.closed {
            return Err(ClosedError(()));
        }
        let n = batch.len();
        state.items.extend(batch.drain(..));
        self.len.fetch_add(n, Ordering::Release);
        drop(state);
        if n == 1 {
            self.available.notify_one();
        } else {
            self.available.notify_all();
        }
        Ok(())
    }

    /// Dequeues the oldest item, blocking while the queue is open and empty.
    ///
    /// Returns `None` once the queue is closed and drained.
    pub fn pop(&self) -> Option<T> {
        let mut state = self.lock();
        loop {
            if let Some(item) = state.items.pop_front() {
                self.len.fetch_sub(1, Ordering::Release);
                return Some(item);
            }
            if state.closed {
                return None;
            }
            state = self
                .available
                .wait(state)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    /// Dequeues the oldest item without blocking.
    pub fn try_pop(&self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let mut state = self.lock();
        let item = state.items.pop_front();
        if item.is_some() {
            self.len.fetch_sub(1, Ordering::Release);
        }
        item
    }

    /// Signals that no further items will be pushed and wakes all blocked poppers.
    pub fn close(&self) {
        let mut state = self.lock();
        state.closed = true;
        drop(state);
        self.available.notify_all();
    }

    /// Re-opens a closed queue so it can carry another level of work.
    ///
    /// Items still queued are kept.
    pub fn reopen(&self) {
        self.lock().closed = false;
    }

    /// Returns `true` once [`close`](Self::close) has been called (and not undone).
    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }

    /// Number of queued items. Racy under concurrent pushes/pops.
    #[inline]
    pub fn len(&self) -> usize {
        self.len.load(Ordering::Acquire)
    }

    /// Returns `true` if no items are queued. Racy under concurrent pushes/pops.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes and returns every queued item, in FIFO order.
    pub fn drain(&self) -> Vec<T> {
        let mut state = self.lock();
        let out: Vec<T> = state.items.drain(..).collect();
        self.len.fetch_sub(out.len(), Ordering::Release);
        out
    }
}
