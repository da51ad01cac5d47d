//! Per-slot "first writer wins" array.
//!
//! Each slot starts unset and can be claimed exactly once through a single
//! compare-and-swap. There is no global lock: contention is limited to threads
//! racing for the same slot.

use core::sync::atomic::{AtomicUsize, Ordering};

/// Value of a slot that has not been claimed.
pub const UNSET: usize = usize::MAX;

/// A fixed-length array of write-once atomic slots.
///
/// Used as the parent array of the parallel BFS engine: `try_claim(v, u)` records
/// `u` as the parent of `v` iff no other thread got there first.
pub struct AtomicOwnershipArray {
    slots: Vec<AtomicUsize>,
}

impl AtomicOwnershipArray {
    /// Creates `len` unset slots.
    pub fn new(len: usize) -> Self {
        let slots = (0..len).map(|_| AtomicUsize::new(UNSET)).collect();
        Self { slots }
    }

    /// Wraps existing slot values. `UNSET` marks free slots.
    pub fn from_slots(values: Vec<usize>) -> Self {
        let slots = values.into_iter().map(AtomicUsize::new).collect();
        Self { slots }
    }

    /// Number of slots.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if there are no slots.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Sets `index` to `value` iff it is currently unset.
    ///
    /// Returns `true` iff this call performed the write. A successful claim
    /// publishes with `AcqRel`, so a thread observing the claimed value also
    /// observes everything the winner wrote before claiming.
    ///
    /// # Panics
    /// Panics if `index >= len()`.
    #[inline(always)]
    pub fn try_claim(&self, index: usize, value: usize) -> bool {
        debug_assert!(value != UNSET, "UNSET cannot be claimed");
        let slot = &self.slots[index];
        // Cheap load first: most losers see a claimed slot without an RMW.
        if slot.load(Ordering::Relaxed) != UNSET {
            return false;
        }
        slot.compare_exchange(UNSET, value, Ordering::AcqRel, Ordering::Relaxed)
            .is_ok()
    }

    /// Returns the committed value of `index`, if any.
    ///
    /// # Panics
    /// Panics if `index >= len()`.
    #[inline(always)]
    pub fn get(&self, index: usize) -> Option<usize> {
        match self.slots[index].load(Ordering::Acquire) {
            UNSET => None,
            v => Some(v),
        }
    }

    /// Returns `true` if `index` has been claimed.
    #[inline(always)]
    pub fn is_claimed(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    /// Index of the first claimed slot, if any.
    pub fn first_claimed(&self) -> Option<usize> {
        self.slots
            .iter()
            .position(|s| s.load(Ordering::Relaxed) != UNSET)
    }

    /// Returns every slot to the unset state.
    ///
    /// Requires `&mut self`, so no claim can be in flight.
    pub fn reset(&mut self) {
        for s in &mut self.slots {
            *s.get_mut() = UNSET;
        }
    }

    /// Copies the current slot values out (`UNSET` for free slots).
    pub fn snapshot(&self) -> Vec<usize> {
        self.slots.iter().map(|s| s.load(Ordering::Acquire)).collect()
    }

    /// Consumes the array, returning the slot values (`UNSET` for free slots).
    pub fn into_vec(self) -> Vec<usize> {
        self.slots.into_iter().map(AtomicUsize::into_inner).collect()
    }
}

impl core::fmt::Debug for AtomicOwnershipArray {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AtomicOwnershipArray")
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claim_is_write_once() {
        let arr = AtomicOwnershipArray::new(3);
        assert!(arr.try_claim(1, 7));
        assert!(!arr.try_claim(1, 8));
        assert_eq!(arr.get(1), Some(7));
        assert_eq!(arr.get(0), None);
        assert_eq!(arr.into_vec(), vec![UNSET, 7, UNSET]);
    }

    #[test]
    fn reset_frees_all_slots() {
        let mut arr = AtomicOwnershipArray::from_slots(vec![0, UNSET, 2]);
        assert_eq!(arr.first_claimed(), Some(0));
        arr.reset();
        assert_eq!(arr.first_claimed(), None);
        assert!(arr.try_claim(2, 0));
    }

    #[test]
    fn exactly_one_thread_wins_each_slot() {
        const SLOTS: usize = 512;
        const THREADS: usize = 8;
        let arr = AtomicOwnershipArray::new(SLOTS);
        let wins: Vec<usize> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..THREADS)
                .map(|t| {
                    let arr = &arr;
                    scope.spawn(move || (0..SLOTS).filter(|&i| arr.try_claim(i, t)).count())
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert_eq!(wins.iter().sum::<usize>(), SLOTS);
        assert!(arr.snapshot().iter().all(|&v| v < THREADS));
    }
}
