use core::sync::atomic::{AtomicUsize, Ordering};

use pargraphs::concurrency::{AtomicOwnershipArray, ClosedError, WorkQueue, UNSET};

#[test]
fn ownership_has_exactly_one_winner_per_slot() {
    const SLOTS: usize = 512;
    const THREADS: usize = 8;
    let slots = AtomicOwnershipArray::new(SLOTS);
    let wins = AtomicUsize::new(0);

    std::thread::scope(|scope| {
        let slots = &slots;
        let wins = &wins;
        for t in 0..THREADS {
            scope.spawn(move || {
                let mut local = 0;
                for i in 0..SLOTS {
                    if slots.try_claim(i, t) {
                        local += 1;
                    }
                }
                wins.fetch_add(local, Ordering::Relaxed);
            });
        }
    });

    assert_eq!(wins.load(Ordering::Relaxed), SLOTS);
    let owners = slots.into_vec();
    assert!(owners.iter().all(|&o| o != UNSET && o < THREADS));
}

#[test]
fn ownership_reset_makes_slots_claimable_again() {
    let mut slots = AtomicOwnershipArray::new(3);
    assert!(slots.try_claim(1, 7));
    assert!(!slots.try_claim(1, 8));
    assert_eq!(slots.first_claimed(), Some(1));
    slots.reset();
    assert_eq!(slots.first_claimed(), None);
    assert!(slots.try_claim(1, 8));
    assert_eq!(slots.get(1), Some(8));
}

#[test]
fn queue_delivers_every_item_once_across_consumers() {
    const ITEMS: usize = 4096;
    const PRODUCERS: usize = 4;
    const CONSUMERS: usize = 4;
    let queue: WorkQueue<usize> = WorkQueue::new();
    let seen: Vec<AtomicUsize> = (0..ITEMS).map(|_| AtomicUsize::new(0)).collect();
    let produced = AtomicUsize::new(0);

    std::thread::scope(|scope| {
        let queue = &queue;
        let seen = &seen;
        let produced = &produced;
        for _ in 0..CONSUMERS {
            scope.spawn(move || {
                while let Some(item) = queue.pop() {
                    seen[item].fetch_add(1, Ordering::Relaxed);
                }
            });
        }
        for p in 0..PRODUCERS {
            scope.spawn(move || {
                let mut batch = Vec::new();
                for i in (p..ITEMS).step_by(PRODUCERS) {
                    batch.push(i);
                    if batch.len() == 16 {
                        queue.push_batch(&mut batch).unwrap();
                    }
                }
                queue.push_batch(&mut batch).unwrap();
                if produced.fetch_add(1, Ordering::AcqRel) + 1 == PRODUCERS {
                    queue.close();
                }
            });
        }
    });

    assert!(seen.iter().all(|c| c.load(Ordering::Relaxed) == 1));
    assert!(queue.is_empty());
}

#[test]
fn closed_queue_rejects_pushes_until_reopened() {
    let queue = WorkQueue::closed_with([1, 2]);
    assert_eq!(queue.push(3), Err(ClosedError(3)));
    assert_eq!(queue.pop(), Some(1));
    assert_eq!(queue.pop(), Some(2));
    assert_eq!(queue.pop(), None);

    queue.reopen();
    queue.push(4).unwrap();
    assert_eq!(queue.try_pop(), Some(4));
    assert_eq!(queue.try_pop(), None);
    assert!(!queue.is_closed());
}
