//! Host time and the keyed one-shot timer queue.
//!
//! Nothing in the core reads a clock. Hosts pass a [`Timestamp`] into every
//! call and drive pending work with `advance(now)`. Each state machine owns a
//! [`Scheduler`] keyed by its own timer kinds, so scheduling a key again
//! replaces the previous deadline and a reset is a single `clear()`.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;
use std::ops::Add;
use std::time::Duration;

/// Milliseconds on a monotonic host clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp(pub u64);

impl Timestamp {
    /// The host clock origin
    pub const ZERO: Timestamp = Timestamp(0);

    pub fn from_millis(ms: u64) -> Self {
        Self(ms)
    }

    pub fn as_millis(&self) -> u64 {
        self.0
    }

    /// Time elapsed since `earlier`, zero if `earlier` is in the future
    pub fn saturating_since(&self, earlier: Timestamp) -> Duration {
        Duration::from_millis(self.0.saturating_sub(earlier.0))
    }
}

/// First instant at which a window opened at `start` counts as exceeded.
///
/// Inputs exactly `window` apart still fall inside the window.
pub fn window_expiry(start: Timestamp, window: Duration) -> Timestamp {
    start + window + Duration::from_millis(1)
}

impl Add<Duration> for Timestamp {
    type Output = Timestamp;

    fn add(self, rhs: Duration) -> Timestamp {
        let ms = u64::try_from(rhs.as_millis()).unwrap_or(u64::MAX);
        Timestamp(self.0.saturating_add(ms))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// A pending timer entry
#[derive(Debug)]
struct Pending<K> {
    at: Timestamp,
    seq: u64,
    key: K,
}

impl<K> PartialEq for Pending<K> {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl<K> Eq for Pending<K> {}

impl<K> PartialOrd for Pending<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K> Ord for Pending<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior (earliest first, then FIFO)
        other
            .at
            .cmp(&self.at)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Keyed one-shot timer queue.
///
/// At most one timer is live per key. Replaced or cancelled entries stay in
/// the heap as tombstones and are skipped when popped.
#[derive(Debug)]
pub struct Scheduler<K> {
    heap: BinaryHeap<Pending<K>>,
    live: Vec<(K, u64, Timestamp)>,
    next_seq: u64,
}

impl<K: Copy + Eq + fmt::Debug> Scheduler<K> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            live: Vec::new(),
            next_seq: 0,
        }
    }

    /// Schedule `key` to fire at `at`, replacing any pending timer for `key`
    pub fn schedule(&mut self, key: K, at: Timestamp) {
        let seq = self.next_seq;
        self.next_seq += 1;

        match self.live.iter_mut().find(|(k, _, _)| *k == key) {
            Some(entry) => *entry = (key, seq, at),
            None => self.live.push((key, seq, at)),
        }
        self.heap.push(Pending { at, seq, key });
    }

    /// Cancel the pending timer for `key`. Returns whether one was pending.
    pub fn cancel(&mut self, key: K) -> bool {
        let before = self.live.len();
        self.live.retain(|(k, _, _)| *k != key);
        let cancelled = self.live.len() != before;
        self.compact();
        cancelled
    }

    /// Cancel every pending timer
    pub fn clear(&mut self) {
        self.live.clear();
        self.heap.clear();
    }

    pub fn is_pending(&self, key: K) -> bool {
        self.live.iter().any(|(k, _, _)| *k == key)
    }

    /// Deadline of the pending timer for `key`
    pub fn deadline(&self, key: K) -> Option<Timestamp> {
        self.live
            .iter()
            .find(|(k, _, _)| *k == key)
            .map(|(_, _, at)| *at)
    }

    /// Earliest live deadline
    pub fn next_deadline(&self) -> Option<Timestamp> {
        self.live.iter().map(|(_, _, at)| *at).min()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Pop the earliest timer due at or before `now`
    pub fn pop_due(&mut self, now: Timestamp) -> Option<K> {
        while let Some(top) = self.heap.peek() {
            if top.at > now {
                return None;
            }
            let Some(entry) = self.heap.pop() else {
                return None;
            };
            let live_idx = self
                .live
                .iter()
                .position(|(k, seq, _)| *k == entry.key && *seq == entry.seq);
            if let Some(idx) = live_idx {
                self.live.swap_remove(idx);
                return Some(entry.key);
            }
            // tombstone
        }
        None
    }

    /// Drain every timer due at or before `now`, in deadline order
    pub fn drain_due(&mut self, now: Timestamp) -> Vec<K> {
        let mut due = Vec::new();
        while let Some(key) = self.pop_due(now) {
            due.push(key);
        }
        due
    }

    fn compact(&mut self) {
        if self.live.is_empty() {
            self.heap.clear();
        }
    }
}

impl<K: Copy + Eq + fmt::Debug> Default for Scheduler<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Key {
        A,
        B,
    }

    #[test]
    fn test_timestamp_add_and_since() {
        let t = Timestamp::from_millis(1_000) + Duration::from_millis(500);
        assert_eq!(t, Timestamp(1_500));
        assert_eq!(t.saturating_since(Timestamp(1_000)), Duration::from_millis(500));
        assert_eq!(Timestamp(10).saturating_since(t), Duration::ZERO);
    }

    #[test]
    fn test_window_expiry_is_exclusive() {
        let expiry = window_expiry(Timestamp(100), Duration::from_millis(1_000));
        assert_eq!(expiry, Timestamp(1_101));
    }

    #[test]
    fn test_pop_due_in_deadline_order() {
        let mut sched = Scheduler::new();
        sched.schedule(Key::B, Timestamp(200));
        sched.schedule(Key::A, Timestamp(100));

        assert_eq!(sched.pop_due(Timestamp(50)), None);
        assert_eq!(sched.drain_due(Timestamp(300)), vec![Key::A, Key::B]);
        assert!(sched.is_empty());
    }

    #[test]
    fn test_reschedule_replaces_previous_deadline() {
        let mut sched = Scheduler::new();
        sched.schedule(Key::A, Timestamp(100));
        sched.schedule(Key::A, Timestamp(400));

        // the stale 100ms entry must not fire
        assert_eq!(sched.pop_due(Timestamp(200)), None);
        assert_eq!(sched.deadline(Key::A), Some(Timestamp(400)));
        assert_eq!(sched.pop_due(Timestamp(400)), Some(Key::A));
        assert_eq!(sched.pop_due(Timestamp(1_000)), None);
    }

    #[test]
    fn test_cancel_prevents_firing() {
        let mut sched = Scheduler::new();
        sched.schedule(Key::A, Timestamp(100));
        sched.schedule(Key::B, Timestamp(100));

        assert!(sched.cancel(Key::A));
        assert!(!sched.cancel(Key::A));
        assert_eq!(sched.drain_due(Timestamp(100)), vec![Key::B]);
    }

    #[test]
    fn test_next_deadline_ignores_cancelled() {
        let mut sched = Scheduler::new();
        sched.schedule(Key::A, Timestamp(100));
        sched.schedule(Key::B, Timestamp(300));
        sched.cancel(Key::A);
        assert_eq!(sched.next_deadline(), Some(Timestamp(300)));

        sched.clear();
        assert_eq!(sched.next_deadline(), None);
        assert!(!sched.is_pending(Key::B));
    }

    #[test]
    fn test_same_deadline_fires_in_schedule_order() {
        let mut sched = Scheduler::new();
        sched.schedule(Key::B, Timestamp(100));
        sched.schedule(Key::A, Timestamp(100));
        assert_eq!(sched.drain_due(Timestamp(100)), vec![Key::B, Key::A]);
    }
}
