//! Cooperative timers
//!
//! Single-threaded one-shot and repeating timers, fired by polling with the
//! current `Instant`. A timer set belongs to one lifecycle scope: once the
//! owner is torn down every pending timer is dropped and later polls and
//! schedules are no-ops.

use std::time::{Duration, Instant};

/// Handle to a scheduled timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
struct Entry<E> {
    id: TimerId,
    deadline: Instant,
    repeat: Option<Duration>,
    event: E,
}

/// Lifecycle of the scope owning a timer set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Mounted,
    Unmounted,
}

/// A set of pending timers owned by one view
#[derive(Debug, Clone)]
pub struct Timers<E> {
    entries: Vec<Entry<E>>,
    next_id: u64,
    lifecycle: Lifecycle,
}

impl<E: Clone> Default for Timers<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Clone> Timers<E> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
            lifecycle: Lifecycle::Mounted,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.lifecycle == Lifecycle::Mounted
    }

    /// Fire `event` once, `delay` after `now`
    pub fn once(&mut self, now: Instant, delay: Duration, event: E) -> Option<TimerId> {
        self.insert(now + delay, None, event)
    }

    /// Fire `event` every `period`, first at `now + period`
    pub fn every(&mut self, now: Instant, period: Duration, event: E) -> Option<TimerId> {
        // A zero period would fire forever within one poll
        let period = period.max(Duration::from_millis(1));
        self.insert(now + period, Some(period), event)
    }

    fn insert(&mut self, deadline: Instant, repeat: Option<Duration>, event: E) -> Option<TimerId> {
        if !self.is_mounted() {
            return None;
        }
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            deadline,
            repeat,
            event,
        });
        Some(id)
    }

    /// Cancel one timer. Returns whether it was still pending.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// End the owning scope: drop everything and refuse new timers
    pub fn unmount(&mut self) {
        self.entries.clear();
        self.lifecycle = Lifecycle::Unmounted;
    }

    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    /// Collect every event due at `now`, in deadline order.
    ///
    /// Repeating timers that missed several periods fire once per missed
    /// period so cyclic state stays in step with wall time.
    pub fn poll(&mut self, now: Instant) -> Vec<E> {
        let mut fired: Vec<(Instant, TimerId, E)> = Vec::new();
        if !self.is_mounted() {
            return Vec::new();
        }

        let mut kept = Vec::with_capacity(self.entries.len());
        for mut entry in self.entries.drain(..) {
            while entry.deadline <= now {
                fired.push((entry.deadline, entry.id, entry.event.clone()));
                match entry.repeat {
                    Some(period) => entry.deadline += period,
                    None => break,
                }
            }
            if entry.deadline > now {
                kept.push(entry);
            }
        }
        self.entries = kept;

        fired.sort_by_key(|(deadline, id, _)| (*deadline, *id));
        fired.into_iter().map(|(_, _, event)| event).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_once_fires_a_single_time() {
        let start = Instant::now();
        let mut timers = Timers::new();
        timers.once(start, ms(100), "a");

        assert!(timers.poll(start + ms(99)).is_empty());
        assert_eq!(timers.poll(start + ms(100)), vec!["a"]);
        assert!(timers.poll(start + ms(500)).is_empty());
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn test_events_fire_in_deadline_order() {
        let start = Instant::now();
        let mut timers = Timers::new();
        timers.once(start, ms(300), "late");
        timers.once(start, ms(100), "early");
        timers.once(start, ms(200), "middle");

        assert_eq!(timers.poll(start + ms(1000)), vec!["early", "middle", "late"]);
    }

    #[test]
    fn test_every_catches_up_missed_periods() {
        let start = Instant::now();
        let mut timers = Timers::new();
        timers.every(start, ms(100), 1u8);

        assert_eq!(timers.poll(start + ms(350)).len(), 3);
        assert_eq!(timers.poll(start + ms(400)).len(), 1);
    }

    #[test]
    fn test_cancel_removes_timer() {
        let start = Instant::now();
        let mut timers = Timers::new();
        let id = timers.once(start, ms(100), ()).unwrap();
        assert!(timers.cancel(id));
        assert!(!timers.cancel(id));
        assert!(timers.poll(start + ms(200)).is_empty());
    }

    #[test]
    fn test_unmount_drops_and_refuses_timers() {
        let start = Instant::now();
        let mut timers = Timers::new();
        timers.once(start, ms(100), ());
        timers.unmount();

        assert!(!timers.is_mounted());
        assert!(timers.poll(start + ms(200)).is_empty());
        assert!(timers.once(start, ms(10), ()).is_none());
        assert_eq!(timers.pending(), 0);
    }
}
