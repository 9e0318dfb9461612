//! Single-slot cancellable timer.
//!
//! Scheduling replaces whatever was pending and restarts the delay, so at most
//! one value is ever waiting. Time is passed in by the caller; nothing here
//! sleeps or spawns.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedule `value` to fire `delay` after `now`.
    ///
    /// Returns the value it superseded, if any.
    pub fn schedule(&mut self, value: T, now: Instant) -> Option<T> {
        let deadline = now + self.delay;
        self.pending
            .replace(Pending { value, deadline })
            .map(|p| p.value)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Take the pending value if its deadline has been reached
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        if self.pending.as_ref().is_some_and(|p| p.deadline <= now) {
            self.pending.take().map(|p| p.value)
        } else {
            None
        }
    }

    /// Drop the pending value without firing it
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(800);

    #[test]
    fn test_fires_after_delay() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);

        assert!(debouncer.schedule("a", start).is_none());
        assert_eq!(debouncer.deadline(), Some(start + DELAY));

        assert_eq!(debouncer.poll(start + Duration::from_millis(799)), None);
        assert!(debouncer.is_pending());

        assert_eq!(debouncer.poll(start + DELAY), Some("a"));
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.poll(start + DELAY * 2), None);
    }

    #[test]
    fn test_schedule_supersedes_and_restarts() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);

        debouncer.schedule("a", start);
        let later = start + Duration::from_millis(500);
        assert_eq!(debouncer.schedule("ab", later), Some("a"));

        // The first deadline has passed but was replaced
        assert_eq!(debouncer.poll(start + DELAY), None);
        assert_eq!(debouncer.poll(later + DELAY), Some("ab"));
    }

    #[test]
    fn test_cancel() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);

        debouncer.schedule(1, start);
        assert_eq!(debouncer.cancel(), Some(1));
        assert_eq!(debouncer.poll(start + DELAY), None);
        assert_eq!(debouncer.cancel(), None);
        assert_eq!(debouncer.deadline(), None);
    }
}
