//! Clock-driven, cancelable debounce window.
//!
//! The debouncer never sleeps and owns no thread. Callers pass the current
//! [`Instant`] with every call, ask for the next deadline, and arrange to be
//! woken up by their host event loop. This keeps behavior deterministic: tests
//! drive time by hand.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

/// Holds at most one pending value until a quiet period elapses.
///
/// Every [`push`](Self::push) or [`update`](Self::update) cancels the running
/// window and starts a new one, so a burst of events yields a single value
/// once the input goes quiet.
///
/// # Examples
///
/// ```
/// use std::time::{Duration, Instant};
/// use tableview::scheduler::Debouncer;
///
/// let start = Instant::now();
/// let mut debouncer = Debouncer::new(Duration::from_millis(300));
///
/// debouncer.push("f", start);
/// debouncer.push("fo", start + Duration::from_millis(20));
/// debouncer.push("fox", start + Duration::from_millis(40));
///
/// assert_eq!(debouncer.poll(start + Duration::from_millis(100)), None);
/// assert_eq!(debouncer.poll(start + Duration::from_millis(340)), Some("fox"));
/// assert_eq!(debouncer.deadline(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    #[must_use]
    pub const fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Replaces the pending value and restarts the window.
    ///
    /// Returns the new deadline.
    pub fn push(&mut self, value: T, now: Instant) -> Instant {
        self.update(now, |_| value)
    }

    /// Combines the pending value (if any) with new input and restarts the
    /// window.
    ///
    /// Returns the new deadline.
    pub fn update<F>(&mut self, now: Instant, merge: F) -> Instant
    where
        F: FnOnce(Option<T>) -> T,
    {
        let previous = self.pending.take().map(|p| p.value);
        let deadline = now + self.window;
        self.pending = Some(Pending {
            value: merge(previous),
            deadline,
        });
        deadline
    }

    /// Takes the pending value if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        if self.pending.as_ref().is_some_and(|p| p.deadline <= now) {
            self.pending.take().map(|p| p.value)
        } else {
            None
        }
    }

    /// Drops the pending value without firing it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.pending.as_ref().map(|p| &p.value)
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }
}
