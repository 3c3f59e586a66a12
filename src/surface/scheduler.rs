// SPDX-License-Identifier: MPL-2.0
//! Deadline-ordered one-shot tasks.
//!
//! Every timer of the toast lifecycle is an entry in a [`Scheduler`]. Entries
//! are identified by a [`TaskHandle`] so their owner can cancel them before
//! rescheduling. Tasks fire in deadline order; tasks sharing a deadline fire
//! in the order they were scheduled.

use std::collections::{BTreeMap, HashMap};
use std::time::Instant;

/// Handle to a scheduled task, used to cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskHandle(u64);

/// A one-shot task queue keyed by deadline.
#[derive(Debug)]
pub struct Scheduler<T> {
    queue: BTreeMap<(Instant, TaskHandle), T>,
    deadlines: HashMap<TaskHandle, Instant>,
    next_handle: u64,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            queue: BTreeMap::new(),
            deadlines: HashMap::new(),
            next_handle: 0,
        }
    }
}

impl<T> Scheduler<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `task` to fire at `deadline`.
    pub fn schedule(&mut self, deadline: Instant, task: T) -> TaskHandle {
        let handle = TaskHandle(self.next_handle);
        self.next_handle += 1;
        self.queue.insert((deadline, handle), task);
        self.deadlines.insert(handle, deadline);
        handle
    }

    /// Cancels a pending task.
    ///
    /// Returns the task if it was still pending; cancelling a task that already
    /// fired (or was already cancelled) is a no-op returning `None`.
    pub fn cancel(&mut self, handle: TaskHandle) -> Option<T> {
        let deadline = self.deadlines.remove(&handle)?;
        self.queue.remove(&(deadline, handle))
    }

    /// Returns whether `handle` is still pending.
    #[must_use]
    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.deadlines.contains_key(&handle)
    }

    /// Removes and returns the earliest task due at or before `now`.
    pub fn pop_due(&mut self, now: Instant) -> Option<(Instant, T)> {
        let (&(deadline, handle), _) = self.queue.first_key_value()?;
        if deadline > now {
            return None;
        }
        self.deadlines.remove(&handle);
        self.queue
            .remove(&(deadline, handle))
            .map(|task| (deadline, task))
    }

    /// Returns the earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.queue.first_key_value().map(|(&(deadline, _), _)| deadline)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Drops every pending task.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.deadlines.clear();
    }
}
