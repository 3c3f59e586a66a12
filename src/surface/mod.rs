// SPDX-License-Identifier: MPL-2.0
//! The display surface: attached toasts, their timers and their stacking.
//!
//! A [`Surface`] is the single owner of every live toast. It keeps them in
//! attach order, runs their lifecycle (`show`, `hide`, grace delay,
//! detachment) and asks the [`Coordinator`] to recompute offsets whenever
//! the visible set changes.
//!
//! Time is injected: operations take the current `Instant` and timers fire
//! from [`Surface::advance`]. A host calls `advance` from its tick
//! subscription while [`Surface::next_deadline`] reports pending work.
//!
//! # Usage
//!
//! ```
//! use iced_toasts::options::ToastOptions;
//! use iced_toasts::surface::Surface;
//! use std::time::{Duration, Instant};
//!
//! let mut surface = Surface::new();
//! let start = Instant::now();
//! let id = surface.show_toast(ToastOptions::success("Saved").duration_ms(1000), start);
//! assert!(surface.get(id).is_some_and(|t| t.is_visible()));
//!
//! // Auto-hide at 1000ms, detached after the 300ms grace delay.
//! surface.advance(start + Duration::from_millis(1300));
//! assert!(surface.get(id).is_none());
//! ```

mod event;
mod scheduler;

pub use event::ToastEvent;
pub use scheduler::{Scheduler, TaskHandle};

use crate::config::ToastConfig;
use crate::coordinator::{Coordinator, Measure, Placement, TextMeasure};
use crate::options::ToastOptions;
use crate::toast::{DismissDelay, Toast, ToastId};
use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::time::{Duration, Instant};

/// Timer-driven work scheduled on behalf of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Task {
    /// The auto-dismiss duration elapsed.
    AutoHide(ToastId),
    /// The hide grace delay elapsed.
    FinishHide(ToastId),
    /// The factory's defensive removal after "hidden".
    ForceRemove(ToastId),
}

/// Owner of the attached toasts.
pub struct Surface {
    /// Attached toasts, oldest first.
    toasts: Vec<Toast>,
    scheduler: Scheduler<Task>,
    coordinator: Coordinator,
    measure: Box<dyn Measure>,
    /// Current stacking, newest first.
    placements: Vec<Placement>,
    events: VecDeque<ToastEvent>,
    /// Factory-created toasts still waiting for their one-shot "hidden" observer.
    removal_guards: HashSet<ToastId>,
    grace_delay: Duration,
    removal_delay: Duration,
    default_duration: DismissDelay,
}

impl fmt::Debug for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Surface")
            .field("attached", &self.toasts.len())
            .field("pending_tasks", &self.scheduler.len())
            .field("coordinator", &self.coordinator)
            .finish_non_exhaustive()
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface {
    /// Creates an empty surface with default timing and geometry.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&ToastConfig::default())
    }

    /// Creates an empty surface from the `[toasts]` configuration section.
    #[must_use]
    pub fn with_config(config: &ToastConfig) -> Self {
        Self {
            toasts: Vec::new(),
            scheduler: Scheduler::new(),
            coordinator: Coordinator::from_config(config),
            measure: Box::new(TextMeasure::default()),
            placements: Vec::new(),
            events: VecDeque::new(),
            removal_guards: HashSet::new(),
            grace_delay: config.grace_delay(),
            removal_delay: config.removal_delay(),
            default_duration: DismissDelay::from_millis(config.default_duration_ms),
        }
    }

    /// Replaces the height measurement used for stacking.
    #[must_use]
    pub fn with_measure(mut self, measure: impl Measure + 'static) -> Self {
        self.measure = Box::new(measure);
        self.reposition();
        self
    }

    // =========================================================================
    // Factory
    // =========================================================================

    /// Creates, configures, attaches and shows a toast.
    ///
    /// Once the toast emits "hidden", an auto-hide toast that is still
    /// attached after a further removal delay is forcibly detached.
    pub fn show_toast(&mut self, options: ToastOptions, now: Instant) -> ToastId {
        let toast = Toast::new()
            .with_kind(options.kind)
            .with_message(options.message)
            .with_duration(options.duration.unwrap_or(self.default_duration))
            .with_auto_hide(options.auto_hide);

        let id = self.attach(toast);
        self.removal_guards.insert(id);
        self.show(id, now);
        id
    }

    // =========================================================================
    // Membership
    // =========================================================================

    /// Attaches a toast to the surface. Returns its ID.
    ///
    /// Attaching an ID that is already attached is a no-op.
    pub fn attach(&mut self, toast: Toast) -> ToastId {
        let id = toast.id();
        if self.contains(id) {
            tracing::debug!(?id, "toast already attached");
            return id;
        }
        tracing::debug!(?id, kind = %toast.kind(), "attaching toast");
        self.toasts.push(toast);
        self.reposition();
        id
    }

    /// Detaches a toast, cancelling every timer it still owns.
    ///
    /// Returns `None` if the toast is not attached, so detachment happens at
    /// most once.
    pub fn detach(&mut self, id: ToastId) -> Option<Toast> {
        let position = self.position(id)?;
        let mut toast = self.toasts.remove(position);

        for handle in [
            toast.replace_dismiss_timer(None),
            toast.replace_pending_hide(None),
        ]
        .into_iter()
        .flatten()
        {
            self.scheduler.cancel(handle);
        }
        toast.mark_hidden();
        toast.set_offset(None);
        self.removal_guards.remove(&id);

        tracing::debug!(?id, remaining = self.toasts.len(), "detached toast");
        self.reposition();
        Some(toast)
    }

    /// Detaches every toast immediately, without events.
    pub fn clear(&mut self) {
        self.toasts.clear();
        self.scheduler.clear();
        self.placements.clear();
        self.removal_guards.clear();
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Shows a toast.
    ///
    /// No-op returning `false` if the toast is unknown or already visible.
    /// Otherwise emits "shown", restacks, and arms the auto-dismiss timer
    /// when auto-hide is on and the duration is positive.
    pub fn show(&mut self, id: ToastId, now: Instant) -> bool {
        let Some(toast) = self.toasts.iter_mut().find(|t| t.id() == id) else {
            tracing::debug!(?id, "show on detached toast ignored");
            return false;
        };
        if !toast.mark_visible() {
            return false;
        }

        if let Some(previous) = toast.replace_dismiss_timer(None) {
            self.scheduler.cancel(previous);
        }
        let delay = toast.auto_hide().then(|| toast.duration().timer()).flatten();
        if let Some(delay) = delay {
            match now.checked_add(delay) {
                Some(deadline) => {
                    let handle = self.scheduler.schedule(deadline, Task::AutoHide(id));
                    toast.replace_dismiss_timer(Some(handle));
                }
                None => {
                    tracing::debug!(?id, ?delay, "dismiss deadline out of range, timer disabled");
                }
            }
        }
        if toast.is_hiding() {
            tracing::debug!(?id, "toast re-shown during hide grace delay");
        }

        tracing::debug!(?id, ?delay, "toast shown");
        self.events.push_back(ToastEvent::Shown(id));
        self.reposition();
        true
    }

    /// Hides a toast.
    ///
    /// No-op returning `false` if the toast is unknown or already hidden.
    /// Otherwise cancels the auto-dismiss timer and starts the grace delay,
    /// after which "hidden" is emitted and an auto-hide toast is detached.
    pub fn hide(&mut self, id: ToastId, now: Instant) -> bool {
        let Some(toast) = self.toasts.iter_mut().find(|t| t.id() == id) else {
            tracing::debug!(?id, "hide on detached toast ignored");
            return false;
        };
        if !toast.mark_hidden() {
            return false;
        }

        if let Some(timer) = toast.replace_dismiss_timer(None) {
            self.scheduler.cancel(timer);
        }
        let handle = self
            .scheduler
            .schedule(now + self.grace_delay, Task::FinishHide(id));
        if let Some(previous) = toast.replace_pending_hide(Some(handle)) {
            self.scheduler.cancel(previous);
        }

        tracing::debug!(?id, "toast hiding");
        true
    }

    /// Hides every visible toast.
    pub fn hide_all(&mut self, now: Instant) {
        let visible: Vec<_> = self
            .toasts
            .iter()
            .filter(|t| t.is_visible())
            .map(Toast::id)
            .collect();
        for id in visible {
            self.hide(id, now);
        }
    }

    /// Applies a declarative attribute to an attached toast and restacks.
    ///
    /// Returns `false` if the toast is unknown or the name is not recognized.
    pub fn set_attribute(&mut self, id: ToastId, name: &str, value: &str) -> bool {
        let Some(toast) = self.toasts.iter_mut().find(|t| t.id() == id) else {
            return false;
        };
        let applied = toast.set_attribute(name, value);
        if applied {
            self.reposition();
        }
        applied
    }

    /// Runs every timer due at or before `now`.
    ///
    /// Each task runs at its own deadline, so follow-up timers are scheduled
    /// relative to when they would have fired. Returns the number of tasks run.
    pub fn advance(&mut self, now: Instant) -> usize {
        let mut fired = 0;
        while let Some((deadline, task)) = self.scheduler.pop_due(now) {
            self.run(task, deadline);
            fired += 1;
        }
        fired
    }

    fn run(&mut self, task: Task, at: Instant) {
        match task {
            Task::AutoHide(id) => {
                if let Some(toast) = self.get_mut(id) {
                    toast.replace_dismiss_timer(None);
                }
                self.hide(id, at);
            }
            Task::FinishHide(id) => self.finish_hide(id, at),
            Task::ForceRemove(id) => {
                if self.detach(id).is_some() {
                    tracing::debug!(?id, "forced removal of lingering toast");
                }
            }
        }
    }

    fn finish_hide(&mut self, id: ToastId, at: Instant) {
        let Some(toast) = self.get_mut(id) else {
            return;
        };
        toast.replace_pending_hide(None);
        let auto_hide = toast.auto_hide();
        if toast.is_visible() {
            // Re-shown inside the grace delay: the hide still completes.
            tracing::debug!(?id, "grace delay elapsed on a re-shown toast");
        }

        self.events.push_back(ToastEvent::Hidden(id));

        if self.removal_guards.remove(&id) && auto_hide {
            self.scheduler
                .schedule(at + self.removal_delay, Task::ForceRemove(id));
        }

        if auto_hide {
            self.detach(id);
        } else {
            self.reposition();
        }
    }

    // =========================================================================
    // Stacking
    // =========================================================================

    /// Recomputes the offsets of all attached toasts.
    ///
    /// Only toasts attached when this runs are considered. Hidden toasts lose
    /// their offset, except those still inside the hide grace delay, which
    /// keep their last one until the delay elapses.
    pub fn reposition(&mut self) {
        self.placements = self.coordinator.layout(&self.toasts, self.measure.as_ref());
        for toast in &mut self.toasts {
            let placed = self
                .placements
                .iter()
                .find(|p| p.id == toast.id())
                .map(|p| p.offset);
            if placed.is_some() || !toast.is_hiding() {
                toast.set_offset(placed);
            }
        }
    }

    /// Current stacking of the visible toasts, newest first.
    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    #[must_use]
    pub fn coordinator(&self) -> &Coordinator {
        &self.coordinator
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id() == id)
    }

    fn get_mut(&mut self, id: ToastId) -> Option<&mut Toast> {
        self.toasts.iter_mut().find(|t| t.id() == id)
    }

    fn position(&self, id: ToastId) -> Option<usize> {
        self.toasts.iter().position(|t| t.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: ToastId) -> bool {
        self.position(id).is_some()
    }

    /// Attached toasts, oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Toast> {
        self.toasts.iter()
    }

    /// Number of attached toasts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.toasts.iter().filter(|t| t.is_visible()).count()
    }

    /// Earliest pending timer deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    /// Returns whether any timer is pending.
    #[must_use]
    pub fn has_pending_work(&self) -> bool {
        !self.scheduler.is_empty()
    }

    /// Takes the lifecycle events emitted since the last call, oldest first.
    pub fn drain_events(&mut self) -> Vec<ToastEvent> {
        self.events.drain(..).collect()
    }
}
