// SPDX-License-Identifier: MPL-2.0
//! The notification element: one toast and its own state.
//!
//! A [`Toast`] owns its configuration, its style markers and the handles of
//! the timers scheduled on its behalf. Visibility can only be flipped by the
//! surface's `show()`/`hide()` operations, which keep timers, events and
//! stacking consistent.

use super::attributes::{Attribute, DismissDelay};
use super::kind::Kind;
use crate::surface::TaskHandle;

/// Base marker carried by every toast.
pub const BASE_MARKER: &str = "toast";

/// Marker present while the toast is visible.
pub const VISIBLE_MARKER: &str = "toast--visible";

/// Unique identifier for a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ToastId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered set of style markers applied to a toast.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markers(Vec<&'static str>);

impl Markers {
    #[must_use]
    pub fn contains(&self, marker: &str) -> bool {
        self.0.contains(&marker)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().copied()
    }

    fn add(&mut self, marker: &'static str) {
        if !self.contains(marker) {
            self.0.push(marker);
        }
    }

    fn remove(&mut self, marker: &str) {
        self.0.retain(|m| *m != marker);
    }
}

/// A single toast notification.
#[derive(Debug)]
pub struct Toast {
    id: ToastId,
    kind: Kind,
    message: String,
    duration: DismissDelay,
    auto_hide: bool,
    visible: bool,
    markers: Markers,
    icon: &'static str,
    /// Pending auto-dismiss timer, armed by `show()`.
    dismiss_timer: Option<TaskHandle>,
    /// Pending end of the hide grace delay, armed by `hide()`.
    pending_hide: Option<TaskHandle>,
    /// Distance from the anchor edge, assigned by the coordinator.
    offset: Option<f32>,
}

impl Default for Toast {
    fn default() -> Self {
        Self::new()
    }
}

/// Timer handles belong to the surface that armed them and are not cloned.
impl Clone for Toast {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            kind: self.kind,
            message: self.message.clone(),
            duration: self.duration,
            auto_hide: self.auto_hide,
            visible: self.visible,
            markers: self.markers.clone(),
            icon: self.icon,
            dismiss_timer: None,
            pending_hide: None,
            offset: self.offset,
        }
    }
}

impl Toast {
    /// Creates a hidden info toast with an empty message, the default
    /// duration and auto-hide enabled.
    pub fn new() -> Self {
        let kind = Kind::default();
        let mut markers = Markers::default();
        markers.add(BASE_MARKER);
        markers.add(kind.marker());

        Self {
            id: ToastId::new(),
            kind,
            message: String::new(),
            duration: DismissDelay::default(),
            auto_hide: true,
            visible: false,
            markers,
            icon: kind.icon_name(),
            dismiss_timer: None,
            pending_hide: None,
            offset: None,
        }
    }

    /// Creates a toast from declarative `(name, value)` attribute pairs.
    ///
    /// Unrecognized names are ignored and malformed values fail soft.
    pub fn from_attributes<'a>(attributes: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut toast = Self::new();
        for (name, value) in attributes {
            toast.set_attribute(name, value);
        }
        toast
    }

    #[must_use]
    pub fn with_kind(mut self, kind: Kind) -> Self {
        self.set_kind(kind);
        self
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.set_message(message);
        self
    }

    #[must_use]
    pub fn with_duration(mut self, duration: DismissDelay) -> Self {
        self.set_duration(duration);
        self
    }

    #[must_use]
    pub fn with_auto_hide(mut self, auto_hide: bool) -> Self {
        self.set_auto_hide(auto_hide);
        self
    }

    /// Switches the kind, swapping the kind marker and icon together.
    pub fn set_kind(&mut self, kind: Kind) {
        self.markers.remove(self.kind.marker());
        self.markers.add(kind.marker());
        self.icon = kind.icon_name();
        self.kind = kind;
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    /// Sets the auto-dismiss delay used by the next `show()`.
    pub fn set_duration(&mut self, duration: DismissDelay) {
        self.duration = duration;
    }

    pub fn set_auto_hide(&mut self, auto_hide: bool) {
        self.auto_hide = auto_hide;
    }

    /// Applies one typed attribute through its setter.
    pub fn apply(&mut self, attribute: Attribute) {
        match attribute {
            Attribute::Type(kind) => self.set_kind(kind),
            Attribute::Message(message) => self.set_message(message),
            Attribute::Duration(duration) => self.set_duration(duration),
            Attribute::AutoHide(auto_hide) => self.set_auto_hide(auto_hide),
        }
    }

    /// Parses and applies a declarative attribute.
    ///
    /// Returns `false` when the name is not a recognized attribute.
    pub fn set_attribute(&mut self, name: &str, value: &str) -> bool {
        match Attribute::parse(name, value) {
            Some(attribute) => {
                self.apply(attribute);
                true
            }
            None => {
                tracing::debug!(name, "ignoring unrecognized toast attribute");
                false
            }
        }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn duration(&self) -> DismissDelay {
        self.duration
    }

    #[must_use]
    pub fn auto_hide(&self) -> bool {
        self.auto_hide
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    /// Name of the icon hosted by this toast.
    #[must_use]
    pub fn icon(&self) -> &'static str {
        self.icon
    }

    /// Offset from the anchor edge, or `None` when not stacked.
    #[must_use]
    pub fn offset(&self) -> Option<f32> {
        self.offset
    }

    /// Returns whether an auto-dismiss timer is armed.
    #[must_use]
    pub fn has_dismiss_timer(&self) -> bool {
        self.dismiss_timer.is_some()
    }

    /// Returns whether the hide grace delay is running.
    #[must_use]
    pub fn is_hiding(&self) -> bool {
        self.pending_hide.is_some()
    }

    // Lifecycle state, driven by the surface only.

    /// Turns visibility on; returns `false` if it already was.
    pub(crate) fn mark_visible(&mut self) -> bool {
        if self.visible {
            return false;
        }
        self.visible = true;
        self.markers.add(VISIBLE_MARKER);
        true
    }

    /// Turns visibility off; returns `false` if it already was.
    pub(crate) fn mark_hidden(&mut self) -> bool {
        if !self.visible {
            return false;
        }
        self.visible = false;
        self.markers.remove(VISIBLE_MARKER);
        true
    }

    pub(crate) fn replace_dismiss_timer(&mut self, handle: Option<TaskHandle>) -> Option<TaskHandle> {
        std::mem::replace(&mut self.dismiss_timer, handle)
    }

    pub(crate) fn replace_pending_hide(&mut self, handle: Option<TaskHandle>) -> Option<TaskHandle> {
        std::mem::replace(&mut self.pending_hide, handle)
    }

    pub(crate) fn set_offset(&mut self, offset: Option<f32>) {
        self.offset = offset;
    }
}
