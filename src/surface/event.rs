// SPDX-License-Identifier: MPL-2.0
//! Lifecycle notifications emitted by toasts.

use crate::toast::ToastId;

/// A lifecycle notification observable by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastEvent {
    /// Visibility turned on. Emitted synchronously by `show()`.
    Shown(ToastId),
    /// Visibility turned off. Emitted once the hide grace delay elapsed.
    Hidden(ToastId),
}

impl ToastEvent {
    pub const SHOWN: &'static str = "toast:shown";
    pub const HIDDEN: &'static str = "toast:hidden";

    /// Returns the event name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            ToastEvent::Shown(_) => Self::SHOWN,
            ToastEvent::Hidden(_) => Self::HIDDEN,
        }
    }

    /// Returns the toast that emitted the event.
    #[must_use]
    pub fn toast(&self) -> ToastId {
        match self {
            ToastEvent::Shown(id) | ToastEvent::Hidden(id) => *id,
        }
    }
}
