// SPDX-License-Identifier: MPL-2.0
//! `iced_toasts` is a toast notification system for the Iced GUI framework.
//!
//! Toasts are transient, kind-colored messages stacked in the bottom-right
//! corner. Each toast auto-dismisses after its duration unless told not to,
//! can be dismissed by the user, and leaves the surface after a short grace
//! delay once hidden.
//!
//! - [`toast`] - toast state, kinds and declarative attributes
//! - [`surface`] - the registry of attached toasts and their timers
//! - [`coordinator`] - stacking offsets for the visible toasts
//! - [`options`] / [`bridge`] - the factory input and response glue
//! - [`ui`] - Iced rendering
//!
//! The [`app`] module is a small demo that drives all of the above.

#![doc(html_root_url = "https://docs.rs/iced_toasts/0.1.0")]

pub mod app;
pub mod bridge;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod i18n;
pub mod options;
pub mod surface;
pub mod toast;
pub mod ui;

#[cfg(test)]
mod test_utils;
