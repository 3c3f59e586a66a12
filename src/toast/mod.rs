// SPDX-License-Identifier: MPL-2.0
//! Toast notification elements.
//!
//! # Components
//!
//! - [`kind`] - `Kind` enum (success, error, info, warning)
//! - [`attributes`] - Declarative attribute parsing and `DismissDelay`
//! - [`element`] - `Toast`, the per-notification state
//!
//! Toasts are created detached and become live once attached to a
//! [`Surface`](crate::surface::Surface), which drives their lifecycle.

pub mod attributes;
pub mod element;
pub mod kind;

pub use attributes::{parse_auto_hide, Attribute, AttributeName, DismissDelay};
pub use element::{Markers, Toast, ToastId, BASE_MARKER, VISIBLE_MARKER};
pub use kind::{Kind, UnknownKind};
