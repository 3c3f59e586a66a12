// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Rendering follows the Elm-style "state down, messages up" pattern: the
//! [`Surface`](crate::surface::Surface) owns the toasts, the views only read it.
//!
//! - [`notifications`] - Toast card and stacked overlay
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icons for toast kinds and the dismiss control

pub mod design_tokens;
pub mod icons;
pub mod notifications;
pub mod styles;
pub mod theming;
