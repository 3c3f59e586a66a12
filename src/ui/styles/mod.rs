// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the demo application widgets.

pub mod button;
pub mod container;

pub use button::{kind as button_kind, primary as button_primary};
