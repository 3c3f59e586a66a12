// SPDX-License-Identifier: MPL-2.0
//! Toast rendering for Iced.
//!
//! The lifecycle lives in [`Surface`](crate::surface::Surface); this module
//! only draws it.
//!
//! # Usage
//!
//! ```ignore
//! use iced_toasts::ui::notifications;
//!
//! // In your view function, layer the toasts over the content
//! let overlay = notifications::view_overlay(&self.surface).map(Message::Toast);
//! Stack::new().push(content).push(overlay)
//!
//! // In your update function
//! Message::Toast(notifications::Message::Dismiss(id)) => {
//!     self.surface.hide(id, Instant::now());
//! }
//! ```
//!
//! # Design Considerations
//!
//! - Position: bottom-right corner, newest toast nearest the corner
//! - Dismissal fades the card during the grace delay before it is removed

mod toast;

pub use toast::{view, view_overlay, Message};
