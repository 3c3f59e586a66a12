// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Lifecycle**: Auto-dismiss duration and hide animation delays
//! - **Stacking**: Gap and anchor offsets used by the coordinator
//! - **Bridge**: Durations applied to toasts derived from response payloads

// ==========================================================================
// Lifecycle Defaults
// ==========================================================================

/// Default auto-dismiss duration for a toast (in milliseconds).
pub const DEFAULT_DURATION_MS: u64 = 3000;

/// Upper bound for the configured grace and removal delays (in milliseconds, one hour).
pub const MAX_DELAY_MS: u64 = 3_600_000;

/// Delay between `hide()` and the "hidden" event / detachment.
///
/// Matches the dismissal transition so the element is not removed mid-animation.
pub const DEFAULT_GRACE_DELAY_MS: u64 = 300;

/// Extra delay the factory waits after "hidden" before forcing removal.
pub const DEFAULT_REMOVAL_DELAY_MS: u64 = 200;

// ==========================================================================
// Stacking Defaults
// ==========================================================================

/// Gap between two stacked toasts (logical pixels).
pub const DEFAULT_STACK_GAP: f32 = 8.0;

/// Distance between the anchor edge and the nearest toast (logical pixels).
pub const DEFAULT_BASE_OFFSET: f32 = 16.0;

/// Maximum gap accepted from configuration.
pub const MAX_STACK_GAP: f32 = 64.0;

/// Maximum base offset accepted from configuration.
pub const MAX_BASE_OFFSET: f32 = 256.0;

// ==========================================================================
// Bridge Defaults
// ==========================================================================

/// Auto-dismiss duration for toasts raised from response errors.
pub const DEFAULT_ERROR_DURATION_MS: u64 = 5000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Lifecycle validation
    assert!(DEFAULT_DURATION_MS > 0);
    assert!(DEFAULT_GRACE_DELAY_MS <= MAX_DELAY_MS);
    assert!(DEFAULT_REMOVAL_DELAY_MS <= MAX_DELAY_MS);
    assert!(DEFAULT_GRACE_DELAY_MS > 0);

    // Stacking validation
    assert!(DEFAULT_STACK_GAP > 0.0);
    assert!(DEFAULT_STACK_GAP <= MAX_STACK_GAP);
    assert!(DEFAULT_BASE_OFFSET >= 0.0);
    assert!(DEFAULT_BASE_OFFSET <= MAX_BASE_OFFSET);
};
