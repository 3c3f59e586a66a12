// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Interval of the tick driving toast timers.
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Creates a periodic tick subscription while toast tasks are pending.
///
/// With nothing scheduled the application stays idle.
pub fn create_tick_subscription(has_pending_work: bool) -> Subscription<Message> {
    if has_pending_work {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
