// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::toast::Kind;
use crate::ui::notifications;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    MessageChanged(String),
    DurationChanged(String),
    AutoHideToggled(bool),
    /// Show a toast of the given kind from the form values.
    Show(Kind),
    /// Feed a canned server response through the bridge.
    SimulateResponse,
    ClearAll,
    CycleTheme,
    Toast(notifications::Message),
    Tick(Instant), // Periodic tick driving the toast timers
}

/// Runtime flags passed from the CLI to the application.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP 47 format (e.g. `en-US`, `fr`).
    pub lang: Option<String>,
    /// Optional config directory override, already registered with
    /// [`crate::config::paths::init_cli_override`].
    pub config_dir: Option<String>,
}
