// SPDX-License-Identifier: MPL-2.0
//! Theme mode selection.
//!
//! The toast card colors follow the active Iced theme; only the accent comes
//! from the toast kind.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => match dark_light::detect() {
                Ok(mode) => !matches!(mode, dark_light::Mode::Light),
                Err(err) => {
                    tracing::warn!(?err, "system theme detection failed, using dark");
                    true
                }
            },
        }
    }

    /// Returns the Iced theme for this mode.
    #[must_use]
    pub fn theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Next mode in the Light → Dark → System cycle.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
            ThemeMode::System => ThemeMode::Light,
        }
    }
}

/// Card background for toasts on the given theme.
#[must_use]
pub fn toast_background(theme: &Theme) -> Color {
    let base = theme.extended_palette().background.base.color;
    Color {
        a: opacity::SURFACE,
        ..base
    }
}

/// Hover tint for the dismiss control.
#[must_use]
pub fn dismiss_hover(pressed: bool) -> Color {
    Color {
        a: if pressed {
            opacity::OVERLAY_MEDIUM
        } else {
            opacity::OVERLAY_SUBTLE
        },
        ..palette::GRAY_400
    }
}
