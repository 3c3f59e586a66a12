// SPDX-License-Identifier: MPL-2.0
//! Toast kinds.
//!
//! A kind drives the accent color, the style marker and the icon of a toast.

use crate::ui::design_tokens::palette;
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// Operation completed successfully (green).
    Success,
    /// Something failed (red).
    Error,
    /// Informational message (blue).
    #[default]
    Info,
    /// Something needs attention but nothing failed (orange).
    Warning,
}

impl Kind {
    /// All kinds, in display order.
    pub const ALL: [Kind; 4] = [Kind::Success, Kind::Error, Kind::Info, Kind::Warning];

    /// Returns the lowercase name used by attributes and payloads.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Success => "success",
            Kind::Error => "error",
            Kind::Info => "info",
            Kind::Warning => "warning",
        }
    }

    /// Returns the style marker applied to a toast of this kind.
    #[must_use]
    pub fn marker(self) -> &'static str {
        match self {
            Kind::Success => "toast--success",
            Kind::Error => "toast--error",
            Kind::Info => "toast--info",
            Kind::Warning => "toast--warning",
        }
    }

    /// Returns the icon name hosted by a toast of this kind.
    #[must_use]
    pub fn icon_name(self) -> &'static str {
        match self {
            Kind::Success => "check-circle",
            Kind::Error => "x-circle",
            Kind::Info => "info",
            Kind::Warning => "alert-triangle",
        }
    }

    /// Returns the accent color for this kind.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Kind::Success => palette::SUCCESS_500,
            Kind::Error => palette::ERROR_500,
            Kind::Info => palette::INFO_500,
            Kind::Warning => palette::WARNING_500,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown toast kind: {0:?}")]
pub struct UnknownKind(pub String);

impl FromStr for Kind {
    type Err = UnknownKind;

    /// Parses a kind name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Kind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}
