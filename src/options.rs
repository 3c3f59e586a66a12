// SPDX-License-Identifier: MPL-2.0
//! Factory configuration for [`Surface::show_toast`](crate::surface::Surface::show_toast).
//!
//! Options deserialize from the `{message, type, duration, autoHide}` shape
//! used by response payloads. Deserialization is lenient: an unknown `type`
//! falls back to info, a malformed `duration` disables the timer and
//! `autoHide` accepts the same strings as the declarative attribute.

use crate::toast::{parse_auto_hide, DismissDelay, Kind};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// Options recognized by the toast factory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToastOptions {
    pub message: String,
    #[serde(rename = "type", deserialize_with = "lenient_kind")]
    pub kind: Kind,
    /// `None` uses the surface's configured default duration.
    #[serde(deserialize_with = "lenient_duration")]
    pub duration: Option<DismissDelay>,
    #[serde(deserialize_with = "lenient_auto_hide")]
    pub auto_hide: bool,
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self {
            message: String::new(),
            kind: Kind::default(),
            duration: None,
            auto_hide: true,
        }
    }
}

impl ToastOptions {
    pub fn new(kind: Kind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind,
            ..Self::default()
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Kind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Kind::Error, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Kind::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Kind::Warning, message)
    }

    /// Sets the auto-dismiss duration in milliseconds; zero disables the timer.
    #[must_use]
    pub fn duration_ms(mut self, millis: u64) -> Self {
        self.duration = Some(DismissDelay::from_millis(millis));
        self
    }

    #[must_use]
    pub fn auto_hide(mut self, auto_hide: bool) -> Self {
        self.auto_hide = auto_hide;
        self
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawKind {
    Name(String),
    Other(IgnoredAny),
}

fn lenient_kind<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Kind, D::Error> {
    let kind = match RawKind::deserialize(deserializer)? {
        RawKind::Name(name) => name.parse().unwrap_or_else(|err| {
            tracing::warn!(%err, "falling back to default toast kind");
            Kind::default()
        }),
        RawKind::Other(_) => {
            tracing::warn!("non-string toast type, falling back to default kind");
            Kind::default()
        }
    };
    Ok(kind)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDuration {
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Text(String),
    Other(IgnoredAny),
}

impl RawDuration {
    fn into_delay(self) -> DismissDelay {
        match self {
            RawDuration::Unsigned(ms) => DismissDelay::from_millis(ms),
            RawDuration::Float(ms) if ms.is_finite() && ms >= 0.0 => {
                DismissDelay::from_millis(ms as u64)
            }
            RawDuration::Text(text) => DismissDelay::from_attribute(&text),
            RawDuration::Signed(_) | RawDuration::Float(_) | RawDuration::Other(_) => {
                DismissDelay::Invalid
            }
        }
    }
}

fn lenient_duration<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<DismissDelay>, D::Error> {
    let delay = Option::<RawDuration>::deserialize(deserializer)?.map(RawDuration::into_delay);
    if delay == Some(DismissDelay::Invalid) {
        tracing::warn!("malformed toast duration, timer disabled");
    }
    Ok(delay)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAutoHide {
    Flag(bool),
    Text(String),
    Other(IgnoredAny),
}

fn lenient_auto_hide<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let auto_hide = match Option::<RawAutoHide>::deserialize(deserializer)? {
        None => true,
        Some(RawAutoHide::Flag(flag)) => flag,
        Some(RawAutoHide::Text(text)) => parse_auto_hide(&text),
        Some(RawAutoHide::Other(_)) => {
            tracing::warn!("malformed toast autoHide, keeping auto-hide on");
            true
        }
    };
    Ok(auto_hide)
}
