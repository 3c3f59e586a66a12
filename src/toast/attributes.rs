// SPDX-License-Identifier: MPL-2.0
//! Declarative toast attributes.
//!
//! A toast accepts four recognized attributes: `type`, `message`, `duration`
//! and `auto-hide`. Parsing never fails: malformed values degrade to a value
//! that keeps the toast usable (unknown kinds fall back to the default kind,
//! unparsable durations disable the timer).

use super::kind::Kind;
use crate::config::DEFAULT_DURATION_MS;
use std::time::Duration;

/// Auto-dismiss delay of a toast.
///
/// This newtype keeps invalid input representable without ever producing an
/// invalid timer: only [`DismissDelay::timer`] decides whether a timer is armed.
///
/// # Example
///
/// ```
/// use iced_toasts::toast::DismissDelay;
/// use std::time::Duration;
///
/// assert_eq!(DismissDelay::from_attribute("1500").timer(), Some(Duration::from_millis(1500)));
/// assert_eq!(DismissDelay::from_attribute("abc").timer(), None);
/// assert_eq!(DismissDelay::from_millis(0).timer(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissDelay {
    /// A delay in milliseconds. Zero disables the timer.
    Millis(u64),
    /// The declared value was not a number; the timer is disabled.
    Invalid,
}

impl DismissDelay {
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self::Millis(millis)
    }

    /// Parses a declarative `duration` attribute value.
    ///
    /// Leading whitespace and an optional sign are skipped, then the leading
    /// digits are read; trailing text is ignored (`"1500ms"` is 1500).
    /// No digits or a negative number yields [`DismissDelay::Invalid`].
    #[must_use]
    pub fn from_attribute(value: &str) -> Self {
        let trimmed = value.trim_start();
        let (negative, unsigned) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let digits_len = unsigned.bytes().take_while(u8::is_ascii_digit).count();
        if digits_len == 0 {
            return Self::Invalid;
        }

        let digits = &unsigned[..digits_len];
        if negative && digits.bytes().any(|b| b != b'0') {
            return Self::Invalid;
        }

        // Overflowing digit runs saturate to the longest delay.
        let millis = digits.parse::<u64>().unwrap_or(u64::MAX);
        Self::from_millis(millis)
    }

    /// Returns the timer duration, or `None` when no timer should be armed.
    #[must_use]
    pub fn timer(self) -> Option<Duration> {
        match self {
            Self::Millis(0) | Self::Invalid => None,
            Self::Millis(ms) => Some(Duration::from_millis(ms)),
        }
    }

    /// Returns the delay in milliseconds, if valid.
    #[must_use]
    pub fn millis(self) -> Option<u64> {
        match self {
            Self::Millis(ms) => Some(ms),
            Self::Invalid => None,
        }
    }
}

impl Default for DismissDelay {
    fn default() -> Self {
        Self::Millis(DEFAULT_DURATION_MS)
    }
}

/// Parses a declarative `auto-hide` value.
///
/// Only the exact string `"false"` is falsy; every other value is truthy.
#[must_use]
pub fn parse_auto_hide(value: &str) -> bool {
    value != "false"
}

/// Recognized declarative attribute names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeName {
    Type,
    Message,
    Duration,
    AutoHide,
}

impl AttributeName {
    pub const ALL: [AttributeName; 4] = [
        AttributeName::Type,
        AttributeName::Message,
        AttributeName::Duration,
        AttributeName::AutoHide,
    ];

    /// Looks up a recognized attribute by its markup name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|attr| attr.as_str() == name)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AttributeName::Type => "type",
            AttributeName::Message => "message",
            AttributeName::Duration => "duration",
            AttributeName::AutoHide => "auto-hide",
        }
    }
}

/// A typed attribute value, ready to be applied through a toast setter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attribute {
    Type(Kind),
    Message(String),
    Duration(DismissDelay),
    AutoHide(bool),
}

impl Attribute {
    /// Parses a `name="value"` pair.
    ///
    /// Returns `None` for unrecognized names. Recognized names always produce
    /// an attribute: an unknown `type` falls back to the default kind.
    #[must_use]
    pub fn parse(name: &str, value: &str) -> Option<Self> {
        let attribute = match AttributeName::from_name(name)? {
            AttributeName::Type => Attribute::Type(value.parse().unwrap_or_else(|err| {
                tracing::warn!(%err, "falling back to default toast kind");
                Kind::default()
            })),
            AttributeName::Message => Attribute::Message(value.to_string()),
            AttributeName::Duration => {
                let delay = DismissDelay::from_attribute(value);
                if delay == DismissDelay::Invalid {
                    tracing::warn!(value, "non-numeric toast duration, timer disabled");
                }
                Attribute::Duration(delay)
            }
            AttributeName::AutoHide => Attribute::AutoHide(parse_auto_hide(value)),
        };
        Some(attribute)
    }

    #[must_use]
    pub fn name(&self) -> AttributeName {
        match self {
            Attribute::Type(_) => AttributeName::Type,
            Attribute::Message(_) => AttributeName::Message,
            Attribute::Duration(_) => AttributeName::Duration,
            Attribute::AutoHide(_) => AttributeName::AutoHide,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_parses_integer_prefix() {
        assert_eq!(DismissDelay::from_attribute("1000"), DismissDelay::Millis(1000));
        assert_eq!(DismissDelay::from_attribute("  250ms"), DismissDelay::Millis(250));
        assert_eq!(DismissDelay::from_attribute("+42"), DismissDelay::Millis(42));
        assert_eq!(DismissDelay::from_attribute("12.9"), DismissDelay::Millis(12));
    }

    #[test]
    fn malformed_duration_is_invalid_and_disables_timer() {
        for value in ["abc", "", "  ", "-", "ms100", "-5"] {
            let delay = DismissDelay::from_attribute(value);
            assert_eq!(delay, DismissDelay::Invalid, "value {value:?}");
            assert_eq!(delay.timer(), None);
        }
    }

    #[test]
    fn negative_zero_is_zero() {
        assert_eq!(DismissDelay::from_attribute("-0"), DismissDelay::Millis(0));
    }

    #[test]
    fn huge_duration_saturates() {
        let delay = DismissDelay::from_attribute("99999999999999999999999");
        assert_eq!(delay, DismissDelay::Millis(u64::MAX));
    }

    #[test]
    fn long_duration_is_kept() {
        let delay = DismissDelay::from_millis(7_200_000);
        assert_eq!(delay.timer(), Some(Duration::from_secs(7200)));
    }

    #[test]
    fn zero_duration_disables_timer() {
        assert_eq!(DismissDelay::from_millis(0).timer(), None);
        assert_eq!(DismissDelay::from_millis(0).millis(), Some(0));
    }

    #[test]
    fn only_literal_false_disables_auto_hide() {
        assert!(!parse_auto_hide("false"));
        assert!(parse_auto_hide("true"));
        assert!(parse_auto_hide(""));
        assert!(parse_auto_hide("0"));
        assert!(parse_auto_hide("FALSE"));
    }

    #[test]
    fn unknown_attribute_names_are_ignored() {
        assert_eq!(Attribute::parse("class", "x"), None);
        assert_eq!(Attribute::parse("autoHide", "false"), None);
    }

    #[test]
    fn unknown_type_falls_back_to_default_kind() {
        assert_eq!(Attribute::parse("type", "fatal"), Some(Attribute::Type(Kind::Info)));
        assert_eq!(Attribute::parse("type", "error"), Some(Attribute::Type(Kind::Error)));
    }

    #[test]
    fn attribute_names_round_trip() {
        for name in AttributeName::ALL {
            assert_eq!(AttributeName::from_name(name.as_str()), Some(name));
        }
    }
}
