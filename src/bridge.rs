// SPDX-License-Identifier: MPL-2.0
//! Response glue: maps server responses to toasts.
//!
//! Two payload shapes are understood:
//!
//! - GraphQL responses (`{"data": .., "errors": [{"message": ..}]}`): one error
//!   toast per error entry, plus an optional success toast when the response
//!   carries data and no errors.
//! - HTMX `HX-Trigger` headers (`{"showToast": {..}}` or `{"showToast": [..]}`):
//!   one toast per entry, each entry being factory options or a bare message.
//!
//! The `notify_*` entry points never fail: a malformed payload is logged and
//! produces no toast.

use crate::config::ToastConfig;
use crate::error::{Error, Result};
use crate::options::ToastOptions;
use crate::surface::Surface;
use crate::toast::{DismissDelay, ToastId};
use serde::Deserialize;
use serde_json::Value;
use std::time::Instant;

/// `HX-Trigger` event carrying toasts.
pub const SHOW_TOAST_EVENT: &str = "showToast";

/// Message used for error entries without a message.
const FALLBACK_ERROR_MESSAGE: &str = "Request failed";

/// A GraphQL error entry.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GraphQlError {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub extensions: Option<Value>,
}

/// The parts of a GraphQL response the bridge looks at.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

impl GraphQlResponse {
    /// Parses a response body.
    pub fn parse(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    #[must_use]
    pub fn has_data(&self) -> bool {
        self.data.as_ref().is_some_and(|data| !data.is_null())
    }
}

/// Turns response payloads into factory calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bridge {
    error_duration: DismissDelay,
    success_message: Option<String>,
}

impl Default for Bridge {
    fn default() -> Self {
        Self::from_config(&ToastConfig::default())
    }
}

impl Bridge {
    #[must_use]
    pub fn from_config(config: &ToastConfig) -> Self {
        Self {
            error_duration: DismissDelay::from_millis(config.error_duration_ms),
            success_message: None,
        }
    }

    /// Shows `message` as a success toast for error-free responses with data.
    #[must_use]
    pub fn with_success_message(mut self, message: impl Into<String>) -> Self {
        self.success_message = Some(message.into());
        self
    }

    /// Builds the toasts for a GraphQL response.
    #[must_use]
    pub fn graphql_toasts(&self, response: &GraphQlResponse) -> Vec<ToastOptions> {
        if response.errors.is_empty() {
            return match (&self.success_message, response.has_data()) {
                (Some(message), true) => vec![ToastOptions::success(message.clone())],
                _ => Vec::new(),
            };
        }

        response
            .errors
            .iter()
            .map(|error| {
                let message = if error.message.trim().is_empty() {
                    FALLBACK_ERROR_MESSAGE.to_string()
                } else {
                    error.message.clone()
                };
                ToastOptions {
                    duration: Some(self.error_duration),
                    ..ToastOptions::error(message)
                }
            })
            .collect()
    }

    /// Parses a GraphQL body and shows its toasts.
    pub fn notify_graphql(&self, surface: &mut Surface, body: &str, now: Instant) -> Vec<ToastId> {
        match GraphQlResponse::parse(body) {
            Ok(response) => show_all(surface, self.graphql_toasts(&response), now),
            Err(err) => {
                tracing::warn!(%err, "ignoring malformed GraphQL response");
                Vec::new()
            }
        }
    }

    /// Parses an `HX-Trigger` header and shows its toasts.
    pub fn notify_hx_trigger(&self, surface: &mut Surface, header: &str, now: Instant) -> Vec<ToastId> {
        match hx_trigger_toasts(header) {
            Ok(toasts) => show_all(surface, toasts, now),
            Err(err) => {
                tracing::warn!(%err, "ignoring malformed HX-Trigger header");
                Vec::new()
            }
        }
    }
}

/// Extracts the `showToast` entries of an `HX-Trigger` header.
///
/// A header that is a bare event name (not JSON) triggers no toast. A JSON
/// header without a `showToast` key yields an empty list.
pub fn hx_trigger_toasts(header: &str) -> Result<Vec<ToastOptions>> {
    let header = header.trim();
    if !header.starts_with('{') {
        tracing::debug!(header, "HX-Trigger without payload");
        return Ok(Vec::new());
    }

    let mut triggers: serde_json::Map<String, Value> = serde_json::from_str(header)?;
    let Some(payload) = triggers.remove(SHOW_TOAST_EVENT) else {
        return Ok(Vec::new());
    };

    match payload {
        Value::Array(entries) => entries.into_iter().map(toast_entry).collect(),
        entry => toast_entry(entry).map(|options| vec![options]),
    }
}

fn toast_entry(entry: Value) -> Result<ToastOptions> {
    match entry {
        Value::String(message) => Ok(ToastOptions::info(message)),
        Value::Object(_) => Ok(serde_json::from_value(entry)?),
        other => Err(Error::Payload(format!(
            "unsupported {SHOW_TOAST_EVENT} entry: {other}"
        ))),
    }
}

fn show_all(surface: &mut Surface, toasts: Vec<ToastOptions>, now: Instant) -> Vec<ToastId> {
    toasts
        .into_iter()
        .map(|options| surface.show_toast(options, now))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_ERROR_DURATION_MS;
    use crate::toast::Kind;

    #[test]
    fn one_error_toast_per_graphql_error() {
        let response = GraphQlResponse::parse(
            r#"{"data":null,"errors":[{"message":"Email taken"},{"message":"  "}]}"#,
        )
        .expect("valid response");
        let toasts = Bridge::default().graphql_toasts(&response);

        assert_eq!(toasts.len(), 2);
        assert!(toasts.iter().all(|t| t.kind == Kind::Error));
        assert_eq!(toasts[0].message, "Email taken");
        assert_eq!(toasts[1].message, FALLBACK_ERROR_MESSAGE);
        assert_eq!(
            toasts[0].duration,
            Some(DismissDelay::Millis(DEFAULT_ERROR_DURATION_MS))
        );
    }

    #[test]
    fn success_toast_only_when_configured() {
        let response = GraphQlResponse::parse(r#"{"data":{"saveUser":{"id":1}}}"#).expect("valid");
        assert!(Bridge::default().graphql_toasts(&response).is_empty());

        let toasts = Bridge::default()
            .with_success_message("Saved")
            .graphql_toasts(&response);
        assert_eq!(toasts, vec![ToastOptions::success("Saved")]);
    }

    #[test]
    fn null_data_is_not_success() {
        let response = GraphQlResponse::parse(r#"{"data":null}"#).expect("valid");
        let bridge = Bridge::default().with_success_message("Saved");
        assert!(bridge.graphql_toasts(&response).is_empty());
    }

    #[test]
    fn hx_trigger_single_and_list() {
        let single = hx_trigger_toasts(
            r#"{"showToast":{"message":"Deleted","type":"warning","duration":1500}}"#,
        )
        .expect("valid header");
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].kind, Kind::Warning);
        assert_eq!(single[0].duration, Some(DismissDelay::Millis(1500)));

        let list = hx_trigger_toasts(r#"{"showToast":["One",{"message":"Two"}],"other":1}"#)
            .expect("valid header");
        assert_eq!(list, vec![ToastOptions::info("One"), ToastOptions::info("Two")]);
    }

    #[test]
    fn hx_trigger_string_auto_hide_keeps_toast() {
        let mut surface = Surface::new();
        let now = Instant::now();
        let ids = Bridge::default().notify_hx_trigger(
            &mut surface,
            r#"{"showToast":{"message":"Pinned","autoHide":"false","duration":100}}"#,
            now,
        );
        assert_eq!(ids.len(), 1);

        surface.advance(now + std::time::Duration::from_secs(1));
        let toast = surface.get(ids[0]).expect("non-auto-hide toast stays attached");
        assert!(!toast.auto_hide());
        assert!(toast.is_visible());
        assert!(!surface.has_pending_work());
    }

    #[test]
    fn hx_trigger_without_toasts() {
        assert!(hx_trigger_toasts("itemDeleted").expect("plain").is_empty());
        assert!(hx_trigger_toasts(r#"{"itemDeleted":true}"#).expect("json").is_empty());
        assert!(hx_trigger_toasts(r#"{"showToast":42}"#).is_err());
        assert!(hx_trigger_toasts("{broken").is_err());
    }

    #[test]
    fn notify_fails_soft() {
        let mut surface = Surface::new();
        let bridge = Bridge::default();
        let now = Instant::now();

        assert!(bridge.notify_graphql(&mut surface, "not json", now).is_empty());
        assert!(bridge.notify_hx_trigger(&mut surface, "{broken", now).is_empty());
        assert!(surface.is_empty());

        let ids = bridge.notify_graphql(
            &mut surface,
            r#"{"errors":[{"message":"a"},{"message":"b"}]}"#,
            now,
        );
        assert_eq!(ids.len(), 2);
        assert_eq!(surface.visible_count(), 2);
    }
}
