// SPDX-License-Identifier: MPL-2.0
//! Demo application: a small form driving the toast surface.
//!
//! The `App` struct wires together the surface, the response bridge,
//! localization and the persisted theme mode, and translates messages into
//! surface operations. Timers run from a tick subscription that only exists
//! while the surface has pending work.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};
pub use subscription::TICK_INTERVAL;

use crate::bridge::Bridge;
use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::options::ToastOptions;
use crate::surface::{Surface, ToastEvent};
use crate::toast::{DismissDelay, Kind};
use crate::ui::notifications;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 560;

/// Number of lifecycle events kept for the event log.
const EVENT_LOG_CAPACITY: usize = 8;

/// Canned server responses cycled by "simulate response".
const SAMPLE_RESPONSES: [SampleResponse; 3] = [
    SampleResponse::GraphQl(
        r#"{"data":null,"errors":[{"message":"Email is already taken"},{"message":"Password is too short"}]}"#,
    ),
    SampleResponse::GraphQl(r#"{"data":{"updateProfile":{"id":"42"}},"errors":[]}"#),
    SampleResponse::HxTrigger(
        r#"{"showToast":[{"message":"Draft saved","type":"info","duration":2000},{"message":"Quota at 90%","type":"warning","autoHide":false}]}"#,
    ),
];

#[derive(Debug, Clone, Copy)]
enum SampleResponse {
    GraphQl(&'static str),
    HxTrigger(&'static str),
}

/// Values of the demo form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    pub message: String,
    /// Raw duration text, parsed with the declarative duration rules.
    pub duration: String,
    pub auto_hide: bool,
}

impl Default for Form {
    fn default() -> Self {
        Self {
            message: String::new(),
            duration: String::new(),
            auto_hide: true,
        }
    }
}

impl Form {
    /// Builds factory options for a toast of `kind`.
    ///
    /// An empty duration field uses the surface default.
    #[must_use]
    pub fn options(&self, kind: Kind) -> ToastOptions {
        let duration = self.duration.trim();
        ToastOptions {
            duration: (!duration.is_empty()).then(|| DismissDelay::from_attribute(duration)),
            auto_hide: self.auto_hide,
            ..ToastOptions::new(kind, self.message.clone())
        }
    }
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    surface: Surface,
    bridge: Bridge,
    form: Form,
    events: Vec<ToastEvent>,
    next_sample: usize,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("toasts", &self.surface.len())
            .field("form", &self.form)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from the configuration and CLI flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let mut app = Self::with_config(flags, config);

        if let Some(warning) = config_warning {
            tracing::warn!(%warning, "configuration fell back to defaults");
            app.surface
                .show_toast(ToastOptions::warning(warning), Instant::now());
            app.record_events();
        }

        (app, Task::none())
    }

    fn with_config(flags: Flags, config: Config) -> Self {
        let i18n = I18n::new(flags.lang, &config);
        let bridge = Bridge::from_config(&config.toasts).with_success_message(i18n.tr("toast-saved"));

        Self {
            surface: Surface::with_config(&config.toasts),
            bridge,
            i18n,
            config,
            form: Form::default(),
            events: Vec::with_capacity(EVENT_LOG_CAPACITY),
            next_sample: 0,
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        self.config.general.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.surface.has_pending_work())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::MessageChanged(value) => self.form.message = value,
            Message::DurationChanged(value) => self.form.duration = value,
            Message::AutoHideToggled(value) => self.form.auto_hide = value,
            Message::Show(kind) => {
                self.surface
                    .show_toast(self.form.options(kind), Instant::now());
            }
            Message::SimulateResponse => self.simulate_response(Instant::now()),
            Message::ClearAll => self.surface.hide_all(Instant::now()),
            Message::CycleTheme => {
                self.config.general.theme_mode = self.config.general.theme_mode.next();
                if let Err(err) = config::save(&self.config) {
                    tracing::warn!(%err, "failed to persist theme mode");
                }
            }
            Message::Toast(notifications::Message::Dismiss(id)) => {
                self.surface.hide(id, Instant::now());
            }
            Message::Tick(now) => {
                self.surface.advance(now);
            }
        }

        self.record_events();
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            form: &self.form,
            surface: &self.surface,
            theme_mode: self.config.general.theme_mode,
            events: &self.events,
        })
    }

    fn simulate_response(&mut self, now: Instant) {
        let sample = SAMPLE_RESPONSES[self.next_sample % SAMPLE_RESPONSES.len()];
        self.next_sample = self.next_sample.wrapping_add(1);

        let shown = match sample {
            SampleResponse::GraphQl(body) => self.bridge.notify_graphql(&mut self.surface, body, now),
            SampleResponse::HxTrigger(header) => {
                self.bridge.notify_hx_trigger(&mut self.surface, header, now)
            }
        };
        tracing::debug!(count = shown.len(), ?sample, "simulated response");
    }

    /// Moves surface events into the bounded event log.
    fn record_events(&mut self) {
        self.events.extend(self.surface.drain_events());
        let overflow = self.events.len().saturating_sub(EVENT_LOG_CAPACITY);
        self.events.drain(..overflow);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn app() -> App {
        App::with_config(
            Flags {
                lang: Some("en-US".to_string()),
                config_dir: None,
            },
            Config::default(),
        )
    }

    #[test]
    fn form_duration_uses_declarative_parsing() {
        let form = Form {
            message: "Saved".into(),
            duration: "1500ms".into(),
            auto_hide: true,
        };
        assert_eq!(
            form.options(Kind::Success).duration,
            Some(DismissDelay::Millis(1500))
        );

        let form = Form {
            duration: "abc".into(),
            ..form
        };
        assert_eq!(form.options(Kind::Success).duration, Some(DismissDelay::Invalid));
    }

    #[test]
    fn empty_duration_uses_surface_default() {
        let form = Form::default();
        assert_eq!(form.options(Kind::Info).duration, None);
    }

    #[test]
    fn show_message_adds_toast_and_logs_shown() {
        let mut app = app();
        let _ = app.update(Message::MessageChanged("Hello".into()));
        let _ = app.update(Message::Show(Kind::Warning));

        assert_eq!(app.surface.len(), 1);
        assert_eq!(app.events.len(), 1);
        assert!(matches!(app.events[0], ToastEvent::Shown(_)));
        assert!(app.surface.has_pending_work());
    }

    #[test]
    fn dismiss_then_tick_removes_toast() {
        let mut app = app();
        let _ = app.update(Message::Show(Kind::Info));
        let id = app.surface.iter().next().map(|t| t.id()).expect("toast");

        let _ = app.update(Message::Toast(notifications::Message::Dismiss(id)));
        let _ = app.update(Message::Tick(Instant::now() + Duration::from_secs(1)));

        assert!(app.surface.is_empty());
        assert!(app
            .events
            .iter()
            .any(|event| *event == ToastEvent::Hidden(id)));
    }

    #[test]
    fn simulate_response_cycles_samples() {
        let mut app = app();
        let _ = app.update(Message::SimulateResponse);
        assert_eq!(app.surface.len(), 2, "two GraphQL errors");

        let _ = app.update(Message::SimulateResponse);
        assert_eq!(app.surface.len(), 3, "one success toast");
        assert!(app
            .surface
            .iter()
            .any(|toast| toast.message() == "Saved" && toast.kind() == Kind::Success));

        let _ = app.update(Message::SimulateResponse);
        assert_eq!(app.surface.len(), 5, "two HX-Trigger toasts");
    }

    #[test]
    fn event_log_is_bounded() {
        let mut app = app();
        for _ in 0..(EVENT_LOG_CAPACITY + 4) {
            let _ = app.update(Message::Show(Kind::Success));
        }
        assert_eq!(app.events.len(), EVENT_LOG_CAPACITY);
    }

    #[test]
    fn idle_app_has_no_tick() {
        let app = app();
        assert!(!app.surface.has_pending_work());
    }
}
