// SPDX-License-Identifier: MPL-2.0
use approx::assert_abs_diff_eq;
use iced_toasts::bridge::Bridge;
use iced_toasts::config::{self, Config};
use iced_toasts::coordinator::FixedHeight;
use iced_toasts::i18n::fluent::I18n;
use iced_toasts::options::ToastOptions;
use iced_toasts::surface::{Surface, ToastEvent};
use iced_toasts::toast::{DismissDelay, Kind, Toast};
use std::time::{Duration, Instant};
use tempfile::tempdir;

const HEIGHT: f32 = 50.0;

fn surface() -> Surface {
    Surface::new().with_measure(FixedHeight(HEIGHT))
}

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

#[test]
fn saved_toast_runs_full_lifecycle() {
    let mut surface = surface();
    let start = Instant::now();

    let id = surface.show_toast(
        ToastOptions::success("Saved").duration_ms(1000),
        start,
    );
    assert_eq!(surface.drain_events(), vec![ToastEvent::Shown(id)]);
    let toast = surface.get(id).expect("attached");
    assert!(toast.is_visible());
    assert!(toast.markers().contains("toast--success"));
    assert_eq!(toast.icon(), "check-circle");

    // Just before the duration nothing happens.
    surface.advance(start + ms(999));
    assert!(surface.get(id).is_some_and(Toast::is_visible));

    // Auto-hide at 1000ms starts the grace delay.
    surface.advance(start + ms(1000));
    let toast = surface.get(id).expect("still attached during grace");
    assert!(!toast.is_visible());
    assert!(surface.drain_events().is_empty());

    // Hidden and detached at 1300ms.
    surface.advance(start + ms(1300));
    assert_eq!(surface.drain_events(), vec![ToastEvent::Hidden(id)]);
    assert!(surface.get(id).is_none());
    assert_eq!(surface.next_deadline(), Some(start + ms(1500)));

    // The removal guard fires at 1500ms without effect.
    assert_eq!(surface.advance(start + ms(1500)), 1);
    assert!(!surface.has_pending_work());
    assert!(surface.drain_events().is_empty());
}

#[test]
fn late_tick_replays_cascade() {
    let mut surface = surface();
    let start = Instant::now();
    let id = surface.show_toast(ToastOptions::info("Late").duration_ms(1000), start);

    // One tick long after every deadline runs the whole chain.
    assert_eq!(surface.advance(start + ms(10_000)), 3);
    let events = surface.drain_events();
    assert_eq!(events, vec![ToastEvent::Shown(id), ToastEvent::Hidden(id)]);
    assert!(surface.is_empty());
}

#[test]
fn closing_first_toast_moves_second_to_base() {
    let mut surface = surface();
    let start = Instant::now();
    let base = surface.coordinator().base_offset();
    let gap = surface.coordinator().gap();

    let a = surface.show_toast(ToastOptions::info("A").auto_hide(false), start);
    let b = surface.show_toast(ToastOptions::info("B").auto_hide(false), start);

    // Newest nearest the anchor.
    assert_abs_diff_eq!(surface.get(b).and_then(Toast::offset).unwrap_or(-1.0), base);
    assert_abs_diff_eq!(
        surface.get(a).and_then(Toast::offset).unwrap_or(-1.0),
        base + HEIGHT + gap
    );

    // Closing the newest lets the older one drop to the base offset.
    surface.hide(b, start);
    surface.advance(start + ms(300));
    assert_abs_diff_eq!(surface.get(a).and_then(Toast::offset).unwrap_or(-1.0), base);
    assert_eq!(surface.placements().len(), 1);
}

#[test]
fn closing_older_toast_keeps_newest_at_base() {
    let mut surface = surface();
    let start = Instant::now();
    let base = surface.coordinator().base_offset();

    let a = surface.show_toast(ToastOptions::info("A"), start);
    let b = surface.show_toast(ToastOptions::info("B"), start);

    surface.hide(a, start);
    surface.advance(start + ms(300));

    assert!(surface.get(a).is_none());
    assert_abs_diff_eq!(surface.get(b).and_then(Toast::offset).unwrap_or(-1.0), base);
}

#[test]
fn unparseable_duration_arms_no_timer() {
    let mut surface = surface();
    let start = Instant::now();

    let toast = Toast::from_attributes([("message", "Sticky"), ("duration", "abc")]);
    assert_eq!(toast.duration(), DismissDelay::Invalid);
    let id = surface.attach(toast);
    assert!(surface.show(id, start));

    assert!(!surface.get(id).expect("attached").has_dismiss_timer());
    assert!(!surface.has_pending_work());
    surface.advance(start + Duration::from_secs(3600));
    assert!(surface.get(id).is_some_and(Toast::is_visible));
}

#[test]
fn zero_duration_arms_no_timer() {
    let mut surface = surface();
    let start = Instant::now();
    let id = surface.show_toast(ToastOptions::warning("Zero").duration_ms(0), start);
    assert!(!surface.has_pending_work());
    assert!(surface.get(id).is_some_and(Toast::is_visible));
}

#[test]
fn long_duration_is_honoured() {
    let mut surface = surface();
    let start = Instant::now();
    let id = surface.show_toast(ToastOptions::info("Long").duration_ms(7_200_000), start);

    surface.advance(start + Duration::from_secs(3600));
    assert!(surface.get(id).is_some_and(Toast::is_visible));
    assert_eq!(surface.next_deadline(), Some(start + Duration::from_secs(7200)));
}

#[test]
fn huge_duration_keeps_toast_visible() {
    let mut surface = surface();
    let start = Instant::now();
    let id = surface.show_toast(ToastOptions::info("Forever").duration_ms(u64::MAX), start);

    surface.advance(start + Duration::from_secs(365 * 24 * 3600));
    assert!(surface.get(id).is_some_and(Toast::is_visible));
}

#[test]
fn auto_hide_false_is_never_detached() {
    let mut surface = surface();
    let start = Instant::now();
    let id = surface.show_toast(ToastOptions::error("Pinned").auto_hide(false), start);

    // No auto-dismiss timer.
    surface.advance(start + Duration::from_secs(60));
    assert!(surface.get(id).is_some_and(Toast::is_visible));

    // A manual hide emits "hidden" but keeps the toast attached.
    assert!(surface.hide(id, start + Duration::from_secs(60)));
    surface.advance(start + Duration::from_secs(120));
    let events = surface.drain_events();
    assert_eq!(events.last(), Some(&ToastEvent::Hidden(id)));
    let toast = surface.get(id).expect("still attached");
    assert!(!toast.is_visible());
    assert_eq!(toast.offset(), None);
    assert!(!surface.has_pending_work());
}

#[test]
fn show_is_idempotent() {
    let mut surface = surface();
    let start = Instant::now();
    let id = surface.show_toast(ToastOptions::info("Once").duration_ms(1000), start);

    // A second show neither re-emits nor restarts the timer.
    assert!(!surface.show(id, start + ms(900)));
    assert_eq!(surface.drain_events(), vec![ToastEvent::Shown(id)]);
    assert_eq!(surface.next_deadline(), Some(start + ms(1000)));

    // Hide is idempotent as well.
    assert!(surface.hide(id, start + ms(950)));
    assert!(!surface.hide(id, start + ms(960)));
    assert_eq!(surface.next_deadline(), Some(start + ms(1250)));
}

#[test]
fn reshow_during_grace_still_completes_hide() {
    let mut surface = surface();
    let start = Instant::now();
    let id = surface.show_toast(ToastOptions::info("Race"), start);

    surface.hide(id, start + ms(100));
    assert!(surface.show(id, start + ms(200)));
    surface.advance(start + ms(400));

    let events = surface.drain_events();
    assert_eq!(
        events,
        vec![
            ToastEvent::Shown(id),
            ToastEvent::Shown(id),
            ToastEvent::Hidden(id)
        ]
    );
    assert!(surface.get(id).is_none());
}

#[test]
fn detached_toast_ignores_lifecycle_calls() {
    let mut surface = surface();
    let start = Instant::now();
    let id = surface.show_toast(ToastOptions::info("Gone"), start);
    assert!(surface.detach(id).is_some());

    assert!(surface.detach(id).is_none());
    assert!(!surface.show(id, start));
    assert!(!surface.hide(id, start));
    assert!(!surface.has_pending_work());
}

#[test]
fn set_attribute_switches_kind_markers() {
    let mut surface = surface();
    let start = Instant::now();
    let id = surface.show_toast(ToastOptions::success("Done"), start);

    assert!(surface.set_attribute(id, "type", "error"));
    let toast = surface.get(id).expect("attached");
    assert_eq!(toast.kind(), Kind::Error);
    assert!(toast.markers().contains("toast--error"));
    assert!(!toast.markers().contains("toast--success"));
    assert_eq!(toast.icon(), "x-circle");

    assert!(!surface.set_attribute(id, "color", "red"));
}

#[test]
fn graphql_errors_become_error_toasts() {
    let mut surface = surface();
    let start = Instant::now();
    let bridge = Bridge::default();

    let ids = bridge.notify_graphql(
        &mut surface,
        r#"{"errors":[{"message":"Nope"},{"message":"Still no"}]}"#,
        start,
    );
    assert_eq!(ids.len(), 2);
    for id in &ids {
        let toast = surface.get(*id).expect("attached");
        assert_eq!(toast.kind(), Kind::Error);
        assert_eq!(toast.duration(), DismissDelay::Millis(5000));
    }

    assert!(bridge.notify_graphql(&mut surface, "not json", start).is_empty());
    assert_eq!(surface.len(), 2);
}

#[test]
fn hx_trigger_header_shows_each_entry() {
    let mut surface = surface();
    let start = Instant::now();
    let ids = Bridge::default().notify_hx_trigger(
        &mut surface,
        r#"{"showToast":[{"message":"One","type":"success"},{"message":"Two","autoHide":false}]}"#,
        start,
    );
    assert_eq!(ids.len(), 2);
    assert_eq!(surface.visible_count(), 2);
    assert!(surface.get(ids[1]).is_some_and(|t| !t.auto_hide()));
}

#[test]
fn surface_follows_toast_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.toasts.default_duration_ms = 1200;
    config.toasts.grace_delay_ms = 100;
    config::save_to_path(&config, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let mut surface = Surface::with_config(&loaded.toasts);
    let start = Instant::now();
    let id = surface.show_toast(ToastOptions::info("Configured"), start);

    assert_eq!(surface.next_deadline(), Some(start + ms(1200)));
    surface.advance(start + ms(1300));
    assert!(surface.get(id).is_none());
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.general.language = Some("en-US".to_string());
    config::save_to_path(&config, &path).expect("Failed to write initial config file");
    let loaded = config::load_from_path(&path).expect("Failed to load initial config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    config.general.language = Some("fr".to_string());
    config::save_to_path(&config, &path).expect("Failed to write french config file");
    let loaded = config::load_from_path(&path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
}
