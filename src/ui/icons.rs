// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for the toast icons.
//!
//! Icons are small stroke-based SVG documents embedded as string constants.
//! Handles are cached using `OnceLock`, so each document is parsed once.
//!
//! Toasts refer to their icon by name (see [`Kind::icon_name`]); use
//! [`by_name`] to resolve it.
//!
//! [`Kind::icon_name`]: crate::toast::Kind::icon_name

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length};
use std::sync::OnceLock;

/// Wraps the path data of a 24x24 stroke icon into an SVG document.
macro_rules! svg_document {
    ($body:literal) => {
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" "#,
            r#"fill="none" stroke="black" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
            $body,
            "</svg>"
        )
    };
}

/// Defines an icon function with a cached handle.
macro_rules! define_icon {
    ($name:ident, $body:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            const DATA: &str = svg_document!($body);
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA.as_bytes()));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(
    check_circle,
    r#"<circle cx="12" cy="12" r="10"/><path d="M8 12l3 3 5-6"/>"#,
    "Circled check mark (success)."
);
define_icon!(
    x_circle,
    r#"<circle cx="12" cy="12" r="10"/><path d="M15 9l-6 6M9 9l6 6"/>"#,
    "Circled cross (error)."
);
define_icon!(
    info,
    r#"<circle cx="12" cy="12" r="10"/><path d="M12 16v-4M12 8h.01"/>"#,
    "Circled letter i (info)."
);
define_icon!(
    alert_triangle,
    r#"<path d="M10.3 3.9L1.8 18a2 2 0 0 0 1.7 3h17a2 2 0 0 0 1.7-3L13.7 3.9a2 2 0 0 0-3.4 0z"/><path d="M12 9v4M12 17h.01"/>"#,
    "Warning triangle (warning)."
);
define_icon!(cross, r#"<path d="M18 6L6 18M6 6l12 12"/>"#, "Plain cross (dismiss).");

/// Resolves an icon by name.
///
/// Returns `None` for unknown names; callers render no icon in that case.
#[must_use]
pub fn by_name(name: &str) -> Option<Svg<'static>> {
    let icon = match name {
        "check-circle" => check_circle(),
        "x-circle" => x_circle(),
        "info" => info(),
        "alert-triangle" => alert_triangle(),
        "x" => cross(),
        _ => return None,
    };
    Some(icon)
}

/// Sizes an icon to a square of `size` pixels.
#[must_use]
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Tints an icon with a single color.
#[must_use]
pub fn tinted(icon: Svg<'static>, color: Color) -> Svg<'static> {
    icon.style(move |_theme, _status| svg::Style { color: Some(color) })
}
