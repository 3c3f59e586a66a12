// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual toasts and the stacked overlay.
//!
//! Each toast renders as a small card with a kind-colored accent, the kind's
//! icon, a message slot and a dismiss control. The overlay places every
//! stacked toast at the offset assigned by the coordinator, measured from
//! the bottom-right corner.

use crate::surface::Surface;
use crate::toast::{Toast, ToastId};
use crate::ui::design_tokens::{border, opacity, radius, shadow, sizing, spacing, typography};
use crate::ui::{icons, theming};
use iced::widget::{button, container, Container, Row, Stack, Text};
use iced::{alignment, Color, Element, Length, Padding, Theme};

/// Messages produced by the toast widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The dismiss control of a toast was pressed.
    Dismiss(ToastId),
}

/// Renders a single toast card.
///
/// A toast still running its hide grace delay is drawn faded.
pub fn view(toast: &Toast) -> Element<'_, Message> {
    let accent = toast.kind().color();
    let leaving = !toast.is_visible();

    let mut content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center);

    if let Some(icon) = icons::by_name(toast.icon()) {
        let icon = icons::tinted(icons::sized(icon, sizing::ICON_MD), accent);
        content = content.push(Container::new(Element::from(icon)).padding(spacing::XXS));
    }

    let message = Text::new(toast.message())
        .size(typography::BODY)
        .style(move |theme: &Theme| iced::widget::text::Style {
            color: Some(fade(theme.palette().text, leaving)),
        });

    let dismiss = button(Element::from(icons::sized(icons::cross(), sizing::ICON_SM)))
        .on_press(Message::Dismiss(toast.id()))
        .padding(spacing::XXS)
        .style(dismiss_button_style);

    content = content
        .push(
            Container::new(message)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        )
        .push(dismiss);

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| toast_container_style(theme, accent, leaving))
        .into()
}

/// Renders every stacked toast of `surface` as bottom-right layers.
///
/// Toasts without an assigned offset are not drawn.
pub fn view_overlay(surface: &Surface) -> Element<'_, Message> {
    let side = surface.coordinator().base_offset();

    let layers: Vec<Element<'_, Message>> = surface
        .iter()
        .filter_map(|toast| toast.offset().map(|offset| (toast, offset)))
        .map(|(toast, offset)| {
            Container::new(view(toast))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Bottom)
                .padding(Padding {
                    top: 0.0,
                    right: side,
                    bottom: offset,
                    left: 0.0,
                })
                .into()
        })
        .collect();

    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn fade(color: Color, leaving: bool) -> Color {
    if leaving {
        Color {
            a: color.a * opacity::OVERLAY_MEDIUM,
            ..color
        }
    } else {
        color
    }
}

/// Style function for the toast card.
fn toast_container_style(theme: &Theme, accent: Color, leaving: bool) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(fade(
            theming::toast_background(theme),
            leaving,
        ))),
        border: iced::Border {
            color: fade(accent, leaving),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: if leaving { shadow::NONE } else { shadow::MD },
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the dismiss control.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = theme.extended_palette().background.base.text;
    let hover = |pressed: bool| button::Style {
        background: Some(iced::Background::Color(theming::dismiss_hover(pressed))),
        text_color,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    };

    match status {
        button::Status::Hovered => hover(false),
        button::Status::Pressed => hover(true),
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::palette;

    #[test]
    fn toast_container_style_uses_accent_color() {
        let style = toast_container_style(&Theme::Dark, palette::SUCCESS_500, false);
        assert_eq!(style.border.color, palette::SUCCESS_500);
        assert!(style.background.is_some());
    }

    #[test]
    fn leaving_toast_is_faded() {
        let style = toast_container_style(&Theme::Dark, palette::ERROR_500, true);
        assert!(style.border.color.a < palette::ERROR_500.a);
    }

    #[test]
    fn dismiss_button_is_transparent_until_hovered() {
        let idle = dismiss_button_style(&Theme::Light, button::Status::Active);
        let hovered = dismiss_button_style(&Theme::Light, button::Status::Hovered);
        assert!(idle.background.is_none());
        assert!(hovered.background.is_some());
    }

    #[test]
    fn overlay_builds_for_stacked_toasts() {
        let mut surface = Surface::new();
        let now = std::time::Instant::now();
        surface.show_toast(crate::options::ToastOptions::success("Saved"), now);
        surface.show_toast(crate::options::ToastOptions::error("Failed"), now);
        let _ = view_overlay(&surface);
    }
}
