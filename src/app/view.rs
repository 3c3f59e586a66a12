// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.
//!
//! The form sits in a centered panel; the toast overlay is stacked above it.

use super::{Form, Message};
use crate::i18n::fluent::I18n;
use crate::surface::{Surface, ToastEvent};
use crate::toast::Kind;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications;
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, checkbox, text, text_input, Column, Container, Row, Stack};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub form: &'a Form,
    pub surface: &'a Surface,
    pub theme_mode: ThemeMode,
    pub events: &'a [ToastEvent],
}

/// Renders the demo form with the toast overlay on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = Container::new(view_panel(&ctx))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::LG);

    let overlay = notifications::view_overlay(ctx.surface).map(Message::Toast);

    Stack::new()
        .push(content)
        .push(overlay)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_panel<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let title = text(i18n.tr("app-title")).size(typography::TITLE_MD);

    let message_input = text_input(
        &i18n.tr("demo-message-placeholder"),
        &ctx.form.message,
    )
    .on_input(Message::MessageChanged)
    .padding(spacing::XS);

    let duration_input = text_input(
        &i18n.tr("demo-duration-placeholder"),
        &ctx.form.duration,
    )
    .on_input(Message::DurationChanged)
    .padding(spacing::XS);

    let auto_hide = checkbox(ctx.form.auto_hide)
        .label(i18n.tr("demo-auto-hide-label"))
        .on_toggle(Message::AutoHideToggled);

    let kind_buttons = Kind::ALL.iter().fold(
        Row::new().spacing(spacing::XS),
        |row, &kind| {
            row.push(
                button(text(i18n.tr(kind_label_key(kind))).size(typography::BODY))
                    .padding(spacing::XS)
                    .style(styles::button_kind(kind))
                    .on_press(Message::Show(kind)),
            )
        },
    );

    let actions = Row::new()
        .spacing(spacing::XS)
        .push(
            button(text(i18n.tr("demo-simulate-response")).size(typography::BODY))
                .padding(spacing::XS)
                .style(styles::button_primary)
                .on_press(Message::SimulateResponse),
        )
        .push(
            button(text(i18n.tr("demo-clear-all")).size(typography::BODY))
                .padding(spacing::XS)
                .style(styles::button_primary)
                .on_press_maybe((ctx.surface.visible_count() > 0).then_some(Message::ClearAll)),
        )
        .push(
            button(
                text(i18n.tr_with_args(
                    "demo-theme-toggle",
                    &[("mode", &i18n.tr(theme_label_key(ctx.theme_mode)))],
                ))
                .size(typography::BODY),
            )
            .padding(spacing::XS)
            .style(styles::button_primary)
            .on_press(Message::CycleTheme),
        );

    let pending = text(i18n.tr_with_args(
        "demo-pending-toasts",
        &[("count", &ctx.surface.len().to_string())],
    ))
    .size(typography::CAPTION);

    let events = ctx.events.iter().rev().fold(
        Column::new()
            .spacing(spacing::XXS)
            .push(text(i18n.tr("demo-event-log-title")).size(typography::BODY)),
        |column, event| {
            column.push(
                text(i18n.tr_with_args(
                    "demo-event-line",
                    &[("event", event.name()), ("id", &event.toast().to_string())],
                ))
                .size(typography::CAPTION),
            )
        },
    );

    let form = Column::new()
        .spacing(spacing::SM)
        .push(title)
        .push(labelled(i18n.tr("demo-message-label"), message_input.into()))
        .push(labelled(i18n.tr("demo-duration-label"), duration_input.into()))
        .push(auto_hide)
        .push(text(i18n.tr("demo-show-heading")).size(typography::BODY))
        .push(kind_buttons)
        .push(actions)
        .push(pending)
        .push(events);

    Container::new(form)
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .padding(spacing::MD)
        .style(styles::container::panel)
        .into()
}

fn labelled<'a>(label: String, input: Element<'a, Message>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(text(label).size(typography::CAPTION))
        .push(input)
        .into()
}

fn kind_label_key(kind: Kind) -> &'static str {
    match kind {
        Kind::Success => "kind-success",
        Kind::Error => "kind-error",
        Kind::Info => "kind-info",
        Kind::Warning => "kind-warning",
    }
}

fn theme_label_key(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "theme-light",
        ThemeMode::Dark => "theme-dark",
        ThemeMode::System => "theme-system",
    }
}
