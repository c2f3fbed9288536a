// SPDX-License-Identifier: MPL-2.0
//! Toast rendering.
//!
//! Templated construction of the visual tree for one toast and for the
//! area's stack. Everything here reads the retained element state; nothing
//! here mutates it. The stack is offset by the area's computed
//! [`Placement`](super::layout::Placement) — the positioning logic itself
//! lives in [`super::layout`].

use iced::widget::{button, container, progress_bar, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Padding, Theme};

use super::area::NotificationArea;
use super::notification::{Kind, Notification, NotificationId};
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};

/// Messages produced by toast interaction.
#[derive(Debug, Clone)]
pub enum Message {
    /// The close button of a toast was pressed.
    Close(NotificationId),
}

/// Accent color of a notification kind.
#[must_use]
pub fn kind_color(kind: Kind) -> Color {
    match kind {
        Kind::Info => palette::INFO_500,
        Kind::Warning => palette::WARNING_500,
        Kind::Success => palette::SUCCESS_500,
        Kind::Progress => palette::PRIMARY_500,
    }
}

/// Indicator glyph of a notification kind.
fn kind_glyph(kind: Kind) -> &'static str {
    match kind {
        Kind::Info => "\u{2139}",     // ℹ
        Kind::Warning => "\u{26A0}",  // ⚠
        Kind::Success => "\u{2713}",  // ✓
        Kind::Progress => "\u{22EF}", // ⋯
    }
}

/// Renders a single toast card.
pub fn view(notification: &Notification) -> Element<'_, Message> {
    let element = notification.element();
    let accent = kind_color(notification.kind());

    let glyph = Text::new(kind_glyph(notification.kind()))
        .size(typography::BODY_LG)
        .style(move |_theme: &Theme| text::Style {
            color: Some(accent),
        });

    let message = Text::new(element.message())
        .size(typography::BODY)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.palette().text),
        });

    // The indicator renders immediately before the message.
    let mut body = Column::new().spacing(spacing::XXS);
    if let Some(indicator) = element.progress_indicator() {
        body = body.push(
            progress_bar(0.0..=100.0, indicator.width_percent)
                .girth(sizing::PROGRESS_TRACK),
        );
    }
    body = body.push(message);

    let close = button(Text::new("\u{2715}").size(typography::BODY_SM))
        .on_press(Message::Close(notification.id()))
        .padding(spacing::XXS)
        .style(close_button_style);

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(glyph).padding(spacing::XXS))
        .push(
            Container::new(body)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        )
        .push(close);

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| card_style(theme, accent))
        .into()
}

/// Renders the whole stack at the area's computed placement.
pub fn view_area(area: &NotificationArea) -> Element<'_, Message> {
    let toasts: Vec<Element<'_, Message>> =
        area.visible_notifications().map(view).collect();

    if toasts.is_empty() || !area.element().is_attached() {
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    let stack = Column::with_children(toasts).spacing(spacing::XS);

    // Padding cannot be negative, so an off-screen placement degrades to
    // the nearest edge here.
    let (top, left) = area
        .element()
        .placement()
        .map_or((0.0, 0.0), |placement| {
            (placement.top.max(0.0), placement.left.max(0.0))
        });

    Container::new(stack)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Left)
        .align_y(alignment::Vertical::Top)
        .padding(Padding {
            top,
            left,
            right: 0.0,
            bottom: 0.0,
        })
        .into()
}

fn card_style(theme: &Theme, accent: Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(
            theme.extended_palette().background.base.color,
        )),
        border: iced::Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

fn close_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = theme.extended_palette().background.base.text;
    let background = match status {
        button::Status::Active | button::Status::Disabled => None,
        button::Status::Hovered => Some(iced::Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GRAY_400
        })),
        button::Status::Pressed => Some(iced::Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::GRAY_400
        })),
    };

    button::Style {
        background,
        text_color,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
