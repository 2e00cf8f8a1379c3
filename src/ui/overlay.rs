// SPDX-License-Identifier: MPL-2.0
//! The modal viewer overlay: backdrop, close control, the image surface,
//! caption, and zoom toolbar.
//!
//! The image is rendered at its scaled size inside a scrollable with hidden
//! scrollbars; the scrollable's offset realizes the pan and is driven
//! programmatically from the viewer state. Wheel and touch input is
//! shielded from the scrollable so the gesture interpreter owns it.

use crate::i18n::I18n;
use crate::lightbox::focus::FocusTarget;
use crate::lightbox::{self, Message, SCROLLABLE_ID, TOOLBAR_HEIGHT, TOP_BAR_HEIGHT};
use crate::ui::styles;
use crate::ui::widgets::gesture_shield;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{button, container, responsive, row, text, Column, Container, Scrollable};
use iced::{Alignment, Element, Length, Padding, Size};

pub struct OverlayContext<'a> {
    pub state: &'a lightbox::State,
    pub i18n: &'a I18n,
    /// Opening fade progress, 0..=1. Held at 1 when reduced motion is on.
    pub fade: f32,
}

pub fn view<'a>(ctx: OverlayContext<'a>) -> Element<'a, Message> {
    let fade = ctx.fade;
    responsive(move |available: Size| {
        let surface = image_surface(&ctx, available);

        let content = Column::new()
            .push(top_bar(&ctx))
            .push(surface)
            .push(bottom_bar(&ctx))
            .width(Length::Fill)
            .height(Length::Fill);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme| styles::backdrop(fade))
            .into()
    })
    .into()
}

fn top_bar<'a>(ctx: &OverlayContext<'a>) -> Element<'a, Message> {
    let close_style = if ctx.state.focus_target() == FocusTarget::Close {
        styles::overlay_button_focused
    } else {
        styles::overlay_button
    };
    let close = button(text("✕").size(20))
        .style(close_style)
        .padding(Padding::new(8.0))
        .on_press(Message::Close);

    let caption: Element<'a, Message> = match ctx.state.caption() {
        Some(caption) => container(text(caption.to_string()).size(16))
            .style(styles::caption)
            .into(),
        None => row![].into(),
    };

    // Fixed height so the state can treat this strip as modal chrome
    row![container(caption).width(Length::Fill), close]
        .height(Length::Fixed(TOP_BAR_HEIGHT))
        .padding(12)
        .align_y(Alignment::Center)
        .into()
}

fn image_surface<'a>(ctx: &OverlayContext<'a>, available: Size) -> Element<'a, Message> {
    let state = ctx.state;

    let inner: Element<'a, Message> = match state.image() {
        Some(image_data) => {
            let base = state.base_size();
            let scale = state.scale().get();
            let scaled = Size::new(base.width * scale, base.height * scale);
            let padding = centering_padding(scaled, available);

            let picture = iced::widget::image(image_data.handle.clone())
                .width(Length::Fixed(scaled.width))
                .height(Length::Fixed(scaled.height));

            let centered = Container::new(picture).padding(padding);
            let pannable = Scrollable::new(centered)
                .id(iced::widget::Id::new(SCROLLABLE_ID))
                .width(Length::Fill)
                .height(Length::Fill)
                .direction(Direction::Both {
                    vertical: Scrollbar::hidden(),
                    horizontal: Scrollbar::hidden(),
                });
            gesture_shield(pannable).into()
        }
        None if state.is_loading() => container(text(ctx.i18n.tr("viewer-loading")).size(16))
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into(),
        None => container(text(ctx.i18n.tr("viewer-load-failed")).size(16))
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into(),
    };

    let frame = if state.focus_target() == FocusTarget::Content {
        Container::new(inner).style(styles::content_focus_frame)
    } else {
        Container::new(inner)
    };

    frame.width(Length::Fill).height(Length::Fill).into()
}

/// Pads the scaled image so it sits centered while it still fits; once it
/// overflows, the scrollable's offset takes over.
fn centering_padding(content: Size, available: Size) -> Padding {
    let horizontal = ((available.width - content.width) / 2.0).max(0.0);
    let vertical = ((available.height - content.height) / 2.0).max(0.0);
    Padding {
        top: vertical,
        right: horizontal,
        bottom: vertical,
        left: horizontal,
    }
}

fn bottom_bar<'a>(ctx: &OverlayContext<'a>) -> Element<'a, Message> {
    if !ctx.state.shows_toolbar() {
        return row![].into();
    }

    let toolbar_button = |label: String, message: Message| {
        button(text(label).size(16))
            .style(styles::overlay_button)
            .padding(Padding::new(8.0))
            .on_press(message)
    };

    let percent = text(format!("{}%", ctx.state.scale().as_percent())).size(16);

    container(
        row![
            toolbar_button("−".to_string(), Message::ZoomOut),
            percent,
            toolbar_button("+".to_string(), Message::ZoomIn),
            toolbar_button(ctx.i18n.tr("btn-zoom-reset"), Message::ResetZoom),
        ]
        .spacing(12)
        .align_y(Alignment::Center),
    )
    .height(Length::Fixed(TOOLBAR_HEIGHT))
    .center_x(Length::Fill)
    .padding(16)
    .into()
}
