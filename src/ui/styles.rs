// SPDX-License-Identifier: MPL-2.0
//! Shared widget styles, derived from the active theme palette so they hold
//! up in both light and dark modes.

use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

/// Opacity of the modal backdrop when fully faded in.
pub const BACKDROP_OPACITY: f32 = 0.85;

/// Full-window dim behind the modal. `fade` runs 0..=1 during the opening
/// transition.
pub fn backdrop(fade: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: BACKDROP_OPACITY * fade.clamp(0.0, 1.0),
            ..Color::BLACK
        })),
        ..Default::default()
    }
}

/// Border drawn around the image content while it holds keyboard focus.
pub fn content_focus_frame(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        border: Border {
            color: palette.primary.strong.color,
            width: 2.0,
            ..Default::default()
        },
        ..Default::default()
    }
}

pub fn caption(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        text_color: Some(palette.background.base.text),
        ..Default::default()
    }
}

/// Close and zoom-toolbar buttons floating over the backdrop.
pub fn overlay_button(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Color::from_rgba(1.0, 1.0, 1.0, 0.2),
        _ => Color::from_rgba(1.0, 1.0, 1.0, 0.08),
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette.background.base.text,
        border: Border {
            radius: 6.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Variant of [`overlay_button`] showing the focus-ring highlight.
pub fn overlay_button_focused(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let mut style = overlay_button(theme, status);
    style.border = Border {
        color: palette.primary.strong.color,
        width: 2.0,
        radius: 6.0.into(),
    };
    style
}

/// Grid cell around each thumbnail.
pub fn thumbnail(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette.background.strong.color,
        _ => palette.background.weak.color,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette.background.base.text,
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Grid cell that regained focus after the modal closed.
pub fn thumbnail_focused(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let mut style = thumbnail(theme, status);
    style.border = Border {
        color: palette.primary.strong.color,
        width: 2.0,
        radius: 8.0.into(),
    };
    style
}
