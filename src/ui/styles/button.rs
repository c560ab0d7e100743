// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK},
    radius, shadow,
};
use iced::gradient::Linear;
use iced::widget::button;
use iced::{Background, Border, Color, Degrees, Theme};

/// Gold gradient fill shared by the refresh button's enabled states.
fn gold_gradient(alpha: f32) -> Background {
    let gradient = Linear::new(Degrees(135.0))
        .add_stop(0.0, Color { a: alpha, ..palette::GOLD })
        .add_stop(1.0, Color { a: alpha, ..palette::AMBER });
    Background::Gradient(gradient.into())
}

/// Refresh button: gold gradient, dark label, pill shaped.
///
/// While a refresh is running the button is disabled and rendered muted.
pub fn refresh(_theme: &Theme, status: button::Status) -> button::Style {
    let border = Border {
        radius: radius::PILL.into(),
        ..Border::default()
    };

    match status {
        button::Status::Active => button::Style {
            background: Some(gold_gradient(opacity::OPAQUE)),
            text_color: BLACK,
            border,
            shadow: shadow::BUTTON,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(gold_gradient(opacity::OPAQUE)),
            text_color: BLACK,
            border,
            shadow: iced::Shadow {
                blur_radius: shadow::BUTTON.blur_radius * 1.5,
                ..shadow::BUTTON
            },
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: Some(gold_gradient(opacity::PRESSED)),
            text_color: BLACK,
            border,
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(gold_gradient(opacity::MUTED)),
            text_color: Color {
                a: opacity::PRESSED,
                ..BLACK
            },
            border,
            shadow: shadow::NONE,
            snap: true,
        },
    }
}
