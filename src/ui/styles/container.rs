// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::domain::animation::Opacity;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing};
use iced::gradient::Linear;
use iced::widget::container;
use iced::{Background, Border, Color, Degrees, Theme};

/// Full-window backdrop.
pub fn screen(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_950)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// The membership card: dark diagonal gradient, thin border, gold glow.
pub fn card(_theme: &Theme) -> container::Style {
    let gradient = Linear::new(Degrees(135.0))
        .add_stop(0.0, palette::GRAY_900)
        .add_stop(1.0, palette::GRAY_800);

    container::Style {
        background: Some(Background::Gradient(gradient.into())),
        border: Border {
            color: palette::GRAY_700,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::CARD,
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Gold pill carrying the tier name.
pub fn tier_badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GOLD)),
        text_color: Some(palette::BLACK),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Gold square behind the logo mark.
pub fn logo(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GOLD)),
        text_color: Some(palette::BLACK),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Round avatar showing the member's initials.
pub fn avatar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_700)),
        text_color: Some(palette::GOLD),
        border: Border {
            color: palette::GOLD,
            width: border::WIDTH_MD,
            radius: (sizing::AVATAR / 2.0).into(),
        },
        ..Default::default()
    }
}

/// White backing plate of the access code.
///
/// Follows the code's opacity so the plate fades together with the modules.
pub fn code_plate(alpha: Opacity) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let a = alpha.value();
        container::Style {
            background: Some(Background::Color(Color {
                a,
                ..palette::WHITE
            })),
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            shadow: iced::Shadow {
                color: Color {
                    a: shadow::PLATE.color.a * a,
                    ..shadow::PLATE.color
                },
                ..shadow::PLATE
            },
            ..Default::default()
        }
    }
}

/// Gold gradient security chip in the card corner.
pub fn security_chip(_theme: &Theme) -> container::Style {
    let gradient = Linear::new(Degrees(135.0))
        .add_stop(0.0, palette::GOLD)
        .add_stop(1.0, palette::AMBER);

    container::Style {
        background: Some(Background::Gradient(gradient.into())),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Dim inset inside the security chip.
pub fn security_chip_core(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SHADOW,
            ..palette::BLACK
        })),
        border: Border {
            radius: radius::XS.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
