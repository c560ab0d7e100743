// SPDX-License-Identifier: MPL-2.0
//! Scannable rendering of the current access token.
//!
//! The token string is encoded into QR modules once per swap; every frame in
//! between only restyles the cached modules with the current opacity.

use crate::domain::access::AccessToken;
use crate::domain::animation::Opacity;
use crate::error::{Error, Result};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles::container as container_styles;
use iced::widget::{container, qr_code, text, Container, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Encoded access code, ready to draw.
pub struct AccessCode {
    value: String,
    data: Result<qr_code::Data>,
}

impl AccessCode {
    /// Encodes `token` into QR modules.
    ///
    /// An encoding failure is kept and rendered as a readable fallback
    /// instead of aborting the view.
    #[must_use]
    pub fn encode(token: &AccessToken) -> Self {
        let value = token.as_str().to_owned();
        let data = qr_code::Data::new(value.as_bytes()).map_err(Error::from);
        if let Err(err) = &data {
            tracing::error!(token = %value, %err, "failed to encode access code");
        }
        Self { value, data }
    }

    /// Token string this code was encoded from.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn is_encoded(&self) -> bool {
        self.data.is_ok()
    }

    /// Renders the code on its white plate at `alpha`.
    pub fn view<'a, Message: 'a>(&'a self, alpha: Opacity, i18n: &I18n) -> Element<'a, Message> {
        let a = alpha.value();

        let content: Element<'a, Message> = match &self.data {
            Ok(data) => qr_code(data)
                .cell_size(sizing::QR_CELL)
                .style(move |_theme: &Theme| qr_code::Style {
                    cell: Color {
                        a,
                        ..palette::BLACK
                    },
                    background: Color {
                        a,
                        ..palette::WHITE
                    },
                })
                .into(),
            Err(err) => Text::new(i18n.tr(err.i18n_key()))
                .size(typography::CAPTION)
                .color(Color {
                    a: a * opacity::MUTED,
                    ..palette::BLACK
                })
                .align_x(alignment::Horizontal::Center)
                .width(Length::Fixed(sizing::INFO_MAX_WIDTH))
                .into(),
        };

        Container::new(content)
            .padding(spacing::MD)
            .style(container_styles::code_plate(alpha))
            .into()
    }
}

impl std::fmt::Debug for AccessCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessCode")
            .field("value", &self.value)
            .field("encoded", &self.data.is_ok())
            .finish()
    }
}

const HINT_COLOR: Color = palette::GRAY_400;

/// Caption under the code. Only the plate fades; the caption stays opaque.
pub fn hint<'a, Message: 'a>(label: String) -> Element<'a, Message> {
    container(
        text(label)
            .size(typography::CAPTION_SM)
            .color(HINT_COLOR)
            .align_x(alignment::Horizontal::Center),
    )
    .max_width(sizing::INFO_MAX_WIDTH)
    .into()
}
