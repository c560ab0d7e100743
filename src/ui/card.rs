// SPDX-License-Identifier: MPL-2.0
//! Membership card screen.
//!
//! Stateless: everything that changes between frames (code opacity, button
//! scale, busy flag) comes in through [`CardViewContext`].

use crate::domain::animation::{Opacity, Scale};
use crate::domain::member::MemberProfile;
use crate::i18n::fluent::I18n;
use crate::ui::access_code::{self, AccessCode};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::font::Weight;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Font, Length};

const BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

/// Everything the card needs to render one frame.
pub struct CardViewContext<'a, Message> {
    pub i18n: &'a I18n,
    pub member: &'a MemberProfile,
    pub access_code: &'a AccessCode,
    pub code_opacity: Opacity,
    pub button_scale: Scale,
    pub is_refreshing: bool,
    /// Emitted by the refresh button while it is enabled.
    pub on_refresh: Message,
}

/// Renders the whole screen: header, card, refresh button and footer.
pub fn view<'a, Message: Clone + 'a>(ctx: CardViewContext<'a, Message>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .push(header(i18n))
        .push(card(&ctx))
        .push(refresh_button(&ctx))
        .push(footer(i18n));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(container_styles::screen)
        .into()
}

fn header<'a, Message: 'a>(i18n: &I18n) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new(i18n.tr("header-title"))
                .size(typography::TITLE_LG)
                .font(BOLD)
                .color(palette::GOLD),
        )
        .push(
            Text::new(i18n.tr("header-subtitle"))
                .size(typography::BODY_LG)
                .color(palette::GRAY_400),
        )
        .into()
}

fn card<'a, Message: 'a>(ctx: &CardViewContext<'a, Message>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let member = ctx.member;

    // Caption and tier on the left, logo mark on the right.
    let badge = Container::new(
        Text::new(member.tier_badge())
            .size(typography::BADGE)
            .font(BOLD),
    )
    .padding([spacing::XS, spacing::SM + spacing::XS])
    .style(container_styles::tier_badge);

    let title = Column::new()
        .spacing(spacing::SM)
        .width(Length::Fill)
        .push(
            Text::new(i18n.tr("card-title"))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        )
        .push(badge);

    let logo = Container::new(
        Text::new(member.logo_mark.clone())
            .size(typography::TITLE_SM)
            .font(BOLD),
    )
    .width(Length::Fixed(sizing::LOGO))
    .height(Length::Fixed(sizing::LOGO))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(container_styles::logo);

    let top = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(title)
        .push(logo);

    // Avatar and identity lines.
    let avatar = Container::new(
        Text::new(member.initials())
            .size(typography::TITLE_SM)
            .font(BOLD),
    )
    .width(Length::Fixed(sizing::AVATAR))
    .height(Length::Fixed(sizing::AVATAR))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(container_styles::avatar);

    let identity = Column::new()
        .spacing(spacing::XS)
        .push(
            Text::new(member.name.clone())
                .size(typography::TITLE_MD)
                .font(BOLD),
        )
        .push(
            Text::new(i18n.tr_with_args("member-level", &[("tier", member.tier.as_str())]))
                .size(typography::BODY)
                .color(palette::GOLD),
        )
        .push(
            Text::new(i18n.tr_with_args("member-id", &[("id", member.member_id.as_str())]))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );

    let member_row = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(avatar)
        .push(identity);

    // Access code block.
    let code = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .width(Length::Fill)
        .push(
            Text::new(i18n.tr("qr-label"))
                .size(typography::BODY)
                .font(BOLD),
        )
        .push(ctx.access_code.view(ctx.code_opacity, i18n))
        .push(access_code::hint(i18n.tr("qr-info")));

    // Validity and security chip.
    let valid_through = match member.valid_through {
        Some(date) => {
            let date = date.to_string();
            i18n.tr_with_args("valid-through", &[("date", date.as_str())])
        }
        None => String::new(),
    };

    let chip = Container::new(
        Container::new(Text::new(""))
            .width(Length::Fixed(sizing::CHIP_CORE_WIDTH))
            .height(Length::Fixed(sizing::CHIP_CORE_HEIGHT))
            .style(container_styles::security_chip_core),
    )
    .width(Length::Fixed(sizing::CHIP_WIDTH))
    .height(Length::Fixed(sizing::CHIP_HEIGHT))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(container_styles::security_chip);

    let bottom = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(
                Text::new(valid_through)
                    .size(typography::CAPTION)
                    .color(palette::GRAY_400),
            )
            .width(Length::Fill),
        )
        .push(chip);

    let body = Column::new()
        .spacing(spacing::LG)
        .push(top)
        .push(member_row)
        .push(code)
        .push(bottom);

    Container::new(body)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(container_styles::card)
        .into()
}

fn refresh_button<'a, Message: Clone + 'a>(
    ctx: &CardViewContext<'a, Message>,
) -> Element<'a, Message> {
    let label = ctx.i18n.tr(refresh_label_key(ctx.is_refreshing));

    let scale = ctx.button_scale;
    let on_press = refresh_on_press(ctx.is_refreshing, &ctx.on_refresh);

    let refresh = button(
        Text::new(label)
            .size(typography::BODY_LG * scale.value())
            .font(BOLD)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fixed(scale.apply(sizing::BUTTON_WIDTH)))
    .height(Length::Fixed(scale.apply(sizing::BUTTON_HEIGHT)))
    .padding(spacing::MD * scale.value())
    .on_press_maybe(on_press)
    .style(button_styles::refresh);

    // Fixed slot so the layout below does not move while the button pulses.
    Container::new(refresh)
        .width(Length::Fixed(sizing::BUTTON_WIDTH))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn refresh_label_key(is_refreshing: bool) -> &'static str {
    if is_refreshing {
        "refresh-button-busy"
    } else {
        "refresh-button"
    }
}

/// The button is disabled for the whole cycle.
fn refresh_on_press<Message: Clone>(is_refreshing: bool, on_refresh: &Message) -> Option<Message> {
    (!is_refreshing).then(|| on_refresh.clone())
}

fn footer<'a, Message: 'a>(i18n: &I18n) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new(i18n.tr("info-text"))
                .size(typography::BODY)
                .color(palette::GRAY_400)
                .align_x(alignment::Horizontal::Center),
        )
        .push(
            Text::new(i18n.tr("info-subtext"))
                .size(typography::CAPTION)
                .color(palette::GRAY_400)
                .align_x(alignment::Horizontal::Center),
        )
        .into()
}
