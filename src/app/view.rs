// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::domain::access::RefreshCoordinator;
use crate::domain::member::MemberProfile;
use crate::i18n::fluent::I18n;
use crate::ui::access_code::AccessCode;
use crate::ui::card::{self, CardViewContext};
use iced::Element;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub member: &'a MemberProfile,
    pub coordinator: &'a RefreshCoordinator,
    pub access_code: &'a AccessCode,
}

/// Renders the card with the coordinator's current animation values.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    card::view(CardViewContext {
        i18n: ctx.i18n,
        member: ctx.member,
        access_code: ctx.access_code,
        code_opacity: ctx.coordinator.opacity(),
        button_scale: ctx.coordinator.button_scale(),
        is_refreshing: ctx.coordinator.is_refreshing(),
        on_refresh: Message::RefreshRequested,
    })
}
