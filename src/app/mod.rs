// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the refresh coordinator to the card view and
//! translates messages (button presses, shortcuts, animation ticks) into
//! coordinator calls.

pub mod clock;
pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::domain::access::{AccessToken, RefreshCoordinator};
use crate::domain::member::MemberProfile;
use crate::i18n::fluent::I18n;
use crate::ui::access_code::AccessCode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    member: MemberProfile,
    coordinator: RefreshCoordinator,
    /// QR encoding of `coordinator.token()`, rebuilt on every swap.
    access_code: AccessCode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("member", &self.member.member_id)
            .field("token", &self.coordinator.token().as_str())
            .field("state", &self.coordinator.state())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 860;
pub const WINDOW_DEFAULT_WIDTH: u32 = 430;
pub const MIN_WINDOW_HEIGHT: u32 = 760;
pub const MIN_WINDOW_WIDTH: u32 = 380;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let coordinator = RefreshCoordinator::default();
        let access_code = AccessCode::encode(coordinator.token());
        Self {
            i18n: I18n::default(),
            member: MemberProfile::default(),
            coordinator,
            access_code,
        }
    }
}

impl App {
    /// Loads config and builds the card with its initial token.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        if let Some(key) = config_warning {
            tracing::warn!("{}", i18n.tr(&key));
        }

        let member = config.member.profile();
        let token = AccessToken::initial(config.member.token_seed());
        let coordinator = RefreshCoordinator::new(token, config.refresh.timings());
        let access_code = AccessCode::encode(coordinator.token());

        tracing::info!(
            locale = %i18n.current_locale(),
            member = %member.member_id,
            token = %coordinator.token(),
            "membership card ready"
        );

        let app = App {
            i18n,
            member,
            coordinator,
            access_code,
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(self.coordinator.is_animating());

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            coordinator: &mut self.coordinator,
            access_code: &mut self.access_code,
        };
        update::update(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            member: &self.member,
            coordinator: &self.coordinator,
            access_code: &self.access_code,
        })
    }
}
