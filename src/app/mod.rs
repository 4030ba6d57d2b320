// SPDX-License-Identifier: MPL-2.0
//! Application root state for the swipe-to-confirm demo.
//!
//! The `App` struct owns the swipeable element state and the flags it renders
//! from (loading, finished), and turns completed swipes into the simulated
//! confirmation flow.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use update::{mock_api_call, DemoTimings};
pub use view::pill_style;

use crate::domain::swipe::LoopDuration;
use crate::i18n::fluent::I18n;
use crate::swipeable::{self, Props, StyleProp};
use crate::ui::design_tokens::sizing;
use crate::ui::theming::ThemeMode;
use iced::{window, Color, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    swipe: swipeable::State,
    props: Props,
    theme_mode: ThemeMode,
    loader_color: Color,
    timings: DemoTimings,
    style: StyleProp,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("phase", &self.swipe.phase())
            .field("props", &self.props)
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(sizing::WINDOW_WIDTH, sizing::WINDOW_HEIGHT),
        min_size: Some(iced::Size::new(sizing::PILL * 2.0, sizing::PILL * 2.0)),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot function; the flags are consumed once.
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

impl App {
    /// Builds the application state from the config file and CLI flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            tracing::warn!(%warning, "config could not be loaded, using defaults");
        }

        let i18n = I18n::new(flags.lang, &config);
        let loop_duration = flags
            .loop_ms
            .map_or_else(|| config.loop_duration(), LoopDuration::new);

        tracing::debug!(
            locale = %i18n.current_locale(),
            loop_ms = loop_duration.millis(),
            "starting"
        );

        let app = App {
            i18n,
            swipe: swipeable::State::new(loop_duration),
            props: Props::default(),
            theme_mode: config.general.theme_mode,
            loader_color: config.loader_color(),
            timings: DemoTimings {
                mock_latency: config.mock_latency(),
                finished_display: config.finished_display(),
            },
            style: pill_style(),
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_frame_subscription(&self.swipe, self.props)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            swipe: &mut self.swipe,
            props: &mut self.props,
            timings: self.timings,
        };

        let task = match message {
            Message::Swipe(swipe_message) => update::handle_swipe_message(&mut ctx, swipe_message),
            Message::ConfirmationCompleted(result) => {
                update::handle_confirmation_completed(&mut ctx, result)
            }
            Message::FinishedElapsed => update::handle_finished_elapsed(&mut ctx),
        };

        self.swipe.sync_props(self.props);
        task
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            swipe: &self.swipe,
            props: self.props,
            loader_color: self.loader_color,
            style: &self.style,
        })
    }
}
