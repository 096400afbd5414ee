// SPDX-License-Identifier: MPL-2.0
//! Demo application: a panel stack of coloured sample panels.
//!
//! The `App` struct owns the stack, translates navigation messages into
//! selections and feeds frame ticks to the stack while a transition runs.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::panel_stack::{PanelStack, TickOutcome};
use crate::paths;
use iced::{window, Color, Element, Subscription, Task, Theme};

pub const WINDOW_DEFAULT_WIDTH: f32 = 800.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 600.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 360.0;

/// Number of sample panels when `--panels` is not given.
pub const DEFAULT_PANEL_COUNT: usize = 5;

const PANEL_COLORS: [Color; 6] = [
    Color::from_rgb(0.3, 0.6, 0.9),
    Color::from_rgb(0.263, 0.702, 0.404),
    Color::from_rgb(0.945, 0.651, 0.125),
    Color::from_rgb(0.898, 0.224, 0.208),
    Color::from_rgb(0.55, 0.36, 0.85),
    Color::from_rgb(0.2, 0.65, 0.65),
];

/// Handle of one sample panel.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoPanel {
    pub title: String,
    pub color: Color,
}

impl DemoPanel {
    fn numbered(number: usize) -> Self {
        Self {
            title: format!("Panel {number}"),
            color: PANEL_COLORS[(number - 1) % PANEL_COLORS.len()],
        }
    }
}

/// Root Iced application state.
#[derive(Debug)]
pub struct App {
    stack: PanelStack<DemoPanel>,
    animated: bool,
    theme: Theme,
}

impl Default for App {
    fn default() -> Self {
        Self::with_stack(PanelStack::default(), DEFAULT_PANEL_COUNT)
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires Fn for boot, flags are consumed once
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
    fn with_stack(mut stack: PanelStack<DemoPanel>, panel_count: usize) -> Self {
        for number in 1..=panel_count.max(1) {
            stack.append_panel(DemoPanel::numbered(number));
        }
        stack.select(0, false);

        Self {
            stack,
            animated: true,
            theme: Theme::Dark,
        }
    }

    /// Initializes the application from CLI flags and `settings.toml`.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir);

        let (config, warning) = config::load();
        if let Some(warning) = warning {
            tracing::warn!("Config load failed, using defaults: {warning}");
        }

        let axis = flags.axis.unwrap_or(config.layout.axis);
        let settings = config.transition.to_settings();
        tracing::info!(
            %axis,
            duration_ms = settings.duration().as_millis() as u64,
            scale = settings.scale(),
            distance = settings.distance(),
            "panel stack configured"
        );

        let stack = PanelStack::with_settings(axis, settings);
        let app = Self::with_stack(stack, flags.panels.unwrap_or(DEFAULT_PANEL_COUNT));
        (app, Task::none())
    }

    /// Read access to the panel stack.
    #[must_use]
    pub fn stack(&self) -> &PanelStack<DemoPanel> {
        &self.stack
    }

    #[must_use]
    pub fn is_animated(&self) -> bool {
        self.animated
    }

    fn title(&self) -> String {
        match self.stack.selected() {
            Some(panel) => format!("Panel Stack - {}", panel.title),
            None => "Panel Stack".to_string(),
        }
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.stack.is_animating()),
        ])
    }

    /// Applies one message to the application state.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Next => {
                self.stack.select_next(self.animated);
            }
            Message::Previous => {
                self.stack.select_previous(self.animated);
            }
            Message::Select(index) => {
                self.stack.select(index, self.animated);
            }
            Message::AppendPanel => {
                let number = self.stack.len() + 1;
                self.stack.append_panel(DemoPanel::numbered(number));
            }
            Message::ToggleAxis => {
                let axis = self.stack.axis().toggled();
                tracing::debug!(%axis, "axis changed");
                self.stack.set_axis(axis);
            }
            Message::ToggleAnimated(animated) => {
                self.animated = animated;
            }
            Message::Tick(now) => {
                if let TickOutcome::Finished { to, .. } = self.stack.tick(now) {
                    tracing::trace!(selected = to, "panel settled");
                }
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            stack: &self.stack,
            animated: self.animated,
            scrim: self.theme.extended_palette().background.base.color,
        })
    }
}
