// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct wires together the domains (catalog pages, requests,
//! notifications, settings) and translates component events into side
//! effects like config persistence, backend refreshes, or toasts. Policy
//! decisions (window size, which events produce toasts, what gets logged
//! to diagnostics) live here so user-facing behavior is easy to audit.

mod message;
pub mod screen;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::api::Client;
use crate::config::{self, Config, DEFAULT_API_TIMEOUT_SECS, DEFAULT_TOAST_DURATION_MS};
use crate::diagnostics::{DiagnosticsCollector, WarningType};
use crate::i18n::I18n;
use crate::ui::notifications::{Notification, Queue};
use crate::ui::pages;
use crate::ui::theming::ThemeMode;
use crate::ui::wizard::{account_form, card_form, credit_form};
use iced::{window, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// The catalog form currently overlaying a catalog page, if any.
pub enum Wizard {
    Card(card_form::State),
    Account(account_form::State),
    Credit(credit_form::State),
}

/// Root Iced application state bridging the pages, localization and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    config: Config,
    client: Client,
    screen: Screen,
    theme_mode: ThemeMode,
    queue: Queue,
    diagnostics: DiagnosticsCollector,
    dashboard: pages::dashboard::State,
    users: pages::users::State,
    cards: pages::cards::State,
    accounts: pages::accounts::State,
    credits: pages::credits::State,
    requests: pages::requests::State,
    broadcast: pages::broadcast::State,
    settings: pages::settings::State,
    wizard: Option<Wizard>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("queued_toasts", &self.queue.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const MIN_WINDOW_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

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

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl App {
    /// Initializes the application state from flags and the persisted
    /// configuration, then kicks off the first catalog refresh.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        if let Some(dir) = &flags.config_dir {
            config::set_dir_override(PathBuf::from(dir));
        }

        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let base_url = flags
            .api_url
            .clone()
            .unwrap_or_else(|| config.api_base_url());
        let timeout = Duration::from_secs(
            config.api.timeout_secs.unwrap_or(DEFAULT_API_TIMEOUT_SECS),
        );
        // Without a TLS backend no request can ever succeed.
        let client =
            Client::new(base_url, timeout).expect("HTTP client initialization failed");

        let diagnostics = DiagnosticsCollector::default();
        let mut queue = Queue::new();
        queue.set_diagnostics(diagnostics.handle());
        queue.set_default_duration(Duration::from_millis(
            config
                .notifications
                .default_duration_ms
                .unwrap_or(DEFAULT_TOAST_DURATION_MS),
        ));

        let settings = pages::settings::State::from_config(&config, &i18n);
        let theme_mode = config.theme_mode();

        let mut app = App {
            i18n,
            config,
            client,
            screen: Screen::default(),
            theme_mode,
            queue,
            diagnostics,
            dashboard: pages::dashboard::State::default(),
            users: pages::users::State::default(),
            cards: pages::cards::State::default(),
            accounts: pages::accounts::State::default(),
            credits: pages::credits::State::default(),
            requests: pages::requests::State::default(),
            broadcast: pages::broadcast::State::default(),
            settings,
            wizard: None,
        };

        let mut tasks = Vec::new();
        if let Some(key) = config_warning {
            tasks.push(app.push_notification(
                Notification::warning(key).with_warning_type(WarningType::Config),
            ));
        }
        // Warm the catalog listings so navigation shows data immediately.
        tasks.push(app.refresh_catalogs());

        (app, Task::batch(tasks))
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
