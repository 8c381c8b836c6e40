// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the search surface and
//! the API client.
//!
//! The `App` struct wires together the domains (search, localization,
//! theming) and translates messages into the single side effect this
//! application has: issuing a fetch and reconciling its completion. Policy
//! decisions (page reset on submit, request-id staleness, pagination
//! bounds) live close to the update loop so user-facing behavior is easy
//! to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::i18n::fluent::I18n;
use crate::search::{Pager, PhotoTile, RequestCounter, SearchClient};
use crate::ui::components::error_banner;
use crate::ui::loading;
use crate::ui::search_bar;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state that bridges the search components,
/// localization, and persisted preferences.
pub struct App {
    pub i18n: I18n,
    search_bar: search_bar::State,
    /// Query of the most recently submitted search. Pagination re-fetches
    /// this even if the input field has been edited since; the field only
    /// becomes active on submit.
    active_query: Option<String>,
    pager: Pager,
    tiles: Vec<PhotoTile>,
    loading: loading::State,
    error: Option<error_banner::State>,
    /// Tags fetches so completions of superseded requests can be discarded.
    requests: RequestCounter,
    client: SearchClient,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("active_query", &self.active_query)
            .field("page", &self.pager.page())
            .field("tiles", &self.tiles.len())
            .field("loading", &self.loading.is_loading())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1000;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 780;
pub const MIN_WINDOW_WIDTH: u32 = 700;
pub const MIN_WINDOW_HEIGHT: u32 = 500;

/// Builds the window settings.
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

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
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
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            search_bar: search_bar::State::default(),
            active_query: None,
            pager: Pager::new(),
            tiles: Vec::new(),
            loading: loading::State::default(),
            error: None,
            requests: RequestCounter::new(),
            client: SearchClient::new(String::new()),
            theme_mode: ThemeMode::System,
        }
    }
}

impl App {
    /// Initializes application state and optionally kicks off a startup
    /// search based on `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_else(|error| {
            tracing::warn!(%error, "failed to load settings, using defaults");
            config::Config::default()
        });
        let i18n = I18n::new(flags.lang.clone(), &config);

        let access_key = config::resolve_access_key(&config).unwrap_or_else(|| {
            tracing::warn!(
                env = config::ACCESS_KEY_ENV,
                "no access key configured; search requests will fail authentication"
            );
            String::new()
        });
        let client = match config.endpoint.as_deref() {
            Some(endpoint) => SearchClient::with_endpoint(access_key.clone(), endpoint)
                .unwrap_or_else(|error| {
                    tracing::warn!(%error, "invalid endpoint override, using the default");
                    SearchClient::new(access_key)
                }),
            None => SearchClient::new(access_key),
        };

        let mut app = App {
            i18n,
            client,
            theme_mode: config.theme_mode,
            ..Self::default()
        };

        let task = match flags.query.as_deref().map(str::trim) {
            Some(query) if !query.is_empty() => {
                app.search_bar.set_value(query);
                update::start_search(&mut app, query.to_owned())
            }
            _ => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match &self.active_query {
            Some(query) => format!("{query} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.loading.is_loading()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SearchBar(search_bar_message) => {
                update::handle_search_bar(self, search_bar_message)
            }
            Message::Presets(presets_message) => update::handle_presets(self, presets_message),
            Message::Pagination(pagination_message) => {
                update::handle_pagination(self, pagination_message)
            }
            Message::ErrorBanner(banner_message) => {
                update::handle_error_banner(self, banner_message)
            }
            Message::SearchCompleted { request, result } => {
                update::handle_search_completed(self, request, result)
            }
            Message::SpinnerTick(_) => update::handle_spinner_tick(self),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            search_bar: &self.search_bar,
            pager: &self.pager,
            tiles: &self.tiles,
            loading: &self.loading,
            error: self.error.as_ref(),
            searched: self.active_query.is_some(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_app_starts_blank_on_page_one() {
        let app = App::default();
        assert_eq!(app.pager.page(), 1);
        assert!(app.active_query.is_none());
        assert!(app.tiles.is_empty());
        assert!(!app.loading.is_loading());
    }

    #[test]
    fn title_includes_the_active_query() {
        let mut app = App::default();
        let plain = app.title();
        assert!(!plain.is_empty());

        app.active_query = Some("dogs".to_owned());
        let titled = app.title();
        assert!(titled.starts_with("dogs - "));
        assert!(titled.ends_with(&plain));
    }
}
