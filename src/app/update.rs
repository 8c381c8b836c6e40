// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains all specialized message handlers dispatched from
//! `App::update`, implementing the search controller semantics: submissions
//! reset to page 1, preset selection is one atomic set-and-search, page
//! changes re-fetch the active query, and completions of superseded fetches
//! are discarded.

use super::{App, Message};
use crate::error::Error;
use crate::search::{RequestId, ResultPage};
use crate::ui::components::error_banner;
use crate::ui::pagination;
use crate::ui::presets;
use crate::ui::search_bar;
use iced::Task;

pub fn handle_search_bar(app: &mut App, message: search_bar::Message) -> Task<Message> {
    match app.search_bar.handle(message) {
        search_bar::Event::None => Task::none(),
        search_bar::Event::Submit(query) => start_search(app, query),
    }
}

pub fn handle_presets(app: &mut App, message: presets::Message) -> Task<Message> {
    let presets::Event::Select(preset) = presets::update(message);
    // One atomic operation: update the field and run a single search.
    app.search_bar.set_value(preset.query());
    start_search(app, preset.query().to_owned())
}

pub fn handle_pagination(app: &mut App, message: pagination::Message) -> Task<Message> {
    if app.loading.is_loading() {
        return Task::none();
    }

    let target = match message {
        pagination::Message::Previous => app.pager.previous(),
        pagination::Message::Next => app.pager.next(),
    };
    let Some(page) = target else {
        return Task::none();
    };
    let Some(query) = app.active_query.clone() else {
        return Task::none();
    };

    app.pager.set_page(page);
    issue_fetch(app, query)
}

pub fn handle_error_banner(app: &mut App, message: error_banner::Message) -> Task<Message> {
    match message {
        error_banner::Message::Dismiss => app.error = None,
        other => {
            if let Some(banner) = app.error.as_mut() {
                banner.handle(other);
            }
        }
    }
    Task::none()
}

/// Records `query` as the active search and fetches its first page.
pub fn start_search(app: &mut App, query: String) -> Task<Message> {
    app.active_query = Some(query.clone());
    app.pager.reset();
    issue_fetch(app, query)
}

fn issue_fetch(app: &mut App, query: String) -> Task<Message> {
    app.error = None;
    app.loading.start();

    let request = app.requests.begin();
    let client = app.client.clone();
    let page = app.pager.page();
    tracing::debug!(%query, page, request = request.value(), "issuing search");

    Task::perform(
        async move { (request, client.fetch_page(&query, page).await) },
        |(request, result)| Message::SearchCompleted { request, result },
    )
}

pub fn handle_search_completed(
    app: &mut App,
    request: RequestId,
    result: Result<ResultPage, Error>,
) -> Task<Message> {
    if !app.requests.is_current(request) {
        // A newer fetch superseded this one; last request wins.
        tracing::debug!(
            request = request.value(),
            "discarding stale search response"
        );
        return Task::none();
    }

    app.loading.stop();
    match result {
        Ok(page) => {
            app.pager.set_total_pages(page.total_pages);
            app.tiles = page.tiles;
        }
        Err(error) => {
            // Prior tiles stay on screen; only the banner changes.
            tracing::warn!(%error, "search request failed");
            app.error = Some(error_banner::State::new(
                error.user_message_key(),
                error.to_string(),
                &app.i18n,
            ));
        }
    }
    Task::none()
}

pub fn handle_spinner_tick(app: &mut App) -> Task<Message> {
    app.loading.tick();
    Task::none()
}
