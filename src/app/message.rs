// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::search::{RequestId, ResultPage};
use crate::ui::components::error_banner;
use crate::ui::pagination;
use crate::ui::presets;
use crate::ui::search_bar;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    SearchBar(search_bar::Message),
    Presets(presets::Message),
    Pagination(pagination::Message),
    ErrorBanner(error_banner::Message),
    /// A fetch finished; applied only if `request` is still the latest one.
    SearchCompleted {
        request: RequestId,
        result: Result<ResultPage, Error>,
    },
    /// Periodic tick driving the loading spinner animation.
    SpinnerTick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional query to search immediately on startup.
    pub query: Option<String>,
}
