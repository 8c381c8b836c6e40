// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Mirrors the single search screen: title, error banner, search bar, preset
//! filters, and either the loading indicator or the result grid with its
//! pagination controls.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::search::{Pager, PhotoTile};
use crate::ui::components::error_banner;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::loading;
use crate::ui::pagination;
use crate::ui::presets;
use crate::ui::results_grid;
use crate::ui::search_bar;
use crate::ui::widgets::animated_spinner::AnimatedSpinner;
use iced::widget::{text, Column, Container, Text};
use iced::{alignment, Element, Length, Theme};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub search_bar: &'a search_bar::State,
    pub pager: &'a Pager,
    pub tiles: &'a [PhotoTile],
    pub loading: &'a loading::State,
    pub error: Option<&'a error_banner::State>,
    /// Whether any search has been submitted yet.
    pub searched: bool,
}

/// Renders the application view.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new(ctx.i18n.tr("window-title"))
        .size(typography::TITLE_LG)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::PRIMARY_500),
        });

    let mut column = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .width(Length::Fill)
        .push(Container::new(title).center_x(Length::Fill));

    if let Some(banner) = ctx.error {
        column = column.push(
            Container::new(banner.view(ctx.i18n).map(Message::ErrorBanner))
                .center_x(Length::Fill),
        );
    }

    column = column
        .push(
            Container::new(ctx.search_bar.view(ctx.i18n).map(Message::SearchBar))
                .center_x(Length::Fill),
        )
        .push(presets::view(ctx.i18n).map(Message::Presets));

    if ctx.loading.is_loading() {
        column = column.push(view_loading(ctx.i18n, ctx.loading));
    } else {
        column = column
            .push(results_grid::view(ctx.tiles, ctx.searched, ctx.i18n))
            .push(pagination::view(ctx.i18n, ctx.pager).map(Message::Pagination));
    }

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .into()
}

fn view_loading<'a>(i18n: &I18n, loading: &loading::State) -> Element<'a, Message> {
    let spinner =
        AnimatedSpinner::new(palette::PRIMARY_500, loading.spinner_rotation()).into_element();
    let label = Text::new(i18n.tr("loading"))
        .size(typography::BODY_LG)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::PRIMARY_400),
        });

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(spinner)
            .push(label),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .into()
}
