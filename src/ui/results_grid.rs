// SPDX-License-Identifier: MPL-2.0
//! Thumbnail grid for one result page.

use crate::i18n::fluent::I18n;
use crate::search::PhotoTile;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{scrollable, Column, Container, Image, Row, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Number of thumbnail cells per grid row.
pub const GRID_COLUMNS: usize = 3;

/// Renders the grid, or a hint/empty-state line when there is nothing to
/// show. `searched` distinguishes "no search yet" from "search came back
/// empty".
pub fn view<'a, Message: 'a>(
    tiles: &'a [PhotoTile],
    searched: bool,
    i18n: &I18n,
) -> Element<'a, Message> {
    if tiles.is_empty() {
        let key = if searched { "results-empty" } else { "search-hint" };
        let hint = Text::new(i18n.tr(key))
            .size(typography::BODY_LG)
            .style(|_theme| iced::widget::text::Style {
                color: Some(palette::GRAY_500),
            });
        return Container::new(hint)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into();
    }

    let mut grid = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center);

    for chunk in tiles.chunks(GRID_COLUMNS) {
        let mut row = Row::new().spacing(spacing::SM);
        for tile in chunk {
            row = row.push(cell(tile));
        }
        grid = grid.push(row);
    }

    Container::new(scrollable(
        Container::new(grid)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .padding(spacing::XS),
    ))
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn cell<'a, Message: 'a>(tile: &'a PhotoTile) -> Element<'a, Message> {
    match &tile.image {
        Some(image) => Image::new(image.handle.clone())
            .width(Length::Fixed(sizing::THUMBNAIL))
            .height(Length::Fixed(sizing::THUMBNAIL))
            .content_fit(ContentFit::Cover)
            .into(),
        None => {
            // Thumbnail failed to download; show the alt text in its place.
            let alt = tile
                .photo
                .alt_description
                .as_deref()
                .unwrap_or(tile.photo.id.as_str());
            Container::new(Text::new(alt).size(typography::CAPTION))
                .width(Length::Fixed(sizing::THUMBNAIL))
                .height(Length::Fixed(sizing::THUMBNAIL))
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center)
                .padding(spacing::XS)
                .style(styles::container::placeholder_cell)
                .into()
        }
    }
}
