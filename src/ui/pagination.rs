// SPDX-License-Identifier: MPL-2.0
//! Previous/Next pagination controls.
//!
//! A control is rendered only when the step stays within `[1, total_pages]`,
//! so an out-of-bounds page can never be requested from the UI. The keyboard
//! shortcuts re-check the same bounds in the update path.

use crate::i18n::fluent::I18n;
use crate::search::Pager;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Container, Row, Text};
use iced::{Element, Length};

/// Messages emitted by the pagination controls.
#[derive(Debug, Clone)]
pub enum Message {
    Previous,
    Next,
}

pub fn view<'a>(i18n: &I18n, pager: &Pager) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::MD);

    if pager.has_previous() {
        row = row.push(
            button(Text::new(i18n.tr("pagination-previous")).size(typography::BODY))
                .on_press(Message::Previous)
                .style(styles::button::primary)
                .padding([spacing::XXS, spacing::SM]),
        );
    }

    if pager.has_next() {
        row = row.push(
            button(Text::new(i18n.tr("pagination-next")).size(typography::BODY))
                .on_press(Message::Next)
                .style(styles::button::primary)
                .padding([spacing::XXS, spacing::SM]),
        );
    }

    Container::new(row).center_x(Length::Fill).into()
}
