// SPDX-License-Identifier: MPL-2.0
//! Preset keyword filter row.
//!
//! Selecting a preset emits a single event; the orchestrator sets the search
//! field and issues exactly one fetch, so a preset click can never produce a
//! duplicate outbound request.

use crate::i18n::fluent::I18n;
use crate::search::PresetKeyword;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Container, Row, Text};
use iced::{Element, Length};

/// Messages emitted by the preset row.
#[derive(Debug, Clone)]
pub enum Message {
    Selected(PresetKeyword),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    Select(PresetKeyword),
}

/// Process a preset row message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::Selected(keyword) => Event::Select(keyword),
    }
}

pub fn view(i18n: &I18n) -> Element<'static, Message> {
    let mut row = Row::new().spacing(spacing::MD);
    for preset in PresetKeyword::ALL {
        row = row.push(
            button(Text::new(i18n.tr(preset.label_key())).size(typography::BODY))
                .on_press(Message::Selected(preset))
                .style(styles::button::preset)
                .padding([spacing::XXS, spacing::SM]),
        );
    }

    Container::new(row)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_passes_the_keyword_through() {
        let Event::Select(keyword) = update(Message::Selected(PresetKeyword::Cars));
        assert_eq!(keyword, PresetKeyword::Cars);
    }
}
