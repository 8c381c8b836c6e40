// SPDX-License-Identifier: MPL-2.0
//! Error banner shown above the search bar after a failed fetch.
//!
//! The user-facing text stays generic; the technical error string sits
//! behind a collapsible details toggle.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

/// Error banner state.
#[derive(Debug, Clone)]
pub struct State {
    /// i18n key for the friendly error message.
    message_key: &'static str,
    /// Translated friendly error message.
    message_text: String,
    /// Technical error details.
    details: String,
    /// Whether to show the technical details.
    show_details: bool,
}

/// Messages for the error banner.
#[derive(Debug, Clone)]
pub enum Message {
    /// Toggle visibility of technical details.
    ToggleDetails,
    /// Dismiss the banner (handled by orchestrator).
    Dismiss,
}

impl State {
    /// Create a new banner with the given i18n key and details.
    #[must_use]
    pub fn new(message_key: &'static str, details: String, i18n: &I18n) -> Self {
        Self {
            message_key,
            message_text: i18n.tr(message_key),
            details,
            show_details: false,
        }
    }

    /// Handle a banner message.
    pub fn handle(&mut self, msg: Message) {
        match msg {
            Message::ToggleDetails => self.show_details = !self.show_details,
            Message::Dismiss => { /* handled by orchestrator */ }
        }
    }

    /// Refresh the translation when the locale changes.
    pub fn refresh_translation(&mut self, i18n: &I18n) {
        self.message_text = i18n.tr(self.message_key);
    }

    #[must_use]
    pub fn message_text(&self) -> &str {
        &self.message_text
    }

    #[must_use]
    pub fn details(&self) -> &str {
        &self.details
    }

    #[must_use]
    pub fn show_details(&self) -> bool {
        self.show_details
    }

    pub fn view(&self, i18n: &I18n) -> Element<'_, Message> {
        let message = Text::new(self.message_text.as_str())
            .size(typography::BODY_LG)
            .style(|_theme: &Theme| text::Style {
                color: Some(palette::ERROR_500),
            });

        let toggle_key = if self.show_details {
            "error-details-hide"
        } else {
            "error-details-show"
        };
        let toggle = button(Text::new(i18n.tr(toggle_key)).size(typography::CAPTION))
            .on_press(Message::ToggleDetails)
            .style(styles::button::text_subtle)
            .padding(spacing::XXS);
        let dismiss = button(Text::new(i18n.tr("error-dismiss")).size(typography::CAPTION))
            .on_press(Message::Dismiss)
            .style(styles::button::text_subtle)
            .padding(spacing::XXS);

        let header = Row::new()
            .spacing(spacing::MD)
            .align_y(alignment::Vertical::Center)
            .push(message)
            .push(toggle)
            .push(dismiss);

        let mut content = Column::new()
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Center)
            .push(header);

        if self.show_details {
            content = content.push(
                Text::new(self.details.as_str())
                    .size(typography::CAPTION)
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.extended_palette().secondary.base.text),
                    }),
            );
        }

        Container::new(content)
            .max_width(sizing::ERROR_BANNER_WIDTH)
            .padding(spacing::SM)
            .style(styles::container::error_banner)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_banner_translates_its_message() {
        let i18n = I18n::default();
        let state = State::new("error-search-failed", "status 500".into(), &i18n);
        assert!(!state.message_text().is_empty());
        assert!(!state.message_text().starts_with("MISSING:"));
        assert_eq!(state.details(), "status 500");
    }

    #[test]
    fn toggle_details_flips_state() {
        let i18n = I18n::default();
        let mut state = State::new("error-search-failed", "details".into(), &i18n);
        assert!(!state.show_details());
        state.handle(Message::ToggleDetails);
        assert!(state.show_details());
        state.handle(Message::ToggleDetails);
        assert!(!state.show_details());
    }

    #[test]
    fn refresh_translation_follows_locale() {
        let mut i18n = I18n::default();
        let mut state = State::new("error-search-failed", String::new(), &i18n);
        let english = state.message_text().to_owned();

        i18n.set_locale("fr".parse().unwrap());
        state.refresh_translation(&i18n);
        assert_ne!(state.message_text(), english);
    }
}
