// SPDX-License-Identifier: MPL-2.0
//! Search input sub-component.
//!
//! The input value is an explicit bound state field updated on every change
//! event; submission reads that field, never a widget handle. Empty and
//! whitespace-only submissions are swallowed here so the orchestrator only
//! ever sees submittable queries.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::TextInput;
use iced::{Element, Length};

/// Controlled state of the search field.
#[derive(Debug, Clone, Default)]
pub struct State {
    value: String,
}

/// Messages for the search bar sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// The input text changed.
    InputChanged(String),
    /// Enter was pressed inside the input.
    Submitted,
}

/// Effects propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// A non-empty, trimmed query was submitted.
    Submit(String),
}

impl State {
    /// Handle a search bar message.
    pub fn handle(&mut self, msg: Message) -> Event {
        match msg {
            Message::InputChanged(value) => {
                self.value = value;
                Event::None
            }
            Message::Submitted => {
                let query = self.value.trim();
                if query.is_empty() {
                    Event::None
                } else {
                    Event::Submit(query.to_owned())
                }
            }
        }
    }

    /// Replace the field content, e.g. when a preset is selected.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn view(&self, i18n: &I18n) -> Element<'_, Message> {
        TextInput::new(&i18n.tr("search-placeholder"), &self.value)
            .on_input(Message::InputChanged)
            .on_submit(Message::Submitted)
            .size(typography::BODY_LG)
            .padding(spacing::SM)
            .width(Length::Fixed(sizing::SEARCH_INPUT_WIDTH))
            .style(styles::text_input::search)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_changes_update_the_bound_value() {
        let mut state = State::default();
        state.handle(Message::InputChanged("dog".into()));
        state.handle(Message::InputChanged("dogs".into()));
        assert_eq!(state.value(), "dogs");
    }

    #[test]
    fn submitting_a_query_trims_it() {
        let mut state = State::default();
        state.handle(Message::InputChanged("  dogs  ".into()));
        match state.handle(Message::Submitted) {
            Event::Submit(query) => assert_eq!(query, "dogs"),
            Event::None => panic!("expected a submit event"),
        }
    }

    #[test]
    fn empty_submissions_are_swallowed() {
        let mut state = State::default();
        assert!(matches!(state.handle(Message::Submitted), Event::None));

        state.handle(Message::InputChanged("   ".into()));
        assert!(matches!(state.handle(Message::Submitted), Event::None));
    }

    #[test]
    fn set_value_overwrites_typed_text() {
        let mut state = State::default();
        state.handle(Message::InputChanged("dogs".into()));
        state.set_value("cars");
        assert_eq!(state.value(), "cars");
    }
}
