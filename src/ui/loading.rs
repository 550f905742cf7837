// SPDX-License-Identifier: MPL-2.0
//! Rotating status phrases shown while a service call is in flight.
//!
//! Pure presentation: the rotation lives outside the workflow session and is
//! driven by a timer subscription.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{container, text, Column};
use iced::{alignment, Element, Length, Theme};

/// i18n keys cycled through during the transform wait.
const PHRASE_KEYS: [&str; 5] = [
    "loading-phrase-packing",
    "loading-phrase-tailoring",
    "loading-phrase-scenery",
    "loading-phrase-styling",
    "loading-phrase-final-touches",
];

/// Rotation state for the loading phrases.
#[derive(Debug, Clone, Copy, Default)]
pub struct State {
    phrase_index: usize,
}

impl State {
    /// Advances to the next phrase; called on each timer tick.
    pub fn tick(&mut self) {
        self.phrase_index = (self.phrase_index + 1) % PHRASE_KEYS.len();
    }

    /// Restarts the rotation from the first phrase.
    pub fn restart(&mut self) {
        self.phrase_index = 0;
    }

    pub fn phrase_key(&self) -> &'static str {
        PHRASE_KEYS[self.phrase_index]
    }
}

/// Full-panel busy indicator with the current rotating phrase.
pub fn view<'a, Message: 'a>(i18n: &I18n, state: &State) -> Element<'a, Message> {
    let spinner = text("✈").size(40);
    let phrase = text(i18n.tr(state.phrase_key()))
        .size(typography::BODY)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::GRAY_400),
        });

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(spinner)
        .push(text(i18n.tr("loading-transforming")).size(typography::HEADING))
        .push(phrase);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_cycles_through_all_phrases() {
        let mut state = State::default();
        let first = state.phrase_key();

        let mut seen = vec![first];
        for _ in 1..PHRASE_KEYS.len() {
            state.tick();
            seen.push(state.phrase_key());
        }
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), PHRASE_KEYS.len());

        state.tick();
        assert_eq!(state.phrase_key(), first);
    }

    #[test]
    fn restart_rewinds_to_first_phrase() {
        let mut state = State::default();
        state.tick();
        state.tick();
        state.restart();
        assert_eq!(state.phrase_key(), PHRASE_KEYS[0]);
    }
}
