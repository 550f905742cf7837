// SPDX-License-Identifier: MPL-2.0
//! Right panel while selecting: destination picker with a hot-destination
//! row, continent tabs, search, and the country list.
//!
//! The panel owns only presentation state (active tab, search query); the
//! chosen destination itself lives in the workflow session and is reported
//! upward as an [`Event`].

use crate::destinations::{self, Continent, Country};
use crate::error::ServiceError;
use crate::i18n::fluent::I18n;
use crate::ui::components::error_display::{ErrorDisplay, ErrorSeverity};
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use iced::widget::{button, container, scrollable, text, text_input, Column, Container, Row};
use iced::{alignment, Element, Length, Theme};

/// Presentation state for the selector.
#[derive(Debug, Clone)]
pub struct State {
    active_continent: Continent,
    query: String,
}

impl Default for State {
    fn default() -> Self {
        Self {
            active_continent: Continent::Asia,
            query: String::new(),
        }
    }
}

/// Selector interactions.
#[derive(Debug, Clone)]
pub enum Message {
    ContinentPicked(Continent),
    QueryChanged(String),
    CountryPicked(String),
    /// The big "make it so" arrow next to the panel.
    TransformRequested,
    /// Retry after a transform failure.
    Retry,
}

/// Events reported to the application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    DestinationChosen(String),
    TransformRequested,
}

impl State {
    /// Handles a selector message, returning an event for the application
    /// when the interaction concerns the workflow rather than this panel.
    pub fn update(&mut self, message: Message) -> Option<Event> {
        match message {
            Message::ContinentPicked(continent) => {
                self.active_continent = continent;
                self.query.clear();
                None
            }
            Message::QueryChanged(query) => {
                self.query = query;
                None
            }
            Message::CountryPicked(name) => Some(Event::DestinationChosen(name)),
            Message::TransformRequested | Message::Retry => Some(Event::TransformRequested),
        }
    }

    pub fn active_continent(&self) -> Continent {
        self.active_continent
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Countries currently listed: search hits when a query is present,
    /// otherwise the active continent tab.
    pub fn listed_countries(&self) -> Vec<Country> {
        if self.query.trim().is_empty() {
            self.active_continent.countries().to_vec()
        } else {
            destinations::search(&self.query)
        }
    }
}

/// Context required to render the selector.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    /// Currently chosen destination, if any.
    pub selected: Option<&'a str>,
    /// Whether the transform button may dispatch (photo validated).
    pub can_transform: bool,
    /// Last transform failure, shown above the list.
    pub last_error: Option<&'a ServiceError>,
}

/// Renders the destination picker.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let mut content = Column::new()
        .spacing(spacing::MD)
        .push(
            text(i18n.tr("selector-title"))
                .size(typography::HEADING)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center),
        )
        .push(hot_row(ctx.selected));

    if let Some(error) = ctx.last_error {
        let banner: ErrorDisplay<Message> = ErrorDisplay::new(ErrorSeverity::Error)
            .message(i18n.tr(error.i18n_key()))
            .details(error.to_string())
            .action(i18n.tr("selector-retry"), Message::Retry);
        content = content.push(banner.view());
    }

    content = content
        .push(
            text_input(&i18n.tr("selector-search-placeholder"), ctx.state.query())
                .on_input(Message::QueryChanged)
                .padding(spacing::SM),
        )
        .push(continent_tabs(i18n, ctx.state))
        .push(country_list(ctx.state, ctx.selected))
        .push(transform_button(i18n, ctx.selected, ctx.can_transform));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .into()
}

fn hot_row<'a>(selected: Option<&str>) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::XS);
    for name in destinations::HOT_DESTINATIONS {
        let Some(country) = destinations::find(name) else {
            continue;
        };
        let is_selected = selected == Some(country.name);
        row = row.push(
            button(text(format!("{} {}", country.flag, country.name)).size(typography::CAPTION))
                .padding(spacing::XS)
                .style(move |theme: &Theme, status| pill_style(theme, status, is_selected))
                .on_press(Message::CountryPicked(country.name.to_string())),
        );
    }
    scrollable(row)
        .direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::default(),
        ))
        .into()
}

fn continent_tabs<'a>(i18n: &I18n, state: &State) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::XS);
    for continent in Continent::ALL {
        let is_active = state.query().trim().is_empty() && continent == state.active_continent();
        row = row.push(
            button(text(i18n.tr(continent.i18n_key())).size(typography::CAPTION))
                .padding(spacing::XS)
                .style(move |theme: &Theme, status| pill_style(theme, status, is_active))
                .on_press(Message::ContinentPicked(continent)),
        );
    }
    row.into()
}

fn country_list<'a>(state: &State, selected: Option<&str>) -> Element<'a, Message> {
    let mut list = Column::new().spacing(spacing::XS).width(Length::Fill);
    for country in state.listed_countries() {
        let is_selected = selected == Some(country.name);
        list = list.push(
            button(
                text(format!("{} {}", country.flag, country.name)).size(typography::BODY),
            )
            .width(Length::Fill)
            .padding(spacing::SM)
            .style(move |theme: &Theme, status| row_style(theme, status, is_selected))
            .on_press(Message::CountryPicked(country.name.to_string())),
        );
    }

    container(scrollable(list))
        .height(Length::Fixed(sizing::COUNTRY_LIST_HEIGHT))
        .width(Length::Fill)
        .into()
}

fn transform_button<'a>(
    i18n: &I18n,
    selected: Option<&str>,
    can_transform: bool,
) -> Element<'a, Message> {
    let enabled = can_transform && selected.is_some();
    let mut btn = button(
        text(i18n.tr("selector-transform"))
            .size(typography::BODY)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .padding(spacing::SM)
    .width(Length::Fill)
    .style(button::primary);
    if enabled {
        btn = btn.on_press(Message::TransformRequested);
    }
    btn.into()
}

fn pill_style(theme: &Theme, status: button::Status, selected: bool) -> button::Style {
    let base = if selected {
        button::Style {
            background: Some(iced::Background::Color(palette::PRIMARY_500)),
            text_color: iced::Color::WHITE,
            ..button::primary(theme, status)
        }
    } else {
        button::secondary(theme, status)
    };
    button::Style {
        border: iced::Border {
            radius: radius::LG.into(),
            ..base.border
        },
        ..base
    }
}

fn row_style(theme: &Theme, status: button::Status, selected: bool) -> button::Style {
    let base = if selected {
        button::Style {
            background: Some(iced::Background::Color(palette::PRIMARY_200)),
            text_color: palette::PRIMARY_700,
            ..button::secondary(theme, status)
        }
    } else {
        button::text(theme, status)
    };
    button::Style {
        border: iced::Border {
            radius: radius::SM.into(),
            ..base.border
        },
        ..base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tab_is_asia() {
        let state = State::default();
        assert_eq!(state.active_continent(), Continent::Asia);
    }

    #[test]
    fn picking_a_continent_clears_the_query() {
        let mut state = State::default();
        state.update(Message::QueryChanged("jap".to_string()));
        assert_eq!(state.query(), "jap");

        let event = state.update(Message::ContinentPicked(Continent::Europe));
        assert!(event.is_none());
        assert_eq!(state.active_continent(), Continent::Europe);
        assert!(state.query().is_empty());
    }

    #[test]
    fn country_pick_is_reported_as_event() {
        let mut state = State::default();
        let event = state.update(Message::CountryPicked("Japan".to_string()));
        assert_eq!(event, Some(Event::DestinationChosen("Japan".to_string())));
    }

    #[test]
    fn search_overrides_the_active_tab() {
        let mut state = State::default();
        state.update(Message::QueryChanged("france".to_string()));
        let listed = state.listed_countries();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "France");
    }

    #[test]
    fn empty_query_lists_active_continent() {
        let state = State::default();
        assert_eq!(
            state.listed_countries(),
            Continent::Asia.countries().to_vec()
        );
    }
}
