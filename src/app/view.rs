// SPDX-License-Identifier: MPL-2.0
//! Root layout: a header over two panels. The left panel tracks the photo
//! (upload form or accepted portrait), the right panel tracks the journey
//! (destination picker, busy indicator, or result).

use super::message::Message;
use super::session::Phase;
use super::App;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::{loading, result, selector, uploader};
use iced::widget::{container, text, Column, Row};
use iced::{alignment, Element, Length, Theme};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let header = Column::new()
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Center)
            .push(
                text(self.i18n.tr("window-title"))
                    .size(typography::TITLE)
                    .style(|_theme: &Theme| text::Style {
                        color: Some(palette::PRIMARY_600),
                    }),
            )
            .push(
                text(self.i18n.tr("app-tagline"))
                    .size(typography::BODY)
                    .style(|_theme: &Theme| text::Style {
                        color: Some(palette::GRAY_400),
                    }),
            );

        let panels = Row::new()
            .spacing(spacing::LG)
            .push(container(self.photo_panel()).width(Length::FillPortion(1)))
            .push(container(self.journey_panel()).width(Length::FillPortion(1)));

        container(
            Column::new()
                .spacing(spacing::LG)
                .push(header)
                .push(panels),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .into()
    }

    fn photo_panel(&self) -> Element<'_, Message> {
        let panel = match self.session.phase() {
            Phase::Uploading {
                verdict,
                last_error,
                ..
            } => uploader::view(uploader::ViewContext {
                i18n: &self.i18n,
                verdict: verdict.as_ref(),
                service_error_key: last_error.as_ref().map(|error| error.i18n_key()),
                load_error: self.load_error.as_ref(),
                validating: false,
            }),
            Phase::Validating { .. } => uploader::view(uploader::ViewContext {
                i18n: &self.i18n,
                verdict: None,
                service_error_key: None,
                load_error: None,
                validating: true,
            }),
            Phase::Selecting { source, .. }
            | Phase::Transforming { source, .. }
            | Phase::Result { source, .. } => uploader::portrait_card(&self.i18n, source),
        };

        panel.map(|message| match message {
            uploader::Message::ChoosePhoto => Message::OpenPhotoDialog,
            uploader::Message::Reset => Message::Reset,
        })
    }

    fn journey_panel(&self) -> Element<'_, Message> {
        match self.session.phase() {
            Phase::Uploading { .. } | Phase::Validating { .. } => {
                self.selector_panel(false, None)
            }
            Phase::Selecting { last_error, .. } => {
                self.selector_panel(true, last_error.as_ref())
            }
            Phase::Transforming { .. } => loading::view(&self.i18n, &self.loading),
            Phase::Result {
                destination,
                generated,
                ..
            } => result::view(result::ViewContext {
                i18n: &self.i18n,
                generated,
                destination,
                save_status: self.save_status.as_ref(),
            })
            .map(|message| match message {
                result::Message::Regenerate => Message::Regenerate,
                result::Message::NewDestination => Message::PickNewDestination,
                result::Message::Save => Message::SaveResult,
            }),
        }
    }

    fn selector_panel<'a>(
        &'a self,
        can_transform: bool,
        last_error: Option<&'a crate::error::ServiceError>,
    ) -> Element<'a, Message> {
        selector::view(selector::ViewContext {
            i18n: &self.i18n,
            state: &self.selector,
            selected: self.session.destination(),
            can_transform,
            last_error,
        })
        .map(Message::Selector)
    }
}
