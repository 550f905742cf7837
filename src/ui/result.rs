// SPDX-License-Identifier: MPL-2.0
//! Right panel once a makeover is ready: the generated image next to its
//! destination, with regenerate / new-destination / save actions.

use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::GeneratedImage;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use iced::widget::{button, container, image, text, Column, Row};
use iced::{alignment, Element, Length, Theme};
use std::path::PathBuf;

/// Intents emitted by this panel.
#[derive(Debug, Clone)]
pub enum Message {
    /// Run the transform again with the same photo and destination.
    Regenerate,
    /// Back to the selector, keeping the photo.
    NewDestination,
    /// Save the generated image to disk.
    Save,
}

/// Context required to render the result panel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub generated: &'a GeneratedImage,
    pub destination: &'a str,
    /// Outcome of the last save, if any.
    pub save_status: Option<&'a Result<PathBuf, Error>>,
}

/// Renders the result panel.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let headline = text(format!(
        "{} — {}",
        i18n.tr("result-title"),
        ctx.destination
    ))
    .size(typography::HEADING);

    let picture = image(ctx.generated.handle()).height(Length::Fixed(sizing::PREVIEW_MAX_HEIGHT));

    let actions = Row::new()
        .spacing(spacing::SM)
        .push(
            button(text(i18n.tr("result-regenerate")).size(typography::BODY))
                .padding(spacing::SM)
                .style(button::secondary)
                .on_press(Message::Regenerate),
        )
        .push(
            button(text(i18n.tr("result-new-destination")).size(typography::BODY))
                .padding(spacing::SM)
                .style(button::secondary)
                .on_press(Message::NewDestination),
        )
        .push(
            button(text(i18n.tr("result-save")).size(typography::BODY))
                .padding(spacing::SM)
                .style(button::primary)
                .on_press(Message::Save),
        );

    let mut content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(headline)
        .push(picture)
        .push(actions);

    if let Some(status) = ctx.save_status {
        content = content.push(save_note(i18n, status));
    }

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn save_note<'a>(i18n: &I18n, status: &Result<PathBuf, Error>) -> Element<'a, Message> {
    let (note, color) = match status {
        Ok(path) => (
            format!("{} {}", i18n.tr("result-saved"), path.display()),
            palette::SUCCESS_500,
        ),
        Err(error) => (
            format!("{} ({})", i18n.tr("result-save-failed"), error),
            palette::ERROR_500,
        ),
    };
    text(note)
        .size(typography::CAPTION)
        .style(move |_theme: &Theme| text::Style { color: Some(color) })
        .into()
}
