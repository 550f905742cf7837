// SPDX-License-Identifier: MPL-2.0
//! Left panel: photo drop-in and, once a portrait is accepted, the portrait
//! card with the "new photo" reset affordance.

use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::SourceImage;
use crate::service::Validation;
use crate::ui::components::error_display::{ErrorDisplay, ErrorSeverity};
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use iced::widget::{button, container, image, text, Column, Container};
use iced::{alignment, Element, Length, Theme};

/// Intents emitted by this panel.
#[derive(Debug, Clone)]
pub enum Message {
    /// Open the photo picker.
    ChoosePhoto,
    /// Discard everything and start over.
    Reset,
}

/// Context required to render the upload panel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Last failed verdict, shown inline until the next upload.
    pub verdict: Option<&'a Validation>,
    /// Last service failure, shown as a generic apology.
    pub service_error_key: Option<&'a str>,
    /// Local file problem (unreadable, unsupported format).
    pub load_error: Option<&'a Error>,
    /// True while the validate call is in flight.
    pub validating: bool,
}

/// Renders the upload panel.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(text(ctx.i18n.tr("uploader-title")).size(typography::HEADING));

    if ctx.validating {
        content = content
            .push(text("📷").size(40))
            .push(text(ctx.i18n.tr("uploader-analyzing")).size(typography::BODY));
    } else {
        content = content.push(text("📷").size(40)).push(
            button(text(ctx.i18n.tr("uploader-choose-photo")))
                .padding(spacing::SM)
                .on_press(Message::ChoosePhoto),
        );
        content = content.push(
            text(ctx.i18n.tr("uploader-formats-hint"))
                .size(typography::CAPTION)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::GRAY_400),
                }),
        );
    }

    if let Some(verdict) = ctx.verdict {
        // Only failed verdicts linger here; a valid one advances the phase.
        let banner: ErrorDisplay<Message> = ErrorDisplay::new(ErrorSeverity::Warning)
            .title(ctx.i18n.tr("uploader-rejected-title"))
            .message(verdict.reason.clone());
        content = content.push(banner.view());
    }

    if let Some(key) = ctx.service_error_key {
        let banner: ErrorDisplay<Message> = ErrorDisplay::new(ErrorSeverity::Error)
            .message(ctx.i18n.tr(key))
            .action(ctx.i18n.tr("uploader-choose-photo"), Message::ChoosePhoto);
        content = content.push(banner.view());
    }

    if let Some(error) = ctx.load_error {
        let key = match error {
            Error::Image(image_error) => image_error.i18n_key(),
            _ => "error-photo-unreadable",
        };
        let banner: ErrorDisplay<Message> = ErrorDisplay::new(ErrorSeverity::Warning)
            .message(ctx.i18n.tr(key))
            .details(error.to_string());
        content = content.push(banner.view());
    }

    panel(content)
}

/// Renders the accepted-portrait card shown once validation has passed.
pub fn portrait_card<'a>(i18n: &'a I18n, source: &'a SourceImage) -> Element<'a, Message> {
    let portrait = image(source.handle()).height(Length::Fixed(sizing::PREVIEW_MAX_HEIGHT));

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(text(i18n.tr("uploader-portrait-title")).size(typography::HEADING))
        .push(portrait)
        .push(
            button(
                text(i18n.tr("uploader-new-photo"))
                    .size(typography::CAPTION)
                    .style(|_theme: &Theme| text::Style {
                        color: Some(palette::PRIMARY_600),
                    }),
            )
            .style(button::text)
            .on_press(Message::Reset),
        );

    panel(content)
}

fn panel(content: Column<'_, Message>) -> Element<'_, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(|theme: &Theme| container::Style {
            background: Some(iced::Background::Color(
                theme.extended_palette().background.weak.color,
            )),
            border: iced::Border {
                color: palette::GRAY_200,
                width: 1.0,
                radius: radius::LG.into(),
            },
            ..Default::default()
        })
        .into()
}
