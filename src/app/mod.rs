// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! `App` owns the workflow session plus everything that is presentation or
//! plumbing rather than workflow: localization, the loaded config, the
//! selector and loading panels' presentation state, and the transient local
//! errors (file read, save) that never concern the session.

mod message;
mod session;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use session::{Effect, Phase, Session};

use crate::config::{self, Config};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media;
use crate::ui::{loading, selector};
use iced::{window, Task, Theme};
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    session: Session,
    selector: selector::State,
    loading: loading::State,
    /// Local file problem from the last photo read, shown in the upload
    /// panel. Cleared when the next photo is picked.
    load_error: Option<Error>,
    /// Outcome of the last save, shown under the result actions.
    save_status: Option<Result<PathBuf, Error>>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            config: Config::default(),
            session: Session::new(),
            selector: selector::State::default(),
            loading: loading::State::default(),
            load_error: None,
            save_status: None,
        }
    }
}

fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and optionally submits a portrait passed
    /// on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_else(|error| {
            eprintln!("Failed to load config: {error}");
            Config::default()
        });
        let i18n = I18n::new(flags.lang.clone(), &config);

        let app = App {
            i18n,
            config,
            ..Self::default()
        };

        let task = match flags.file_path {
            Some(path_str) => {
                let path = PathBuf::from(path_str);
                Task::perform(
                    async move { media::read_photo(&path) },
                    Message::PhotoLoaded,
                )
            }
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.session.destination() {
            Some(destination) => format!("{destination} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;
    use crate::media::SourceImage;
    use crate::service::Validation;

    fn portrait() -> SourceImage {
        SourceImage::new(vec![1, 2, 3], "image/png")
    }

    #[test]
    fn default_app_starts_pristine() {
        let app = App::default();
        assert!(matches!(app.session.phase(), Phase::Uploading { .. }));
        assert!(app.load_error.is_none());
        assert!(app.save_status.is_none());
    }

    #[test]
    fn title_without_destination_is_the_app_name() {
        let app = App::default();
        assert_eq!(app.title(), app.i18n.tr("window-title"));
    }

    #[test]
    fn title_includes_the_chosen_destination() {
        let mut app = App::default();
        let _ = app.update(Message::Selector(crate::ui::selector::Message::CountryPicked(
            "Japan".to_string(),
        )));
        assert!(app.title().starts_with("Japan - "));
    }

    #[test]
    fn photo_load_failure_is_kept_for_the_upload_panel() {
        let mut app = App::default();
        let _ = app.update(Message::PhotoLoaded(Err(Error::Io("gone".into()))));
        assert!(app.load_error.is_some());
        assert!(matches!(app.session.phase(), Phase::Uploading { .. }));
    }

    #[test]
    fn loaded_photo_enters_validation() {
        let mut app = App::default();
        let _ = app.update(Message::PhotoLoaded(Ok(portrait())));
        assert!(app.session.is_busy());
    }

    #[test]
    fn reset_clears_transient_errors_and_selector_state() {
        let mut app = App::default();
        let _ = app.update(Message::PhotoLoaded(Err(Error::Io("gone".into()))));
        let _ = app.update(Message::Selector(crate::ui::selector::Message::QueryChanged(
            "jap".to_string(),
        )));

        let _ = app.update(Message::Reset);

        assert!(app.load_error.is_none());
        assert!(app.selector.query().is_empty());
        assert!(matches!(app.session.phase(), Phase::Uploading { .. }));
    }

    #[test]
    fn resolved_validation_advances_the_session() {
        let mut app = App::default();
        let _ = app.update(Message::PhotoLoaded(Ok(portrait())));
        let _ = app.update(Message::ValidationResolved {
            generation: 1,
            result: Ok(Validation {
                is_valid: true,
                reason: "valid portrait".to_string(),
            }),
        });
        assert!(matches!(app.session.phase(), Phase::Selecting { .. }));
    }

    #[test]
    fn resolution_without_a_call_in_flight_is_ignored() {
        let mut app = App::default();
        let _ = app.update(Message::Selector(crate::ui::selector::Message::CountryPicked(
            "Japan".to_string(),
        )));
        let _ = app.update(Message::ValidationResolved {
            generation: 0,
            result: Err(ServiceError::MissingApiKey),
        });
        assert!(matches!(app.session.phase(), Phase::Uploading { .. }));
        assert!(app.session.last_error().is_none());
        // A destination chosen ahead of the upload must not be wiped.
        assert_eq!(app.session.destination(), Some("Japan"));
    }

    #[test]
    fn loading_tick_only_rotates_while_busy() {
        let mut app = App::default();
        let before = app.loading.phrase_key();
        let _ = app.update(Message::LoadingTick);
        assert_eq!(app.loading.phrase_key(), before);

        let _ = app.update(Message::PhotoLoaded(Ok(portrait())));
        let _ = app.update(Message::LoadingTick);
        assert_ne!(app.loading.phrase_key(), before);
    }
}
