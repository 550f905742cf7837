// SPDX-License-Identifier: MPL-2.0
//! Update loop: translates messages into session operations and side effects
//! (file dialogs, file reads/writes, service calls).
//!
//! Every [`Effect`] the session hands back is dispatched here with the
//! generation tag it was issued with, and the completion message carries the
//! tag back so the session can drop stale replies.

use super::message::Message;
use super::session::Effect;
use super::App;
use crate::media::{self, EXPORT_FILE_NAME, PHOTO_EXTENSIONS};
use crate::service::{self, ServiceConfig};
use crate::ui::selector;
use iced::Task;

impl App {
    /// Handle application messages and update state.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenPhotoDialog => {
                self.load_error = None;
                Task::perform(
                    async {
                        rfd::AsyncFileDialog::new()
                            .add_filter("Photos", &PHOTO_EXTENSIONS)
                            .pick_file()
                            .await
                            .map(|handle| handle.path().to_path_buf())
                    },
                    Message::PhotoDialogResult,
                )
            }
            Message::PhotoDialogResult(None) => Task::none(),
            Message::PhotoDialogResult(Some(path)) => Task::perform(
                async move { media::read_photo(&path) },
                Message::PhotoLoaded,
            ),
            Message::PhotoLoaded(Ok(source)) => {
                self.load_error = None;
                self.loading.restart();
                let effect = self.session.submit_image(source);
                self.dispatch(effect)
            }
            Message::PhotoLoaded(Err(error)) => {
                self.load_error = Some(error);
                Task::none()
            }
            Message::ValidationResolved { generation, result } => {
                self.session.validation_resolved(generation, result);
                Task::none()
            }
            Message::Selector(msg) => match self.selector.update(msg) {
                Some(selector::Event::DestinationChosen(name)) => {
                    self.session.select_destination(name);
                    Task::none()
                }
                Some(selector::Event::TransformRequested) => self.update(Message::RequestTransform),
                None => Task::none(),
            },
            Message::RequestTransform => {
                self.loading.restart();
                let effect = self.session.request_transform();
                self.dispatch(effect)
            }
            Message::TransformResolved { generation, result } => {
                self.session.transform_resolved(generation, result);
                Task::none()
            }
            Message::Regenerate => {
                self.save_status = None;
                self.loading.restart();
                let effect = self.session.regenerate();
                self.dispatch(effect)
            }
            Message::PickNewDestination => {
                self.save_status = None;
                self.session.pick_new_destination();
                Task::none()
            }
            Message::Reset => {
                self.session.reset();
                self.selector = selector::State::default();
                self.load_error = None;
                self.save_status = None;
                Task::none()
            }
            Message::SaveResult => Task::perform(
                async {
                    rfd::AsyncFileDialog::new()
                        .set_file_name(EXPORT_FILE_NAME)
                        .add_filter("Image", &["png", "jpg", "webp"])
                        .save_file()
                        .await
                        .map(|handle| handle.path().to_path_buf())
                },
                Message::SaveDialogResult,
            ),
            Message::SaveDialogResult(None) => Task::none(),
            Message::SaveDialogResult(Some(path)) => {
                let Some(generated) = self.session.generated().cloned() else {
                    return Task::none();
                };
                Task::perform(
                    async move { generated.save_to(&path).map(|()| path) },
                    Message::SaveCompleted,
                )
            }
            Message::SaveCompleted(result) => {
                if let Err(error) = &result {
                    eprintln!("Failed to save generated image: {error}");
                }
                self.save_status = Some(result);
                Task::none()
            }
            Message::LoadingTick => {
                if self.session.is_busy() {
                    self.loading.tick();
                }
                Task::none()
            }
        }
    }

    /// Dispatches a session effect as an async task. A missing API key short
    /// circuits into the same resolution path as any other service failure.
    fn dispatch(&self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::None => Task::none(),
            Effect::Validate { image, generation } => {
                match ServiceConfig::from_config(&self.config) {
                    Err(error) => Task::done(Message::ValidationResolved {
                        generation,
                        result: Err(error),
                    }),
                    Ok(service_config) => Task::perform(
                        async move { service::validate(&service_config, &image).await },
                        move |result| Message::ValidationResolved { generation, result },
                    ),
                }
            }
            Effect::Transform {
                image,
                destination,
                generation,
            } => match ServiceConfig::from_config(&self.config) {
                Err(error) => Task::done(Message::TransformResolved {
                    generation,
                    result: Err(error),
                }),
                Ok(service_config) => Task::perform(
                    async move { service::transform(&service_config, &image, &destination).await },
                    move |result| Message::TransformResolved { generation, result },
                ),
            },
        }
    }
}
