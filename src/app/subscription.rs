// SPDX-License-Identifier: MPL-2.0
//! Timer subscription driving the loading-phrase rotation.

use super::message::Message;
use super::App;
use iced::time;
use iced::Subscription;
use std::time::Duration;

/// Seconds between loading-phrase rotations.
const PHRASE_ROTATION_SECS: u64 = 2;

impl App {
    /// Active only while a service call is in flight.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.session.is_busy() {
            time::every(Duration::from_secs(PHRASE_ROTATION_SECS)).map(|_| Message::LoadingTick)
        } else {
            Subscription::none()
        }
    }
}
