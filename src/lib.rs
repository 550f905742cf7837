// SPDX-License-Identifier: MPL-2.0
//! `culture_lens` is a portrait makeover app built with the Iced GUI framework.
//!
//! Upload a portrait, pick a destination country, and a generative image
//! service re-dresses the photo in that destination's traditional attire and
//! scenery. The workflow itself lives in a pure state machine under [`app`];
//! the service wire format lives under [`service`].

#![doc(html_root_url = "https://docs.rs/culture_lens/0.1.0")]

pub mod app;
pub mod config;
pub mod destinations;
pub mod error;
pub mod i18n;
pub mod media;
pub mod service;
pub mod ui;
