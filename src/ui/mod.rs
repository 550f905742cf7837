// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Panels
//!
//! - [`uploader`] - Photo drop-in panel and the accepted-portrait card
//! - [`selector`] - Destination picker (hot row, continent tabs, search)
//! - [`result`] - Generated makeover with regenerate/new-destination/save
//! - [`loading`] - Rotating status phrases while a call is in flight
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Reusable UI components (error display)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod components;
pub mod design_tokens;
pub mod loading;
pub mod result;
pub mod selector;
pub mod uploader;
