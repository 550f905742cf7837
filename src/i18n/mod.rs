// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent
//! localization system. It handles language detection, translation file
//! loading, and string formatting.
//!
//! Bundled locales live in `assets/i18n/` (`en-US.ftl`, `zh-CN.ftl`); the
//! active locale is resolved from the CLI flag, then the config file, then
//! the OS locale.

pub mod fluent;
