// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared between panels.

pub mod error_display;
