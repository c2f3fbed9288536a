// SPDX-License-Identifier: MPL-2.0
//! `iced_notify` is a transient notification (toast) subsystem for a
//! rich-text editing surface, built with the Iced GUI framework's geometry
//! and widget vocabulary.
//!
//! The host surface supplies geometry, events, and configuration through
//! the [`surface`] interfaces; the subsystem decides where the notification
//! stack sits, runs each notification's lifecycle and auto-dismiss timer,
//! and renders the stack. See [`ui::notifications`] for the entry points.

#![doc(html_root_url = "https://docs.rs/iced_notify/0.1.0")]

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod i18n;
pub mod surface;
pub mod timing;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
