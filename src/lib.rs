// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a photo search client for the Unsplash API built with the
//! Iced GUI framework.
//!
//! It provides keyword search with preset filters, a paginated thumbnail grid,
//! and demonstrates internationalization with Fluent, user preference
//! management, and modular UI design.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod search;
pub mod ui;
