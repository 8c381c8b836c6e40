// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Search surface
//!
//! - [`search_bar`] - Controlled query input (submit on Enter)
//! - [`presets`] - Quick-filter keyword buttons
//! - [`results_grid`] - Paginated thumbnail grid
//! - [`pagination`] - Previous/Next controls, rendered only within bounds
//! - [`loading`] - In-flight fetch indicator state
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Reusable UI components (error banner)
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers, inputs)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod components;
pub mod design_tokens;
pub mod loading;
pub mod pagination;
pub mod presets;
pub mod results_grid;
pub mod search_bar;
pub mod styles;
pub mod theming;
pub mod widgets;
