// SPDX-License-Identifier: MPL-2.0
//! User interface of the book window.
//!
//! Views follow the Elm-style "state down, messages up" pattern: each view
//! receives a borrowed `ViewContext` and emits [`crate::app::Message`]s.
//!
//! - [`book_view`] - Visible pages, edge shadows and the page-turn animation
//! - [`controls`] - Previous/next buttons, page dots and the autoplay toggle
//! - [`loading`] - Loading indicator and the fatal error panel
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod book_view;
pub mod controls;
pub mod design_tokens;
pub mod loading;
pub mod styles;
pub mod theming;
pub mod widgets;
