// SPDX-License-Identifier: MPL-2.0
//! `flipbook` is a page-flip book viewer built with the Iced GUI framework.
//!
//! Page images are preloaded one at a time in page order, handed to a flip
//! engine once all of them have settled, and browsed with buttons, keys, page
//! dots or autoplay. Navigation state (button enablement and the shadows on
//! the page edges) is recomputed after every turn. A few headless tools help
//! prepare the page images.

pub mod app;
pub mod book;
pub mod config;
pub mod error;
pub mod i18n;
pub mod media;
pub mod tools;
pub mod ui;
