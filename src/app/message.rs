// SPDX-License-Identifier: MPL-2.0
//! Messages flowing through the update loop and the launch flags.

use crate::book::Page;
use crate::error::Error;
use crate::media::ImageData;
use iced::window;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by [`super::App::update`].
#[derive(Debug, Clone)]
pub enum Message {
    /// The application window emitted an event; its id proves it exists.
    WindowSeen(window::Id),
    /// The in-flight page load settled.
    PageLoaded(Result<(Page, ImageData), Error>),
    Previous,
    Next,
    /// Jump to the viewport containing this 1-based page.
    GoTo(usize),
    ToggleAutoplay,
    AutoplayTick,
    /// Animation frame for the spinner and page turns.
    Tick(Instant),
    /// Restart the preload pipeline after a failure.
    Retry,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `FLIPBOOK_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Directory holding the page images; overrides `[book] directory`.
    pub book_dir: Option<PathBuf>,
    /// Page count including the cover; overrides `[book] total_pages`.
    pub total_pages: Option<usize>,
}
