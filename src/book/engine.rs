// SPDX-License-Identifier: MPL-2.0
//! Flip engines: the component that owns the current page and animates turns.
//!
//! The controller talks to engines only through [`FlipEngine`]. An engine is
//! initialized with the page count, accepts navigation [`Command`]s and reports
//! [`EngineEvent`]s: `Turning` when a transition starts and `Turned` once it
//! completes. Time is passed in explicitly so transitions can be driven by the
//! UI tick and replayed deterministically in tests.

use super::viewport::{self, Viewport};
use crate::config::{
    DisplayConfig, DisplayMode, DEFAULT_PAGE_HEIGHT, DEFAULT_PAGE_WIDTH, DEFAULT_TRANSITION_MS,
    MAX_TRANSITION_MS,
};
use crate::error::{Error, Result};
use std::time::{Duration, Instant};

/// Names accepted by [`by_name`].
pub const ENGINES: &[&str] = &["spread"];

/// Navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Previous,
    Next,
    /// Turn to the viewport containing this 1-based page.
    Page(usize),
}

/// Lifecycle notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineEvent {
    /// A transition towards `page` started.
    Turning { page: usize },
    /// A transition completed; `page` is now current and `view` visible.
    Turned { page: usize, view: Viewport },
}

/// Geometry and timing handed to the engine at initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub width: u32,
    pub height: u32,
    pub centered: bool,
    pub duration: Duration,
    pub mode: DisplayMode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_PAGE_WIDTH,
            height: DEFAULT_PAGE_HEIGHT,
            centered: true,
            duration: Duration::from_millis(DEFAULT_TRANSITION_MS),
            mode: DisplayMode::Double,
        }
    }
}

impl From<&DisplayConfig> for EngineConfig {
    fn from(display: &DisplayConfig) -> Self {
        let transition_ms = display
            .transition_ms
            .unwrap_or(DEFAULT_TRANSITION_MS)
            .min(MAX_TRANSITION_MS);
        Self {
            width: display.page_width.unwrap_or(DEFAULT_PAGE_WIDTH).max(1),
            height: display.page_height.unwrap_or(DEFAULT_PAGE_HEIGHT).max(1),
            centered: display.centered.unwrap_or(true),
            duration: Duration::from_millis(transition_ms),
            mode: display.mode.unwrap_or_default(),
        }
    }
}

/// Direction of a running transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// A page turn in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Viewport,
    pub to: Viewport,
    pub target: usize,
    pub direction: Direction,
    started: Instant,
    duration: Duration,
}

impl Transition {
    /// Completion ratio in `0.0..=1.0`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }
}

/// A page-turning component.
pub trait FlipEngine: Send {
    /// Registered name.
    fn name(&self) -> &'static str;

    /// Prepares the engine for `pages` pages and shows page 1.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyBook`] when `pages` is 0.
    fn initialize(&mut self, pages: usize, config: &EngineConfig) -> Result<()>;

    /// Current 1-based page.
    fn current_page(&self) -> usize;

    /// Pages visible for the current page.
    fn view(&self) -> Viewport;

    /// Requests navigation. Returns `Turning` when a transition starts.
    ///
    /// Commands that would not change the viewport, or that arrive while a
    /// transition is running, are dropped.
    fn command(&mut self, command: Command, now: Instant) -> Option<EngineEvent>;

    /// Advances a running transition. Returns `Turned` once it completes.
    fn tick(&mut self, now: Instant) -> Option<EngineEvent>;

    /// The running transition, if any.
    fn transition(&self) -> Option<&Transition>;
}

/// Resolves an engine by its registered name (case-insensitive).
#[must_use]
pub fn by_name(name: &str) -> Option<Box<dyn FlipEngine>> {
    if name.trim().eq_ignore_ascii_case(SpreadEngine::NAME) {
        Some(Box::new(SpreadEngine::new()))
    } else {
        None
    }
}

/// Built-in engine turning whole viewports with a timed transition.
#[derive(Debug, Default)]
pub struct SpreadEngine {
    total: usize,
    current: usize,
    config: EngineConfig,
    transition: Option<Transition>,
}

impl SpreadEngine {
    pub const NAME: &'static str = "spread";

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn target_for(&self, command: Command) -> Option<usize> {
        let mode = self.config.mode;
        match command {
            Command::Previous => viewport::previous_target(self.current, self.total, mode),
            Command::Next => viewport::next_target(self.current, self.total, mode),
            Command::Page(page) => Some(page.clamp(1, self.total)),
        }
    }
}

impl FlipEngine for SpreadEngine {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn initialize(&mut self, pages: usize, config: &EngineConfig) -> Result<()> {
        if pages == 0 {
            return Err(Error::EmptyBook);
        }
        self.total = pages;
        self.current = 1;
        self.config = *config;
        self.transition = None;
        Ok(())
    }

    fn current_page(&self) -> usize {
        self.current
    }

    fn view(&self) -> Viewport {
        Viewport::for_page(self.current, self.total, self.config.mode)
    }

    fn command(&mut self, command: Command, now: Instant) -> Option<EngineEvent> {
        if self.total == 0 || self.transition.is_some() {
            return None;
        }
        let requested = self.target_for(command)?;
        let from = self.view();
        let to = Viewport::for_page(requested, self.total, self.config.mode);
        if to == from {
            return None;
        }

        // A forward turn lands on the last page of the new view, so the
        // final spread reports the last page of the book.
        let (direction, target) = if requested > self.current {
            (Direction::Forward, to.last())
        } else {
            (Direction::Backward, requested)
        };
        self.transition = Some(Transition {
            from,
            to,
            target,
            direction,
            started: now,
            duration: self.config.duration,
        });
        Some(EngineEvent::Turning { page: target })
    }

    fn tick(&mut self, now: Instant) -> Option<EngineEvent> {
        let transition = self.transition?;
        if !transition.is_finished(now) {
            return None;
        }
        self.transition = None;
        self.current = transition.target;
        Some(EngineEvent::Turned {
            page: self.current,
            view: transition.to,
        })
    }

    fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }
}
