// SPDX-License-Identifier: MPL-2.0
//! Book controller: initialization, navigation and UI-state synchronization.
//!
//! The controller owns the assembled [`PageContainer`] and the flip engine.
//! It stays inert until [`Controller::initialize`] succeeds; after that every
//! completed transition recomputes the navigation buttons and page shadows
//! from the engine's current page and viewport.

use super::container::{AttachedPage, PageContainer};
use super::engine::{self, Command, EngineConfig, EngineEvent, FlipEngine, Transition};
use super::shadow::{NavButtons, ShadowState};
use super::viewport::Viewport;
use crate::error::{Dependency, Error, Result};
use iced::window;
use std::time::Instant;

/// Prerequisites checked before the engine receives any page.
pub struct Dependencies {
    /// Window the book is displayed in.
    pub ui_runtime: Option<window::Id>,
    /// Engine resolved from the configured name.
    pub flip_engine: Option<Box<dyn FlipEngine>>,
    /// Name the engine was requested under.
    pub engine_name: String,
}

impl Dependencies {
    /// Resolves the engine registered as `engine_name`.
    #[must_use]
    pub fn resolve(ui_runtime: Option<window::Id>, engine_name: &str) -> Self {
        Self {
            ui_runtime,
            flip_engine: engine::by_name(engine_name),
            engine_name: engine_name.to_string(),
        }
    }
}

impl std::fmt::Debug for Dependencies {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dependencies")
            .field("ui_runtime", &self.ui_runtime)
            .field("flip_engine", &self.flip_engine.as_ref().map(|e| e.name()))
            .field("engine_name", &self.engine_name)
            .finish()
    }
}

/// Whether a page turn is animating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Transitioning,
}

/// Single owner of the book's runtime state.
#[derive(Default)]
pub struct Controller {
    ready: bool,
    phase: Phase,
    current_page: usize,
    viewport: Option<Viewport>,
    nav: NavButtons,
    shadows: ShadowState,
    container: PageContainer,
    engine: Option<Box<dyn FlipEngine>>,
}

impl Controller {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hands the assembled pages to the flip engine and shows page 1.
    ///
    /// # Errors
    ///
    /// - [`Error::DependencyMissing`] when the UI runtime or the engine is
    ///   absent (the runtime is checked first). Nothing is initialized.
    /// - [`Error::EmptyBook`] when `container` holds no page.
    /// - Any error reported by the engine's own initialization.
    pub fn initialize(
        &mut self,
        container: PageContainer,
        dependencies: Dependencies,
        config: &EngineConfig,
    ) -> Result<()> {
        if dependencies.ui_runtime.is_none() {
            return Err(Error::DependencyMissing(Dependency::UiRuntime));
        }
        let Some(mut engine) = dependencies.flip_engine else {
            return Err(Error::DependencyMissing(Dependency::FlipEngine(
                dependencies.engine_name,
            )));
        };
        if container.is_empty() {
            return Err(Error::EmptyBook);
        }

        engine.initialize(container.len(), config)?;
        log::debug!(
            "{} engine initialized with {} pages",
            engine.name(),
            container.len()
        );

        self.current_page = engine.current_page();
        self.viewport = Some(engine.view());
        self.container = container;
        self.engine = Some(engine);
        self.phase = Phase::Idle;
        self.sync();
        self.ready = true;
        Ok(())
    }

    pub fn previous(&mut self, now: Instant) {
        self.command(Command::Previous, now);
    }

    pub fn next(&mut self, now: Instant) {
        self.command(Command::Next, now);
    }

    /// Turns to the viewport containing the 1-based `page`.
    pub fn go_to(&mut self, page: usize, now: Instant) {
        self.command(Command::Page(page), now);
    }

    fn command(&mut self, command: Command, now: Instant) {
        if !self.ready {
            log::debug!("ignoring {command:?}: book not ready");
            return;
        }
        let event = self
            .engine
            .as_mut()
            .and_then(|engine| engine.command(command, now));
        if let Some(event) = event {
            self.handle_event(event);
        }
    }

    /// Advances a running transition.
    pub fn tick(&mut self, now: Instant) {
        let event = self.engine.as_mut().and_then(|engine| engine.tick(now));
        if let Some(event) = event {
            self.handle_event(event);
        }
    }

    fn handle_event(&mut self, event: EngineEvent) {
        match event {
            EngineEvent::Turning { page } => self.on_turning(page),
            EngineEvent::Turned { page, view } => self.on_turned(page, view),
        }
    }

    /// Transition start notification. Diagnostic only.
    pub fn on_turning(&mut self, page: usize) {
        if !self.ready {
            return;
        }
        log::trace!("turning to page {page}");
        self.phase = Phase::Transitioning;
    }

    /// Transition complete notification: `page` is current and `view` visible.
    pub fn on_turned(&mut self, page: usize, view: Viewport) {
        if !self.ready {
            return;
        }
        log::trace!("turned to page {page}, view {view:?}");
        self.current_page = page;
        self.viewport = Some(view);
        self.phase = Phase::Idle;
        self.sync();
    }

    fn sync(&mut self) {
        let total = self.total();
        self.nav = NavButtons::for_page(self.current_page, total);
        if let Some(view) = self.viewport {
            self.shadows.recompute(self.current_page, &view, total);
        }
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current 1-based page; 0 before initialization.
    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    #[must_use]
    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    #[must_use]
    pub fn nav_buttons(&self) -> NavButtons {
        self.nav
    }

    #[must_use]
    pub fn shadows(&self) -> &ShadowState {
        &self.shadows
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.container.len()
    }

    /// Page by 1-based number.
    #[must_use]
    pub fn page(&self, number: usize) -> Option<&AttachedPage> {
        self.container.by_number(number)
    }

    #[must_use]
    pub fn transition(&self) -> Option<&Transition> {
        self.engine.as_ref().and_then(|engine| engine.transition())
    }

    /// Whether the last page of the book is visible.
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.viewport
            .is_some_and(|view| view.last() >= self.total())
    }
}

impl std::fmt::Debug for Controller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Controller")
            .field("ready", &self.ready)
            .field("phase", &self.phase)
            .field("current_page", &self.current_page)
            .field("viewport", &self.viewport)
            .field("total", &self.container.len())
            .field("engine", &self.engine.as_ref().map(|e| e.name()))
            .finish()
    }
}
