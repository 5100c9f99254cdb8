// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.

use super::{App, Message, Stage};
use crate::book::{load_page, Dependencies, Phase, Progress};
use crate::config;
use crate::error::Error;
use crate::ui::widgets::animated_spinner;
use iced::Task;
use std::time::Instant;

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::WindowSeen(id) => {
            if app.window_id.is_none() {
                log::debug!("window {id:?} available");
                app.window_id = Some(id);
            }
            if matches!(app.stage, Stage::AwaitingWindow(_)) {
                app.initialize();
            }
            Task::none()
        }
        Message::PageLoaded(outcome) => app.handle_page_loaded(outcome),
        Message::Previous => {
            app.controller.previous(Instant::now());
            Task::none()
        }
        Message::Next => {
            app.controller.next(Instant::now());
            Task::none()
        }
        Message::GoTo(page) => {
            app.controller.go_to(page, Instant::now());
            Task::none()
        }
        Message::ToggleAutoplay => {
            app.toggle_autoplay();
            Task::none()
        }
        Message::AutoplayTick => {
            app.autoplay_step(Instant::now());
            Task::none()
        }
        Message::Tick(now) => {
            if let Some(last) = app.last_tick {
                let elapsed = now.saturating_duration_since(last).as_secs_f32();
                app.spinner_rotation = animated_spinner::advance(app.spinner_rotation, elapsed);
            }
            app.last_tick = Some(now);
            app.controller.tick(now);
            Task::none()
        }
        Message::Retry => {
            if matches!(app.stage, Stage::Failed(_)) {
                log::debug!("retrying preload");
                app.start_preload()
            } else {
                Task::none()
            }
        }
    }
}

impl App {
    /// Issues the load of the next page, or finishes the pipeline.
    pub(super) fn request_next_page(&mut self) -> Task<Message> {
        let Stage::Loading(preloader) = &mut self.stage else {
            return Task::none();
        };

        if let Some(page) = preloader.next_request() {
            log::debug!(
                "loading page {} from {}",
                page.index(),
                page.image_path().display()
            );
            let loader = self.loader.clone();
            let cache = self.cache.clone();
            let timeout = self.load_timeout;
            return Task::perform(
                load_page(loader, Some(cache), page, timeout),
                Message::PageLoaded,
            );
        }

        if preloader.progress() == Progress::Complete {
            self.finish_preload();
        }
        Task::none()
    }

    fn handle_page_loaded(
        &mut self,
        outcome: Result<(crate::book::Page, crate::media::ImageData), Error>,
    ) -> Task<Message> {
        let Stage::Loading(preloader) = &mut self.stage else {
            log::debug!("dropping page load outcome outside of preload");
            return Task::none();
        };

        match preloader.complete(outcome) {
            Ok(_) => self.request_next_page(),
            Err(err) => {
                self.fail(err);
                Task::none()
            }
        }
    }

    fn finish_preload(&mut self) {
        let stage = std::mem::replace(&mut self.stage, Stage::Ready);
        let Stage::Loading(preloader) = stage else {
            self.stage = stage;
            return;
        };
        match preloader.into_container() {
            Ok(container) => {
                self.stage = Stage::AwaitingWindow(container);
                if self.window_id.is_some() {
                    self.initialize();
                } else {
                    log::debug!("pages loaded, waiting for the window");
                }
            }
            Err(err) => self.fail(err),
        }
    }

    /// Hands the assembled pages to the flip engine.
    pub(super) fn initialize(&mut self) {
        let stage = std::mem::replace(&mut self.stage, Stage::Ready);
        let Stage::AwaitingWindow(container) = stage else {
            self.stage = stage;
            return;
        };

        let dependencies = Dependencies::resolve(self.window_id, &self.engine_name);
        match self
            .controller
            .initialize(container, dependencies, &self.engine_config)
        {
            Ok(()) => {
                log::debug!("book ready with {} pages", self.controller.total());
                self.autoplay = self.config.autoplay.enabled.unwrap_or(false);
            }
            Err(err) => self.fail(err),
        }
    }

    fn fail(&mut self, err: Error) {
        if err.is_load_error() {
            log::error!("preload aborted: {err}");
        } else {
            log::error!("{err}");
        }
        self.autoplay = false;
        self.stage = Stage::Failed(err);
    }

    fn toggle_autoplay(&mut self) {
        if !self.controller.is_ready() {
            return;
        }
        self.autoplay = !self.autoplay;
        if self.autoplay && self.controller.at_end() {
            self.controller.go_to(1, Instant::now());
        }

        self.config.autoplay.enabled = Some(self.autoplay);
        if let Err(err) = config::save(&self.config) {
            log::warn!("could not persist autoplay preference: {err}");
        }
    }

    fn autoplay_step(&mut self, now: Instant) {
        if !self.autoplay || self.controller.phase() != Phase::Idle {
            return;
        }
        if self.controller.at_end() {
            log::debug!("autoplay reached the last page");
            self.autoplay = false;
            return;
        }
        self.controller.next(now);
    }
}
