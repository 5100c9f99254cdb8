// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the book lifecycle.
//!
//! Startup runs in three stages: the pages are preloaded one `Task` at a time,
//! the assembled container is handed to the flip engine once the window
//! exists, and navigation is then driven by buttons, keys and autoplay. Any
//! failure replaces the loading text with a localized error and halts until
//! the user retries.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::book::{
    AutoplayInterval, CacheConfig, Controller, DiskLoader, EngineConfig, PageCache, PageContainer,
    PageLoader, PathRule, Preloader, SharedPageCache,
};
use crate::config::{self, Config, DEFAULT_ENGINE};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1040;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Where the book stands in its lifecycle.
enum Stage {
    /// Pages are being preloaded.
    Loading(Preloader),
    /// Every page is loaded but no window has reported in yet.
    AwaitingWindow(PageContainer),
    /// The engine is initialized and navigation is live.
    Ready,
    /// A fatal error halted startup.
    Failed(Error),
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    theme_mode: ThemeMode,
    rule: PathRule,
    configured_total: Option<usize>,
    load_timeout: Duration,
    engine_config: EngineConfig,
    engine_name: String,
    window_id: Option<window::Id>,
    cache: SharedPageCache,
    loader: Arc<dyn PageLoader>,
    stage: Stage,
    controller: Controller,
    autoplay: bool,
    autoplay_interval: AutoplayInterval,
    spinner_rotation: f32,
    last_tick: Option<Instant>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stage = match &self.stage {
            Stage::Loading(preloader) => format!("loading {}/{}", preloader.loaded(), preloader.total()),
            Stage::AwaitingWindow(_) => "awaiting window".to_string(),
            Stage::Ready => "ready".to_string(),
            Stage::Failed(err) => format!("failed: {err}"),
        };
        f.debug_struct("App")
            .field("stage", &stage)
            .field("controller", &self.controller)
            .field("autoplay", &self.autoplay)
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    #[allow(clippy::cast_precision_loss)]
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot closure; the flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads preferences, resolves the book and starts preloading page 0.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        if let Some(key) = config_warning {
            log::warn!("{key}");
        }
        let mut app = Self::with_config(config, flags);
        let task = app.start_preload();
        (app, task)
    }

    /// Builds the application state without starting any task.
    fn with_config(mut config: Config, flags: Flags) -> Self {
        if let Some(dir) = flags.book_dir {
            config.book.directory = Some(dir);
        }
        if flags.total_pages.is_some() {
            config.book.total_pages = flags.total_pages;
        }
        let i18n = I18n::new(flags.lang, &config);

        let cache = PageCache::shared(CacheConfig::default());
        let loader: Arc<dyn PageLoader> = Arc::new(DiskLoader);
        Self::from_parts(config, i18n, cache, loader)
    }

    fn from_parts(
        config: Config,
        i18n: I18n,
        cache: SharedPageCache,
        loader: Arc<dyn PageLoader>,
    ) -> Self {
        let autoplay_interval = AutoplayInterval::new(
            config
                .autoplay
                .interval_secs
                .unwrap_or(config::DEFAULT_AUTOPLAY_INTERVAL_SECS),
        );
        Self {
            i18n,
            theme_mode: config.general.theme_mode,
            rule: config.book.path_rule(),
            configured_total: config.book.total_pages,
            load_timeout: config.book.load_timeout(),
            engine_config: EngineConfig::from(&config.display),
            engine_name: config
                .display
                .engine
                .clone()
                .unwrap_or_else(|| DEFAULT_ENGINE.to_string()),
            window_id: None,
            cache,
            loader,
            stage: Stage::Failed(Error::EmptyBook),
            controller: Controller::new(),
            autoplay: false,
            autoplay_interval,
            spinner_rotation: 0.0,
            last_tick: None,
            config,
        }
    }

    /// Resets the book and issues the load of page 0.
    fn start_preload(&mut self) -> Task<Message> {
        let total = self.configured_total.unwrap_or_else(|| self.rule.discover());
        log::debug!(
            "preloading {} pages from {}",
            total,
            self.rule.directory().display()
        );
        self.controller = Controller::new();
        self.stage = Stage::Loading(Preloader::new(&self.rule, total));
        self.request_next_page()
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match &self.stage {
            Stage::Ready => format!(
                "{} - {app_name}",
                crate::ui::controls::page_label(&self.i18n, &self.controller)
            ),
            _ => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self)
    }

    /// Whether the animation tick is needed.
    fn is_animating(&self) -> bool {
        match self.stage {
            Stage::Loading(_) | Stage::AwaitingWindow(_) => true,
            Stage::Ready => self.controller.transition().is_some(),
            Stage::Failed(_) => false,
        }
    }
}
