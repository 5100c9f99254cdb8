// SPDX-License-Identifier: MPL-2.0
//! The book: page records, the preload pipeline, the flip engine and the
//! controller that keeps navigation state in sync with it.

pub mod autoplay;
pub mod cache;
pub mod container;
pub mod controller;
pub mod engine;
pub mod page;
pub mod preload;
pub mod shadow;
pub mod viewport;

pub use autoplay::AutoplayInterval;
pub use cache::{CacheConfig, PageCache, SharedPageCache};
pub use container::{AttachedPage, PageContainer};
pub use controller::{Controller, Dependencies, Phase};
pub use engine::{Command, EngineConfig, EngineEvent, FlipEngine, SpreadEngine, Transition};
pub use page::{Page, PathRule};
pub use preload::{load_page, preload_all, DiskLoader, PageLoader, Preloader, Progress};
pub use shadow::{NavButtons, Shadow, ShadowState};
pub use viewport::Viewport;
