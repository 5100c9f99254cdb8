// SPDX-License-Identifier: MPL-2.0
//! Preloads a book without opening a window.
//!
//! Runs the same sequential pipeline as the viewer and then initializes the
//! configured flip engine on the result, so a broken page, a slow page or a
//! misspelled engine name shows up before anyone opens the book.

use crate::book::{engine, preload_all, DiskLoader, EngineConfig, PageLoader};
use crate::config::{Config, DEFAULT_ENGINE};
use crate::error::{Dependency, Error, Result};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Summary of a successful check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub directory: PathBuf,
    pub pages: usize,
    pub engine: &'static str,
    pub elapsed: Duration,
}

impl std::fmt::Display for CheckReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} pages from {} loaded in {} ms, engine '{}' ready",
            self.pages,
            self.directory.display(),
            self.elapsed.as_millis(),
            self.engine
        )
    }
}

/// Checks the book described by `config` using pages decoded from disk.
///
/// # Errors
///
/// Returns the first pipeline error: a page load failure or timeout, an
/// empty book, or an unknown flip engine.
pub async fn check_book(config: &Config) -> Result<CheckReport> {
    check_book_with(config, Arc::new(DiskLoader)).await
}

/// Checks the book described by `config` using `loader` for page images.
///
/// # Errors
///
/// See [`check_book`].
pub async fn check_book_with(config: &Config, loader: Arc<dyn PageLoader>) -> Result<CheckReport> {
    let rule = config.book.path_rule();
    let total = config.book.total_pages.unwrap_or_else(|| rule.discover());
    let started = Instant::now();

    let container = preload_all(&rule, total, loader, None, config.book.load_timeout(), |loaded, total| {
        log::info!("loaded page {loaded} of {total}");
    })
    .await?;

    let engine_name = config.display.engine.as_deref().unwrap_or(DEFAULT_ENGINE);
    let mut flip_engine = engine::by_name(engine_name)
        .ok_or_else(|| Error::DependencyMissing(Dependency::FlipEngine(engine_name.to_string())))?;
    flip_engine.initialize(container.len(), &EngineConfig::from(&config.display))?;

    Ok(CheckReport {
        directory: rule.directory().to_path_buf(),
        pages: container.len(),
        engine: flip_engine.name(),
        elapsed: started.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    fn book_config(dir: &std::path::Path, pages: usize) -> Config {
        let mut config = Config::default();
        config.book.directory = Some(dir.to_path_buf());
        let rule = config.book.path_rule();
        for index in 0..pages {
            RgbaImage::from_pixel(4, 6, Rgba([250, 250, 240, 255]))
                .save(rule.path_for(index))
                .expect("write page");
        }
        config
    }

    #[tokio::test]
    async fn discovers_and_loads_every_page() {
        let dir = tempdir().expect("temp dir");
        let config = book_config(dir.path(), 5);

        let report = check_book(&config).await.expect("book checks out");

        assert_eq!(report.pages, 5);
        assert_eq!(report.engine, "spread");
        assert_eq!(report.directory, dir.path());
    }

    #[tokio::test]
    async fn corrupt_page_names_the_file() {
        let dir = tempdir().expect("temp dir");
        let mut config = book_config(dir.path(), 3);
        std::fs::write(config.book.path_rule().path_for(1), b"garbage").expect("corrupt page");
        config.book.total_pages = Some(3);

        match check_book(&config).await {
            Err(Error::LoadFailure { path, .. }) => assert!(path.ends_with("page_001.png")),
            other => panic!("expected load failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unknown_engine_is_a_missing_dependency() {
        let dir = tempdir().expect("temp dir");
        let mut config = book_config(dir.path(), 2);
        config.display.engine = Some("origami".into());

        match check_book(&config).await {
            Err(Error::DependencyMissing(Dependency::FlipEngine(name))) => {
                assert_eq!(name, "origami");
            }
            other => panic!("expected missing engine, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_directory_is_an_empty_book() {
        let dir = tempdir().expect("temp dir");
        let config = book_config(dir.path(), 0);
        assert!(matches!(check_book(&config).await, Err(Error::EmptyBook)));
    }
}
