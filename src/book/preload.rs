// SPDX-License-Identifier: MPL-2.0
//! Sequential page preloading.
//!
//! Pages are loaded one at a time in index order and attached to the
//! [`PageContainer`] as soon as their image settles. The next load is only
//! issued after the previous one has been attached, which keeps the container
//! order deterministic and makes every failure name exactly one image.
//!
//! The [`Preloader`] state machine is driven either by the Iced update loop
//! (one `Task` per page) or by [`preload_all`] for headless use.

use super::cache::SharedPageCache;
use super::container::PageContainer;
use super::page::{Page, PathRule};
use crate::error::{Error, Result};
use crate::media::{load_image, ImageData};
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Source of decoded page images.
pub trait PageLoader: Send + Sync {
    /// Decodes the image at `path`.
    fn load(&self, path: PathBuf) -> BoxFuture<'static, Result<ImageData>>;
}

/// Decodes pages from the filesystem on Tokio's blocking pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskLoader;

impl PageLoader for DiskLoader {
    fn load(&self, path: PathBuf) -> BoxFuture<'static, Result<ImageData>> {
        async move {
            tokio::task::spawn_blocking(move || load_image(&path))
                .await
                .unwrap_or_else(|e| Err(Error::Io(format!("page decode task failed: {e}"))))
        }
        .boxed()
    }
}

/// Loads one page, honouring the settle contract.
///
/// Resolves immediately when the image is already cached. Otherwise the first
/// of these wins: the loader succeeds, the loader fails
/// ([`Error::LoadFailure`]) or `timeout` elapses ([`Error::LoadTimeout`]).
/// The timer is dropped together with the `timeout` future once the load
/// settles.
pub async fn load_page(
    loader: Arc<dyn PageLoader>,
    cache: Option<SharedPageCache>,
    page: Page,
    timeout: Duration,
) -> Result<(Page, ImageData)> {
    let path = page.image_path().to_path_buf();

    if let Some(image) = cache
        .as_ref()
        .and_then(|cache| cache.lock().ok().and_then(|mut cache| cache.get(&path)))
    {
        log::debug!("page {} already decoded", page.index());
        return Ok((page.into_loaded(), image));
    }

    let image = match tokio::time::timeout(timeout, loader.load(path.clone())).await {
        Ok(Ok(image)) => image,
        Ok(Err(err)) => {
            return Err(Error::LoadFailure {
                path,
                reason: err.to_string(),
            })
        }
        Err(_) => return Err(Error::LoadTimeout { path, timeout }),
    };

    if let Some(cache) = cache {
        if let Ok(mut cache) = cache.lock() {
            cache.insert(path, image.clone());
        }
    }

    Ok((page.into_loaded(), image))
}

/// Where the preload pipeline stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// `loaded` of `total` pages are attached.
    Loading { loaded: usize, total: usize },
    /// Every page is attached.
    Complete,
    /// A load failed; nothing more will be requested.
    Aborted,
}

/// Ordered, one-at-a-time preload pipeline.
#[derive(Debug)]
pub struct Preloader {
    queue: VecDeque<Page>,
    in_flight: Option<usize>,
    total: usize,
    aborted: bool,
    container: PageContainer,
}

impl Preloader {
    /// Prepares the pipeline for a book of `total` pages named by `rule`.
    #[must_use]
    pub fn new(rule: &PathRule, total: usize) -> Self {
        Self {
            queue: rule.pages(total).into(),
            in_flight: None,
            total,
            aborted: false,
            container: PageContainer::new(),
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn loaded(&self) -> usize {
        self.container.len()
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        if self.aborted {
            Progress::Aborted
        } else if self.container.len() == self.total {
            Progress::Complete
        } else {
            Progress::Loading {
                loaded: self.container.len(),
                total: self.total,
            }
        }
    }

    /// Hands out the next page to load.
    ///
    /// Returns `None` while a load is in flight, after a failure, or once
    /// every page has been handed out.
    pub fn next_request(&mut self) -> Option<Page> {
        if self.aborted || self.in_flight.is_some() {
            return None;
        }
        let page = self.queue.pop_front()?;
        self.in_flight = Some(page.index());
        Some(page)
    }

    /// Records the outcome of the in-flight load.
    ///
    /// # Errors
    ///
    /// Propagates the load error (aborting the pipeline), or returns
    /// [`Error::PageOrder`] when the outcome is not for the in-flight page.
    pub fn complete(&mut self, outcome: Result<(Page, ImageData)>) -> Result<Progress> {
        let expected = self.in_flight.take();
        match outcome {
            Ok((page, image)) => {
                if expected != Some(page.index()) {
                    self.aborted = true;
                    return Err(Error::PageOrder {
                        expected: expected.unwrap_or(self.container.len()),
                        found: page.index(),
                    });
                }
                if let Err(err) = self.container.attach(page, image) {
                    self.aborted = true;
                    return Err(err);
                }
                Ok(self.progress())
            }
            Err(err) => {
                self.aborted = true;
                self.queue.clear();
                Err(err)
            }
        }
    }

    /// Releases the assembled container once every page is attached.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyBook`] for a book without pages.
    pub fn into_container(self) -> Result<PageContainer> {
        if self.container.is_empty() {
            return Err(Error::EmptyBook);
        }
        Ok(self.container)
    }
}

/// Runs the whole pipeline, awaiting each page before requesting the next.
///
/// `on_progress` is called with `(loaded, total)` after every attached page.
///
/// # Errors
///
/// Returns the first load error; no page after the failing one is requested.
pub async fn preload_all(
    rule: &PathRule,
    total: usize,
    loader: Arc<dyn PageLoader>,
    cache: Option<SharedPageCache>,
    timeout: Duration,
    mut on_progress: impl FnMut(usize, usize),
) -> Result<PageContainer> {
    let mut preloader = Preloader::new(rule, total);

    while let Some(page) = preloader.next_request() {
        log::debug!("loading page {} from {}", page.index(), page.image_path().display());
        let outcome = load_page(loader.clone(), cache.clone(), page, timeout).await;
        if let Err(err) = &outcome {
            log::error!("preload aborted: {err}");
        }
        preloader.complete(outcome)?;
        on_progress(preloader.loaded(), preloader.total());
    }

    preloader.into_container()
}
