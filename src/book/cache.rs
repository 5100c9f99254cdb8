// SPDX-License-Identifier: MPL-2.0
//! Decoded page cache.
//!
//! A page whose image is already decoded settles immediately instead of going
//! back to the loader. This makes reopening or retrying a book cheap: only
//! the pages that never made it into the cache are decoded again.
//!
//! # Design
//!
//! - **LRU eviction**: Least recently used pages are evicted first
//! - **Memory-bounded**: Total cache size limited by a byte budget
//! - **Path-keyed**: Pages indexed by their asset path

use crate::config::{DEFAULT_PAGE_CACHE_BYTES, DEFAULT_PAGE_CACHE_ENTRIES};
use crate::media::ImageData;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Cache shared between the application and in-flight load tasks.
pub type SharedPageCache = Arc<Mutex<PageCache>>;

/// Limits of the decoded page cache.
#[derive(Debug, Clone, Copy)]
pub struct CacheConfig {
    /// Maximum total decoded size in bytes.
    pub max_bytes: usize,
    /// Maximum number of cached pages.
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_PAGE_CACHE_BYTES,
            max_entries: DEFAULT_PAGE_CACHE_ENTRIES,
        }
    }
}

/// Statistics about cache performance.
#[derive(Debug, Clone, Copy, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub insertions: u64,
}

#[derive(Debug, Clone)]
struct CacheEntry {
    image: ImageData,
    size_bytes: usize,
}

/// LRU cache of decoded page images.
pub struct PageCache {
    cache: LruCache<PathBuf, CacheEntry>,
    config: CacheConfig,
    current_bytes: usize,
    stats: CacheStats,
}

impl PageCache {
    /// Creates a cache with the given limits. A zero entry limit is raised to 1.
    #[must_use]
    pub fn new(config: CacheConfig) -> Self {
        let capacity = NonZeroUsize::new(config.max_entries).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
            config,
            current_bytes: 0,
            stats: CacheStats::default(),
        }
    }

    /// Creates a cache ready to be shared with load tasks.
    #[must_use]
    pub fn shared(config: CacheConfig) -> SharedPageCache {
        Arc::new(Mutex::new(Self::new(config)))
    }

    /// Inserts a decoded page.
    ///
    /// Returns `false` when the page alone exceeds the byte budget.
    pub fn insert(&mut self, path: PathBuf, image: ImageData) -> bool {
        let size_bytes = image.size_bytes();
        if size_bytes > self.config.max_bytes {
            return false;
        }

        if let Some(existing) = self.cache.pop(&path) {
            self.current_bytes = self.current_bytes.saturating_sub(existing.size_bytes);
        }

        while self.current_bytes + size_bytes > self.config.max_bytes {
            match self.cache.pop_lru() {
                Some((_, evicted)) => {
                    self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes);
                    self.stats.evictions += 1;
                }
                None => break,
            }
        }

        if let Some((_, evicted)) = self.cache.push(path, CacheEntry { image, size_bytes }) {
            // Entry limit reached: `push` hands back the least recently used page.
            self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes);
            self.stats.evictions += 1;
        }
        self.current_bytes += size_bytes;
        self.stats.insertions += 1;
        true
    }

    /// Returns a cached page, updating its recency.
    pub fn get(&mut self, path: &Path) -> Option<ImageData> {
        match self.cache.get(path) {
            Some(entry) => {
                self.stats.hits += 1;
                Some(entry.image.clone())
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        self.cache.contains(path)
    }

    pub fn clear(&mut self) {
        self.cache.clear();
        self.current_bytes = 0;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.current_bytes
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

impl Default for PageCache {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}

impl std::fmt::Debug for PageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageCache")
            .field("entries", &self.cache.len())
            .field("memory_usage", &self.current_bytes)
            .field("max_bytes", &self.config.max_bytes)
            .field("stats", &self.stats)
            .finish()
    }
}
