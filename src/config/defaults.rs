// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.

// ==========================================================================
// Book Asset Defaults
// ==========================================================================

/// Directory holding the page images, relative to the working directory.
pub const DEFAULT_BOOK_DIRECTORY: &str = "individual_pages";

/// File name of the cover page (index 0).
pub const DEFAULT_COVER_FILE: &str = "page_000_cover.png";

/// Prefix of numbered page files (`page_001.png`, ...).
pub const DEFAULT_PAGE_PREFIX: &str = "page_";

/// Zero-padding width of numbered page files.
pub const DEFAULT_PAD_WIDTH: usize = 3;

/// Extension of numbered page files.
pub const DEFAULT_PAGE_EXTENSION: &str = "png";

/// Upper bound on pages probed when discovering a book on disk.
pub const MAX_DISCOVERED_PAGES: usize = 999;

// ==========================================================================
// Preload Defaults
// ==========================================================================

/// Time a single page image may take to settle before the load fails.
pub const DEFAULT_LOAD_TIMEOUT_MS: u64 = 30_000;

/// Minimum accepted load timeout.
pub const MIN_LOAD_TIMEOUT_MS: u64 = 100;

/// Maximum accepted load timeout.
pub const MAX_LOAD_TIMEOUT_MS: u64 = 300_000;

/// Default decoded-page cache size in bytes (256 MB).
pub const DEFAULT_PAGE_CACHE_BYTES: usize = 256 * 1024 * 1024;

/// Default maximum number of decoded pages kept in the cache.
pub const DEFAULT_PAGE_CACHE_ENTRIES: usize = 64;

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Flip engine used when the config does not name one.
pub const DEFAULT_ENGINE: &str = "spread";

/// Width of a single page in logical pixels.
pub const DEFAULT_PAGE_WIDTH: u32 = 461;

/// Height of a single page in logical pixels.
pub const DEFAULT_PAGE_HEIGHT: u32 = 600;

/// Duration of a page-turn transition in milliseconds.
pub const DEFAULT_TRANSITION_MS: u64 = 600;

/// Maximum accepted transition duration.
pub const MAX_TRANSITION_MS: u64 = 5_000;

// ==========================================================================
// Autoplay Defaults
// ==========================================================================

/// Default delay between two automatic page turns (in seconds).
pub const DEFAULT_AUTOPLAY_INTERVAL_SECS: u32 = 5;

/// Minimum autoplay interval (in seconds).
pub const MIN_AUTOPLAY_INTERVAL_SECS: u32 = 1;

/// Maximum autoplay interval (in seconds).
pub const MAX_AUTOPLAY_INTERVAL_SECS: u32 = 60;

// ==========================================================================
// Asset Tool Defaults
// ==========================================================================

/// Number of scanned spreads the `split` tool looks for.
pub const DEFAULT_SPREAD_COUNT: usize = 11;

/// Maximum page width produced by the `compress` tool.
pub const DEFAULT_COMPRESS_MAX_WIDTH: u32 = 1200;

/// JPEG quality used by the `compress` tool.
pub const DEFAULT_COMPRESS_QUALITY: u8 = 85;

/// Files below this size are treated as blank scans by the `renumber` tool.
pub const BLANK_PAGE_THRESHOLD_BYTES: u64 = 104_857;

const _: () = {
    assert!(MIN_LOAD_TIMEOUT_MS <= DEFAULT_LOAD_TIMEOUT_MS);
    assert!(DEFAULT_LOAD_TIMEOUT_MS <= MAX_LOAD_TIMEOUT_MS);
    assert!(MIN_AUTOPLAY_INTERVAL_SECS <= DEFAULT_AUTOPLAY_INTERVAL_SECS);
    assert!(DEFAULT_AUTOPLAY_INTERVAL_SECS <= MAX_AUTOPLAY_INTERVAL_SECS);
    assert!(DEFAULT_PAD_WIDTH > 0);
};
