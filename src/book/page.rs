// SPDX-License-Identifier: MPL-2.0
//! Page records and the asset naming convention they are loaded from.
//!
//! Index 0 is always the cover and uses its own file name. Every other index
//! maps to a zero-padded numeric file name (`page_001.png`, `page_002.png`, ...).
//! The mapping is a hard contract with the files on disk: renaming assets
//! breaks loading.

use crate::config::{
    DEFAULT_COVER_FILE, DEFAULT_PAD_WIDTH, DEFAULT_PAGE_EXTENSION, DEFAULT_PAGE_PREFIX,
    MAX_DISCOVERED_PAGES,
};
use std::path::{Path, PathBuf};

/// One page of the book.
///
/// Created while the book is assembled and never mutated afterwards:
/// [`Page::into_loaded`] consumes the record and returns the settled one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    index: usize,
    image_path: PathBuf,
    loaded: bool,
}

impl Page {
    /// Creates a page whose image has not been loaded yet.
    #[must_use]
    pub fn new(index: usize, image_path: PathBuf) -> Self {
        Self {
            index,
            image_path,
            loaded: false,
        }
    }

    /// 0-based index, 0 being the cover.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// 1-based page number as reported by the flip engine.
    #[must_use]
    pub fn number(&self) -> usize {
        self.index + 1
    }

    #[must_use]
    pub fn image_path(&self) -> &Path {
        &self.image_path
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    #[must_use]
    pub fn is_cover(&self) -> bool {
        self.index == 0
    }

    /// Marks the image as settled.
    #[must_use]
    pub fn into_loaded(self) -> Self {
        Self {
            loaded: true,
            ..self
        }
    }
}

/// Maps page indices to asset paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathRule {
    directory: PathBuf,
    cover_file: String,
    prefix: String,
    pad_width: usize,
    extension: String,
}

impl PathRule {
    /// Creates a rule with the default naming convention rooted at `directory`.
    #[must_use]
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            cover_file: DEFAULT_COVER_FILE.to_string(),
            prefix: DEFAULT_PAGE_PREFIX.to_string(),
            pad_width: DEFAULT_PAD_WIDTH,
            extension: DEFAULT_PAGE_EXTENSION.to_string(),
        }
    }

    #[must_use]
    pub fn with_cover_file(mut self, cover_file: impl Into<String>) -> Self {
        self.cover_file = cover_file.into();
        self
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Sets the zero-padding width; a width of 0 is raised to 1.
    #[must_use]
    pub fn with_pad_width(mut self, pad_width: usize) -> Self {
        self.pad_width = pad_width.max(1);
        self
    }

    /// Sets the numbered page extension; a leading dot is ignored.
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        let extension = extension.into();
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// File name (without directory) for the page at `index`.
    #[must_use]
    pub fn file_name(&self, index: usize) -> String {
        if index == 0 {
            self.cover_file.clone()
        } else {
            format!(
                "{}{:0width$}.{}",
                self.prefix,
                index,
                self.extension,
                width = self.pad_width
            )
        }
    }

    /// Full asset path for the page at `index`.
    #[must_use]
    pub fn path_for(&self, index: usize) -> PathBuf {
        self.directory.join(self.file_name(index))
    }

    /// Builds the unloaded page records for a book of `total` pages.
    #[must_use]
    pub fn pages(&self, total: usize) -> Vec<Page> {
        (0..total).map(|i| Page::new(i, self.path_for(i))).collect()
    }

    /// Counts the pages present on disk: the cover plus every consecutively
    /// numbered page after it. Returns 0 when the cover is missing.
    #[must_use]
    pub fn discover(&self) -> usize {
        if !self.path_for(0).is_file() {
            return 0;
        }
        (1..=MAX_DISCOVERED_PAGES)
            .find(|&i| !self.path_for(i).is_file())
            .unwrap_or(MAX_DISCOVERED_PAGES + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn cover_uses_its_own_name() {
        let rule = PathRule::new("book");
        assert_eq!(rule.path_for(0), PathBuf::from("book/page_000_cover.png"));
    }

    #[test]
    fn numbered_pages_are_zero_padded() {
        let rule = PathRule::new("book");
        assert_eq!(rule.file_name(1), "page_001.png");
        assert_eq!(rule.file_name(20), "page_020.png");
        assert_eq!(rule.file_name(1234), "page_1234.png");
    }

    #[test]
    fn path_rule_is_deterministic() {
        let rule = PathRule::new("book").with_extension(".jpg").with_pad_width(4);
        let first: Vec<_> = (0..30).map(|i| rule.path_for(i)).collect();
        let second: Vec<_> = (0..30).map(|i| rule.path_for(i)).collect();
        assert_eq!(first, second);
        assert_eq!(rule.file_name(9), "page_0009.jpg");
    }

    #[test]
    fn pages_are_unloaded_and_ordered() {
        let pages = PathRule::new("book").pages(4);
        assert_eq!(pages.len(), 4);
        assert!(pages[0].is_cover());
        for (i, page) in pages.iter().enumerate() {
            assert_eq!(page.index(), i);
            assert_eq!(page.number(), i + 1);
            assert!(!page.is_loaded());
        }
    }

    #[test]
    fn into_loaded_keeps_identity() {
        let page = Page::new(3, PathBuf::from("book/page_003.png"));
        let loaded = page.clone().into_loaded();
        assert!(loaded.is_loaded());
        assert_eq!(loaded.index(), page.index());
        assert_eq!(loaded.image_path(), page.image_path());
    }

    #[test]
    fn discover_counts_consecutive_pages() {
        let dir = tempdir().expect("temp dir");
        let rule = PathRule::new(dir.path());
        for i in [0, 1, 2, 3, 5] {
            fs::write(rule.path_for(i), b"x").expect("write page");
        }
        assert_eq!(rule.discover(), 4);
    }

    #[test]
    fn discover_without_cover_is_empty() {
        let dir = tempdir().expect("temp dir");
        let rule = PathRule::new(dir.path());
        fs::write(rule.path_for(1), b"x").expect("write page");
        assert_eq!(rule.discover(), 0);
    }
}
