// SPDX-License-Identifier: MPL-2.0
//! Ordered display container the flip engine reads its pages from.

use super::page::Page;
use crate::error::{Error, Result};
use crate::media::ImageData;

/// A settled page together with its decoded image.
#[derive(Debug, Clone)]
pub struct AttachedPage {
    pub page: Page,
    pub image: ImageData,
}

/// Pages in display order.
///
/// Engines enumerate pages positionally, so the container only accepts the
/// next index in sequence and only pages whose image has settled.
#[derive(Debug, Clone, Default)]
pub struct PageContainer {
    pages: Vec<AttachedPage>,
}

impl PageContainer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a loaded page.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PageOrder`] when `page` is not the next index or has
    /// not been marked loaded.
    pub fn attach(&mut self, page: Page, image: ImageData) -> Result<()> {
        let expected = self.pages.len();
        if page.index() != expected || !page.is_loaded() {
            return Err(Error::PageOrder {
                expected,
                found: page.index(),
            });
        }
        self.pages.push(AttachedPage { page, image });
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Page by 0-based index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&AttachedPage> {
        self.pages.get(index)
    }

    /// Page by 1-based page number.
    #[must_use]
    pub fn by_number(&self, number: usize) -> Option<&AttachedPage> {
        number.checked_sub(1).and_then(|index| self.pages.get(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &AttachedPage> {
        self.pages.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn pixel() -> ImageData {
        ImageData::from_rgba(1, 1, vec![0, 0, 0, 255])
    }

    fn loaded(index: usize) -> Page {
        Page::new(index, PathBuf::from(format!("page_{index:03}.png"))).into_loaded()
    }

    #[test]
    fn attach_accepts_pages_in_order() {
        let mut container = PageContainer::new();
        for i in 0..3 {
            container.attach(loaded(i), pixel()).expect("in-order attach");
        }
        let indices: Vec<_> = container.iter().map(|p| p.page.index()).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(container.by_number(3).map(|p| p.page.index()), Some(2));
        assert!(container.by_number(0).is_none());
    }

    #[test]
    fn attach_rejects_skipped_index() {
        let mut container = PageContainer::new();
        container.attach(loaded(0), pixel()).expect("cover");
        match container.attach(loaded(2), pixel()) {
            Err(Error::PageOrder { expected, found }) => {
                assert_eq!(expected, 1);
                assert_eq!(found, 2);
            }
            other => panic!("expected PageOrder error, got {other:?}"),
        }
        assert_eq!(container.len(), 1);
    }

    #[test]
    fn attach_rejects_unsettled_page() {
        let mut container = PageContainer::new();
        let unsettled = Page::new(0, PathBuf::from("page_000_cover.png"));
        assert!(container.attach(unsettled, pixel()).is_err());
        assert!(container.is_empty());
    }
}
