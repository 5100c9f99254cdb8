// SPDX-License-Identifier: MPL-2.0
//! Which page numbers are visible for a given current page.
//!
//! In double mode the cover is shown alone and every following pair forms a
//! spread: an even page opens a spread with the page after it, an odd page
//! closes one with the page before it. Pages outside `1..=total` are dropped,
//! so the back page of a book with an even page count is shown alone too.

use crate::config::DisplayMode;

/// The 1 or 2 page numbers (1-based) currently visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Viewport {
    Single(usize),
    Spread(usize, usize),
}

impl Viewport {
    /// Viewport containing `page` in a book of `total` pages.
    ///
    /// `page` is clamped to `1..=total`.
    #[must_use]
    pub fn for_page(page: usize, total: usize, mode: DisplayMode) -> Self {
        let total = total.max(1);
        let page = page.clamp(1, total);

        match mode {
            DisplayMode::Single => Self::Single(page),
            DisplayMode::Double => {
                let (left, right) = if page % 2 == 0 {
                    (page, page + 1)
                } else {
                    (page - 1, page)
                };
                let left_visible = left >= 1;
                let right_visible = right <= total;
                match (left_visible, right_visible) {
                    (true, true) => Self::Spread(left, right),
                    (true, false) => Self::Single(left),
                    (false, _) => Self::Single(right),
                }
            }
        }
    }

    #[must_use]
    pub fn first(self) -> usize {
        match self {
            Self::Single(page) | Self::Spread(page, _) => page,
        }
    }

    #[must_use]
    pub fn last(self) -> usize {
        match self {
            Self::Single(page) | Self::Spread(_, page) => page,
        }
    }

    #[must_use]
    pub fn contains(self, page: usize) -> bool {
        (self.first()..=self.last()).contains(&page)
    }

    /// Visible page numbers, left to right.
    pub fn pages(self) -> impl Iterator<Item = usize> {
        self.first()..=self.last()
    }
}

/// Every distinct viewport of the book in reading order.
#[must_use]
pub fn spreads(total: usize, mode: DisplayMode) -> Vec<Viewport> {
    let mut views = Vec::new();
    let mut page = 1;
    while page <= total {
        let view = Viewport::for_page(page, total, mode);
        page = view.last() + 1;
        views.push(view);
    }
    views
}

/// Page to turn to for "next", or `None` on the last viewport.
#[must_use]
pub fn next_target(current: usize, total: usize, mode: DisplayMode) -> Option<usize> {
    let target = Viewport::for_page(current, total, mode).last() + 1;
    (target <= total).then_some(target)
}

/// Page to turn to for "previous", or `None` on the first viewport.
#[must_use]
pub fn previous_target(current: usize, total: usize, mode: DisplayMode) -> Option<usize> {
    Viewport::for_page(current, total, mode)
        .first()
        .checked_sub(1)
        .filter(|&page| page >= 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cover_is_shown_alone() {
        assert_eq!(
            Viewport::for_page(1, 21, DisplayMode::Double),
            Viewport::Single(1)
        );
    }

    #[test]
    fn inner_pages_form_spreads() {
        assert_eq!(
            Viewport::for_page(4, 21, DisplayMode::Double),
            Viewport::Spread(4, 5)
        );
        assert_eq!(
            Viewport::for_page(5, 21, DisplayMode::Double),
            Viewport::Spread(4, 5)
        );
        assert_eq!(
            Viewport::for_page(21, 21, DisplayMode::Double),
            Viewport::Spread(20, 21)
        );
    }

    #[test]
    fn even_book_ends_on_single_back_page() {
        assert_eq!(
            Viewport::for_page(20, 20, DisplayMode::Double),
            Viewport::Single(20)
        );
    }

    #[test]
    fn single_mode_shows_one_page() {
        assert_eq!(
            Viewport::for_page(7, 21, DisplayMode::Single),
            Viewport::Single(7)
        );
    }

    #[test]
    fn out_of_range_page_is_clamped() {
        assert_eq!(
            Viewport::for_page(0, 10, DisplayMode::Single),
            Viewport::Single(1)
        );
        assert_eq!(
            Viewport::for_page(99, 10, DisplayMode::Single),
            Viewport::Single(10)
        );
    }

    #[test]
    fn spreads_cover_every_page_once() {
        let views = spreads(21, DisplayMode::Double);
        assert_eq!(views.len(), 11);
        assert_eq!(views[0], Viewport::Single(1));
        assert_eq!(views[1], Viewport::Spread(2, 3));
        assert_eq!(views[10], Viewport::Spread(20, 21));

        let pages: Vec<_> = views.iter().flat_map(|v| v.pages()).collect();
        assert_eq!(pages, (1..=21).collect::<Vec<_>>());
    }

    #[test]
    fn spreads_of_empty_book_is_empty() {
        assert!(spreads(0, DisplayMode::Double).is_empty());
    }

    #[test]
    fn next_and_previous_skip_whole_spreads() {
        assert_eq!(next_target(1, 21, DisplayMode::Double), Some(2));
        assert_eq!(next_target(2, 21, DisplayMode::Double), Some(4));
        assert_eq!(next_target(21, 21, DisplayMode::Double), None);
        assert_eq!(previous_target(5, 21, DisplayMode::Double), Some(3));
        assert_eq!(previous_target(3, 21, DisplayMode::Double), Some(1));
        assert_eq!(previous_target(1, 21, DisplayMode::Double), None);
    }

    #[test]
    fn single_mode_steps_one_page() {
        assert_eq!(next_target(3, 5, DisplayMode::Single), Some(4));
        assert_eq!(previous_target(3, 5, DisplayMode::Single), Some(2));
        assert_eq!(next_target(5, 5, DisplayMode::Single), None);
    }
}
