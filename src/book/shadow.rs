// SPDX-License-Identifier: MPL-2.0
//! Page-edge shadows and navigation button state.
//!
//! Both are derived from the current page and viewport after every completed
//! transition. Recomputing from the same inputs always yields the same state.

use super::viewport::Viewport;
use std::collections::BTreeMap;

/// Edge shadow drawn over a visible page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shadow {
    Left,
    Right,
}

impl Shadow {
    /// Style class name of the overlay.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Shadow::Left => "left-shadow",
            Shadow::Right => "right-shadow",
        }
    }
}

/// Shadow assignment keyed by 0-based page index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShadowState {
    assigned: BTreeMap<usize, Shadow>,
}

impl ShadowState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears every shadow and reapplies them for `current` within `view`.
    ///
    /// - A spread always shadows its right page; its left page is shadowed
    ///   only past page 1.
    /// - A single view on page 1 shadows the right edge.
    /// - A single view on the last page shadows the left edge.
    /// - Any other single view has no shadow.
    pub fn recompute(&mut self, current: usize, view: &Viewport, total: usize) {
        self.assigned.clear();

        match *view {
            Viewport::Spread(left, right) => {
                self.assign(right, Shadow::Right);
                if current > 1 {
                    self.assign(left, Shadow::Left);
                }
            }
            Viewport::Single(page) => {
                if current == 1 {
                    self.assign(page, Shadow::Right);
                } else if current == total {
                    self.assign(page, Shadow::Left);
                }
            }
        }
    }

    fn assign(&mut self, page_number: usize, shadow: Shadow) {
        if let Some(index) = page_number.checked_sub(1) {
            self.assigned.insert(index, shadow);
        }
    }

    /// Shadow on the page at 0-based `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Shadow> {
        self.assigned.get(&index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, Shadow)> + '_ {
        self.assigned.iter().map(|(&index, &shadow)| (index, shadow))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }
}

/// Enabled state of the previous/next buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavButtons {
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

impl NavButtons {
    #[must_use]
    pub fn for_page(current: usize, total: usize) -> Self {
        Self {
            previous_enabled: current > 1,
            next_enabled: current < total,
        }
    }

    /// Both buttons disabled, as before the book is ready.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            previous_enabled: false,
            next_enabled: false,
        }
    }
}

impl Default for NavButtons {
    fn default() -> Self {
        Self::disabled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shadows(current: usize, view: Viewport, total: usize) -> Vec<(usize, Shadow)> {
        let mut state = ShadowState::new();
        state.recompute(current, &view, total);
        state.iter().collect()
    }

    #[test]
    fn cover_gets_right_shadow_only() {
        assert_eq!(shadows(1, Viewport::Single(1), 21), vec![(0, Shadow::Right)]);
    }

    #[test]
    fn back_page_gets_left_shadow_only() {
        assert_eq!(shadows(21, Viewport::Single(21), 21), vec![(20, Shadow::Left)]);
    }

    #[test]
    fn spread_shadows_both_pages() {
        assert_eq!(
            shadows(5, Viewport::Spread(4, 5), 21),
            vec![(3, Shadow::Left), (4, Shadow::Right)]
        );
    }

    #[test]
    fn spread_on_first_page_skips_left_shadow() {
        assert_eq!(shadows(1, Viewport::Spread(1, 2), 21), vec![(1, Shadow::Right)]);
    }

    #[test]
    fn inner_single_view_has_no_shadow() {
        assert!(shadows(7, Viewport::Single(7), 21).is_empty());
    }

    #[test]
    fn one_page_book_prefers_cover_rule() {
        assert_eq!(shadows(1, Viewport::Single(1), 1), vec![(0, Shadow::Right)]);
    }

    #[test]
    fn recompute_clears_previous_assignment() {
        let mut state = ShadowState::new();
        state.recompute(5, &Viewport::Spread(4, 5), 21);
        state.recompute(1, &Viewport::Single(1), 21);
        assert_eq!(state.len(), 1);
        assert_eq!(state.get(0), Some(Shadow::Right));
        assert_eq!(state.get(3), None);
    }

    #[test]
    fn recompute_is_idempotent() {
        let mut once = ShadowState::new();
        once.recompute(9, &Viewport::Spread(8, 9), 21);
        let mut twice = once.clone();
        twice.recompute(9, &Viewport::Spread(8, 9), 21);
        assert_eq!(once, twice);
    }

    #[test]
    fn class_names() {
        assert_eq!(Shadow::Left.as_str(), "left-shadow");
        assert_eq!(Shadow::Right.as_str(), "right-shadow");
    }

    #[test]
    fn buttons_follow_page_bounds() {
        assert_eq!(
            NavButtons::for_page(1, 21),
            NavButtons {
                previous_enabled: false,
                next_enabled: true
            }
        );
        assert_eq!(
            NavButtons::for_page(21, 21),
            NavButtons {
                previous_enabled: true,
                next_enabled: false
            }
        );
        assert_eq!(
            NavButtons::for_page(1, 1),
            NavButtons::disabled()
        );
    }
}
