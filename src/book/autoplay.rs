// SPDX-License-Identifier: MPL-2.0
//! Autoplay interval newtype.
//!
//! Ensures the interval between automatic page turns stays within the
//! supported range.

use crate::config::{
    DEFAULT_AUTOPLAY_INTERVAL_SECS, MAX_AUTOPLAY_INTERVAL_SECS, MIN_AUTOPLAY_INTERVAL_SECS,
};
use std::time::Duration;

/// Seconds between two automatic page turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AutoplayInterval(u32);

impl AutoplayInterval {
    /// Creates a new interval, clamping to valid range.
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value.clamp(MIN_AUTOPLAY_INTERVAL_SECS, MAX_AUTOPLAY_INTERVAL_SECS))
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs(u64::from(self.0))
    }
}

impl Default for AutoplayInterval {
    fn default() -> Self {
        Self(DEFAULT_AUTOPLAY_INTERVAL_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_valid_range() {
        assert_eq!(AutoplayInterval::new(0).value(), MIN_AUTOPLAY_INTERVAL_SECS);
        assert_eq!(AutoplayInterval::new(600).value(), MAX_AUTOPLAY_INTERVAL_SECS);
        assert_eq!(AutoplayInterval::new(12).value(), 12);
    }

    #[test]
    fn default_returns_expected_value() {
        assert_eq!(
            AutoplayInterval::default().value(),
            DEFAULT_AUTOPLAY_INTERVAL_SECS
        );
    }

    #[test]
    fn as_duration_converts_seconds() {
        assert_eq!(AutoplayInterval::new(7).as_duration(), Duration::from_secs(7));
    }
}
