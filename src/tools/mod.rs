// SPDX-License-Identifier: MPL-2.0
//! Headless asset tools run from the command line.
//!
//! These prepare a book directory for the viewer: cutting scanned spreads
//! into single pages, re-encoding oversized pages, closing the gap left by a
//! blank first page, and checking that the whole book preloads.

pub mod check;
pub mod compress;
pub mod renumber;
pub mod split;

/// Formats a byte count as mebibytes with one decimal.
#[must_use]
pub fn format_mib(bytes: u64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let mib = bytes as f64 / (1024.0 * 1024.0);
    format!("{mib:.1} MB")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_mebibytes() {
        assert_eq!(format_mib(0), "0.0 MB");
        assert_eq!(format_mib(1024 * 1024), "1.0 MB");
        assert_eq!(format_mib(1_572_864), "1.5 MB");
    }
}
