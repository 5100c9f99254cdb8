// SPDX-License-Identifier: MPL-2.0
//! Cuts scanned two-page spreads into single page files.
//!
//! Spreads are named `page_001_img_001.png`, `page_002_img_001.png`, ...
//! The first spread holds the back of page 1 on its left and the cover on its
//! right; every later spread `i` holds pages `2(i-1)` and `2(i-1)+1`.

use crate::book::PathRule;
use crate::error::{Error, Result};
use image_rs::{DynamicImage, GenericImageView};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the scanned spread file with 1-based number `spread`.
#[must_use]
pub fn spread_file_name(spread: usize) -> String {
    format!("page_{spread:03}_img_001.png")
}

/// Page indices `(left, right)` cut out of spread `spread` (1-based).
#[must_use]
pub fn page_indices(spread: usize) -> (usize, usize) {
    if spread <= 1 {
        (1, 0)
    } else {
        let left = 2 * (spread - 1);
        (left, left + 1)
    }
}

/// Outcome of a split run.
#[derive(Debug, Default)]
pub struct SplitReport {
    /// Page files written, in the order they were produced.
    pub written: Vec<PathBuf>,
    /// Spread files that were expected but absent.
    pub missing: Vec<PathBuf>,
}

/// Splits an image down the middle. An odd extra column goes to the right half.
#[must_use]
pub fn split_halves(image: &DynamicImage) -> (DynamicImage, DynamicImage) {
    let (width, height) = image.dimensions();
    let middle = width / 2;
    let left = image.crop_imm(0, 0, middle, height);
    let right = image.crop_imm(middle, 0, width - middle, height);
    (left, right)
}

/// Splits `spreads` spread files from `input` into page files under `output`.
///
/// Missing spreads are reported and skipped; any other failure aborts.
///
/// # Errors
///
/// Returns an error when `output` cannot be created, a spread cannot be
/// decoded, or a page cannot be written.
pub fn split_spreads(input: &Path, output: &Path, spreads: usize) -> Result<SplitReport> {
    fs::create_dir_all(output)?;
    let rule = PathRule::new(output);
    let mut report = SplitReport::default();

    for spread in 1..=spreads {
        let source = input.join(spread_file_name(spread));
        if !source.is_file() {
            log::warn!("spread {} not found: {}", spread, source.display());
            report.missing.push(source);
            continue;
        }

        let image = image_rs::open(&source).map_err(|e| Error::LoadFailure {
            path: source.clone(),
            reason: e.to_string(),
        })?;
        let (left, right) = split_halves(&image);
        let (left_index, right_index) = page_indices(spread);

        // Cover first so the written list follows page order within a spread.
        for (index, half) in sorted_halves(left_index, left, right_index, right) {
            let target = rule.path_for(index);
            half.save(&target)?;
            log::info!("spread {} -> {}", spread, target.display());
            report.written.push(target);
        }
    }

    Ok(report)
}

fn sorted_halves(
    left_index: usize,
    left: DynamicImage,
    right_index: usize,
    right: DynamicImage,
) -> [(usize, DynamicImage); 2] {
    if left_index < right_index {
        [(left_index, left), (right_index, right)]
    } else {
        [(right_index, right), (left_index, left)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    /// Left half red, right half blue.
    fn spread(width: u32, height: u32) -> DynamicImage {
        let image = RgbaImage::from_fn(width, height, |x, _| {
            if x < width / 2 {
                Rgba([255, 0, 0, 255])
            } else {
                Rgba([0, 0, 255, 255])
            }
        });
        DynamicImage::ImageRgba8(image)
    }

    #[test]
    fn first_spread_holds_cover_on_the_right() {
        assert_eq!(page_indices(1), (1, 0));
        assert_eq!(page_indices(2), (2, 3));
        assert_eq!(page_indices(11), (20, 21));
    }

    #[test]
    fn spread_names_are_zero_padded() {
        assert_eq!(spread_file_name(1), "page_001_img_001.png");
        assert_eq!(spread_file_name(11), "page_011_img_001.png");
    }

    #[test]
    fn odd_width_gives_extra_column_to_the_right() {
        let (left, right) = split_halves(&spread(7, 2));
        assert_eq!(left.dimensions(), (3, 2));
        assert_eq!(right.dimensions(), (4, 2));
    }

    #[test]
    fn splits_spreads_into_named_pages() {
        let input = tempdir().expect("input dir");
        let output = tempdir().expect("output dir");
        spread(8, 4)
            .save(input.path().join(spread_file_name(1)))
            .expect("write spread 1");
        spread(8, 4)
            .save(input.path().join(spread_file_name(2)))
            .expect("write spread 2");

        let report = split_spreads(input.path(), output.path(), 2).expect("split");

        let names: Vec<_> = report
            .written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec!["page_000_cover.png", "page_001.png", "page_002.png", "page_003.png"]
        );
        assert!(report.missing.is_empty());

        let cover = image_rs::open(output.path().join("page_000_cover.png"))
            .expect("cover")
            .to_rgba8();
        assert_eq!(cover.dimensions(), (4, 4));
        assert_eq!(cover.get_pixel(0, 0), &Rgba([0, 0, 255, 255]));

        let page_two = image_rs::open(output.path().join("page_002.png"))
            .expect("page 2")
            .to_rgba8();
        assert_eq!(page_two.get_pixel(0, 0), &Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn missing_spreads_are_skipped() {
        let input = tempdir().expect("input dir");
        let output = tempdir().expect("output dir");
        spread(4, 2)
            .save(input.path().join(spread_file_name(2)))
            .expect("write spread 2");

        let report = split_spreads(input.path(), output.path(), 3).expect("split");

        assert_eq!(report.written.len(), 2);
        assert_eq!(report.missing.len(), 2);
        assert!(output.path().join("page_003.png").is_file());
        assert!(!output.path().join("page_000_cover.png").exists());
    }
}
