// SPDX-License-Identifier: MPL-2.0
//! Page image handling.
//!
//! Decoding lives in [`image`]; this module only adds the list of formats a
//! book directory may contain.

pub mod image;

use std::path::Path;

pub use extensions::IMAGE_EXTENSIONS;
pub use image::{load_image, ImageData};

/// Supported page extensions
pub mod extensions {
    /// Image file extensions
    pub const IMAGE_EXTENSIONS: &[&str] = &[
        "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico", "svg",
    ];

    /// Raster extensions the batch tools can re-encode.
    pub const RASTER_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "bmp", "tiff", "tif"];
}

/// Returns `true` when `path` has an extension listed in `allowed` (case-insensitive).
#[must_use]
pub fn has_extension<P: AsRef<Path>>(path: P, allowed: &[&str]) -> bool {
    path.as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| allowed.iter().any(|a| a.eq_ignore_ascii_case(ext)))
}

/// Returns `true` when `path` names a page image the viewer can decode.
#[must_use]
pub fn is_page_image<P: AsRef<Path>>(path: P) -> bool {
    has_extension(path, IMAGE_EXTENSIONS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn detects_page_images_case_insensitively() {
        assert!(is_page_image("page_001.png"));
        assert!(is_page_image("page_001.JPG"));
        assert!(is_page_image("cover.svg"));
        assert!(!is_page_image("notes.pdf"));
        assert!(!is_page_image("no_extension"));
    }

    #[test]
    fn raster_list_excludes_svg() {
        let path = PathBuf::from("/book/page_000_cover.svg");
        assert!(is_page_image(&path));
        assert!(!has_extension(&path, extensions::RASTER_EXTENSIONS));
    }
}
