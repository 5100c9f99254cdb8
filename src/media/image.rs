// SPDX-License-Identifier: MPL-2.0
//! Page image decoding.
//!
//! Raster formats go through the `image` crate and are handed to Iced as RGBA.
//! SVG pages are rasterized once at their intrinsic size and kept as PNG bytes.

use crate::error::{Error, Result};
use iced::widget::image;
use resvg::usvg;
use std::fs;
use std::path::Path;

/// A decoded page ready for the renderer.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }

    /// Wraps encoded bytes whose dimensions are already known.
    #[must_use]
    pub fn from_encoded(encoded_bytes: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            handle: image::Handle::from_bytes(encoded_bytes),
            width,
            height,
        }
    }

    /// Decoded footprint at 4 bytes per pixel, used for the cache budget.
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        (self.width as usize) * (self.height as usize) * 4
    }
}

/// Decodes the page image at `path`.
///
/// # Errors
///
/// - [`Error::Io`] when the file cannot be read
/// - [`Error::Image`] when a raster file is corrupt or of an unknown format
/// - [`Error::Svg`] when an SVG file does not parse or has an empty size
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    if super::has_extension(path, &["svg"]) {
        rasterize_svg(&bytes)
    } else {
        decode_raster(&bytes)
    }
}

fn decode_raster(bytes: &[u8]) -> Result<ImageData> {
    let rgba = image_rs::load_from_memory(bytes)?.into_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(ImageData::from_rgba(width, height, rgba.into_raw()))
}

fn rasterize_svg(bytes: &[u8]) -> Result<ImageData> {
    let tree = usvg::Tree::from_data(bytes, &usvg::Options::default())
        .map_err(|e| Error::Svg(e.to_string()))?;

    let size = tree.size().to_int_size();
    let (width, height) = (size.width(), size.height());
    if width == 0 || height == 0 {
        return Err(Error::Svg("SVG page has an empty size".into()));
    }

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| Error::Svg(format!("cannot allocate a {width}x{height} pixmap")))?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    let png = pixmap.encode_png().map_err(|e| Error::Svg(e.to_string()))?;
    Ok(ImageData::from_encoded(png, width, height))
}
