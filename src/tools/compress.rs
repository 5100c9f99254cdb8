// SPDX-License-Identifier: MPL-2.0
//! Re-encodes PNG pages as JPEG to shrink a book directory.
//!
//! Each page is flattened onto white, turned upright according to its EXIF
//! orientation, downscaled to the maximum width with Lanczos filtering and
//! written as a JPEG of the requested quality.

use super::format_mib;
use crate::config::{DEFAULT_COMPRESS_MAX_WIDTH, DEFAULT_COMPRESS_QUALITY};
use crate::error::{Error, Result};
use image_rs::codecs::jpeg::JpegEncoder;
use image_rs::imageops::FilterType;
use image_rs::{DynamicImage, GenericImageView, Rgb, RgbImage};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// Settings of a compress run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressOptions {
    pub max_width: u32,
    /// JPEG quality, clamped to 1..=100.
    pub quality: u8,
    /// Back up the input and swap the JPEGs in once done.
    pub replace: bool,
}

impl Default for CompressOptions {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_COMPRESS_MAX_WIDTH,
            quality: DEFAULT_COMPRESS_QUALITY,
            replace: false,
        }
    }
}

/// Size change of one re-encoded page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub source: PathBuf,
    pub target: PathBuf,
    pub original_bytes: u64,
    pub compressed_bytes: u64,
}

impl FileReport {
    /// Percentage of the original size saved (negative when the file grew).
    #[must_use]
    pub fn saved_percent(&self) -> f64 {
        saved_percent(self.original_bytes, self.compressed_bytes)
    }
}

impl std::fmt::Display for FileReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = self
            .source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        write!(
            f,
            "{name}: {} -> {} ({:.1}% saved)",
            format_mib(self.original_bytes),
            format_mib(self.compressed_bytes),
            self.saved_percent()
        )
    }
}

/// Outcome of a compress run.
#[derive(Debug, Default)]
pub struct CompressReport {
    pub files: Vec<FileReport>,
    /// Where the original input was copied when replacing.
    pub backup: Option<PathBuf>,
}

impl CompressReport {
    #[must_use]
    pub fn original_bytes(&self) -> u64 {
        self.files.iter().map(|f| f.original_bytes).sum()
    }

    #[must_use]
    pub fn compressed_bytes(&self) -> u64 {
        self.files.iter().map(|f| f.compressed_bytes).sum()
    }

    #[must_use]
    pub fn saved_percent(&self) -> f64 {
        saved_percent(self.original_bytes(), self.compressed_bytes())
    }
}

#[allow(clippy::cast_precision_loss)]
fn saved_percent(original: u64, compressed: u64) -> f64 {
    if original == 0 {
        return 0.0;
    }
    (original as f64 - compressed as f64) / original as f64 * 100.0
}

/// Target size for a page `width` x `height` wide at most `max_width`.
///
/// Narrower pages keep their size; the aspect ratio is preserved and neither
/// side drops below one pixel.
#[must_use]
pub fn scaled_size(width: u32, height: u32, max_width: u32) -> (u32, u32) {
    if max_width == 0 || width <= max_width {
        return (width, height);
    }
    let scaled = u64::from(height) * u64::from(max_width) / u64::from(width);
    let height = u32::try_from(scaled).unwrap_or(u32::MAX).max(1);
    (max_width, height)
}

/// Composites the image over a white background and drops the alpha channel.
#[must_use]
pub fn flatten_on_white(image: &DynamicImage) -> RgbImage {
    if !image.color().has_alpha() {
        return image.to_rgb8();
    }
    let rgba = image.to_rgba8();
    RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let [r, g, b, a] = rgba.get_pixel(x, y).0;
        let alpha = u16::from(a);
        let blend = |c: u8| -> u8 {
            let value = (u16::from(c) * alpha + 255 * (255 - alpha) + 127) / 255;
            u8::try_from(value).unwrap_or(u8::MAX)
        };
        Rgb([blend(r), blend(g), blend(b)])
    })
}

/// Reads the EXIF orientation tag (1..=8) of the file at `path`, if any.
#[must_use]
pub fn read_orientation(path: &Path) -> Option<u32> {
    let file = File::open(path).ok()?;
    let mut reader = BufReader::new(file);
    let exif = exif::Reader::new().read_from_container(&mut reader).ok()?;
    exif.get_field(exif::Tag::Orientation, exif::In::PRIMARY)
        .and_then(|field| field.value.get_uint(0))
}

/// Rotates and mirrors `image` so that an EXIF `orientation` reads upright.
#[must_use]
pub fn apply_orientation(image: DynamicImage, orientation: u32) -> DynamicImage {
    match orientation {
        2 => image.fliph(),
        3 => image.rotate180(),
        4 => image.flipv(),
        5 => image.rotate90().fliph(),
        6 => image.rotate90(),
        7 => image.rotate270().fliph(),
        8 => image.rotate270(),
        _ => image,
    }
}

/// Re-encodes one page from `source` into the JPEG file `target`.
///
/// # Errors
///
/// Returns an error when the source cannot be decoded or the target cannot
/// be written.
pub fn compress_file(source: &Path, target: &Path, options: &CompressOptions) -> Result<FileReport> {
    let original_bytes = fs::metadata(source)?.len();
    let mut image = image_rs::open(source).map_err(|e| Error::LoadFailure {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;

    if let Some(orientation) = read_orientation(source) {
        image = apply_orientation(image, orientation);
    }

    let (width, height) = image.dimensions();
    let (new_width, new_height) = scaled_size(width, height, options.max_width);
    if (new_width, new_height) != (width, height) {
        log::debug!(
            "resizing {} from {width}x{height} to {new_width}x{new_height}",
            source.display()
        );
        image = image.resize_exact(new_width, new_height, FilterType::Lanczos3);
    }

    let rgb = flatten_on_white(&image);
    let writer = BufWriter::new(File::create(target)?);
    let quality = options.quality.clamp(1, 100);
    rgb.write_with_encoder(JpegEncoder::new_with_quality(writer, quality))?;

    Ok(FileReport {
        source: source.to_path_buf(),
        target: target.to_path_buf(),
        original_bytes,
        compressed_bytes: fs::metadata(target)?.len(),
    })
}

/// PNG files directly inside `dir`, sorted by name.
fn png_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && crate::media::has_extension(path, &["png"]))
        .collect();
    files.sort();
    Ok(files)
}

/// Compresses every PNG page of `input` into `output`.
///
/// A page that fails to re-encode is logged and skipped so one bad scan does
/// not lose the rest of the run.
///
/// # Errors
///
/// Returns an error when a directory cannot be read or created, or when the
/// replacement step fails.
pub fn compress_dir(input: &Path, output: &Path, options: &CompressOptions) -> Result<CompressReport> {
    fs::create_dir_all(output)?;
    let mut report = CompressReport::default();

    for source in png_files(input)? {
        let Some(stem) = source.file_stem() else {
            continue;
        };
        let target = output.join(stem).with_extension("jpg");
        match compress_file(&source, &target, options) {
            Ok(file) => {
                log::info!("{file}");
                report.files.push(file);
            }
            Err(err) => log::warn!("skipping {}: {err}", source.display()),
        }
    }

    if options.replace {
        report.backup = Some(replace_originals(input, &report.files)?);
    }

    Ok(report)
}

/// Sibling directory the originals are copied to before replacement.
#[must_use]
pub fn backup_dir(input: &Path) -> PathBuf {
    let mut name = input
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "pages".into());
    name.push("_backup");
    input.with_file_name(name)
}

/// Backs up `input`, then swaps every PNG page for its JPEG counterpart.
fn replace_originals(input: &Path, files: &[FileReport]) -> Result<PathBuf> {
    let backup = backup_dir(input);
    if backup.exists() {
        fs::remove_dir_all(&backup)?;
    }
    copy_dir(input, &backup)?;
    log::info!("originals backed up to {}", backup.display());

    for file in files {
        let Some(name) = file.target.file_name() else {
            continue;
        };
        fs::copy(&file.target, input.join(name))?;
        fs::remove_file(&file.source)?;
    }
    log::warn!(
        "pages are now JPEG; set [book] extension = \"jpg\" and the matching cover_file"
    );
    Ok(backup)
}

fn copy_dir(from: &Path, to: &Path) -> Result<()> {
    fs::create_dir_all(to)?;
    for entry in fs::read_dir(from)? {
        let path = entry?.path();
        let Some(name) = path.file_name() else {
            continue;
        };
        if path.is_dir() {
            copy_dir(&path, &to.join(name))?;
        } else {
            fs::copy(&path, to.join(name))?;
        }
    }
    Ok(())
}
