// SPDX-License-Identifier: MPL-2.0
use crate::book::engine::ENGINES;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Image(String),
    Svg(String),
    Config(String),
    /// A page image did not settle before the load timeout elapsed.
    LoadTimeout { path: PathBuf, timeout: Duration },
    /// The loader reported an error for a page image.
    LoadFailure { path: PathBuf, reason: String },
    /// A prerequisite of the flip engine is absent at initialization time.
    DependencyMissing(Dependency),
    /// A page was attached out of index order.
    PageOrder { expected: usize, found: usize },
    /// The book has no pages to display.
    EmptyBook,
}

/// Prerequisites checked before handing pages to a flip engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dependency {
    /// The windowing runtime the book is displayed in.
    UiRuntime,
    /// The flip engine registered under the given name.
    FlipEngine(String),
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dependency::UiRuntime => write!(f, "UI runtime"),
            Dependency::FlipEngine(name) => write!(
                f,
                "flip engine '{}' (available: {})",
                name,
                ENGINES.join(", ")
            ),
        }
    }
}

impl Error {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) | Error::Image(_) | Error::Svg(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::LoadTimeout { .. } => "error-load-timeout",
            Error::LoadFailure { .. } => "error-load-failure",
            Error::DependencyMissing(Dependency::UiRuntime) => "error-dependency-runtime",
            Error::DependencyMissing(Dependency::FlipEngine(_)) => "error-dependency-engine",
            Error::PageOrder { .. } => "error-page-order",
            Error::EmptyBook => "error-empty-book",
        }
    }

    /// Arguments substituted into the localized message.
    pub fn i18n_args(&self) -> Vec<(&'static str, String)> {
        match self {
            Error::LoadTimeout { path, timeout } => vec![
                ("file", file_label(path)),
                ("seconds", timeout.as_secs().to_string()),
            ],
            Error::LoadFailure { path, reason } => {
                vec![("file", file_label(path)), ("reason", reason.clone())]
            }
            Error::DependencyMissing(Dependency::FlipEngine(name)) => {
                vec![("name", name.clone())]
            }
            Error::Io(detail) | Error::Image(detail) | Error::Svg(detail) | Error::Config(detail) => {
                vec![("detail", detail.clone())]
            }
            Error::PageOrder { expected, found } => vec![
                ("expected", expected.to_string()),
                ("found", found.to_string()),
            ],
            Error::DependencyMissing(Dependency::UiRuntime) | Error::EmptyBook => Vec::new(),
        }
    }

    /// Whether this error came out of the preload pipeline.
    pub fn is_load_error(&self) -> bool {
        matches!(self, Error::LoadTimeout { .. } | Error::LoadFailure { .. })
    }
}

fn file_label(path: &std::path::Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::Svg(e) => write!(f, "SVG Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::LoadTimeout { path, timeout } => write!(
                f,
                "Timed out after {} ms loading {}",
                timeout.as_millis(),
                path.display()
            ),
            Error::LoadFailure { path, reason } => {
                write!(f, "Failed to load {}: {}", path.display(), reason)
            }
            Error::DependencyMissing(dependency) => {
                write!(f, "Missing dependency: {}", dependency)
            }
            Error::PageOrder { expected, found } => write!(
                f,
                "Page attached out of order: expected index {}, got {}",
                expected, found
            ),
            Error::EmptyBook => write!(f, "The book has no pages"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
