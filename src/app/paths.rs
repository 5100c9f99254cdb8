// SPDX-License-Identifier: MPL-2.0
//! Location of the directory holding `settings.toml`.
//!
//! First match wins:
//!
//! 1. an explicit override passed by the caller (tests)
//! 2. `--config-dir`, recorded once at startup by [`init_cli_override`]
//! 3. the `FLIPBOOK_CONFIG_DIR` environment variable, when non-empty
//! 4. the platform config directory joined with `Flipbook`

use std::path::PathBuf;
use std::sync::OnceLock;

const APP_DIR_NAME: &str = "Flipbook";

pub const ENV_CONFIG_DIR: &str = "FLIPBOOK_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` argument. Later calls are ignored.
pub fn init_cli_override(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        log::warn!("config dir override already initialized, ignoring");
    }
}

/// Config directory, or `None` when the platform has none and nothing overrides it.
#[must_use]
pub fn config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    override_path
        .or_else(|| CLI_CONFIG_DIR.get().cloned().flatten())
        .or_else(|| env_config_dir(std::env::var(ENV_CONFIG_DIR).ok()))
        .or_else(|| dirs::config_dir().map(|base| base.join(APP_DIR_NAME)))
}

fn env_config_dir(value: Option<String>) -> Option<PathBuf> {
    value.filter(|v| !v.is_empty()).map(PathBuf::from)
}
