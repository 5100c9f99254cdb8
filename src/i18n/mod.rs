// SPDX-License-Identifier: MPL-2.0
//! Localized interface text.
//!
//! Translations are Fluent files embedded from `assets/i18n/`. The locale comes
//! from `--lang`, then `[general] language`, then the OS, and falls back to
//! `en-US`. Keys missing from the chosen locale fall back to `en-US` as well.

pub mod fluent;
