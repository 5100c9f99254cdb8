// SPDX-License-Identifier: MPL-2.0
//! Drops a blank first page and shifts the rest of the book down by one.
//!
//! Scanners often emit an empty page right after the cover. Since pages are
//! addressed by number, leaving the blank in place would put every spread
//! out of step, so the following pages are renamed to close the gap.

use super::format_mib;
use crate::book::PathRule;
use crate::config::{BLANK_PAGE_THRESHOLD_BYTES, MAX_DISCOVERED_PAGES};
use crate::error::Result;
use std::fs;

/// What a renumber run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// There is no page 1 to inspect.
    NoFirstPage,
    /// Page 1 is large enough to hold content and was kept.
    NotBlank { bytes: u64 },
    /// Page 1 was removed and `shifted` pages moved down by one.
    Renumbered { removed_bytes: u64, shifted: usize },
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::NoFirstPage => write!(f, "no page 1 found, nothing to do"),
            Outcome::NotBlank { bytes } => {
                write!(f, "page 1 is not blank ({}), kept", format_mib(*bytes))
            }
            Outcome::Renumbered {
                removed_bytes,
                shifted,
            } => write!(
                f,
                "removed blank page 1 ({}), shifted {shifted} pages",
                format_mib(*removed_bytes)
            ),
        }
    }
}

/// Removes page 1 of `rule`'s directory when it is blank and renames pages
/// 2, 3, ... to 1, 2, ... The cover is left untouched.
///
/// Renaming runs in ascending order, so each target name is already free.
///
/// # Errors
///
/// Returns an error when a file cannot be inspected, removed or renamed.
pub fn remove_blank_first_page(rule: &PathRule) -> Result<Outcome> {
    let first = rule.path_for(1);
    if !first.is_file() {
        return Ok(Outcome::NoFirstPage);
    }

    let bytes = fs::metadata(&first)?.len();
    if bytes >= BLANK_PAGE_THRESHOLD_BYTES {
        return Ok(Outcome::NotBlank { bytes });
    }

    fs::remove_file(&first)?;
    log::info!("removed blank {}", first.display());

    let mut shifted = 0;
    for index in 2..=MAX_DISCOVERED_PAGES {
        let source = rule.path_for(index);
        if !source.is_file() {
            break;
        }
        let target = rule.path_for(index - 1);
        fs::rename(&source, &target)?;
        log::debug!("{} -> {}", source.display(), target.display());
        shifted += 1;
    }

    Ok(Outcome::Renumbered {
        removed_bytes: bytes,
        shifted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write(rule: &PathRule, index: usize, contents: &[u8]) {
        fs::write(rule.path_for(index), contents).expect("write page");
    }

    #[test]
    fn blank_first_page_is_removed_and_pages_shift() {
        let dir = tempdir().expect("temp dir");
        let rule = PathRule::new(dir.path());
        write(&rule, 0, b"cover");
        write(&rule, 1, b"");
        write(&rule, 2, b"two");
        write(&rule, 3, b"three");

        let outcome = remove_blank_first_page(&rule).expect("renumber");

        assert_eq!(
            outcome,
            Outcome::Renumbered {
                removed_bytes: 0,
                shifted: 2
            }
        );
        assert_eq!(fs::read(rule.path_for(0)).expect("cover"), b"cover");
        assert_eq!(fs::read(rule.path_for(1)).expect("page 1"), b"two");
        assert_eq!(fs::read(rule.path_for(2)).expect("page 2"), b"three");
        assert!(!rule.path_for(3).exists());
    }

    #[test]
    fn large_first_page_is_kept() {
        let dir = tempdir().expect("temp dir");
        let rule = PathRule::new(dir.path());
        let content = vec![7u8; usize::try_from(BLANK_PAGE_THRESHOLD_BYTES).unwrap()];
        write(&rule, 1, &content);
        write(&rule, 2, b"two");

        let outcome = remove_blank_first_page(&rule).expect("renumber");

        assert_eq!(
            outcome,
            Outcome::NotBlank {
                bytes: BLANK_PAGE_THRESHOLD_BYTES
            }
        );
        assert!(rule.path_for(2).is_file());
    }

    #[test]
    fn missing_first_page_changes_nothing() {
        let dir = tempdir().expect("temp dir");
        let rule = PathRule::new(dir.path());
        write(&rule, 2, b"two");

        assert_eq!(
            remove_blank_first_page(&rule).expect("renumber"),
            Outcome::NoFirstPage
        );
        assert!(rule.path_for(2).is_file());
    }

    #[test]
    fn shifting_stops_at_the_first_gap() {
        let dir = tempdir().expect("temp dir");
        let rule = PathRule::new(dir.path());
        write(&rule, 1, b"");
        write(&rule, 2, b"two");
        write(&rule, 4, b"four");

        let outcome = remove_blank_first_page(&rule).expect("renumber");

        assert!(matches!(outcome, Outcome::Renumbered { shifted: 1, .. }));
        assert!(rule.path_for(4).is_file());
    }
}
