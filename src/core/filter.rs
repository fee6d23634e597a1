//! Target directory discovery and filtering
//!
//! Patterns are shell globs expanded against the base directory. Each `*`
//! matches within a single path segment, so `"*"` only ever yields immediate
//! children of the base.

use log::debug;
use std::collections::HashSet;
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use super::config::VCS_MARKER;
use crate::error::{MrhError, Result};

/// Check if a .git file (for submodules/worktrees) contains gitdir reference
/// Only reads the first 5 lines
fn is_git_file(path: &Path) -> bool {
    match fs::File::open(path) {
        Ok(file) => BufReader::new(file)
            .lines()
            .take(5)
            .map_while(std::result::Result::ok)
            .any(|line| line.trim_start().starts_with("gitdir:")),
        Err(_) => false,
    }
}

/// Returns true if the directory carries a version-control marker at its top level
pub fn is_repository(path: &Path) -> bool {
    let marker = path.join(VCS_MARKER);
    marker.is_dir() || (marker.is_file() && is_git_file(&marker))
}

fn is_target(path: &Path, repositories_only: bool) -> bool {
    path.is_dir() && (!repositories_only || is_repository(path))
}

/// Resolves filter patterns into the sorted, deduplicated list of target directories
///
/// Matches from every pattern are pooled, so a directory matched by several
/// overlapping patterns appears once. The result is ordered by the absolute
/// path, which keeps dispatch and report order stable between runs.
///
/// An empty pattern list, or a base directory that does not exist, yields an
/// empty list rather than an error. Only malformed glob syntax is an error.
pub fn resolve<S: AsRef<str>>(
    base_dir: impl AsRef<Path>,
    patterns: &[S],
    repositories_only: bool,
) -> Result<Vec<PathBuf>> {
    let base = match base_dir.as_ref().canonicalize() {
        Ok(base) if base.is_dir() => base,
        _ => {
            debug!(
                "Base directory {} is not available, nothing to filter",
                base_dir.as_ref().display()
            );
            return Ok(Vec::new());
        }
    };

    let escaped_base = glob::Pattern::escape(&base.to_string_lossy());
    let mut matches: HashSet<PathBuf> = HashSet::new();

    for pattern in patterns {
        let pattern = pattern.as_ref();
        if pattern.is_empty() {
            continue;
        }

        let full_pattern = format!("{escaped_base}{MAIN_SEPARATOR}{pattern}");
        let paths = glob::glob(&full_pattern).map_err(|source| MrhError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        for entry in paths {
            match entry {
                Ok(path) if is_target(&path, repositories_only) => {
                    matches.insert(path);
                }
                Ok(_) => {}
                Err(e) => debug!("Skipping unreadable path {}: {}", e.path().display(), e.error()),
            }
        }
    }

    let mut targets: Vec<PathBuf> = matches.into_iter().collect();
    targets.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));

    debug!("Resolved {} target directories in {}", targets.len(), base.display());
    Ok(targets)
}
