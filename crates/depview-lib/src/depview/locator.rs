//! ConfigFileLocator: finds the type-configuration file for a target source file.

use super::paths::{file_name, normalize_separators, relative_to, to_slash};
use super::scoring;
use crate::application::session::{FileSystemProvider, InteractiveProvider, PickItem};
use crate::primitives::DEPENDENCY_DIRS;
use globset::{GlobBuilder, GlobMatcher};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Title of the disambiguation prompt
pub const PICK_TITLE: &str = "Select a tsconfig file";

#[derive(Debug, Error)]
pub enum LocateError {
    #[error("Invalid type-configuration pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Failed to enumerate workspace files under {root}: {reason}")]
    Enumeration { root: String, reason: String },

    #[error("Type-configuration prompt failed: {reason}")]
    Prompt { reason: String },

    #[error("Selection {index} is out of range for {count} candidates")]
    SelectionOutOfRange { index: usize, count: usize },
}

/// A discovered configuration file with its ranking keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    pub path: PathBuf,
    /// Separator-normalized form of `path`
    pub normalized: String,
    pub score: i32,
    pub name_length: usize,
}

impl CandidateFile {
    pub fn new(path: PathBuf, target: &str) -> Self {
        let normalized = to_slash(&path);
        Self {
            score: scoring::score(&normalized, target),
            name_length: scoring::name_length(&normalized),
            normalized,
            path,
        }
    }

    pub fn is_related(&self) -> bool {
        self.score != scoring::UNRELATED
    }

    fn sort_key(&self) -> (i32, usize, &str) {
        (self.score, self.name_length, &self.normalized)
    }

    fn to_pick_item(&self) -> PickItem {
        PickItem {
            label: file_name(&self.normalized).to_string(),
            detail: self.normalized.clone(),
        }
    }
}

/// Score and order candidates, closest first
pub fn rank_candidates(paths: Vec<PathBuf>, target: &Path) -> Vec<CandidateFile> {
    let target = to_slash(target);
    let mut candidates: Vec<CandidateFile> = paths
        .into_iter()
        .map(|path| CandidateFile::new(path, &target))
        .collect();

    candidates.sort_by(|a, b| scoring::compare(a.sort_key(), b.sort_key()));
    candidates
}

fn in_dependency_dir(relative: &str) -> bool {
    relative
        .split('/')
        .any(|segment| DEPENDENCY_DIRS.contains(&segment))
}

fn compile_pattern(pattern: &str) -> Result<GlobMatcher, LocateError> {
    let pattern = normalize_separators(pattern.trim());
    let pattern = pattern.trim_start_matches("./");
    let glob = if pattern.starts_with("**/") {
        pattern.to_string()
    } else {
        format!("**/{pattern}")
    };

    GlobBuilder::new(&glob)
        .literal_separator(true)
        .build()
        .map(|glob| glob.compile_matcher())
        .map_err(|source| LocateError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}

/// Locates type-configuration files through the session's providers
pub struct ConfigFileLocator<'a> {
    filesystem: &'a dyn FileSystemProvider,
    interactive: &'a dyn InteractiveProvider,
    auto_select_closest: bool,
}

impl<'a> ConfigFileLocator<'a> {
    pub fn new(
        filesystem: &'a dyn FileSystemProvider,
        interactive: &'a dyn InteractiveProvider,
    ) -> Self {
        Self {
            filesystem,
            interactive,
            auto_select_closest: true,
        }
    }

    /// Whether a strictly closest candidate is taken without asking
    pub fn with_auto_select(mut self, auto_select_closest: bool) -> Self {
        self.auto_select_closest = auto_select_closest;
        self
    }

    /// Every file under `root` matching `pattern`, outside package-manager directories
    pub fn find_candidates(&self, root: &Path, pattern: &str) -> Result<Vec<PathBuf>, LocateError> {
        let matcher = compile_pattern(pattern)?;
        let root_slash = to_slash(root);

        let files = self
            .filesystem
            .list_files(root)
            .map_err(|e| LocateError::Enumeration {
                root: root_slash.clone(),
                reason: format!("{e:#}"),
            })?;

        Ok(files
            .into_iter()
            .filter(|path| {
                let full = to_slash(path);
                let relative = relative_to(&full, &root_slash).unwrap_or(full);
                !in_dependency_dir(&relative) && matcher.is_match(&relative)
            })
            .collect())
    }

    /// Find the type-configuration file for `target` below `root`.
    ///
    /// No match gives `None`, a single match is returned as-is, and several
    /// matches are ranked by closeness. The closest is taken directly when
    /// auto-selection is on and nothing ties with it; otherwise the ranked
    /// list goes to the interactive provider, whose cancellation also yields
    /// `None`.
    pub fn locate(
        &self,
        target: &Path,
        root: &Path,
        pattern: &str,
    ) -> Result<Option<PathBuf>, LocateError> {
        let mut matches = self.find_candidates(root, pattern)?;

        match matches.len() {
            0 => {
                tracing::debug!(pattern, root = %root.display(), "No type-configuration candidates");
                return Ok(None);
            }
            1 => return Ok(matches.pop()),
            _ => {}
        }

        let ranked = rank_candidates(matches, target);
        tracing::debug!(
            candidates = ?ranked.iter().map(|c| (&c.normalized, c.score)).collect::<Vec<_>>(),
            "Ranked type-configuration candidates"
        );

        if self.auto_select_closest && is_strictly_closest(&ranked) {
            let closest = &ranked[0];
            tracing::info!(path = %closest.normalized, score = closest.score, "Auto-selected closest type configuration");
            return Ok(Some(closest.path.clone()));
        }

        let items: Vec<PickItem> = ranked.iter().map(CandidateFile::to_pick_item).collect();
        let choice = self
            .interactive
            .pick(PICK_TITLE, &items)
            .map_err(|e| LocateError::Prompt {
                reason: format!("{e:#}"),
            })?;

        match choice {
            Some(index) if index < ranked.len() => Ok(Some(ranked[index].path.clone())),
            Some(index) => Err(LocateError::SelectionOutOfRange {
                index,
                count: ranked.len(),
            }),
            None => {
                tracing::info!("Type-configuration selection cancelled");
                Ok(None)
            }
        }
    }

    /// Probe `names` in each directory from the target's own up to `root`.
    ///
    /// The first existing file wins; names are tried in the given order
    /// within one directory. Never prompts.
    pub fn locate_in_ancestors(&self, target: &Path, root: &Path, names: &[String]) -> Option<PathBuf> {
        let root_slash = to_slash(root);

        for directory in target.ancestors().skip(1) {
            let directory_slash = to_slash(directory);
            let inside = directory_slash == root_slash
                || relative_to(&directory_slash, &root_slash).is_some();
            if !inside {
                break;
            }

            for name in names {
                let candidate = directory.join(name);
                if self.filesystem.is_file(&candidate) {
                    return Some(candidate);
                }
            }
        }

        None
    }
}

fn is_strictly_closest(ranked: &[CandidateFile]) -> bool {
    match ranked {
        [first, second, ..] => first.is_related() && (!second.is_related() || first.score > second.score),
        _ => false,
    }
}

/// Split a comma-separated list of file names, dropping blanks
pub fn parse_name_list(names: &str) -> Vec<String> {
    names
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    include!("locator.test.rs");
}
