//! Separator-normalized path strings.
//!
//! Scoring, glob matching, and display all work on `/`-separated strings so a
//! workspace behaves the same whether its paths arrive with `\` or `/`.

use std::path::Path;

/// Convert every separator to `/` and drop a trailing separator
pub fn normalize_separators(path: &str) -> String {
    let mut normalized = path.replace('\\', "/");
    while normalized.len() > 1 && normalized.ends_with('/') {
        normalized.pop();
    }
    normalized
}

/// `/`-separated string form of a path
pub fn to_slash(path: &Path) -> String {
    normalize_separators(&path.to_string_lossy())
}

/// Number of non-empty segments (`/proj/src/a.ts` has 3)
pub fn segment_count(path: &str) -> usize {
    path.split('/').filter(|segment| !segment.is_empty()).count()
}

/// Last segment of a normalized path
pub fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Segment-aware prefix test: `/proj/src` contains `/proj/src/a.ts` but not `/proj/srcx/a.ts`.
///
/// The filesystem root may be spelled `""` or `/`.
pub fn is_ancestor(prefix: &str, path: &str) -> bool {
    let prefix = root_as_empty(prefix);
    if prefix.is_empty() {
        return path.len() > 1 && path.starts_with('/');
    }
    path.len() > prefix.len()
        && path.starts_with(prefix)
        && path.as_bytes()[prefix.len()] == b'/'
}

/// `path` expressed relative to `base`, when `base` contains it
pub fn relative_to(path: &str, base: &str) -> Option<String> {
    if !is_ancestor(base, path) {
        return None;
    }
    let base = root_as_empty(base);
    Some(path[base.len() + 1..].to_string())
}

fn root_as_empty(prefix: &str) -> &str {
    if prefix == "/" { "" } else { prefix }
}

#[cfg(test)]
mod tests {
    include!("paths.test.rs");
}
