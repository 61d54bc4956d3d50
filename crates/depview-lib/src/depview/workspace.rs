//! Workspace folder resolution for a target file.

use super::paths::{relative_to, segment_count, to_slash};
use crate::application::session::FileSystemProvider;
use crate::primitives::TYPED_EXTENSIONS;
use std::path::{Component, Path, PathBuf};

/// Files that mark the top of a project, strongest first
const PROJECT_MARKERS: &[&str] = &["package.json", ".git"];

/// `path` made absolute against `cwd`, with `.` and `..` folded lexically
pub fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Folder the target belongs to.
///
/// With explicit roots, the deepest root containing the target wins. Without
/// one, the nearest ancestor holding a project marker is used, falling back
/// to the target's own directory.
pub fn workspace_folder_for(
    filesystem: &dyn FileSystemProvider,
    target: &Path,
    roots: &[PathBuf],
) -> PathBuf {
    let target_slash = to_slash(target);

    let deepest_root = roots
        .iter()
        .filter(|root| relative_to(&target_slash, &to_slash(root)).is_some())
        .max_by_key(|root| segment_count(&to_slash(root)));
    if let Some(root) = deepest_root {
        return root.clone();
    }
    if !roots.is_empty() {
        tracing::warn!(target = %target.display(), "Target is outside every given root");
    }

    for marker in PROJECT_MARKERS {
        let found = target
            .ancestors()
            .skip(1)
            .find(|dir| filesystem.exists(&dir.join(marker)));
        if let Some(dir) = found {
            tracing::debug!(folder = %dir.display(), marker, "Workspace folder from project marker");
            return dir.to_path_buf();
        }
    }

    target.parent().map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("/"))
}

/// Target path relative to its workspace folder, `/`-separated
pub fn relative_target(target: &Path, folder: &Path) -> String {
    let target = to_slash(target);
    relative_to(&target, &to_slash(folder)).unwrap_or(target)
}

/// Whether the file's extension switches the type system on
pub fn is_typed_source(target: &Path) -> bool {
    target
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| TYPED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

#[cfg(test)]
mod tests {
    include!("workspace.test.rs");
}
