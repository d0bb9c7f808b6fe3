//! Path helpers shared by the manifest loader and the definition emitter.

use std::path::{Component, Path, PathBuf};

/// Lexically normalize a path: drop `.` segments and fold `..` into its parent.
///
/// Does not touch the filesystem, so symlinks are not resolved. Leading `..`
/// segments of a relative path are kept.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let can_pop = matches!(
                    normalized.components().next_back(),
                    Some(Component::Normal(_))
                );
                if can_pop {
                    normalized.pop();
                } else if !normalized.has_root() {
                    normalized.push("..");
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Render a relative directory the way definition consumers expect it:
/// `/`-separated with exactly one trailing `/`.
pub fn definition_dir_string(relative: &Path) -> String {
    let segments: Vec<String> = normalize_path(relative)
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            _ => None,
        })
        .collect();

    if segments.is_empty() { String::new() } else { format!("{}/", segments.join("/")) }
}

/// File name without its final extension.
pub fn base_name(path: &Path) -> String {
    path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default()
}
