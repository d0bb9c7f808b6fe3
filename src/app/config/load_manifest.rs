//! Staging manifest loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::domain::config::{self, StagingLayout, StagingManifest};
use crate::domain::paths::normalize_path;
use crate::domain::AppError;

/// A parsed manifest together with the directories it resolves to.
#[derive(Debug, Clone)]
pub struct LoadedManifest {
    pub path: PathBuf,
    pub manifest: StagingManifest,
    pub layout: StagingLayout,
}

/// Load `depstage.toml` from `path`.
///
/// `path` may name the manifest file or the directory holding it. Relative
/// paths resolve against the current directory.
pub fn load_manifest(path: &Path) -> Result<LoadedManifest, AppError> {
    let path = if path.is_absolute() {
        normalize_path(path)
    } else {
        normalize_path(&std::env::current_dir()?.join(path))
    };
    let path = if path.is_dir() { config::paths::manifest(&path) } else { path };

    if !path.is_file() {
        return Err(AppError::ManifestNotFound(path));
    }

    let content = fs::read_to_string(&path)?;
    let manifest = config::parse::parse_manifest_content(&content)?;
    let manifest_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
    let layout = manifest.layout(&manifest_dir);

    debug!(
        "Loaded manifest \"{}\" (third party: \"{}\", staging: \"{}\")",
        path.display(),
        layout.third_party_root.display(),
        layout.staging_dir.display()
    );

    Ok(LoadedManifest { path, manifest, layout })
}
