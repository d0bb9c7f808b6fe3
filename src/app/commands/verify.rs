//! `verify`: check a staging directory the way the runtime loader reads it.

use std::path::{Path, PathBuf};

use log::debug;

use crate::domain::{AppError, LinkageKind, Platform, parse_dynamic_names};
use crate::ports::ArtifactStore;

/// Parse `names_definition` and confirm `<staging_dir>/<name>.<ext>` exists
/// for every name. Returns the checked paths in definition order.
pub fn execute<S: ArtifactStore>(
    store: &S,
    staging_dir: &Path,
    names_definition: &str,
    platform: Platform,
) -> Result<Vec<PathBuf>, AppError> {
    let names = parse_dynamic_names(names_definition)?;
    let extension = platform.extension(LinkageKind::Dynamic);

    names
        .iter()
        .map(|name| {
            let path = staging_dir.join(format!("{}.{}", name, extension));
            if store.file_exists(&path) {
                debug!("Found staged library \"{}\"", path.display());
                Ok(path)
            } else {
                Err(AppError::MissingStagedArtifact(path))
            }
        })
        .collect()
}
