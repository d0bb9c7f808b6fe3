//! API facade for the application.
//!
//! Glues manifest loading, the filesystem store and command execution.

use std::path::{Path, PathBuf};

use crate::adapters::FilesystemArtifactStore;
use crate::app::commands::{resolve, status, verify};
use crate::app::config::load_manifest;
use crate::domain::{AppError, Platform, Resolution, StatusReport};

pub use crate::app::commands::ResolveOptions;
pub use crate::app::output::write_cargo_directives;

/// Load the manifest at `manifest_path` and run the pipeline against the real
/// filesystem: locate, validate, stage, register, emit.
pub fn resolve(
    manifest_path: impl AsRef<Path>,
    options: ResolveOptions,
) -> Result<Resolution, AppError> {
    let loaded = load_manifest(manifest_path.as_ref())?;
    resolve::execute(FilesystemArtifactStore::new(), &loaded, &options)
}

/// Dry run of [`resolve`]: report each dynamic artifact's staging status.
pub fn status(
    manifest_path: impl AsRef<Path>,
    options: ResolveOptions,
) -> Result<StatusReport, AppError> {
    let loaded = load_manifest(manifest_path.as_ref())?;
    status::execute(FilesystemArtifactStore::new(), &loaded, &options)
}

/// Check that every library named in a names definition is staged.
pub fn verify_staged(
    staging_dir: impl AsRef<Path>,
    names_definition: &str,
    platform: Platform,
) -> Result<Vec<PathBuf>, AppError> {
    verify::execute(
        &FilesystemArtifactStore::new(),
        staging_dir.as_ref(),
        names_definition,
        platform,
    )
}
