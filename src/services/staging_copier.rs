//! Staging copier service.
//!
//! The staging directory is a cache keyed by file name: a dynamic library is
//! copied only when its staged copy is missing or strictly older than the
//! source, so repeated runs over unchanged sources touch nothing.

use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::domain::{AppError, StageStatus, StagedArtifact};
use crate::ports::ArtifactStore;

/// Service copying dynamic artifacts into the runtime staging directory.
pub struct StagingCopier;

impl StagingCopier {
    /// Staged location of `source` inside `staging_dir`.
    pub fn staged_path(source: &Path, staging_dir: &Path) -> Result<PathBuf, AppError> {
        let file_name = source.file_name().ok_or_else(|| {
            AppError::config_error(format!("Artifact path has no file name: {}", source.display()))
        })?;
        Ok(staging_dir.join(file_name))
    }

    /// Decide whether `source` needs staging, without side effects.
    pub fn inspect<S: ArtifactStore>(
        store: &S,
        source: &Path,
        staging_dir: &Path,
    ) -> Result<StagedArtifact, AppError> {
        let staged = Self::staged_path(source, staging_dir)?;
        let source_modified = store
            .modified(source)?
            .ok_or_else(|| AppError::MissingSourceArtifact(source.to_path_buf()))?;
        let staged_modified = store.modified(&staged)?;

        Ok(StagedArtifact {
            source: source.to_path_buf(),
            staged,
            source_modified,
            staged_modified,
            status: StageStatus::from_times(source_modified, staged_modified),
            copied: false,
        })
    }

    /// Stage `source` into `staging_dir`, copying only when missing or stale.
    ///
    /// Creates `staging_dir` on demand. After a copy the staged file carries
    /// the source's modification time. On a staging filesystem with coarser
    /// timestamps than the source's the pinned time truncates below it, so
    /// the copy reads as stale and is recopied on every run.
    pub fn stage<S: ArtifactStore>(
        store: &S,
        source: &Path,
        staging_dir: &Path,
    ) -> Result<StagedArtifact, AppError> {
        if !store.is_dir(staging_dir) {
            info!("Creating directory at path: \"{}\"", staging_dir.display());
            store.create_dir_all(staging_dir).map_err(|source| {
                AppError::StagingDirectoryCreationFailed { path: staging_dir.to_path_buf(), source }
            })?;
        }

        let mut artifact = Self::inspect(store, source, staging_dir)?;
        if !artifact.status.needs_copy() {
            debug!("Staged copy is current: \"{}\"", artifact.staged.display());
            return Ok(artifact);
        }

        info!(
            "Copying library from: \"{}\" to: \"{}\"",
            artifact.source.display(),
            artifact.staged.display()
        );

        if !store.file_exists(source) {
            return Err(AppError::MissingSourceArtifact(source.to_path_buf()));
        }

        let copy_failed = |err| AppError::CopyFailed {
            from: artifact.source.clone(),
            to: artifact.staged.clone(),
            source: err,
        };
        store.copy_file(&artifact.source, &artifact.staged).map_err(copy_failed)?;
        store.set_modified(&artifact.staged, artifact.source_modified).map_err(copy_failed)?;

        artifact.copied = true;
        Ok(artifact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::FilesystemArtifactStore;
    use crate::testing::MemoryArtifactStore;
    use std::fs;
    use std::time::{Duration, SystemTime};
    use tempfile::tempdir;

    const STAGE: &str = "/plugin/Stage";

    #[test]
    fn creates_staging_dir_and_copies_missing_file() {
        let store = MemoryArtifactStore::new();
        let source = PathBuf::from("/tp/Wrapper/Binaries/Release/Dynamic/wrapper.dll");
        store.write(&source, b"v1");

        let staged = StagingCopier::stage(&store, &source, Path::new(STAGE)).unwrap();

        assert!(store.dir_exists(STAGE));
        assert_eq!(staged.staged, PathBuf::from("/plugin/Stage/wrapper.dll"));
        assert_eq!(staged.status, StageStatus::Missing);
        assert!(staged.copied);
        assert_eq!(store.read(&staged.staged).unwrap(), b"v1");
        assert_eq!(store.mtime(&staged.staged), store.mtime(&source));
    }

    #[test]
    fn fresh_copy_is_left_alone() {
        let store = MemoryArtifactStore::new();
        let source = PathBuf::from("/tp/wrapper.dll");
        store.write(&source, b"v1");
        StagingCopier::stage(&store, &source, Path::new(STAGE)).unwrap();
        store.reset_copies();

        let staged = StagingCopier::stage(&store, &source, Path::new(STAGE)).unwrap();

        assert_eq!(staged.status, StageStatus::Fresh);
        assert!(!staged.copied);
        assert!(store.copies().is_empty());
    }

    #[test]
    fn stale_copy_is_overwritten() {
        let store = MemoryArtifactStore::new();
        let source = PathBuf::from("/tp/wrapper.dll");
        store.write("/plugin/Stage/wrapper.dll", b"old");
        store.write(&source, b"new");

        let staged = StagingCopier::stage(&store, &source, Path::new(STAGE)).unwrap();

        assert_eq!(staged.status, StageStatus::Stale);
        assert!(staged.copied);
        assert_eq!(store.read("/plugin/Stage/wrapper.dll").unwrap(), b"new");
    }

    #[test]
    fn newer_staged_copy_is_not_replaced() {
        let store = MemoryArtifactStore::new();
        let source = PathBuf::from("/tp/wrapper.dll");
        store.write(&source, b"src");
        store.write("/plugin/Stage/wrapper.dll", b"patched");

        let staged = StagingCopier::stage(&store, &source, Path::new(STAGE)).unwrap();

        assert!(!staged.copied);
        assert_eq!(store.read("/plugin/Stage/wrapper.dll").unwrap(), b"patched");
    }

    #[test]
    fn vanished_source_is_fatal() {
        let store = MemoryArtifactStore::new();
        let source = PathBuf::from("/tp/wrapper.dll");
        store.write(&source, b"v1");
        store.vanish_before_copy(&source);

        let err = StagingCopier::stage(&store, &source, Path::new(STAGE)).unwrap_err();

        assert!(matches!(err, AppError::MissingSourceArtifact(path) if path == source));
        assert!(store.copies().is_empty());
    }

    #[test]
    fn staging_dir_creation_failure_is_reported() {
        let store = MemoryArtifactStore::new();
        let source = PathBuf::from("/tp/wrapper.dll");
        store.write(&source, b"v1");
        store.fail_create_dir();

        let err = StagingCopier::stage(&store, &source, Path::new(STAGE)).unwrap_err();

        assert!(matches!(err, AppError::StagingDirectoryCreationFailed { .. }));
    }

    #[test]
    fn inspect_does_not_create_anything() {
        let store = MemoryArtifactStore::new();
        let source = PathBuf::from("/tp/wrapper.dll");
        store.write(&source, b"v1");

        let artifact = StagingCopier::inspect(&store, &source, Path::new(STAGE)).unwrap();

        assert_eq!(artifact.status, StageStatus::Missing);
        assert!(!store.dir_exists(STAGE));
        assert!(store.copies().is_empty());
    }

    #[test]
    fn real_filesystem_copy_is_idempotent_and_tracks_source_time() {
        let temp = tempdir().unwrap();
        let source = temp.path().join("bin/libwrapper.so");
        let stage = temp.path().join("stage/nested");
        fs::create_dir_all(source.parent().unwrap()).unwrap();
        fs::write(&source, b"v1").unwrap();
        // Future timestamps must still count as fresh once copied.
        let future = SystemTime::now() + Duration::from_secs(3600);
        filetime::set_file_mtime(&source, filetime::FileTime::from_system_time(future)).unwrap();

        let store = FilesystemArtifactStore::new();
        let first = StagingCopier::stage(&store, &source, &stage).unwrap();
        let second = StagingCopier::stage(&store, &source, &stage).unwrap();

        assert!(first.copied);
        assert!(!second.copied);
        let staged_time = fs::metadata(stage.join("libwrapper.so")).unwrap().modified().unwrap();
        let source_time = fs::metadata(&source).unwrap().modified().unwrap();
        assert!(staged_time >= source_time);
    }
}
