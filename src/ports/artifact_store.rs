//! Filesystem operations needed to locate and stage artifacts.
//!
//! The locator only reads through this port; the staging copier is the only
//! caller of the mutating methods.

use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Port for artifact discovery and staging I/O.
///
/// All paths are absolute.
pub trait ArtifactStore {
    /// Check whether a path is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// List the regular files directly inside `dir` (no recursion).
    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>>;

    /// Check whether a file exists.
    fn file_exists(&self, path: &Path) -> bool;

    /// Modification time of a file, or `None` if it does not exist.
    fn modified(&self, path: &Path) -> io::Result<Option<SystemTime>>;

    /// Create a directory and all parent directories. No-op if present.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Copy `from` to `to`, overwriting `to`.
    fn copy_file(&self, from: &Path, to: &Path) -> io::Result<()>;

    /// Set a file's modification time.
    fn set_modified(&self, path: &Path, time: SystemTime) -> io::Result<()>;
}

impl<T: ArtifactStore + ?Sized> ArtifactStore for &T {
    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        (**self).list_files(dir)
    }

    fn file_exists(&self, path: &Path) -> bool {
        (**self).file_exists(path)
    }

    fn modified(&self, path: &Path) -> io::Result<Option<SystemTime>> {
        (**self).modified(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        (**self).create_dir_all(path)
    }

    fn copy_file(&self, from: &Path, to: &Path) -> io::Result<()> {
        (**self).copy_file(from, to)
    }

    fn set_modified(&self, path: &Path, time: SystemTime) -> io::Result<()> {
        (**self).set_modified(path, time)
    }
}
