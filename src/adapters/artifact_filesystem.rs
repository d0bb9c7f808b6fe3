use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use filetime::FileTime;

use crate::ports::ArtifactStore;

/// `std::fs`-backed artifact store.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemArtifactStore;

impl FilesystemArtifactStore {
    pub fn new() -> Self {
        Self
    }
}

impl ArtifactStore for FilesystemArtifactStore {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            // Follows symlinks so linked artifacts are listed.
            if path.is_file() {
                files.push(path);
            }
        }
        Ok(files)
    }

    fn file_exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn modified(&self, path: &Path) -> io::Result<Option<SystemTime>> {
        match fs::metadata(path) {
            Ok(metadata) => Ok(Some(metadata.modified()?)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn copy_file(&self, from: &Path, to: &Path) -> io::Result<()> {
        fs::copy(from, to).map(|_| ())
    }

    fn set_modified(&self, path: &Path, time: SystemTime) -> io::Result<()> {
        filetime::set_file_mtime(path, FileTime::from_system_time(time))
    }
}
