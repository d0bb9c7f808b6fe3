//! In-memory `ArtifactStore` with a logical clock.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use crate::ports::ArtifactStore;

#[derive(Debug, Clone)]
struct MemoryFile {
    content: Vec<u8>,
    modified: SystemTime,
}

/// Artifact store holding files in memory.
///
/// Every write advances a logical clock by one second, so each write is
/// strictly newer than the previous one. Copies are counted per destination.
#[derive(Debug, Default)]
pub struct MemoryArtifactStore {
    files: RefCell<BTreeMap<PathBuf, MemoryFile>>,
    dirs: RefCell<BTreeSet<PathBuf>>,
    copies: RefCell<Vec<PathBuf>>,
    clock: Cell<u64>,
    fail_create_dir: Cell<bool>,
    vanish_on_copy: RefCell<BTreeSet<PathBuf>>,
}

impl MemoryArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn tick(&self) -> SystemTime {
        let next = self.clock.get() + 1;
        self.clock.set(next);
        SystemTime::UNIX_EPOCH + Duration::from_secs(next)
    }

    fn register_parents(&self, path: &Path) {
        let mut dirs = self.dirs.borrow_mut();
        let mut current = path.parent();
        while let Some(dir) = current {
            if dir.as_os_str().is_empty() {
                break;
            }
            dirs.insert(dir.to_path_buf());
            current = dir.parent();
        }
    }

    /// Create an empty directory.
    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        self.register_parents(&path.join("_"));
    }

    /// Write a file, creating parent directories. Returns its modification time.
    pub fn write(&self, path: impl AsRef<Path>, content: &[u8]) -> SystemTime {
        let path = path.as_ref();
        self.register_parents(path);
        let modified = self.tick();
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), MemoryFile { content: content.to_vec(), modified });
        modified
    }

    /// Bump a file's modification time as if it had been rebuilt.
    pub fn touch(&self, path: impl AsRef<Path>) -> SystemTime {
        let modified = self.tick();
        if let Some(file) = self.files.borrow_mut().get_mut(path.as_ref()) {
            file.modified = modified;
        }
        modified
    }

    pub fn remove(&self, path: impl AsRef<Path>) {
        self.files.borrow_mut().remove(path.as_ref());
    }

    pub fn read(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.files.borrow().get(path.as_ref()).map(|f| f.content.clone())
    }

    pub fn mtime(&self, path: impl AsRef<Path>) -> Option<SystemTime> {
        self.files.borrow().get(path.as_ref()).map(|f| f.modified)
    }

    pub fn dir_exists(&self, path: impl AsRef<Path>) -> bool {
        self.dirs.borrow().contains(path.as_ref())
    }

    /// Files directly inside `dir`.
    pub fn files_in(&self, dir: impl AsRef<Path>) -> Vec<PathBuf> {
        let dir = dir.as_ref();
        self.files.borrow().keys().filter(|p| p.parent() == Some(dir)).cloned().collect()
    }

    /// Destinations of every copy performed so far.
    pub fn copies(&self) -> Vec<PathBuf> {
        self.copies.borrow().clone()
    }

    pub fn reset_copies(&self) {
        self.copies.borrow_mut().clear();
    }

    /// Make `create_dir_all` fail from now on.
    pub fn fail_create_dir(&self) {
        self.fail_create_dir.set(true);
    }

    /// Delete `source` right before it is copied, simulating a concurrent writer.
    pub fn vanish_before_copy(&self, source: impl AsRef<Path>) {
        self.vanish_on_copy.borrow_mut().insert(source.as_ref().to_path_buf());
    }
}

impl ArtifactStore for MemoryArtifactStore {
    fn is_dir(&self, path: &Path) -> bool {
        self.dir_exists(path)
    }

    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        if !self.dir_exists(dir) {
            return Err(io::Error::new(io::ErrorKind::NotFound, "directory not found"));
        }
        Ok(self.files_in(dir))
    }

    fn file_exists(&self, path: &Path) -> bool {
        if self.vanish_on_copy.borrow_mut().remove(path) {
            self.remove(path);
        }
        self.files.borrow().contains_key(path)
    }

    fn modified(&self, path: &Path) -> io::Result<Option<SystemTime>> {
        Ok(self.mtime(path))
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        if self.fail_create_dir.get() {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"));
        }
        self.add_dir(path);
        Ok(())
    }

    fn copy_file(&self, from: &Path, to: &Path) -> io::Result<()> {
        let content = self
            .read(from)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "source not found"))?;
        self.write(to, &content);
        self.copies.borrow_mut().push(to.to_path_buf());
        Ok(())
    }

    fn set_modified(&self, path: &Path, time: SystemTime) -> io::Result<()> {
        match self.files.borrow_mut().get_mut(path) {
            Some(file) => {
                file.modified = time;
                Ok(())
            }
            None => Err(io::Error::new(io::ErrorKind::NotFound, "file not found")),
        }
    }
}
