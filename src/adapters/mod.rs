mod artifact_filesystem;

pub use artifact_filesystem::FilesystemArtifactStore;
