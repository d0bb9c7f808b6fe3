use std::path::{Path, PathBuf};

/// Default manifest file name.
pub const MANIFEST_FILE: &str = "depstage.toml";

/// `<dir>/depstage.toml`
pub fn manifest(dir: &Path) -> PathBuf {
    dir.join(MANIFEST_FILE)
}
