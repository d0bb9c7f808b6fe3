//! Shared testing utilities for depstage CLI tests.

use assert_cmd::Command;
use filetime::FileTime;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tempfile::TempDir;

/// Staging directory used by the default manifest, relative to the module root.
pub const STAGING_DIR: &str = "Binaries/Linux";

/// Manifest for one `Wrapper` component on linux with the default prefix.
pub const DEFAULT_MANIFEST: &str = r#"[module]
name = "LensCalibrator"

[staging]
directory = "Binaries/Linux"

[build]
platform = "linux"

[[components]]
name = "Wrapper"
"#;

/// Testing harness providing an isolated module root for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Module root; CLI invocations run here.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `depstage` binary in the module root.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("depstage").expect("Failed to locate depstage binary");
        cmd.current_dir(self.work_dir()).env_remove("RUST_LOG");
        cmd
    }

    pub fn write_manifest(&self, content: &str) -> PathBuf {
        let path = self.work_dir.join("depstage.toml");
        fs::write(&path, content).expect("Failed to write manifest");
        path
    }

    /// `ThirdParty/<component>/Binaries/<configuration>/<linkage>`
    pub fn artifact_dir(&self, component: &str, configuration: &str, linkage: &str) -> PathBuf {
        self.work_dir
            .join("ThirdParty")
            .join(component)
            .join("Binaries")
            .join(configuration)
            .join(linkage)
    }

    /// Write artifact files into a component's artifact directory, creating it.
    pub fn add_artifacts(
        &self,
        component: &str,
        configuration: &str,
        linkage: &str,
        files: &[&str],
    ) -> Vec<PathBuf> {
        let dir = self.artifact_dir(component, configuration, linkage);
        fs::create_dir_all(&dir).expect("Failed to create artifact directory");
        files
            .iter()
            .map(|name| {
                let path = dir.join(name);
                fs::write(&path, name.as_bytes()).expect("Failed to write artifact");
                path
            })
            .collect()
    }

    /// The default `Wrapper` layout: one static and one dynamic library.
    pub fn seed_wrapper(&self, configuration: &str) {
        self.add_artifacts("Wrapper", configuration, "Static", &["libwrapper.a"]);
        self.add_artifacts("Wrapper", configuration, "Dynamic", &["libwrapper.so"]);
    }

    pub fn staging_dir(&self) -> PathBuf {
        self.work_dir.join(STAGING_DIR)
    }

    pub fn staged(&self, file_name: &str) -> PathBuf {
        self.staging_dir().join(file_name)
    }

    pub fn mtime(&self, path: &Path) -> SystemTime {
        fs::metadata(path).and_then(|m| m.modified()).expect("Failed to read mtime")
    }

    /// Set a file's modification time `secs` seconds after the epoch.
    pub fn set_mtime(&self, path: &Path, secs: i64) {
        filetime::set_file_mtime(path, FileTime::from_unix_time(secs, 0))
            .expect("Failed to set mtime");
    }
}
