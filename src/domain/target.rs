//! Target selectors: build configuration, linkage kind, and platform.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::AppError;

/// Build configuration selecting which artifact subtree is consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildConfiguration {
    Debug,
    Release,
}

impl BuildConfiguration {
    /// Effective configuration for a target.
    ///
    /// Debug artifacts are only usable when debug builds link the debug C
    /// runtime; otherwise a debug target still consumes release artifacts.
    pub fn for_target(requested: BuildConfiguration, debug_builds_use_debug_crt: bool) -> Self {
        match requested {
            BuildConfiguration::Debug if debug_builds_use_debug_crt => BuildConfiguration::Debug,
            _ => BuildConfiguration::Release,
        }
    }

    /// Directory segment under `Binaries/`.
    pub fn dir_name(&self) -> &'static str {
        match self {
            BuildConfiguration::Debug => "Debug",
            BuildConfiguration::Release => "Release",
        }
    }
}

impl fmt::Display for BuildConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

impl FromStr for BuildConfiguration {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(BuildConfiguration::Debug),
            "release" => Ok(BuildConfiguration::Release),
            _ => Err(AppError::config_error(format!(
                "Invalid build configuration '{}': must be debug or release",
                s
            ))),
        }
    }
}

/// How an artifact is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkageKind {
    /// Consumed at link time only.
    Static,
    /// Staged and delay-loaded at runtime.
    Dynamic,
}

impl LinkageKind {
    /// Directory segment under `Binaries/<configuration>/`.
    pub fn dir_name(&self) -> &'static str {
        match self {
            LinkageKind::Static => "Static",
            LinkageKind::Dynamic => "Dynamic",
        }
    }
}

impl fmt::Display for LinkageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkageKind::Static => f.write_str("static"),
            LinkageKind::Dynamic => f.write_str("dynamic"),
        }
    }
}

/// Platform whose artifact extensions are matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Windows,
    Linux,
    MacOs,
}

impl Platform {
    /// Platform of the compile target.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Linux
        }
    }

    /// The single file extension (without dot) artifacts of `linkage` carry.
    pub fn extension(&self, linkage: LinkageKind) -> &'static str {
        match (self, linkage) {
            (Platform::Windows, LinkageKind::Static) => "lib",
            (Platform::Windows, LinkageKind::Dynamic) => "dll",
            (Platform::Linux, LinkageKind::Static) | (Platform::MacOs, LinkageKind::Static) => "a",
            (Platform::Linux, LinkageKind::Dynamic) => "so",
            (Platform::MacOs, LinkageKind::Dynamic) => "dylib",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::Linux => "linux",
            Platform::MacOs => "macos",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "windows" | "win64" => Ok(Platform::Windows),
            "linux" => Ok(Platform::Linux),
            "macos" | "mac" => Ok(Platform::MacOs),
            _ => Err(AppError::config_error(format!(
                "Invalid platform '{}': must be one of windows, linux, macos",
                s
            ))),
        }
    }
}
