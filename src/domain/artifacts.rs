//! Located, validated, and staged artifact models.

use std::path::PathBuf;
use std::time::SystemTime;

use serde::Serialize;

use super::paths::base_name;
use super::target::LinkageKind;

/// Raw locator output for one component and linkage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedArtifacts {
    pub linkage: LinkageKind,
    /// Directory that was searched.
    pub directory: PathBuf,
    /// Whether `directory` existed when it was listed.
    pub directory_exists: bool,
    /// Matching files in file-name order.
    pub artifacts: Vec<PathBuf>,
}

impl LocatedArtifacts {
    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}

/// Validated artifacts of one component. Both sequences are non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactSet {
    pub static_artifacts: Vec<PathBuf>,
    pub dynamic_artifacts: Vec<PathBuf>,
}

/// Staging decision for one dynamic artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StageStatus {
    /// No staged copy exists.
    Missing,
    /// Staged copy is strictly older than the source.
    Stale,
    /// Staged copy is at least as new as the source.
    Fresh,
}

impl StageStatus {
    /// Decide from the source's and the staged copy's modification times.
    pub fn from_times(source: SystemTime, staged: Option<SystemTime>) -> Self {
        match staged {
            None => StageStatus::Missing,
            Some(staged) if staged < source => StageStatus::Stale,
            Some(_) => StageStatus::Fresh,
        }
    }

    pub fn needs_copy(&self) -> bool {
        !matches!(self, StageStatus::Fresh)
    }
}

impl std::fmt::Display for StageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StageStatus::Missing => write!(f, "missing"),
            StageStatus::Stale => write!(f, "stale"),
            StageStatus::Fresh => write!(f, "fresh"),
        }
    }
}

/// A dynamic artifact and its copy in the staging directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StagedArtifact {
    pub source: PathBuf,
    pub staged: PathBuf,
    #[serde(skip)]
    pub source_modified: SystemTime,
    /// Staged modification time observed before any copy.
    #[serde(skip)]
    pub staged_modified: Option<SystemTime>,
    pub status: StageStatus,
    /// Whether this run copied the file.
    pub copied: bool,
}

impl StagedArtifact {
    /// Base name (no extension) used for delay-load registration.
    pub fn base_name(&self) -> String {
        base_name(&self.staged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn status_follows_modification_times() {
        let source = SystemTime::UNIX_EPOCH + Duration::from_secs(100);

        assert_eq!(StageStatus::from_times(source, None), StageStatus::Missing);
        assert_eq!(
            StageStatus::from_times(source, Some(source - Duration::from_secs(1))),
            StageStatus::Stale
        );
        assert_eq!(StageStatus::from_times(source, Some(source)), StageStatus::Fresh);
        assert_eq!(
            StageStatus::from_times(source, Some(source + Duration::from_secs(1))),
            StageStatus::Fresh
        );
    }

    #[test]
    fn only_fresh_skips_copy() {
        assert!(StageStatus::Missing.needs_copy());
        assert!(StageStatus::Stale.needs_copy());
        assert!(!StageStatus::Fresh.needs_copy());
    }
}
