//! Results handed back to the module-description collaborator.

use std::path::PathBuf;

use serde::Serialize;

use super::artifacts::{StageStatus, StagedArtifact};
use super::definitions::DefinitionMap;
use super::target::{BuildConfiguration, Platform};

/// What one component contributed to a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentRegistration {
    pub component: String,
    pub static_libraries: Vec<PathBuf>,
    pub staged: Vec<StagedArtifact>,
    /// Base names of the staged dynamic libraries, in staging order.
    pub dynamic_names: Vec<String>,
    /// Published form of `dynamic_names` (see `join_dynamic_names`).
    pub joined_names: String,
    /// Plain single-space join of `dynamic_names`.
    pub normalized_names: String,
}

impl ComponentRegistration {
    pub fn copied_count(&self) -> usize {
        self.staged.iter().filter(|s| s.copied).count()
    }
}

/// Full outcome of a successful pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub module: String,
    pub configuration: BuildConfiguration,
    pub platform: Platform,
    pub staging_dir: PathBuf,
    /// Static libraries to link, in component/declaration order.
    pub static_libraries: Vec<PathBuf>,
    /// Dynamic library base names to register for delayed loading.
    pub delay_load: Vec<String>,
    /// Absolute staged paths to package with the module.
    pub runtime_dependencies: Vec<PathBuf>,
    pub components: Vec<ComponentRegistration>,
    pub definitions: DefinitionMap,
}

impl Resolution {
    pub fn copied_count(&self) -> usize {
        self.components.iter().map(ComponentRegistration::copied_count).sum()
    }
}

/// Dry-run staging status for one dynamic artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactStatus {
    pub component: String,
    pub source: PathBuf,
    pub staged: PathBuf,
    pub status: StageStatus,
}

/// Outcome of a dry run: nothing was copied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    pub module: String,
    pub configuration: BuildConfiguration,
    pub platform: Platform,
    pub staging_dir: PathBuf,
    pub artifacts: Vec<ArtifactStatus>,
}

impl StatusReport {
    /// Whether a real run would copy anything.
    pub fn is_up_to_date(&self) -> bool {
        self.artifacts.iter().all(|a| a.status == StageStatus::Fresh)
    }
}
