//! Staging manifest models (`depstage.toml`).

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::AppError;
use crate::domain::component::LibraryComponent;
use crate::domain::definitions::{DEFAULT_PREFIX, DefinitionKeys};
use crate::domain::identifiers::ComponentName;
use crate::domain::identifiers::validation::validate_symbol_fragment;
use crate::domain::paths::{definition_dir_string, normalize_path};
use crate::domain::target::Platform;

/// Describes one module's third-party staging, loaded from `depstage.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StagingManifest {
    pub module: ModuleSection,
    #[serde(default)]
    pub third_party: ThirdPartySection,
    pub staging: StagingSection,
    #[serde(default)]
    pub definitions: DefinitionsSection,
    #[serde(default)]
    pub build: BuildSection,
    #[serde(default)]
    pub components: Vec<ComponentEntry>,
}

/// Module under construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModuleSection {
    pub name: String,
    /// Module directory. Defaults to the manifest's directory.
    #[serde(default)]
    pub root: Option<PathBuf>,
}

/// Where component artifact trees are rooted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThirdPartySection {
    /// Relative to the module root.
    #[serde(default = "default_third_party_root")]
    pub root: PathBuf,
}

impl Default for ThirdPartySection {
    fn default() -> Self {
        Self { root: default_third_party_root() }
    }
}

fn default_third_party_root() -> PathBuf {
    PathBuf::from("ThirdParty")
}

/// Runtime staging directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StagingSection {
    /// Base the published staging path is relative to (relative to the module root).
    #[serde(default = "default_staging_root")]
    pub root: PathBuf,
    /// Staging directory, relative to `root`.
    pub directory: PathBuf,
}

fn default_staging_root() -> PathBuf {
    PathBuf::from(".")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefinitionsSection {
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

impl Default for DefinitionsSection {
    fn default() -> Self {
        Self { prefix: default_prefix() }
    }
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildSection {
    /// Debug targets only consume Debug artifacts when this holds.
    #[serde(default = "default_true")]
    pub debug_builds_use_debug_crt: bool,
    /// Overrides the platform of the compile target.
    #[serde(default)]
    pub platform: Option<Platform>,
}

impl Default for BuildSection {
    fn default() -> Self {
        Self { debug_builds_use_debug_crt: default_true(), platform: None }
    }
}

fn default_true() -> bool {
    true
}

/// One declared third-party component.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComponentEntry {
    pub name: String,
    /// Artifact base names (no extension) to skip.
    #[serde(default)]
    pub exclude: Vec<String>,
    /// Per-platform replacement for `<third_party>/<name>/Binaries`.
    #[serde(default)]
    pub overrides: BTreeMap<Platform, PathBuf>,
}

/// Absolute directories derived from a manifest and its location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagingLayout {
    pub module_root: PathBuf,
    pub third_party_root: PathBuf,
    pub staging_dir: PathBuf,
    /// Staging directory as published in the path definition.
    pub staging_definition: String,
}

impl StagingManifest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.module.name.trim().is_empty() {
            return Err(AppError::config_error("module.name must not be empty"));
        }
        if self.components.is_empty() {
            return Err(AppError::config_error(
                "No components specified. Add at least one [[components]] entry.",
            ));
        }
        if !validate_symbol_fragment(&self.definitions.prefix) {
            return Err(AppError::config_error(format!(
                "definitions.prefix '{}' must be a C identifier",
                self.definitions.prefix
            )));
        }
        if self.staging.directory.is_absolute()
            || definition_dir_string(&self.staging.directory).is_empty()
        {
            return Err(AppError::config_error(
                "staging.directory must be a non-empty relative path",
            ));
        }

        let mut seen = BTreeSet::new();
        for entry in &self.components {
            let name = ComponentName::new(&entry.name)?;
            if !seen.insert(name) {
                return Err(AppError::DuplicateComponent(entry.name.clone()));
            }
            if entry.exclude.iter().any(|e| e.trim().is_empty()) {
                return Err(AppError::config_error(format!(
                    "Component '{}' has an empty exclude entry",
                    entry.name
                )));
            }
        }
        Ok(())
    }

    /// Components in declaration order.
    pub fn library_components(&self) -> Result<Vec<LibraryComponent>, AppError> {
        self.components
            .iter()
            .map(|entry| {
                let mut component = LibraryComponent::new(ComponentName::new(&entry.name)?)
                    .with_exclusions(entry.exclude.iter().cloned());
                for (platform, path) in &entry.overrides {
                    component = component.with_override(*platform, path.clone());
                }
                Ok(component)
            })
            .collect()
    }

    pub fn definition_keys(&self) -> DefinitionKeys {
        DefinitionKeys::new(self.definitions.prefix.clone())
    }

    /// Resolve all directories against the directory holding the manifest.
    pub fn layout(&self, manifest_dir: &Path) -> StagingLayout {
        let module_root = match &self.module.root {
            Some(root) => normalize_path(&manifest_dir.join(root)),
            None => normalize_path(manifest_dir),
        };
        let third_party_root = normalize_path(&module_root.join(&self.third_party.root));
        let staging_root = module_root.join(&self.staging.root);
        let staging_dir = normalize_path(&staging_root.join(&self.staging.directory));

        StagingLayout {
            module_root,
            third_party_root,
            staging_dir,
            staging_definition: definition_dir_string(&self.staging.directory),
        }
    }
}
