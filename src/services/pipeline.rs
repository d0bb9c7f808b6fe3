//! Pipeline orchestrator.
//!
//! Drives locate → validate → stage → register for each component in declared
//! order, then emits definitions. Single pass, fail fast: the first error
//! aborts the run and files already staged stay on disk.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::PathBuf;

use log::{debug, info};

use super::artifact_locator::{ArtifactLocator, ExcludeBaseNames, TargetSelection};
use super::artifact_validator::ArtifactValidator;
use super::definition_emitter::DefinitionEmitter;
use super::dependency_registrar::DependencyRegistrar;
use super::staging_copier::StagingCopier;
use crate::domain::{
    AppError, ArtifactSet, ArtifactStatus, BuildConfiguration, DefinitionKeys, LibraryComponent,
    LinkageKind, Platform, Resolution, StatusReport,
};
use crate::ports::ArtifactStore;

/// Inputs of one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineRequest {
    /// Module identity; opaque to the pipeline.
    pub module: String,
    /// Effective configuration (see `BuildConfiguration::for_target`).
    pub configuration: BuildConfiguration,
    pub platform: Platform,
    /// Components in declaration order.
    pub components: Vec<LibraryComponent>,
    pub third_party_root: PathBuf,
    pub staging_dir: PathBuf,
    /// Staging directory as published in the path definition.
    pub staging_definition: String,
    pub keys: DefinitionKeys,
}

impl PipelineRequest {
    fn target(&self) -> TargetSelection<'_> {
        TargetSelection {
            third_party_root: &self.third_party_root,
            platform: self.platform,
            configuration: self.configuration,
        }
    }

    fn check_components(&self) -> Result<(), AppError> {
        if self.components.is_empty() {
            return Err(AppError::config_error("No components specified"));
        }
        let mut seen = BTreeSet::new();
        for component in &self.components {
            if !seen.insert(component.name().as_str()) {
                return Err(AppError::DuplicateComponent(component.name().to_string()));
            }
        }
        Ok(())
    }
}

/// Staged file names claimed so far in a run, keyed by staged path.
#[derive(Debug, Default)]
struct StagedNames(BTreeMap<PathBuf, String>);

impl StagedNames {
    /// Claim every dynamic artifact of `component`, failing if another
    /// component already ships a library under the same file name.
    fn claim(
        &mut self,
        request: &PipelineRequest,
        component: &LibraryComponent,
        artifacts: &ArtifactSet,
    ) -> Result<(), AppError> {
        for source in &artifacts.dynamic_artifacts {
            let staged = StagingCopier::staged_path(source, &request.staging_dir)?;
            let owner = component.name().as_str();
            if let Some(first) = self.0.get(&staged) {
                return Err(AppError::DuplicateStagedArtifact {
                    name: staged
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default(),
                    first: first.clone(),
                    second: owner.to_string(),
                });
            }
            self.0.insert(staged, owner.to_string());
        }
        Ok(())
    }
}

/// Orchestrator state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    Locating,
    Validating,
    Staging,
    Registering,
    Emitting,
    Done,
    /// Terminal; holds the error message.
    Failed(String),
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineState::Idle => write!(f, "idle"),
            PipelineState::Locating => write!(f, "locating"),
            PipelineState::Validating => write!(f, "validating"),
            PipelineState::Staging => write!(f, "staging"),
            PipelineState::Registering => write!(f, "registering"),
            PipelineState::Emitting => write!(f, "emitting"),
            PipelineState::Done => write!(f, "done"),
            PipelineState::Failed(err) => write!(f, "failed: {}", err),
        }
    }
}

/// Resolution/staging/registration pipeline over an artifact store.
pub struct Pipeline<S: ArtifactStore> {
    store: S,
    state: PipelineState,
}

impl<S: ArtifactStore> Pipeline<S> {
    pub fn new(store: S) -> Self {
        Self { store, state: PipelineState::Idle }
    }

    pub fn state(&self) -> &PipelineState {
        &self.state
    }

    fn transition(&mut self, next: PipelineState) {
        debug!("Pipeline {} -> {}", self.state, next);
        self.state = next;
    }

    fn fail<T>(&mut self, result: Result<T, AppError>) -> Result<T, AppError> {
        if let Err(err) = &result {
            self.transition(PipelineState::Failed(err.to_string()));
        }
        result
    }

    /// Locate, validate, stage, and register every component, then emit definitions.
    pub fn run(&mut self, request: &PipelineRequest) -> Result<Resolution, AppError> {
        self.state = PipelineState::Idle;
        let result = self.run_inner(request);
        self.fail(result)
    }

    fn run_inner(&mut self, request: &PipelineRequest) -> Result<Resolution, AppError> {
        request.check_components()?;
        info!(
            "Resolving {} {} artifacts for module '{}'",
            request.platform, request.configuration, request.module
        );

        let mut registrar = DependencyRegistrar::new();
        let mut claimed = StagedNames::default();
        for component in &request.components {
            let artifacts = self.resolve_component(request, component)?;
            claimed.claim(request, component, &artifacts)?;

            self.transition(PipelineState::Staging);
            let mut staged = Vec::with_capacity(artifacts.dynamic_artifacts.len());
            for source in &artifacts.dynamic_artifacts {
                staged.push(StagingCopier::stage(&self.store, source, &request.staging_dir)?);
            }

            self.transition(PipelineState::Registering);
            registrar.register(component, &artifacts, staged);
        }

        self.transition(PipelineState::Emitting);
        let registrations = registrar.finish();
        let definitions = DefinitionEmitter::emit(
            &request.keys,
            &request.staging_definition,
            &registrations.components,
        )?;

        self.transition(PipelineState::Done);
        Ok(Resolution {
            module: request.module.clone(),
            configuration: request.configuration,
            platform: request.platform,
            staging_dir: request.staging_dir.clone(),
            static_libraries: registrations.static_libraries,
            delay_load: registrations.delay_load,
            runtime_dependencies: registrations.runtime_dependencies,
            components: registrations.components,
            definitions,
        })
    }

    /// Dry run: locate and validate every component and report what staging
    /// would do, without touching the filesystem.
    pub fn inspect(&mut self, request: &PipelineRequest) -> Result<StatusReport, AppError> {
        self.state = PipelineState::Idle;
        let result = self.inspect_inner(request);
        self.fail(result)
    }

    fn inspect_inner(&mut self, request: &PipelineRequest) -> Result<StatusReport, AppError> {
        request.check_components()?;

        let mut statuses = Vec::new();
        let mut claimed = StagedNames::default();
        for component in &request.components {
            let artifacts = self.resolve_component(request, component)?;
            claimed.claim(request, component, &artifacts)?;
            for source in &artifacts.dynamic_artifacts {
                let artifact = StagingCopier::inspect(&self.store, source, &request.staging_dir)?;
                statuses.push(ArtifactStatus {
                    component: component.name().to_string(),
                    source: artifact.source,
                    staged: artifact.staged,
                    status: artifact.status,
                });
            }
        }

        self.transition(PipelineState::Done);
        Ok(StatusReport {
            module: request.module.clone(),
            configuration: request.configuration,
            platform: request.platform,
            staging_dir: request.staging_dir.clone(),
            artifacts: statuses,
        })
    }

    fn resolve_component(
        &mut self,
        request: &PipelineRequest,
        component: &LibraryComponent,
    ) -> Result<ArtifactSet, AppError> {
        let target = request.target();
        let filter = ExcludeBaseNames::new(component.exclusions());

        self.transition(PipelineState::Locating);
        let statics =
            ArtifactLocator::locate(&self.store, &target, component, LinkageKind::Static, &filter)?;
        let dynamics =
            ArtifactLocator::locate(&self.store, &target, component, LinkageKind::Dynamic, &filter)?;

        self.transition(PipelineState::Validating);
        let name = component.name().as_str();
        Ok(ArtifactSet {
            static_artifacts: ArtifactValidator::validate(statics, name, request.configuration)?,
            dynamic_artifacts: ArtifactValidator::validate(dynamics, name, request.configuration)?,
        })
    }
}
