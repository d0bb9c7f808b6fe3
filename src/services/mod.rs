mod artifact_locator;
mod artifact_validator;
mod definition_emitter;
mod dependency_registrar;
mod pipeline;
mod staging_copier;

pub use artifact_locator::{
    AcceptAll, ArtifactFilter, ArtifactLocator, ExcludeBaseNames, TargetSelection,
};
pub use artifact_validator::ArtifactValidator;
pub use definition_emitter::DefinitionEmitter;
pub use dependency_registrar::{DependencyRegistrar, Registrations};
pub use pipeline::{Pipeline, PipelineRequest, PipelineState};
pub use staging_copier::StagingCopier;
