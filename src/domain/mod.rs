pub mod artifacts;
pub mod component;
pub mod config;
pub mod definitions;
pub mod error;
pub mod identifiers;
pub mod paths;
pub mod resolution;
pub mod target;

pub use artifacts::{ArtifactSet, LocatedArtifacts, StageStatus, StagedArtifact};
pub use component::LibraryComponent;
pub use config::{StagingLayout, StagingManifest, parse_manifest_content};
pub use definitions::{
    DefinitionKeys, DefinitionMap, join_dynamic_names, normalized_names, parse_dynamic_names,
};
pub use error::{AppError, MissingReason};
pub use identifiers::ComponentName;
pub use resolution::{ArtifactStatus, ComponentRegistration, Resolution, StatusReport};
pub use target::{BuildConfiguration, LinkageKind, Platform};
