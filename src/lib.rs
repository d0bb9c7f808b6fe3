//! depstage: locate, stage, and register prebuilt native library artifacts at build time.
//!
//! A manifest (`depstage.toml`) names third-party components. For the target
//! configuration each component's static libraries are registered for linking
//! and its dynamic libraries are copied into a staging directory, when missing
//! or stale, and registered for delayed loading. The run ends with a map of
//! compile-time definitions telling the runtime where the staged libraries
//! live and what they are called.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use adapters::FilesystemArtifactStore;
pub use app::api::{ResolveOptions, resolve, status, verify_staged, write_cargo_directives};
pub use app::config::{LoadedManifest, load_manifest};
pub use domain::{
    AppError, BuildConfiguration, DefinitionKeys, DefinitionMap, LibraryComponent, LinkageKind,
    Platform, Resolution, StageStatus, StatusReport,
};
pub use ports::ArtifactStore;
pub use services::{Pipeline, PipelineRequest, PipelineState};
