//! Dependency registrar service.

use std::path::PathBuf;

use log::info;

use crate::domain::{
    ArtifactSet, ComponentRegistration, LibraryComponent, StagedArtifact, join_dynamic_names,
    normalized_names,
};

/// Everything registered over one run, in component/declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registrations {
    pub static_libraries: Vec<PathBuf>,
    pub delay_load: Vec<String>,
    pub runtime_dependencies: Vec<PathBuf>,
    pub components: Vec<ComponentRegistration>,
}

/// Accumulates link-time, delay-load, and runtime registrations across components.
#[derive(Debug, Default)]
pub struct DependencyRegistrar {
    registrations: Registrations,
}

impl DependencyRegistrar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one component's validated and staged artifacts.
    ///
    /// Static artifacts are registered as located; only staged dynamic
    /// artifacts feed the delay-load and runtime-dependency lists.
    pub fn register(
        &mut self,
        component: &LibraryComponent,
        artifacts: &ArtifactSet,
        staged: Vec<StagedArtifact>,
    ) {
        let acc = &mut self.registrations;

        for library in &artifacts.static_artifacts {
            info!("Registering library for linking: \"{}\"", library.display());
            acc.static_libraries.push(library.clone());
        }

        let mut dynamic_names = Vec::with_capacity(staged.len());
        for artifact in &staged {
            info!("Registering runtime library: \"{}\"", artifact.staged.display());
            let name = artifact.base_name();
            acc.delay_load.push(name.clone());
            dynamic_names.push(name);

            info!("Registering runtime dependency: \"{}\"", artifact.staged.display());
            acc.runtime_dependencies.push(artifact.staged.clone());
        }

        acc.components.push(ComponentRegistration {
            component: component.name().to_string(),
            static_libraries: artifacts.static_artifacts.clone(),
            joined_names: join_dynamic_names(&dynamic_names),
            normalized_names: normalized_names(&dynamic_names),
            dynamic_names,
            staged,
        });
    }

    pub fn finish(self) -> Registrations {
        self.registrations
    }
}
