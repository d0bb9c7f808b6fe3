//! Artifact validator service.

use std::path::PathBuf;

use crate::domain::{AppError, BuildConfiguration, LocatedArtifacts, MissingReason};

/// Service asserting that a lookup produced at least one artifact.
pub struct ArtifactValidator;

impl ArtifactValidator {
    /// Return the located paths, or fail with `MissingArtifacts`.
    pub fn validate(
        located: LocatedArtifacts,
        component: &str,
        configuration: BuildConfiguration,
    ) -> Result<Vec<PathBuf>, AppError> {
        if !located.artifacts.is_empty() {
            return Ok(located.artifacts);
        }

        let reason = if located.directory_exists {
            MissingReason::EmptyArtifactSet
        } else {
            MissingReason::ComponentDirectoryMissing
        };

        Err(AppError::MissingArtifacts {
            component: component.to_string(),
            configuration,
            linkage: located.linkage,
            directory: located.directory,
            reason,
        })
    }
}
