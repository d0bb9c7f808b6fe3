use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::target::{BuildConfiguration, LinkageKind};

/// Why a located artifact sequence came back empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingReason {
    /// The expected artifact directory does not exist.
    ComponentDirectoryMissing,
    /// The directory exists but no file matches the expected extension.
    EmptyArtifactSet,
}

impl std::fmt::Display for MissingReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MissingReason::ComponentDirectoryMissing => write!(f, "directory does not exist"),
            MissingReason::EmptyArtifactSet => write!(f, "no matching artifacts"),
        }
    }
}

/// Library-wide error type for depstage operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Staging manifest not found at the given path.
    #[error("Staging manifest not found: {0}")]
    ManifestNotFound(PathBuf),

    /// Component name is invalid.
    #[error(
        "Invalid component name '{0}': must be alphanumeric with hyphens, underscores, or periods"
    )]
    InvalidComponentName(String),

    /// Component declared more than once in a single run.
    #[error("Component '{0}' is declared more than once")]
    DuplicateComponent(String),

    /// No artifacts found for a component at the expected location.
    #[error(
        "Missing {linkage} libraries for '{component}' ({configuration}) at path: \"{}\": {reason}",
        .directory.display()
    )]
    MissingArtifacts {
        component: String,
        configuration: BuildConfiguration,
        linkage: LinkageKind,
        directory: PathBuf,
        reason: MissingReason,
    },

    /// Two components ship a dynamic library under the same staged file name.
    #[error("Dynamic library '{name}' is shipped by both '{first}' and '{second}'")]
    DuplicateStagedArtifact { name: String, first: String, second: String },

    /// A dynamic artifact vanished between discovery and copy.
    #[error("Missing dynamic library at path: \"{}\"", .0.display())]
    MissingSourceArtifact(PathBuf),

    /// The staging directory could not be created.
    #[error("Failed to create staging directory \"{}\": {source}", .path.display())]
    StagingDirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Copying a dynamic artifact into the staging directory failed.
    #[error("Failed to copy \"{}\" to \"{}\": {source}", .from.display(), .to.display())]
    CopyFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The same definition symbol was emitted twice in one run.
    #[error("Definition '{0}' is emitted more than once")]
    DuplicateDefinition(String),

    /// A dynamic names definition holds no names.
    #[error("Definition \"{0}\" has 0 library names")]
    EmptyNamesDefinition(String),

    /// A dynamic names definition lists the same library twice.
    #[error("Library '{0}' is listed more than once")]
    DuplicateRuntimeName(String),

    /// A staged artifact expected by the runtime loader is absent.
    #[error("Missing staged library at path: \"{}\"", .0.display())]
    MissingStagedArtifact(PathBuf),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::StagingDirectoryCreationFailed { source, .. }
            | AppError::CopyFailed { source, .. } => source.kind(),
            AppError::Configuration(_)
            | AppError::InvalidComponentName(_)
            | AppError::DuplicateComponent(_)
            | AppError::DuplicateStagedArtifact { .. }
            | AppError::DuplicateDefinition(_)
            | AppError::EmptyNamesDefinition(_)
            | AppError::DuplicateRuntimeName(_)
            | AppError::TomlParseError(_) => io::ErrorKind::InvalidInput,
            AppError::ManifestNotFound(_)
            | AppError::MissingArtifacts { .. }
            | AppError::MissingSourceArtifact(_)
            | AppError::MissingStagedArtifact(_) => io::ErrorKind::NotFound,
        }
    }
}
