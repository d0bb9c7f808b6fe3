//! Artifact locator service.

use std::ffi::OsStr;
use std::path::Path;

use log::{debug, warn};

use crate::domain::paths::base_name;
use crate::domain::{
    AppError, BuildConfiguration, LibraryComponent, LinkageKind, LocatedArtifacts, Platform,
};
use crate::ports::ArtifactStore;

/// Predicate deciding whether a located artifact is kept.
pub trait ArtifactFilter {
    fn accepts(&self, path: &Path) -> bool;
}

impl<F> ArtifactFilter for F
where
    F: Fn(&Path) -> bool,
{
    fn accepts(&self, path: &Path) -> bool {
        self(path)
    }
}

/// Keeps every artifact.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl ArtifactFilter for AcceptAll {
    fn accepts(&self, _path: &Path) -> bool {
        true
    }
}

/// Rejects artifacts whose base name (without extension) is listed.
///
/// Used when a bundled library would collide with one the host already ships.
#[derive(Debug, Clone, Copy)]
pub struct ExcludeBaseNames<'a> {
    names: &'a [String],
}

impl<'a> ExcludeBaseNames<'a> {
    pub fn new(names: &'a [String]) -> Self {
        Self { names }
    }
}

impl ArtifactFilter for ExcludeBaseNames<'_> {
    fn accepts(&self, path: &Path) -> bool {
        let name = base_name(path);
        !self.names.iter().any(|excluded| *excluded == name)
    }
}

/// Platform, configuration, and root shared by every lookup in a run.
#[derive(Debug, Clone, Copy)]
pub struct TargetSelection<'a> {
    pub third_party_root: &'a Path,
    pub platform: Platform,
    pub configuration: BuildConfiguration,
}

/// Service computing expected artifact directories and listing their contents.
pub struct ArtifactLocator;

impl ArtifactLocator {
    /// List the artifacts of `component` for one linkage.
    ///
    /// Keeps immediate files carrying the platform's extension for `linkage`
    /// and accepted by `filter`, sorted by file name. A missing directory is
    /// reported through `directory_exists`, not as an error.
    pub fn locate<S, F>(
        store: &S,
        target: &TargetSelection<'_>,
        component: &LibraryComponent,
        linkage: LinkageKind,
        filter: &F,
    ) -> Result<LocatedArtifacts, AppError>
    where
        S: ArtifactStore,
        F: ArtifactFilter + ?Sized,
    {
        let directory = component.artifact_dir(
            target.third_party_root,
            target.platform,
            target.configuration,
            linkage,
        );

        if !store.is_dir(&directory) {
            if let Some(root) = component.override_for(target.platform) {
                warn!(
                    "Binaries override for '{}' on {} has no {} directory: \"{}\"",
                    component.name(),
                    target.platform,
                    linkage,
                    root.display()
                );
            }
            debug!("No {} directory for '{}' at \"{}\"", linkage, component.name(), directory.display());
            return Ok(LocatedArtifacts {
                linkage,
                directory,
                directory_exists: false,
                artifacts: Vec::new(),
            });
        }

        let extension = OsStr::new(target.platform.extension(linkage));
        let mut artifacts: Vec<_> = store
            .list_files(&directory)?
            .into_iter()
            .filter(|path| path.extension() == Some(extension))
            .filter(|path| filter.accepts(path))
            .collect();
        artifacts.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        debug!(
            "Located {} {} artifact(s) for '{}' in \"{}\"",
            artifacts.len(),
            linkage,
            component.name(),
            directory.display()
        );

        Ok(LocatedArtifacts { linkage, directory, directory_exists: true, artifacts })
    }
}
