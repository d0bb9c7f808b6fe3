//! Third-party library component declarations.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::identifiers::ComponentName;
use super::target::{BuildConfiguration, LinkageKind, Platform};

/// Directory under a component root holding its prebuilt binaries.
pub const BINARIES_DIR: &str = "Binaries";

/// A named third-party dependency whose prebuilt artifacts are consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryComponent {
    name: ComponentName,
    overrides: BTreeMap<Platform, PathBuf>,
    exclude: Vec<String>,
}

impl LibraryComponent {
    pub fn new(name: ComponentName) -> Self {
        Self { name, overrides: BTreeMap::new(), exclude: Vec::new() }
    }

    /// Replace the `Binaries` root used on `platform`.
    pub fn with_override(mut self, platform: Platform, binaries_root: impl Into<PathBuf>) -> Self {
        self.overrides.insert(platform, binaries_root.into());
        self
    }

    /// Exclude artifacts whose base name (without extension) matches.
    pub fn with_exclusions<I, S>(mut self, base_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude.extend(base_names.into_iter().map(Into::into));
        self
    }

    pub fn name(&self) -> &ComponentName {
        &self.name
    }

    pub fn exclusions(&self) -> &[String] {
        &self.exclude
    }

    pub fn override_for(&self, platform: Platform) -> Option<&Path> {
        self.overrides.get(&platform).map(PathBuf::as_path)
    }

    /// Root holding `<Debug|Release>/<Static|Dynamic>/` for `platform`.
    ///
    /// Relative overrides resolve against `third_party_root`.
    pub fn binaries_root(&self, third_party_root: &Path, platform: Platform) -> PathBuf {
        match self.override_for(platform) {
            Some(path) => third_party_root.join(path),
            None => third_party_root.join(self.name.as_str()).join(BINARIES_DIR),
        }
    }

    /// Expected artifact directory for one configuration and linkage.
    pub fn artifact_dir(
        &self,
        third_party_root: &Path,
        platform: Platform,
        configuration: BuildConfiguration,
        linkage: LinkageKind,
    ) -> PathBuf {
        self.binaries_root(third_party_root, platform)
            .join(configuration.dir_name())
            .join(linkage.dir_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrapper() -> LibraryComponent {
        LibraryComponent::new(ComponentName::new("OpenCVWrapper").unwrap())
    }

    #[test]
    fn default_layout_lives_under_component_binaries() {
        let dir = wrapper().artifact_dir(
            Path::new("/plugin/ThirdParty"),
            Platform::Windows,
            BuildConfiguration::Release,
            LinkageKind::Dynamic,
        );

        assert_eq!(dir, PathBuf::from("/plugin/ThirdParty/OpenCVWrapper/Binaries/Release/Dynamic"));
    }

    #[test]
    fn override_applies_only_to_its_platform() {
        let component = wrapper().with_override(Platform::Linux, "/opt/wrapper/bin");
        let base = Path::new("/plugin/ThirdParty");

        assert_eq!(
            component.artifact_dir(base, Platform::Linux, BuildConfiguration::Debug, LinkageKind::Static),
            PathBuf::from("/opt/wrapper/bin/Debug/Static")
        );
        assert_eq!(
            component.artifact_dir(
                base,
                Platform::Windows,
                BuildConfiguration::Debug,
                LinkageKind::Static
            ),
            PathBuf::from("/plugin/ThirdParty/OpenCVWrapper/Binaries/Debug/Static")
        );
    }

    #[test]
    fn relative_override_resolves_against_base() {
        let component = wrapper().with_override(Platform::MacOs, "Prebuilt/macos");

        assert_eq!(
            component.binaries_root(Path::new("/plugin/ThirdParty"), Platform::MacOs),
            PathBuf::from("/plugin/ThirdParty/Prebuilt/macos")
        );
    }
}
