//! Run options and pipeline request assembly.

use std::env;

use log::info;

use crate::app::config::LoadedManifest;
use crate::domain::{AppError, BuildConfiguration, Platform};
use crate::services::PipelineRequest;

/// Caller-selected target for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Requested configuration, before the debug CRT rule is applied.
    pub configuration: BuildConfiguration,
    /// Overrides the manifest's platform and the host platform.
    pub platform: Option<Platform>,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self { configuration: BuildConfiguration::Release, platform: None }
    }
}

impl ResolveOptions {
    pub fn new(configuration: BuildConfiguration) -> Self {
        Self { configuration, ..Self::default() }
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Options for a build script: `PROFILE` selects the configuration and
    /// `CARGO_CFG_TARGET_OS` the platform.
    pub fn from_cargo_env() -> Self {
        let configuration = match env::var("PROFILE").as_deref() {
            Ok("debug") => BuildConfiguration::Debug,
            _ => BuildConfiguration::Release,
        };
        let platform = env::var("CARGO_CFG_TARGET_OS").ok().and_then(|os| os.parse().ok());
        Self { configuration, platform }
    }
}

/// Assemble the pipeline inputs for a loaded manifest.
///
/// Platform precedence: options, then `[build].platform`, then the host.
pub fn pipeline_request(
    loaded: &LoadedManifest,
    options: &ResolveOptions,
) -> Result<PipelineRequest, AppError> {
    let manifest = &loaded.manifest;
    let configuration = BuildConfiguration::for_target(
        options.configuration,
        manifest.build.debug_builds_use_debug_crt,
    );
    if configuration != options.configuration {
        info!("Debug builds do not use the debug CRT, using {} artifacts", configuration);
    }
    info!("Compiling {} build.", configuration.dir_name().to_ascii_lowercase());

    let platform = options.platform.or(manifest.build.platform).unwrap_or_else(Platform::current);

    Ok(PipelineRequest {
        module: manifest.module.name.clone(),
        configuration,
        platform,
        components: manifest.library_components()?,
        third_party_root: loaded.layout.third_party_root.clone(),
        staging_dir: loaded.layout.staging_dir.clone(),
        staging_definition: loaded.layout.staging_definition.clone(),
        keys: manifest.definition_keys(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parse_manifest_content;
    use std::path::{Path, PathBuf};

    fn loaded(content: &str) -> LoadedManifest {
        let manifest = parse_manifest_content(content).unwrap();
        let layout = manifest.layout(Path::new("/plugin"));
        LoadedManifest { path: PathBuf::from("/plugin/depstage.toml"), manifest, layout }
    }

    const MANIFEST: &str = r#"
[module]
name = "LensCalibrator"

[staging]
directory = "Binaries/Win64"

[build]
debug_builds_use_debug_crt = false
platform = "linux"

[[components]]
name = "Wrapper"
"#;

    #[test]
    fn debug_without_debug_crt_uses_release() {
        let request =
            pipeline_request(&loaded(MANIFEST), &ResolveOptions::new(BuildConfiguration::Debug))
                .unwrap();

        assert_eq!(request.configuration, BuildConfiguration::Release);
    }

    #[test]
    fn option_platform_beats_manifest_platform() {
        let manifest_only = pipeline_request(&loaded(MANIFEST), &ResolveOptions::default()).unwrap();
        let overridden = pipeline_request(
            &loaded(MANIFEST),
            &ResolveOptions::default().with_platform(Platform::Windows),
        )
        .unwrap();

        assert_eq!(manifest_only.platform, Platform::Linux);
        assert_eq!(overridden.platform, Platform::Windows);
    }

    #[test]
    fn request_carries_layout_and_keys() {
        let request = pipeline_request(&loaded(MANIFEST), &ResolveOptions::default()).unwrap();

        assert_eq!(request.module, "LensCalibrator");
        assert_eq!(request.third_party_root, PathBuf::from("/plugin/ThirdParty"));
        assert_eq!(request.staging_dir, PathBuf::from("/plugin/Binaries/Win64"));
        assert_eq!(request.staging_definition, "Binaries/Win64/");
        assert_eq!(request.keys.dll_path(), "DEPSTAGE_DLL_PATH");
        assert_eq!(request.components.len(), 1);
    }
}
