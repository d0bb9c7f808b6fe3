//! Pure parse/validate for the staging manifest (`depstage.toml`).

use super::manifest::StagingManifest;
use crate::domain::AppError;

/// Parse and validate a staging manifest from TOML content.
pub fn parse_manifest_content(content: &str) -> Result<StagingManifest, AppError> {
    let manifest: StagingManifest = toml::from_str(content)?;
    manifest.validate()?;
    Ok(manifest)
}
