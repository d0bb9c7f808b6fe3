//! `resolve`: run the full pipeline for a manifest.

use log::info;

use super::options::{ResolveOptions, pipeline_request};
use crate::app::config::LoadedManifest;
use crate::domain::{AppError, Resolution};
use crate::ports::ArtifactStore;
use crate::services::Pipeline;

pub fn execute<S: ArtifactStore>(
    store: S,
    loaded: &LoadedManifest,
    options: &ResolveOptions,
) -> Result<Resolution, AppError> {
    let request = pipeline_request(loaded, options)?;
    let resolution = Pipeline::new(store).run(&request)?;

    info!(
        "Resolved {} component(s) for '{}', {} artifact(s) copied",
        resolution.components.len(),
        resolution.module,
        resolution.copied_count()
    );
    Ok(resolution)
}
