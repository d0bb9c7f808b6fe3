//! `status`: report what `resolve` would copy, without copying.

use super::options::{ResolveOptions, pipeline_request};
use crate::app::config::LoadedManifest;
use crate::domain::{AppError, StatusReport};
use crate::ports::ArtifactStore;
use crate::services::Pipeline;

pub fn execute<S: ArtifactStore>(
    store: S,
    loaded: &LoadedManifest,
    options: &ResolveOptions,
) -> Result<StatusReport, AppError> {
    let request = pipeline_request(loaded, options)?;
    Pipeline::new(store).inspect(&request)
}
