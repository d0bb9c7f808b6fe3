//! `resolve` and `status` command implementations.

use std::io::{self, Write};

use super::{OutputFormat, TargetArgs};
use crate::app::api::{self, ResolveOptions};
use crate::app::output;
use crate::domain::AppError;

impl TargetArgs {
    fn options(&self) -> ResolveOptions {
        ResolveOptions { configuration: self.configuration.into(), platform: self.platform }
    }
}

pub fn run_resolve(target: TargetArgs, format: OutputFormat) -> Result<(), AppError> {
    let resolution = api::resolve(&target.manifest, target.options())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Text => {
            output::write_text(&resolution, &mut out)?;
            writeln!(
                out,
                "✅ Resolved {} component(s), staged {} runtime dependenc{} ({} copied)",
                resolution.components.len(),
                resolution.runtime_dependencies.len(),
                if resolution.runtime_dependencies.len() == 1 { "y" } else { "ies" },
                resolution.copied_count()
            )?;
        }
        OutputFormat::Json => output::write_json(&resolution, &mut out)?,
        OutputFormat::Defines => output::write_definitions(&resolution, &mut out)?,
        OutputFormat::Cargo => output::write_cargo_directives(&resolution, &mut out)?,
    }
    Ok(())
}

pub fn run_status(target: TargetArgs, json: bool) -> Result<(), AppError> {
    let report = api::status(&target.manifest, target.options())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        output::write_status_json(&report, &mut out)?;
    } else {
        output::write_status_text(&report, &mut out)?;
        if report.is_up_to_date() {
            writeln!(out, "✅ Staging directory is up to date")?;
        } else {
            let pending = report.artifacts.iter().filter(|a| a.status.needs_copy()).count();
            writeln!(out, "{} artifact(s) would be copied", pending)?;
        }
    }
    Ok(())
}
