//! Renderers for resolution and status results.

use std::collections::BTreeSet;
use std::io::{self, Write};
use std::path::Path;

use crate::domain::paths::base_name;
use crate::domain::{Platform, Resolution, StatusReport};

/// Human-readable summary of a resolution.
pub fn write_text<W: Write>(resolution: &Resolution, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "Module: {} ({}, {})",
        resolution.module, resolution.configuration, resolution.platform
    )?;
    writeln!(out, "Staging directory: {}", resolution.staging_dir.display())?;

    writeln!(out, "Static libraries:")?;
    for library in &resolution.static_libraries {
        writeln!(out, "  {}", library.display())?;
    }
    writeln!(out, "Delay-load:")?;
    for name in &resolution.delay_load {
        writeln!(out, "  {}", name)?;
    }
    writeln!(out, "Runtime dependencies:")?;
    for dependency in &resolution.runtime_dependencies {
        writeln!(out, "  {}", dependency.display())?;
    }
    writeln!(out, "Definitions:")?;
    for assignment in resolution.definitions.to_assignments() {
        writeln!(out, "  {}", assignment)?;
    }
    Ok(())
}

pub fn write_json<W: Write>(resolution: &Resolution, out: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, resolution)?;
    writeln!(out)
}

/// One `KEY=VALUE` line per definition, in emission order.
pub fn write_definitions<W: Write>(resolution: &Resolution, out: &mut W) -> io::Result<()> {
    for assignment in resolution.definitions.to_assignments() {
        writeln!(out, "{}", assignment)?;
    }
    Ok(())
}

/// Emit cargo build-script directives for a resolution.
///
/// Static libraries become `rustc-link-search`/`rustc-link-lib` pairs,
/// definitions become `rustc-env` variables, and every consumed artifact is
/// watched with `rerun-if-changed`.
pub fn write_cargo_directives<W: Write>(resolution: &Resolution, out: &mut W) -> io::Result<()> {
    let search_dirs: BTreeSet<&Path> =
        resolution.static_libraries.iter().filter_map(|lib| lib.parent()).collect();
    for dir in search_dirs {
        writeln!(out, "cargo:rustc-link-search=native={}", dir.display())?;
    }
    for library in &resolution.static_libraries {
        writeln!(out, "cargo:rustc-link-lib=static={}", link_name(library, resolution.platform))?;
    }
    for (key, value) in resolution.definitions.iter() {
        writeln!(out, "cargo:rustc-env={}={}", key, value)?;
    }
    for library in &resolution.static_libraries {
        writeln!(out, "cargo:rerun-if-changed={}", library.display())?;
    }
    for component in &resolution.components {
        for artifact in &component.staged {
            writeln!(out, "cargo:rerun-if-changed={}", artifact.source.display())?;
        }
    }
    Ok(())
}

/// Linker name of a static library: the base name, minus `lib` off Windows.
fn link_name(library: &Path, platform: Platform) -> String {
    let name = base_name(library);
    match platform {
        Platform::Windows => name,
        _ => name.strip_prefix("lib").map(str::to_string).unwrap_or(name),
    }
}

pub fn write_status_text<W: Write>(report: &StatusReport, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "Module: {} ({}, {})",
        report.module, report.configuration, report.platform
    )?;
    writeln!(out, "Staging directory: {}", report.staging_dir.display())?;
    for artifact in &report.artifacts {
        writeln!(
            out,
            "  {:<8} {} ({})",
            artifact.status.to_string(),
            artifact.staged.display(),
            artifact.component
        )?;
    }
    Ok(())
}

pub fn write_status_json<W: Write>(report: &StatusReport, out: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)
}
