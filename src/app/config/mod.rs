//! Filesystem-backed manifest loading.
//!
//! Pure schema parsing lives in `domain::config`.

mod load_manifest;

pub use load_manifest::{LoadedManifest, load_manifest};
