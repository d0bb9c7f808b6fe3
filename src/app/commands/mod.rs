//! Command layer: manifest + options in, domain results out.

mod options;
pub mod resolve;
pub mod status;
pub mod verify;

pub use options::{ResolveOptions, pipeline_request};
