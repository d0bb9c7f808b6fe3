pub mod manifest;
pub mod parse;
pub mod paths;

pub use manifest::{
    BuildSection, ComponentEntry, DefinitionsSection, ModuleSection, StagingLayout,
    StagingManifest, StagingSection, ThirdPartySection,
};
pub use parse::parse_manifest_content;
