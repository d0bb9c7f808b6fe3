pub mod component_name;
pub mod validation;

pub use component_name::ComponentName;
