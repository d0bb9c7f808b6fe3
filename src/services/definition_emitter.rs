//! Definition emitter service.

use log::info;

use crate::domain::{AppError, ComponentRegistration, DefinitionKeys, DefinitionMap};

/// Service building the compile-time definitions for a run.
pub struct DefinitionEmitter;

impl DefinitionEmitter {
    /// Build the definition map.
    ///
    /// Always binds the staging path. A single-component run binds the combined
    /// names key to that component's joined names; a multi-component run binds
    /// one names key per component plus the combined key, whose value is the
    /// per-component strings separated by one space.
    pub fn emit(
        keys: &DefinitionKeys,
        staging_definition: &str,
        components: &[ComponentRegistration],
    ) -> Result<DefinitionMap, AppError> {
        let mut definitions = DefinitionMap::new();
        definitions.insert(keys.dll_path(), staging_definition)?;

        match components {
            [single] => {
                definitions.insert(keys.dll_names(), single.joined_names.clone())?;
            }
            many => {
                for registration in many {
                    definitions.insert(
                        keys.component_dll_names(&registration.component),
                        registration.joined_names.clone(),
                    )?;
                }
                let combined: Vec<&str> =
                    many.iter().map(|r| r.joined_names.as_str()).collect();
                definitions.insert(keys.dll_names(), combined.join(" "))?;
            }
        }

        let mut msg = String::from("Setting definitions:\n{\n");
        for (key, value) in definitions.iter() {
            msg.push_str(&format!("\t{} = {}\n", key, value));
        }
        info!("{}}}", msg);

        Ok(definitions)
    }
}
