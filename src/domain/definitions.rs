//! Compile-time definitions published for the built module.

use indexmap::IndexMap;
use serde::Serialize;

use super::AppError;
use super::identifiers::validation::to_symbol_fragment;

/// Prefix used when a manifest does not name one.
pub const DEFAULT_PREFIX: &str = "DEPSTAGE";

/// Ordered `symbol -> value` map. Keys are unique within one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DefinitionMap(IndexMap<String, String>);

impl DefinitionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a definition. Fails if `key` is already defined.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Result<(), AppError> {
        let key = key.into();
        if self.0.contains_key(&key) {
            return Err(AppError::DuplicateDefinition(key));
        }
        self.0.insert(key, value.into());
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `KEY=VALUE` strings in insertion order.
    pub fn to_assignments(&self) -> Vec<String> {
        self.iter().map(|(k, v)| format!("{}={}", k, v)).collect()
    }
}

/// Well-known symbol names derived from a prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionKeys {
    prefix: String,
}

impl DefinitionKeys {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into() }
    }

    /// Symbol bound to the staging directory.
    pub fn dll_path(&self) -> String {
        format!("{}_DLL_PATH", self.prefix)
    }

    /// Symbol bound to the combined dynamic library names.
    pub fn dll_names(&self) -> String {
        format!("{}_DLL_NAMES", self.prefix)
    }

    /// Symbol bound to one component's dynamic library names.
    pub fn component_dll_names(&self, component: &str) -> String {
        format!("{}_{}_DLL_NAMES", self.prefix, to_symbol_fragment(component))
    }
}

impl Default for DefinitionKeys {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

/// Join dynamic library base names into the published definition string.
///
/// A single name gets one leading space (`" foo"`); several names are joined
/// with one space and no leading space (`"foo bar"`). Existing consumers parse
/// this exact shape, so it must not be normalized here.
pub fn join_dynamic_names<S: AsRef<str>>(names: &[S]) -> String {
    let mut joined = String::new();
    for (i, name) in names.iter().enumerate() {
        let name = name.as_ref();
        if i + 1 < names.len() {
            joined.push_str(name);
            joined.push(' ');
        } else if names.len() == 1 {
            joined.push(' ');
            joined.push_str(name);
        } else {
            joined.push_str(name);
        }
    }
    joined
}

/// Plain single-space join without the leading-space quirk.
pub fn normalized_names<S: AsRef<str>>(names: &[S]) -> String {
    names.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(" ")
}

/// Split a names definition the way the runtime loader does.
///
/// Empty segments are dropped. Zero names or a repeated name is an error.
pub fn parse_dynamic_names(value: &str) -> Result<Vec<String>, AppError> {
    let mut names: Vec<String> = Vec::new();
    for name in value.split(' ').filter(|s| !s.is_empty()) {
        if names.iter().any(|n| n == name) {
            return Err(AppError::DuplicateRuntimeName(name.to_string()));
        }
        names.push(name.to_string());
    }

    if names.is_empty() {
        return Err(AppError::EmptyNamesDefinition(value.to_string()));
    }
    Ok(names)
}
