//! Read-only model version registry.

use std::collections::HashMap;

/// Named model versions for audit trails.
///
/// Values are opaque strings; the math never reads them. Passed explicitly in
/// the assessor configuration rather than living in process-global state.
#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    models: HashMap<String, String>,
}

impl ModelRegistry {
    pub fn new(models: HashMap<String, String>) -> Self {
        Self { models }
    }

    pub fn version(&self, name: &str) -> Option<&str> {
        self.models.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.models
            .iter()
            .map(|(name, version)| (name.as_str(), version.as_str()))
    }
}
