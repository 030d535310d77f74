use std::sync::OnceLock;

use crate::error::{Error, Result};
use crate::level::Level;
use crate::version::{V20_4_4, VersionStrategy};

/// Append-only list of known versions.
#[derive(Debug, Default)]
pub struct Registry {
    versions: Vec<&'static dyn VersionStrategy>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every version this crate supports, in declaration order.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(&V20_4_4);
        registry
    }

    pub fn register(&mut self, version: &'static dyn VersionStrategy) {
        self.versions.push(version);
    }

    pub fn list_all(&self) -> &[&'static dyn VersionStrategy] {
        &self.versions
    }

    pub fn find_by_number(&self, version_number: &str) -> Result<&'static dyn VersionStrategy> {
        self.versions
            .iter()
            .copied()
            .find(|version| version.version_number() == version_number)
            .ok_or_else(|| Error::VersionNotFound(version_number.to_string()))
    }

    pub fn find_by_description(&self, description: &str) -> Result<&'static dyn VersionStrategy> {
        self.versions
            .iter()
            .copied()
            .find(|version| version.description() == description)
            .ok_or_else(|| Error::VersionNotFound(description.to_string()))
    }

    /// First registered version compatible with `level`.
    pub fn detect(&self, level: &Level) -> Option<&'static dyn VersionStrategy> {
        self.versions
            .iter()
            .copied()
            .find(|version| version.is_compatible(level))
    }
}

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// The process-wide registry, built on first use.
pub fn registry() -> &'static Registry {
    REGISTRY.get_or_init(Registry::builtin)
}
