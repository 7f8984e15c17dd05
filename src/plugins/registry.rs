//! Plugin registry
//!
//! Manages known plugins and provides identifier resolution for the
//! configuration validator.

use super::manifest::{builtin_plugins, PluginManifest};
use std::collections::HashMap;

/// Plugin registry holds all known plugin manifests
#[derive(Debug, Default)]
pub struct PluginRegistry {
    plugins: HashMap<String, PluginManifest>,
}

impl PluginRegistry {
    /// Create a new empty plugin registry
    pub fn new() -> Self {
        Self {
            plugins: HashMap::new(),
        }
    }

    /// Create a registry seeded with the built-in plugins
    pub fn builtin() -> Self {
        Self::from_plugins(builtin_plugins())
    }

    /// Create a plugin registry from a list of manifests
    pub fn from_plugins(plugins: Vec<PluginManifest>) -> Self {
        let mut registry = Self::new();
        for plugin in plugins {
            registry.register(plugin);
        }
        registry
    }

    /// Register a plugin
    pub fn register(&mut self, plugin: PluginManifest) {
        self.plugins.insert(plugin.name.clone(), plugin);
    }

    /// Get a plugin by name
    pub fn get(&self, name: &str) -> Option<&PluginManifest> {
        self.plugins.get(name)
    }

    /// Check if a plugin is registered
    pub fn contains(&self, name: &str) -> bool {
        self.plugins.contains_key(name)
    }

    /// Get plugin names, sorted for stable output
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.plugins.keys().cloned().collect();
        names.sort();
        names
    }

    /// Get all manifests, sorted by name
    pub fn all(&self) -> Vec<&PluginManifest> {
        let mut plugins: Vec<&PluginManifest> = self.plugins.values().collect();
        plugins.sort_by(|a, b| a.name.cmp(&b.name));
        plugins
    }

    /// Get the number of registered plugins
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_registry() {
        let registry = PluginRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(!registry.contains("typography"));
    }

    #[test]
    fn test_builtin_registry() {
        let registry = PluginRegistry::builtin();
        assert_eq!(registry.len(), 3);
        assert!(registry.contains("typography"));
        assert!(registry.contains("forms"));
        assert!(registry.contains("container-queries"));
        assert!(!registry.contains("unknownPlugin"));
    }

    #[test]
    fn test_register_plugin() {
        let mut registry = PluginRegistry::new();
        registry.register(PluginManifest::new(
            "aspect-ratio",
            "@tailwindcss/aspect-ratio",
            "Aspect ratio utilities",
        ));
        assert_eq!(registry.len(), 1);
        assert!(registry.contains("aspect-ratio"));
    }

    #[test]
    fn test_get_plugin() {
        let registry = PluginRegistry::builtin();

        let retrieved = registry.get("forms");
        assert!(retrieved.is_some());
        assert_eq!(retrieved.unwrap().package, "@tailwindcss/forms");

        let missing = registry.get("missing");
        assert!(missing.is_none());
    }

    #[test]
    fn test_names_sorted() {
        let registry = PluginRegistry::builtin();
        let names = registry.names();
        assert_eq!(names, vec!["container-queries", "forms", "typography"]);
    }

    #[test]
    fn test_register_overrides_existing() {
        let mut registry = PluginRegistry::builtin();
        registry.register(PluginManifest::new(
            "forms",
            "@acme/forms",
            "Replacement forms plugin",
        ));
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.get("forms").unwrap().package, "@acme/forms");
    }
}
