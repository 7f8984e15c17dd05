//! Plugin manifest definitions
//!
//! Describes the externally-implemented capability modules the CSS engine
//! can activate. The loader only resolves identifiers against these
//! manifests; the engine itself loads and runs the plugin modules.

use serde::{Deserialize, Serialize};

/// Metadata for a known plugin
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PluginManifest {
    /// Identifier referenced from the `plugins` list
    pub name: String,

    /// Module path the consuming engine imports for this plugin
    pub package: String,

    /// Human-readable summary shown by `windcfg plugins`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PluginManifest {
    pub fn new(name: &str, package: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            package: package.to_string(),
            description: Some(description.to_string()),
        }
    }
}

/// Plugins shipped with the engine, available without installation
pub fn builtin_plugins() -> Vec<PluginManifest> {
    vec![
        PluginManifest::new(
            "typography",
            "@tailwindcss/typography",
            "Prose classes for styling blocks of rendered markup",
        ),
        PluginManifest::new(
            "forms",
            "@tailwindcss/forms",
            "Opinionated resets for form elements",
        ),
        PluginManifest::new(
            "container-queries",
            "@tailwindcss/container-queries",
            "Container-query variants for element-relative styling",
        ),
    ]
}
