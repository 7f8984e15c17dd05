//! Configuration schema definitions
//!
//! Defines the structure of configuration files using serde for serialization.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root configuration structure
///
/// Mirrors the three top-level keys the CSS engine reads at build time:
/// `content`, `theme` and `plugins`. All fields are optional in the file;
/// a missing field means an empty scan scope, no theme extension, or no
/// plugins respectively.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Glob patterns for source files scanned for class-name usage
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<String>,

    /// Theme customization merged into the engine's base theme
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Plugin identifiers, in application order
    /// Later plugins may override utilities generated by earlier ones
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<String>,
}

/// Theme configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    /// Additive extension of the base theme
    #[serde(default)]
    pub extend: ThemeExtension,
}

/// Theme extension categories
///
/// Only colors are supported; the map is additive over the base theme,
/// it never replaces base tokens the extension does not name.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ThemeExtension {
    /// Color token name -> 6-digit hex color value (e.g. "#0C1821")
    /// BTreeMap keeps token names unique and serialization order stable
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub colors: BTreeMap<String, String>,
}

impl Config {
    /// Look up a color token in the theme extension
    pub fn color(&self, name: &str) -> Option<&str> {
        self.theme.extend.colors.get(name).map(String::as_str)
    }
}
