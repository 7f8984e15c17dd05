//! Configuration validation
//!
//! Validates a parsed configuration against the plugin registry and provides
//! helpful error messages for common issues. Checks are independent per
//! field and fail fast on the first offending entry.

use super::schema::Config;
use super::{ConfigError, ConfigResult};
use crate::plugins::PluginRegistry;
use globset::Glob;
use std::collections::HashSet;

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a configuration
    pub fn validate(config: &Config, registry: &PluginRegistry) -> ConfigResult<()> {
        Self::validate_colors(config)?;
        Self::validate_content(config)?;
        Self::validate_plugins(config, registry)?;
        Ok(())
    }

    /// Validate color token values
    ///
    /// Every value must be a 6-digit hex color of the form `#RRGGBB`.
    /// Shorthand (`#RGB`) and named colors are not part of the token format.
    fn validate_colors(config: &Config) -> ConfigResult<()> {
        for (name, value) in &config.theme.extend.colors {
            if !is_hex_color(value) {
                return Err(ConfigError::MalformedColorValue {
                    name: name.clone(),
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }

    /// Validate content scan patterns
    ///
    /// An empty list is fine (the scan scope is simply empty), but each
    /// listed pattern must be non-empty and compile under the engine's glob
    /// dialect, which includes `{a,b}` alternation.
    fn validate_content(config: &Config) -> ConfigResult<()> {
        for pattern in &config.content {
            if pattern.is_empty() {
                return Err(ConfigError::MalformedGlobPattern {
                    pattern: pattern.clone(),
                    reason: "pattern cannot be empty".to_string(),
                });
            }

            if let Err(e) = Glob::new(pattern) {
                return Err(ConfigError::MalformedGlobPattern {
                    pattern: pattern.clone(),
                    reason: e.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Validate plugin references
    ///
    /// Each identifier must resolve to a known plugin. Listing a plugin
    /// twice is legal (the engine applies it twice), so duplicates only
    /// get a warning.
    fn validate_plugins(config: &Config, registry: &PluginRegistry) -> ConfigResult<()> {
        let mut seen = HashSet::new();

        for name in &config.plugins {
            if !registry.contains(name) {
                return Err(ConfigError::UnresolvedPlugin(name.clone()));
            }

            if !seen.insert(name) {
                tracing::warn!(plugin = %name, "plugin listed more than once");
            }
        }
        Ok(())
    }
}

/// Check that a color value is a 6-digit hex string (`#RRGGBB`)
pub fn is_hex_color(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit())
}
