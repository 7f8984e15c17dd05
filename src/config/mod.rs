//! Configuration system for windcfg
//!
//! Loads and validates the build-time styling configuration consumed by the
//! CSS generation engine: content scan globs, theme color tokens, and the
//! list of active plugins. Loading is pure and fail-fast; a configuration
//! either validates completely or the first offending field is reported.

mod defaults;
pub mod loader;
pub mod paths;
pub mod schema;
pub mod validator;

pub use defaults::DEFAULT_CONFIG_YAML;
pub use loader::ConfigLoader;
pub use schema::Config;
pub use schema::{ThemeConfig, ThemeExtension};
pub use validator::ConfigValidator;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("malformed color value for '{name}': '{value}' is not a 6-digit hex color")]
    MalformedColorValue { name: String, value: String },

    #[error("malformed content pattern '{pattern}': {reason}")]
    MalformedGlobPattern { pattern: String, reason: String },

    #[error("unresolved plugin '{0}': not present in the plugin registry")]
    UnresolvedPlugin(String),

    #[error("failed to read config file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Get a configuration value by key (dot notation)
pub fn get_config_value(config: &schema::Config, key: &str) -> anyhow::Result<String> {
    match key {
        "content" => serde_yaml::to_string(&config.content)
            .map_err(|e| anyhow::anyhow!("Failed to serialize content: {}", e)),
        "plugins" => serde_yaml::to_string(&config.plugins)
            .map_err(|e| anyhow::anyhow!("Failed to serialize plugins: {}", e)),
        "theme.extend.colors" => serde_yaml::to_string(&config.theme.extend.colors)
            .map_err(|e| anyhow::anyhow!("Failed to serialize colors: {}", e)),
        _ => {
            if let Some(name) = key.strip_prefix("theme.extend.colors.") {
                return config
                    .color(name)
                    .map(str::to_string)
                    .ok_or_else(|| anyhow::anyhow!("Unknown color token: {}", name));
            }
            Err(anyhow::anyhow!("Unknown configuration key: {}", key))
        }
    }
}
