//! Default configuration values
//!
//! The default definition is embedded in the binary so the loader works
//! without any files on disk. It is the configuration the site scaffold
//! ships with: one content glob, six color tokens, three plugins.

use super::schema::Config;
use super::{ConfigError, ConfigResult};

/// Embedded default definition
pub const DEFAULT_CONFIG_YAML: &str = include_str!("default_config.yaml");

/// Parse the embedded default definition
///
/// Parsing only; the loader validates the result before handing it out.
pub fn default_config() -> ConfigResult<Config> {
    serde_yaml::from_str(DEFAULT_CONFIG_YAML).map_err(|source| ConfigError::Parse {
        path: "<embedded>".to_string(),
        source,
    })
}
