//! Configuration loading logic
//!
//! Handles loading the embedded definition and configuration files from
//! disk, validating both against the plugin registry before handing them
//! to the caller.

use super::schema::Config;
use super::validator::ConfigValidator;
use super::{defaults, paths, ConfigError, ConfigResult};
use crate::plugins::PluginRegistry;
use std::path::{Path, PathBuf};

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate the embedded definition
    ///
    /// Pure and idempotent: no I/O, and repeated calls yield structurally
    /// equal configurations. Validation runs against the built-in plugin
    /// registry, so the result is ready for the engine as-is.
    pub fn load() -> ConfigResult<Config> {
        let config = defaults::default_config()?;
        ConfigValidator::validate(&config, &PluginRegistry::builtin())?;
        tracing::debug!(
            patterns = config.content.len(),
            colors = config.theme.extend.colors.len(),
            plugins = config.plugins.len(),
            "loaded embedded configuration"
        );
        Ok(config)
    }

    /// Load and validate a configuration file
    pub fn load_file(path: &Path) -> ConfigResult<Config> {
        Self::load_file_with_registry(path, &PluginRegistry::builtin())
    }

    /// Load and validate a configuration file against a specific registry
    pub fn load_file_with_registry(
        path: &Path,
        registry: &PluginRegistry,
    ) -> ConfigResult<Config> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let config: Config =
            serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        ConfigValidator::validate(&config, registry)?;
        tracing::debug!(path = %path.display(), "loaded configuration file");
        Ok(config)
    }

    /// Resolve which configuration to load for the CLI
    ///
    /// An explicit path wins; otherwise the search order is `./windcfg.yaml`,
    /// the user config file, then the embedded definition.
    pub fn load_resolved(file: Option<&Path>) -> ConfigResult<Config> {
        match Self::resolve_path(file) {
            Some(path) => Self::load_file(&path),
            None => Self::load(),
        }
    }

    /// Pick the config file the CLI should read, if any exists
    pub fn resolve_path(file: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = file {
            return Some(path.to_path_buf());
        }

        let local = PathBuf::from("windcfg.yaml");
        if local.exists() {
            return Some(local);
        }

        let user = paths::user_config_path();
        if user.exists() {
            return Some(user);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_embedded() {
        let config = ConfigLoader::load().unwrap();
        assert_eq!(config.color("background"), Some("#000000"));
        assert_eq!(
            config.plugins,
            vec!["typography", "forms", "container-queries"]
        );
    }

    #[test]
    fn test_load_is_idempotent() {
        let first = ConfigLoader::load().unwrap();
        let second = ConfigLoader::load().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r##"
content:
  - "./app/**/*.html"
theme:
  extend:
    colors:
      accent: "#324A5F"
plugins:
  - forms
"##
        )
        .unwrap();

        let config = ConfigLoader::load_file(file.path()).unwrap();
        assert_eq!(config.content, vec!["./app/**/*.html"]);
        assert_eq!(config.color("accent"), Some("#324A5F"));
    }

    #[test]
    fn test_load_file_missing() {
        let result = ConfigLoader::load_file(Path::new("/nonexistent/windcfg.yaml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_load_file_invalid_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "content: [unbalanced").unwrap();

        let result = ConfigLoader::load_file(file.path());
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_load_file_unknown_plugin() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "plugins: [unknownPlugin]").unwrap();

        let result = ConfigLoader::load_file(file.path());
        match result {
            Err(ConfigError::UnresolvedPlugin(name)) => assert_eq!(name, "unknownPlugin"),
            other => panic!("expected UnresolvedPlugin, got {:?}", other),
        }
    }

    #[test]
    fn test_load_file_empty_content_list() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "content: []").unwrap();

        let config = ConfigLoader::load_file(file.path()).unwrap();
        assert!(config.content.is_empty());
    }

    #[test]
    fn test_resolve_explicit_path_wins() {
        let path = Path::new("custom.yaml");
        assert_eq!(
            ConfigLoader::resolve_path(Some(path)),
            Some(PathBuf::from("custom.yaml"))
        );
    }
}
