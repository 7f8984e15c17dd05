//! CLI command handlers

use anyhow::{Context, Result};
use std::path::PathBuf;

use windcfg::config::{get_config_value, ConfigLoader};
use windcfg::plugins::PluginRegistry;

/// Validate a configuration and report the result
///
/// Validates the given file when provided, otherwise whichever config
/// `resolve_path` finds, falling back to the embedded definition.
pub fn handle_validate(file: Option<PathBuf>) -> Result<()> {
    let source = ConfigLoader::resolve_path(file.as_deref());

    match &source {
        Some(path) => {
            ConfigLoader::load_file(path)
                .with_context(|| format!("Configuration is invalid: {}", path.display()))?;
            println!("{}: OK", path.display());
        }
        None => {
            ConfigLoader::load().context("Embedded configuration is invalid")?;
            println!("embedded configuration: OK");
        }
    }
    Ok(())
}

/// Print the resolved configuration as YAML
pub fn handle_show(file: Option<PathBuf>, json: bool) -> Result<()> {
    let config = ConfigLoader::load_resolved(file.as_deref())
        .context("Failed to load configuration")?;

    if json {
        let out = serde_json::to_string_pretty(&config)
            .context("Failed to serialize configuration")?;
        println!("{}", out);
    } else {
        let yaml = serde_yaml::to_string(&config).context("Failed to serialize configuration")?;
        print!("{}", yaml);
    }
    Ok(())
}

/// Print a single configuration value by dot-notation key
pub fn handle_get(key: &str, file: Option<PathBuf>) -> Result<()> {
    let config = ConfigLoader::load_resolved(file.as_deref())
        .context("Failed to load configuration")?;

    let value = get_config_value(&config, key)?;
    println!("{}", value.trim_end());
    Ok(())
}

/// List the known plugin registry
pub fn handle_plugins() -> Result<()> {
    let registry = PluginRegistry::builtin();

    for plugin in registry.all() {
        match &plugin.description {
            Some(desc) => println!("{:<20} {:<40} {}", plugin.name, plugin.package, desc),
            None => println!("{:<20} {}", plugin.name, plugin.package),
        }
    }
    Ok(())
}
