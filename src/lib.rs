//! windcfg library
//!
//! A validating loader for the build-time configuration of a utility-class
//! CSS generation engine. The configuration describes which source files to
//! scan for class usage, which color tokens extend the base theme, and which
//! plugins the engine should activate. Loading is pure, fail-fast, and the
//! resulting `Config` is immutable and safe to share across build workers.

pub mod config;
pub mod plugins;

// Re-export commonly used types for convenience
pub use config::{Config, ConfigError, ConfigLoader, ConfigValidator};
pub use plugins::{PluginManifest, PluginRegistry};
