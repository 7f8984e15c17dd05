// Plugin registry for windcfg
//
// Tracks the capability modules the CSS engine knows how to activate, so
// the configuration loader can resolve plugin identifiers at load time.

pub mod manifest;
pub mod registry;

pub use manifest::{builtin_plugins, PluginManifest};
pub use registry::PluginRegistry;
