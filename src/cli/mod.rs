//! CLI command handling module
//!
//! Handles all CLI subcommands and argument parsing.

mod commands;
mod logging;

pub use commands::{handle_get, handle_plugins, handle_show, handle_validate};
pub use logging::init_logging;
