//! windcfg - A validating loader for utility-class CSS build configuration
//!
//! Validates the styling configuration the CSS generation engine consumes at
//! build time: content scan globs, theme color tokens, and active plugins.

mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// windcfg - A validating loader for utility-class CSS build configuration
#[derive(Parser, Debug)]
#[command(name = "windcfg")]
#[command(about = "Validate and inspect utility-class CSS build configuration", long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(long, short = 'd')]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

/// Main commands
#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a configuration file (or the embedded definition)
    Validate {
        /// Path to a configuration file
        file: Option<PathBuf>,
    },
    /// Print the resolved configuration
    Show {
        /// Path to a configuration file
        file: Option<PathBuf>,
        /// Print as JSON instead of YAML
        #[arg(long)]
        json: bool,
    },
    /// Get a configuration value by key (e.g. "theme.extend.colors.primary")
    Get {
        /// Configuration key (dot notation)
        key: String,
        /// Path to a configuration file
        file: Option<PathBuf>,
    },
    /// List known plugins
    Plugins,
}

fn main() -> Result<()> {
    let args = Args::parse();

    cli::init_logging(args.debug);

    match args.command {
        Command::Validate { file } => cli::handle_validate(file),
        Command::Show { file, json } => cli::handle_show(file, json),
        Command::Get { key, file } => cli::handle_get(&key, file),
        Command::Plugins => cli::handle_plugins(),
    }
}
