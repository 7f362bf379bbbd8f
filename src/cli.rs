//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for trellis using the `clap` crate.
//!
//! # Commands
//!
//! - **browse**: Interactive settings screen (default)
//! - **search**: Print grouped search results for a query
//! - **tree**: Print the searchable node tree with identities
//!
//! Every command reads the manifest given with `-m/--manifest`, or the bundled
//! demo manifest when none is given.
//!
//! # Examples
//!
//! ```
//! use clap::Parser;
//! use trellis::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_from(["trellis", "-m", "device.toml", "search", "wifi"]);
//! assert!(matches!(cli.get_command(), Commands::Search { .. }));
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "trellis")]
#[command(about = "Searchable settings screens in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Settings manifest (TOML); the bundled demo when omitted
    #[arg(short = 'm', long = "manifest", value_name = "PATH", global = true)]
    pub manifest: Option<PathBuf>,

    /// Configuration file to use instead of the default location
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive settings screen (default)
    #[command(visible_alias = "b")]
    Browse {
        /// Print the final values as TOML on exit
        #[arg(long = "dump")]
        dump: bool,
    },

    /// Search the settings and print grouped results
    #[command(visible_alias = "s")]
    Search {
        /// Free-text query
        #[arg(value_name = "QUERY")]
        query: String,

        /// Print results as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Print the searchable node tree
    Tree {
        /// Print the tree as JSON
        #[arg(long = "json")]
        json: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Browse if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse { dump: false })
    }
}
