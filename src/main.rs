//! Trellis CLI application entry point
//!
//! Loads a settings manifest and either browses it interactively or prints
//! search results and the node tree for scripting.
//!
//! # Usage
//!
//! ```bash
//! # Browse the bundled demo screen (default command)
//! trellis
//!
//! # Browse your own manifest and print the final values
//! trellis -m device.toml browse --dump
//!
//! # Search and print grouped results
//! trellis search wifi
//! trellis -q s "dark mode"
//! trellis search brightness --json
//!
//! # Show node identities
//! trellis tree
//! ```
//!
//! # Configuration
//!
//! Ranking and UI settings are read from the user's config directory
//! (`~/.config/trellis/config.toml` on Linux), created with defaults on first
//! run. Logging goes to stderr and is controlled with `RUST_LOG`.

use std::path::Path;
use tracing_subscriber::EnvFilter;
use trellis::{
    TrellisError, ViewRegistry,
    cli::{Cli, Commands},
    config::TrellisConfig,
    manifest::{DEMO_MANIFEST, Manifest, SettingsStore},
    output,
    render::SettingsScreen,
    ui::SettingsApp,
};

type Result<T> = std::result::Result<T, TrellisError>;

/// Install the stderr log subscriber
///
/// `RUST_LOG` wins when set; otherwise only warnings are shown, or errors in
/// quiet mode.
fn init_logging(quiet: bool) {
    let default_level = if quiet { "error" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Read the manifest at `path`, or the bundled demo when none is given
///
/// # Errors
///
/// Returns `TrellisError::ManifestError` if the file cannot be read or parsed.
fn load_manifest(path: Option<&Path>) -> Result<Manifest> {
    match path {
        Some(path) => Ok(Manifest::from_path(path)?),
        None => {
            tracing::debug!("using bundled demo manifest");
            Ok(DEMO_MANIFEST.parse::<Manifest>()?)
        }
    }
}

/// Handle the browse command - interactive settings screen
///
/// # Errors
///
/// Returns `TrellisError` if the terminal fails or the values cannot be
/// encoded.
fn handle_browse_command(
    screen: SettingsScreen,
    config: &TrellisConfig,
    store: &SettingsStore,
    dump: bool,
) -> Result<()> {
    let mut app = SettingsApp::new(screen, config.ui_options());
    app.run()?;

    if dump {
        print!("{}", toml::to_string(&store.values())?);
    }
    Ok(())
}

/// Handle the search command - print grouped results
///
/// # Errors
///
/// Returns `TrellisError::InvalidInput` if the query has nothing searchable in
/// it, or `TrellisError::JsonError` if JSON output fails.
fn handle_search_command(
    mut screen: SettingsScreen,
    query: &str,
    json: bool,
    quiet: bool,
) -> Result<()> {
    screen.set_query(query);
    let results = screen
        .results()
        .ok_or_else(|| TrellisError::InvalidInput(format!("Nothing to search for in '{query}'")))?;

    if json {
        println!("{}", serde_json::to_string_pretty(results)?);
        return Ok(());
    }

    if results.is_empty() {
        if !quiet {
            println!("No settings found matching '{query}'");
        }
        return Ok(());
    }

    if !quiet {
        println!("Found {} setting(s) matching '{query}':", results.len());
    }
    for bucket in &results.buckets {
        println!("{}", output::bucket_heading(bucket, screen.title(), quiet));
        for hit in &bucket.hits {
            for line in output::hit_lines(hit, quiet) {
                println!("{line}");
            }
        }
    }
    Ok(())
}

/// Handle the tree command - print every node with its identity
///
/// # Errors
///
/// Returns `TrellisError::JsonError` if JSON output fails.
fn handle_tree_command(screen: &SettingsScreen, json: bool, quiet: bool) -> Result<()> {
    let tree = screen.tree();
    if json {
        println!("{}", serde_json::to_string_pretty(&tree)?);
        return Ok(());
    }

    if !quiet {
        println!("{}", screen.title());
    }
    for line in output::tree_lines(&tree, quiet) {
        println!("{line}");
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(cli.quiet);

    let config = match &cli.config {
        Some(path) => TrellisConfig::load_from(path)?,
        None => TrellisConfig::load()?,
    };

    let manifest = load_manifest(cli.manifest.as_deref())?;
    let mut store = SettingsStore::new();
    let content = manifest.instantiate(&mut store)?;
    tracing::debug!(settings = store.len(), title = %manifest.title, "instantiated manifest");

    let screen = SettingsScreen::new(&manifest.title, content, ViewRegistry::shared())
        .with_options(config.search_options());

    match cli.get_command() {
        Commands::Browse { dump } => handle_browse_command(screen, &config, &store, dump)?,
        Commands::Search { query, json } => handle_search_command(screen, &query, json, cli.quiet)?,
        Commands::Tree { json } => handle_tree_command(&screen, json, cli.quiet)?,
    }

    Ok(())
}
