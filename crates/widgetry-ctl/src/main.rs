//! Widgetry CLI
//!
//! Command-line surface over `widgetry-core`: scan a widgets tree, print the
//! asset tags it declares, compose the render context for a page and validate a
//! single widget directory.

mod cli_config;
mod commands;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "widgetry-ctl",
    version,
    about = "Discover, validate and compose site widgets",
    styles = output::clap_styles()
)]
pub(crate) struct Cli {
    /// Root directory scanned for widgets (overrides `widgets-dir` in .widgetry.toml).
    #[arg(long, global = true, env = "WIDGETRY_WIDGETS_DIR")]
    pub widgets_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// List every widget found under the widgets root.
    List,

    /// Print the script and stylesheet tags declared by custom widgets.
    Assets,

    /// Compose all widgets and print the shared context, or render a page.
    Render {
        /// Seed the shared context (repeatable, e.g. --set analytics=false).
        #[arg(long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,

        /// Page template rendered with the composed context.
        #[arg(long, value_name = "FILE")]
        page: Option<PathBuf>,
    },

    /// Build one widget directory and report the outcome.
    Validate {
        /// Widget directory containing the configuration file.
        dir: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("widgetry_ctl=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cli_config = cli_config::load_cli_config();

    if let Err(e) = commands::dispatch(cli, &cli_config) {
        output::error(format!("{e:#}"));
        std::process::exit(1);
    }

    Ok(())
}
