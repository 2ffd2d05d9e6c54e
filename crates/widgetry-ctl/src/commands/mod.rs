//! Command handlers for the widgetry CLI.

pub(crate) mod render;
pub(crate) mod widget;

use anyhow::Context as _;
use widgetry_core::{RenderContext, TracingSink, WidgetOptions, WidgetRegistry};

use crate::cli_config::CliConfig;
use crate::{Cli, Commands};

pub(crate) fn dispatch(cli: Cli, cli_config: &CliConfig) -> anyhow::Result<()> {
    let options = cli_config.widget_options(cli.widgets_dir.as_deref());

    match cli.command {
        Commands::List => widget::list_widgets(&options),
        Commands::Validate { dir } => widget::validate_widget(&dir, &options),
        Commands::Assets => render::print_assets(&options),
        Commands::Render { set, page } => {
            render::render_page(&options, cli_config, &set, page.as_deref())
        }
    }
}

/// Scan the widgets root, logging per-directory diagnostics through `tracing`.
fn load_registry(options: &WidgetOptions) -> anyhow::Result<WidgetRegistry> {
    WidgetRegistry::load(options, &RenderContext::default(), &TracingSink)
        .with_context(|| format!("failed to scan {}", options.widgets_dir.display()))
}
