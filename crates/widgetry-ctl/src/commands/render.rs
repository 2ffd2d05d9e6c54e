//! Asset listing and page composition commands.

use std::path::Path;

use anyhow::Context as _;
use serde_json::Value;
use tera::Tera;
use widgetry_core::{LayeredContextBuilder, RenderContext, SharedContext, WidgetOptions};

use super::load_registry;
use crate::cli_config::{expand_path, CliConfig};
use crate::output;

pub(crate) fn print_assets(options: &WidgetOptions) -> anyhow::Result<()> {
    let registry = load_registry(options)?;

    if registry.assets().is_empty() {
        tracing::info!(root = ?options.widgets_dir, "No widget assets declared");
        return Ok(());
    }
    output::raw(registry.assets());
    Ok(())
}

/// Compose every widget, then print the shared context as JSON or render a page.
pub(crate) fn render_page(
    options: &WidgetOptions,
    cli_config: &CliConfig,
    sets: &[String],
    page: Option<&Path>,
) -> anyhow::Result<()> {
    let registry = load_registry(options)?;

    let mut shared = cli_config.shared_context()?;
    for (key, value) in parse_sets(sets)? {
        shared.insert(key, value);
    }

    let top = RenderContext::from_value(Value::Object(shared.as_map().clone()));
    let context = registry.prepare(&mut shared, &top, &LayeredContextBuilder);
    tracing::debug!(layers = context.layers().len(), "Composed render context");

    let page = page
        .map(Path::to_path_buf)
        .or_else(|| cli_config.page_template.as_deref().map(expand_path));

    match page {
        Some(page) => {
            let html = render_with_page(&page, &shared, &context, registry.assets())?;
            output::raw(&html);
        }
        None => output::plain(serde_json::to_string_pretty(shared.as_map())?),
    }
    Ok(())
}

/// Render `page` with the shared context, the widget contributions, a `widgets`
/// map of every contribution (for keys like `widgets/analytics`) and `assets`.
fn render_with_page(
    page: &Path,
    shared: &SharedContext,
    context: &RenderContext,
    assets: &str,
) -> anyhow::Result<String> {
    let name = page
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "page".to_string());

    let mut tera = Tera::default();
    // Widget output is already HTML.
    tera.autoescape_on(Vec::new());
    tera.add_template_file(page, Some(&name))
        .with_context(|| format!("failed to load page template {}", page.display()))?;

    let mut tera_context = tera::Context::from_value(Value::Object(shared.as_map().clone()))?;
    tera_context.extend(context.to_tera_context());
    tera_context.insert("widgets", &context.flatten());
    tera_context.insert("assets", assets);

    tera.render(&name, &tera_context)
        .with_context(|| format!("failed to render page template {}", page.display()))
}

/// Parse `key=value` pairs; values that parse as JSON keep their type.
fn parse_sets(sets: &[String]) -> anyhow::Result<Vec<(String, Value)>> {
    sets.iter()
        .map(|set| {
            let (key, value) = set
                .split_once('=')
                .with_context(|| format!("invalid --set '{set}'. Expected key=value"))?;
            let value = serde_json::from_str(value).unwrap_or_else(|_| Value::from(value));
            Ok((key.to_string(), value))
        })
        .collect()
}
