//! Widget listing and validation commands.

use std::path::Path;

use widgetry_core::{build_widget, RecordingSink, RenderContext, WidgetOptions};

use super::load_registry;
use crate::output;

pub(crate) fn list_widgets(options: &WidgetOptions) -> anyhow::Result<()> {
    let registry = load_registry(options)?;

    if registry.is_empty() {
        output::warning(format!(
            "No widgets found under {}.",
            options.widgets_dir.display()
        ));
        output::warning(format!(
            "A widget is a directory containing {} and a layouts/ folder.",
            options.config_filename
        ));
        return Ok(());
    }

    output::header("Discovered widgets:");
    output::blank();
    for widget in registry.widgets() {
        output::success(format!("{} [{}]", widget.name(), widget.kind()));
        output::label("Key", widget.contribution_key());
        output::label("Path", widget.dir().display());
    }
    output::blank();
    output::plain(format!("{} widget(s)", registry.len()));

    Ok(())
}

/// Build a single widget directory, disabled or not, and report how it went.
pub(crate) fn validate_widget(dir: &Path, options: &WidgetOptions) -> anyhow::Result<()> {
    if !dir.is_dir() {
        anyhow::bail!("'{}' is not a directory", dir.display());
    }

    let options = WidgetOptions {
        skip_disabled: false,
        ..options.clone()
    };
    let sink = RecordingSink::new();
    let built = build_widget(dir, &options, &RenderContext::default(), &sink)?;

    if let Some(built) = &built {
        output::success(format!("Widget loaded: {}", built.widget.name()));
        output::label("Builder", built.widget.kind());
        output::label("Key", built.widget.contribution_key());
        output::label("Assets", built.assets.len());
        for asset in &built.assets {
            output::dim(format!("    {asset}"));
        }
    }

    let diagnostics = sink.diagnostics();
    if !diagnostics.is_empty() {
        output::blank();
        output::header("Diagnostics:");
        for diagnostic in &diagnostics {
            output::item(diagnostic);
        }
    }

    if built.is_none() {
        anyhow::bail!("no widget could be built from {}", dir.display());
    }

    output::blank();
    output::success("Validation passed.");
    Ok(())
}
