//! Widget registry: scans the widgets root and builds every widget it finds.
//!
//! For each discovered directory the configuration is parsed, the template
//! builder is tried, and on failure the custom builder takes over. An unreadable
//! or malformed configuration aborts the whole scan; anything else only drops
//! that widget and is reported to the diagnostics sink.

use std::path::Path;

use crate::assets::{push_declarations, AssetDeclaration};
use crate::composition::prepare_widgets;
use crate::config::{load_widget_config, WidgetOptions};
use crate::context::{ContextBuilder, RenderContext, SharedContext};
use crate::diagnostics::{Diagnostic, DiagnosticsSink};
use crate::discovery::discover_widget_dirs;
use crate::error::{Result, WidgetError};
use crate::widgets::{
    build_custom_widget, build_template_widget, widget_name, Widget, WidgetKind,
};

/// A widget built from one directory, with the asset tags it declared.
#[derive(Debug)]
pub struct BuiltWidget {
    pub widget: Box<dyn Widget>,
    pub assets: Vec<AssetDeclaration>,
}

/// Widgets produced by one scan, in discovery order, plus their asset tags.
#[derive(Debug, Default)]
pub struct WidgetRegistry {
    widgets: Vec<Box<dyn Widget>>,
    assets: String,
}

impl WidgetRegistry {
    /// Scan `options.widgets_dir` and build every widget found.
    pub fn load(
        options: &WidgetOptions,
        top: &RenderContext,
        sink: &dyn DiagnosticsSink,
    ) -> Result<Self> {
        let mut registry = Self::default();

        for dir in discover_widget_dirs(&options.widgets_dir, &options.config_filename) {
            if let Some(built) = build_widget(&dir, options, top, sink)? {
                push_declarations(&mut registry.assets, &built.assets);
                registry.widgets.push(built.widget);
            }
        }

        tracing::debug!(
            root = ?options.widgets_dir,
            count = registry.widgets.len(),
            "Widget scan complete"
        );
        Ok(registry)
    }

    pub fn widgets(&self) -> &[Box<dyn Widget>] {
        &self.widgets
    }

    /// Asset tags of every widget, one per line, in discovery order.
    pub fn assets(&self) -> &str {
        &self.assets
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Compose every widget into `shared` and build the render context.
    pub fn prepare<B: ContextBuilder>(
        &self,
        shared: &mut SharedContext,
        top: &RenderContext,
        builder: &B,
    ) -> B::Output {
        prepare_widgets(&self.widgets, shared, top, builder)
    }
}

/// Build the widget in `dir`.
///
/// Returns `Err` only when the configuration cannot be read or parsed. `Ok(None)` means
/// the directory contributes nothing (disabled, no layout, or both builders
/// failed); the reason has been reported to `sink`.
pub fn build_widget(
    dir: &Path,
    options: &WidgetOptions,
    top: &RenderContext,
    sink: &dyn DiagnosticsSink,
) -> Result<Option<BuiltWidget>> {
    let config_path = dir.join(&options.config_filename);
    let config = load_widget_config(&config_path)?;

    if config.is_disabled() {
        sink.report(Diagnostic::Disabled {
            config_path: config_path.clone(),
        });
        if options.skip_disabled {
            return Ok(None);
        }
    }

    sink.report(Diagnostic::Visiting {
        dir: dir.to_path_buf(),
    });

    match build_template_widget(dir, &config, top, options) {
        Ok(widget) => {
            sink.report(Diagnostic::Loaded {
                config_path,
                kind: WidgetKind::Template,
            });
            return Ok(Some(BuiltWidget {
                widget: Box::new(widget),
                assets: Vec::new(),
            }));
        }
        Err(e) => sink.report(Diagnostic::TemplateFallback {
            dir: dir.to_path_buf(),
            reason: e.to_string(),
        }),
    }

    match build_custom_widget(&widget_name(dir), dir, config, &options.asset_prefix) {
        Ok(Some(build)) => {
            sink.report(Diagnostic::Loaded {
                config_path,
                kind: WidgetKind::Custom,
            });
            Ok(Some(BuiltWidget {
                widget: Box::new(build.widget),
                assets: build.assets,
            }))
        }
        Ok(None) => {
            sink.report(Diagnostic::Skipped {
                dir: dir.to_path_buf(),
            });
            Ok(None)
        }
        Err(e) => {
            sink.report(Diagnostic::BuildFailed {
                config_path,
                reason: describe(&e),
            });
            Ok(None)
        }
    }
}

fn describe(error: &WidgetError) -> String {
    match error {
        WidgetError::Io { path, source } => {
            format!("failed to load widget layout {}: {source}", path.display())
        }
        other => other.to_string(),
    }
}
