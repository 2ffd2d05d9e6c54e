//! CLI configuration: where the widgets live and what each page starts with.
//!
//! The widget pipeline options are flattened into the top level so a
//! `.widgetry.toml` reads as one flat table:
//!
//! ```toml
//! widgets-dir = "site/widgets"
//! asset-prefix = "/static"
//! page-template = "site/page.tmpl"
//!
//! [shared]
//! analytics = false
//! ```

pub(crate) mod loader;

pub(crate) use loader::{expand_path, load_cli_config};

use serde::Deserialize;
use widgetry_core::{SharedContext, WidgetOptions};

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub(crate) struct CliConfig {
    #[serde(flatten)]
    pub widgets: WidgetOptions,

    /// Page template used by `render` when `--page` is not given.
    pub page_template: Option<String>,

    /// Initial shared-context values for every render.
    #[serde(default)]
    pub shared: toml::Table,
}

impl CliConfig {
    /// Pipeline options with `~` expanded and the command-line override applied.
    pub(crate) fn widget_options(&self, widgets_dir: Option<&std::path::Path>) -> WidgetOptions {
        let mut options = self.widgets.clone();
        options.widgets_dir = match widgets_dir {
            Some(dir) => dir.to_path_buf(),
            None => expand_path(&options.widgets_dir.to_string_lossy()),
        };
        options
    }

    /// The `[shared]` table as a fresh shared context.
    pub(crate) fn shared_context(&self) -> anyhow::Result<SharedContext> {
        match serde_json::to_value(&self.shared)? {
            serde_json::Value::Object(map) => Ok(SharedContext::from(map)),
            _ => Ok(SharedContext::new()),
        }
    }
}
