//! Custom widgets: raw `layouts/<layout>.html` content plus declared assets.

use std::path::{Path, PathBuf};

use super::{DocContent, Widget, WidgetKind, LAYOUTS_DIR};
use crate::assets::{asset_declarations, AssetDeclaration};
use crate::config::WidgetConfig;
use crate::context::{Contribution, RenderContext, SharedContext};
use crate::error::{Result, WidgetError};

/// File suffix of raw custom layouts.
pub const LAYOUT_SUFFIX: &str = ".html";

/// A widget contributing its raw layout text under its name.
#[derive(Debug, Clone)]
pub struct CustomWidget {
    name: String,
    dir: PathBuf,
    layout: DocContent,
    config: WidgetConfig,
}

impl CustomWidget {
    pub fn layout(&self) -> &DocContent {
        &self.layout
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }
}

impl Widget for CustomWidget {
    fn name(&self) -> &str {
        &self.name
    }

    fn dir(&self) -> &Path {
        &self.dir
    }

    fn kind(&self) -> WidgetKind {
        WidgetKind::Custom
    }

    fn contribution_key(&self) -> &str {
        &self.name
    }

    fn prepare(&self, _shared: &SharedContext, _top: &RenderContext) -> Option<Contribution> {
        Some(Contribution::single(
            self.name.clone(),
            self.layout.source.clone(),
        ))
    }
}

/// A custom widget together with the asset tags it needs.
#[derive(Debug, Clone)]
pub struct CustomBuild {
    pub widget: CustomWidget,
    pub assets: Vec<AssetDeclaration>,
}

/// Build a custom widget from `<dir>/layouts/<layout>.html`.
///
/// Returns `Ok(None)` when no layout is configured: the widget is intentionally
/// left out. A configured layout that cannot be read is an error.
pub fn build_custom_widget(
    name: &str,
    dir: &Path,
    config: WidgetConfig,
    asset_prefix: &str,
) -> Result<Option<CustomBuild>> {
    let Some(layout) = config.layout() else {
        return Ok(None);
    };

    let layout_path = dir
        .join(LAYOUTS_DIR)
        .join(format!("{layout}{LAYOUT_SUFFIX}"));
    let source =
        std::fs::read_to_string(&layout_path).map_err(|e| WidgetError::io(&layout_path, e))?;

    let assets = asset_declarations(asset_prefix, dir, &config);

    Ok(Some(CustomBuild {
        widget: CustomWidget {
            name: name.to_string(),
            dir: dir.to_path_buf(),
            layout: DocContent::raw(source),
            config,
        },
        assets,
    }))
}
