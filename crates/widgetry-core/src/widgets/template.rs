//! Template-driven widgets: `layouts/<layout>.tmpl` rendered through Tera.

use std::path::{Path, PathBuf};

use super::{widget_name, Widget, WidgetKind, LAYOUTS_DIR};
use crate::assets::dir_key;
use crate::config::{WidgetConfig, WidgetOptions};
use crate::context::{Contribution, RenderContext, SharedContext};
use crate::error::{Result, WidgetError};
use crate::template_engine::{WidgetTemplate, TEMPLATE_SUFFIX};

/// Shared-context flag that, when explicitly `false`, turns template widgets off.
pub const ANALYTICS_FLAG: &str = "analytics";

/// A widget whose output was rendered once at build time.
///
/// Its contribution is keyed by the widget's directory (e.g. `widgets/analytics`),
/// which is how page templates reference it.
#[derive(Debug, Clone)]
pub struct TemplateWidget {
    name: String,
    dir: PathBuf,
    key: String,
    rendered: String,
}

impl TemplateWidget {
    /// Contribution key: the widget directory path.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn rendered(&self) -> &str {
        &self.rendered
    }
}

impl Widget for TemplateWidget {
    fn name(&self) -> &str {
        &self.name
    }

    fn dir(&self) -> &Path {
        &self.dir
    }

    fn kind(&self) -> WidgetKind {
        WidgetKind::Template
    }

    fn contribution_key(&self) -> &str {
        &self.key
    }

    fn prepare(&self, shared: &SharedContext, _top: &RenderContext) -> Option<Contribution> {
        if shared.flag(ANALYTICS_FLAG) == Some(false) {
            return None;
        }
        Some(Contribution::single(self.key.clone(), self.rendered.clone()))
    }
}

/// Build a widget by rendering `<dir>/layouts/<layout>.tmpl` with the
/// configuration section named after the layout.
///
/// `top` is the site-level context; it is carried for symmetry with composition
/// and not used for rendering.
pub fn build_template_widget(
    dir: &Path,
    config: &WidgetConfig,
    _top: &RenderContext,
    options: &WidgetOptions,
) -> Result<TemplateWidget> {
    let layout = config.layout().ok_or_else(|| WidgetError::MissingLayout {
        dir: dir.to_path_buf(),
    })?;
    let section = config
        .section(layout)
        .ok_or_else(|| WidgetError::MissingSection {
            dir: dir.to_path_buf(),
            layout: layout.to_string(),
        })?;

    tracing::debug!(?dir, layout, "Building template widget");

    let template_path = dir
        .join(LAYOUTS_DIR)
        .join(format!("{layout}{TEMPLATE_SUFFIX}"));
    let template = WidgetTemplate::load(&template_path, &options.asset_prefix, dir)?;
    let rendered = template.render(section)?;

    Ok(TemplateWidget {
        name: widget_name(dir),
        dir: dir.to_path_buf(),
        key: dir_key(dir),
        rendered,
    })
}
