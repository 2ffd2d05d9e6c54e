//! Widgets and the two strategies that build them.
//!
//! - [`template`] renders `layouts/<layout>.tmpl` with the layout's config section.
//! - [`custom`] loads `layouts/<layout>.html` verbatim and declares its assets.
//!
//! Discovery tries the template builder first and falls back to the custom one.

mod custom;
mod template;

pub use custom::{build_custom_widget, CustomBuild, CustomWidget, LAYOUT_SUFFIX};
pub use template::{build_template_widget, TemplateWidget, ANALYTICS_FLAG};

use std::fmt;
use std::path::Path;

use crate::assets::dir_key;
use crate::context::{Contribution, RenderContext, SharedContext};

/// Directory under a widget holding its layout files.
pub const LAYOUTS_DIR: &str = "layouts";

/// Which builder produced a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    Template,
    Custom,
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidgetKind::Template => f.write_str("template"),
            WidgetKind::Custom => f.write_str("custom"),
        }
    }
}

/// A built widget, ready to be composed into a page.
pub trait Widget: fmt::Debug {
    /// Logical name (the widget directory's base name).
    fn name(&self) -> &str;

    /// Directory the widget was built from.
    fn dir(&self) -> &Path;

    fn kind(&self) -> WidgetKind;

    /// Key under which [`Widget::prepare`] publishes the widget's output.
    fn contribution_key(&self) -> &str;

    /// Data to merge into the render context, or `None` to opt out for this page.
    fn prepare(&self, shared: &SharedContext, top: &RenderContext) -> Option<Contribution>;
}

/// Loaded layout text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocContent {
    /// Raw file contents.
    pub source: String,
    /// Processed form; currently identical to `source`.
    pub processed: String,
    /// Extra payload attached by later enrichment steps.
    pub extras: Option<serde_json::Value>,
}

impl DocContent {
    pub fn raw(source: impl Into<String>) -> Self {
        let source = source.into();
        Self {
            processed: source.clone(),
            source,
            extras: None,
        }
    }
}

/// A widget's logical name: its directory's base name.
pub(crate) fn widget_name(dir: &Path) -> String {
    dir.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir_key(dir))
}
