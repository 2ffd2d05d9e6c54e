//! Widget discovery, build, and composition for static-site page rendering.
//!
//! Widgets are self-contained content blocks living in their own directory under a
//! widgets root (conventionally `widgets/`). Each widget directory carries a
//! `config.yml` and a `layouts/` folder. The pipeline scans the root, builds every
//! widget it finds, and later merges what each widget contributes into the render
//! context consumed by the page template engine.
//!
//! # Modules
//!
//! - [`config`]: `config.yml` parsing, typed accessors, and pipeline options
//! - [`assets`]: script/stylesheet tag generation for custom widgets
//! - [`context`]: contributions, the shared context, and the layered render context
//! - [`diagnostics`]: injectable sink for per-directory pipeline events
//! - [`template_engine`]: Tera-backed rendering of `.tmpl` widget layouts
//! - [`widgets`]: the [`Widget`] trait and both widget builders
//! - [`discovery`]: recursive scan for widget directories
//! - [`registry`]: the scan-and-build pass producing widgets plus asset tags
//! - [`composition`]: merging widget contributions into the render context
//!
//! # Example
//!
//! ```no_run
//! use widgetry_core::{
//!     prepare_widgets, LayeredContextBuilder, RenderContext, SharedContext, TracingSink,
//!     WidgetOptions, WidgetRegistry,
//! };
//!
//! let top = RenderContext::default();
//! let registry = WidgetRegistry::load(&WidgetOptions::default(), &top, &TracingSink)?;
//!
//! let mut shared = SharedContext::new();
//! let render = prepare_widgets(registry.widgets(), &mut shared, &top, &LayeredContextBuilder);
//! println!("{} layers, assets:\n{}", render.layers().len(), registry.assets());
//! # Ok::<(), widgetry_core::WidgetError>(())
//! ```

pub mod assets;
pub mod composition;
pub mod config;
pub mod context;
pub mod diagnostics;
pub mod discovery;
pub mod error;
pub mod registry;
pub mod template_engine;
pub mod widgets;

pub use assets::{AssetDeclaration, AssetKind};
pub use composition::prepare_widgets;
pub use config::{load_widget_config, LayoutSetting, WidgetConfig, WidgetOptions};
pub use context::{
    ContextBuilder, Contribution, LayeredContextBuilder, RenderContext, SharedContext,
};
pub use diagnostics::{Diagnostic, DiagnosticsSink, RecordingSink, TracingSink};
pub use discovery::discover_widget_dirs;
pub use error::{Result, WidgetError};
pub use registry::{build_widget, BuiltWidget, WidgetRegistry};
pub use widgets::{
    build_custom_widget, build_template_widget, CustomBuild, CustomWidget, DocContent,
    TemplateWidget, Widget, WidgetKind,
};
