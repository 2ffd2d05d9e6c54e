//! Runtime template engine for widget layouts.
//!
//! Uses Tera to render `layouts/<layout>.tmpl` files with the widget's layout
//! section as data. Each template gets its own Tera instance with the widget's
//! filters (`snake_case`, `kebab_case`, `asset_url`) registered.

mod engine;
mod filters;

pub use engine::{EngineError, WidgetTemplate, TEMPLATE_SUFFIX};
