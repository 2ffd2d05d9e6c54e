//! Tera-based rendering of a single widget layout.

use std::path::{Path, PathBuf};

use serde_yaml::Mapping;
use tera::{Context, Tera};

use super::filters;

/// File suffix of engine-processed widget layouts.
pub const TEMPLATE_SUFFIX: &str = ".tmpl";

/// One `layouts/<name>.tmpl` file loaded into its own Tera instance.
#[derive(Debug)]
pub struct WidgetTemplate {
    tera: Tera,
    name: String,
}

impl WidgetTemplate {
    /// Load the template at `path`.
    ///
    /// `asset_prefix` and `widget_dir` back the `asset_url` filter.
    pub fn load(path: &Path, asset_prefix: &str, widget_dir: &Path) -> Result<Self, EngineError> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());

        // `.tmpl` is not an autoescape suffix: values land verbatim, and layouts
        // opt in with `| escape` where they emit markup.
        let mut tera = Tera::default();
        tera.add_template_file(path, Some(&name))
            .map_err(|e| EngineError::Load {
                path: path.to_path_buf(),
                source: e,
            })?;

        tera.register_filter("snake_case", filters::snake_case);
        tera.register_filter("kebab_case", filters::kebab_case);
        tera.register_filter(
            "asset_url",
            filters::asset_url(asset_prefix.to_string(), widget_dir.to_path_buf()),
        );

        Ok(Self { tera, name })
    }

    /// Name the template is registered under (its file name).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render with `data` as the top-level context.
    pub fn render(&self, data: &Mapping) -> Result<String, EngineError> {
        let context = Context::from_serialize(data).map_err(|e| self.render_error(e))?;
        self.tera
            .render(&self.name, &context)
            .map_err(|e| self.render_error(e))
    }

    fn render_error(&self, source: tera::Error) -> EngineError {
        EngineError::Render {
            template: self.name.clone(),
            source,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to load template {}: {source}", path.display())]
    Load { path: PathBuf, source: tera::Error },
    #[error("render error for '{template}': {source}")]
    Render {
        template: String,
        source: tera::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn data(yaml: &str) -> Mapping {
        serde_yaml::from_str(yaml).unwrap()
    }

    fn write_template(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("google.tmpl");
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_render_with_section_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_template(
            dir.path(),
            "<script>track('{{ tracking_id }}');</script>",
        );

        let template = WidgetTemplate::load(&path, "/assets", Path::new("widgets/ga")).unwrap();
        assert_eq!(template.name(), "google.tmpl");

        let out = template.render(&data("tracking_id: UA-1-2")).unwrap();
        assert_eq!(out, "<script>track('UA-1-2');</script>");
    }

    #[test]
    fn test_render_inserts_values_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_template(dir.path(), r#"<script>var s = "{{ src }}";</script>"#);

        let template = WidgetTemplate::load(&path, "/assets", Path::new("widgets/ga")).unwrap();
        let out = template
            .render(&data("src: https://www.google-analytics.com/ga.js?a=1&b=2"))
            .unwrap();
        assert_eq!(
            out,
            r#"<script>var s = "https://www.google-analytics.com/ga.js?a=1&b=2";</script>"#
        );
    }

    #[test]
    fn test_render_escape_filter_is_explicit() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_template(dir.path(), "<p>{{ title | escape }}</p>");

        let template = WidgetTemplate::load(&path, "/assets", Path::new("widgets/x")).unwrap();
        let out = template.render(&data("title: '<b>hi</b>'")).unwrap();
        assert_eq!(out, "<p>&lt;b&gt;hi&lt;&#x2F;b&gt;</p>");
    }

    #[test]
    fn test_render_missing_variable_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_template(dir.path(), "{{ tracking_id }}");

        let template = WidgetTemplate::load(&path, "/assets", Path::new("widgets/x")).unwrap();
        let result = template.render(&data("other: 1"));
        assert!(matches!(result, Err(EngineError::Render { .. })));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = WidgetTemplate::load(
            &dir.path().join("nope.tmpl"),
            "/assets",
            Path::new("widgets/x"),
        );
        assert!(matches!(result, Err(EngineError::Load { .. })));
    }

    #[test]
    fn test_load_malformed_template_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_template(dir.path(), "{% if %}");
        let result = WidgetTemplate::load(&path, "/assets", Path::new("widgets/x"));
        assert!(matches!(result, Err(EngineError::Load { .. })));
    }

    #[test]
    fn test_filters_registered() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_template(
            dir.path(),
            r#"<div id="{{ name | kebab_case }}"><script src="{{ "share.js" | asset_url }}"></script></div>"#,
        );

        let template =
            WidgetTemplate::load(&path, "/assets", Path::new("widgets/share")).unwrap();
        let out = template.render(&data("name: ShareButtons")).unwrap();
        assert!(out.contains(r#"id="share-buttons""#));
        assert!(out.contains(r#"src="/assets/widgets/share/javascripts/share.js""#));
    }
}
