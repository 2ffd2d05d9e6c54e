//! Options controlling a scan-and-build pass.

use std::path::PathBuf;

use serde::Deserialize;

use super::CONFIG_FILENAME;

fn default_widgets_dir() -> PathBuf {
    PathBuf::from("widgets")
}

fn default_config_filename() -> String {
    CONFIG_FILENAME.to_string()
}

fn default_asset_prefix() -> String {
    "/assets".to_string()
}

fn default_true() -> bool {
    true
}

/// Where to look for widgets and how to treat what is found.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WidgetOptions {
    /// Root directory scanned for widget directories. Default: `widgets`.
    #[serde(default = "default_widgets_dir")]
    pub widgets_dir: PathBuf,

    /// File name marking a widget directory. Default: `config.yml`.
    #[serde(default = "default_config_filename")]
    pub config_filename: String,

    /// URL prefix under which widget assets are served. Default: `/assets`.
    #[serde(default = "default_asset_prefix")]
    pub asset_prefix: String,

    /// Skip building widgets whose configuration disables them. Default: true.
    #[serde(default = "default_true")]
    pub skip_disabled: bool,
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self {
            widgets_dir: default_widgets_dir(),
            config_filename: default_config_filename(),
            asset_prefix: default_asset_prefix(),
            skip_disabled: true,
        }
    }
}

impl WidgetOptions {
    /// Defaults with a different widgets root.
    pub fn with_widgets_dir(widgets_dir: impl Into<PathBuf>) -> Self {
        Self {
            widgets_dir: widgets_dir.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = WidgetOptions::default();
        assert_eq!(options.widgets_dir, PathBuf::from("widgets"));
        assert_eq!(options.config_filename, "config.yml");
        assert_eq!(options.asset_prefix, "/assets");
        assert!(options.skip_disabled);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let options: WidgetOptions =
            serde_yaml::from_str("widgets-dir: site/widgets\nskip-disabled: false").unwrap();
        assert_eq!(options.widgets_dir, PathBuf::from("site/widgets"));
        assert!(!options.skip_disabled);
        assert_eq!(options.asset_prefix, "/assets");
    }
}
