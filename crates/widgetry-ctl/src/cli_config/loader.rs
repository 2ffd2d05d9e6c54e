//! Config file discovery and loading for `.widgetry.toml`.
//!
//! Checks two locations in precedence order:
//! 1. `./.widgetry.toml` (project-local)
//! 2. `~/.config/widgetry.toml` (user-global)

use std::path::{Path, PathBuf};

use super::CliConfig;

const CONFIG_FILENAME: &str = ".widgetry.toml";
const GLOBAL_CONFIG_DIR: &str = ".config";
const GLOBAL_CONFIG_FILENAME: &str = "widgetry.toml";

/// Load CLI config from the first discovered location, or return defaults.
pub(crate) fn load_cli_config() -> CliConfig {
    match find_config_file() {
        Some(path) => load_from(&path),
        None => CliConfig::default(),
    }
}

fn load_from(path: &Path) -> CliConfig {
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::debug!(?path, "Loaded CLI config");
                config
            }
            Err(e) => {
                tracing::warn!(?path, error = %e, "Failed to parse CLI config, using defaults");
                CliConfig::default()
            }
        },
        Err(e) => {
            tracing::warn!(?path, error = %e, "Failed to read CLI config, using defaults");
            CliConfig::default()
        }
    }
}

fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILENAME);
    if local.is_file() {
        return Some(local);
    }

    let global = home_dir()?
        .join(GLOBAL_CONFIG_DIR)
        .join(GLOBAL_CONFIG_FILENAME);
    global.is_file().then_some(global)
}

/// Resolve a leading `~/` to the home directory.
pub(crate) fn expand_path(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_expand_path_tilde() {
        let expanded = expand_path("~/site/widgets");
        assert!(expanded.to_str().unwrap().contains("site/widgets"));
        assert!(!expanded.to_str().unwrap().starts_with('~'));
    }

    #[test]
    fn test_expand_path_relative() {
        assert_eq!(expand_path("./widgets"), PathBuf::from("./widgets"));
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.widgets.widgets_dir, PathBuf::from("widgets"));
        assert_eq!(config.widgets.asset_prefix, "/assets");
        assert!(config.widgets.skip_disabled);
        assert!(config.page_template.is_none());
        assert!(config.shared.is_empty());
    }

    #[test]
    fn test_parse_config_toml() {
        let toml_str = r#"
widgets-dir = "site/widgets"
asset-prefix = "/static"
skip-disabled = false
page-template = "site/page.tmpl"

[shared]
analytics = false
title = "Home"
"#;
        let config: CliConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.widgets.widgets_dir, PathBuf::from("site/widgets"));
        assert_eq!(config.widgets.config_filename, "config.yml");
        assert_eq!(config.widgets.asset_prefix, "/static");
        assert!(!config.widgets.skip_disabled);
        assert_eq!(config.page_template.as_deref(), Some("site/page.tmpl"));

        let shared = config.shared_context().unwrap();
        assert_eq!(shared.flag("analytics"), Some(false));
        assert_eq!(shared.get("title"), Some(&json!("Home")));
    }

    #[test]
    fn test_unparsable_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "widgets-dir = [").unwrap();

        let config = load_from(&path);
        assert_eq!(config.widgets.widgets_dir, PathBuf::from("widgets"));
    }

    #[test]
    fn test_flag_overrides_file() {
        let config: CliConfig = toml::from_str("widgets-dir = \"from-file\"").unwrap();
        let options = config.widget_options(Some(Path::new("from-flag")));
        assert_eq!(options.widgets_dir, PathBuf::from("from-flag"));

        let options = config.widget_options(None);
        assert_eq!(options.widgets_dir, PathBuf::from("from-file"));
    }
}
