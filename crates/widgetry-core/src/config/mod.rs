//! Per-widget configuration (`config.yml`) and pipeline options.
//!
//! A widget's configuration is a YAML mapping. The keys the pipeline understands
//! are typed fields on [`WidgetConfig`]; everything else (most importantly the
//! data section named after the layout) is kept as a raw YAML mapping. Accessors
//! never fail: a key of the wrong shape reads as absent.
//!
//! ```yaml
//! layout: google
//! google:
//!   tracking_id: UA-0000-1
//! javascripts: [share.js]
//! stylesheets: [share.css]
//! ```

mod options;

pub use options::WidgetOptions;

use std::path::Path;

use serde::{Deserialize, Deserializer};
use serde_yaml::{Mapping, Value};

use crate::assets::AssetKind;
use crate::error::{Result, WidgetError};

/// Default name of the configuration file marking a widget directory.
pub const CONFIG_FILENAME: &str = "config.yml";

/// The value found under the `layout` key.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LayoutSetting {
    /// A layout name, e.g. `layout: google`.
    Name(String),
    /// An on/off toggle, e.g. `layout: false`.
    Toggle(bool),
    /// Any other shape; treated as no layout.
    Other(Value),
}

/// Parsed `config.yml` of one widget directory.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WidgetConfig {
    #[serde(default)]
    layout: Option<LayoutSetting>,

    #[serde(default, deserialize_with = "lenient_strings")]
    javascripts: Vec<String>,

    #[serde(default, deserialize_with = "lenient_strings")]
    stylesheets: Vec<String>,

    /// Layout data sections and any other keys.
    #[serde(flatten)]
    sections: Mapping,
}

impl WidgetConfig {
    /// The configured layout name, if `layout` is a non-empty string.
    pub fn layout(&self) -> Option<&str> {
        match &self.layout {
            Some(LayoutSetting::Name(name)) if !name.is_empty() => Some(name.as_str()),
            _ => None,
        }
    }

    /// The raw `layout` setting.
    pub fn layout_setting(&self) -> Option<&LayoutSetting> {
        self.layout.as_ref()
    }

    /// Ordered strings under `key`; empty when absent or not a sequence.
    /// Non-string elements are dropped.
    pub fn get_strings(&self, key: &str) -> Vec<String> {
        match key {
            "javascripts" => self.javascripts.clone(),
            "stylesheets" => self.stylesheets.clone(),
            other => self.sections.get(other).map(strings_from).unwrap_or_default(),
        }
    }

    /// Asset file names declared for `kind`, in configuration order.
    pub fn assets(&self, kind: AssetKind) -> &[String] {
        match kind {
            AssetKind::Javascript => &self.javascripts,
            AssetKind::Stylesheet => &self.stylesheets,
        }
    }

    /// The mapping stored under `name`, if there is one.
    pub fn section(&self, name: &str) -> Option<&Mapping> {
        self.sections.get(name).and_then(Value::as_mapping)
    }

    /// The data section selected by the layout name.
    pub fn layout_section(&self) -> Option<&Mapping> {
        self.layout().and_then(|layout| self.section(layout))
    }

    /// True for `layout: false` or an `enabled: false` inside the layout section.
    pub fn is_disabled(&self) -> bool {
        if matches!(self.layout, Some(LayoutSetting::Toggle(false))) {
            return true;
        }
        self.layout_section()
            .and_then(|section| section.get("enabled"))
            .and_then(Value::as_bool)
            == Some(false)
    }
}

/// Load and parse the configuration file at `path`.
///
/// An empty (or comment-only) file yields the default configuration.
pub fn load_widget_config(path: &Path) -> Result<WidgetConfig> {
    let contents = std::fs::read_to_string(path).map_err(|e| WidgetError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_widget_config(&contents).map_err(|e| WidgetError::Config {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Parse a widget configuration from a YAML string.
pub fn parse_widget_config(yaml: &str) -> std::result::Result<WidgetConfig, serde_yaml::Error> {
    let value: Value = serde_yaml::from_str(yaml)?;
    if value.is_null() {
        return Ok(WidgetConfig::default());
    }
    serde_yaml::from_value(value)
}

fn lenient_strings<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(strings_from).unwrap_or_default())
}

fn strings_from(value: &Value) -> Vec<String> {
    value
        .as_sequence()
        .map(|seq| {
            seq.iter()
                .filter_map(|item| item.as_str().map(str::to_owned))
                .collect()
        })
        .unwrap_or_default()
}
