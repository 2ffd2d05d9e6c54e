//! Custom Tera filters available to every widget layout.

use std::collections::HashMap;
use std::path::PathBuf;

use heck::{ToKebabCase, ToSnakeCase};
use tera::{Result, Value};

use crate::assets::{self, AssetKind};

pub(crate) fn snake_case(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    let s = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("snake_case filter expects a string"))?;
    Ok(Value::String(s.to_snake_case()))
}

pub(crate) fn kebab_case(value: &Value, _args: &HashMap<String, Value>) -> Result<Value> {
    let s = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("kebab_case filter expects a string"))?;
    Ok(Value::String(s.to_kebab_case()))
}

/// `{{ "share.js" | asset_url }}` → `/assets/<widget-dir>/javascripts/share.js`.
///
/// The kind comes from `kind="stylesheets"` when given, otherwise from the file
/// extension (`.css` is a stylesheet, anything else a script).
pub(crate) fn asset_url(
    prefix: String,
    widget_dir: PathBuf,
) -> impl Fn(&Value, &HashMap<String, Value>) -> Result<Value> + Send + Sync + 'static {
    move |value: &Value, args: &HashMap<String, Value>| {
        let file = value
            .as_str()
            .ok_or_else(|| tera::Error::msg("asset_url filter expects a string"))?;

        let kind = match args.get("kind").and_then(Value::as_str) {
            Some(name) => AssetKind::from_dir_name(name).ok_or_else(|| {
                tera::Error::msg(format!(
                    "asset_url: unknown kind '{name}' (expected javascripts or stylesheets)"
                ))
            })?,
            None if file.ends_with(".css") => AssetKind::Stylesheet,
            None => AssetKind::Javascript,
        };

        Ok(Value::String(assets::asset_url(
            &prefix,
            &widget_dir,
            kind,
            file,
        )))
    }
}
