//! Asset declarations: the `<script>`/`<link>` tags a custom widget needs in the page head.
//!
//! Assets are referenced, never copied. A widget at `widgets/share` listing
//! `javascripts: [share.js]` yields a tag pointing at
//! `/assets/widgets/share/javascripts/share.js`; serving that path is the job of
//! whatever static-file server sits in front of the site.

use std::fmt;
use std::path::{Component, Path};

use crate::config::WidgetConfig;

/// Kind of static asset a widget may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Javascript,
    Stylesheet,
}

impl AssetKind {
    /// Declaration order: scripts before stylesheets.
    pub const ALL: [AssetKind; 2] = [AssetKind::Javascript, AssetKind::Stylesheet];

    /// Config key listing this kind of asset, also its subdirectory name.
    pub fn dir_name(self) -> &'static str {
        match self {
            AssetKind::Javascript => "javascripts",
            AssetKind::Stylesheet => "stylesheets",
        }
    }

    /// Parse a config key / directory name back into a kind.
    pub fn from_dir_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.dir_name() == name)
    }
}

/// A pre-formatted HTML tag referencing one widget asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetDeclaration(String);

impl AssetDeclaration {
    /// Build the tag for `url`.
    pub fn new(kind: AssetKind, url: &str) -> Self {
        let tag = match kind {
            AssetKind::Javascript => {
                format!("<script type=\"text/javascript\" src=\"{url}\"></script>")
            }
            AssetKind::Stylesheet => {
                format!("<link href=\"{url}\" type=\"text/css\" rel=\"stylesheet\" media=\"all\">")
            }
        };
        Self(tag)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Render a widget directory the way it appears in asset URLs and contribution keys:
/// `/`-separated, with `.` components dropped.
pub fn dir_key(dir: &Path) -> String {
    let mut key = String::new();
    for component in dir.components() {
        let segment = match component {
            Component::CurDir => continue,
            Component::RootDir => {
                key.push('/');
                continue;
            }
            Component::Prefix(prefix) => prefix.as_os_str().to_string_lossy(),
            Component::ParentDir => "..".into(),
            Component::Normal(name) => name.to_string_lossy(),
        };
        if !key.is_empty() && !key.ends_with('/') {
            key.push('/');
        }
        key.push_str(&segment);
    }
    key
}

/// Public URL of `file` of the given kind belonging to the widget at `dir`.
pub fn asset_url(prefix: &str, dir: &Path, kind: AssetKind, file: &str) -> String {
    let key = dir_key(dir);
    let mut url = prefix.trim_end_matches('/').to_string();
    for segment in [key.trim_start_matches('/'), kind.dir_name(), file] {
        if segment.is_empty() {
            continue;
        }
        url.push('/');
        url.push_str(segment);
    }
    url
}

/// Tags for every asset listed in `config`: scripts first, then stylesheets,
/// each group in configuration order.
pub fn asset_declarations(
    prefix: &str,
    dir: &Path,
    config: &WidgetConfig,
) -> Vec<AssetDeclaration> {
    AssetKind::ALL
        .into_iter()
        .flat_map(|kind| {
            config
                .assets(kind)
                .iter()
                .map(move |file| AssetDeclaration::new(kind, &asset_url(prefix, dir, kind, file)))
        })
        .collect()
}

/// Append declarations to `out`, one per line.
pub fn push_declarations(out: &mut String, declarations: &[AssetDeclaration]) {
    for declaration in declarations {
        out.push_str(declaration.as_str());
        out.push('\n');
    }
}
