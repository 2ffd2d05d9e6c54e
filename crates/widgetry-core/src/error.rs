//! Error types for the widget pipeline.

use std::path::PathBuf;

use crate::template_engine::EngineError;

/// Errors produced while loading configuration or building a widget.
///
/// [`WidgetError::ConfigRead`] and [`WidgetError::Config`] abort a scan; every
/// other variant is local to one widget directory and degrades to "this widget
/// contributes nothing".
#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read widget configuration {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Config {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("widget at {} has no layout", dir.display())]
    MissingLayout { dir: PathBuf },

    #[error("widget at {} needs configuration under '{layout}'", dir.display())]
    MissingSection { dir: PathBuf, layout: String },

    #[error(transparent)]
    Template(#[from] EngineError),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, WidgetError>;

impl WidgetError {
    /// Wrap a `std::io::Error` with the path that produced it.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error must halt the whole scan.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::ConfigRead { .. } | Self::Config { .. })
    }
}
