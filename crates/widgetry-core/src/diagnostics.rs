//! Diagnostics reported while scanning and building widgets.
//!
//! The pipeline never logs directly. It hands a [`Diagnostic`] to the
//! [`DiagnosticsSink`] it was given; [`TracingSink`] forwards to `tracing`, and
//! [`RecordingSink`] keeps everything in memory.

use std::fmt;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::widgets::WidgetKind;

/// One event worth telling the operator about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A widget directory is about to be built.
    Visiting { dir: PathBuf },
    /// The configuration disables this widget.
    Disabled { config_path: PathBuf },
    /// A widget was built and recorded.
    Loaded {
        config_path: PathBuf,
        kind: WidgetKind,
    },
    /// The template builder failed; the custom builder is tried next.
    TemplateFallback { dir: PathBuf, reason: String },
    /// No layout configured for the custom builder; nothing to build.
    Skipped { dir: PathBuf },
    /// Both builders failed; the directory contributes nothing.
    BuildFailed {
        config_path: PathBuf,
        reason: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Visiting { dir } => write!(f, "visiting {}", dir.display()),
            Self::Disabled { config_path } => write!(f, "disabled: {}", config_path.display()),
            Self::Loaded { config_path, kind } => {
                write!(f, "loaded {kind} widget from {}", config_path.display())
            }
            Self::TemplateFallback { dir, reason } => {
                write!(f, "template build failed for {}: {reason}", dir.display())
            }
            Self::Skipped { dir } => write!(f, "skipped widget without layout: {}", dir.display()),
            Self::BuildFailed {
                config_path,
                reason,
            } => write!(f, "no builder for {}: {reason}", config_path.display()),
        }
    }
}

/// Receives pipeline diagnostics.
pub trait DiagnosticsSink {
    fn report(&self, diagnostic: Diagnostic);
}

/// Forwards diagnostics to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticsSink for TracingSink {
    fn report(&self, diagnostic: Diagnostic) {
        match &diagnostic {
            Diagnostic::Visiting { dir } => tracing::debug!(?dir, "Visiting widget directory"),
            Diagnostic::Disabled { config_path } => {
                tracing::info!(?config_path, "Widget disabled")
            }
            Diagnostic::Loaded { config_path, kind } => {
                tracing::info!(?config_path, %kind, "Loaded widget")
            }
            Diagnostic::TemplateFallback { dir, reason } => {
                tracing::debug!(?dir, error = %reason, "Template build failed, trying custom layout")
            }
            Diagnostic::Skipped { dir } => tracing::info!(?dir, "Skipping widget without layout"),
            Diagnostic::BuildFailed {
                config_path,
                reason,
            } => tracing::warn!(?config_path, error = %reason, "No widget builder succeeded"),
        }
    }
}

/// Keeps every diagnostic in memory, in report order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    recorded: Mutex<Vec<Diagnostic>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything reported so far.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.recorded
            .lock()
            .map(|recorded| recorded.clone())
            .unwrap_or_default()
    }
}

impl DiagnosticsSink for RecordingSink {
    fn report(&self, diagnostic: Diagnostic) {
        if let Ok(mut recorded) = self.recorded.lock() {
            recorded.push(diagnostic);
        }
    }
}
