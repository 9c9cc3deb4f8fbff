// File: crates/figure-core/src/error.rs
// Summary: Error kinds surfaced by validation and rendering.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    /// Axis range or scale cannot hold the data (e.g. a zero under a log scale).
    #[error("invalid axis: {0}")]
    InvalidAxis(String),

    /// The request is malformed: unknown names, missing labels, ragged series.
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Skia could not allocate a surface or encode the page.
    #[error("render backend failure: {0}")]
    Backend(String),
}

impl RenderError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn axis(msg: impl Into<String>) -> Self {
        Self::InvalidAxis(msg.into())
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    pub fn is_invalid_axis(&self) -> bool {
        matches!(self, Self::InvalidAxis(_))
    }

    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

pub type Result<T, E = RenderError> = std::result::Result<T, E>;
