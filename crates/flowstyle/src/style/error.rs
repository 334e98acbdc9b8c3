//! Errors raised while building, loading, or resolving style tables.

use std::path::PathBuf;

/// Error returned by table construction, stylesheet loading, and strict resolution.
#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    /// Geometry or table contents are not acceptable.
    #[error("invalid style configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// A property value names a style key the table does not declare.
    #[error("property '{property}' names unknown style key '{key}'")]
    UnknownStyleKey { property: String, key: String },

    /// A file extension that maps to no known document format.
    #[error("unsupported file format: {}", path.display())]
    UnsupportedFormat { path: PathBuf },

    /// Reading a stylesheet or dataset from disk failed.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A stylesheet or dataset document could not be parsed.
    #[error("failed to parse document: {reason}")]
    Parse { reason: String },

    /// An edge refers to a node id that is not in the dataset.
    #[error("edge '{edge}' refers to missing node '{endpoint}'")]
    DanglingEdge { edge: String, endpoint: String },

    /// A label template failed to compile or render.
    #[error("label template error: {reason}")]
    Template { reason: String },
}

impl StyleError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        StyleError::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

impl From<serde_yaml::Error> for StyleError {
    fn from(err: serde_yaml::Error) -> Self {
        StyleError::Parse {
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for StyleError {
    fn from(err: serde_json::Error) -> Self {
        StyleError::Parse {
            reason: err.to_string(),
        }
    }
}

impl From<minijinja::Error> for StyleError {
    fn from(err: minijinja::Error) -> Self {
        StyleError::Template {
            reason: err.to_string(),
        }
    }
}
