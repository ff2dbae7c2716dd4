use std::num::ParseFloatError;
use std::path::PathBuf;

use thiserror::Error;

/// Failures raised while turning source lines into joined monthly rows.
///
/// Every variant is fatal for the job: there is no per-record skip.
#[derive(Debug, Error)]
pub enum JoinError {
    #[error("missing field `{field}`")]
    MissingField { field: &'static str },

    #[error("expected {expected} fields, found {found}")]
    MalformedLine { expected: usize, found: usize },

    #[error("rainfall value `{value}` is not a number: {source}")]
    InvalidRainfall {
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("case count `{value}` is not a number: {source}")]
    InvalidCaseCount {
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("join key `{key}` does not split into region, year and month")]
    MalformedKey { key: String },

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML config {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid configuration: {message}")]
    Config { message: String },
}

impl JoinError {
    pub fn missing(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, JoinError>;
