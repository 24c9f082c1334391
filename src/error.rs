use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure to size the requested root path.
///
/// Only the root is ever reported. Entries below it that cannot be read are
/// skipped by the aggregator and never surface here.
#[derive(Debug, Error)]
pub enum AggregationError {
    #[error("{}: no such file or directory", path.display())]
    NotFound { path: PathBuf },

    #[error("{}: permission denied", path.display())]
    AccessDenied { path: PathBuf },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl AggregationError {
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => AggregationError::NotFound { path },
            io::ErrorKind::PermissionDenied => AggregationError::AccessDenied { path },
            _ => AggregationError::Io { path, source: err },
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            AggregationError::NotFound { path }
            | AggregationError::AccessDenied { path }
            | AggregationError::Io { path, .. } => path,
        }
    }
}

/// Application-wide error type for the path-size CLI.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Aggregation(#[from] AggregationError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl AppError {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        AppError::Config(msg.into())
    }
}
