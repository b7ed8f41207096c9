//! Error types for the CLI runtime.

use std::io;
use std::sync::Arc;

use burnish::RewriteError;
use camino::Utf8PathBuf;
use thiserror::Error;

use crate::telemetry::TelemetryError;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("failed to load configuration: {0}")]
    LoadConfiguration(Arc<ortho_config::OrthoError>),
    #[error("{0}")]
    CliUsage(clap::Error),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error("invalid rule configuration: {0}")]
    Rules(RewriteError),
    #[error("path does not exist: {path}")]
    MissingPath { path: Utf8PathBuf },
    #[error("path is not valid UTF-8: {path}")]
    NonUtf8Path { path: String },
    #[error("failed to walk {path}: {source}")]
    Walk {
        path: Utf8PathBuf,
        source: Arc<walkdir::Error>,
    },
    #[error("failed to read {path}: {source}")]
    Read {
        path: Utf8PathBuf,
        source: Arc<io::Error>,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: Utf8PathBuf,
        source: Arc<io::Error>,
    },
    #[error("failed to rewrite {path}: {source}")]
    Rewrite {
        path: Utf8PathBuf,
        source: RewriteError,
    },
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl AppError {
    pub(crate) fn read(path: &camino::Utf8Path, source: io::Error) -> Self {
        Self::Read {
            path: path.to_path_buf(),
            source: Arc::new(source),
        }
    }

    pub(crate) fn write(path: &camino::Utf8Path, source: io::Error) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            source: Arc::new(source),
        }
    }
}
