//! Error types emitted by the bookbench CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use bookbench_core::{AppId, ValidationError};
use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors emitted by the bookbench CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Option name.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A dataset file does not exist.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option naming the file.
        field: &'static str,
        /// Resolved path.
        path: Utf8PathBuf,
    },
    /// A dataset path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option naming the file.
        field: &'static str,
        /// Resolved path.
        path: Utf8PathBuf,
    },
    /// A dataset path could not be inspected.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option naming the file.
        field: &'static str,
        /// Resolved path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Opening a dataset file failed.
    #[error("failed to open {path:?}: {source}")]
    OpenDataset {
        /// File being opened.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// A dataset file held malformed JSON.
    #[error("failed to parse JSON at {path:?}: {source}")]
    ParseDataset {
        /// File being decoded.
        path: Utf8PathBuf,
        /// Decoder failure.
        #[source]
        source: serde_json::Error,
    },
    /// A dataset file decoded but broke a validation rule.
    #[error("{path:?} failed validation: {source}")]
    InvalidDataset {
        /// File holding the bad record.
        path: Utf8PathBuf,
        /// First rule broken.
        #[source]
        source: ValidationError,
    },
    /// The requested app is not listed in the apps file.
    #[error("unknown app {app_id}")]
    UnknownApp {
        /// Identifier that was requested.
        app_id: AppId,
    },
    /// Installing the log subscriber failed.
    #[error("failed to install log subscriber: {0}")]
    Logging(#[source] tracing_subscriber::util::TryInitError),
    /// Serializing the command output failed.
    #[error("failed to serialize output: {0}")]
    SerializeOutput(#[source] serde_json::Error),
    /// Writing the command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
