//! Error types emitted by the basket CLI.

use std::sync::Arc;

use basket_core::PlanError;
use basket_data::CatalogLoadError;
use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors emitted by the basket CLI.
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
        field: &'static str,
        env: &'static str,
    },
    /// Two options that select the same thing were both given.
    #[error("--{first} and --{second} cannot be combined")]
    ConflictingArguments {
        first: &'static str,
        second: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Opening the plan request file failed.
    #[error("failed to open plan request at {path:?}: {source}")]
    OpenPlanRequest {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Plan request JSON could not be decoded.
    #[error("failed to parse plan request JSON at {path:?}: {source}")]
    ParsePlanRequest {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The store catalog could not be loaded.
    #[error(transparent)]
    LoadCatalog(#[from] CatalogLoadError),
    /// The planner rejected the request.
    #[error("planning failed: {source}")]
    Plan {
        #[from]
        source: PlanError,
    },
    /// Serialising the plan response failed.
    #[error("failed to serialise plan response: {0}")]
    SerialisePlanResponse(#[source] serde_json::Error),
    /// Writing the plan output failed.
    #[error("failed to write plan output: {0}")]
    WritePlanOutput(#[source] std::io::Error),
}
