//! Error types for the report engine.

use tallyfin_api::ApiError;

use super::ReportKind;

/// Failures that terminate a report job.
///
/// Per-item metadata failures are deliberately absent: those are recorded
/// in the model as failed items, not raised.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// A collection or entity-metadata fetch failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// No source is registered for the requested kind.
    #[error("no report source registered for kind '{0}'")]
    UnknownKind(ReportKind),

    /// The renderer rejected the finished model.
    #[error("renderer failed: {0}")]
    Render(String),

    /// The job worker went away without delivering an outcome.
    #[error("report worker terminated without delivering a result")]
    WorkerGone,
}

/// Result type alias using [`ReportError`].
pub type Result<T> = std::result::Result<T, ReportError>;

/// Error returned when parsing a report kind from a string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized report kind '{0}'")]
pub struct ParseKindError(pub String);
