use thiserror::Error;

use crate::operations::merge::ContactResult;

/// Top-level error type for the meshweld engine.
#[derive(Debug, Error)]
pub enum MeshError {
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    #[error(transparent)]
    Merge(#[from] MergeError),
}

/// Errors raised while capturing a snapshot from a source object.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("object {name:?} carries no polygonal geometry")]
    NoGeometry { name: String },

    #[error("object {name:?}, face {face_index}: {reason}")]
    InvalidFaceLoop {
        name: String,
        face_index: usize,
        reason: String,
    },
}

/// Errors from internal id lookups.
///
/// These indicate a pipeline bug rather than bad input; snapshots are
/// immutable after extraction, so every stored id should resolve.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("entity not found: {0}")]
    EntityNotFound(&'static str),
}

/// Errors that abort a merge without producing output.
///
/// Each variant carries structured evidence so callers can render a
/// specific message instead of free text.
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("selection has {supplied} mesh object(s); at least 2 required")]
    Selection { supplied: usize },

    #[error("no full-face contact between any pair of selected objects")]
    NoFaceContact { contacts: Vec<ContactResult> },

    #[error("degenerate geometry: a face occurs {occurrences} times after welding")]
    DegenerateGeometry { occurrences: usize },
}

/// Convenience type alias for results using [`MeshError`].
pub type Result<T> = std::result::Result<T, MeshError>;
