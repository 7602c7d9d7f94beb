//! Error types for the engine's collaborators.

use std::path::PathBuf;

/// Error reported by a [`StyleStore`](crate::StyleStore).
///
/// Store errors are advisory: the commit loop records them per record and
/// moves on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The target font could not be loaded, so font-dependent fields can't be written.
    #[error("font '{family} {style}' is not available: {reason}")]
    FontUnavailable {
        family: String,
        style: String,
        reason: String,
    },
    /// The style no longer exists in the document.
    #[error("style '{id}' not found")]
    StyleNotFound { id: String },
    /// Writing a single field failed.
    #[error("failed to write {field} on style '{id}': {reason}")]
    WriteFailed {
        id: String,
        field: String,
        reason: String,
    },
    /// Enumerating the document's styles failed.
    #[error("failed to list styles: {0}")]
    ListFailed(String),
}

/// Error from a [`StateStore`](crate::state::StateStore).
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A slot's content could not be encoded or decoded.
    #[error("serialization error in slot '{slot}': {source}")]
    Serialization {
        slot: String,
        #[source]
        source: serde_json::Error,
    },
    /// The backing location is unusable.
    #[error("state storage unavailable at {}", .path.display())]
    Unavailable { path: PathBuf },
}

/// Error decoding a dialog message.
#[derive(Debug, thiserror::Error)]
pub enum MessageError {
    /// The payload is not valid JSON or doesn't match any message shape.
    #[error("malformed dialog message: {0}")]
    Malformed(#[from] serde_json::Error),
}
