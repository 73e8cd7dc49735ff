//! Error types for the workspace and the stdio protocol.

use thiserror::Error;

/// Errors from file-table operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceError {
    #[error("File name must not be empty")]
    EmptyName,

    #[error("File already exists: {0}")]
    AlreadyExists(String),

    #[error("No such file: {0}")]
    NotFound(String),

    /// The workspace always keeps at least one file
    #[error("Cannot delete the last file")]
    LastFile,

    #[error("No example program at index {0}")]
    UnknownExample(usize),
}

/// Errors while serving the framed JSON protocol.
#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed message: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Frame header has no Content-Length")]
    MissingContentLength,

    #[error("Frame of {0} bytes exceeds the size limit")]
    FrameTooLarge(usize),

    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error(transparent)]
    Workspace(#[from] WorkspaceError),
}

impl ProtocolError {
    /// Whether the serve loop must stop. Everything else is reported back
    /// to the client and the loop keeps reading.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ProtocolError::Io(_))
    }
}
