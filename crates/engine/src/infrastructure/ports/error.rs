//! Error types for port operations.

/// Failures writing to or closing a connection.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TransportError {
    #[error("Send failed: {0}")]
    Send(String),

    #[error("Close failed: {0}")]
    Close(String),
}

/// Failures looking up an item description.
#[derive(Debug, thiserror::Error)]
pub enum DescriptionError {
    #[error("Error reading description for '{item}': {source}")]
    Io {
        item: String,
        #[source]
        source: std::io::Error,
    },
}

/// Failures registering the room with a directory.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("Registration rejected: {0}")]
    Rejected(String),

    #[error("Directory unavailable: {0}")]
    Unavailable(String),
}
