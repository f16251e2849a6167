//! External service port traits (connections, descriptions, directory).

use async_trait::async_trait;
use pictureroom_shared::RegistrationPayload;

use super::error::{DescriptionError, DirectoryError, TransportError};

/// A bidirectional text channel to one client of the room.
#[async_trait]
pub trait ConnectionTransport: Send + Sync {
    /// Whether the channel is still believed to be open.
    fn is_open(&self) -> bool;

    /// Writes one text frame.
    async fn send_text(&self, text: &str) -> Result<(), TransportError>;

    /// Graceful close with a status code and reason.
    async fn close(&self, code: u16, reason: &str) -> Result<(), TransportError>;

    /// Forceful close; never fails.
    async fn abort(&self);
}

/// Long-form descriptions for examinable objects.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DescriptionLookup: Send + Sync {
    /// `Ok(None)` when nothing is known about `item`.
    async fn describe(&self, item: &str) -> Result<Option<String>, DescriptionError>;
}

/// The directory through which the wider game discovers rooms.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomDirectory: Send + Sync {
    async fn register(&self, payload: &RegistrationPayload) -> Result<(), DirectoryError>;
}
