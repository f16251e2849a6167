//! Room directory adapter.

use async_trait::async_trait;
use pictureroom_shared::RegistrationPayload;

use super::ports::{DirectoryError, RoomDirectory};

/// Directory that records the registration in the log instead of calling out.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingDirectory;

#[async_trait]
impl RoomDirectory for LoggingDirectory {
    async fn register(&self, payload: &RegistrationPayload) -> Result<(), DirectoryError> {
        let body = serde_json::to_string(payload)
            .map_err(|e| DirectoryError::Rejected(e.to_string()))?;
        tracing::info!(
            room = %payload.name,
            target = %payload.connection_details.target,
            payload = %body,
            "Room registration prepared"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::picture_room;

    #[tokio::test]
    async fn logging_directory_accepts_registration() {
        let payload =
            RegistrationPayload::for_room(&picture_room().expect("room"), "ws://localhost:9080/rooms/pictureRoom");
        assert!(LoggingDirectory.register(&payload).await.is_ok());
    }
}
