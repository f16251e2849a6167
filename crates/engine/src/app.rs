//! Application state and composition.

use std::sync::Arc;

use pictureroom_domain::RoomMetadata;
use pictureroom_shared::RegistrationPayload;

use crate::infrastructure::bookmarks::Bookmarks;
use crate::infrastructure::ports::{DescriptionLookup, RoomDirectory};
use crate::use_cases::Room;

/// Main application state, passed to HTTP/WebSocket handlers via Axum state.
pub struct App {
    pub room: Room,
    /// What the room advertises to the directory.
    pub registration: RegistrationPayload,
}

impl App {
    pub fn new(
        metadata: RoomMetadata,
        endpoint_url: &str,
        bookmarks: Arc<Bookmarks>,
        descriptions: Arc<dyn DescriptionLookup>,
    ) -> Self {
        let registration = RegistrationPayload::for_room(&metadata, endpoint_url);
        Self {
            room: Room::new(metadata, bookmarks, descriptions),
            registration,
        }
    }

    /// Announce the room to `directory`. A failed registration is logged and
    /// the room keeps serving connections.
    pub async fn register(&self, directory: &dyn RoomDirectory) -> bool {
        match directory.register(&self.registration).await {
            Ok(()) => {
                tracing::info!(room = %self.registration.name, "Room registered");
                true
            }
            Err(e) => {
                tracing::warn!(
                    room = %self.registration.name,
                    error = %e,
                    "Room registration failed"
                );
                false
            }
        }
    }
}
