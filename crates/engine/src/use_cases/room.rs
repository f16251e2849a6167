//! The room: routes inbound frames to join, command and leave handling.

use std::sync::Arc;

use pictureroom_domain::{PlayerId, RoomMetadata};
use pictureroom_shared::{Frame, ProtocolError, RoomPayload, RoutedMessage, Verb};

use super::commands::Command;
use super::events::EventEncoder;
use crate::api::connections::{Connection, ConnectionRegistry, JoinOutcome};
use crate::api::dispatch::Dispatcher;
use crate::infrastructure::bookmarks::Bookmarks;
use crate::infrastructure::descriptions::describe_or_fallback;
use crate::infrastructure::ports::DescriptionLookup;

const ENTERED_SELF: &str = "You have entered the room";
const INVALID_DIRECTION: &str = "Hmm. That direction didn't make sense. Try again?";
const UNRECOGNISED_COMMAND: &str = "Unrecognised command - sorry :-(";
const EXIT_CONTENT: &str = "Run Away!";

fn entered_room(username: &str) -> String {
    format!("Player {username} has entered the room")
}

fn left_room(username: &str) -> String {
    format!("Player {username} has left the room")
}

#[derive(Debug, thiserror::Error)]
pub enum RoomError {
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}

/// A single room instance and its live sessions.
pub struct Room {
    metadata: RoomMetadata,
    registry: Arc<ConnectionRegistry>,
    dispatcher: Dispatcher,
    encoder: EventEncoder,
    descriptions: Arc<dyn DescriptionLookup>,
}

impl Room {
    /// Rooms built from the same `bookmarks` share one event sequence.
    pub fn new(
        metadata: RoomMetadata,
        bookmarks: Arc<Bookmarks>,
        descriptions: Arc<dyn DescriptionLookup>,
    ) -> Self {
        let registry = Arc::new(ConnectionRegistry::new());
        Self {
            metadata,
            dispatcher: Dispatcher::new(Arc::clone(&registry)),
            registry,
            encoder: EventEncoder::new(bookmarks),
            descriptions,
        }
    }

    pub fn metadata(&self) -> &RoomMetadata {
        &self.metadata
    }

    pub fn registry(&self) -> &ConnectionRegistry {
        &self.registry
    }

    /// Greet a freshly opened connection with the ack handshake.
    pub async fn open(&self, connection: &Connection) {
        tracing::debug!(connection_id = %connection.id(), "Connection opened");
        self.dispatcher.send_to_one(connection, &Frame::ack()).await;
    }

    /// Forget a connection whose transport has closed. Presence is kept.
    pub fn disconnect(&self, connection: &Connection) {
        self.registry.remove(connection.id());
    }

    /// Handle one inbound text frame.
    ///
    /// Errors only ever concern this frame; the connection stays usable.
    pub async fn handle_frame(
        &self,
        connection: &Arc<Connection>,
        text: &str,
    ) -> Result<(), RoomError> {
        let Some(message) = RoutedMessage::parse(text)? else {
            tracing::debug!(connection_id = %connection.id(), "Ignoring frame with unknown verb");
            return Ok(());
        };
        let payload = RoomPayload::from_json(message.payload)?;

        match message.verb {
            Verb::RoomHello => self.join(connection, &payload).await,
            Verb::RoomGoodbye => self.leave(connection, &payload).await,
            Verb::Room => self.command(connection, &payload).await,
        }
    }

    async fn join(
        &self,
        connection: &Arc<Connection>,
        payload: &RoomPayload,
    ) -> Result<(), RoomError> {
        let player = &payload.user_id;
        match self.registry.join(connection, player) {
            JoinOutcome::Entered => {}
            outcome => {
                tracing::debug!(
                    connection_id = %connection.id(),
                    player_id = %player,
                    ?outcome,
                    "Duplicate join ignored"
                );
                return Ok(());
            }
        }

        let announcement = entered_room(&payload.username);
        let greeting =
            self.encoder
                .player_event(player, Some(ENTERED_SELF), Some(announcement.as_str()))?;
        self.dispatcher.send_to_one(connection, &greeting).await;

        let location = self.encoder.location_event(player, &self.metadata)?;
        self.dispatcher.send_to_one(connection, &location).await;
        Ok(())
    }

    async fn leave(&self, connection: &Connection, payload: &RoomPayload) -> Result<(), RoomError> {
        self.registry.leave(connection, &payload.user_id);

        let message = left_room(&payload.username);
        let farewell = self
            .encoder
            .player_event(&payload.user_id, None, Some(message.as_str()))?;
        self.dispatcher.broadcast(&farewell).await;
        Ok(())
    }

    async fn command(
        &self,
        connection: &Connection,
        payload: &RoomPayload,
    ) -> Result<(), RoomError> {
        let content = payload.require_content()?;
        let player = &payload.user_id;

        let frame = match Command::parse(content) {
            Command::Look => self.encoder.location_event(player, &self.metadata)?,
            Command::Examine(item) => {
                let text = describe_or_fallback(self.descriptions.as_ref(), &item).await;
                self.encoder.player_event(player, Some(text.as_str()), None)?
            }
            Command::Go(Some(direction)) => {
                tracing::info!(player_id = %player, exit = %direction, "Player leaving through exit");
                self.encoder.exit_event(player, direction, EXIT_CONTENT)?
            }
            Command::Go(None) => self.self_message(player, INVALID_DIRECTION)?,
            Command::Unknown => self.self_message(player, UNRECOGNISED_COMMAND)?,
            Command::Chat(text) => {
                let chat = self.encoder.chat_event(&payload.username, text)?;
                self.dispatcher.broadcast(&chat).await;
                return Ok(());
            }
        };

        self.dispatcher.send_to_one(connection, &frame).await;
        Ok(())
    }

    fn self_message(&self, player: &PlayerId, text: &str) -> Result<Frame, ProtocolError> {
        self.encoder.player_event(player, Some(text), None)
    }
}
