//! Outbound routed frames.

use std::fmt;

use pictureroom_domain::PlayerId;

use crate::error::ProtocolError;
use crate::events::{ServerEvent, ROOM_KEY};

/// Handshake sent as soon as a connection opens.
pub const ACK_FRAME: &str = r#"ack,{"version":[1]}"#;

/// Routing target of a `player` frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recipient {
    /// Everyone in the room (`*`).
    Room,
    Player(PlayerId),
}

impl fmt::Display for Recipient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recipient::Room => f.write_str(ROOM_KEY),
            Recipient::Player(id) => write!(f, "{}", id),
        }
    }
}

/// A complete text frame ready to be written to a connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame(String);

impl Frame {
    pub fn ack() -> Self {
        Self(ACK_FRAME.to_string())
    }

    /// `player,<recipient>,<event>`
    pub fn player(recipient: &Recipient, event: &ServerEvent) -> Result<Self, ProtocolError> {
        Ok(Self(format!(
            "player,{},{}",
            recipient,
            serde_json::to_string(event)?
        )))
    }

    /// `playerLocation,<playerId>,<event>`, used for exits.
    pub fn player_location(player: &PlayerId, event: &ServerEvent) -> Result<Self, ProtocolError> {
        Ok(Self(format!(
            "playerLocation,{},{}",
            player,
            serde_json::to_string(event)?
        )))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
