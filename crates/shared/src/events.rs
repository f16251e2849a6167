//! Outbound event payloads.
//!
//! `player` and `location` events travel inside an `{"type":"event"}`
//! envelope; `chat` and `exit` events are flat. Every event carries the
//! bookmark it was stamped with.

use std::collections::BTreeMap;

use pictureroom_domain::{Direction, PlayerId, RoomMetadata};
use serde::{Deserialize, Serialize};

use crate::direction_map::{self, DirectionMap};

/// Key used in player message maps for text meant for the whole room.
pub const ROOM_KEY: &str = "*";

/// Events emitted by a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ServerEvent {
    /// Player messages or a room location, wrapped in an event envelope.
    Event { content: EventContent, bookmark: u64 },
    /// Free-form chat from a player.
    Chat {
        username: String,
        content: String,
        bookmark: u64,
    },
    /// A player is leaving through an exit.
    Exit {
        #[serde(rename = "exitId")]
        exit_id: Direction,
        content: String,
        bookmark: u64,
    },
}

impl ServerEvent {
    pub fn bookmark(&self) -> u64 {
        match self {
            ServerEvent::Event { bookmark, .. }
            | ServerEvent::Chat { bookmark, .. }
            | ServerEvent::Exit { bookmark, .. } => *bookmark,
        }
    }
}

/// Content of an `event` envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventContent {
    Location(LocationContent),
    /// Target key (`*` or a player id) to message text.
    Messages(BTreeMap<String, String>),
}

impl EventContent {
    /// Builds a player message map. Callers supply at least one message.
    pub fn messages(player: &PlayerId, own: Option<&str>, room: Option<&str>) -> Self {
        let mut messages = BTreeMap::new();
        if let Some(room) = room {
            messages.insert(ROOM_KEY.to_string(), room.to_string());
        }
        if let Some(own) = own {
            messages.insert(player.to_string(), own.to_string());
        }
        EventContent::Messages(messages)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationKind {
    #[serde(rename = "location")]
    Location,
}

/// Full description of a room as shown to a player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationContent {
    #[serde(rename = "type")]
    pub kind: LocationKind,
    pub name: String,
    pub full_name: String,
    pub description: String,
    /// Upper-cased direction code to exit description, in compass order.
    #[serde(
        serialize_with = "direction_map::serialize_upper",
        deserialize_with = "direction_map::deserialize"
    )]
    pub exits: DirectionMap,
    pub commands: BTreeMap<String, String>,
    pub pockets: Vec<String>,
    pub objects: Vec<String>,
}

impl LocationContent {
    /// Location view of a room with no custom commands and empty pockets.
    pub fn for_room(room: &RoomMetadata) -> Self {
        Self {
            kind: LocationKind::Location,
            name: room.name().to_string(),
            full_name: room.full_name().to_string(),
            description: room.description().to_string(),
            exits: room.exits().clone(),
            commands: BTreeMap::new(),
            pockets: Vec::new(),
            objects: room.objects().to_vec(),
        }
    }
}
