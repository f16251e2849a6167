//! Payload a room advertises to the room directory.

use pictureroom_domain::RoomMetadata;
use serde::{Deserialize, Serialize};

use crate::direction_map::{self, DirectionMap};

/// How the directory reaches this room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionDetails {
    #[serde(rename = "type")]
    pub kind: String,
    pub target: String,
}

/// Room registration document: identity, door descriptions and endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPayload {
    pub name: String,
    pub full_name: String,
    pub description: String,
    /// Lower-case direction code to door description, in compass order.
    #[serde(
        serialize_with = "direction_map::serialize_lower",
        deserialize_with = "direction_map::deserialize"
    )]
    pub doors: DirectionMap,
    pub connection_details: ConnectionDetails,
}

impl RegistrationPayload {
    pub fn for_room(room: &RoomMetadata, target: impl Into<String>) -> Self {
        Self {
            name: room.name().to_string(),
            full_name: room.full_name().to_string(),
            description: room.description().to_string(),
            doors: room.exits().clone(),
            connection_details: ConnectionDetails {
                kind: "websocket".to_string(),
                target: target.into(),
            },
        }
    }
}
