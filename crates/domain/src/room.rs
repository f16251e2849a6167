//! Immutable room metadata.

use std::collections::BTreeMap;

use crate::direction::Direction;
use crate::error::DomainError;

/// Static description of a room, fixed at construction.
///
/// Every room describes all six exits even if the wider map never wires some
/// of them up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomMetadata {
    name: String,
    full_name: String,
    description: String,
    exits: BTreeMap<Direction, String>,
    objects: Vec<String>,
}

impl RoomMetadata {
    pub fn new(
        name: impl Into<String>,
        full_name: impl Into<String>,
        description: impl Into<String>,
        exits: impl IntoIterator<Item = (Direction, String)>,
        objects: Vec<String>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("room name cannot be empty"));
        }

        let exits: BTreeMap<Direction, String> = exits.into_iter().collect();
        if let Some(missing) = Direction::ALL.iter().find(|d| !exits.contains_key(d)) {
            return Err(DomainError::validation(format!(
                "exit description missing for direction '{}'",
                missing
            )));
        }

        Ok(Self {
            name,
            full_name: full_name.into(),
            description: description.into(),
            exits,
            objects,
        })
    }

    /// Room identity used on the wire (`name`).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Exit descriptions keyed by direction, in `n, s, e, w, u, d` order.
    pub fn exits(&self) -> &BTreeMap<Direction, String> {
        &self.exits
    }

    pub fn exit(&self, direction: Direction) -> Option<&str> {
        self.exits.get(&direction).map(String::as_str)
    }

    pub fn objects(&self) -> &[String] {
        &self.objects
    }
}
