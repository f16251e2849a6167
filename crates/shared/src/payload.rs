//! Inbound JSON payloads.

use pictureroom_domain::PlayerId;
use serde_json::{Map, Value};

use crate::error::ProtocolError;

/// Fields a room reads from an inbound payload.
///
/// Values may arrive as any JSON scalar; non-string values are coerced to
/// their JSON text (`42`, `true`, `null`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomPayload {
    pub username: String,
    pub user_id: PlayerId,
    /// Command or chat text. Only `room` frames are required to carry it.
    pub content: Option<String>,
}

impl RoomPayload {
    pub fn from_json(json: &str) -> Result<Self, ProtocolError> {
        let value: Value = serde_json::from_str(json)?;
        let Value::Object(fields) = value else {
            return Err(ProtocolError::NotAnObject);
        };

        Ok(Self {
            username: required(&fields, "username")?,
            user_id: PlayerId::new(required(&fields, "userId")?),
            content: fields.get("content").map(coerce_text),
        })
    }

    /// Returns the content, failing when the payload has none.
    pub fn require_content(&self) -> Result<&str, ProtocolError> {
        self.content
            .as_deref()
            .ok_or(ProtocolError::MissingField("content"))
    }
}

fn required(fields: &Map<String, Value>, name: &'static str) -> Result<String, ProtocolError> {
    fields
        .get(name)
        .map(coerce_text)
        .ok_or(ProtocolError::MissingField(name))
}

fn coerce_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
