//! Routing envelope parsing.

use crate::error::ProtocolError;

/// Splits a routed frame into its routing fields and trailing payload.
///
/// Only commas that appear before the first `{` separate fields; everything
/// after the last such comma (the JSON payload included) is returned
/// verbatim as the final field. A frame without any `{` is a single field.
pub fn split_routing(message: &str) -> Vec<&str> {
    let Some(brace) = message.find('{') else {
        return vec![message];
    };

    let mut fields = Vec::with_capacity(3);
    let mut start = 0;
    for (idx, _) in message[..brace].match_indices(',') {
        fields.push(&message[start..idx]);
        start = idx + 1;
    }
    fields.push(&message[start..]);
    fields
}

/// Inbound verbs a room understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    /// A player enters the room.
    RoomHello,
    /// A command or chat line from a player in the room.
    Room,
    /// A player leaves the room.
    RoomGoodbye,
}

impl Verb {
    /// Maps a wire verb; unknown verbs yield `None` and are ignored by rooms.
    pub fn from_wire(verb: &str) -> Option<Self> {
        match verb {
            "roomHello" => Some(Verb::RoomHello),
            "room" => Some(Verb::Room),
            "roomGoodbye" => Some(Verb::RoomGoodbye),
            _ => None,
        }
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            Verb::RoomHello => "roomHello",
            Verb::Room => "room",
            Verb::RoomGoodbye => "roomGoodbye",
        }
    }
}

/// A parsed inbound frame: `verb,playerId,payloadJson`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutedMessage<'a> {
    pub verb: Verb,
    pub player_id: &'a str,
    pub payload: &'a str,
}

impl<'a> RoutedMessage<'a> {
    /// Parses an inbound frame.
    ///
    /// Returns `Ok(None)` for verbs the room does not handle, and an error
    /// when a known verb does not carry exactly a player id and a payload.
    pub fn parse(message: &'a str) -> Result<Option<Self>, ProtocolError> {
        let fields = split_routing(message);
        let Some(verb) = fields.first().and_then(|v| Verb::from_wire(v)) else {
            return Ok(None);
        };

        match fields.as_slice() {
            [_, player_id, payload] => Ok(Some(Self {
                verb,
                player_id: *player_id,
                payload: *payload,
            })),
            _ => Err(ProtocolError::MalformedEnvelope(format!(
                "expected 3 routing fields for '{}', found {}",
                verb.as_wire(),
                fields.len()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commas_inside_payload_are_not_separators() {
        let fields = split_routing(r#"roomHello,user1,{"username":"a,b"}"#);
        assert_eq!(fields, vec!["roomHello", "user1", r#"{"username":"a,b"}"#]);
    }

    #[test]
    fn nested_payload_commas_survive() {
        let msg = r#"room,p1,{"content":"hi, there","meta":{"a":1,"b":[1,2]}}"#;
        let fields = split_routing(msg);
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[2], r#"{"content":"hi, there","meta":{"a":1,"b":[1,2]}}"#);
    }

    #[test]
    fn frame_without_brace_is_single_field() {
        assert_eq!(split_routing("roomHello,p1,nojson"), vec!["roomHello,p1,nojson"]);
        assert_eq!(split_routing(""), vec![""]);
    }

    #[test]
    fn extra_routing_fields_are_kept() {
        let fields = split_routing(r#"a,b,c,{"x":","}"#);
        assert_eq!(fields, vec!["a", "b", "c", r#"{"x":","}"#]);
    }

    #[test]
    fn parses_known_verbs() {
        let msg = RoutedMessage::parse(r#"roomGoodbye,p1,{"userId":"p1"}"#)
            .expect("parse")
            .expect("known verb");
        assert_eq!(msg.verb, Verb::RoomGoodbye);
        assert_eq!(msg.player_id, "p1");
        assert_eq!(msg.payload, r#"{"userId":"p1"}"#);
    }

    #[test]
    fn unknown_verbs_are_ignored() {
        assert_eq!(RoutedMessage::parse(r#"roomJoin,p1,{}"#).expect("parse"), None);
        assert_eq!(RoutedMessage::parse("garbage").expect("parse"), None);
    }

    #[test]
    fn known_verb_with_wrong_field_count_is_malformed() {
        assert!(matches!(
            RoutedMessage::parse("room,p1"),
            Err(ProtocolError::MalformedEnvelope(_))
        ));
        assert!(matches!(
            RoutedMessage::parse(r#"room,p1,extra,{"content":"x"}"#),
            Err(ProtocolError::MalformedEnvelope(_))
        ));
    }

    #[test]
    fn verbs_round_trip_through_wire_names() {
        for verb in [Verb::RoomHello, Verb::Room, Verb::RoomGoodbye] {
            assert_eq!(Verb::from_wire(verb.as_wire()), Some(verb));
        }
    }
}
