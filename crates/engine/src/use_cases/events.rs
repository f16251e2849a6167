//! Encoding room events into routed frames.
//!
//! Every method draws exactly one bookmark, however many connections the
//! resulting frame is later written to.

use std::sync::Arc;

use pictureroom_domain::{Direction, PlayerId, RoomMetadata};
use pictureroom_shared::{
    EventContent, Frame, LocationContent, ProtocolError, Recipient, ServerEvent,
};

use crate::infrastructure::bookmarks::Bookmarks;

pub struct EventEncoder {
    bookmarks: Arc<Bookmarks>,
}

impl EventEncoder {
    pub fn new(bookmarks: Arc<Bookmarks>) -> Self {
        Self { bookmarks }
    }

    /// Player messages. Routed to the whole room when `room` is present,
    /// otherwise to `player` alone.
    pub fn player_event(
        &self,
        player: &PlayerId,
        own: Option<&str>,
        room: Option<&str>,
    ) -> Result<Frame, ProtocolError> {
        let event = ServerEvent::Event {
            content: EventContent::messages(player, own, room),
            bookmark: self.bookmarks.next(),
        };
        let recipient = if room.is_some() {
            Recipient::Room
        } else {
            Recipient::Player(player.clone())
        };
        Frame::player(&recipient, &event)
    }

    pub fn location_event(
        &self,
        player: &PlayerId,
        room: &RoomMetadata,
    ) -> Result<Frame, ProtocolError> {
        let event = ServerEvent::Event {
            content: EventContent::Location(LocationContent::for_room(room)),
            bookmark: self.bookmarks.next(),
        };
        Frame::player(&Recipient::Player(player.clone()), &event)
    }

    pub fn chat_event(&self, username: &str, content: &str) -> Result<Frame, ProtocolError> {
        let event = ServerEvent::Chat {
            username: username.to_string(),
            content: content.to_string(),
            bookmark: self.bookmarks.next(),
        };
        Frame::player(&Recipient::Room, &event)
    }

    pub fn exit_event(
        &self,
        player: &PlayerId,
        direction: Direction,
        content: &str,
    ) -> Result<Frame, ProtocolError> {
        let event = ServerEvent::Exit {
            exit_id: direction,
            content: content.to_string(),
            bookmark: self.bookmarks.next(),
        };
        Frame::player_location(player, &event)
    }
}
