//! Picture Room Protocol - routed text frames exchanged with the game network.
//!
//! Every frame on the wire is a *routing envelope*: a few comma separated
//! routing fields followed by a JSON document.
//!
//! - Inbound (network -> room): `roomHello|room|roomGoodbye,<playerId>,{...}`
//! - Outbound (room -> network): `player,<playerId|*>,{...}`,
//!   `playerLocation,<playerId>,{...}` and the `ack` handshake frame.
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde, serde_json and thiserror
//! 2. **No business logic** - Pure data types, parsing and serialization
//! 3. **Payload JSON is never split** - commas inside `{...}` are not routing separators

pub mod direction_map;
pub mod error;
pub mod events;
pub mod frame;
pub mod payload;
pub mod registration;
pub mod routing;

pub use error::ProtocolError;
pub use events::{EventContent, LocationContent, ServerEvent};
pub use frame::{Frame, Recipient};
pub use payload::RoomPayload;
pub use registration::{ConnectionDetails, RegistrationPayload};
pub use routing::{split_routing, RoutedMessage, Verb};
