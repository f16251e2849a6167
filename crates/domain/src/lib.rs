//! Picture Room domain vocabulary.
//!
//! Pure types shared by the wire protocol and the engine: identifiers,
//! compass/vertical directions and the immutable room metadata.

pub mod direction;
pub mod error;
pub mod ids;
pub mod room;

pub use direction::Direction;
pub use error::DomainError;
pub use ids::{ConnectionId, PlayerId};
pub use room::RoomMetadata;
