//! Port traits for infrastructure boundaries.
//!
//! Ports exist for:
//! - Connections (could swap the axum WebSocket for any text transport)
//! - Item description lookup (static assets today)
//! - Room directory registration

mod error;
mod external;

pub use error::{DescriptionError, DirectoryError, TransportError};
pub use external::{ConnectionTransport, DescriptionLookup, RoomDirectory};

#[cfg(test)]
pub use external::{MockDescriptionLookup, MockRoomDirectory};
