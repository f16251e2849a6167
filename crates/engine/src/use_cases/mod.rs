//! Use cases - room orchestration over the registry, encoder and dispatcher.

pub mod commands;
pub mod events;
pub mod room;

pub use room::{Room, RoomError};
