//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies and the
//! process-wide services a room is built from.

pub mod bookmarks;
pub mod config;
pub mod descriptions;
pub mod directory;
pub mod ports;
