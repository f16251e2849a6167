//! Picture Room engine library.
//!
//! A single room of a text adventure network, served over WebSocket.
//!
//! ## Structure
//!
//! - `use_cases/` - Room orchestration: join, commands, leave, event encoding
//! - `infrastructure/` - Ports and their adapters (descriptions, directory, config, bookmarks)
//! - `api/` - HTTP and WebSocket entry points, connection registry and dispatch
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

/// Test doubles for unit tests.
#[cfg(test)]
pub mod test_fixtures;

/// End-to-end tests over a real WebSocket.
#[cfg(test)]
mod e2e_tests;

pub use app::App;
