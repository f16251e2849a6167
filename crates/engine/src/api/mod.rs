//! API layer - HTTP and WebSocket entry points.

pub mod connections;
pub mod dispatch;
pub mod http;
pub mod websocket;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

pub use connections::{Connection, ConnectionRegistry, JoinOutcome};
pub use dispatch::Dispatcher;

use crate::app::App;

/// Full router: HTTP routes plus the room's WebSocket endpoint at `room_path`.
pub fn router(app: Arc<App>, room_path: &str) -> Router {
    http::routes()
        .route(room_path, get(websocket::ws_handler))
        .with_state(app)
        .layer(TraceLayer::new_for_http())
}
