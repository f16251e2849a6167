//! HTTP routes.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use pictureroom_shared::RegistrationPayload;
use serde::Serialize;

use crate::app::App;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/health", get(health))
        .route("/room", get(room_status))
}

#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
}

async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Registration document plus live counts.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomStatus {
    #[serde(flatten)]
    pub registration: RegistrationPayload,
    pub connections: usize,
    pub players: usize,
}

async fn room_status(State(app): State<Arc<App>>) -> Json<RoomStatus> {
    let registry = app.room.registry();
    Json(RoomStatus {
        registration: app.registration.clone(),
        connections: registry.connection_count(),
        players: registry.player_count(),
    })
}
