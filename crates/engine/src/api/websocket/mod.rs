//! WebSocket endpoint for the room.
//!
//! One task per socket: frames are read and handled in order, each frame's
//! events are written before the next frame is read.

mod transport;

use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures_util::StreamExt;

pub use transport::WsTransport;

use super::connections::Connection;
use crate::app::App;

/// WebSocket upgrade handler.
pub async fn ws_handler(ws: WebSocketUpgrade, State(app): State<Arc<App>>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, app))
}

/// Handle an individual WebSocket connection.
async fn handle_socket(socket: WebSocket, app: Arc<App>) {
    let (sink, mut receiver) = socket.split();
    let transport = Arc::new(WsTransport::new(sink));
    let connection = Arc::new(Connection::new(transport.clone()));
    let connection_id = connection.id();

    tracing::info!(connection_id = %connection_id, "WebSocket connection established");
    app.room.open(&connection).await;

    loop {
        let next = tokio::select! {
            _ = transport.cancelled() => {
                tracing::debug!(connection_id = %connection_id, "WebSocket aborted by room");
                break;
            }
            next = receiver.next() => next,
        };

        match next {
            Some(Ok(Message::Text(text))) => {
                if let Err(e) = app.room.handle_frame(&connection, text.as_str()).await {
                    tracing::warn!(
                        connection_id = %connection_id,
                        error = %e,
                        "Dropping malformed frame"
                    );
                }
            }
            Some(Ok(Message::Close(_))) | None => {
                tracing::info!(connection_id = %connection_id, "WebSocket closed by client");
                break;
            }
            Some(Err(e)) => {
                tracing::error!(connection_id = %connection_id, error = %e, "WebSocket error");
                break;
            }
            Some(Ok(_)) => {}
        }
    }

    transport.mark_closed();
    app.room.disconnect(&connection);

    tracing::info!(connection_id = %connection_id, "WebSocket connection terminated");
}
