//! Delivery of encoded frames to connections.
//!
//! A failed write is fatal for that connection only: it is closed with
//! [`UNEXPECTED_CONDITION`] and dropped from the registry. A write that does
//! not complete within the send timeout counts as failed.

use std::sync::Arc;
use std::time::Duration;

use pictureroom_shared::Frame;

use super::connections::{Connection, ConnectionRegistry};
use crate::infrastructure::ports::TransportError;

/// WebSocket close code 1011.
pub const UNEXPECTED_CONDITION: u16 = 1011;

/// How long one write may take before the peer is treated as gone.
pub const DEFAULT_SEND_TIMEOUT: Duration = Duration::from_secs(10);

/// Close reasons must fit in a 125 byte control frame alongside the code.
pub const MAX_CLOSE_REASON: usize = 123;

/// Truncate `reason` to at most [`MAX_CLOSE_REASON`] bytes on a char boundary.
pub fn trim_reason(reason: &str) -> &str {
    if reason.len() <= MAX_CLOSE_REASON {
        return reason;
    }
    let mut end = MAX_CLOSE_REASON;
    while !reason.is_char_boundary(end) {
        end -= 1;
    }
    &reason[..end]
}

pub struct Dispatcher {
    registry: Arc<ConnectionRegistry>,
    send_timeout: Duration,
}

impl Dispatcher {
    pub fn new(registry: Arc<ConnectionRegistry>) -> Self {
        Self::with_send_timeout(registry, DEFAULT_SEND_TIMEOUT)
    }

    pub fn with_send_timeout(registry: Arc<ConnectionRegistry>, send_timeout: Duration) -> Self {
        Self {
            registry,
            send_timeout,
        }
    }

    /// Write `frame` to one connection. Returns whether it was delivered.
    pub async fn send_to_one(&self, connection: &Connection, frame: &Frame) -> bool {
        if !connection.is_open() {
            self.registry.remove(connection.id());
            return false;
        }

        let write = connection.transport().send_text(frame.as_str());
        let result = match tokio::time::timeout(self.send_timeout, write).await {
            Ok(result) => result,
            Err(_) => Err(TransportError::Send(format!(
                "write timed out after {}ms",
                self.send_timeout.as_millis()
            ))),
        };

        match result {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(
                    connection_id = %connection.id(),
                    error = %e,
                    "Failed to send frame, closing connection"
                );
                self.close_failed(connection, &e.to_string()).await;
                false
            }
        }
    }

    /// Write `frame` to each connection in turn; returns the delivered count.
    pub async fn send_to_many(&self, connections: &[Arc<Connection>], frame: &Frame) -> usize {
        let mut delivered = 0;
        for connection in connections {
            if self.send_to_one(connection, frame).await {
                delivered += 1;
            }
        }
        delivered
    }

    /// Send to every connection currently registered.
    pub async fn broadcast(&self, frame: &Frame) -> usize {
        let members = self.registry.members();
        self.send_to_many(&members, frame).await
    }

    async fn close_failed(&self, connection: &Connection, reason: &str) {
        let transport = connection.transport();
        if let Err(e) = transport
            .close(UNEXPECTED_CONDITION, trim_reason(reason))
            .await
        {
            tracing::debug!(
                connection_id = %connection.id(),
                error = %e,
                "Graceful close failed, aborting connection"
            );
            transport.abort().await;
        }
        self.registry.remove(connection.id());
    }
}
