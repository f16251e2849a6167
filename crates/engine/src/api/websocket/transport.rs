//! WebSocket-backed connection transport.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use axum::extract::ws::{CloseFrame, Message, WebSocket};
use futures_util::stream::SplitSink;
use futures_util::SinkExt;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

use crate::infrastructure::ports::{ConnectionTransport, TransportError};

/// Write half of an axum WebSocket.
///
/// Writes are serialised through a mutex so frames from concurrent senders
/// never interleave. Aborting cancels the token the read loop waits on.
pub struct WsTransport {
    sink: Mutex<SplitSink<WebSocket, Message>>,
    open: AtomicBool,
    cancel: CancellationToken,
}

impl WsTransport {
    pub fn new(sink: SplitSink<WebSocket, Message>) -> Self {
        Self {
            sink: Mutex::new(sink),
            open: AtomicBool::new(true),
            cancel: CancellationToken::new(),
        }
    }

    /// Resolves once the transport has been aborted.
    pub fn cancelled(&self) -> tokio_util::sync::WaitForCancellationFuture<'_> {
        self.cancel.cancelled()
    }

    pub fn mark_closed(&self) {
        self.open.store(false, Ordering::SeqCst);
    }
}

#[async_trait]
impl ConnectionTransport for WsTransport {
    fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    async fn send_text(&self, text: &str) -> Result<(), TransportError> {
        let mut sink = self.sink.lock().await;
        sink.send(Message::Text(text.to_string().into()))
            .await
            .map_err(|e| TransportError::Send(e.to_string()))
    }

    async fn close(&self, code: u16, reason: &str) -> Result<(), TransportError> {
        self.mark_closed();
        let frame = CloseFrame {
            code,
            reason: reason.to_string().into(),
        };
        let mut sink = self.sink.lock().await;
        sink.send(Message::Close(Some(frame)))
            .await
            .map_err(|e| TransportError::Close(e.to_string()))
    }

    async fn abort(&self) {
        self.mark_closed();
        self.cancel.cancel();
    }
}
