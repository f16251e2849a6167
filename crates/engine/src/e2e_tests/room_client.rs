use std::net::SocketAddr;
use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use serde_json::json;
use tokio::time::timeout;
use tokio_tungstenite::{connect_async, tungstenite::Message as WsMessage, MaybeTlsStream};

use super::ROOM_PATH;
use crate::test_fixtures::SentFrame;

type Stream = tokio_tungstenite::WebSocketStream<MaybeTlsStream<tokio::net::TcpStream>>;

/// Test client speaking the routed-frame protocol.
pub(crate) struct RoomClient {
    ws: Stream,
    timeout: Duration,
}

impl RoomClient {
    /// Connect and consume the `ack` handshake.
    pub(crate) async fn connect(addr: SocketAddr) -> Self {
        let (ws, _resp) = connect_async(format!("ws://{addr}{ROOM_PATH}"))
            .await
            .expect("connect");
        let mut client = Self {
            ws,
            timeout: Duration::from_secs(5),
        };
        assert_eq!(client.recv_raw().await, r#"ack,{"version":[1]}"#);
        client
    }

    pub(crate) async fn send_raw(&mut self, text: &str) {
        self.ws
            .send(WsMessage::text(text.to_string()))
            .await
            .expect("send");
    }

    pub(crate) async fn hello(&mut self, id: &str, name: &str) {
        let payload = json!({"username": name, "userId": id});
        self.send_raw(&format!("roomHello,{id},{payload}")).await;
    }

    pub(crate) async fn goodbye(&mut self, id: &str, name: &str) {
        let payload = json!({"username": name, "userId": id});
        self.send_raw(&format!("roomGoodbye,{id},{payload}")).await;
    }

    pub(crate) async fn say(&mut self, id: &str, name: &str, content: &str) {
        let payload = json!({"username": name, "userId": id, "content": content});
        self.send_raw(&format!("room,{id},{payload}")).await;
    }

    /// Next text frame, panicking after the timeout.
    pub(crate) async fn recv_raw(&mut self) -> String {
        loop {
            let next = timeout(self.timeout, self.ws.next())
                .await
                .expect("frame before timeout")
                .expect("stream open")
                .expect("websocket ok");
            if next.is_text() {
                return next.to_text().expect("text frame").to_string();
            }
        }
    }

    pub(crate) async fn recv(&mut self) -> SentFrame {
        SentFrame::parse(&self.recv_raw().await)
    }

    /// Asserts nothing arrives within a short window.
    pub(crate) async fn expect_silence(&mut self) {
        let next = timeout(Duration::from_millis(200), self.ws.next()).await;
        assert!(next.is_err(), "unexpected frame: {next:?}");
    }

    pub(crate) async fn close(mut self) {
        let _ = self.ws.close(None).await;
    }
}
