//! End-to-end tests: the full router on a loopback port, driven by a real
//! WebSocket client.

mod room_client;
mod room_flow_tests;

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::api;
use crate::app::App;
use crate::infrastructure::bookmarks::Bookmarks;
use crate::infrastructure::config::picture_room;
use crate::infrastructure::descriptions::PictureDescriptions;

pub(crate) const ROOM_PATH: &str = "/rooms/pictureRoom";

/// Serve a fresh gallery room on `127.0.0.1:0`.
pub(crate) async fn spawn_room_server() -> (SocketAddr, Arc<App>, tokio::task::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");

    let app = Arc::new(App::new(
        picture_room().expect("room"),
        &format!("ws://{addr}{ROOM_PATH}"),
        Arc::new(Bookmarks::new()),
        Arc::new(PictureDescriptions::new()),
    ));
    let router = api::router(app.clone(), ROOM_PATH);

    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });

    (addr, app, handle)
}
