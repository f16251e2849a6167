use std::time::Duration;

use pictureroom_domain::PlayerId;
use serde_json::json;

use super::room_client::RoomClient;
use super::spawn_room_server;

#[tokio::test]
async fn join_yields_player_then_location_to_joiner() {
    let (addr, _app, server) = spawn_room_server().await;
    let mut alice = RoomClient::connect(addr).await;

    alice
        .send_raw(r#"roomHello,p1,{"username":"Alice","userId":"p1"}"#)
        .await;

    let greeting = alice.recv().await;
    assert_eq!(greeting.kind, "player");
    assert_eq!(greeting.target, "*");
    assert_eq!(
        greeting.body["content"],
        json!({"*": "Player Alice has entered the room", "p1": "You have entered the room"})
    );

    let location = alice.recv().await;
    assert_eq!(location.target, "p1");
    assert_eq!(location.event_type(), "location");
    assert_eq!(location.bookmark(), greeting.bookmark() + 1);
    assert_eq!(location.body["content"]["exits"]["W"], "A shiny metal door, with a bright red handle");

    server.abort();
}

#[tokio::test]
async fn duplicate_join_is_silent() {
    let (addr, _app, server) = spawn_room_server().await;
    let mut alice = RoomClient::connect(addr).await;

    alice.hello("p1", "Alice").await;
    alice.recv().await;
    alice.recv().await;
    alice.hello("p1", "Alice").await;
    alice.expect_silence().await;

    server.abort();
}

#[tokio::test]
async fn chat_is_broadcast_to_all_members() {
    let (addr, _app, server) = spawn_room_server().await;
    let mut alice = RoomClient::connect(addr).await;
    let mut bob = RoomClient::connect(addr).await;
    alice.hello("p1", "Alice").await;
    alice.recv().await;
    alice.recv().await;
    bob.hello("p2", "Bob").await;
    bob.recv().await;
    bob.recv().await;

    alice.say("p1", "Alice", "Hello, gallery").await;

    for client in [&mut alice, &mut bob] {
        let chat = client.recv().await;
        assert_eq!(chat.target, "*");
        assert_eq!(chat.body["type"], "chat");
        assert_eq!(chat.body["username"], "Alice");
        assert_eq!(chat.body["content"], "Hello, gallery");
    }

    server.abort();
}

#[tokio::test]
async fn commands_reply_to_the_requester() {
    let (addr, _app, server) = spawn_room_server().await;
    let mut alice = RoomClient::connect(addr).await;
    alice.hello("p1", "Alice").await;
    alice.recv().await;
    alice.recv().await;

    alice.say("p1", "Alice", "/go n").await;
    let exit = alice.recv().await;
    assert_eq!(exit.kind, "playerLocation");
    assert_eq!(exit.body["exitId"], "n");
    assert_eq!(exit.body["content"], "Run Away!");

    alice.say("p1", "Alice", "/go q").await;
    let confused = alice.recv().await;
    assert_eq!(
        confused.body["content"]["p1"],
        "Hmm. That direction didn't make sense. Try again?"
    );

    alice.say("p1", "Alice", "/examine unknownitem").await;
    let missing = alice.recv().await;
    assert_eq!(
        missing.body["content"]["p1"],
        "Oops, no picture description could be found."
    );

    alice.say("p1", "Alice", "/examine Portrait").await;
    let portrait = alice.recv().await;
    assert_eq!(
        portrait.body["content"]["p1"],
        include_str!("../../assets/descriptions/portrait.txt")
    );

    server.abort();
}

#[tokio::test]
async fn malformed_frames_do_not_drop_the_connection() {
    let (addr, _app, server) = spawn_room_server().await;
    let mut alice = RoomClient::connect(addr).await;

    alice.send_raw("roomHello,p1,{broken").await;
    alice.send_raw("nonsense").await;
    alice.hello("p1", "Alice").await;

    assert_eq!(alice.recv().await.target, "*");

    server.abort();
}

#[tokio::test]
async fn leave_is_announced_and_closing_keeps_presence() {
    let (addr, app, server) = spawn_room_server().await;
    let mut alice = RoomClient::connect(addr).await;
    let mut bob = RoomClient::connect(addr).await;
    alice.hello("p1", "Alice").await;
    alice.recv().await;
    alice.recv().await;
    bob.hello("p2", "Bob").await;
    bob.recv().await;
    bob.recv().await;

    bob.goodbye("p2", "Bob").await;
    let farewell = alice.recv().await;
    assert_eq!(farewell.target, "*");
    assert_eq!(farewell.body["content"], json!({"*": "Player Bob has left the room"}));
    bob.expect_silence().await;
    assert!(!app.room.registry().is_present(&PlayerId::new("p2")));

    alice.close().await;
    let mut remaining = app.room.registry().connection_count();
    for _ in 0..50 {
        if remaining == 0 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
        remaining = app.room.registry().connection_count();
    }
    assert_eq!(remaining, 0);
    assert!(app.room.registry().is_present(&PlayerId::new("p1")));

    server.abort();
}
