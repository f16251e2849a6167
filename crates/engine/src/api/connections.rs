//! Connection registry for room sessions.
//!
//! Tracks the sessions that have joined the room plus the room-wide set of
//! present players.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use dashmap::{DashMap, DashSet};
use pictureroom_domain::{ConnectionId, PlayerId};

use crate::infrastructure::ports::ConnectionTransport;

/// One client session. A session joins the room at most once until it leaves.
pub struct Connection {
    id: ConnectionId,
    transport: Arc<dyn ConnectionTransport>,
    joined: AtomicBool,
}

impl Connection {
    pub fn new(transport: Arc<dyn ConnectionTransport>) -> Self {
        Self {
            id: ConnectionId::new(),
            transport,
            joined: AtomicBool::new(false),
        }
    }

    pub fn id(&self) -> ConnectionId {
        self.id
    }

    pub fn is_open(&self) -> bool {
        self.transport.is_open()
    }

    pub fn transport(&self) -> &dyn ConnectionTransport {
        self.transport.as_ref()
    }

    /// Whether this session has completed a join and not left since.
    pub fn has_joined(&self) -> bool {
        self.joined.load(Ordering::SeqCst)
    }
}

/// Result of a join attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinOutcome {
    /// This session already joined, as this or any other player.
    AlreadyJoined,
    /// Player is present through another session; this session is now marked joined.
    AlreadyPresent,
    /// Player was newly added to the room.
    Entered,
}

/// Joined connections and room presence.
#[derive(Default)]
pub struct ConnectionRegistry {
    connections: DashMap<ConnectionId, Arc<Connection>>,
    players: DashSet<PlayerId>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a connection. Adding an already registered id replaces nothing.
    pub fn add(&self, connection: Arc<Connection>) {
        let id = connection.id();
        if self.connections.insert(id, connection).is_none() {
            tracing::debug!(connection_id = %id, "Connection registered");
        }
    }

    /// Deregister a connection. Presence is left untouched.
    pub fn remove(&self, id: ConnectionId) -> bool {
        let removed = self.connections.remove(&id).is_some();
        if removed {
            tracing::debug!(connection_id = %id, "Connection deregistered");
        }
        removed
    }

    pub fn contains(&self, id: ConnectionId) -> bool {
        self.connections.contains_key(&id)
    }

    /// Snapshot of the registered connections, safe to iterate while others change the set.
    pub fn members(&self) -> Vec<Arc<Connection>> {
        self.connections
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect()
    }

    pub fn is_present(&self, player: &PlayerId) -> bool {
        self.players.contains(player)
    }

    /// Record `player` entering through `connection`, registering the connection.
    pub fn join(&self, connection: &Arc<Connection>, player: &PlayerId) -> JoinOutcome {
        if connection.joined.swap(true, Ordering::SeqCst) {
            return JoinOutcome::AlreadyJoined;
        }
        self.add(Arc::clone(connection));
        if self.players.insert(player.clone()) {
            tracing::info!(connection_id = %connection.id(), player_id = %player, "Player entered room");
            JoinOutcome::Entered
        } else {
            JoinOutcome::AlreadyPresent
        }
    }

    /// Record `player` leaving through `connection`; returns whether they were present.
    ///
    /// The connection is deregistered and may join again afterwards.
    pub fn leave(&self, connection: &Connection, player: &PlayerId) -> bool {
        connection.joined.store(false, Ordering::SeqCst);
        self.connections.remove(&connection.id());
        let was_present = self.players.remove(player).is_some();
        tracing::info!(
            connection_id = %connection.id(),
            player_id = %player,
            was_present,
            "Player left room"
        );
        was_present
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }
}
