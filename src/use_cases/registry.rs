// Room orchestration: registry of live rooms and their channel bundles.

use crate::domain::BuildingConfig;
use crate::use_cases::room::room_task;
use crate::use_cases::{RoomEvent, RosterUpdate};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc, watch, RwLock};

/// Shared configuration for spawning rooms.
#[derive(Debug, Clone)]
pub struct RoomSettings {
    /// Capacity for inbound room events.
    pub event_channel_capacity: usize,
    /// Capacity for broadcast roster updates.
    pub roster_broadcast_capacity: usize,
}

/// Errors returned by room registry and room channel operations.
#[derive(Debug)]
pub enum RoomError {
    /// Room already exists and cannot be re-created.
    AlreadyExists,
    /// Room codes must be non-empty, matching the join form's guard.
    EmptyRoomId,
    /// The room task has stopped accepting events.
    Closed,
}

/// Per-room channels. This is the in-process realization of the realtime
/// sync surface: `join`/`publish_update` feed the room, `subscribe` delivers
/// full roster snapshots to everyone listening.
#[derive(Clone)]
pub struct RoomHandle {
    /// Identifier players use to target this room.
    pub room_id: Arc<str>,
    /// Sender for events into the room task.
    pub event_tx: mpsc::Sender<RoomEvent>,
    /// Broadcast sender for roster updates (domain structs).
    pub roster_tx: broadcast::Sender<RosterUpdate>,
    /// Broadcast sender for serialized roster updates.
    pub roster_json_tx: broadcast::Sender<String>,
    /// Watch sender holding the latest serialized roster update.
    pub roster_latest_tx: watch::Sender<String>,
    /// Signals the room task to stop.
    shutdown: Arc<tokio::sync::Notify>,
}

impl RoomHandle {
    /// Registers a player; the room seeds their default sliders.
    pub async fn join(&self, player_id: &str) -> Result<(), RoomError> {
        self.send(RoomEvent::Join {
            player_id: player_id.to_string(),
        })
        .await
    }

    /// Broadcasts a player's current sliders to the room.
    pub async fn publish_update(
        &self,
        player_id: &str,
        config: BuildingConfig,
    ) -> Result<(), RoomError> {
        self.send(RoomEvent::Update {
            player_id: player_id.to_string(),
            config,
        })
        .await
    }

    /// Removes a player from the room roster.
    pub async fn leave(&self, player_id: &str) -> Result<(), RoomError> {
        self.send(RoomEvent::Leave {
            player_id: player_id.to_string(),
        })
        .await
    }

    /// Subscribes to roster change snapshots.
    pub fn subscribe(&self) -> broadcast::Receiver<RosterUpdate> {
        self.roster_tx.subscribe()
    }

    /// Subscribes to the serialized roster feed.
    pub fn subscribe_json(&self) -> broadcast::Receiver<String> {
        self.roster_json_tx.subscribe()
    }

    /// Latest serialized snapshot, for late joiners and lag recovery.
    pub fn latest_json(&self) -> watch::Receiver<String> {
        self.roster_latest_tx.subscribe()
    }

    async fn send(&self, event: RoomEvent) -> Result<(), RoomError> {
        self.event_tx
            .send(event)
            .await
            .map_err(|_| RoomError::Closed)
    }
}

/// Thread-safe registry for active rooms.
pub struct RoomRegistry {
    /// Global settings applied to newly created rooms.
    settings: RoomSettings,
    /// Map of room id to active handle.
    rooms: RwLock<HashMap<String, RoomHandle>>,
}

impl RoomRegistry {
    /// Creates a new registry with the provided settings.
    pub fn new(settings: RoomSettings) -> Self {
        Self {
            settings,
            rooms: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a new room and spawns its roster task.
    pub async fn create_room(&self, room_id: String) -> Result<RoomHandle, RoomError> {
        if room_id.is_empty() {
            return Err(RoomError::EmptyRoomId);
        }

        let mut rooms = self.rooms.write().await;
        if rooms.contains_key(&room_id) {
            return Err(RoomError::AlreadyExists);
        }

        // Channel wiring for the room loop.
        let (event_tx, event_rx) =
            mpsc::channel::<RoomEvent>(self.settings.event_channel_capacity);
        let (roster_tx, _roster_rx) =
            broadcast::channel::<RosterUpdate>(self.settings.roster_broadcast_capacity);
        let (roster_json_tx, _roster_json_rx) =
            broadcast::channel::<String>(self.settings.roster_broadcast_capacity);
        let (roster_latest_tx, _roster_latest_rx) = watch::channel::<String>(String::new());
        let shutdown = Arc::new(tokio::sync::Notify::new());

        // Spawn the roster loop for this room.
        tokio::spawn(room_task(event_rx, roster_tx.clone(), shutdown.clone()));

        let room = RoomHandle {
            room_id: Arc::from(room_id.clone()),
            event_tx,
            roster_tx,
            roster_json_tx,
            roster_latest_tx,
            shutdown,
        };

        rooms.insert(room_id, room.clone());
        Ok(room)
    }

    /// Returns a room handle for the provided id, if it exists.
    pub async fn get_room(&self, room_id: &str) -> Option<RoomHandle> {
        let rooms = self.rooms.read().await;
        rooms.get(room_id).cloned()
    }

    /// Removes a room, stopping its task. Returns whether it existed.
    pub async fn remove_room(&self, room_id: &str) -> bool {
        let mut rooms = self.rooms.write().await;
        match rooms.remove(room_id) {
            Some(room) => {
                room.shutdown.notify_one();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn settings() -> RoomSettings {
        RoomSettings {
            event_channel_capacity: 16,
            roster_broadcast_capacity: 16,
        }
    }

    #[tokio::test]
    async fn when_a_room_id_is_taken_then_creation_is_rejected() {
        let registry = RoomRegistry::new(settings());
        registry
            .create_room("quake-1".to_string())
            .await
            .expect("first creation should succeed");

        let result = registry.create_room("quake-1".to_string()).await;
        assert!(matches!(result, Err(RoomError::AlreadyExists)));
    }

    #[tokio::test]
    async fn when_the_room_id_is_empty_then_creation_is_rejected() {
        let registry = RoomRegistry::new(settings());
        let result = registry.create_room(String::new()).await;
        assert!(matches!(result, Err(RoomError::EmptyRoomId)));
    }

    #[tokio::test]
    async fn when_a_room_exists_then_it_can_be_looked_up() {
        let registry = RoomRegistry::new(settings());
        registry
            .create_room("quake-1".to_string())
            .await
            .expect("creation should succeed");

        let room = registry.get_room("quake-1").await;
        assert!(room.is_some());
        assert!(registry.get_room("missing").await.is_none());
    }

    #[tokio::test]
    async fn when_a_room_is_removed_then_its_task_stops_accepting_events() {
        let registry = RoomRegistry::new(settings());
        let room = registry
            .create_room("quake-1".to_string())
            .await
            .expect("creation should succeed");

        assert!(registry.remove_room("quake-1").await);
        assert!(!registry.remove_room("quake-1").await);

        // Give the room task a moment to observe the shutdown signal.
        tokio::time::sleep(Duration::from_millis(50)).await;
        let result = room.join("late").await;
        assert!(matches!(result, Err(RoomError::Closed)));
    }
}
