// Use-case level inputs/outputs for the room loop.

use crate::domain::{BuildingConfig, Standing};

#[derive(Debug, Clone)]
pub enum RoomEvent {
    Join { player_id: String },
    Leave { player_id: String },
    Update {
        player_id: String,
        config: BuildingConfig,
    },
}

/// Full roster snapshot broadcast after every accepted mutation. Always the
/// whole room, never a diff.
#[derive(Debug, Clone, Default)]
pub struct RosterUpdate {
    /// Monotonic per-room change counter.
    pub revision: u64,
    pub standings: Vec<Standing>,
}
