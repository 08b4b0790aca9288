use std::env;

// Runtime constants (not slider tuning).

pub fn default_room_id() -> String {
    env::var("SEISMIC_DEFAULT_ROOM").unwrap_or_else(|_| "lobby".to_string())
}

pub fn demo_player_count() -> usize {
    env::var("SEISMIC_DEMO_PLAYERS")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(3)
}

pub const EVENT_CHANNEL_CAPACITY: usize = 1024;
pub const ROSTER_BROADCAST_CAPACITY: usize = 128;
