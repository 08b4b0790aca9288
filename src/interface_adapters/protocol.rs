// Wire protocol DTOs and conversions for public room messages.
// Field and event names follow the original client vocabulary
// (joinRoom / playerUpdate / updatePlayers, camelCase payloads).

use crate::domain::{BuildingConfig, ScoreError, SliderTuning, SoilClass, Standing, Zone};
use crate::use_cases::RosterUpdate;
use serde::{Deserialize, Serialize};

/// Messages a client sends into the sync channel.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ClientMessage {
    // Initial handshake carrying the room code.
    #[serde(rename = "joinRoom")]
    JoinRoom { room: String },
    // Slider state published after a successful join.
    #[serde(rename = "playerUpdate")]
    PlayerUpdate(PlayerUpdateDto),
}

/// Messages the room fans out to every subscriber.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum ServerMessage {
    // Full roster snapshot after any accepted change.
    #[serde(rename = "updatePlayers")]
    UpdatePlayers(RosterUpdateDto),
}

/// Raw slider payload exactly as the bounded controls produce it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerUpdateDto {
    pub room: String,
    pub mass: u32,
    pub stiffness: f64,
    pub zone: u8,
    pub soil: u8,
    /// Client-computed score. Informational only; the room recomputes the
    /// authoritative value from the sliders.
    #[serde(default)]
    pub base_shear: Option<u32>,
}

impl PlayerUpdateDto {
    /// Validates the raw slider values into a domain config. Range checks
    /// are delegated to the slider tuning so the bounds live in one place.
    pub fn into_config(self, tuning: &SliderTuning) -> Result<BuildingConfig, ScoreError> {
        let zone = Zone::try_from(self.zone)?;
        let soil = SoilClass::try_from(self.soil)?;

        let config = BuildingConfig {
            mass: self.mass,
            stiffness: self.stiffness,
            zone,
            soil,
        };
        tuning.check(&config)?;

        Ok(config)
    }
}

/// Roster snapshot sent to clients on every accepted change.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterUpdateDto {
    pub revision: u64,
    pub players: Vec<StandingDto>,
}

impl From<RosterUpdate> for RosterUpdateDto {
    fn from(update: RosterUpdate) -> Self {
        Self {
            revision: update.revision,
            players: update.standings.iter().map(StandingDto::from).collect(),
        }
    }
}

/// Flattened leaderboard row for wire transmission.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingDto {
    pub rank: u32,
    pub player_id: String,
    pub mass: u32,
    pub stiffness: f64,
    pub zone: u8,
    /// Letter label A-D as shown next to the soil slider.
    pub soil: String,
    pub base_shear: u32,
}

impl From<&Standing> for StandingDto {
    fn from(standing: &Standing) -> Self {
        Self {
            rank: standing.rank,
            player_id: standing.player_id.clone(),
            mass: standing.config.mass,
            stiffness: standing.config.stiffness,
            zone: standing.config.zone.index(),
            soil: standing.config.soil.letter().to_string(),
            base_shear: standing.base_shear,
        }
    }
}
