// Bridges domain roster updates into the serialized subscriber feed.

use crate::interface_adapters::protocol::{RosterUpdateDto, ServerMessage};
use crate::use_cases::{RoomHandle, RosterUpdate};
use tokio::sync::{broadcast, watch};
use tracing::{error, warn};

pub async fn roster_update_serializer(
    mut roster_rx: broadcast::Receiver<RosterUpdate>,
    roster_json_tx: broadcast::Sender<String>,
    roster_latest_tx: watch::Sender<String>,
) {
    // Serialize each snapshot once and share the string with all subscribers.
    loop {
        match roster_rx.recv().await {
            Ok(update) => {
                let msg = ServerMessage::UpdatePlayers(RosterUpdateDto::from(update));
                let txt = match serde_json::to_string(&msg) {
                    Ok(txt) => txt,
                    Err(e) => {
                        error!(error = ?e, "failed to serialize roster update");
                        continue;
                    }
                };

                // Store the latest snapshot for late joiners and lag recovery.
                let _ = roster_latest_tx.send(txt.clone());
                let _ = roster_json_tx.send(txt);
            }
            Err(broadcast::error::RecvError::Lagged(n)) => {
                warn!(
                    missed = n,
                    "roster serializer lagged; skipping to latest snapshot"
                );
            }
            Err(broadcast::error::RecvError::Closed) => {
                warn!("roster updates channel closed; serializer exiting");
                break;
            }
        }
    }
}

pub fn spawn_roster_serializer(room: &RoomHandle) {
    // Spawn a task that serializes roster updates for this room.
    tokio::spawn(roster_update_serializer(
        room.roster_tx.subscribe(),
        room.roster_json_tx.clone(),
        room.roster_latest_tx.clone(),
    ));
}
