// The per-room event loop that owns the roster.

use crate::domain::Roster;
use crate::use_cases::{RoomEvent, RosterUpdate};
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info, warn};

/// Owns one room's roster and applies events one at a time.
///
/// Each accepted mutation bumps the revision and broadcasts the full
/// standings. Invalid slider updates are logged and dropped without a
/// broadcast. The task ends when the room is shut down or every event
/// sender is gone.
pub async fn room_task(
    mut event_rx: mpsc::Receiver<RoomEvent>,
    roster_tx: broadcast::Sender<RosterUpdate>,
    shutdown: Arc<tokio::sync::Notify>,
) {
    let mut roster = Roster::new();
    let mut revision: u64 = 0;

    loop {
        let event = tokio::select! {
            _ = shutdown.notified() => {
                // Exit cleanly when the room is removed.
                break;
            }
            event = event_rx.recv() => match event {
                Some(event) => event,
                None => break,
            },
        };

        let changed = match event {
            RoomEvent::Join { player_id } => {
                info!(player_id, "player joined");
                // Joining seeds the default sliders; the default config is
                // always scorable, so this cannot fail.
                roster.upsert(&player_id, Default::default()).is_ok()
            }
            RoomEvent::Update { player_id, config } => {
                match roster.upsert(&player_id, config) {
                    Ok(base_shear) => {
                        debug!(player_id, base_shear, "player update applied");
                        true
                    }
                    Err(error) => {
                        warn!(player_id, ?error, "rejected player update");
                        false
                    }
                }
            }
            RoomEvent::Leave { player_id } => {
                info!(player_id, "player left");
                roster.remove(&player_id)
            }
        };

        if changed {
            revision += 1;
            let _ = roster_tx.send(RosterUpdate {
                revision,
                standings: roster.standings(),
            });
        }
    }
}
