// Framework bootstrap for the local arena runtime.

use crate::domain::BuildingConfig;
use crate::frameworks::config;
use crate::interface_adapters::spawn_roster_serializer;
use crate::use_cases::{RoomHandle, RoomRegistry, RoomSettings};

use std::io::Result;
use std::sync::Arc;
use tokio::sync::broadcast;
use uuid::Uuid;

fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

/// Builds the registry that owns all active rooms.
pub fn build_registry() -> Arc<RoomRegistry> {
    Arc::new(RoomRegistry::new(RoomSettings {
        event_channel_capacity: config::EVENT_CHANNEL_CAPACITY,
        roster_broadcast_capacity: config::ROSTER_BROADCAST_CAPACITY,
    }))
}

/// Runs the fully local variant: one room, a handful of demo players, and
/// every roster snapshot logged the way a connected client would see it.
pub async fn run_local() -> Result<()> {
    init_runtime();

    let registry = build_registry();
    let room = registry
        .create_room(config::default_room_id())
        .await
        .map_err(|e| std::io::Error::other(format!("failed to create default room: {e:?}")))?;
    spawn_roster_serializer(&room);

    tracing::info!(room_id = %room.room_id, "room open");

    let mut feed = room.subscribe_json();
    tokio::spawn(async move {
        loop {
            match feed.recv().await {
                Ok(json) => tracing::info!(%json, "roster changed"),
                Err(broadcast::error::RecvError::Lagged(_)) => continue,
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    });

    seed_demo_players(&room, config::demo_player_count()).await?;

    // Keep the room alive until ctrl-c, like the interactive variant.
    tokio::signal::ctrl_c().await?;
    tracing::info!("shutting down");
    registry.remove_room(&room.room_id).await;

    Ok(())
}

// Joins a few generated players and spreads their sliders so the demo
// leaderboard is not a wall of ties.
async fn seed_demo_players(room: &RoomHandle, count: usize) -> Result<()> {
    for n in 0..count {
        let player_id = Uuid::new_v4().to_string();
        room.join(&player_id)
            .await
            .map_err(|e| std::io::Error::other(format!("demo join failed: {e:?}")))?;

        let sliders = BuildingConfig {
            mass: 100 + (n as u32 % 5) * 100,
            stiffness: 0.5 + (n as f64 % 4.0) * 0.5,
            ..BuildingConfig::default()
        };
        room.publish_update(&player_id, sliders)
            .await
            .map_err(|e| std::io::Error::other(format!("demo update failed: {e:?}")))?;
    }

    Ok(())
}
