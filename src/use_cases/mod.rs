// Use cases layer: application workflows for rooms and rosters.

pub mod registry;
pub mod room;
pub mod types;

pub use registry::{RoomError, RoomHandle, RoomRegistry, RoomSettings};
pub use types::{RoomEvent, RosterUpdate};
