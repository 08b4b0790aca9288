// Domain layer: core scoring types and rules.

pub mod building;
pub mod errors;
pub mod roster;
pub mod scoring;
pub mod tuning;

pub use building::{BuildingConfig, SoilClass, Zone};
pub use errors::ScoreError;
pub use roster::{Roster, RosterEntry, Standing};
pub use scoring::compute_base_shear;
pub use tuning::SliderTuning;
