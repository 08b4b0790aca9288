use crate::domain::building::BuildingConfig;
use crate::domain::errors::ScoreError;

/// Slider ranges for the player-facing building controls.
///
/// Keep this separate from runtime configuration (channel capacities etc.).
/// The engine itself never clamps; these bounds are checked where raw wire
/// values enter the system, mirroring the bounded controls of the UI.
#[derive(Debug, Clone, Copy)]
pub struct SliderTuning {
    /// Lowest selectable building mass.
    pub min_mass: u32,

    /// Highest selectable building mass.
    pub max_mass: u32,

    /// Lowest selectable stiffness.
    pub min_stiffness: f64,

    /// Highest selectable stiffness.
    pub max_stiffness: f64,
}

impl Default for SliderTuning {
    fn default() -> Self {
        Self {
            min_mass: 100,
            max_mass: 500,
            min_stiffness: 0.5,
            max_stiffness: 2.0,
        }
    }
}

impl SliderTuning {
    /// Validates a config against the slider ranges, naming the field that
    /// falls outside them. Every wire-boundary range check goes through
    /// here.
    pub fn check(&self, config: &BuildingConfig) -> Result<(), ScoreError> {
        if !(self.min_mass..=self.max_mass).contains(&config.mass) {
            return Err(ScoreError::InvalidInput { field: "mass" });
        }
        // Require the in-range proof rather than testing for out-of-range:
        // NaN fails both ordered comparisons, so it must land here too.
        if !(config.stiffness >= self.min_stiffness && config.stiffness <= self.max_stiffness) {
            return Err(ScoreError::InvalidInput {
                field: "stiffness",
            });
        }
        Ok(())
    }

    /// Returns true when every field sits inside the slider ranges.
    pub fn allows(&self, config: &BuildingConfig) -> bool {
        self.check(config).is_ok()
    }
}
