// Base shear computation for a single building configuration.

use crate::domain::building::BuildingConfig;
use crate::domain::errors::ScoreError;

/// Computes the base shear metric for one building:
/// `round(mass * zone_factor * soil_factor / stiffness)`.
///
/// Rounds half away from zero, which for these strictly positive inputs is
/// the same half-up behavior the original design charts assume.
///
/// Referentially transparent; the only failure is non-positive or non-finite
/// stiffness, which would otherwise divide the score into NaN/Infinity.
pub fn compute_base_shear(config: &BuildingConfig) -> Result<u32, ScoreError> {
    if !config.stiffness.is_finite() || config.stiffness <= 0.0 {
        return Err(ScoreError::InvalidInput {
            field: "stiffness",
        });
    }

    let raw =
        f64::from(config.mass) * config.zone.factor() * config.soil.factor() / config.stiffness;

    Ok(raw.round() as u32)
}
