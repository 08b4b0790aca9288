// Building parameters and the fixed seismic factor tables.

use crate::domain::errors::ScoreError;

/// Seismic intensity zone, tier 1 through 6.
///
/// The legacy factor chart reserves a zeroth slot that no control can reach;
/// raw index 0 is therefore rejected at conversion time instead of being
/// carried around as a dead table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Zone {
    Z1,
    Z2,
    Z3,
    Z4,
    Z5,
    Z6,
}

impl Zone {
    /// Intensity factor for this zone. Total over the enum.
    pub fn factor(self) -> f64 {
        match self {
            Zone::Z1 => 0.8,
            Zone::Z2 => 1.0,
            Zone::Z3 => 1.2,
            Zone::Z4 => 1.5,
            Zone::Z5 => 1.8,
            Zone::Z6 => 2.0,
        }
    }

    /// Raw slider index (1-based) for wire transmission.
    pub fn index(self) -> u8 {
        match self {
            Zone::Z1 => 1,
            Zone::Z2 => 2,
            Zone::Z3 => 3,
            Zone::Z4 => 4,
            Zone::Z5 => 5,
            Zone::Z6 => 6,
        }
    }
}

impl TryFrom<u8> for Zone {
    type Error = ScoreError;

    fn try_from(raw: u8) -> Result<Self, ScoreError> {
        match raw {
            1 => Ok(Zone::Z1),
            2 => Ok(Zone::Z2),
            3 => Ok(Zone::Z3),
            4 => Ok(Zone::Z4),
            5 => Ok(Zone::Z5),
            6 => Ok(Zone::Z6),
            _ => Err(ScoreError::InvalidInput { field: "zone" }),
        }
    }
}

/// Soil class A through D, ordered by ground amplification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SoilClass {
    A,
    B,
    C,
    D,
}

impl SoilClass {
    /// Amplification factor for this soil class. Total over the enum.
    pub fn factor(self) -> f64 {
        match self {
            SoilClass::A => 1.0,
            SoilClass::B => 1.1,
            SoilClass::C => 1.25,
            SoilClass::D => 1.4,
        }
    }

    /// Raw slider index (0-based) for wire transmission.
    pub fn index(self) -> u8 {
        match self {
            SoilClass::A => 0,
            SoilClass::B => 1,
            SoilClass::C => 2,
            SoilClass::D => 3,
        }
    }

    /// Letter label shown on leaderboards.
    pub fn letter(self) -> char {
        match self {
            SoilClass::A => 'A',
            SoilClass::B => 'B',
            SoilClass::C => 'C',
            SoilClass::D => 'D',
        }
    }
}

impl TryFrom<u8> for SoilClass {
    type Error = ScoreError;

    fn try_from(raw: u8) -> Result<Self, ScoreError> {
        match raw {
            0 => Ok(SoilClass::A),
            1 => Ok(SoilClass::B),
            2 => Ok(SoilClass::C),
            3 => Ok(SoilClass::D),
            _ => Err(ScoreError::InvalidInput { field: "soil" }),
        }
    }
}

/// One player's current slider state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildingConfig {
    /// Building mass, loosely labeled kN in the UI; treated as an opaque
    /// magnitude here.
    pub mass: u32,
    /// Lateral stiffness; higher is stiffer and lowers the shear.
    pub stiffness: f64,
    pub zone: Zone,
    pub soil: SoilClass,
}

impl Default for BuildingConfig {
    // Join-time slider defaults.
    fn default() -> Self {
        Self {
            mass: 300,
            stiffness: 1.0,
            zone: Zone::Z3,
            soil: SoilClass::B,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_indices_round_trip_for_the_playable_range() {
        for raw in 1..=6u8 {
            let zone = Zone::try_from(raw).expect("playable zone index");
            assert_eq!(zone.index(), raw);
        }
    }

    #[test]
    fn zone_index_zero_is_rejected() {
        assert!(matches!(
            Zone::try_from(0),
            Err(ScoreError::InvalidInput { field: "zone" })
        ));
    }

    #[test]
    fn zone_index_above_six_is_rejected() {
        assert!(matches!(
            Zone::try_from(7),
            Err(ScoreError::InvalidInput { field: "zone" })
        ));
    }

    #[test]
    fn soil_indices_round_trip() {
        for raw in 0..=3u8 {
            let soil = SoilClass::try_from(raw).expect("valid soil index");
            assert_eq!(soil.index(), raw);
        }
    }

    #[test]
    fn soil_index_above_three_is_rejected() {
        assert!(matches!(
            SoilClass::try_from(4),
            Err(ScoreError::InvalidInput { field: "soil" })
        ));
    }

    #[test]
    fn soil_letters_match_the_ui_labels() {
        assert_eq!(SoilClass::A.letter(), 'A');
        assert_eq!(SoilClass::D.letter(), 'D');
    }

    #[test]
    fn default_config_matches_join_time_sliders() {
        let config = BuildingConfig::default();
        assert_eq!(config.mass, 300);
        assert_eq!(config.stiffness, 1.0);
        assert_eq!(config.zone, Zone::Z3);
        assert_eq!(config.soil, SoilClass::B);
    }
}
