// In-memory room roster with upsert-by-player semantics and score ordering.

use crate::domain::building::BuildingConfig;
use crate::domain::errors::ScoreError;
use crate::domain::scoring::compute_base_shear;

/// One player's latest configuration plus the derived score.
#[derive(Debug, Clone)]
pub struct RosterEntry {
    pub player_id: String,
    pub config: BuildingConfig,
    pub base_shear: u32,
}

/// Ranked leaderboard row. Lowest base shear ranks first; flagged with the
/// product team whether that polarity is intended, reproduced as shipped.
#[derive(Debug, Clone)]
pub struct Standing {
    /// 1-based leaderboard position.
    pub rank: u32,
    pub player_id: String,
    pub config: BuildingConfig,
    pub base_shear: u32,
}

/// Keyed store of every player in a room. Last writer per key wins; no
/// cross-entry mutation ever happens, so no further ordering guarantee is
/// needed.
#[derive(Debug, Default)]
pub struct Roster {
    // Vec keeps insertion order, which doubles as the tie-break for equal
    // scores. Rooms are small, so linear lookups are fine.
    entries: Vec<RosterEntry>,
}

impl Roster {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserts or replaces a player's configuration.
    ///
    /// The score is computed before anything is mutated, so a rejected
    /// update leaves the roster untouched. A returning player keeps their
    /// original insertion slot.
    pub fn upsert(&mut self, player_id: &str, config: BuildingConfig) -> Result<u32, ScoreError> {
        let base_shear = compute_base_shear(&config)?;

        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|entry| entry.player_id == player_id)
        {
            entry.config = config;
            entry.base_shear = base_shear;
        } else {
            self.entries.push(RosterEntry {
                player_id: player_id.to_string(),
                config,
                base_shear,
            });
        }

        Ok(base_shear)
    }

    /// Removes a player. Returns whether an entry was present.
    pub fn remove(&mut self, player_id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.player_id != player_id);
        self.entries.len() != before
    }

    pub fn get(&self, player_id: &str) -> Option<&RosterEntry> {
        self.entries
            .iter()
            .find(|entry| entry.player_id == player_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Full standings, ascending by base shear. The sort is stable, so equal
    /// scores keep roster insertion order.
    pub fn standings(&self) -> Vec<Standing> {
        let mut ordered: Vec<&RosterEntry> = self.entries.iter().collect();
        ordered.sort_by_key(|entry| entry.base_shear);

        ordered
            .into_iter()
            .enumerate()
            .map(|(position, entry)| Standing {
                rank: position as u32 + 1,
                player_id: entry.player_id.clone(),
                config: entry.config,
                base_shear: entry.base_shear,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::building::{SoilClass, Zone};

    // Mass is the only knob varied, so shear orders the same way mass does.
    fn config_with_mass(mass: u32) -> BuildingConfig {
        BuildingConfig {
            mass,
            ..BuildingConfig::default()
        }
    }

    #[test]
    fn empty_roster_has_empty_standings() {
        let roster = Roster::new();
        assert!(roster.is_empty());
        assert!(roster.standings().is_empty());
    }

    #[test]
    fn standings_sort_ascending_by_base_shear() {
        let mut roster = Roster::new();
        roster.upsert("a", config_with_mass(500)).expect("valid");
        roster.upsert("b", config_with_mass(100)).expect("valid");
        roster.upsert("c", config_with_mass(300)).expect("valid");

        let standings = roster.standings();
        let order: Vec<&str> = standings.iter().map(|s| s.player_id.as_str()).collect();
        assert_eq!(order, vec!["b", "c", "a"]);
        assert_eq!(standings[0].rank, 1);
        assert_eq!(standings[2].rank, 3);
    }

    #[test]
    fn equal_scores_keep_insertion_order() {
        let mut roster = Roster::new();
        roster.upsert("a", config_with_mass(500)).expect("valid");
        roster.upsert("b", config_with_mass(300)).expect("valid");
        roster.upsert("c", config_with_mass(300)).expect("valid");

        let order: Vec<String> = roster
            .standings()
            .into_iter()
            .map(|s| s.player_id)
            .collect();
        assert_eq!(order, vec!["b", "c", "a"]);
    }

    #[test]
    fn updating_a_player_keeps_their_tie_break_slot() {
        let mut roster = Roster::new();
        roster.upsert("first", config_with_mass(300)).expect("valid");
        roster.upsert("second", config_with_mass(300)).expect("valid");

        // Re-publishing the same sliders must not push "first" behind
        // "second" in a tie.
        roster.upsert("first", config_with_mass(300)).expect("valid");

        let order: Vec<String> = roster
            .standings()
            .into_iter()
            .map(|s| s.player_id)
            .collect();
        assert_eq!(order, vec!["first", "second"]);
    }

    #[test]
    fn upsert_overwrites_the_existing_entry() {
        let mut roster = Roster::new();
        roster.upsert("a", config_with_mass(100)).expect("valid");
        roster.upsert("a", config_with_mass(500)).expect("valid");

        assert_eq!(roster.len(), 1);
        let entry = roster.get("a").expect("entry should exist");
        assert_eq!(entry.config.mass, 500);
    }

    #[test]
    fn rejected_update_leaves_the_roster_untouched() {
        let mut roster = Roster::new();
        roster.upsert("a", config_with_mass(200)).expect("valid");
        let shear_before = roster.get("a").expect("entry").base_shear;

        let result = roster.upsert(
            "a",
            BuildingConfig {
                stiffness: 0.0,
                ..BuildingConfig::default()
            },
        );

        assert!(matches!(result, Err(ScoreError::InvalidInput { .. })));
        assert_eq!(roster.get("a").expect("entry").base_shear, shear_before);
    }

    #[test]
    fn remove_reports_whether_a_player_was_present() {
        let mut roster = Roster::new();
        roster.upsert("a", config_with_mass(200)).expect("valid");

        assert!(roster.remove("a"));
        assert!(!roster.remove("a"));
        assert!(roster.is_empty());
    }

    #[test]
    fn upsert_returns_the_derived_score() {
        let mut roster = Roster::new();
        let shear = roster
            .upsert(
                "a",
                BuildingConfig {
                    mass: 500,
                    stiffness: 0.5,
                    zone: Zone::Z6,
                    soil: SoilClass::D,
                },
            )
            .expect("valid");
        assert_eq!(shear, 2800);
    }
}
