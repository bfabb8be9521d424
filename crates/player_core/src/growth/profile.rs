//! Per-player growth state: response parameters and the session audit log.
//!
//! Nothing in here is random. All variance enters through the seed passed
//! into each growth operation; the profile only stores base parameters and
//! what has already happened.

use crate::model::attributes::AttributeId;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Session history cap. The log exists for audit/debugging only, so it is a
/// ring buffer rather than an ever-appending list.
pub const GROWTH_HISTORY_CAP: usize = 64;

/// Training focus for a growth session. Selects which attribute subset
/// receives the gain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrainingType {
    Technical,
    Physical,
    Mental,
    Tactical,
    Goalkeeping,
}

impl TrainingType {
    /// Attributes touched by this training focus.
    pub fn attributes(self) -> &'static [AttributeId] {
        use AttributeId::*;
        match self {
            TrainingType::Technical => &[Dribbling, FirstTouch, Technique, Flair],
            TrainingType::Physical => {
                &[Pace, Acceleration, Strength, Stamina, Jumping, NaturalFitness]
            }
            TrainingType::Mental => {
                &[Decisions, Concentration, Composure, Leadership, Determination, WorkRate]
            }
            TrainingType::Tactical => {
                &[Positioning, Anticipation, Teamwork, Vision, OffTheBall]
            }
            TrainingType::Goalkeeping => {
                &[GkAerialReach, GkCommandOfArea, GkHandling, GkKicking, GkOneOnOnes, GkReflexes]
            }
        }
    }
}

/// Training response multipliers, each in [0.5, 2.0].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TrainingResponse {
    pub technical_multiplier: f32,
    pub physical_multiplier: f32,
    pub mental_multiplier: f32,
}

impl TrainingResponse {
    pub fn balanced() -> Self {
        Self { technical_multiplier: 1.0, physical_multiplier: 1.0, mental_multiplier: 1.0 }
    }

    pub fn technical_focused() -> Self {
        Self { technical_multiplier: 1.5, physical_multiplier: 0.8, mental_multiplier: 1.0 }
    }

    pub fn physical_focused() -> Self {
        Self { technical_multiplier: 0.8, physical_multiplier: 1.5, mental_multiplier: 1.0 }
    }

    pub fn mental_focused() -> Self {
        Self { technical_multiplier: 1.0, physical_multiplier: 0.8, mental_multiplier: 1.5 }
    }

    pub fn is_valid(&self) -> bool {
        let in_range = |v: f32| (0.5..=2.0).contains(&v);
        in_range(self.technical_multiplier)
            && in_range(self.physical_multiplier)
            && in_range(self.mental_multiplier)
    }

    /// Multiplier applied to a session of the given focus.
    pub fn multiplier_for(&self, training: TrainingType) -> f32 {
        match training {
            TrainingType::Technical | TrainingType::Goalkeeping => self.technical_multiplier,
            TrainingType::Physical => self.physical_multiplier,
            TrainingType::Mental | TrainingType::Tactical => self.mental_multiplier,
        }
    }
}

impl Default for TrainingResponse {
    fn default() -> Self {
        Self::balanced()
    }
}

/// One completed session, kept for audit/debugging.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GrowthLogEntry {
    pub training: TrainingType,
    pub intensity: f32,
    pub seed: u64,
    pub ca_delta: i16,
    pub age_months: f32,
}

/// Capped ring buffer of recent sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GrowthHistory {
    entries: VecDeque<GrowthLogEntry>,
}

impl GrowthHistory {
    pub fn push(&mut self, entry: GrowthLogEntry) {
        if self.entries.len() == GROWTH_HISTORY_CAP {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GrowthLogEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&GrowthLogEntry> {
        self.entries.back()
    }
}

/// Per-player growth parameters and cumulative training record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GrowthProfile {
    pub training_response: TrainingResponse,
    /// Base growth multiplier in [0.0, 1.0]... scaled against the decay curve.
    pub growth_rate: f32,
    pub sessions_completed: u32,
    #[serde(default)]
    pub history: GrowthHistory,
}

impl GrowthProfile {
    pub fn new() -> Self {
        Self {
            training_response: TrainingResponse::balanced(),
            growth_rate: 1.0,
            sessions_completed: 0,
            history: GrowthHistory::default(),
        }
    }
}

impl Default for GrowthProfile {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_never_exceeds_the_cap() {
        let mut history = GrowthHistory::default();
        for i in 0..(GROWTH_HISTORY_CAP as u64 + 40) {
            history.push(GrowthLogEntry {
                training: TrainingType::Technical,
                intensity: 1.0,
                seed: i,
                ca_delta: 0,
                age_months: 16.0,
            });
        }
        assert_eq!(history.len(), GROWTH_HISTORY_CAP);
        // Oldest entries were evicted first.
        assert_eq!(history.iter().next().unwrap().seed, 40);
        assert_eq!(history.latest().unwrap().seed, GROWTH_HISTORY_CAP as u64 + 39);
    }

    #[test]
    fn response_validation_bounds() {
        assert!(TrainingResponse::balanced().is_valid());
        assert!(TrainingResponse::technical_focused().is_valid());
        let invalid = TrainingResponse {
            technical_multiplier: 3.0,
            physical_multiplier: 1.0,
            mental_multiplier: 1.0,
        };
        assert!(!invalid.is_valid());
    }

    #[test]
    fn training_subsets_are_nonempty_and_disjoint_from_gk_except_goalkeeping() {
        for training in [
            TrainingType::Technical,
            TrainingType::Physical,
            TrainingType::Mental,
            TrainingType::Tactical,
        ] {
            assert!(!training.attributes().is_empty());
            assert!(training
                .attributes()
                .iter()
                .all(|id| id.group() != crate::model::attributes::AttributeGroup::Goalkeeping));
        }
        assert!(TrainingType::Goalkeeping
            .attributes()
            .iter()
            .all(|id| id.group() == crate::model::attributes::AttributeGroup::Goalkeeping));
    }
}
