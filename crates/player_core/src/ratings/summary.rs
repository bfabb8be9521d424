//! Summary rating derivation.
//!
//! Projects the 42-attribute record onto the six human-facing axes shown in
//! the player UI. Derived and cached, never authoritative: always
//! reproducible from the record and the position.

use crate::model::attributes::{weighted_average, AttributeRecord};
use crate::model::position::Position;
use crate::ratings::weights::{summary_weights, SUMMARY_AXES};
use serde::{Deserialize, Serialize};

/// Six position-weighted aggregates, each in [1,20].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummaryRatings {
    pub pace: u8,
    pub power: u8,
    pub technical: u8,
    pub shooting: u8,
    pub passing: u8,
    pub defending: u8,
}

impl SummaryRatings {
    pub fn total(&self) -> u16 {
        self.as_array().iter().map(|&v| v as u16).sum()
    }

    pub fn as_array(&self) -> [u8; SUMMARY_AXES] {
        [self.pace, self.power, self.technical, self.shooting, self.passing, self.defending]
    }
}

impl Default for SummaryRatings {
    fn default() -> Self {
        Self { pace: 10, power: 10, technical: 10, shooting: 10, passing: 10, defending: 10 }
    }
}

/// Derive the six summary axes for a record.
///
/// Per axis: weighted average on the [0,100] attribute scale, linearly
/// rescaled to the [1,20] display scale (divide by 5, round, clamp). Pure
/// and idempotent; records reaching this function are complete, the
/// validation gate guarantees it.
pub fn derive_summary(record: &AttributeRecord, position: Position) -> SummaryRatings {
    let mut axes = [0u8; SUMMARY_AXES];
    for (axis, slot) in axes.iter_mut().enumerate() {
        let avg = weighted_average(record, summary_weights(position, axis));
        *slot = (avg / 5.0).round().clamp(1.0, 20.0) as u8;
    }
    SummaryRatings {
        pace: axes[0],
        power: axes[1],
        technical: axes[2],
        shooting: axes[3],
        passing: axes[4],
        defending: axes[5],
    }
}
