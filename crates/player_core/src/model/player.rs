//! The player aggregate and its seeded generation routine.

use crate::error::{Result, ValidationError};
use crate::growth::profile::{GrowthProfile, TrainingResponse};
use crate::model::attributes::{AttributeId, AttributeRecord};
use crate::model::position::Position;
use crate::model::uid::PersonUid;
use crate::ratings::ability::calculate_ca;
use crate::ratings::summary::{derive_summary, SummaryRatings};
use crate::ratings::weights::ca_weights;
use chrono::{DateTime, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

pub const MIN_AGE: f32 = 15.0;
pub const MAX_AGE: f32 = 18.0;
pub const CA_MAX: u8 = 200;
pub const PA_MIN: u8 = 80;
pub const PA_MAX: u8 = 180;
pub const NAME_MAX_LEN: usize = 60;

/// A simulated player.
///
/// `ca` and `summary` are caches over `attributes` and `position`; every
/// mutation path recomputes them before returning, so a `Player` read from
/// two places never disagrees with itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub uid: PersonUid,
    pub name: String,
    pub position: Position,
    /// Age in years on the academy scale; the `_months` suffix is
    /// historical (months show up as the fractional part, e.g. 16.5).
    /// Valid domain is [15.0, 18.0].
    pub age_months: f32,
    pub attributes: AttributeRecord,
    /// Current Ability, cached. Recomputed on every attribute mutation.
    pub ca: u8,
    /// Potential Ability ceiling. Invariant: `pa >= ca` at all times.
    pub pa: u8,
    /// Cached summary axes, recomputed alongside `ca`.
    pub summary: SummaryRatings,
    pub growth: GrowthProfile,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub fn validate_name(name: &str) -> Result<()> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::InvalidName("name is empty".to_string()));
    }
    if trimmed.len() > NAME_MAX_LEN {
        return Err(ValidationError::InvalidName(format!(
            "name exceeds {NAME_MAX_LEN} bytes"
        )));
    }
    Ok(())
}

pub fn validate_age(age: f32) -> Result<()> {
    if !age.is_finite() || !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(ValidationError::InvalidAge(age));
    }
    Ok(())
}

pub fn validate_pa(pa: u8) -> Result<()> {
    if !(PA_MIN..=PA_MAX).contains(&pa) {
        return Err(ValidationError::InvalidPa(pa));
    }
    Ok(())
}

fn validate_ca_range(min: u8, max: u8) -> Result<()> {
    if min > max || max > CA_MAX {
        return Err(ValidationError::InvalidCaRange(min, max));
    }
    Ok(())
}

fn validate_pa_range(min: u8, max: u8) -> Result<()> {
    if min > max || min < PA_MIN || max > PA_MAX {
        return Err(ValidationError::InvalidPaRange(min, max));
    }
    Ok(())
}

impl Player {
    /// Build a player from an already-complete record. CA and summary are
    /// computed here, never trusted from the caller.
    pub fn new(
        uid: PersonUid,
        name: String,
        position: Position,
        age_months: f32,
        attributes: AttributeRecord,
        pa: u8,
        growth: GrowthProfile,
    ) -> Result<Self> {
        validate_name(&name)?;
        validate_age(age_months)?;
        validate_pa(pa)?;
        let ca = calculate_ca(&attributes, position);
        if pa < ca {
            return Err(ValidationError::PaLessThanCa { ca, pa });
        }
        let summary = derive_summary(&attributes, position);
        let now = Utc::now();
        Ok(Self {
            uid,
            name: name.trim().to_string(),
            position,
            age_months,
            attributes,
            ca,
            pa,
            summary,
            growth,
            created_at: now,
            updated_at: now,
        })
    }

    /// Generate a player whose CA falls inside `ca_range` and PA inside
    /// `pa_range`, fully determined by `seed`.
    ///
    /// The record starts uniform at half the target CA (a uniform record's
    /// weighted average equals its value under any weight table), gets
    /// per-attribute flavor, then walks single-point corrections until the
    /// computed CA re-enters the requested range. Each correction step moves
    /// CA by at most one point, so the walk cannot step over the range.
    pub fn generate(
        uid: PersonUid,
        name: String,
        position: Position,
        age_months: f32,
        ca_range: (u8, u8),
        pa_range: (u8, u8),
        seed: u64,
    ) -> Result<Self> {
        validate_name(&name)?;
        validate_age(age_months)?;
        validate_ca_range(ca_range.0, ca_range.1)?;
        validate_pa_range(pa_range.0, pa_range.1)?;

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let target_ca: u8 = rng.gen_range(ca_range.0..=ca_range.1);
        let base = (target_ca / 2).min(100);

        let weights = ca_weights(position);
        let mut attributes = AttributeRecord::from_uniform(base);

        // Flavor for attributes outside the position's CA subset. These do
        // not move CA, so they can spread freely.
        for id in AttributeId::ALL {
            if weights.get(id) == 0 {
                let spread: i16 = rng.gen_range(-15..=15);
                let value = (base as i16 + spread).clamp(1, 100) as u8;
                attributes.set(id, value);
            }
        }

        // Jitter inside the CA subset, corrected below.
        for id in AttributeId::ALL {
            if weights.get(id) > 0 {
                let jitter: i16 = rng.gen_range(-6..=6);
                let value = (base as i16 + jitter).clamp(0, 100) as u8;
                attributes.set(id, value);
            }
        }

        // Weighted attributes in descending weight order; corrections land on
        // the heaviest first so fewer steps are needed.
        let mut subset: Vec<AttributeId> =
            AttributeId::ALL.iter().copied().filter(|&id| weights.get(id) > 0).collect();
        subset.sort_by_key(|&id| std::cmp::Reverse(weights.get(id)));

        let mut cursor = 0usize;
        for _ in 0..10_000 {
            let ca = calculate_ca(&attributes, position);
            let step: i16 = if ca < ca_range.0 {
                1
            } else if ca > ca_range.1 {
                -1
            } else {
                break;
            };
            // Find the next attribute in the cycle that can still move.
            let mut applied = false;
            for _ in 0..subset.len() {
                let id = subset[cursor];
                cursor = (cursor + 1) % subset.len();
                let value = attributes.get(id) as i16;
                let next = value + step;
                if (0..=100).contains(&next) {
                    attributes.set(id, next as u8);
                    applied = true;
                    break;
                }
            }
            if !applied {
                break;
            }
        }

        let ca = calculate_ca(&attributes, position);
        let pa_floor = pa_range.0.max(ca);
        if pa_floor > pa_range.1 {
            return Err(ValidationError::PaLessThanCa { ca, pa: pa_range.1 });
        }
        let pa: u8 = rng.gen_range(pa_floor..=pa_range.1);

        let training_response = match rng.gen_range(0u8..4) {
            0 => TrainingResponse::balanced(),
            1 => TrainingResponse::technical_focused(),
            2 => TrainingResponse::physical_focused(),
            _ => TrainingResponse::mental_focused(),
        };
        let growth = GrowthProfile {
            training_response,
            growth_rate: rng.gen_range(0.7..=1.0),
            sessions_completed: 0,
            history: Default::default(),
        };

        let summary = derive_summary(&attributes, position);
        let now = Utc::now();
        Ok(Self {
            uid,
            name: name.trim().to_string(),
            position,
            age_months,
            attributes,
            ca,
            pa,
            summary,
            growth,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Recompute the CA and summary caches from the record.
    pub fn refresh_derived(&mut self) {
        self.ca = calculate_ca(&self.attributes, self.position);
        self.summary = derive_summary(&self.attributes, self.position);
        self.touch();
    }

    /// True once CA has reached the potential ceiling.
    pub fn is_capped(&self) -> bool {
        self.ca >= self.pa
    }

    /// External edit of a single attribute. Rejects out-of-range values and
    /// edits that would push CA above PA.
    pub fn set_attribute(&mut self, id: AttributeId, value: u8) -> Result<()> {
        if value > 100 {
            return Err(ValidationError::InvalidAttributeValue {
                attribute: id.name(),
                value,
            });
        }
        let previous = self.attributes.get(id);
        self.attributes.set(id, value);
        let ca = calculate_ca(&self.attributes, self.position);
        if ca > self.pa {
            self.attributes.set(id, previous);
            return Err(ValidationError::PaLessThanCa { ca, pa: self.pa });
        }
        self.refresh_derived();
        Ok(())
    }

    /// External edit of identity fields.
    pub fn rename(&mut self, name: String) -> Result<()> {
        validate_name(&name)?;
        self.name = name.trim().to_string();
        self.touch();
        Ok(())
    }
}
