//! Seeded growth sessions.
//!
//! A session raises a training-dependent attribute subset by small integer
//! deltas, scaled by a quadratic decay toward the potential ceiling and a
//! quadratic age window. All randomness flows from the caller's seed through
//! one ChaCha8 stream, so a session is a pure function of its inputs.

use crate::error::{Result, ValidationError};
use crate::growth::profile::{GrowthLogEntry, TrainingType};
use crate::model::attributes::AttributeId;
use crate::model::player::Player;
use crate::ratings::ability::calculate_ca;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Growth points budget for a full-rate session, before decay and variance.
/// Sized so a wide CA-PA gap always moves at least one attribute point even
/// at the minimum response multipliers.
const BASE_ATTRIBUTE_POINTS: f32 = 72.0;
/// Per-attribute ceiling for a single session.
const MAX_SESSION_DELTA: i16 = 6;
/// Development peaks here and falls off quadratically on both sides.
const PEAK_DEVELOPMENT_AGE: f32 = 16.5;
const AGE_WINDOW_HALF_WIDTH: f32 = 2.5;

/// One applied attribute change within a session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttributeDelta {
    pub attribute: AttributeId,
    pub old_value: u8,
    pub new_value: u8,
}

impl AttributeDelta {
    pub fn delta(&self) -> i16 {
        self.new_value as i16 - self.old_value as i16
    }
}

/// Outcome of one growth session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GrowthResult {
    pub uid: u32,
    pub training: TrainingType,
    pub seed: u64,
    pub deltas: Vec<AttributeDelta>,
    pub ca_before: u8,
    pub ca_after: u8,
    /// True when this session drove CA up to the potential ceiling.
    pub became_capped: bool,
}

impl GrowthResult {
    pub fn ca_delta(&self) -> i16 {
        self.ca_after as i16 - self.ca_before as i16
    }
}

/// One month of simulated development, from [`evolve_over_months`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyGrowth {
    pub month: u32,
    pub age_months: f32,
    pub ca_start: u8,
    pub ca_end: u8,
    pub sessions: Vec<GrowthResult>,
}

/// Remaining-headroom decay: `(1 - ca/pa)^2`, exactly zero at the ceiling.
///
/// Zero at the ceiling makes capping idempotent; there is no minimum rate
/// that would leak growth past PA.
#[inline]
pub fn growth_rate(ca: u8, pa: u8) -> f32 {
    if pa == 0 || ca >= pa {
        return 0.0;
    }
    let headroom = 1.0 - ca as f32 / pa as f32;
    headroom * headroom
}

/// Quadratic age window centered on the development peak. Zero outside
/// peak +/- half-width.
#[inline]
pub fn age_factor(age: f32) -> f32 {
    let offset = (age - PEAK_DEVELOPMENT_AGE) / AGE_WINDOW_HALF_WIDTH;
    (1.0 - offset * offset).max(0.0)
}

pub fn validate_intensity(intensity: f32) -> Result<()> {
    if !intensity.is_finite() || !(0.0..=2.0).contains(&intensity) {
        return Err(ValidationError::InvalidIntensity(intensity));
    }
    Ok(())
}

/// Apply one training session to a player.
///
/// Deltas are non-negative; training never regresses an attribute. If the
/// raw gains would push CA past PA, the newest gains are walked back one
/// point at a time until CA fits under the ceiling again. A capped player
/// is a no-op, not an error.
pub fn apply_growth(
    player: &mut Player,
    training: TrainingType,
    intensity: f32,
    seed: u64,
) -> Result<GrowthResult> {
    validate_intensity(intensity)?;

    let ca_before = player.ca;
    let mut result = GrowthResult {
        uid: player.uid.0,
        training,
        seed,
        deltas: Vec::new(),
        ca_before,
        ca_after: ca_before,
        became_capped: false,
    };

    // Goalkeeping drills do nothing for outfield players.
    let applicable = training != TrainingType::Goalkeeping || player.position.is_goalkeeper();
    let rate = growth_rate(ca_before, player.pa) * age_factor(player.age_months);
    if !applicable || rate == 0.0 || intensity == 0.0 {
        log_session(player, &result, intensity);
        return Ok(result);
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let session_variance: f32 = rng.gen_range(0.9..=1.1);
    let response = player.growth.training_response.multiplier_for(training)
        * player.growth.growth_rate;

    for &id in training.attributes() {
        let attribute_variance: f32 = rng.gen_range(0.8..=1.2);
        let points =
            BASE_ATTRIBUTE_POINTS * rate * intensity * response * session_variance
                * attribute_variance;
        let delta = (points.round() as i16).clamp(0, MAX_SESSION_DELTA);
        if delta == 0 {
            continue;
        }
        let old_value = player.attributes.get(id);
        let new_value = (old_value as i16 + delta).min(100) as u8;
        if new_value > old_value {
            player.attributes.set(id, new_value);
            result.deltas.push(AttributeDelta { attribute: id, old_value, new_value });
        }
    }

    // Walk gains back until CA fits under the ceiling.
    loop {
        let ca = calculate_ca(&player.attributes, player.position);
        if ca <= player.pa {
            break;
        }
        let mut reduced = false;
        for delta in result.deltas.iter_mut().rev() {
            if delta.new_value > delta.old_value {
                delta.new_value -= 1;
                player.attributes.set(delta.attribute, delta.new_value);
                reduced = true;
                break;
            }
        }
        if !reduced {
            break;
        }
    }
    result.deltas.retain(|d| d.new_value != d.old_value);

    player.refresh_derived();
    result.ca_after = player.ca;
    result.became_capped = ca_before < player.pa && player.ca >= player.pa;

    if result.ca_delta() > 0 {
        tracing::debug!(
            uid = result.uid,
            ca_before,
            ca_after = result.ca_after,
            ?training,
            "growth session applied"
        );
    }
    log_session(player, &result, intensity);
    Ok(result)
}

fn log_session(player: &mut Player, result: &GrowthResult, intensity: f32) {
    player.growth.history.push(GrowthLogEntry {
        training: result.training,
        intensity,
        seed: result.seed,
        ca_delta: result.ca_delta(),
        age_months: player.age_months,
    });
    player.growth.sessions_completed += 1;
}

/// Simulate several months of development. Each month runs one session per
/// schedule entry and advances the player's age by one month; session seeds
/// are drawn from a ChaCha8 stream over the top-level seed.
pub fn evolve_over_months(
    player: &mut Player,
    months: u32,
    schedule: &[(TrainingType, f32)],
    seed: u64,
) -> Result<Vec<MonthlyGrowth>> {
    for &(_, intensity) in schedule {
        validate_intensity(intensity)?;
    }
    let mut seeds = ChaCha8Rng::seed_from_u64(seed);
    let mut timeline = Vec::with_capacity(months as usize);
    for month in 0..months {
        let ca_start = player.ca;
        let mut sessions = Vec::with_capacity(schedule.len());
        for &(training, intensity) in schedule {
            let session_seed: u64 = seeds.gen();
            sessions.push(apply_growth(player, training, intensity, session_seed)?);
        }
        player.age_months += 1.0 / 12.0;
        player.touch();
        timeline.push(MonthlyGrowth {
            month,
            age_months: player.age_months,
            ca_start,
            ca_end: player.ca,
            sessions,
        });
    }
    Ok(timeline)
}
