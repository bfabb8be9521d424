//! Current Ability (CA) calculation.
//!
//! Single scalar in [0,200] summarizing present skill. Pure, branch-light
//! and allocation-free; the batch executor calls this from worker threads
//! without any coordination. Target latency is well under 100ns per call.

use crate::model::attributes::{weighted_average, AttributeRecord};
use crate::model::position::Position;
use crate::ratings::weights::ca_weights;

/// Weighted average over the position's full CA subset, rescaled from the
/// [0,100] attribute domain to the [0,200] ability domain.
#[inline]
pub fn calculate_ca(record: &AttributeRecord, position: Position) -> u8 {
    let avg = weighted_average(record, ca_weights(position));
    (avg * 2.0).round().clamp(0.0, 200.0) as u8
}
