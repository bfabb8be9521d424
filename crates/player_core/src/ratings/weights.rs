//! Position-weighted projection tables.
//!
//! The exact weight values are a game-balance parameter, not a correctness
//! requirement; tests assert range and monotonicity properties rather than
//! numeric output. Tables are densified once into arrays indexed by
//! `Position::index()` so hot-path lookups never touch a string or a hash.

use crate::model::attributes::{AttributeId, WeightVector};
use crate::model::position::{Position, POSITION_COUNT};
use once_cell::sync::Lazy;

use AttributeId::*;

/// Number of summary axes (pace/power/technical/shooting/passing/defending).
pub const SUMMARY_AXES: usize = 6;

/// CA weight vector for a position. Wider subset than any single summary
/// axis; goalkeeping attributes carry weight only for goalkeepers.
#[inline]
pub fn ca_weights(position: Position) -> &'static WeightVector {
    &CA_WEIGHTS[position.index()]
}

/// Summary weight vector for one axis of one position.
#[inline]
pub fn summary_weights(position: Position, axis: usize) -> &'static WeightVector {
    &SUMMARY_WEIGHTS[position.index()][axis]
}

static CA_WEIGHTS: Lazy<[WeightVector; POSITION_COUNT]> = Lazy::new(|| {
    let gk = WeightVector::from_sparse(&[
        (GkReflexes, 10),
        (GkHandling, 10),
        (GkOneOnOnes, 7),
        (GkCommandOfArea, 7),
        (GkAerialReach, 6),
        (GkKicking, 5),
        (FirstTouch, 3),
        (Passing, 3),
        (LongThrows, 2),
        (Concentration, 8),
        (Positioning, 7),
        (Anticipation, 6),
        (Decisions, 5),
        (Composure, 5),
        (Bravery, 3),
        (Leadership, 3),
        (Teamwork, 2),
        (Determination, 2),
        (Agility, 8),
        (Jumping, 5),
        (Strength, 4),
        (Balance, 3),
        (Acceleration, 2),
        (Pace, 2),
        (NaturalFitness, 2),
        (Stamina, 2),
    ]);
    let df = WeightVector::from_sparse(&[
        (Marking, 10),
        (Tackling, 10),
        (Heading, 7),
        (Passing, 4),
        (FirstTouch, 3),
        (Technique, 3),
        (Crossing, 2),
        (LongThrows, 2),
        (FreeKicks, 1),
        (Corners, 1),
        (Positioning, 10),
        (Anticipation, 8),
        (Concentration, 7),
        (Decisions, 6),
        (Bravery, 5),
        (Aggression, 4),
        (Determination, 4),
        (Teamwork, 4),
        (WorkRate, 4),
        (Composure, 3),
        (Leadership, 3),
        (Vision, 2),
        (OffTheBall, 1),
        (Strength, 8),
        (Jumping, 7),
        (Pace, 6),
        (Acceleration, 5),
        (Stamina, 5),
        (Balance, 4),
        (Agility, 3),
        (NaturalFitness, 3),
    ]);
    let mf = WeightVector::from_sparse(&[
        (Passing, 10),
        (Technique, 8),
        (FirstTouch, 7),
        (Dribbling, 5),
        (Tackling, 4),
        (Crossing, 4),
        (Marking, 3),
        (LongShots, 3),
        (Finishing, 2),
        (Heading, 2),
        (FreeKicks, 2),
        (Corners, 2),
        (LongThrows, 1),
        (Vision, 9),
        (Decisions, 8),
        (Teamwork, 7),
        (WorkRate, 7),
        (Composure, 5),
        (Anticipation, 5),
        (Positioning, 4),
        (Concentration, 4),
        (OffTheBall, 4),
        (Determination, 3),
        (Flair, 3),
        (Leadership, 2),
        (Aggression, 2),
        (Bravery, 1),
        (Stamina, 8),
        (Acceleration, 5),
        (Pace, 5),
        (Agility, 5),
        (Balance, 4),
        (Strength, 4),
        (NaturalFitness, 4),
        (Jumping, 2),
    ]);
    let fw = WeightVector::from_sparse(&[
        (Finishing, 10),
        (Dribbling, 8),
        (FirstTouch, 8),
        (Technique, 7),
        (LongShots, 6),
        (Heading, 5),
        (Passing, 4),
        (Crossing, 3),
        (PenaltyTaking, 2),
        (FreeKicks, 2),
        (Corners, 1),
        (OffTheBall, 8),
        (Composure, 7),
        (Anticipation, 5),
        (Decisions, 5),
        (Flair, 4),
        (Determination, 3),
        (WorkRate, 3),
        (Vision, 3),
        (Teamwork, 2),
        (Bravery, 2),
        (Concentration, 2),
        (Aggression, 1),
        (Leadership, 1),
        (Acceleration, 8),
        (Pace, 8),
        (Agility, 5),
        (Strength, 5),
        (Stamina, 5),
        (Balance, 4),
        (Jumping, 4),
        (NaturalFitness, 3),
    ]);
    [gk, df, mf, fw]
});

static SUMMARY_WEIGHTS: Lazy<[[WeightVector; SUMMARY_AXES]; POSITION_COUNT]> = Lazy::new(|| {
    [
        goalkeeper_axes(),
        outfield_axes(Position::Defender),
        outfield_axes(Position::Midfielder),
        outfield_axes(Position::Forward),
    ]
});

fn goalkeeper_axes() -> [WeightVector; SUMMARY_AXES] {
    [
        // pace
        WeightVector::from_sparse(&[(Agility, 3), (Acceleration, 2), (Pace, 2)]),
        // power
        WeightVector::from_sparse(&[(GkAerialReach, 3), (Jumping, 2), (Strength, 2)]),
        // technical
        WeightVector::from_sparse(&[(GkHandling, 4), (GkReflexes, 4), (FirstTouch, 1)]),
        // shooting: shot-stopping for a keeper
        WeightVector::from_sparse(&[(GkOneOnOnes, 3), (GkReflexes, 2)]),
        // passing: distribution
        WeightVector::from_sparse(&[(GkKicking, 4), (Passing, 2), (LongThrows, 1), (Vision, 1)]),
        // defending: command of the area
        WeightVector::from_sparse(&[
            (GkCommandOfArea, 4),
            (Positioning, 3),
            (Anticipation, 2),
            (Concentration, 2),
            (Leadership, 1),
        ]),
    ]
}

fn outfield_axes(position: Position) -> [WeightVector; SUMMARY_AXES] {
    let pace = WeightVector::from_sparse(&[
        (Pace, 4),
        (Acceleration, 4),
        (Agility, 2),
        (Balance, 1),
        (OffTheBall, 1),
    ]);
    let power = WeightVector::from_sparse(&[
        (Strength, 3),
        (Stamina, 3),
        (Jumping, 2),
        (NaturalFitness, 1),
        (Heading, 1),
        (Bravery, 1),
    ]);
    let technical = WeightVector::from_sparse(&[
        (Dribbling, 3),
        (FirstTouch, 3),
        (Technique, 3),
        (Composure, 2),
        (Flair, 1),
    ]);
    let shooting = WeightVector::from_sparse(&[
        (Finishing, if position == Position::Forward { 5 } else { 4 }),
        (LongShots, 3),
        (Composure, 2),
        (Technique, 2),
        (PenaltyTaking, 1),
    ]);
    let passing = WeightVector::from_sparse(&[
        (Passing, 4),
        (Vision, if position == Position::Midfielder { 4 } else { 3 }),
        (Crossing, 2),
        (Teamwork, 2),
        (FreeKicks, 1),
        (Corners, 1),
    ]);
    let defending_mark = if position == Position::Defender { 4 } else { 3 };
    let defending = WeightVector::from_sparse(&[
        (Positioning, 4),
        (Marking, defending_mark),
        (Tackling, defending_mark),
        (Anticipation, 3),
        (Concentration, 2),
        (WorkRate, 2),
        (Aggression, 1),
    ]);
    [pace, power, technical, shooting, passing, defending]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_position_has_a_nonempty_ca_vector() {
        for position in Position::ALL {
            assert!(ca_weights(position).total_weight() > 0, "{position} CA table empty");
        }
    }

    #[test]
    fn gk_attributes_carry_ca_weight_only_for_goalkeepers() {
        let gk_attrs =
            [GkAerialReach, GkCommandOfArea, GkHandling, GkKicking, GkOneOnOnes, GkReflexes];
        for position in [Position::Defender, Position::Midfielder, Position::Forward] {
            for id in gk_attrs {
                assert_eq!(ca_weights(position).get(id), 0, "{position} weights {:?}", id);
            }
        }
        assert!(gk_attrs.iter().all(|&id| ca_weights(Position::Goalkeeper).get(id) > 0));
    }

    #[test]
    fn summary_axes_are_all_populated() {
        for position in Position::ALL {
            for axis in 0..SUMMARY_AXES {
                assert!(
                    summary_weights(position, axis).total_weight() > 0,
                    "{position} axis {axis} empty"
                );
            }
        }
    }

    #[test]
    fn forward_values_finishing_more_than_marking() {
        let fw = ca_weights(Position::Forward);
        assert!(fw.get(Finishing) > fw.get(Marking));
        let df = ca_weights(Position::Defender);
        assert!(df.get(Marking) > df.get(Finishing));
    }
}
