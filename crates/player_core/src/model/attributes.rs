//! The canonical per-player attribute record.
//!
//! 42 attributes in [0,100], grouped technical/mental/physical/goalkeeping.
//! Field order is fixed and mirrored by [`AttributeId`]; every weight vector
//! in the ratings tables is aligned to this order so hot-path projections
//! index arrays instead of hashing names.

use serde::{Deserialize, Serialize};

/// Number of attributes in a complete record.
pub const ATTRIBUTE_COUNT: usize = 42;

/// Attribute grouping, used by training subsets and import diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttributeGroup {
    Technical,
    Mental,
    Physical,
    Goalkeeping,
}

/// Stable identifier for one attribute. Discriminants are indices into
/// [`AttributeRecord::as_array`] and into every weight vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum AttributeId {
    // Technical (14)
    Corners = 0,
    Crossing,
    Dribbling,
    Finishing,
    FirstTouch,
    FreeKicks,
    Heading,
    LongShots,
    LongThrows,
    Marking,
    Passing,
    PenaltyTaking,
    Tackling,
    Technique,
    // Mental (14)
    Aggression,
    Anticipation,
    Bravery,
    Composure,
    Concentration,
    Decisions,
    Determination,
    Flair,
    Leadership,
    OffTheBall,
    Positioning,
    Teamwork,
    Vision,
    WorkRate,
    // Physical (8)
    Acceleration,
    Agility,
    Balance,
    Jumping,
    NaturalFitness,
    Pace,
    Stamina,
    Strength,
    // Goalkeeping (6)
    GkAerialReach,
    GkCommandOfArea,
    GkHandling,
    GkKicking,
    GkOneOnOnes,
    GkReflexes,
}

impl AttributeId {
    pub const ALL: [AttributeId; ATTRIBUTE_COUNT] = [
        AttributeId::Corners,
        AttributeId::Crossing,
        AttributeId::Dribbling,
        AttributeId::Finishing,
        AttributeId::FirstTouch,
        AttributeId::FreeKicks,
        AttributeId::Heading,
        AttributeId::LongShots,
        AttributeId::LongThrows,
        AttributeId::Marking,
        AttributeId::Passing,
        AttributeId::PenaltyTaking,
        AttributeId::Tackling,
        AttributeId::Technique,
        AttributeId::Aggression,
        AttributeId::Anticipation,
        AttributeId::Bravery,
        AttributeId::Composure,
        AttributeId::Concentration,
        AttributeId::Decisions,
        AttributeId::Determination,
        AttributeId::Flair,
        AttributeId::Leadership,
        AttributeId::OffTheBall,
        AttributeId::Positioning,
        AttributeId::Teamwork,
        AttributeId::Vision,
        AttributeId::WorkRate,
        AttributeId::Acceleration,
        AttributeId::Agility,
        AttributeId::Balance,
        AttributeId::Jumping,
        AttributeId::NaturalFitness,
        AttributeId::Pace,
        AttributeId::Stamina,
        AttributeId::Strength,
        AttributeId::GkAerialReach,
        AttributeId::GkCommandOfArea,
        AttributeId::GkHandling,
        AttributeId::GkKicking,
        AttributeId::GkOneOnOnes,
        AttributeId::GkReflexes,
    ];

    /// Index into record arrays and weight vectors.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Wire/CSV name of the attribute.
    pub fn name(self) -> &'static str {
        match self {
            AttributeId::Corners => "corners",
            AttributeId::Crossing => "crossing",
            AttributeId::Dribbling => "dribbling",
            AttributeId::Finishing => "finishing",
            AttributeId::FirstTouch => "first_touch",
            AttributeId::FreeKicks => "free_kicks",
            AttributeId::Heading => "heading",
            AttributeId::LongShots => "long_shots",
            AttributeId::LongThrows => "long_throws",
            AttributeId::Marking => "marking",
            AttributeId::Passing => "passing",
            AttributeId::PenaltyTaking => "penalty_taking",
            AttributeId::Tackling => "tackling",
            AttributeId::Technique => "technique",
            AttributeId::Aggression => "aggression",
            AttributeId::Anticipation => "anticipation",
            AttributeId::Bravery => "bravery",
            AttributeId::Composure => "composure",
            AttributeId::Concentration => "concentration",
            AttributeId::Decisions => "decisions",
            AttributeId::Determination => "determination",
            AttributeId::Flair => "flair",
            AttributeId::Leadership => "leadership",
            AttributeId::OffTheBall => "off_the_ball",
            AttributeId::Positioning => "positioning",
            AttributeId::Teamwork => "teamwork",
            AttributeId::Vision => "vision",
            AttributeId::WorkRate => "work_rate",
            AttributeId::Acceleration => "acceleration",
            AttributeId::Agility => "agility",
            AttributeId::Balance => "balance",
            AttributeId::Jumping => "jumping",
            AttributeId::NaturalFitness => "natural_fitness",
            AttributeId::Pace => "pace",
            AttributeId::Stamina => "stamina",
            AttributeId::Strength => "strength",
            AttributeId::GkAerialReach => "gk_aerial_reach",
            AttributeId::GkCommandOfArea => "gk_command_of_area",
            AttributeId::GkHandling => "gk_handling",
            AttributeId::GkKicking => "gk_kicking",
            AttributeId::GkOneOnOnes => "gk_one_on_ones",
            AttributeId::GkReflexes => "gk_reflexes",
        }
    }

    /// Reverse of [`AttributeId::name`], for flat import records.
    pub fn from_name(name: &str) -> Option<AttributeId> {
        AttributeId::ALL.iter().copied().find(|id| id.name() == name)
    }

    pub fn group(self) -> AttributeGroup {
        match self.index() {
            0..=13 => AttributeGroup::Technical,
            14..=27 => AttributeGroup::Mental,
            28..=35 => AttributeGroup::Physical,
            _ => AttributeGroup::Goalkeeping,
        }
    }
}

/// Fixed-size weight vector aligned to [`AttributeId`] order.
///
/// Tables are densified once at startup from readable sparse pairs; lookups
/// on the hot path are plain array indexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightVector(pub [u8; ATTRIBUTE_COUNT]);

impl WeightVector {
    /// Build a dense vector from sparse `(attribute, weight)` pairs.
    pub fn from_sparse(pairs: &[(AttributeId, u8)]) -> Self {
        let mut dense = [0u8; ATTRIBUTE_COUNT];
        for &(id, weight) in pairs {
            dense[id.index()] = weight;
        }
        WeightVector(dense)
    }

    #[inline]
    pub fn get(&self, id: AttributeId) -> u8 {
        self.0[id.index()]
    }

    pub fn total_weight(&self) -> u32 {
        self.0.iter().map(|&w| w as u32).sum()
    }
}

/// The complete 42-attribute skill record, each value in [0,100].
///
/// Completeness (every key present) is enforced by the validation gate on
/// import; once a record exists it is complete by construction.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttributeRecord {
    // Technical (14)
    pub corners: u8,
    pub crossing: u8,
    pub dribbling: u8,
    pub finishing: u8,
    pub first_touch: u8,
    pub free_kicks: u8,
    pub heading: u8,
    pub long_shots: u8,
    pub long_throws: u8,
    pub marking: u8,
    pub passing: u8,
    pub penalty_taking: u8,
    pub tackling: u8,
    pub technique: u8,
    // Mental (14)
    pub aggression: u8,
    pub anticipation: u8,
    pub bravery: u8,
    pub composure: u8,
    pub concentration: u8,
    pub decisions: u8,
    pub determination: u8,
    pub flair: u8,
    pub leadership: u8,
    pub off_the_ball: u8,
    pub positioning: u8,
    pub teamwork: u8,
    pub vision: u8,
    pub work_rate: u8,
    // Physical (8)
    pub acceleration: u8,
    pub agility: u8,
    pub balance: u8,
    pub jumping: u8,
    pub natural_fitness: u8,
    pub pace: u8,
    pub stamina: u8,
    pub strength: u8,
    // Goalkeeping (6)
    pub gk_aerial_reach: u8,
    pub gk_command_of_area: u8,
    pub gk_handling: u8,
    pub gk_kicking: u8,
    pub gk_one_on_ones: u8,
    pub gk_reflexes: u8,
}

impl AttributeRecord {
    /// Record with every attribute set to `value`.
    pub fn from_uniform(value: u8) -> Self {
        let mut record = AttributeRecord::default();
        for id in AttributeId::ALL {
            record.set(id, value);
        }
        record
    }

    #[inline]
    pub fn get(&self, id: AttributeId) -> u8 {
        match id {
            AttributeId::Corners => self.corners,
            AttributeId::Crossing => self.crossing,
            AttributeId::Dribbling => self.dribbling,
            AttributeId::Finishing => self.finishing,
            AttributeId::FirstTouch => self.first_touch,
            AttributeId::FreeKicks => self.free_kicks,
            AttributeId::Heading => self.heading,
            AttributeId::LongShots => self.long_shots,
            AttributeId::LongThrows => self.long_throws,
            AttributeId::Marking => self.marking,
            AttributeId::Passing => self.passing,
            AttributeId::PenaltyTaking => self.penalty_taking,
            AttributeId::Tackling => self.tackling,
            AttributeId::Technique => self.technique,
            AttributeId::Aggression => self.aggression,
            AttributeId::Anticipation => self.anticipation,
            AttributeId::Bravery => self.bravery,
            AttributeId::Composure => self.composure,
            AttributeId::Concentration => self.concentration,
            AttributeId::Decisions => self.decisions,
            AttributeId::Determination => self.determination,
            AttributeId::Flair => self.flair,
            AttributeId::Leadership => self.leadership,
            AttributeId::OffTheBall => self.off_the_ball,
            AttributeId::Positioning => self.positioning,
            AttributeId::Teamwork => self.teamwork,
            AttributeId::Vision => self.vision,
            AttributeId::WorkRate => self.work_rate,
            AttributeId::Acceleration => self.acceleration,
            AttributeId::Agility => self.agility,
            AttributeId::Balance => self.balance,
            AttributeId::Jumping => self.jumping,
            AttributeId::NaturalFitness => self.natural_fitness,
            AttributeId::Pace => self.pace,
            AttributeId::Stamina => self.stamina,
            AttributeId::Strength => self.strength,
            AttributeId::GkAerialReach => self.gk_aerial_reach,
            AttributeId::GkCommandOfArea => self.gk_command_of_area,
            AttributeId::GkHandling => self.gk_handling,
            AttributeId::GkKicking => self.gk_kicking,
            AttributeId::GkOneOnOnes => self.gk_one_on_ones,
            AttributeId::GkReflexes => self.gk_reflexes,
        }
    }

    #[inline]
    pub fn set(&mut self, id: AttributeId, value: u8) {
        let slot = match id {
            AttributeId::Corners => &mut self.corners,
            AttributeId::Crossing => &mut self.crossing,
            AttributeId::Dribbling => &mut self.dribbling,
            AttributeId::Finishing => &mut self.finishing,
            AttributeId::FirstTouch => &mut self.first_touch,
            AttributeId::FreeKicks => &mut self.free_kicks,
            AttributeId::Heading => &mut self.heading,
            AttributeId::LongShots => &mut self.long_shots,
            AttributeId::LongThrows => &mut self.long_throws,
            AttributeId::Marking => &mut self.marking,
            AttributeId::Passing => &mut self.passing,
            AttributeId::PenaltyTaking => &mut self.penalty_taking,
            AttributeId::Tackling => &mut self.tackling,
            AttributeId::Technique => &mut self.technique,
            AttributeId::Aggression => &mut self.aggression,
            AttributeId::Anticipation => &mut self.anticipation,
            AttributeId::Bravery => &mut self.bravery,
            AttributeId::Composure => &mut self.composure,
            AttributeId::Concentration => &mut self.concentration,
            AttributeId::Decisions => &mut self.decisions,
            AttributeId::Determination => &mut self.determination,
            AttributeId::Flair => &mut self.flair,
            AttributeId::Leadership => &mut self.leadership,
            AttributeId::OffTheBall => &mut self.off_the_ball,
            AttributeId::Positioning => &mut self.positioning,
            AttributeId::Teamwork => &mut self.teamwork,
            AttributeId::Vision => &mut self.vision,
            AttributeId::WorkRate => &mut self.work_rate,
            AttributeId::Acceleration => &mut self.acceleration,
            AttributeId::Agility => &mut self.agility,
            AttributeId::Balance => &mut self.balance,
            AttributeId::Jumping => &mut self.jumping,
            AttributeId::NaturalFitness => &mut self.natural_fitness,
            AttributeId::Pace => &mut self.pace,
            AttributeId::Stamina => &mut self.stamina,
            AttributeId::Strength => &mut self.strength,
            AttributeId::GkAerialReach => &mut self.gk_aerial_reach,
            AttributeId::GkCommandOfArea => &mut self.gk_command_of_area,
            AttributeId::GkHandling => &mut self.gk_handling,
            AttributeId::GkKicking => &mut self.gk_kicking,
            AttributeId::GkOneOnOnes => &mut self.gk_one_on_ones,
            AttributeId::GkReflexes => &mut self.gk_reflexes,
        };
        *slot = value;
    }

    /// Snapshot in [`AttributeId`] order.
    pub fn as_array(&self) -> [u8; ATTRIBUTE_COUNT] {
        let mut out = [0u8; ATTRIBUTE_COUNT];
        for id in AttributeId::ALL {
            out[id.index()] = self.get(id);
        }
        out
    }
}

/// Weighted average of a record against a weight vector, on the [0,100]
/// attribute scale.
///
/// Accumulates in integers over the fixed field order, so identical inputs
/// always produce bit-identical results regardless of call site or thread.
/// Returns 0.0 for an all-zero weight vector.
pub fn weighted_average(record: &AttributeRecord, weights: &WeightVector) -> f32 {
    let mut weighted_sum: u32 = 0;
    let mut weight_sum: u32 = 0;
    for id in AttributeId::ALL {
        let w = weights.get(id) as u32;
        if w == 0 {
            continue;
        }
        weighted_sum += w * record.get(id) as u32;
        weight_sum += w;
    }
    if weight_sum == 0 {
        0.0
    } else {
        weighted_sum as f32 / weight_sum as f32
    }
}
