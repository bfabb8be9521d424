//! Core domain types: positions, attribute records, identity, the player
//! aggregate.

pub mod attributes;
pub mod player;
pub mod position;
pub mod uid;

pub use attributes::{
    weighted_average, AttributeGroup, AttributeId, AttributeRecord, WeightVector, ATTRIBUTE_COUNT,
};
pub use player::Player;
pub use position::{Position, POSITION_COUNT};
pub use uid::{parse_uid, PersonUid};
