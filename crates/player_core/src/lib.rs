//! Player simulation core for a football management game.
//!
//! Owns the player model (42-attribute records, position-weighted Current
//! Ability and six summary axes), a seeded growth engine with quadratic
//! decay toward each player's potential ceiling, batch execution over large
//! rosters, and the validation gate every external record passes through
//! before it can enter simulation.
//!
//! Everything stochastic takes a caller-supplied seed; given identical
//! inputs, every operation in this crate returns identical outputs, on any
//! thread, in any batch size.

pub mod api;
pub mod batch;
pub mod error;
pub mod gate;
pub mod growth;
pub mod model;
pub mod ratings;

pub use api::{create_player, create_player_json, ApiResponse, CreatePlayerRequest};
pub use batch::{BatchExecutor, GrowthSession, MemoryStats, PlayerPool, SlotId};
pub use error::{CapacityAdvisory, CompletenessWarning, Result, ValidationError};
pub use gate::{import_roster, preflight_roster, CompletenessMode, RawPlayerRecord};
pub use growth::{apply_growth, evolve_over_months, GrowthProfile, GrowthResult, TrainingType};
pub use model::{
    parse_uid, AttributeId, AttributeRecord, PersonUid, Player, Position, ATTRIBUTE_COUNT,
};
pub use ratings::{calculate_ca, derive_summary, SummaryRatings};

#[cfg(test)]
mod tests;
