//! The seeded growth engine and per-player growth state.

pub mod engine;
pub mod profile;

pub use engine::{
    age_factor, apply_growth, evolve_over_months, growth_rate, AttributeDelta, GrowthResult,
    MonthlyGrowth,
};
pub use profile::{
    GrowthHistory, GrowthLogEntry, GrowthProfile, TrainingResponse, TrainingType,
    GROWTH_HISTORY_CAP,
};
