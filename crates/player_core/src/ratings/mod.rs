//! Derived ratings: CA, summary axes and the weight tables behind them.

pub mod ability;
pub mod summary;
pub mod weights;

pub use ability::calculate_ca;
pub use summary::{derive_summary, SummaryRatings};
pub use weights::{ca_weights, summary_weights, SUMMARY_AXES};
