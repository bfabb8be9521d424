//! Error taxonomy for the player core.
//!
//! Three tiers: [`ValidationError`] is always surfaced to the caller and
//! never silently corrected; [`CompletenessWarning`] records a lenient-mode
//! attribute fill as countable metadata, not a failure; [`CapacityAdvisory`]
//! is purely informational pool telemetry.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Malformed or out-of-range input, rejected before it can enter simulation.
/// Every variant names the offending value so gate rejections identify the
/// record and the rule, not a generic failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("invalid UID format {0:?} (supported: <u32>, csv:<u32>, csv_<u32>)")]
    InvalidUidFormat(String),

    #[error("invalid name: {0}")]
    InvalidName(String),

    #[error("invalid age {0}: must be between 15.0 and 18.0")]
    InvalidAge(f32),

    #[error("invalid CA {0}: must be between 0 and 200")]
    InvalidCa(u16),

    #[error("invalid PA {0}: must be between 80 and 180")]
    InvalidPa(u8),

    #[error("PA ({pa}) must be >= CA ({ca})")]
    PaLessThanCa { ca: u8, pa: u8 },

    #[error("invalid CA range ({0}, {1})")]
    InvalidCaRange(u8, u8),

    #[error("invalid PA range ({0}, {1})")]
    InvalidPaRange(u8, u8),

    #[error("unknown position {0:?}")]
    UnknownPosition(String),

    #[error("unknown attribute {0:?}")]
    UnknownAttribute(String),

    #[error("invalid value {value} for attribute {attribute}: must be between 0 and 100")]
    InvalidAttributeValue { attribute: &'static str, value: u8 },

    #[error("player {uid} is missing attribute {attribute}")]
    MissingAttribute { uid: u32, attribute: &'static str },

    #[error("seed is required: this core never derives one")]
    MissingSeed,

    #[error("invalid training intensity {0}: must be between 0.0 and 2.0")]
    InvalidIntensity(f32),

    #[error("batch shape mismatch: {players} players but {sessions} sessions")]
    BatchShapeMismatch { players: usize, sessions: usize },

    #[error("unsupported schema version {0}")]
    UnsupportedSchemaVersion(u8),

    #[error("malformed request: {0}")]
    MalformedRequest(String),
}

impl ValidationError {
    /// Stable machine-readable code for the JSON boundary.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::InvalidUidFormat(_) => "INVALID_UID_FORMAT",
            ValidationError::InvalidName(_) => "INVALID_NAME",
            ValidationError::InvalidAge(_) => "INVALID_AGE",
            ValidationError::InvalidCa(_) => "INVALID_CA",
            ValidationError::InvalidPa(_) => "INVALID_PA",
            ValidationError::PaLessThanCa { .. } => "PA_LESS_THAN_CA",
            ValidationError::InvalidCaRange(_, _) => "INVALID_CA_RANGE",
            ValidationError::InvalidPaRange(_, _) => "INVALID_PA_RANGE",
            ValidationError::UnknownPosition(_) => "UNKNOWN_POSITION",
            ValidationError::UnknownAttribute(_) => "UNKNOWN_ATTRIBUTE",
            ValidationError::InvalidAttributeValue { .. } => "INVALID_ATTRIBUTE_VALUE",
            ValidationError::MissingAttribute { .. } => "MISSING_ATTRIBUTE",
            ValidationError::MissingSeed => "MISSING_SEED",
            ValidationError::InvalidIntensity(_) => "INVALID_INTENSITY",
            ValidationError::BatchShapeMismatch { .. } => "BATCH_SHAPE_MISMATCH",
            ValidationError::UnsupportedSchemaVersion(_) => "UNSUPPORTED_SCHEMA_VERSION",
            ValidationError::MalformedRequest(_) => "MALFORMED_REQUEST",
        }
    }
}

/// A lenient-mode fill of one missing attribute. Counted and surfaced as
/// metadata alongside the successful result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletenessWarning {
    pub uid: u32,
    pub attribute: String,
    pub filled_with: u8,
}

/// Pool reservation telemetry: emitted when a pool grows past its
/// reservation. Never fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityAdvisory {
    pub reserved: usize,
    pub requested: usize,
}

pub type Result<T> = std::result::Result<T, ValidationError>;
