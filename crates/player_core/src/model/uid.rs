//! Canonical player identity and the external encodings it resolves from.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical unsigned identity for a player record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonUid(pub u32);

impl fmt::Display for PersonUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Resolve an external UID encoding to its canonical form.
///
/// Accepted forms, all mapping to the same UID:
/// - `<u32>`
/// - `csv:<u32>`
/// - `csv_<u32>`
///
/// Anything else is [`ValidationError::InvalidUidFormat`], never a guess.
pub fn parse_uid(input: &str) -> Result<PersonUid, ValidationError> {
    let s = input.trim();
    let digits = if let Some(rest) = s.strip_prefix("csv:") {
        rest.trim()
    } else if let Some(rest) = s.strip_prefix("csv_") {
        rest.trim()
    } else {
        s
    };
    digits
        .parse::<u32>()
        .map(PersonUid)
        .map_err(|_| ValidationError::InvalidUidFormat(input.to_string()))
}
