//! Identity resolution and the attribute-completeness gate.
//!
//! The single chokepoint between external roster data and simulation. Pure
//! calculators downstream assume complete records; that assumption is
//! earned here, never re-checked on the hot path.

use crate::error::{CompletenessWarning, Result, ValidationError};
use crate::growth::profile::GrowthProfile;
use crate::model::attributes::{AttributeId, AttributeRecord};
use crate::model::player::{validate_age, validate_name, validate_pa, Player};
use crate::model::position::Position;
use crate::model::uid::parse_uid;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Value a lenient fill writes into a missing attribute.
pub const NEUTRAL_FILL: u8 = 50;

/// How the gate treats a missing attribute. A runtime value so both modes
/// run in one build; callers choose per roster, never per record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompletenessMode {
    /// Any missing attribute rejects the whole roster.
    Strict,
    /// Missing attributes are filled with [`NEUTRAL_FILL`] and reported.
    Lenient,
}

/// Flat per-player record as produced by external CSV tooling. Attribute
/// keys are wire names; absent keys are what the gate exists to catch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPlayerRecord {
    pub uid: String,
    pub name: String,
    pub position: String,
    pub age_months: f32,
    /// CA as declared by the exporter. Validated against the [0,200] domain,
    /// then recomputed from the attributes; the declared value is never
    /// authoritative.
    pub ca: u16,
    pub pa: u8,
    #[serde(default)]
    pub attributes: HashMap<String, u8>,
}

/// Result of a successful preflight: fully-built players plus fill
/// telemetry.
#[derive(Debug)]
pub struct PreflightReport {
    pub players: Vec<Player>,
    pub warnings: Vec<CompletenessWarning>,
    pub missing_attributes_count: usize,
}

/// Per-record import outcome counts.
#[derive(Debug, Default)]
pub struct ImportReport {
    pub players: Vec<Player>,
    pub warnings: Vec<CompletenessWarning>,
    pub failures: Vec<(String, ValidationError)>,
    pub succeeded: usize,
    pub warned: usize,
    pub failed: usize,
}

fn build_player(
    record: &RawPlayerRecord,
    mode: CompletenessMode,
    warnings: &mut Vec<CompletenessWarning>,
) -> Result<Player> {
    let uid = parse_uid(&record.uid)?;
    validate_name(&record.name)?;
    validate_age(record.age_months)?;
    if record.ca > 200 {
        return Err(ValidationError::InvalidCa(record.ca));
    }
    validate_pa(record.pa)?;
    let position: Position = record
        .position
        .parse()
        .map_err(|_| ValidationError::UnknownPosition(record.position.clone()))?;

    for key in record.attributes.keys() {
        if AttributeId::from_name(key).is_none() {
            return Err(ValidationError::UnknownAttribute(key.clone()));
        }
    }

    let mut attributes = AttributeRecord::default();
    for id in AttributeId::ALL {
        match record.attributes.get(id.name()) {
            Some(&value) => {
                if value > 100 {
                    return Err(ValidationError::InvalidAttributeValue {
                        attribute: id.name(),
                        value,
                    });
                }
                attributes.set(id, value);
            }
            None => match mode {
                CompletenessMode::Strict => {
                    return Err(ValidationError::MissingAttribute {
                        uid: uid.0,
                        attribute: id.name(),
                    });
                }
                CompletenessMode::Lenient => {
                    tracing::warn!(
                        uid = uid.0,
                        attribute = id.name(),
                        filled_with = NEUTRAL_FILL,
                        "missing attribute filled with neutral default"
                    );
                    warnings.push(CompletenessWarning {
                        uid: uid.0,
                        attribute: id.name().to_string(),
                        filled_with: NEUTRAL_FILL,
                    });
                    attributes.set(id, NEUTRAL_FILL);
                }
            },
        }
    }

    // CA is recomputed inside the constructor; declared PA must dominate it.
    let player = Player::new(
        uid,
        record.name.clone(),
        position,
        record.age_months,
        attributes,
        record.pa,
        GrowthProfile::new(),
    )?;
    if u16::from(player.ca) != record.ca {
        tracing::debug!(
            uid = uid.0,
            declared = record.ca,
            recomputed = player.ca,
            "declared CA overridden by recomputation"
        );
    }
    Ok(player)
}

/// Validate a whole roster before it enters simulation.
///
/// Strict mode rejects the roster at the first violation, naming the record
/// and the rule. Lenient mode fills missing attributes and reports every
/// fill; all other violations still reject.
pub fn preflight_roster(
    records: &[RawPlayerRecord],
    mode: CompletenessMode,
) -> Result<PreflightReport> {
    let mut players = Vec::with_capacity(records.len());
    let mut warnings = Vec::new();
    for record in records {
        players.push(build_player(record, mode, &mut warnings)?);
    }
    let missing_attributes_count = warnings.len();
    Ok(PreflightReport { players, warnings, missing_attributes_count })
}

/// Bulk import with per-record isolation: one bad record fails alone and the
/// rest of the roster still loads.
pub fn import_roster(records: &[RawPlayerRecord], mode: CompletenessMode) -> ImportReport {
    let mut report = ImportReport::default();
    for record in records {
        let mut warnings = Vec::new();
        match build_player(record, mode, &mut warnings) {
            Ok(player) => {
                report.succeeded += 1;
                if !warnings.is_empty() {
                    report.warned += 1;
                }
                report.players.push(player);
                report.warnings.append(&mut warnings);
            }
            Err(err) => {
                tracing::warn!(uid = %record.uid, error = %err, "import record rejected");
                report.failed += 1;
                report.failures.push((record.uid.clone(), err));
            }
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_record(uid: &str) -> RawPlayerRecord {
        let attributes =
            AttributeId::ALL.iter().map(|id| (id.name().to_string(), 55u8)).collect();
        RawPlayerRecord {
            uid: uid.to_string(),
            name: format!("Import {uid}"),
            position: "MF".to_string(),
            age_months: 16.0,
            ca: 110,
            pa: 150,
            attributes,
        }
    }

    fn incomplete_record(uid: &str) -> RawPlayerRecord {
        let mut record = complete_record(uid);
        record.attributes.remove("finishing");
        record
    }

    #[test]
    fn complete_roster_passes_both_modes_with_no_warnings() {
        let records = vec![complete_record("1"), complete_record("csv_2"), complete_record("csv:3")];
        for mode in [CompletenessMode::Strict, CompletenessMode::Lenient] {
            let report = preflight_roster(&records, mode).unwrap();
            assert_eq!(report.players.len(), 3);
            assert_eq!(report.missing_attributes_count, 0);
            assert!(report.warnings.is_empty());
        }
    }

    #[test]
    fn strict_mode_rejects_the_whole_roster_on_one_missing_attribute() {
        let records = vec![complete_record("1"), incomplete_record("2")];
        let result = preflight_roster(&records, CompletenessMode::Strict);
        assert!(matches!(
            result,
            Err(ValidationError::MissingAttribute { uid: 2, attribute: "finishing" })
        ));
    }

    #[test]
    fn lenient_mode_fills_counts_and_warns() {
        let records = vec![complete_record("1"), incomplete_record("2")];
        let report = preflight_roster(&records, CompletenessMode::Lenient).unwrap();
        assert_eq!(report.players.len(), 2);
        assert_eq!(report.missing_attributes_count, 1);
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].uid, 2);
        assert_eq!(report.warnings[0].attribute, "finishing");
        assert_eq!(report.warnings[0].filled_with, NEUTRAL_FILL);
        assert_eq!(report.players[1].attributes.finishing, NEUTRAL_FILL);
    }

    #[test]
    fn ca_is_recomputed_not_trusted() {
        let mut record = complete_record("5");
        record.ca = 90;
        let report = preflight_roster(&[record], CompletenessMode::Strict).unwrap();
        // Uniform 55 record: weighted average 55, CA 110, whatever was
        // declared on the wire.
        assert_eq!(report.players[0].ca, 110);
    }

    #[test]
    fn declared_ca_outside_the_domain_is_rejected() {
        for mode in [CompletenessMode::Strict, CompletenessMode::Lenient] {
            let mut record = complete_record("5");
            record.ca = 250;
            assert!(matches!(
                preflight_roster(&[record], mode),
                Err(ValidationError::InvalidCa(250))
            ));
        }
    }

    #[test]
    fn declared_pa_must_dominate_recomputed_ca() {
        let mut record = complete_record("6");
        record.pa = 100;
        let result = preflight_roster(&[record], CompletenessMode::Strict);
        assert!(matches!(
            result,
            Err(ValidationError::PaLessThanCa { ca: 110, pa: 100 })
        ));
    }

    #[test]
    fn unknown_position_and_attribute_are_named() {
        let mut record = complete_record("7");
        record.position = "ST".to_string();
        assert!(matches!(
            preflight_roster(&[record], CompletenessMode::Strict),
            Err(ValidationError::UnknownPosition(p)) if p == "ST"
        ));

        let mut record = complete_record("8");
        record.attributes.insert("reflexes".to_string(), 50);
        assert!(matches!(
            preflight_roster(&[record], CompletenessMode::Lenient),
            Err(ValidationError::UnknownAttribute(a)) if a == "reflexes"
        ));
    }

    #[test]
    fn out_of_range_attribute_is_rejected_in_both_modes() {
        for mode in [CompletenessMode::Strict, CompletenessMode::Lenient] {
            let mut record = complete_record("9");
            record.attributes.insert("passing".to_string(), 101);
            assert!(matches!(
                preflight_roster(&[record], mode),
                Err(ValidationError::InvalidAttributeValue { attribute: "passing", value: 101 })
            ));
        }
    }

    #[test]
    fn import_isolates_failures_per_record() {
        let mut bad = complete_record("11");
        bad.uid = "uid-11".to_string();
        let records = vec![complete_record("10"), bad, incomplete_record("12")];
        let report = import_roster(&records, CompletenessMode::Lenient);
        assert_eq!(report.succeeded, 2);
        assert_eq!(report.warned, 1);
        assert_eq!(report.failed, 1);
        assert_eq!(report.players.len(), 2);
        assert!(matches!(report.failures[0].1, ValidationError::InvalidUidFormat(_)));
    }

    #[test]
    fn import_in_strict_mode_fails_incomplete_records_individually() {
        let records = vec![complete_record("10"), incomplete_record("12")];
        let report = import_roster(&records, CompletenessMode::Strict);
        assert_eq!(report.succeeded, 1);
        assert_eq!(report.failed, 1);
        assert!(matches!(
            report.failures[0].1,
            ValidationError::MissingAttribute { uid: 12, attribute: "finishing" }
        ));
    }
}
