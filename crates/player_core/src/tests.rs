//! End-to-end scenarios across module boundaries. Unit behavior lives with
//! each module; these tests exercise the crate the way an embedding game
//! layer would.

use crate::api::{create_player_json, ApiResponse, CreatePlayerRequest, SCHEMA_VERSION};
use crate::batch::{BatchExecutor, GrowthSession, PlayerPool, PARALLEL_THRESHOLD};
use crate::gate::{import_roster, preflight_roster, CompletenessMode, RawPlayerRecord};
use crate::growth::{apply_growth, evolve_over_months, TrainingType};
use crate::model::attributes::AttributeId;
use crate::model::player::Player;
use crate::model::position::Position;
use crate::model::uid::PersonUid;

fn forward(ca: (u8, u8), pa: (u8, u8), seed: u64) -> Player {
    Player::generate(PersonUid(1), "E2E Forward".to_string(), Position::Forward, 16.5, ca, pa, seed)
        .unwrap()
}

fn raw_record(uid: &str, value: u8) -> RawPlayerRecord {
    RawPlayerRecord {
        uid: uid.to_string(),
        name: format!("Roster {uid}"),
        position: "DF".to_string(),
        age_months: 16.0,
        ca: u16::from(value) * 2,
        pa: 160,
        attributes: AttributeId::ALL.iter().map(|id| (id.name().to_string(), value)).collect(),
    }
}

#[test]
fn created_forward_satisfies_every_contract() {
    let player = forward((60, 80), (120, 160), 42);
    assert!((60..=80).contains(&player.ca));
    assert!((120..=160).contains(&player.pa));
    assert!(player.pa >= player.ca);
    for value in player.summary.as_array() {
        assert!((1..=20).contains(&value));
    }
    for id in AttributeId::ALL {
        assert!(player.attributes.get(id) <= 100);
    }
}

#[test]
fn growth_slows_as_the_gap_closes() {
    // A nearly-capped player must grow strictly less than a wide-gap player,
    // whatever the session seed.
    for seed in [0u64, 1, 42, 999, u64::MAX] {
        let mut wide = forward((80, 80), (120, 120), 7);
        let mut narrow = forward((118, 118), (120, 120), 7);
        let wide_delta =
            apply_growth(&mut wide, TrainingType::Technical, 1.0, seed).unwrap().ca_delta();
        let narrow_delta =
            apply_growth(&mut narrow, TrainingType::Technical, 1.0, seed).unwrap().ca_delta();
        assert!(wide_delta > narrow_delta, "seed {seed}");
    }
}

#[test]
fn full_pipeline_is_deterministic() {
    let run = || {
        let mut player = forward((60, 80), (130, 150), 42);
        evolve_over_months(&mut player, 6, &[(TrainingType::Technical, 1.2)], 1001).unwrap();
        serde_json::to_string(&player.attributes).unwrap()
    };
    assert_eq!(run(), run());
}

#[test]
fn parallel_equivalence_straddles_the_threshold() {
    for count in [PARALLEL_THRESHOLD - 1, PARALLEL_THRESHOLD, PARALLEL_THRESHOLD + 37] {
        let players: Vec<Player> = (0..count)
            .map(|i| {
                Player::generate(
                    PersonUid(i as u32),
                    format!("P{i}"),
                    Position::ALL[i % 4],
                    16.0,
                    (40, 110),
                    (115, 175),
                    i as u64,
                )
                .unwrap()
            })
            .collect();
        let sequential = BatchExecutor::with_threshold(usize::MAX).calculate_ca_batch(&players);
        let threshold = BatchExecutor::new().calculate_ca_batch(&players);
        assert_eq!(sequential.values, threshold.values, "count {count}");
    }
}

#[test]
fn roster_completeness_scenario() {
    let complete = vec![raw_record("1", 50), raw_record("csv_2", 60), raw_record("csv:3", 70)];
    let report = preflight_roster(&complete, CompletenessMode::Strict).unwrap();
    assert_eq!(report.missing_attributes_count, 0);

    let mut with_hole = complete.clone();
    with_hole[1].attributes.remove("tackling");

    assert!(preflight_roster(&with_hole, CompletenessMode::Strict).is_err());

    let lenient = preflight_roster(&with_hole, CompletenessMode::Lenient).unwrap();
    assert_eq!(lenient.missing_attributes_count, 1);
    assert_eq!(lenient.warnings.len(), 1);
    assert_eq!(lenient.players.len(), 3);
}

#[test]
fn mixed_uid_forms_resolve_to_the_same_players() {
    let records = vec![raw_record("77", 55), raw_record("csv_77", 55), raw_record("csv:77", 55)];
    let report = preflight_roster(&records, CompletenessMode::Strict).unwrap();
    assert!(report.players.iter().all(|p| p.uid == PersonUid(77)));
}

#[test]
fn imported_roster_feeds_the_pool_and_the_executor() {
    let records: Vec<RawPlayerRecord> =
        (0..10).map(|i| raw_record(&i.to_string(), 40 + i as u8 * 3)).collect();
    let report = import_roster(&records, CompletenessMode::Strict);
    assert_eq!(report.succeeded, 10);

    let mut pool = PlayerPool::reserve_for_players(16);
    let ids: Vec<_> = report.players.into_iter().map(|p| pool.insert(p)).collect();
    let stats = pool.memory_stats();
    assert_eq!(stats.live, 10);
    assert!(stats.used_bytes <= stats.allocated_bytes);

    let sessions: Vec<GrowthSession> = (0..ids.len())
        .map(|i| GrowthSession {
            training: TrainingType::Physical,
            intensity: 1.0,
            seed: i as u64,
        })
        .collect();
    let mut players: Vec<Player> = ids.iter().map(|&id| pool.remove(id).unwrap()).collect();
    let result = BatchExecutor::new().apply_growth_batch(&mut players, &sessions).unwrap();
    assert_eq!(result.succeeded(), 10);
    for player in &players {
        assert!(player.ca <= player.pa);
        pool.insert(player.clone());
    }
    assert_eq!(pool.len(), 10);
}

#[test]
fn json_boundary_round_trips_a_player() {
    let request = CreatePlayerRequest {
        schema_version: SCHEMA_VERSION,
        uid: "123".to_string(),
        name: "Json Forward".to_string(),
        position: "FW".to_string(),
        age_months: 16.5,
        ca_range: (60, 80),
        pa_range: (120, 160),
        seed: Some(42),
    };
    let raw = create_player_json(&serde_json::to_string(&request).unwrap());
    let response: ApiResponse<Player> = serde_json::from_str(&raw).unwrap();
    let player = response.data.unwrap();

    let reparsed: Player =
        serde_json::from_str(&serde_json::to_string(&player).unwrap()).unwrap();
    assert_eq!(reparsed, player);
}

#[test]
fn long_evolution_converges_under_the_ceiling() {
    let mut player = forward((60, 70), (110, 120), 3);
    evolve_over_months(
        &mut player,
        18,
        &[(TrainingType::Technical, 1.5), (TrainingType::Physical, 1.5)],
        500,
    )
    .unwrap();
    assert!(player.ca <= player.pa);
    assert!(player.ca > 60, "18 months of training moved nothing");
    assert_eq!(
        player.growth.sessions_completed, 36,
        "one log entry per session, every session"
    );
}
