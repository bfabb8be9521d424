//! Batch execution over player collections.
//!
//! Small batches run sequentially; rayon only pays for itself past a
//! threshold. Parallel and sequential paths call the same per-player
//! functions, so results are identical either way and always preserve
//! input order.

use crate::error::{Result, ValidationError};
use crate::growth::engine::{apply_growth, GrowthResult};
use crate::growth::profile::TrainingType;
use crate::model::player::Player;
use crate::ratings::ability::calculate_ca;
use crate::ratings::summary::{derive_summary, SummaryRatings};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Below this many players the sequential path wins.
pub const PARALLEL_THRESHOLD: usize = 64;

/// One growth session to run against one player in a batch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GrowthSession {
    pub training: TrainingType,
    pub intensity: f32,
    pub seed: u64,
}

/// Execution telemetry attached to every batch result. The throughput
/// budget is advisory; nothing aborts on a slow batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchReport {
    pub items: usize,
    pub elapsed: Duration,
    pub parallel: bool,
}

impl BatchReport {
    /// Items per second. Zero for an empty or instantaneous batch.
    pub fn throughput(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.items as f64 / secs
        }
    }
}

/// CA values in input order plus execution telemetry.
#[derive(Debug, Clone, PartialEq)]
pub struct CaBatchResult {
    pub values: Vec<u8>,
    pub report: BatchReport,
}

/// Summary ratings in input order plus execution telemetry.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryBatchResult {
    pub values: Vec<SummaryRatings>,
    pub report: BatchReport,
}

/// Per-player growth outcomes in input order. One bad session never aborts
/// the batch; it fails in its own slot.
#[derive(Debug, Clone, PartialEq)]
pub struct GrowthBatchResult {
    pub outcomes: Vec<Result<GrowthResult>>,
    pub report: BatchReport,
}

impl GrowthBatchResult {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }
}

/// Runs rating and growth operations over slices of players.
#[derive(Debug, Clone)]
pub struct BatchExecutor {
    threshold: usize,
}

impl BatchExecutor {
    pub fn new() -> Self {
        Self { threshold: PARALLEL_THRESHOLD }
    }

    /// Override the sequential/parallel cutover. A threshold of zero forces
    /// the parallel path, `usize::MAX` forces sequential.
    pub fn with_threshold(threshold: usize) -> Self {
        Self { threshold }
    }

    fn parallel_for(&self, len: usize) -> bool {
        let parallel = len >= self.threshold;
        tracing::debug!(items = len, threshold = self.threshold, parallel, "batch dispatch");
        parallel
    }

    /// Recompute CA for every player. Read-only; does not touch caches.
    pub fn calculate_ca_batch(&self, players: &[Player]) -> CaBatchResult {
        let parallel = self.parallel_for(players.len());
        let start = Instant::now();
        let values = if parallel {
            players.par_iter().map(|p| calculate_ca(&p.attributes, p.position)).collect()
        } else {
            players.iter().map(|p| calculate_ca(&p.attributes, p.position)).collect()
        };
        CaBatchResult {
            values,
            report: BatchReport { items: players.len(), elapsed: start.elapsed(), parallel },
        }
    }

    /// Derive summary ratings for every player. Read-only.
    pub fn derive_summary_batch(&self, players: &[Player]) -> SummaryBatchResult {
        let parallel = self.parallel_for(players.len());
        let start = Instant::now();
        let values = if parallel {
            players.par_iter().map(|p| derive_summary(&p.attributes, p.position)).collect()
        } else {
            players.iter().map(|p| derive_summary(&p.attributes, p.position)).collect()
        };
        SummaryBatchResult {
            values,
            report: BatchReport { items: players.len(), elapsed: start.elapsed(), parallel },
        }
    }

    /// Refresh the CA and summary caches in place.
    pub fn refresh_batch(&self, players: &mut [Player]) {
        if self.parallel_for(players.len()) {
            players.par_iter_mut().for_each(Player::refresh_derived);
        } else {
            players.iter_mut().for_each(Player::refresh_derived);
        }
    }

    /// Apply one growth session per player, pairwise.
    ///
    /// The two slices must have the same length; a shape mismatch rejects
    /// the whole batch before touching anything. Each player/session pair
    /// is independent and mutates only its own player, so pairs run
    /// concurrently without coordination; per-pair failures land in their
    /// own output slot.
    pub fn apply_growth_batch(
        &self,
        players: &mut [Player],
        sessions: &[GrowthSession],
    ) -> Result<GrowthBatchResult> {
        if players.len() != sessions.len() {
            return Err(ValidationError::BatchShapeMismatch {
                players: players.len(),
                sessions: sessions.len(),
            });
        }
        let parallel = self.parallel_for(players.len());
        let start = Instant::now();
        let outcomes: Vec<Result<GrowthResult>> = if parallel {
            players
                .par_iter_mut()
                .zip(sessions.par_iter())
                .map(|(player, s)| apply_growth(player, s.training, s.intensity, s.seed))
                .collect()
        } else {
            players
                .iter_mut()
                .zip(sessions)
                .map(|(player, s)| apply_growth(player, s.training, s.intensity, s.seed))
                .collect()
        };
        Ok(GrowthBatchResult {
            outcomes,
            report: BatchReport { items: players.len(), elapsed: start.elapsed(), parallel },
        })
    }
}

impl Default for BatchExecutor {
    fn default() -> Self {
        Self::new()
    }
}
