//! Batch execution and pooled storage for large rosters.

pub mod executor;
pub mod pool;

pub use executor::{
    BatchExecutor, BatchReport, CaBatchResult, GrowthBatchResult, GrowthSession,
    SummaryBatchResult, PARALLEL_THRESHOLD,
};
pub use pool::{MemoryStats, PlayerPool, SlotId};
