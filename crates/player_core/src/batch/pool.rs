//! Slab-style player pool.
//!
//! Removal leaves a hole that the next insert reuses, so slot identity stays
//! stable for the lifetime of a player and inserts after warmup never
//! reallocate. Growth past the reservation is allowed but reported.

use crate::error::CapacityAdvisory;
use crate::model::player::Player;

/// Stable handle to a pooled player. Valid until that player is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(usize);

/// Occupancy and reservation telemetry for a pool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MemoryStats {
    pub reserved: usize,
    pub live: usize,
    pub slots: usize,
    pub high_water: usize,
    /// Slab bytes backing all slots, live or not.
    pub allocated_bytes: usize,
    /// Slab bytes backing live players.
    pub used_bytes: usize,
    /// `used_bytes / allocated_bytes`, in [0,1]. An oversized reservation
    /// shows up here as a low ratio, not just hole-share among live slots.
    pub efficiency_ratio: f32,
}

#[derive(Debug, Default)]
pub struct PlayerPool {
    slots: Vec<Option<Player>>,
    free: Vec<usize>,
    reserved: usize,
    live: usize,
    high_water: usize,
}

impl PlayerPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pool with slots preallocated for `count` players.
    pub fn reserve_for_players(count: usize) -> Self {
        Self {
            slots: Vec::with_capacity(count),
            free: Vec::new(),
            reserved: count,
            live: 0,
            high_water: 0,
        }
    }

    pub fn insert(&mut self, player: Player) -> SlotId {
        self.live += 1;
        if self.live > self.high_water {
            self.high_water = self.live;
        }
        if self.reserved > 0 && self.live > self.reserved {
            let advisory = CapacityAdvisory { reserved: self.reserved, requested: self.live };
            tracing::warn!(
                reserved = advisory.reserved,
                requested = advisory.requested,
                "player pool grew past its reservation"
            );
        }
        if let Some(index) = self.free.pop() {
            self.slots[index] = Some(player);
            SlotId(index)
        } else {
            self.slots.push(Some(player));
            SlotId(self.slots.len() - 1)
        }
    }

    pub fn remove(&mut self, id: SlotId) -> Option<Player> {
        let slot = self.slots.get_mut(id.0)?;
        let player = slot.take()?;
        self.free.push(id.0);
        self.live -= 1;
        Some(player)
    }

    pub fn get(&self, id: SlotId) -> Option<&Player> {
        self.slots.get(id.0)?.as_ref()
    }

    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut Player> {
        self.slots.get_mut(id.0)?.as_mut()
    }

    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &Player)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|p| (SlotId(i), p)))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (SlotId, &mut Player)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_mut().map(|p| (SlotId(i), p)))
    }

    pub fn memory_stats(&self) -> MemoryStats {
        let slot_size = std::mem::size_of::<Option<Player>>();
        let capacity = self.slots.capacity();
        let efficiency_ratio =
            if capacity == 0 { 1.0 } else { self.live as f32 / capacity as f32 };
        MemoryStats {
            reserved: self.reserved,
            live: self.live,
            slots: self.slots.len(),
            high_water: self.high_water,
            allocated_bytes: capacity * slot_size,
            used_bytes: self.live * slot_size,
            efficiency_ratio,
        }
    }
}
