use serde::{Deserialize, Serialize};
use sponge_common::{BlockPos, BlockState, Material};
use std::collections::BTreeMap;

use crate::world::WorldAccess;

/// A single write applied to the grid.
///
/// The write log is how callers observe propagation side effects: a
/// clear-then-restore leaves the block map unchanged but appends two writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockWrite {
    pub pos: BlockPos,
    pub old: BlockState,
    pub new: BlockState,
    pub propagate: bool,
}

/// Sparse in-memory voxel world.
///
/// Unset positions inside the loaded region read as air. Positions outside
/// the region read as `None` and ignore writes, like unloaded chunks.
///
/// Uses BTreeMap for deterministic iteration order.
#[derive(Debug, Clone, Default)]
pub struct BlockGrid {
    name: String,
    blocks: BTreeMap<BlockPos, BlockState>,
    /// Inclusive bounds of the loaded region; unbounded when `None`.
    loaded: Option<(BlockPos, BlockPos)>,
    /// Append-only log of all writes.
    write_log: Vec<BlockWrite>,
}

impl BlockGrid {
    /// Create an empty, unbounded world.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Restrict the loaded region to the inclusive box `min..=max`.
    pub fn with_loaded_region(mut self, min: BlockPos, max: BlockPos) -> Self {
        let lo = BlockPos(min.0.min(max.0));
        let hi = BlockPos(min.0.max(max.0));
        self.loaded = Some((lo, hi));
        self
    }

    pub fn is_loaded(&self, pos: BlockPos) -> bool {
        match self.loaded {
            None => true,
            Some((lo, hi)) => pos.0.cmpge(lo.0).all() && pos.0.cmple(hi.0).all(),
        }
    }

    /// Place a block without logging it. Used to build fixtures.
    pub fn fill(&mut self, pos: BlockPos, state: impl Into<BlockState>) {
        let state = state.into();
        if state.material.is_air() {
            self.blocks.remove(&pos);
        } else {
            self.blocks.insert(pos, state);
        }
    }

    /// Material at `pos`, air when unset or unloaded.
    pub fn material(&self, pos: BlockPos) -> Material {
        self.blocks
            .get(&pos)
            .map(|s| s.material)
            .unwrap_or(Material::Air)
    }

    /// Number of non-air blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Count the blocks of one material.
    pub fn count(&self, material: Material) -> usize {
        self.blocks
            .values()
            .filter(|s| s.material == material)
            .count()
    }

    /// Read-only access to all non-air blocks.
    pub fn blocks(&self) -> &BTreeMap<BlockPos, BlockState> {
        &self.blocks
    }

    /// Read-only access to the write log.
    pub fn writes(&self) -> &[BlockWrite] {
        &self.write_log
    }

    /// Drain and return the write log.
    pub fn drain_writes(&mut self) -> Vec<BlockWrite> {
        std::mem::take(&mut self.write_log)
    }
}

impl WorldAccess for BlockGrid {
    fn name(&self) -> &str {
        &self.name
    }

    fn block_at(&self, pos: BlockPos) -> Option<BlockState> {
        if !self.is_loaded(pos) {
            return None;
        }
        Some(self.blocks.get(&pos).copied().unwrap_or_default())
    }

    fn set_block(&mut self, pos: BlockPos, state: BlockState, propagate: bool) {
        let Some(old) = self.block_at(pos) else {
            tracing::trace!(%pos, world = %self.name, "write to unloaded position dropped");
            return;
        };
        self.fill(pos, state);
        self.write_log.push(BlockWrite {
            pos,
            old,
            new: state,
            propagate,
        });
    }
}
