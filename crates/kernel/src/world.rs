use sponge_common::{BlockPos, BlockState};

/// Block-level access to one loaded world, provided by the host.
pub trait WorldAccess {
    /// Identifier of the world, used as the configuration key.
    fn name(&self) -> &str;

    /// Current block at `pos`, or `None` if the position is not loaded.
    fn block_at(&self, pos: BlockPos) -> Option<BlockState>;

    /// Write a block. With `propagate` set the host runs its neighbour
    /// update cascade (flow, stability, physics) for this position.
    fn set_block(&mut self, pos: BlockPos, state: BlockState, propagate: bool);

    /// Make the host re-evaluate the block at `pos`.
    ///
    /// The default clears the position silently and writes the original
    /// block back with propagation, since the clear-then-restore pair is the
    /// only way to trigger the cascade through `set_block` alone. Hosts with a
    /// native recheck primitive should override this. Returns false when the
    /// position is not loaded.
    fn force_reevaluate(&mut self, pos: BlockPos) -> bool {
        let Some(original) = self.block_at(pos) else {
            return false;
        };
        self.set_block(pos, BlockState::AIR, false);
        self.set_block(pos, original, true);
        true
    }
}
