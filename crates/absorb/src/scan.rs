use sponge_common::{BlockPos, BlockRef, BlockState, Material};
use sponge_kernel::WorldAccess;

/// Enumerates the cube of Chebyshev radius `r` around a center: every offset
/// with `max(|dx|, |dy|, |dz|) <= r`, center included, `(2r+1)^3` positions.
///
/// Callers must not rely on the visiting order. Positions the world cannot
/// resolve (unloaded) are skipped.
pub struct RangeScanner;

impl RangeScanner {
    /// Every position in the cube. Empty for a negative radius.
    pub fn cube(center: BlockPos, radius: i32) -> impl Iterator<Item = BlockPos> {
        (-radius..=radius).flat_map(move |dx| {
            (-radius..=radius).flat_map(move |dy| {
                (-radius..=radius).map(move |dz| center.relative(dx, dy, dz))
            })
        })
    }

    /// Call `visitor` for every loaded block in the cube.
    pub fn for_each_in_cube<W: WorldAccess + ?Sized>(
        world: &W,
        center: BlockPos,
        radius: i32,
        mut visitor: impl FnMut(BlockRef),
    ) {
        for pos in Self::cube(center, radius) {
            if let Some(state) = world.block_at(pos) {
                visitor(BlockRef::new(pos, state.material));
            }
        }
    }

    /// True if some loaded block in the cube satisfies `predicate`.
    /// Stops at the first match.
    pub fn exists_in_cube<W: WorldAccess + ?Sized>(
        world: &W,
        center: BlockPos,
        radius: i32,
        predicate: impl Fn(Material) -> bool,
    ) -> bool {
        Self::cube(center, radius).any(|pos| {
            world
                .block_at(pos)
                .is_some_and(|state| predicate(state.material))
        })
    }

    /// Existence test, see [`exists_in_cube`](Self::exists_in_cube).
    pub fn any_matching<W: WorldAccess + ?Sized>(
        world: &W,
        center: BlockPos,
        radius: i32,
        predicate: impl Fn(Material) -> bool,
    ) -> bool {
        Self::exists_in_cube(world, center, radius, predicate)
    }

    /// Replace every block in the cube satisfying `predicate` with air,
    /// without propagation. Each position is read right before it is
    /// tested, so writes made earlier in the scan are observed. Returns the
    /// number of blocks cleared.
    pub fn remove_matching<W: WorldAccess + ?Sized>(
        world: &mut W,
        center: BlockPos,
        radius: i32,
        predicate: impl Fn(Material) -> bool,
    ) -> usize {
        let mut removed = 0;
        for pos in Self::cube(center, radius) {
            let hit = world
                .block_at(pos)
                .is_some_and(|state| predicate(state.material));
            if hit {
                world.set_block(pos, BlockState::AIR, false);
                removed += 1;
            }
        }
        tracing::trace!(%center, radius, removed, "cube cleared");
        removed
    }
}
