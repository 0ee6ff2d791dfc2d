use sponge_common::BlockPos;
use sponge_config::WorldConfig;
use sponge_kernel::WorldAccess;

use crate::rule::AbsorptionRule;
use crate::scan::RangeScanner;

/// Forces the host to re-run its own flow and stability updates around an
/// absorber whose neighbourhood just changed.
///
/// Works one cell beyond the absorption radius: an update starting just
/// outside the radius can still reach blocks inside it.
pub struct PhysicsRetrigger;

impl PhysicsRetrigger {
    /// Re-evaluate every absorbable block within `radius + 1` of `center`.
    /// Block states are unchanged afterwards. Returns the number of
    /// positions re-evaluated.
    pub fn retrigger<W: WorldAccess + ?Sized>(
        world: &mut W,
        config: &WorldConfig,
        center: BlockPos,
    ) -> usize {
        if !config.enabled() {
            return 0;
        }
        let reach = config.radius().saturating_add(1);
        let mut touched = 0;
        for pos in RangeScanner::cube(center, reach) {
            let absorbable = world
                .block_at(pos)
                .is_some_and(|state| AbsorptionRule::is_absorbable(config, state.material));
            if absorbable && world.force_reevaluate(pos) {
                touched += 1;
            }
        }
        tracing::trace!(%center, reach, touched, "physics retriggered");
        touched
    }
}
