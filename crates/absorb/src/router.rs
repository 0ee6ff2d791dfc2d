use sponge_common::{BlockPos, BlockState, Material};
use sponge_config::{ConfigSource, SpreadPolicy, WorldConfig, WorldConfigRegistry, YamlConfig};
use sponge_kernel::WorldAccess;

use crate::event::MutationEvent;
use crate::retrigger::PhysicsRetrigger;
use crate::rule::AbsorptionRule;
use crate::scan::RangeScanner;

/// Routes world mutations to the absorption engine.
///
/// Owns the per-world configuration cache. Each event is handled
/// statelessly against the current [`WorldConfig`] of the world it happened
/// in; the only state kept between events is that cache.
#[derive(Debug)]
pub struct EventRouter<S = YamlConfig> {
    registry: WorldConfigRegistry<S>,
}

impl<S: ConfigSource> EventRouter<S> {
    pub fn new(registry: WorldConfigRegistry<S>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &WorldConfigRegistry<S> {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut WorldConfigRegistry<S> {
        &mut self.registry
    }

    /// Handle one event that happened in `world`, possibly cancelling it.
    pub fn dispatch<W: WorldAccess + ?Sized>(&mut self, world: &mut W, event: &mut MutationEvent) {
        let _span = tracing::debug_span!("dispatch", kind = event.name(), world = world.name())
            .entered();

        if let MutationEvent::WorldUnloaded = event {
            self.registry.evict(world.name());
            return;
        }

        let config = self.registry.get_or_create(world.name());
        let radius = config.radius();
        let absorbable = |m: Material| AbsorptionRule::is_absorbable(&config, m);
        let sponge_near =
            |world: &W, pos: BlockPos| RangeScanner::any_matching(world, pos, radius, Material::is_sponge);

        let veto = match event {
            MutationEvent::BlockPlaced { block, .. } => {
                if block.material.is_sponge() {
                    absorb_around(world, &config, block.pos);
                    PhysicsRetrigger::retrigger(world, &config, block.pos);
                    false
                } else {
                    absorbable(block.material) && sponge_near(&*world, block.pos)
                }
            }
            MutationEvent::BucketEmptied {
                clicked,
                face,
                bucket,
                ..
            } => {
                let soaked = bucket.poured_family().is_some_and(|f| config.soaks(f));
                soaked && sponge_near(&*world, clicked.step(*face, 1))
            }
            MutationEvent::PlayerInteracted {
                item,
                clicked,
                face,
                ..
            } => match (item, clicked) {
                (Some(item), Some(clicked)) if item.is_ignition() && config.soak_fire() => {
                    sponge_near(&*world, clicked.step(*face, 1))
                }
                _ => false,
            },
            MutationEvent::BlockSpread { source, target, .. } => {
                let considered = match config.spread_policy() {
                    SpreadPolicy::Proximity => {
                        config.enabled() && source.material == Material::Fire
                    }
                    SpreadPolicy::SourceAbsorbable => absorbable(source.material),
                };
                considered && sponge_near(&*world, *target)
            }
            MutationEvent::BlockFlowed { from, to, .. } => {
                absorbable(from.material) && sponge_near(&*world, *to)
            }
            MutationEvent::BlockBroken { block }
            | MutationEvent::BlockBurned { block }
            | MutationEvent::EntityChangedBlock { block } => {
                if block.material.is_sponge() {
                    PhysicsRetrigger::retrigger(world, &config, block.pos);
                }
                false
            }
            MutationEvent::BlockPhysics { block } => {
                if block.material.is_sponge() {
                    absorb_around(world, &config, block.pos);
                } else if absorbable(block.material) && sponge_near(&*world, block.pos) {
                    world.set_block(block.pos, BlockState::AIR, false);
                }
                false
            }
            MutationEvent::PistonExtended { moved, .. } => {
                // The host runs physics for every moved block on its own,
                // so only the retrigger is needed here.
                for block in moved.iter().filter(|b| b.material.is_sponge()) {
                    PhysicsRetrigger::retrigger(world, &config, block.pos);
                }
                false
            }
            MutationEvent::PistonRetracted {
                piston,
                direction,
                sticky,
            } => {
                let old_pos = piston.step(*direction, 2);
                let new_pos = piston.step(*direction, 1);
                let pulls_sponge = *sticky
                    && world
                        .block_at(old_pos)
                        .is_some_and(|s| s.material.is_sponge());
                if pulls_sponge {
                    absorb_around(world, &config, new_pos);
                    PhysicsRetrigger::retrigger(world, &config, new_pos);
                    PhysicsRetrigger::retrigger(world, &config, old_pos);
                }
                false
            }
            MutationEvent::WorldUnloaded => false,
        };

        if veto && event.cancel() {
            tracing::debug!("mutation cancelled by nearby absorber");
        }
    }
}

/// Clear every absorbable block within the world's radius of `center`.
fn absorb_around<W: WorldAccess + ?Sized>(world: &mut W, config: &WorldConfig, center: BlockPos) {
    let removed = RangeScanner::remove_matching(world, center, config.radius(), |m| {
        AbsorptionRule::is_absorbable(config, m)
    });
    if removed > 0 {
        tracing::debug!(%center, removed, "absorbed blocks");
    }
}
