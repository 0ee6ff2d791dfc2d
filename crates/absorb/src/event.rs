use sponge_common::{BlockFace, BlockPos, BlockRef, Item, Material};

/// A world mutation delivered by the host, one variant per kind.
///
/// Pre-commit kinds carry a `cancelled` flag the router may set; post-commit
/// kinds (break, burn, piston moves, physics, entity changes) cannot be
/// vetoed and converge through a retrigger instead. The world itself is
/// passed to [`EventRouter::dispatch`](crate::EventRouter::dispatch)
/// alongside the event.
#[derive(Debug, Clone, PartialEq)]
pub enum MutationEvent {
    /// A player placed `block`; the world already contains it.
    BlockPlaced { block: BlockRef, cancelled: bool },
    /// A player broke `block`. `block.material` is what was there before.
    BlockBroken { block: BlockRef },
    /// `block` burned away.
    BlockBurned { block: BlockRef },
    /// A bucket was emptied against `face` of the `clicked` block.
    BucketEmptied {
        clicked: BlockPos,
        face: BlockFace,
        bucket: Item,
        cancelled: bool,
    },
    /// A player used `item` on `face` of `clicked`.
    PlayerInteracted {
        item: Option<Item>,
        clicked: Option<BlockPos>,
        face: BlockFace,
        cancelled: bool,
    },
    /// `source` (fire, grass, ...) is spreading into `target`.
    BlockSpread {
        source: BlockRef,
        target: BlockPos,
        cancelled: bool,
    },
    /// A fluid block `from` is flowing into `to`.
    BlockFlowed {
        from: BlockRef,
        to: BlockPos,
        cancelled: bool,
    },
    /// Routine recheck of `block` by the host.
    BlockPhysics { block: BlockRef },
    /// A piston at `piston` pushed `moved` (pre-move positions) towards `direction`.
    PistonExtended {
        piston: BlockPos,
        direction: BlockFace,
        moved: Vec<BlockRef>,
    },
    /// A piston at `piston` retracted; a sticky one pulls the block two
    /// cells away in `direction` back by one.
    PistonRetracted {
        piston: BlockPos,
        direction: BlockFace,
        sticky: bool,
    },
    /// An entity changed `block` (pre-change material).
    EntityChangedBlock { block: BlockRef },
    /// The world is being unloaded.
    WorldUnloaded,
}

impl MutationEvent {
    pub fn placed(pos: BlockPos, material: Material) -> Self {
        Self::BlockPlaced {
            block: BlockRef::new(pos, material),
            cancelled: false,
        }
    }

    pub fn broken(pos: BlockPos, material: Material) -> Self {
        Self::BlockBroken {
            block: BlockRef::new(pos, material),
        }
    }

    pub fn burned(pos: BlockPos, material: Material) -> Self {
        Self::BlockBurned {
            block: BlockRef::new(pos, material),
        }
    }

    pub fn bucket_emptied(clicked: BlockPos, face: BlockFace, bucket: Item) -> Self {
        Self::BucketEmptied {
            clicked,
            face,
            bucket,
            cancelled: false,
        }
    }

    pub fn interacted(item: Option<Item>, clicked: Option<BlockPos>, face: BlockFace) -> Self {
        Self::PlayerInteracted {
            item,
            clicked,
            face,
            cancelled: false,
        }
    }

    pub fn spread(source: BlockRef, target: BlockPos) -> Self {
        Self::BlockSpread {
            source,
            target,
            cancelled: false,
        }
    }

    pub fn flowed(from: BlockRef, to: BlockPos) -> Self {
        Self::BlockFlowed {
            from,
            to,
            cancelled: false,
        }
    }

    pub fn physics(pos: BlockPos, material: Material) -> Self {
        Self::BlockPhysics {
            block: BlockRef::new(pos, material),
        }
    }

    pub fn entity_changed(pos: BlockPos, material: Material) -> Self {
        Self::EntityChangedBlock {
            block: BlockRef::new(pos, material),
        }
    }

    /// Short kind name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::BlockPlaced { .. } => "block_placed",
            Self::BlockBroken { .. } => "block_broken",
            Self::BlockBurned { .. } => "block_burned",
            Self::BucketEmptied { .. } => "bucket_emptied",
            Self::PlayerInteracted { .. } => "player_interacted",
            Self::BlockSpread { .. } => "block_spread",
            Self::BlockFlowed { .. } => "block_flowed",
            Self::BlockPhysics { .. } => "block_physics",
            Self::PistonExtended { .. } => "piston_extended",
            Self::PistonRetracted { .. } => "piston_retracted",
            Self::EntityChangedBlock { .. } => "entity_changed_block",
            Self::WorldUnloaded => "world_unloaded",
        }
    }

    fn cancel_flag(&mut self) -> Option<&mut bool> {
        match self {
            Self::BlockPlaced { cancelled, .. }
            | Self::BucketEmptied { cancelled, .. }
            | Self::PlayerInteracted { cancelled, .. }
            | Self::BlockSpread { cancelled, .. }
            | Self::BlockFlowed { cancelled, .. } => Some(cancelled),
            _ => None,
        }
    }

    pub fn is_cancellable(&self) -> bool {
        matches!(
            self,
            Self::BlockPlaced { .. }
                | Self::BucketEmptied { .. }
                | Self::PlayerInteracted { .. }
                | Self::BlockSpread { .. }
                | Self::BlockFlowed { .. }
        )
    }

    pub fn is_cancelled(&self) -> bool {
        match self {
            Self::BlockPlaced { cancelled, .. }
            | Self::BucketEmptied { cancelled, .. }
            | Self::PlayerInteracted { cancelled, .. }
            | Self::BlockSpread { cancelled, .. }
            | Self::BlockFlowed { cancelled, .. } => *cancelled,
            _ => false,
        }
    }

    /// Veto the mutation. Returns false for kinds that cannot be cancelled.
    pub fn cancel(&mut self) -> bool {
        match self.cancel_flag() {
            Some(flag) => {
                *flag = true;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pre_commit_kinds_can_be_cancelled() {
        let mut e = MutationEvent::placed(BlockPos::ORIGIN, Material::Water);
        assert!(e.is_cancellable());
        assert!(!e.is_cancelled());
        assert!(e.cancel());
        assert!(e.is_cancelled());
    }

    #[test]
    fn post_commit_kinds_ignore_cancel() {
        let mut events = [
            MutationEvent::broken(BlockPos::ORIGIN, Material::Sponge),
            MutationEvent::burned(BlockPos::ORIGIN, Material::Sponge),
            MutationEvent::physics(BlockPos::ORIGIN, Material::Water),
            MutationEvent::entity_changed(BlockPos::ORIGIN, Material::Sponge),
            MutationEvent::PistonRetracted {
                piston: BlockPos::ORIGIN,
                direction: BlockFace::Up,
                sticky: true,
            },
            MutationEvent::WorldUnloaded,
        ];
        for e in &mut events {
            assert!(!e.is_cancellable(), "{}", e.name());
            assert!(!e.cancel());
            assert!(!e.is_cancelled());
        }
    }

    #[test]
    fn names_are_distinct() {
        let events = [
            MutationEvent::placed(BlockPos::ORIGIN, Material::Water),
            MutationEvent::bucket_emptied(BlockPos::ORIGIN, BlockFace::Up, Item::WaterBucket),
            MutationEvent::interacted(None, None, BlockFace::Up),
            MutationEvent::spread(BlockRef::new(BlockPos::ORIGIN, Material::Fire), BlockPos::ORIGIN),
            MutationEvent::flowed(BlockRef::new(BlockPos::ORIGIN, Material::Water), BlockPos::ORIGIN),
        ];
        let mut names: Vec<&str> = events.iter().map(MutationEvent::name).collect();
        names.dedup();
        assert_eq!(names.len(), events.len());
    }
}
