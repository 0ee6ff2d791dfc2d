//! Shared value types: block positions, materials, faces and held items.

mod types;

pub use types::{BlockFace, BlockPos, BlockRef, BlockState, FluidFamily, Item, Material};
