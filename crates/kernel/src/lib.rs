//! World kernel: the block access interface the absorption engine drives,
//! and an in-memory grid implementing it.
//!
//! # Invariants
//! - Every write goes through [`WorldAccess::set_block`].
//! - A lookup outside the loaded region yields `None`, never a default block.

pub mod grid;
pub mod world;

pub use grid::{BlockGrid, BlockWrite};
pub use world::WorldAccess;
