//! Absorption engine: absorber blocks neutralize configured fluid families in
//! a cubic neighbourhood, re-evaluated whenever the block graph changes nearby.
//!
//! # Invariants
//! - The engine raises no errors. Unloaded positions are skipped.
//! - Handlers run to completion synchronously; nothing is deferred.
//! - Cancellation only ever sets the flag, it never clears one set elsewhere.

mod event;
mod retrigger;
mod router;
mod rule;
mod scan;

pub use event::MutationEvent;
pub use retrigger::PhysicsRetrigger;
pub use router::EventRouter;
pub use rule::AbsorptionRule;
pub use scan::RangeScanner;
