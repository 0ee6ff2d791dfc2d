//! Configuration: layered (global then per-world) settings, resolved once per
//! world and cached until the world unloads.
//!
//! # Invariants
//! - Lookups never fail; missing or mistyped keys fall back to defaults.
//! - A [`WorldConfig`] is only ever built by the [`WorldConfigRegistry`].
//! - Soak flags are never true while `enabled` is false.

mod registry;
mod source;
mod world_config;

pub use registry::WorldConfigRegistry;
pub use source::{ConfigError, ConfigSource, YamlConfig, CURRENT_CONFIG_VERSION};
pub use world_config::{resolve_radius, SpreadPolicy, WorldConfig, DEFAULT_RADIUS, MAX_RADIUS};
