use std::collections::HashMap;

use crate::source::{ConfigSource, YamlConfig};
use crate::world_config::WorldConfig;

/// Lazily built cache of one [`WorldConfig`] per world name.
///
/// Entries are created on the first lookup for a world and dropped on
/// [`evict`](Self::evict) when the world unloads. Everything cached can be
/// rebuilt from the source, so nothing here is persisted.
///
/// The registry is not synchronized. Hosts that deliver events from more
/// than one thread should keep it behind a single `Mutex`.
#[derive(Debug)]
pub struct WorldConfigRegistry<S = YamlConfig> {
    source: S,
    configs: HashMap<String, WorldConfig>,
}

impl<S: ConfigSource> WorldConfigRegistry<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            configs: HashMap::new(),
        }
    }

    /// Cached settings for `world`, resolving them on first use.
    pub fn get_or_create(&mut self, world: &str) -> WorldConfig {
        if let Some(config) = self.configs.get(world) {
            return *config;
        }
        let config = WorldConfig::resolve(&self.source, world);
        tracing::info!(world, %config, "loaded configuration for world");
        self.configs.insert(world.to_owned(), config);
        config
    }

    /// Drop the cached settings for `world`. Returns whether an entry existed.
    pub fn evict(&mut self, world: &str) -> bool {
        let removed = self.configs.remove(world).is_some();
        if removed {
            tracing::info!(world, "removed configuration for world from memory");
        }
        removed
    }

    /// Swap in a new source and forget every cached entry.
    pub fn reload(&mut self, source: S) {
        self.source = source;
        let dropped = self.configs.len();
        self.configs.clear();
        tracing::info!(dropped, "configuration reloaded");
    }

    pub fn contains(&self, world: &str) -> bool {
        self.configs.contains_key(world)
    }

    /// Number of cached worlds.
    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
