use serde::Serialize;
use sponge_common::FluidFamily;
use std::str::FromStr;

use crate::source::{ConfigError, ConfigSource};

/// Radius used when neither the world nor the global section sets a positive one.
pub const DEFAULT_RADIUS: i32 = 2;

/// Largest radius a world can resolve to; larger configured values are clamped.
pub const MAX_RADIUS: i32 = 32;

/// Which fire spreads are checked against nearby absorbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpreadPolicy {
    /// Any fire spread is cancelled when an absorber is near the target.
    #[default]
    Proximity,
    /// Only spreads whose source block is itself absorbable are checked.
    SourceAbsorbable,
}

impl FromStr for SpreadPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "proximity" => Ok(Self::Proximity),
            "source_absorbable" => Ok(Self::SourceAbsorbable),
            other => Err(ConfigError::InvalidValue {
                key: "spread_policy".into(),
                value: other.into(),
            }),
        }
    }
}

/// Resolved absorption settings for one world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorldConfig {
    enabled: bool,
    soak_water: bool,
    soak_lava: bool,
    soak_fire: bool,
    radius: i32,
    spread_policy: SpreadPolicy,
}

impl WorldConfig {
    /// Resolve the settings for `world`, each key looked up under
    /// `worlds.<world>` first and the global section second.
    pub(crate) fn resolve(source: &impl ConfigSource, world: &str) -> Self {
        let flag = |key: &str, default: bool| {
            source
                .bool_at(&["worlds", world, key])
                .unwrap_or_else(|| source.bool_or(&[key], default))
        };

        let mut enabled = flag("enabled", true);
        let soak_water = flag("soak_water", true);
        let soak_lava = flag("soak_lava", false);
        let soak_fire = flag("soak_fire", false);
        if !(soak_water || soak_lava || soak_fire) {
            enabled = false;
        }

        let radius = resolve_radius(
            source.int_or(&["worlds", world, "radius"], 0),
            source.int_or(&["radius"], 0),
        );

        let spread_policy = source
            .str_at(&["worlds", world, "spread_policy"])
            .or_else(|| source.str_at(&["spread_policy"]))
            .and_then(|raw| match raw.parse::<SpreadPolicy>() {
                Ok(policy) => Some(policy),
                Err(e) => {
                    tracing::warn!(world, "{e}, using default");
                    None
                }
            })
            .unwrap_or_default();

        Self {
            enabled,
            soak_water: enabled && soak_water,
            soak_lava: enabled && soak_lava,
            soak_fire: enabled && soak_fire,
            radius,
            spread_policy,
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn soak_water(&self) -> bool {
        self.soak_water
    }

    pub fn soak_lava(&self) -> bool {
        self.soak_lava
    }

    pub fn soak_fire(&self) -> bool {
        self.soak_fire
    }

    /// Whether absorbers neutralize the given family in this world.
    pub fn soaks(&self, family: FluidFamily) -> bool {
        match family {
            FluidFamily::Water => self.soak_water,
            FluidFamily::Lava => self.soak_lava,
            FluidFamily::Fire => self.soak_fire,
        }
    }

    /// Absorption radius, always at least 1.
    pub fn radius(&self) -> i32 {
        self.radius
    }

    pub fn spread_policy(&self) -> SpreadPolicy {
        self.spread_policy
    }
}

impl std::fmt::Display for WorldConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "enabled={} water={} lava={} fire={} radius={} spread={:?}",
            self.enabled,
            self.soak_water,
            self.soak_lava,
            self.soak_fire,
            self.radius,
            self.spread_policy
        )
    }
}

/// Per-world radius if positive, else global radius if positive, else
/// [`DEFAULT_RADIUS`]. Clamped to [`MAX_RADIUS`].
pub fn resolve_radius(per_world: i64, global: i64) -> i32 {
    [per_world, global]
        .into_iter()
        .find(|r| *r > 0)
        .map_or(DEFAULT_RADIUS, |r| {
            i32::try_from(r.min(i64::from(MAX_RADIUS))).unwrap_or(MAX_RADIUS)
        })
}
