use sponge_common::Material;
use sponge_config::WorldConfig;

/// Decides which materials an absorber neutralizes in a world.
pub struct AbsorptionRule;

impl AbsorptionRule {
    /// True if `material` belongs to a family the world soaks up.
    /// Always false in a disabled world.
    pub fn is_absorbable(config: &WorldConfig, material: Material) -> bool {
        config.enabled() && material.family().is_some_and(|f| config.soaks(f))
    }

    pub fn is_sponge(material: Material) -> bool {
        material.is_sponge()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sponge_config::{WorldConfigRegistry, YamlConfig};

    const ALL: [Material; 11] = [
        Material::Air,
        Material::Water,
        Material::StationaryWater,
        Material::Lava,
        Material::StationaryLava,
        Material::Fire,
        Material::Sponge,
        Material::Stone,
        Material::Sand,
        Material::Planks,
        Material::Other(42),
    ];

    fn config(yaml: &str) -> WorldConfig {
        WorldConfigRegistry::new(YamlConfig::parse(yaml).unwrap()).get_or_create("world")
    }

    #[test]
    fn disabled_world_absorbs_nothing() {
        let c = config("enabled: false\nsoak_water: true\nsoak_lava: true\nsoak_fire: true\n");
        for m in ALL {
            assert!(!AbsorptionRule::is_absorbable(&c, m), "{m:?}");
        }
    }

    #[test]
    fn no_soak_flags_absorbs_nothing() {
        let c = config("soak_water: false\nsoak_lava: false\nsoak_fire: false\n");
        for m in ALL {
            assert!(!AbsorptionRule::is_absorbable(&c, m), "{m:?}");
        }
    }

    #[test]
    fn water_only() {
        let c = config("soak_water: true\n");
        assert!(AbsorptionRule::is_absorbable(&c, Material::Water));
        assert!(AbsorptionRule::is_absorbable(&c, Material::StationaryWater));
        assert!(!AbsorptionRule::is_absorbable(&c, Material::Lava));
        assert!(!AbsorptionRule::is_absorbable(&c, Material::StationaryLava));
        assert!(!AbsorptionRule::is_absorbable(&c, Material::Fire));
    }

    #[test]
    fn every_family_enabled() {
        let c = config("soak_water: true\nsoak_lava: true\nsoak_fire: true\n");
        let absorbable: Vec<Material> = ALL
            .into_iter()
            .filter(|m| AbsorptionRule::is_absorbable(&c, *m))
            .collect();
        assert_eq!(
            absorbable,
            vec![
                Material::Water,
                Material::StationaryWater,
                Material::Lava,
                Material::StationaryLava,
                Material::Fire,
            ]
        );
    }

    #[test]
    fn sponge_is_never_absorbable() {
        let c = config("soak_water: true\nsoak_lava: true\nsoak_fire: true\n");
        assert!(AbsorptionRule::is_sponge(Material::Sponge));
        assert!(!AbsorptionRule::is_absorbable(&c, Material::Sponge));
    }
}
