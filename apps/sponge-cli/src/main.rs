use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use sponge_absorb::{EventRouter, MutationEvent};
use sponge_common::{BlockPos, Material};
use sponge_config::{WorldConfig, WorldConfigRegistry, YamlConfig};
use sponge_kernel::BlockGrid;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sponge-cli", about = "CLI tool for sponge operations")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version info
    Info,
    /// Print the resolved settings for one or more worlds
    Resolve {
        /// YAML configuration file
        #[arg(short, long)]
        config: PathBuf,
        /// World names to resolve
        #[arg(short, long = "world", default_value = "world")]
        worlds: Vec<String>,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Run the placement scenarios against an in-memory world
    Demo {
        /// YAML configuration file; built-in defaults when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// World name used for configuration lookup
        #[arg(short, long, default_value = "world")]
        world: String,
    },
}

#[derive(Serialize)]
struct Resolved<'a> {
    world: &'a str,
    #[serde(flatten)]
    config: WorldConfig,
}

fn load_config(path: &Path) -> anyhow::Result<YamlConfig> {
    let mut config = YamlConfig::load(path)
        .with_context(|| format!("failed to read configuration {}", path.display()))?;
    config.upgrade_legacy();
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("sponge-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("default radius: {}", sponge_config::DEFAULT_RADIUS);
            println!("max radius: {}", sponge_config::MAX_RADIUS);
            println!("config version: {}", sponge_config::CURRENT_CONFIG_VERSION);
        }
        Commands::Resolve {
            config,
            worlds,
            json,
        } => {
            let mut registry = WorldConfigRegistry::new(load_config(&config)?);
            tracing::debug!(?worlds, "resolving world settings");
            for world in &worlds {
                let resolved = Resolved {
                    world: world.as_str(),
                    config: registry.get_or_create(world),
                };
                if json {
                    println!("{}", serde_json::to_string(&resolved)?);
                } else {
                    println!("{}: {}", resolved.world, resolved.config);
                }
            }
        }
        Commands::Demo { config, world } => {
            let source = match config {
                Some(path) => load_config(&path)?,
                None => YamlConfig::empty(),
            };
            let mut router = EventRouter::new(WorldConfigRegistry::new(source));
            let settings = router.registry_mut().get_or_create(&world);
            let r = settings.radius();
            println!("World '{world}': {settings}");

            // Scenario 1: water placed just inside and just outside the radius
            let mut grid = BlockGrid::new(world.as_str());
            grid.fill(BlockPos::ORIGIN, Material::Sponge);
            for distance in [r, r + 1] {
                let pos = BlockPos::new(distance, 0, 0);
                grid.fill(pos, Material::Water);
                let mut event = MutationEvent::placed(pos, Material::Water);
                router.dispatch(&mut grid, &mut event);
                println!(
                    "Place water at distance {distance}: {}",
                    if event.is_cancelled() {
                        "cancelled"
                    } else {
                        "allowed"
                    }
                );
            }

            // Scenario 2: sponge placed among existing water
            let mut grid = BlockGrid::new(world.as_str());
            for pos in [
                BlockPos::new(1, 0, 0),
                BlockPos::new(0, 1, -1),
                BlockPos::new(r + 1, 0, 0),
            ] {
                grid.fill(pos, Material::Water);
            }
            let before = grid.count(Material::Water);
            grid.fill(BlockPos::ORIGIN, Material::Sponge);
            let mut event = MutationEvent::placed(BlockPos::ORIGIN, Material::Sponge);
            router.dispatch(&mut grid, &mut event);
            println!(
                "Place sponge among {before} water blocks: {} remain, {} writes",
                grid.count(Material::Water),
                grid.writes().len()
            );
        }
    }

    Ok(())
}
