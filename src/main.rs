//! Headless demo loop
//!
//! Runs the spawning subsystem against a live physics world for a fixed
//! number of ticks, periodically damaging enemies and firing projectiles so
//! every lifecycle path gets exercised. Pass a JSON config path as the first
//! argument to override the defaults.

use std::error::Error;

use chroma_arena::config::SpawnKind;
use chroma_arena::{
    ArenaConfig, ColorWheel, EnemyCollection, ExponentialSpawn, GameObject, GameObjectFactory,
    PhysicsWorld, SpawningAlgorithm, SteadySpawn, consts,
};

const DEMO_TICKS: u32 = 600;

/// Projectiles expire after this many ticks without hitting anything
const PROJECTILE_LIFETIME: u32 = 120;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)?;
            let config: ArenaConfig = serde_json::from_str(&raw)?;
            log::info!("loaded config from {path}");
            config
        }
        None => ArenaConfig::default(),
    };

    let mut world = PhysicsWorld::new();

    // The spawner owns its own factory; the hero and projectiles come from a
    // second one so the demo can fire mid-run.
    let spawn_factory =
        GameObjectFactory::new(config.factory.clone(), ColorWheel, config.seed);
    let mut gun_factory =
        GameObjectFactory::new(config.factory.clone(), ColorWheel, config.seed.wrapping_add(1));
    let mut hero = gun_factory.make_hero(&mut world)?;

    let mut spawner: Box<dyn SpawningAlgorithm> = match config.spawn.algorithm {
        SpawnKind::Exponential => {
            Box::new(ExponentialSpawn::from_config(spawn_factory, &config.spawn))
        }
        SpawnKind::Steady => Box::new(SteadySpawn::from_config(spawn_factory, &config.spawn)),
    };
    log::info!(
        "running {DEMO_TICKS} ticks with {:?} spawning",
        config.spawn.algorithm
    );

    let mut enemies: EnemyCollection = Vec::new();
    let mut projectiles: Vec<(u32, GameObject)> = Vec::new();

    for tick in 0..DEMO_TICKS {
        world.step(consts::SIM_DT);
        enemies = spawner.update(enemies, &mut world, consts::SIM_DT)?;

        for enemy in &mut enemies {
            enemy.sync_position(&world);
        }
        hero.sync_position(&world);

        // Every 90 ticks, finish off one enemy to exercise recycling
        if tick % 90 == 89 && !enemies.is_empty() {
            let index = tick as usize % enemies.len();
            while enemies[index].is_alive() {
                enemies[index].take_hit();
            }
            log::debug!("tick {tick}: killed enemy {index}");
        }

        // Every 150 ticks, fire a projectile toward the first enemy
        if tick % 150 == 0 {
            if let Some(target) = enemies
                .first()
                .and_then(|enemy| world.body_position(enemy.body()))
            {
                let projectile = gun_factory.make_projectile(&mut world, target.x, target.y)?;
                projectiles.push((tick, projectile));
            }
        }

        // Expire old projectiles: destroy body before disposal, like any
        // other recycled entity
        let mut index = 0;
        while index < projectiles.len() {
            if tick.saturating_sub(projectiles[index].0) < PROJECTILE_LIFETIME {
                projectiles[index].1.sync_position(&world);
                index += 1;
                continue;
            }
            let (_, projectile) = projectiles.remove(index);
            projectile.release(&mut world);
        }

        if tick % 60 == 0 {
            log::info!(
                "tick {tick}: {} enemies, {} projectiles, {} bodies",
                enemies.len(),
                projectiles.len(),
                world.body_count()
            );
        }
    }

    for enemy in enemies {
        enemy.release(&mut world);
    }
    for (_, projectile) in projectiles {
        projectile.release(&mut world);
    }
    hero.release(&mut world);
    world.shutdown();
    log::info!("demo complete");
    Ok(())
}
