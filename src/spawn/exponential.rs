//! Time-based spawning with death replacement
//!
//! Population grows by one every timer fire and holds steady across deaths:
//! every recycled enemy is replaced immediately, so only the timer moves the
//! population.

use crate::config::SpawnConfig;
use crate::consts;
use crate::entity::EnemyCollection;
use crate::factory::GameObjectFactory;
use crate::physics::PhysicsWorld;
use crate::spawn::{SpawnTimer, SpawningAlgorithm};
use crate::ArenaError;

/// Variant A: exponential/time-based spawn
pub struct ExponentialSpawn {
    timer: SpawnTimer,
    factory: GameObjectFactory,
}

impl ExponentialSpawn {
    /// Default spawn interval
    pub fn new(factory: GameObjectFactory) -> Self {
        Self::with_interval(factory, consts::EXPONENTIAL_SPAWN_INTERVAL)
    }

    /// Timer starts primed, so the first tick already spawns
    pub fn with_interval(factory: GameObjectFactory, interval: f32) -> Self {
        Self {
            timer: SpawnTimer::primed(interval),
            factory,
        }
    }

    pub fn from_config(factory: GameObjectFactory, config: &SpawnConfig) -> Self {
        Self::with_interval(factory, config.exponential_interval)
    }

    pub fn timer(&self) -> &SpawnTimer {
        &self.timer
    }
}

impl SpawningAlgorithm for ExponentialSpawn {
    fn update(
        &mut self,
        mut enemies: EnemyCollection,
        world: &mut PhysicsWorld,
        dt: f32,
    ) -> Result<EnemyCollection, ArenaError> {
        if self.timer.tick(dt) {
            enemies.push(self.factory.make_enemy(world)?);
            log::debug!("timer spawn, population {}", enemies.len());
        }

        // Single pass: each dead enemy is destroyed, disposed, removed, and
        // replaced exactly once. Replacements are appended alive, so the pass
        // never reprocesses them.
        let mut index = 0;
        while index < enemies.len() {
            if enemies[index].is_alive() {
                index += 1;
                continue;
            }
            let dead = enemies.remove(index);
            dead.release(world);
            enemies.push(self.factory.make_enemy(world)?);
        }

        Ok(enemies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorWheel;
    use crate::config::FactoryConfig;

    fn build(seed: u64, interval: f32) -> (PhysicsWorld, ExponentialSpawn) {
        let factory = GameObjectFactory::new(FactoryConfig::default(), ColorWheel, seed);
        (PhysicsWorld::new(), ExponentialSpawn::with_interval(factory, interval))
    }

    fn populate(
        spawner: &mut ExponentialSpawn,
        world: &mut PhysicsWorld,
        count: usize,
    ) -> EnemyCollection {
        (0..count)
            .map(|_| spawner.factory.make_enemy(world).unwrap())
            .collect()
    }

    #[test]
    fn test_primed_timer_grows_population_by_one() {
        let (mut world, mut spawner) = build(1, 15.0);
        let enemies = populate(&mut spawner, &mut world, 3);

        // accumulated starts at the interval, so any positive dt fires
        let enemies = spawner.update(enemies, &mut world, 0.01).unwrap();
        assert_eq!(enemies.len(), 4);
        assert_eq!(world.body_count(), 4);
    }

    #[test]
    fn test_overshoot_scenario() {
        let (mut world, mut spawner) = build(2, 1.0);

        let enemies = spawner.update(Vec::new(), &mut world, 1.5).unwrap();
        // 1 + 1.5 = 2.5 > 1: fires once, spawns one, keeps the overshoot
        assert_eq!(enemies.len(), 1);
        assert!((spawner.timer().accumulated() - 1.5).abs() < 1e-5);
    }

    #[test]
    fn test_death_spawns_replacement() {
        let (mut world, mut spawner) = build(3, 100.0);
        let enemies = populate(&mut spawner, &mut world, 3);

        // First update fires the primed timer: 4 enemies
        let mut enemies = spawner.update(enemies, &mut world, 0.01).unwrap();
        assert_eq!(enemies.len(), 4);

        // Kill one; the next update recycles it and spawns a replacement,
        // with no timer fire on the way
        while enemies[1].is_alive() {
            enemies[1].take_hit();
        }
        let enemies = spawner.update(enemies, &mut world, 0.01).unwrap();
        assert_eq!(enemies.len(), 4);
        assert_eq!(world.body_count(), 4);
        assert!(enemies.iter().all(|enemy| enemy.is_alive()));
    }

    #[test]
    fn test_multiple_deaths_all_replaced() {
        let (mut world, mut spawner) = build(4, 100.0);
        let mut enemies = populate(&mut spawner, &mut world, 5);
        spawner.timer = SpawnTimer::new(100.0); // unprimed: isolate the death branch

        for index in [0, 2, 4] {
            while enemies[index].is_alive() {
                enemies[index].take_hit();
            }
        }
        let enemies = spawner.update(enemies, &mut world, 0.01).unwrap();
        assert_eq!(enemies.len(), 5);
        assert_eq!(world.body_count(), 5);
        assert!(enemies.iter().all(|enemy| enemy.is_alive()));
    }
}
