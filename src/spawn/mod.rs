//! Per-tick spawning algorithms
//!
//! A spawning algorithm is the sole entry point the game loop calls for enemy
//! lifecycle: once per tick it may spawn new enemies through its factory,
//! destroys the bodies of dead enemies, disposes them, and returns the updated
//! collection. The contract every implementation upholds:
//!
//! - no body is ever destroyed twice
//! - no dead entity survives into the returned collection
//! - a dead entity's destroy/dispose/remove sequence never interleaves with
//!   anything else

pub mod exponential;
pub mod steady;

pub use exponential::ExponentialSpawn;
pub use steady::SteadySpawn;

use crate::entity::EnemyCollection;
use crate::physics::PhysicsWorld;
use crate::ArenaError;

/// Capability shared by all spawning algorithms
pub trait SpawningAlgorithm {
    /// Advance one tick: spawn, recycle the dead, return the collection
    fn update(
        &mut self,
        enemies: EnemyCollection,
        world: &mut PhysicsWorld,
        dt: f32,
    ) -> Result<EnemyCollection, ArenaError>;
}

/// Accumulating spawn timer
///
/// Fires once the accumulated time exceeds the interval, then subtracts the
/// interval instead of zeroing, so overshoot carries into the next cycle.
/// Fires at most once per tick.
#[derive(Debug, Clone)]
pub struct SpawnTimer {
    interval: f32,
    accumulated: f32,
}

impl SpawnTimer {
    /// Timer starting from zero accumulated time
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            accumulated: 0.0,
        }
    }

    /// Timer starting with a full interval accumulated, so it fires on the
    /// first tick
    pub fn primed(interval: f32) -> Self {
        Self {
            interval,
            accumulated: interval,
        }
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }

    pub fn accumulated(&self) -> f32 {
        self.accumulated
    }

    /// Accumulate `dt`; reports whether the timer fired
    pub fn tick(&mut self, dt: f32) -> bool {
        self.accumulated += dt;
        if self.accumulated > self.interval {
            self.accumulated -= self.interval;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_preserves_overshoot() {
        // interval 1, already primed with a full interval accumulated
        let mut timer = SpawnTimer::primed(1.0);
        assert!(timer.tick(1.5));
        // 2.5 accumulated, minus the interval
        assert!((timer.accumulated() - 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_timer_fires_at_most_once_per_tick() {
        let mut timer = SpawnTimer::new(1.0);
        // 5 intervals worth of time still fires only once
        assert!(timer.tick(5.0));
        assert!((timer.accumulated() - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_timer_does_not_fire_below_interval() {
        let mut timer = SpawnTimer::new(10.0);
        for _ in 0..9 {
            assert!(!timer.tick(1.0));
        }
        assert!((timer.accumulated() - 9.0).abs() < 1e-5);
        assert!(timer.tick(1.5));
    }
}
