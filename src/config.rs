//! Construction-time configuration
//!
//! All recognized options with their defaults. Everything here is settable
//! once, when the factory and spawner are built; nothing reads configuration
//! mid-tick.

use serde::{Deserialize, Serialize};

use crate::consts;

/// Options consumed by [`crate::GameObjectFactory`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactoryConfig {
    /// Radius of the circle enemies spawn on
    pub enemy_spawn_radius: f32,
    /// Radius of the circle projectiles spawn on
    pub projectile_spawn_radius: f32,
    /// Sprite-size to collider-radius conversion factor
    pub body_radius_scale: f32,
    /// Spawn velocity as a fraction of the spawn position
    pub velocity_scale: f32,
    /// Side length in pixels of generated sprites
    pub sprite_resolution: u32,
    /// Enemy sprite size range, world units
    pub enemy_size_min: f32,
    pub enemy_size_max: f32,
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            enemy_spawn_radius: consts::ENEMY_SPAWN_RADIUS,
            projectile_spawn_radius: consts::PROJECTILE_SPAWN_RADIUS,
            body_radius_scale: consts::BODY_RADIUS_SCALE,
            velocity_scale: consts::VELOCITY_SCALE,
            sprite_resolution: consts::SPRITE_RESOLUTION,
            enemy_size_min: consts::ENEMY_SIZE_MIN,
            enemy_size_max: consts::ENEMY_SIZE_MAX,
        }
    }
}

/// Which spawning algorithm the game loop runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SpawnKind {
    #[default]
    Exponential,
    Steady,
}

/// Options consumed by the spawning algorithms
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnConfig {
    pub algorithm: SpawnKind,
    /// Spawn interval for the time-based variant
    pub exponential_interval: f32,
    /// Spawn interval for the death-triggered variant (retained as
    /// configuration; not consulted as a timer)
    pub steady_interval: f32,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            algorithm: SpawnKind::default(),
            exponential_interval: consts::EXPONENTIAL_SPAWN_INTERVAL,
            steady_interval: consts::STEADY_SPAWN_INTERVAL,
        }
    }
}

/// Top-level configuration for the demo loop
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArenaConfig {
    /// Seed for the factory's deterministic RNG
    #[serde(default)]
    pub seed: u64,
    #[serde(default)]
    pub factory: FactoryConfig,
    #[serde(default)]
    pub spawn: SpawnConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let factory = FactoryConfig::default();
        assert_eq!(factory.enemy_spawn_radius, consts::ENEMY_SPAWN_RADIUS);
        assert_eq!(factory.sprite_resolution, consts::SPRITE_RESOLUTION);

        let spawn = SpawnConfig::default();
        assert_eq!(spawn.exponential_interval, consts::EXPONENTIAL_SPAWN_INTERVAL);
        assert_eq!(spawn.steady_interval, consts::STEADY_SPAWN_INTERVAL);
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: ArenaConfig =
            serde_json::from_str(r#"{"seed": 9, "spawn": {"algorithm": "steady", "exponential_interval": 5.0, "steady_interval": 10.0}}"#)
                .unwrap();
        assert_eq!(config.seed, 9);
        assert_eq!(config.spawn.algorithm, SpawnKind::Steady);
        assert_eq!(config.spawn.exponential_interval, 5.0);
        assert_eq!(config.factory.enemy_spawn_radius, consts::ENEMY_SPAWN_RADIUS);
    }
}
