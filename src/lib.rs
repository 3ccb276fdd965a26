//! Chroma Arena - enemy spawning and game-object lifecycle core
//!
//! Core modules:
//! - `color`: palette lookups for generated sprites
//! - `sprite`: generated filled-circle sprite images
//! - `physics`: thin wrapper over the rapier2d world (bodies, colliders, filters)
//! - `entity`: logical game objects (hero, enemy, projectile) owning a body and a sprite
//! - `factory`: fully-initialized game-object construction
//! - `spawn`: per-tick spawning algorithms and dead-entity recycling
//!
//! Rendering, input, and asset loading are external collaborators; this crate
//! only decides when entities enter the world and tears them down in lockstep
//! with their physics bodies.

pub mod color;
pub mod config;
pub mod entity;
pub mod factory;
pub mod physics;
pub mod spawn;
pub mod sprite;

pub use color::{ColorCode, ColorWheel};
pub use config::{ArenaConfig, FactoryConfig, SpawnConfig};
pub use entity::{EnemyCollection, GameObject, GameObjectKind};
pub use factory::GameObjectFactory;
pub use physics::{BodyDef, BodyHandle, BodyKind, PhysicsWorld};
pub use spawn::{ExponentialSpawn, SpawnTimer, SpawningAlgorithm, SteadySpawn};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep used by the demo loop (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Radius of the circle enemies spawn on, world units from the origin
    pub const ENEMY_SPAWN_RADIUS: f32 = 10.0;
    /// Radius of the circle projectiles spawn on
    pub const PROJECTILE_SPAWN_RADIUS: f32 = 1.0;
    /// Sprite-size to physics-collider-radius conversion factor
    pub const BODY_RADIUS_SCALE: f32 = 0.5;
    /// Spawn velocity magnitude as a fraction of the spawn position
    pub const VELOCITY_SCALE: f32 = 0.1;

    /// Side length in pixels of generated sprite images
    pub const SPRITE_RESOLUTION: u32 = 300;
    /// Enemy sprite size range, world units
    pub const ENEMY_SIZE_MIN: f32 = 0.25;
    pub const ENEMY_SIZE_MAX: f32 = 0.75;
    /// Hero sprite size, world units
    pub const HERO_SPRITE_SIZE: f32 = 0.75;
    /// Projectile sprite size, world units
    pub const PROJECTILE_SPRITE_SIZE: f32 = 0.2;

    /// Starting hit points per variant
    pub const ENEMY_HIT_POINTS: u32 = 3;
    pub const HERO_HIT_POINTS: u32 = 15;
    pub const PROJECTILE_HIT_POINTS: u32 = 1;

    /// Default spawn intervals, simulation time units
    pub const EXPONENTIAL_SPAWN_INTERVAL: f32 = 15.0;
    pub const STEADY_SPAWN_INTERVAL: f32 = 10.0;
}

/// Point on a circle of the given radius at the given angle in degrees
#[inline]
pub fn circle_position(radius: f32, angle_degrees: f32) -> Vec2 {
    let theta = angle_degrees.to_radians();
    Vec2::new(radius * theta.cos(), radius * theta.sin())
}

/// Errors surfaced by world mutation
///
/// Body creation against a torn-down world is fatal and unrecoverable; it is
/// propagated to the caller rather than retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArenaError {
    /// The physics world was shut down before the operation ran
    WorldShutDown,
}

impl std::fmt::Display for ArenaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArenaError::WorldShutDown => {
                write!(f, "physics world has been shut down")
            }
        }
    }
}

impl std::error::Error for ArenaError {}
