//! Game-object construction
//!
//! The factory is the only place game objects come from. Each constructor
//! generates the sprite, creates the physics body and collider with the right
//! collision filter, computes the spawn position and velocity, and assembles
//! the logical entity, so visual and physics state can never drift apart at
//! birth.
//!
//! The color wheel and the RNG are injected at construction; reruns with the
//! same seed produce the same spawn sequence.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::circle_position;
use crate::color::ColorWheel;
use crate::config::FactoryConfig;
use crate::consts;
use crate::entity::{GameObject, GameObjectKind};
use crate::physics::{
    BodyDef, BodyKind, ENEMY_GROUP, HERO_PROJECTILE_GROUP, PhysicsWorld, exclude_own_category,
};
use crate::sprite;
use crate::ArenaError;

/// Builds ready-to-use game objects with consistent visual/physics coupling
pub struct GameObjectFactory {
    config: FactoryConfig,
    wheel: ColorWheel,
    rng: Pcg32,
}

impl GameObjectFactory {
    pub fn new(config: FactoryConfig, wheel: ColorWheel, seed: u64) -> Self {
        Self {
            config,
            wheel,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &FactoryConfig {
        &self.config
    }

    /// Make an enemy that drifts from its spawn circle toward the origin
    ///
    /// Random color, random sprite size from the configured range, spawn
    /// position at a uniformly random angle on the enemy spawn circle,
    /// velocity proportional to the spawn position and directed inward.
    pub fn make_enemy(&mut self, world: &mut PhysicsWorld) -> Result<GameObject, ArenaError> {
        let color = self.wheel.random_code(&mut self.rng);
        let sprite =
            sprite::filled_circle(self.config.sprite_resolution, self.wheel.components(color));
        let size = self
            .rng
            .random_range(self.config.enemy_size_min..=self.config.enemy_size_max);

        let angle = self.rng.random_range(0.0..360.0);
        let position = circle_position(self.config.enemy_spawn_radius, angle);
        let velocity = -position * self.config.velocity_scale;

        let body = world.create_body(BodyDef {
            kind: BodyKind::Dynamic,
            position,
            velocity,
            radius: size * self.config.body_radius_scale,
            filter: exclude_own_category(ENEMY_GROUP),
        })?;

        log::debug!("spawned enemy at angle {angle:.1} deg, size {size:.2}");
        Ok(GameObject::new(
            GameObjectKind::Enemy,
            color,
            consts::ENEMY_HIT_POINTS,
            body,
            sprite,
            size,
            position,
        ))
    }

    /// Make the hero: stationary at the origin, sprite centered on the body
    pub fn make_hero(&mut self, world: &mut PhysicsWorld) -> Result<GameObject, ArenaError> {
        let color = self.wheel.random_code(&mut self.rng);
        let sprite =
            sprite::filled_circle(self.config.sprite_resolution, self.wheel.components(color));
        let size = consts::HERO_SPRITE_SIZE;

        let body = world.create_body(BodyDef {
            kind: BodyKind::Fixed,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            radius: size * self.config.body_radius_scale,
            filter: exclude_own_category(HERO_PROJECTILE_GROUP),
        })?;

        Ok(GameObject::new(
            GameObjectKind::Hero,
            color,
            consts::HERO_HIT_POINTS,
            body,
            sprite,
            size,
            Vec2::ZERO,
        ))
    }

    /// Make a projectile heading outward toward (`target_x`, `target_y`)
    ///
    /// Spawns on the projectile spawn circle at the angle from the origin to
    /// the target, moving outward along that angle. Projectiles share the
    /// hero's collision category so the two never collide with each other.
    pub fn make_projectile(
        &mut self,
        world: &mut PhysicsWorld,
        target_x: f32,
        target_y: f32,
    ) -> Result<GameObject, ArenaError> {
        let color = self.wheel.random_code(&mut self.rng);
        let sprite =
            sprite::filled_circle(self.config.sprite_resolution, self.wheel.components(color));
        let size = consts::PROJECTILE_SPRITE_SIZE;

        let angle = projectile_angle(target_x, target_y);
        let position = circle_position(self.config.projectile_spawn_radius, angle);
        let velocity = position * self.config.velocity_scale;

        let body = world.create_body(BodyDef {
            kind: BodyKind::Dynamic,
            position,
            velocity,
            radius: size * self.config.body_radius_scale,
            filter: exclude_own_category(HERO_PROJECTILE_GROUP),
        })?;

        log::debug!("fired projectile at angle {angle:.1} deg");
        Ok(GameObject::new(
            GameObjectKind::Projectile,
            color,
            consts::PROJECTILE_HIT_POINTS,
            body,
            sprite,
            size,
            position,
        ))
    }
}

/// Angle in degrees from the origin toward the target, in [0, 360)
///
/// `atan2` hands back a negative angle below the x axis; the correction
/// branch folds it into the conventional 0-360 range.
fn projectile_angle(target_x: f32, target_y: f32) -> f32 {
    let theta = target_y.atan2(target_x).to_degrees();
    if target_y < 0.0 {
        180.0 + (180.0 - (-theta))
    } else {
        theta
    }
}
