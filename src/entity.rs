//! Logical game objects
//!
//! A game object ties together a physics body, a generated sprite, and the
//! gameplay state (hit points, liveness). The three variants share one flat
//! struct tagged by [`GameObjectKind`]; collection-wide operations only need
//! the liveness flag, the body handle, and release.
//!
//! Ownership: each object exclusively owns its body handle and sprite. The
//! body must be destroyed before the object is dropped, which is what
//! [`GameObject::release`] does; consuming `self` makes release exactly-once.

use glam::Vec2;

use crate::color::ColorCode;
use crate::physics::{BodyHandle, PhysicsWorld};
use crate::sprite::Sprite;

/// Variant tag for the flat game-object struct
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameObjectKind {
    Hero,
    Enemy,
    Projectile,
}

/// The enemy collection handed to and returned by spawning algorithms
pub type EnemyCollection = Vec<GameObject>;

/// A hero, enemy, or projectile bound to a physics body and a sprite
#[derive(Debug)]
pub struct GameObject {
    kind: GameObjectKind,
    color: ColorCode,
    hit_points: u32,
    alive: bool,
    body: BodyHandle,
    sprite: Sprite,
    /// Sprite size in world units
    size: f32,
    /// Lower-left corner of the sprite; mirrors the body, offset so the
    /// sprite is centered on it
    position: Vec2,
}

impl GameObject {
    /// Assemble an object around an already-created body
    ///
    /// `body_position` is where the body was just created; the sprite offset
    /// is applied immediately so the object is renderable before the first
    /// position sync.
    pub(crate) fn new(
        kind: GameObjectKind,
        color: ColorCode,
        hit_points: u32,
        body: BodyHandle,
        sprite: Sprite,
        size: f32,
        body_position: Vec2,
    ) -> Self {
        Self {
            kind,
            color,
            hit_points,
            alive: true,
            body,
            sprite,
            size,
            position: body_position - Vec2::splat(size / 2.0),
        }
    }

    pub fn kind(&self) -> GameObjectKind {
        self.kind
    }

    pub fn color(&self) -> ColorCode {
        self.color
    }

    pub fn hit_points(&self) -> u32 {
        self.hit_points
    }

    /// Liveness flag; dead objects are recycled by the next spawner update
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn body(&self) -> BodyHandle {
        self.body
    }

    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    /// Sprite size in world units
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Current sprite position (lower-left corner)
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Register one hit; the object dies when hit points reach zero
    ///
    /// Called by external collision logic. Dead objects ignore further hits,
    /// so a body is never queued for destruction twice.
    pub fn take_hit(&mut self) {
        if !self.alive {
            return;
        }
        self.hit_points = self.hit_points.saturating_sub(1);
        if self.hit_points == 0 {
            self.alive = false;
        }
    }

    /// Mirror the physics body's position, keeping the sprite centered on it
    ///
    /// Invoked once per tick by the external update step.
    pub fn sync_position(&mut self, world: &PhysicsWorld) {
        if let Some(body_position) = world.body_position(self.body) {
            self.position = body_position - Vec2::splat(self.size / 2.0);
        }
    }

    /// Destroy the physics body, then drop the object and its sprite
    ///
    /// The body is removed from the world before any owned resource goes
    /// away, so the world never retains a dangling fixture.
    pub fn release(self, world: &mut PhysicsWorld) {
        world.destroy_body(self.body);
        log::debug!("released {:?} (color {})", self.kind, self.color);
        // sprite dropped with self
    }
}
