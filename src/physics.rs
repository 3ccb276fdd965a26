//! Thin wrapper over the rapier2d physics world
//!
//! The simulation itself is a black box; this module only exposes the handful
//! of operations the lifecycle code needs: create a body with a ball collider
//! and a collision filter, destroy it, read back position and velocity, and
//! advance the pipeline. Bodies are added and removed only through the factory
//! and the spawning algorithms.

use glam::Vec2;
use rapier2d::prelude::*;

use crate::ArenaError;

/// Opaque handle to a body in the physics world
pub type BodyHandle = RigidBodyHandle;

/// Collision category for enemies
pub const ENEMY_GROUP: Group = Group::GROUP_2;
/// Collision category shared by the hero and projectiles
pub const HERO_PROJECTILE_GROUP: Group = Group::GROUP_1;

/// Filter that collides with everything except the body's own category
///
/// Enemies never collide with enemies, and the hero never collides with
/// friendly projectiles.
pub fn exclude_own_category(category: Group) -> InteractionGroups {
    InteractionGroups::new(category, category.complement())
}

/// Whether a body participates in the simulation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    /// Moved by the simulation
    Dynamic,
    /// Pinned in place (the hero)
    Fixed,
}

/// Everything needed to create a body with its single ball collider
#[derive(Debug, Clone)]
pub struct BodyDef {
    pub kind: BodyKind,
    pub position: Vec2,
    pub velocity: Vec2,
    /// Collider radius, world units
    pub radius: f32,
    pub filter: InteractionGroups,
}

/// The shared physics world
///
/// Owned by the game loop and handed to the factory and spawning algorithms
/// by mutable reference; never touched concurrently within a tick.
pub struct PhysicsWorld {
    bodies: RigidBodySet,
    colliders: ColliderSet,
    islands: IslandManager,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    ccd_solver: CCDSolver,
    pipeline: PhysicsPipeline,
    integration_parameters: IntegrationParameters,
    gravity: Vector<f32>,
    shut_down: bool,
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl PhysicsWorld {
    /// Create an empty world with no gravity
    pub fn new() -> Self {
        Self {
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            islands: IslandManager::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            ccd_solver: CCDSolver::new(),
            pipeline: PhysicsPipeline::new(),
            integration_parameters: IntegrationParameters::default(),
            gravity: vector![0.0, 0.0],
            shut_down: false,
        }
    }

    /// Create a body and its ball collider
    ///
    /// Fails only against a torn-down world; that failure is fatal for the
    /// caller's construction and must be propagated.
    pub fn create_body(&mut self, def: BodyDef) -> Result<BodyHandle, ArenaError> {
        if self.shut_down {
            return Err(ArenaError::WorldShutDown);
        }

        let builder = match def.kind {
            BodyKind::Dynamic => RigidBodyBuilder::dynamic(),
            BodyKind::Fixed => RigidBodyBuilder::fixed(),
        };
        let body = builder
            .translation(vector![def.position.x, def.position.y])
            .linvel(vector![def.velocity.x, def.velocity.y])
            .build();
        let handle = self.bodies.insert(body);

        let collider = ColliderBuilder::ball(def.radius)
            .collision_groups(def.filter)
            .build();
        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);

        Ok(handle)
    }

    /// Destroy a body and every collider attached to it
    ///
    /// Callers guarantee each handle is destroyed at most once; the liveness
    /// flag and single-pass removal in the spawners enforce that.
    pub fn destroy_body(&mut self, handle: BodyHandle) {
        let removed = self.bodies.remove(
            handle,
            &mut self.islands,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            true,
        );
        if removed.is_none() {
            log::warn!("destroy_body on unknown handle {handle:?}");
        }
    }

    /// Position of a body, if it still exists
    pub fn body_position(&self, handle: BodyHandle) -> Option<Vec2> {
        self.bodies
            .get(handle)
            .map(|body| Vec2::new(body.translation().x, body.translation().y))
    }

    /// Linear velocity of a body, if it still exists
    pub fn body_velocity(&self, handle: BodyHandle) -> Option<Vec2> {
        self.bodies
            .get(handle)
            .map(|body| Vec2::new(body.linvel().x, body.linvel().y))
    }

    /// Number of live bodies
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Advance the simulation by `dt`
    pub fn step(&mut self, dt: f32) {
        self.integration_parameters.dt = dt;
        self.pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            None,
            &(),
            &(),
        );
    }

    /// Tear the world down; all subsequent body creation fails
    pub fn shutdown(&mut self) {
        self.shut_down = true;
        self.bodies = RigidBodySet::new();
        self.colliders = ColliderSet::new();
        log::info!("physics world shut down");
    }
}
