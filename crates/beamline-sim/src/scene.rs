//! Collaborator interfaces the beam engine consumes.
//!
//! The beam never owns geometry or targets. It asks a `SceneQuery` where rays
//! land and goes through `Targets` for liveness and damage.

use glam::Vec3;

use beamline_core::types::TargetId;

/// What a ray struck, classified by capability rather than concrete type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitSurface {
    /// A live damageable target; the beam may penetrate it.
    Target(TargetId),
    /// A surface the beam may bounce off.
    Reflective,
    /// Anything else. Absorbs the beam.
    Opaque,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaycastHit {
    pub point: Vec3,
    /// Unit surface normal at `point`. Orientation relative to the ray is not guaranteed.
    pub normal: Vec3,
    /// Distance from the ray origin to `point`.
    pub distance: f32,
    pub surface: HitSurface,
}

/// Read-only ray queries against the scene's collidable geometry.
///
/// `direction` is unit length. Rays starting inside a collider do not report
/// that collider. Hits farther than `max_distance` are not reported.
pub trait SceneQuery {
    /// The closest hit along the ray, if any.
    fn raycast_nearest(&self, origin: Vec3, direction: Vec3, max_distance: f32)
        -> Option<RaycastHit>;

    /// Every hit along the ray, in no particular order.
    fn raycast_all(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Vec<RaycastHit>;
}

/// Liveness and damage capability of targets, keyed by stable id.
pub trait Targets {
    fn is_alive(&self, id: TargetId) -> bool;

    /// Apply `amount` damage. Returns the remaining health, or `None` when the
    /// target is already dead or no longer exists.
    fn take_damage(&mut self, id: TargetId, amount: f32) -> Option<f32>;

    fn position(&self, id: TargetId) -> Option<Vec3>;
}
