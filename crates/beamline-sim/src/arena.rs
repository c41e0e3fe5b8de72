//! The hecs-backed scene beams are traced against.
//!
//! `Arena` owns the ECS world of targets and obstacles and implements both
//! collaborator traits the beam engine needs. Dead targets stay in the world
//! until the cleanup system despawns them, but are invisible to ray queries.

use std::collections::HashMap;

use glam::Vec3;
use hecs::{Entity, World};

use beamline_core::components::*;
use beamline_core::enums::SurfaceKind;
use beamline_core::types::TargetId;

use crate::geometry::ray_collider;
use crate::scene::{HitSurface, RaycastHit, SceneQuery, Targets};

#[derive(Default)]
pub struct Arena {
    world: World,
    index: HashMap<TargetId, Entity>,
    next_target_id: u32,
}

impl Arena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Reserve the next target id.
    pub(crate) fn allocate_target_id(&mut self) -> TargetId {
        let id = TargetId(self.next_target_id);
        self.next_target_id += 1;
        id
    }

    pub(crate) fn register_target(&mut self, id: TargetId, entity: Entity) {
        self.index.insert(id, entity);
    }

    pub fn entity_of(&self, id: TargetId) -> Option<Entity> {
        self.index.get(&id).copied()
    }

    /// Remove a target from the world and the id index.
    pub fn despawn_target(&mut self, id: TargetId) -> bool {
        match self.index.remove(&id) {
            Some(entity) => self.world.despawn(entity).is_ok(),
            None => false,
        }
    }

    pub fn live_target_count(&self) -> usize {
        self.world
            .query::<(&TargetTag, &Health)>()
            .iter()
            .filter(|(_, (_, health))| health.current > 0.0)
            .count()
    }

    /// Run `visit` for every collider a ray could hit, skipping dead targets.
    fn for_each_hit(
        &self,
        origin: Vec3,
        dir: Vec3,
        max_distance: f32,
        mut visit: impl FnMut(RaycastHit),
    ) {
        let mut query = self
            .world
            .query::<(&Position, &Collider, &Surface, Option<&TargetTag>, Option<&Health>)>();

        for (_entity, (pos, collider, surface, tag, health)) in query.iter() {
            if health.is_some_and(|h| h.current <= 0.0) {
                continue;
            }
            let Some(shape_hit) = ray_collider(origin, dir, pos.0, collider) else {
                continue;
            };
            if shape_hit.distance.is_nan() || shape_hit.distance > max_distance {
                continue;
            }
            let surface = match (surface.0, tag) {
                (SurfaceKind::Penetrable, Some(tag)) => HitSurface::Target(tag.id),
                (SurfaceKind::Reflective, _) => HitSurface::Reflective,
                // Penetrable without an id cannot be damaged; treat as a wall
                _ => HitSurface::Opaque,
            };
            visit(RaycastHit {
                point: origin + dir * shape_hit.distance,
                normal: shape_hit.normal,
                distance: shape_hit.distance,
                surface,
            });
        }
    }
}

impl SceneQuery for Arena {
    fn raycast_nearest(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
    ) -> Option<RaycastHit> {
        let mut nearest: Option<RaycastHit> = None;
        self.for_each_hit(origin, direction, max_distance, |hit| {
            if nearest.map_or(true, |n| hit.distance < n.distance) {
                nearest = Some(hit);
            }
        });
        nearest
    }

    fn raycast_all(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Vec<RaycastHit> {
        let mut hits = Vec::new();
        self.for_each_hit(origin, direction, max_distance, |hit| hits.push(hit));
        hits
    }
}

impl Targets for Arena {
    fn is_alive(&self, id: TargetId) -> bool {
        self.entity_of(id)
            .and_then(|e| self.world.get::<&Health>(e).ok().map(|h| h.current > 0.0))
            .unwrap_or(false)
    }

    fn take_damage(&mut self, id: TargetId, amount: f32) -> Option<f32> {
        let entity = self.entity_of(id)?;
        let mut health = self.world.get::<&mut Health>(entity).ok()?;
        if health.current <= 0.0 {
            return None;
        }
        health.current = (health.current - amount).max(0.0);
        Some(health.current)
    }

    fn position(&self, id: TargetId) -> Option<Vec3> {
        let entity = self.entity_of(id)?;
        self.world.get::<&Position>(entity).ok().map(|p| p.0)
    }
}
