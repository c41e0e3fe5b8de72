//! Entity spawn factories for populating an arena.

use glam::Vec3;
use hecs::EntityBuilder;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use beamline_core::components::*;
use beamline_core::constants::*;
use beamline_core::enums::SurfaceKind;
use beamline_core::types::TargetId;

use crate::arena::Arena;

/// Spawn a damageable sphere target. With `wander`, it starts moving on the
/// next movement tick.
pub fn spawn_target(
    arena: &mut Arena,
    rng: &mut ChaCha8Rng,
    position: Vec3,
    radius: f32,
    max_health: f32,
    wander: bool,
) -> TargetId {
    let id = arena.allocate_target_id();
    let mut builder = EntityBuilder::new();
    builder
        .add(TargetTag { id })
        .add(Position(position))
        .add(Collider::Sphere { radius })
        .add(Surface(SurfaceKind::Penetrable))
        .add(Health {
            current: max_health,
            max: max_health,
        });
    if wander {
        builder.add(Wander {
            heading: random_heading(rng),
            speed: TARGET_MOVE_SPEED,
            change_interval: TARGET_CHANGE_DIRECTION_SECS,
            last_change: 0.0,
        });
    }
    let entity = arena.world_mut().spawn(builder.build());
    arena.register_target(id, entity);
    id
}

/// Scatter `count` default wandering targets across the spawn area.
pub fn spawn_random_targets(arena: &mut Arena, rng: &mut ChaCha8Rng, count: u32) -> Vec<TargetId> {
    (0..count)
        .map(|_| {
            let position = Vec3::new(
                rng.gen_range(-TARGET_SPAWN_EXTENT..TARGET_SPAWN_EXTENT),
                TARGET_SPAWN_HEIGHT,
                rng.gen_range(-TARGET_SPAWN_EXTENT..TARGET_SPAWN_EXTENT),
            );
            spawn_target(arena, rng, position, TARGET_RADIUS, TARGET_MAX_HEALTH, true)
        })
        .collect()
}

/// Spawn static, non-damageable geometry.
pub fn spawn_obstacle(
    arena: &mut Arena,
    position: Vec3,
    collider: Collider,
    kind: SurfaceKind,
) -> hecs::Entity {
    // Obstacles have no TargetTag, so a penetrable kind would make no sense
    let kind = match kind {
        SurfaceKind::Penetrable => SurfaceKind::Opaque,
        other => other,
    };
    arena
        .world_mut()
        .spawn((Position(position), collider, Surface(kind)))
}

/// Four reflective walls enclosing the square arena.
pub fn spawn_arena_walls(arena: &mut Arena) {
    let offset = ARENA_HALF_EXTENT + ARENA_WALL_THICKNESS / 2.0;
    let span = ARENA_HALF_EXTENT + ARENA_WALL_THICKNESS;
    let half_height = ARENA_WALL_HEIGHT / 2.0;
    let half_thickness = ARENA_WALL_THICKNESS / 2.0;

    let walls = [
        (Vec3::new(offset, half_height, 0.0), Vec3::new(half_thickness, half_height, span)),
        (Vec3::new(-offset, half_height, 0.0), Vec3::new(half_thickness, half_height, span)),
        (Vec3::new(0.0, half_height, offset), Vec3::new(span, half_height, half_thickness)),
        (Vec3::new(0.0, half_height, -offset), Vec3::new(span, half_height, half_thickness)),
    ];

    for (center, half_extents) in walls {
        spawn_obstacle(
            arena,
            center,
            Collider::Box { half_extents },
            SurfaceKind::Reflective,
        );
    }
}

/// Uniformly random unit heading on the horizontal plane.
pub fn random_heading(rng: &mut ChaCha8Rng) -> Vec3 {
    loop {
        let heading = Vec3::new(rng.gen_range(-1.0..1.0), 0.0, rng.gen_range(-1.0..1.0));
        if let Some(unit) = heading.try_normalize() {
            return unit;
        }
    }
}
