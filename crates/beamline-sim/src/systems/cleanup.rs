//! Cleanup system: removes destroyed targets from the arena.

use glam::Vec3;
use log::{debug, info};

use beamline_core::components::{Health, Position, TargetTag};
use beamline_core::events::BeamEvent;
use beamline_core::types::TargetId;

use crate::arena::Arena;

/// Despawn every target at zero health.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(
    arena: &mut Arena,
    despawn_buffer: &mut Vec<(TargetId, Vec3)>,
    events: &mut Vec<BeamEvent>,
) {
    despawn_buffer.clear();

    for (_entity, (tag, pos, health)) in arena
        .world_mut()
        .query_mut::<(&TargetTag, &Position, &Health)>()
    {
        if health.current <= 0.0 {
            despawn_buffer.push((tag.id, pos.0));
        }
    }

    if despawn_buffer.is_empty() {
        return;
    }

    for (id, position) in despawn_buffer.drain(..) {
        if arena.despawn_target(id) {
            debug!("target {} destroyed at {position}", id.0);
            events.push(BeamEvent::TargetDestroyed {
                target: id,
                position,
            });
        }
    }

    if arena.live_target_count() == 0 {
        info!("all targets destroyed");
        events.push(BeamEvent::TargetsCleared);
    }
}
