//! Beam occupancy: every target whose geometry overlaps the traced path.
//!
//! The tracer only needs the next blocking hit to decide how to continue.
//! Damage has to reach everything the corridor touches, so each segment is
//! re-cast with an all-hits query.

use std::collections::HashSet;

use beamline_core::constants::{MIN_SEGMENT_LENGTH, OCCUPANCY_SLACK};
use beamline_core::types::{BeamPath, TargetId};

use crate::scene::{HitSurface, SceneQuery};

/// Targets overlapping any segment of `path`, deduplicated, in the order the
/// beam reaches them.
///
/// `target_vertices` lists the path points that lie on a target surface.
/// Only segments ending on one of those are queried slightly past their end,
/// so the target that ends the segment is not lost to rounding. Other
/// segments stop exactly at the wall, mirror or range end.
pub fn occupants<S: SceneQuery + ?Sized>(
    path: &BeamPath,
    target_vertices: &[usize],
    scene: &S,
) -> Vec<TargetId> {
    let mut seen = HashSet::new();
    let mut found = Vec::new();

    for (index, (start, end)) in path.segments().enumerate() {
        let offset = end - start;
        let length = offset.length();
        if length < MIN_SEGMENT_LENGTH {
            continue;
        }
        let dir = offset / length;

        let slack = if target_vertices.contains(&(index + 1)) {
            OCCUPANCY_SLACK
        } else {
            0.0
        };

        let mut hits = scene.raycast_all(start, dir, length + slack);
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));

        for hit in hits {
            if let HitSurface::Target(id) = hit.surface {
                if seen.insert(id) {
                    found.push(id);
                }
            }
        }
    }

    found
}
