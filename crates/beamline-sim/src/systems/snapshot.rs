//! Snapshot system: builds a `BeamSnapshot` from the arena and active beams.
//!
//! This system is read-only.

use std::collections::BTreeMap;

use beamline_core::components::{Health, Position, TargetTag};
use beamline_core::events::BeamEvent;
use beamline_core::state::{BeamSnapshot, BeamView, TargetView};
use beamline_core::types::{OwnerId, SimTime};

use crate::arena::Arena;
use crate::systems::beams::ActiveBeam;

pub fn build_snapshot(
    arena: &Arena,
    time: &SimTime,
    beams: &BTreeMap<OwnerId, ActiveBeam>,
    events: Vec<BeamEvent>,
) -> BeamSnapshot {
    BeamSnapshot {
        time: *time,
        beams: build_beams(beams),
        targets: build_targets(arena),
        events,
    }
}

fn build_beams(beams: &BTreeMap<OwnerId, ActiveBeam>) -> Vec<BeamView> {
    beams
        .iter()
        .map(|(&owner, beam)| BeamView {
            owner,
            points: beam.frame.path.points.clone(),
            impact_points: beam.frame.impact_points.clone(),
            occupants: beam.frame.occupants.clone(),
            termination: beam.frame.termination,
            bounces: beam.frame.bounces,
            penetrations: beam.frame.penetrations,
        })
        .collect()
}

/// Targets sorted by id for stable output.
fn build_targets(arena: &Arena) -> Vec<TargetView> {
    let mut targets: Vec<TargetView> = arena
        .world()
        .query::<(&TargetTag, &Position, &Health)>()
        .iter()
        .map(|(_, (tag, pos, health))| TargetView {
            id: tag.id,
            position: pos.0,
            health: health.current,
            max_health: health.max,
        })
        .collect();
    targets.sort_by_key(|t| t.id);
    targets
}
