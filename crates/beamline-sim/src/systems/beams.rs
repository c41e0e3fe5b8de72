//! Beam system: advances every active beam by one tick.

use std::collections::BTreeMap;

use glam::Vec3;
use log::{debug, warn};

use beamline_core::enums::Termination;
use beamline_core::events::BeamEvent;
use beamline_core::types::OwnerId;

use crate::arena::Arena;
use crate::controller::{BeamController, BeamFrame};

/// A firing beam and where its emitter currently is.
#[derive(Debug, Clone)]
pub struct ActiveBeam {
    pub controller: BeamController,
    pub origin: Vec3,
    pub direction: Vec3,
    /// Result of the most recent tick.
    pub frame: BeamFrame,
}

impl ActiveBeam {
    pub fn new(controller: BeamController, origin: Vec3, direction: Vec3) -> Self {
        Self {
            controller,
            origin,
            direction,
            frame: BeamFrame::default(),
        }
    }
}

/// Update beams in owner order, so damage to shared targets is applied in a
/// stable sequence.
pub fn run(
    arena: &mut Arena,
    beams: &mut BTreeMap<OwnerId, ActiveBeam>,
    now: f64,
    events: &mut Vec<BeamEvent>,
) {
    for (&owner, beam) in beams.iter_mut() {
        let frame = match beam.controller.update(arena, beam.origin, beam.direction, now) {
            Ok(frame) => frame,
            Err(err) => {
                warn!("beam of owner {} skipped this tick: {err}", owner.0);
                beam.frame = BeamFrame::default();
                continue;
            }
        };

        if frame.termination == Termination::Degenerate {
            events.push(BeamEvent::TraceTruncated {
                owner,
                points: frame.path.len(),
            });
        }

        for hit in &frame.hits {
            debug!(
                "owner {} hit target {} for {} ({} left)",
                owner.0, hit.target.0, hit.amount, hit.remaining_health
            );
            events.push(BeamEvent::DamageApplied {
                owner,
                target: hit.target,
                amount: hit.amount,
                position: hit.position,
                remaining_health: hit.remaining_health,
            });
        }

        beam.frame = frame;
    }
}
