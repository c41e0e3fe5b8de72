//! Target wander movement.
//!
//! Live targets drift along their heading and pick a new one every few
//! seconds, or straight away when they stray past the arena bound.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use beamline_core::components::{Health, Position, Wander};
use beamline_core::constants::{DT, TARGET_WANDER_BOUND};

use crate::world_setup::random_heading;

pub fn run(world: &mut World, rng: &mut ChaCha8Rng, now: f64) {
    for (_entity, (pos, wander, health)) in
        world.query_mut::<(&mut Position, &mut Wander, Option<&Health>)>()
    {
        if health.is_some_and(|h| h.current <= 0.0) {
            continue;
        }

        pos.0 += wander.heading * wander.speed * DT as f32;

        let out_x = pos.0.x.abs() > TARGET_WANDER_BOUND;
        let out_z = pos.0.z.abs() > TARGET_WANDER_BOUND;

        if out_x || out_z || now - wander.last_change > wander.change_interval {
            let mut heading = random_heading(rng);
            // Past the bound, head back in on every offending axis
            if out_x && heading.x * pos.0.x > 0.0 {
                heading.x = -heading.x;
            }
            if out_z && heading.z * pos.0.z > 0.0 {
                heading.z = -heading.z;
            }
            wander.heading = heading;
            wander.last_change = now;
        }
    }
}
