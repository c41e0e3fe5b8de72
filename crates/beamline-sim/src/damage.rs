//! Cooldown-gated damage application for one beam instance.

use std::collections::HashMap;

use glam::Vec3;

use beamline_core::types::TargetId;

use crate::scene::Targets;

/// One damage application made by a scheduler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageHit {
    pub target: TargetId,
    pub amount: f32,
    pub position: Vec3,
    pub remaining_health: f32,
}

/// Per-beam record of when each target was last damaged.
///
/// Lives exactly as long as its beam instance; a new beam starts with an empty
/// record and never inherits cooldowns.
#[derive(Debug, Clone, Default)]
pub struct DamageScheduler {
    last_damage: HashMap<TargetId, f64>,
}

impl DamageScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Damage every live occupant whose cooldown has elapsed, then forget
    /// targets that are no longer live.
    ///
    /// `now - last >= interval` is eligible, so a target damaged at t=0.0 with a
    /// 0.5 s interval is damaged again at exactly t=0.5.
    pub fn apply<T: Targets + ?Sized>(
        &mut self,
        occupants: &[TargetId],
        damage: f32,
        interval: f64,
        now: f64,
        targets: &mut T,
    ) -> Vec<DamageHit> {
        let mut hits = Vec::new();

        for &id in occupants {
            // Destroyed since occupancy was computed: skip quietly
            if !targets.is_alive(id) {
                continue;
            }
            if !self.is_ready(id, interval, now) {
                continue;
            }
            let position = targets.position(id).unwrap_or_default();
            let Some(remaining_health) = targets.take_damage(id, damage) else {
                continue;
            };
            self.last_damage.insert(id, now);
            hits.push(DamageHit {
                target: id,
                amount: damage,
                position,
                remaining_health,
            });
        }

        self.last_damage.retain(|&id, _| targets.is_alive(id));
        hits
    }

    /// Whether `id` may be damaged at `now`.
    pub fn is_ready(&self, id: TargetId, interval: f64, now: f64) -> bool {
        match self.last_damage.get(&id) {
            Some(&last) => now - last >= interval,
            None => true,
        }
    }

    /// Last damage time recorded for `id`.
    pub fn last_damage(&self, id: TargetId) -> Option<f64> {
        self.last_damage.get(&id).copied()
    }

    /// Number of targets currently on cooldown bookkeeping.
    pub fn tracked(&self) -> usize {
        self.last_damage.len()
    }
}
