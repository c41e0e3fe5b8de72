//! Beam path tracing: iterative nearest-hit raycasting under range, bounce
//! and penetration budgets.

use glam::Vec3;
use log::warn;

use beamline_core::config::BeamConfig;
use beamline_core::constants::*;
use beamline_core::enums::Termination;
use beamline_core::error::BeamError;
use beamline_core::types::BeamPath;

use crate::geometry::reflect;
use crate::scene::{HitSurface, SceneQuery};

/// Resource limits for one trace.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceBudget {
    pub max_range: f32,
    pub bounce_max: u32,
    pub penetration_max: u32,
}

impl From<&BeamConfig> for TraceBudget {
    fn from(config: &BeamConfig) -> Self {
        Self {
            max_range: config.max_range,
            bounce_max: config.bounce_max,
            penetration_max: config.penetration_max,
        }
    }
}

impl TraceBudget {
    /// Surface hits allowed before the trace is declared degenerate.
    pub fn iteration_cap(&self) -> u32 {
        self.bounce_max
            .saturating_add(self.penetration_max)
            .saturating_add(TRACE_ITERATION_SLACK)
            .min(MAX_TRACE_STEPS)
    }
}

/// Result of tracing one beam for one tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trace {
    pub path: BeamPath,
    /// Path vertices that lie on a surface, in travel order.
    pub impact_points: Vec<Vec3>,
    /// Indices into `path.points` of vertices on a target surface, both
    /// penetrated and blocking.
    pub target_vertices: Vec<usize>,
    pub bounces: u32,
    pub penetrations: u32,
    pub termination: Termination,
}

/// Trace a beam from `origin` along `direction` through `scene`.
///
/// The path always starts at `origin` and never travels farther than
/// `budget.max_range`. Identical inputs against an unchanged scene give an
/// identical trace.
pub fn trace<S: SceneQuery + ?Sized>(
    origin: Vec3,
    direction: Vec3,
    budget: &TraceBudget,
    scene: &S,
) -> Result<Trace, BeamError> {
    if !origin.is_finite() {
        return Err(BeamError::InvalidOrigin);
    }
    let mut dir = direction.try_normalize().ok_or(BeamError::InvalidDirection)?;

    let mut out = Trace {
        path: BeamPath::starting_at(origin),
        ..Default::default()
    };

    if budget.max_range <= 0.0 || !budget.max_range.is_finite() {
        out.termination = Termination::NoRange;
        return Ok(out);
    }

    let cap = budget.iteration_cap();
    let mut surface_hits = 0u32;
    let mut remaining = budget.max_range;
    let mut pos = origin;

    while remaining > 0.0 {
        let probe = remaining.min(PROBE_CAP);

        let Some(hit) = scene.raycast_nearest(pos, dir, probe) else {
            if probe < remaining {
                // Nothing within this probe; keep going without adding a vertex
                pos += dir * probe;
                remaining -= probe;
                continue;
            }
            out.path.push(pos + dir * remaining);
            out.termination = Termination::RangeExhausted;
            return Ok(out);
        };

        if surface_hits >= cap {
            warn!(
                "beam trace hit iteration cap ({cap}) after {} points; truncating",
                out.path.len()
            );
            out.termination = Termination::Degenerate;
            return Ok(out);
        }
        surface_hits += 1;

        out.path.push(hit.point);
        out.impact_points.push(hit.point);
        remaining -= hit.distance.clamp(0.0, probe);

        match hit.surface {
            HitSurface::Target(_) => {
                out.target_vertices.push(out.path.len() - 1);
                if out.penetrations >= budget.penetration_max {
                    out.termination = Termination::PenetrationLimit;
                    return Ok(out);
                }
                out.penetrations += 1;
                pos = hit.point + dir * SURFACE_EPSILON;
            }
            HitSurface::Reflective => {
                if out.bounces >= budget.bounce_max {
                    out.termination = Termination::BounceLimit;
                    return Ok(out);
                }
                let Some(normal) = facing_normal(hit.normal, dir) else {
                    out.termination = Termination::Absorbed;
                    return Ok(out);
                };
                out.bounces += 1;
                dir = reflect(dir, normal).normalize();
                pos = hit.point + normal * SURFACE_EPSILON;
            }
            HitSurface::Opaque => {
                out.termination = Termination::Absorbed;
                return Ok(out);
            }
        }

        // The skip past the surface is part of the drawn path too
        remaining -= SURFACE_EPSILON;
    }

    out.termination = Termination::RangeExhausted;
    Ok(out)
}

/// Unit normal oriented against the incoming ray, or `None` if unusable.
fn facing_normal(normal: Vec3, dir: Vec3) -> Option<Vec3> {
    let n = normal.try_normalize()?;
    Some(if n.dot(dir) > 0.0 { -n } else { n })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::RaycastHit;
    use beamline_core::types::TargetId;

    /// Scene with hits scripted per call, for exercising the loop in isolation.
    struct ScriptedScene {
        hits: std::cell::RefCell<Vec<Option<RaycastHit>>>,
    }

    impl ScriptedScene {
        fn new(mut hits: Vec<Option<RaycastHit>>) -> Self {
            hits.reverse();
            Self {
                hits: std::cell::RefCell::new(hits),
            }
        }
    }

    impl SceneQuery for ScriptedScene {
        fn raycast_nearest(&self, _: Vec3, _: Vec3, _: f32) -> Option<RaycastHit> {
            self.hits.borrow_mut().pop().flatten()
        }

        fn raycast_all(&self, _: Vec3, _: Vec3, _: f32) -> Vec<RaycastHit> {
            Vec::new()
        }
    }

    struct EmptyScene;

    impl SceneQuery for EmptyScene {
        fn raycast_nearest(&self, _: Vec3, _: Vec3, _: f32) -> Option<RaycastHit> {
            None
        }

        fn raycast_all(&self, _: Vec3, _: Vec3, _: f32) -> Vec<RaycastHit> {
            Vec::new()
        }
    }

    fn budget(max_range: f32, bounce_max: u32, penetration_max: u32) -> TraceBudget {
        TraceBudget {
            max_range,
            bounce_max,
            penetration_max,
        }
    }

    #[test]
    fn test_zero_direction_is_rejected() {
        let result = trace(Vec3::ZERO, Vec3::ZERO, &budget(50.0, 0, 0), &EmptyScene);
        assert_eq!(result, Err(BeamError::InvalidDirection));

        let result = trace(Vec3::ZERO, Vec3::new(f32::NAN, 0.0, 1.0), &budget(50.0, 0, 0), &EmptyScene);
        assert_eq!(result, Err(BeamError::InvalidDirection));
    }

    #[test]
    fn test_non_finite_origin_is_rejected() {
        for origin in [Vec3::new(f32::NAN, 0.0, 0.0), Vec3::new(0.0, f32::INFINITY, 0.0)] {
            let result = trace(origin, Vec3::Z, &budget(50.0, 0, 0), &EmptyScene);
            assert_eq!(result, Err(BeamError::InvalidOrigin));
        }
    }

    #[test]
    fn test_zero_range_is_single_point() {
        let origin = Vec3::new(1.0, 2.0, 3.0);
        let out = trace(origin, Vec3::Z, &budget(0.0, 3, 3), &EmptyScene).unwrap();
        assert_eq!(out.path.points, vec![origin]);
        assert_eq!(out.termination, Termination::NoRange);
        assert!(out.impact_points.is_empty());
    }

    #[test]
    fn test_empty_scene_extends_to_range() {
        let out = trace(Vec3::ZERO, Vec3::new(0.0, 0.0, 2.0), &budget(50.0, 0, 0), &EmptyScene).unwrap();
        assert_eq!(out.path.len(), 2);
        assert!((out.path.points[1] - Vec3::new(0.0, 0.0, 50.0)).length() < 1e-4);
        assert_eq!(out.termination, Termination::RangeExhausted);
        assert!(out.impact_points.is_empty());
    }

    #[test]
    fn test_long_range_is_probed_in_steps_without_extra_vertices() {
        let out = trace(Vec3::ZERO, Vec3::X, &budget(350.0, 0, 0), &EmptyScene).unwrap();
        assert_eq!(out.path.len(), 2);
        assert!((out.path.length() - 350.0).abs() < 1e-2);
    }

    #[test]
    fn test_degenerate_normal_absorbs() {
        let scene = ScriptedScene::new(vec![Some(RaycastHit {
            point: Vec3::new(0.0, 0.0, 5.0),
            normal: Vec3::ZERO,
            distance: 5.0,
            surface: HitSurface::Reflective,
        })]);
        let out = trace(Vec3::ZERO, Vec3::Z, &budget(50.0, 3, 0), &scene).unwrap();
        assert_eq!(out.termination, Termination::Absorbed);
        assert_eq!(out.bounces, 0);
        assert_eq!(out.path.len(), 2);
    }

    #[test]
    fn test_penetration_budget_spent_stops_at_target() {
        let hit = |z: f32, id: u32| {
            Some(RaycastHit {
                point: Vec3::new(0.0, 0.0, z),
                normal: Vec3::NEG_Z,
                distance: 1.0,
                surface: HitSurface::Target(TargetId(id)),
            })
        };
        let scene = ScriptedScene::new(vec![hit(1.0, 1), hit(2.0, 2), hit(3.0, 3)]);
        let out = trace(Vec3::ZERO, Vec3::Z, &budget(50.0, 0, 2), &scene).unwrap();
        assert_eq!(out.penetrations, 2);
        assert_eq!(out.termination, Termination::PenetrationLimit);
        assert_eq!(out.path.end(), Some(Vec3::new(0.0, 0.0, 3.0)));
        assert_eq!(out.impact_points.len(), 3);
        assert_eq!(out.target_vertices, vec![1, 2, 3]);
    }

    #[test]
    fn test_iteration_cap_is_bounded() {
        assert_eq!(budget(1.0, 3, 2).iteration_cap(), 7);
        assert_eq!(budget(1.0, u32::MAX, u32::MAX).iteration_cap(), MAX_TRACE_STEPS);
    }
}
