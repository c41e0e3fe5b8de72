//! Ray intersection primitives and reflection.
//!
//! All functions take a unit `dir` and report entry hits only: a ray that
//! starts inside (or exactly on) a solid shape does not hit it. This is what
//! lets the tracer step past a penetrated target without re-hitting it.

use glam::Vec3;

use beamline_core::components::Collider;

/// Parallel-ray threshold for plane tests.
const PARALLEL_EPSILON: f32 = 1e-6;

/// Distance along the ray and surface normal of an entry hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeHit {
    pub distance: f32,
    pub normal: Vec3,
}

/// Intersect a ray with any collider centered at `center`.
pub fn ray_collider(origin: Vec3, dir: Vec3, center: Vec3, collider: &Collider) -> Option<ShapeHit> {
    match *collider {
        Collider::Sphere { radius } => ray_sphere(origin, dir, center, radius),
        Collider::Box { half_extents } => {
            ray_aabb(origin, dir, center - half_extents, center + half_extents)
        }
        Collider::Disc { normal, radius } => ray_disc(origin, dir, center, normal, radius),
    }
}

/// Ray-sphere entry intersection.
pub fn ray_sphere(origin: Vec3, dir: Vec3, center: Vec3, radius: f32) -> Option<ShapeHit> {
    let oc = origin - center;
    let c = oc.length_squared() - radius * radius;
    if c <= 0.0 {
        return None;
    }
    let b = oc.dot(dir);
    if b > 0.0 {
        // Outside and pointing away
        return None;
    }
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }
    let t = -b - discriminant.sqrt();
    if !t.is_finite() || t < 0.0 {
        return None;
    }
    let point = origin + dir * t;
    Some(ShapeHit {
        distance: t,
        normal: (point - center) / radius,
    })
}

/// Ray-AABB entry intersection using the slab method.
pub fn ray_aabb(origin: Vec3, dir: Vec3, min: Vec3, max: Vec3) -> Option<ShapeHit> {
    let mut t_enter = f32::NEG_INFINITY;
    let mut t_exit = f32::INFINITY;
    let mut enter_axis = 0;

    for axis in 0..3 {
        let o = origin[axis];
        let d = dir[axis];
        if d.abs() < PARALLEL_EPSILON {
            // Parallel to this slab: must already be between its planes
            if o.is_nan() || o < min[axis] || o > max[axis] {
                return None;
            }
            continue;
        }
        let inv = 1.0 / d;
        let t1 = (min[axis] - o) * inv;
        let t2 = (max[axis] - o) * inv;
        let (near, far) = if t1 < t2 { (t1, t2) } else { (t2, t1) };
        if near > t_enter {
            t_enter = near;
            enter_axis = axis;
        }
        t_exit = t_exit.min(far);
    }

    if !t_enter.is_finite() || t_enter > t_exit || t_enter <= 0.0 {
        return None;
    }

    let mut normal = Vec3::ZERO;
    normal[enter_axis] = -dir[enter_axis].signum();
    Some(ShapeHit {
        distance: t_enter,
        normal,
    })
}

/// Ray-disc intersection. The disc is two-sided and has no thickness.
pub fn ray_disc(origin: Vec3, dir: Vec3, center: Vec3, normal: Vec3, radius: f32) -> Option<ShapeHit> {
    let normal = normal.try_normalize()?;
    let denom = dir.dot(normal);
    if denom.abs() < PARALLEL_EPSILON {
        return None;
    }
    let t = (center - origin).dot(normal) / denom;
    if !t.is_finite() || t <= 0.0 {
        return None;
    }
    let point = origin + dir * t;
    if point.distance_squared(center) > radius * radius {
        return None;
    }
    Some(ShapeHit { distance: t, normal })
}

/// Mirror `dir` about the plane with unit normal `normal`: d' = d - 2(d·n)n
#[inline]
pub fn reflect(dir: Vec3, normal: Vec3) -> Vec3 {
    dir - 2.0 * dir.dot(normal) * normal
}
